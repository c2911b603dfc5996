use std::iter::Enumerate;
use std::str::Lines;

use crate::error::ParseError;
use crate::section::Section;

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lines: Enumerate<Lines<'a>>,
    sections: Vec<Section>,
    // Index into `sections` of the most recent header.
    current: Option<usize>,
}

/// What a single line holds once trimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment,
    Section(&'a str),
    Pair(&'a str, &'a str),
    /// Not a header and no `=` to split on.
    Invalid(&'a str),
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            sections: Vec::with_capacity(16),
            current: None,
        }
    }
}

impl Parser<'_> {
    /// Consumes every line and returns the sections in the order they first appeared.
    pub fn into_sections(mut self) -> Result<Vec<Section>, ParseError> {
        while let Some((i, raw)) = self.lines.next() {
            let line_number = i + 1;

            match classify(raw) {
                Line::Blank | Line::Comment => {}
                Line::Section("") => return Err(ParseError::SectionNameEmpty { line_number }),
                Line::Section(name) => self.open_section(name),
                Line::Pair(key, value) => self.insert_pair(line_number, key, value)?,
                Line::Invalid(line) => {
                    return Err(ParseError::Syntax {
                        line_number,
                        line: line.to_owned(),
                    });
                }
            }
        }

        Ok(self.sections)
    }

    /// Make `name` the current section, creating it on first sight.
    fn open_section(&mut self, name: &str) {
        let i = if let Some(i) = self
            .sections
            .iter()
            .position(|section| section.name() == name)
        {
            // Repeated headers merge into the first one.
            tracing::debug!(section = name, "reopening section");
            i
        } else {
            tracing::debug!(section = name, "opening section");
            self.sections.push(Section::new(name.to_owned()));
            self.sections.len() - 1
        };

        self.current = Some(i);
    }

    fn insert_pair(&mut self, line_number: usize, key: &str, value: &str) -> Result<(), ParseError> {
        let section = self
            .current
            .and_then(|i| self.sections.get_mut(i))
            .ok_or(ParseError::PairOutsideSection { line_number })?;

        tracing::trace!(section = section.name(), key, value, "storing pair");

        if let Some(previous) = section.insert(key.to_owned(), value.to_owned()) {
            tracing::debug!(
                section = section.name(),
                key,
                previous = %previous,
                line_number,
                "key redefined, later value wins"
            );
        }

        Ok(())
    }
}

pub(crate) fn classify(raw: &str) -> Line<'_> {
    let line = trim(raw);

    if line.is_empty() {
        return Line::Blank;
    }

    if line.starts_with(';') {
        return Line::Comment;
    }

    if let Some(inner) = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return Line::Section(trim(inner));
    }

    // Only the first `=` splits; the value may contain more.
    match line.split_once('=') {
        Some((key, value)) => Line::Pair(trim(key), trim(value)),
        None => Line::Invalid(line),
    }
}

/// Strip spaces and tabs only; other whitespace is part of the text.
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c == ' ' || c == '\t')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_lines() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify(" \t "), Line::Blank);
        assert_eq!(classify("  ; a comment = with equals"), Line::Comment);
        assert_eq!(classify("\t[ Section1 ]  "), Line::Section("Section1"));
        assert_eq!(classify("[]"), Line::Section(""));
        assert_eq!(classify(" key =  value "), Line::Pair("key", "value"));
        assert_eq!(classify("key="), Line::Pair("key", ""));
        assert_eq!(classify("   just words  "), Line::Invalid("just words"));
    }

    #[test]
    fn split_on_first_equal() {
        assert_eq!(classify("url = a=b=c"), Line::Pair("url", "a=b=c"));
    }

    #[test]
    fn trim_keeps_other_whitespace() {
        assert_eq!(trim("\t a b \t"), "a b");
        assert_eq!(trim("\u{a0}x\u{a0}"), "\u{a0}x\u{a0}");
        assert_eq!(trim(" \x0b "), "\x0b");
    }

    #[test]
    fn lone_bracket_is_not_a_header() {
        assert_eq!(classify("[Section"), Line::Invalid("[Section"));
        assert_eq!(classify("[a] = b"), Line::Pair("[a]", "b"));
    }

    #[test]
    fn reopened_section_merges() {
        let sections = Parser::new("[a]\nx = 1\n[b]\ny = 2\n[a]\nz = 3\n")
            .into_sections()
            .expect("expected hardcoded text to parse");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].name(), "a");
        assert_eq!(sections[0].get("x"), Some("1"));
        assert_eq!(sections[0].get("z"), Some("3"));
        assert_eq!(sections[1].get("y"), Some("2"));
    }

    #[test]
    fn errors_carry_line_numbers() {
        let result = Parser::new("[a]\nx = 1\n\nbroken\n").into_sections();
        assert!(matches!(
            result,
            Err(ParseError::Syntax { line_number: 4, ref line }) if line == "broken"
        ));

        let result = Parser::new("; header comes later\nx = 1\n[a]\n").into_sections();
        assert!(matches!(
            result,
            Err(ParseError::PairOutsideSection { line_number: 2 })
        ));

        let result = Parser::new("[a]\n[  ]\n").into_sections();
        assert!(matches!(
            result,
            Err(ParseError::SectionNameEmpty { line_number: 2 })
        ));
    }

    #[test]
    fn bare_word_before_header_is_syntax_error() {
        let result = Parser::new("orphan\n[a]\n").into_sections();
        assert!(matches!(result, Err(ParseError::Syntax { line_number: 1, .. })));
    }
}
