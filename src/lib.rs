#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

mod error;
mod parser;
mod section;
mod value;

use std::borrow::Cow;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::{char, fs};

pub use error::{ConversionError, LookupError, ParseError};
pub use parser::Parser;
pub use section::{Entry, Section};
pub use value::FromValue;

/// Byte Order Mark (BOM) is used to signal the endianness of an encoding. The order `0xFF 0xFE`
/// strongly suggests that the encoding is using little-endian byte order.
///
/// <https://en.wikipedia.org/wiki/Byte_order_mark>
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

/// A parsed INI document. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ini {
    sections: Vec<Section>,
}

impl Ini {
    /// Parse the file at `path`. The file is closed before this returns.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Open`] if the file cannot be opened, otherwise any error from
    /// [`Ini::from_reader`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening INI file");

        let mut file = fs::File::open(path).map_err(|source| ParseError::Open {
            path: path.to_owned(),
            source,
        })?;

        Self::from_reader(&mut file)
    }

    /// # Errors
    ///
    /// Returns [`ParseError::Read`] if reading fails, otherwise any error from [`Ini::parse`].
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, ParseError> {
        let mut buffer = Vec::with_capacity(4096);
        reader
            .read_to_end(&mut buffer)
            .map_err(|source| ParseError::Read { source })?;

        Self::parse(&buffer)
    }

    /// Parse raw bytes. UTF-16 LE is recognized by its BOM; anything else must be UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Encoding`] if the bytes are not valid UTF-8, otherwise the first
    /// syntax or structural error found; no partial document is produced.
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let text = decode_data(buffer)?;
        text.parse()
    }

    /// Looks up `key` in `section` and converts its raw value to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::SectionNotFound`] or [`LookupError::KeyNotFound`] when either name
    /// is missing, and [`LookupError::Conversion`] when the raw value is not a valid `T`.
    pub fn get<T: FromValue>(&self, section: &str, key: &str) -> Result<T, LookupError> {
        let raw = self.get_str(section, key)?;
        Ok(T::from_value(raw)?)
    }

    /// Like [`Ini::get`] for strings, but borrows the raw value.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::SectionNotFound`] or [`LookupError::KeyNotFound`].
    pub fn get_str(&self, section: &str, key: &str) -> Result<&str, LookupError> {
        let found = self
            .section(section)
            .ok_or_else(|| LookupError::SectionNotFound {
                section: section.to_owned(),
            })?;

        found.get(key).ok_or_else(|| LookupError::KeyNotFound {
            section: section.to_owned(),
            key: key.to_owned(),
        })
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name() == name)
    }

    /// Sections in the order they first appeared.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    #[must_use]
    pub fn has_key(&self, section: &str, key: &str) -> bool {
        self.section(section)
            .is_some_and(|section| section.contains_key(key))
    }
}

impl FromStr for Ini {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let sections = Parser::new(text).into_sections()?;
        tracing::debug!(sections = sections.len(), "parsed INI document");
        Ok(Self { sections })
    }
}

fn decode_data(data: &[u8]) -> Result<Cow<'_, str>, ParseError> {
    if let Some(data) = data.strip_prefix(BOM_UTF16_LE) {
        let chunks = data.chunks_exact(2);
        let dangling = !chunks.remainder().is_empty();
        let utf16 = chunks
            .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
            .collect::<Vec<u16>>();

        let mut text = char::decode_utf16(utf16)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect::<String>();

        // A trailing odd byte is half a code unit.
        if dangling {
            text.push(char::REPLACEMENT_CHARACTER);
        }

        Ok(Cow::Owned(text))
    } else {
        let data = data.strip_prefix(BOM_UTF8).unwrap_or(data);
        let text = std::str::from_utf8(data).map_err(|source| ParseError::Encoding { source })?;
        Ok(Cow::Borrowed(text))
    }
}
