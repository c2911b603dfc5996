use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;

/// Errors raised while building an [`Ini`](crate::Ini). Construction is all-or-nothing, so any of
/// these means no document was produced.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unable to open file: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read data")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("input is not valid UTF-8")]
    Encoding {
        #[source]
        source: Utf8Error,
    },

    #[error("syntax error on line {line_number}: {line}")]
    Syntax { line_number: usize, line: String },

    #[error("key-value pair found outside of any section on line {line_number}")]
    PairOutsideSection { line_number: usize },

    #[error("section name cannot be empty (line {line_number})")]
    SectionNameEmpty { line_number: usize },
}

/// Errors raised by a query. The document stays usable after any of these.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("section not found: {section}")]
    SectionNotFound { section: String },

    #[error("key not found: {key}")]
    KeyNotFound { section: String, key: String },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// A raw value could not be read as the requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid integer format: {value}")]
    Integer {
        value: String,
        #[source]
        source: ParseIntError,
    },

    // `value` is the text as stored, before decimal commas were rewritten.
    #[error("invalid double format: {value}")]
    Float {
        value: String,
        /// `None` when the text parsed but is out of range.
        #[source]
        source: Option<ParseFloatError>,
    },
}

impl ConversionError {
    /// The raw value that failed to convert.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Integer { value, .. } | Self::Float { value, .. } => value,
        }
    }
}
