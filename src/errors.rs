//! Errors and error-related utilities.

use std::{error, fmt, io, result};

/// The result type used throughout this library.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// Invalid input.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// A file could not be read.
#[derive(Debug)]
pub struct ReadFailed {
    pub file: String,
    pub source: io::Error,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for ReadFailed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "cannot read {}: {}", self.file, self.source)
    }
}

impl error::Error for InvalidInput {}

impl error::Error for ReadFailed {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.source)
    }
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}

/// A helper for constructing [InvalidInput].
pub fn invalid_input_ref(s: &str) -> Box<dyn error::Error> {
    InvalidInput(s.to_owned()).into()
}

/// A helper for constructing [ReadFailed].
pub fn read_failed(file: &str, source: io::Error) -> Box<dyn error::Error> {
    ReadFailed {
        file: file.to_owned(),
        source,
    }
    .into()
}
