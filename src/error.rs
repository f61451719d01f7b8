use std::io;
use std::path::PathBuf;

use allsorts::error::{ParseError, ReadWriteError};
use thiserror::Error;

/// Error type for font conversion and cleanup
#[derive(Error, Debug)]
pub enum Error {
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed font data
    #[error("Font error: {0}")]
    Font(String),

    /// A recognised container this crate does not read
    #[error("Unsupported font format: {0}")]
    UnsupportedFormat(String),

    /// brotli stream failures
    #[error("Compression error: {0}")]
    Compression(String),

    /// The decoded font was rejected by the sfnt parser
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid file or directory path
    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    /// An error tied to a specific file
    #[error("{}: {source}", .path.display())]
    AtPath {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach the file that caused this error
    pub fn at(self, path: impl Into<PathBuf>) -> Self {
        Error::AtPath {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Font(err.to_string())
    }
}

impl From<ReadWriteError> for Error {
    fn from(err: ReadWriteError) -> Self {
        Error::Font(err.to_string())
    }
}

/// Result type alias for woffsrt operations
pub type Result<T> = std::result::Result<T, Error>;
