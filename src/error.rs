use core::fmt;
use std::error;
use std::io;
use std::path::PathBuf;

use crate::json;

/// An error raised while converting a file.
///
/// # Examples
///
/// ```
/// use json2yaml::Error;
///
/// let error = json2yaml::convert_path("does/not/exist.json").unwrap_err();
/// assert!(matches!(error, Error::FileAccess { .. }));
/// ```
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input file could not be read.
    FileAccess {
        /// The path which was being read.
        path: PathBuf,
        /// The underlying I/O error.
        error: io::Error,
    },
    /// The input file is not well-formed JSON.
    Parse {
        /// The path which was being decoded.
        path: PathBuf,
        /// Where in the file the error occurred.
        location: json::Location,
        /// The underlying decode error.
        error: json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileAccess { path, .. } => {
                write!(f, "{}: failed to read file", path.display())
            }
            Error::Parse {
                path,
                location,
                error,
            } => {
                write!(f, "{}:{location}: {error}", path.display())
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::FileAccess { error, .. } => Some(error),
            Error::Parse { error, .. } => Some(error),
        }
    }
}
