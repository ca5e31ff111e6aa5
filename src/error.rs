use std::fmt;
use std::io;

/// Errors that stop a program from running at all.
///
/// Malformed expressions never show up here: the accumulator absorbs them
/// into its amorphous state and execution continues.
#[derive(Debug)]
pub enum Error {
    /// The source has no rows, or every row is empty.
    EmptyGrid,
    /// Reading the source or writing output failed.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "program grid is empty"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::EmptyGrid => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}
