//! Error types for the Quine-McCluskey minimizer
//!
//! The minimization algorithm itself cannot fail. Errors only arise while
//! reading and validating minterms, or when an explicit variable count in
//! [`MinimizerConfig`](crate::MinimizerConfig) does not fit the input.

use crate::term::{Minterm, MAX_VARIABLES};
use std::fmt;
use std::io;

/// The main error type for the minimizer
#[derive(Debug)]
pub enum MinimizeError {
    /// The input contained no minterms at all
    EmptyInput,

    /// A token could not be read as a non-negative integer
    ///
    /// Negative numbers, fractions, words and values larger than
    /// [`Minterm::MAX`] all end up here.
    InvalidMinterm {
        /// The offending token, verbatim
        token: String,
        /// Zero-based index of the token in the input
        position: usize,
    },

    /// The configured number of variables is outside `1..=64`
    InvalidWidth {
        /// The requested number of variables
        requested: usize,
    },

    /// A minterm does not fit in the configured number of variables
    MintermOutOfRange {
        /// The minterm that is too large
        minterm: Minterm,
        /// The configured number of variables
        num_variables: usize,
    },

    /// IO error wrapper
    ///
    /// Wraps errors raised while reading minterms from a file or stream.
    Io(io::Error),
}

impl fmt::Display for MinimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizeError::EmptyInput => write!(f, "The input is empty!"),
            MinimizeError::InvalidMinterm { token, position } => write!(
                f,
                "Invalid minterm {:?} at position {}. Please enter only non-negative integers.",
                token, position
            ),
            MinimizeError::InvalidWidth { requested } => write!(
                f,
                "Invalid number of variables {}. Expected a value in 1..={}.",
                requested, MAX_VARIABLES
            ),
            MinimizeError::MintermOutOfRange {
                minterm,
                num_variables,
            } => write!(
                f,
                "Minterm {} does not fit in {} variable(s)",
                minterm, num_variables
            ),
            MinimizeError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for MinimizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinimizeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for MinimizeError {
    fn from(err: io::Error) -> Self {
        MinimizeError::Io(err)
    }
}

impl From<MinimizeError> for io::Error {
    fn from(err: MinimizeError) -> Self {
        match err {
            MinimizeError::Io(io_err) => io_err,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}
