//! Reading minterm lists
//!
//! Minterms are written as decimal integers separated by whitespace, e.g.
//! `0 2 4 6`. Tokens are validated before anything reaches the minimizer.

use crate::error::MinimizeError;
use crate::term::Minterm;
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Parse a whitespace-separated list of minterms
///
/// Duplicates are kept; the minimizer ignores them.
///
/// # Errors
///
/// [`MinimizeError::EmptyInput`] when there are no tokens, and
/// [`MinimizeError::InvalidMinterm`] for the first token that is not a
/// non-negative integer.
///
/// # Examples
///
/// ```
/// use qmc_logic::parse_minterms;
///
/// assert_eq!(parse_minterms(" 1 3\t7 ").unwrap(), vec![1, 3, 7]);
/// assert!(parse_minterms("1 -3").is_err());
/// assert!(parse_minterms("   ").is_err());
/// ```
pub fn parse_minterms(input: &str) -> Result<Vec<Minterm>, MinimizeError> {
    let minterms = input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<Minterm>()
                .map_err(|_| MinimizeError::InvalidMinterm {
                    token: token.to_string(),
                    position,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if minterms.is_empty() {
        return Err(MinimizeError::EmptyInput);
    }
    Ok(minterms)
}

/// Read every minterm from a buffered reader
///
/// Tokens may span several lines; positions count across lines.
pub fn read_minterms<R: BufRead>(reader: R) -> Result<Vec<Minterm>, MinimizeError> {
    let mut content = String::new();
    for line in reader.lines() {
        content.push_str(&line?);
        content.push('\n');
    }
    parse_minterms(&content)
}

/// Read every minterm from a file
pub fn read_minterms_file<P: AsRef<Path>>(path: P) -> Result<Vec<Minterm>, MinimizeError> {
    let content = fs::read_to_string(path)?;
    parse_minterms(&content)
}
