//! # Quine-McCluskey Logic Minimizer
//!
//! This crate minimizes single-output Boolean functions, given as the list of
//! minterms on which they are true, into a minimum sum-of-products cover.
//!
//! ## Overview
//!
//! Minimization is exact with respect to the number of product terms:
//!
//! 1. Seed terms (one per minterm) are merged round after round into
//!    **prime implicants**.
//! 2. Prime implicants that are the only cover of some minterm are
//!    **essential** and always kept.
//! 3. Minterms still uncovered are covered with the fewest remaining
//!    implicants using **Petrick's method**.
//!
//! Every step uses ordered collections, so the same input always yields the
//! same cover, in the same order.
//!
//! ## Quick Start
//!
//! ```
//! use qmc_logic::simplify;
//!
//! // f(A, B, C) = sum(0, 2, 4, 6)
//! let cover = simplify(&[0, 2, 4, 6]);
//! assert_eq!(cover.len(), 1);
//! assert_eq!(cover.to_string(), "C'");
//! ```
//!
//! Variables are lettered from the most significant bit: with three
//! variables, minterm `5` is `101` and renders as `AB'C`. Complemented
//! literals carry a trailing `'`, and products are joined with ` + `.
//!
//! ## Configuration
//!
//! By default the number of variables is the bit length of the largest
//! minterm. Use [`MinimizerConfig`] to fix it explicitly:
//!
//! ```
//! use qmc_logic::{MinimizerConfig, QuineMcCluskey, Simplifier};
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! let config = MinimizerConfig::new().with_num_variables(3);
//! let qm = QuineMcCluskey::with_config(config);
//!
//! // Over 2 variables this would be "B + A"
//! let cover = qm.simplify(&[1, 2, 3])?;
//! assert_eq!(cover.to_string(), "A'C + A'B");
//! # Ok(())
//! # }
//! ```
//!
//! ## Inspecting a Run
//!
//! [`QuineMcCluskey::minimize`] keeps the intermediate results:
//!
//! ```
//! use qmc_logic::QuineMcCluskey;
//!
//! # fn main() -> Result<(), qmc_logic::MinimizeError> {
//! let result = QuineMcCluskey::new().minimize(&[0, 1, 2, 5, 6, 7])?;
//! assert_eq!(result.prime_implicants().len(), 6);
//! assert!(result.essential().is_empty());
//! assert_eq!(result.cover().len(), 3);
//! println!("{:?}", result.stats());
//! # Ok(())
//! # }
//! ```
//!
//! ## Limits
//!
//! Minterms are `u64`, so at most 64 variables. The cost of both prime
//! generation and Petrick's method grows exponentially with the number of
//! variables; no cap is imposed.

// Public modules
pub mod cover;
pub mod error;
pub mod input;
pub mod minimize;
pub mod term;

// Re-export high-level public API
pub use cover::Cover;
pub use error::MinimizeError;
pub use input::{parse_minterms, read_minterms, read_minterms_file};
pub use minimize::{simplify, Minimization, MinimizationStats, QuineMcCluskey, Simplifier};
pub use term::{Minterm, Term, MAX_VARIABLES};

/// Configuration for the minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Number of variables; derived from the largest minterm when `None`
    pub num_variables: Option<usize>,
    /// Drop Petrick products that contain another product while expanding
    pub absorb: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            num_variables: None,
            absorb: true,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the number of variables
    pub fn with_num_variables(mut self, num_variables: usize) -> Self {
        self.num_variables = Some(num_variables);
        self
    }

    /// Enable or disable superset absorption in Petrick's method
    pub fn with_absorb(mut self, absorb: bool) -> Self {
        self.absorb = absorb;
        self
    }
}
