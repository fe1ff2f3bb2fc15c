//! Quine-McCluskey minimization
//!
//! The pipeline runs in three stages:
//! 1. [`primes`]: merge seed terms into prime implicants
//! 2. [`essential`]: pick the implicants that are the sole cover of some minterm
//! 3. [`petrick`]: exactly cover whatever the essential implicants leave open
//!
//! [`QuineMcCluskey`] drives the stages and implements the [`Simplifier`]
//! trait; [`simplify`] is a shortcut with the default configuration.

pub mod essential;
pub mod petrick;
pub mod primes;

use crate::cover::Cover;
use crate::error::MinimizeError;
use crate::term::{bit_length, Minterm, Term, MAX_VARIABLES};
use crate::MinimizerConfig;
use log::debug;
use std::collections::BTreeSet;

/// Common interface for Boolean function simplifiers
///
/// A simplifier turns the ON-set of a single-output function, given as
/// minterms, into a cover. Implementations must return a cover whose minterms
/// are exactly the distinct input minterms, and an empty cover for empty input.
pub trait Simplifier {
    /// Minimize the function whose ON-set is `minterms`
    fn simplify(&self, minterms: &[Minterm]) -> Result<Cover, MinimizeError>;
}

/// Counters describing one minimization run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinimizationStats {
    /// Pattern width used for the run
    pub num_variables: usize,
    /// Distinct input minterms
    pub num_minterms: usize,
    /// Prime implicant generation rounds
    pub rounds: usize,
    /// Prime implicants found
    pub prime_implicants: usize,
    /// Essential prime implicants
    pub essential: usize,
    /// Products in the final Petrick expansion (0 when it was not needed)
    pub petrick_products: usize,
    /// Terms in the returned cover
    pub cover_terms: usize,
}

/// Full outcome of a minimization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimization {
    cover: Cover,
    prime_implicants: BTreeSet<Term>,
    essential: BTreeSet<Term>,
    stats: MinimizationStats,
}

impl Minimization {
    /// The minimum cover
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    /// Every prime implicant of the function, ordered by pattern
    pub fn prime_implicants(&self) -> &BTreeSet<Term> {
        &self.prime_implicants
    }

    /// The essential prime implicants, ordered by pattern
    pub fn essential(&self) -> &BTreeSet<Term> {
        &self.essential
    }

    /// Counters for this run
    pub fn stats(&self) -> &MinimizationStats {
        &self.stats
    }

    /// Take the cover, dropping the rest
    pub fn into_cover(self) -> Cover {
        self.cover
    }
}

/// Exact minimizer based on the Quine-McCluskey method and Petrick's method
///
/// # Examples
///
/// ```
/// use qmc_logic::{MinimizerConfig, QuineMcCluskey, Simplifier};
///
/// # fn main() -> Result<(), qmc_logic::MinimizeError> {
/// let qm = QuineMcCluskey::new();
/// assert_eq!(qm.simplify(&[0, 2, 4, 6])?.to_string(), "C'");
///
/// // Fix the width instead of deriving it from the largest minterm
/// let wide = QuineMcCluskey::with_config(MinimizerConfig::new().with_num_variables(4));
/// assert_eq!(wide.simplify(&[0, 2, 4, 6])?.to_string(), "A'D'");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuineMcCluskey {
    config: MinimizerConfig,
}

impl QuineMcCluskey {
    /// Create a minimizer with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a minimizer with a custom configuration
    pub fn with_config(config: MinimizerConfig) -> Self {
        QuineMcCluskey { config }
    }

    /// The configuration in use
    pub fn config(&self) -> &MinimizerConfig {
        &self.config
    }

    /// Run the full pipeline, keeping intermediate results
    pub fn minimize(&self, minterms: &[Minterm]) -> Result<Minimization, MinimizeError> {
        let width = self.resolve_width(minterms)?;
        Ok(run(minterms, width, self.config.absorb))
    }

    /// Pattern width for `minterms` under this configuration
    ///
    /// Without an explicit count, the width is the bit length of the largest
    /// minterm, so `[1, 2]` and `[1, 2, 7]` are minimized over 2 and 3
    /// variables respectively.
    pub fn resolve_width(&self, minterms: &[Minterm]) -> Result<usize, MinimizeError> {
        let largest = minterms.iter().copied().max();
        match self.config.num_variables {
            None => Ok(largest.map(bit_length).unwrap_or(0)),
            Some(requested) if requested == 0 || requested > MAX_VARIABLES => {
                Err(MinimizeError::InvalidWidth { requested })
            }
            Some(requested) => match largest {
                Some(minterm) if bit_length(minterm) > requested => {
                    Err(MinimizeError::MintermOutOfRange {
                        minterm,
                        num_variables: requested,
                    })
                }
                _ => Ok(requested),
            },
        }
    }
}

impl Simplifier for QuineMcCluskey {
    fn simplify(&self, minterms: &[Minterm]) -> Result<Cover, MinimizeError> {
        self.minimize(minterms).map(Minimization::into_cover)
    }
}

/// Minimize with the default configuration
///
/// The width is derived from the largest minterm, so this cannot fail.
///
/// # Examples
///
/// ```
/// use qmc_logic::simplify;
///
/// assert_eq!(simplify(&[5]).to_string(), "AB'C");
/// assert_eq!(simplify(&[]).to_string(), "0");
/// ```
pub fn simplify(minterms: &[Minterm]) -> Cover {
    let width = minterms.iter().copied().max().map(bit_length).unwrap_or(0);
    run(minterms, width, MinimizerConfig::default().absorb).into_cover()
}

fn run(minterms: &[Minterm], width: usize, absorb: bool) -> Minimization {
    let targets: BTreeSet<Minterm> = minterms.iter().copied().collect();
    let mut stats = MinimizationStats {
        num_variables: width,
        num_minterms: targets.len(),
        ..Default::default()
    };

    if targets.is_empty() {
        return Minimization {
            cover: Cover::new(width),
            prime_implicants: BTreeSet::new(),
            essential: BTreeSet::new(),
            stats,
        };
    }

    debug!(
        "minimizing {} minterms over {} variables",
        targets.len(),
        width
    );

    let generated =
        primes::prime_implicants(targets.iter().map(|&m| Term::from_minterm(m, width)));
    stats.rounds = generated.rounds;
    stats.prime_implicants = generated.primes.len();

    let selection = essential::select_essential(&generated.primes, &targets);
    stats.essential = selection.essential.len();

    let mut chosen = selection.essential.clone();
    if !selection.uncovered.is_empty() {
        let solution = petrick::solve(
            &selection.non_essential,
            &selection.uncovered,
            absorb,
        );
        stats.petrick_products = solution.expansion_size;
        chosen.extend(solution.product);
    }

    let cover = Cover::from_terms(width, chosen);
    stats.cover_terms = cover.len();
    debug_assert_eq!(cover.minterms(), targets);

    Minimization {
        cover,
        prime_implicants: generated.primes,
        essential: selection.essential,
        stats,
    }
}
