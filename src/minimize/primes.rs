//! Prime implicant generation
//!
//! Repeatedly merges adjacent terms until nothing combines any more. Every
//! term that takes part in no merge during its round is prime.

use crate::term::Term;
use log::{debug, trace};
use std::collections::BTreeSet;

/// Result of running the generator to a fixed point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeImplicants {
    /// All prime implicants, ordered by pattern
    pub primes: BTreeSet<Term>,
    /// Number of combination rounds performed, including the final one that
    /// produced no merges
    pub rounds: usize,
}

/// Compute the prime implicants of a set of seed terms
///
/// Seeds with equal patterns are treated as one. Each round compares every
/// pair of live terms; merged patterns are deduplicated and become the next
/// generation, and terms nobody merged with are emitted as primes.
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize::primes::prime_implicants;
/// use qmc_logic::Term;
///
/// let seeds = [0, 2, 4, 6].map(|m| Term::from_minterm(m, 3));
/// let result = prime_implicants(seeds);
/// let patterns: Vec<String> = result.primes.iter().map(|t| t.to_string()).collect();
/// assert_eq!(patterns, vec!["--0"]);
/// ```
pub fn prime_implicants<I>(seeds: I) -> PrimeImplicants
where
    I: IntoIterator<Item = Term>,
{
    let mut current: Vec<Term> = seeds
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let mut primes = BTreeSet::new();
    let mut rounds = 0;

    while !current.is_empty() {
        rounds += 1;
        let mut consumed = vec![false; current.len()];
        let mut combined = BTreeSet::new();

        for i in 0..current.len() {
            for j in (i + 1)..current.len() {
                if let Some(merged) = current[i].combine_with(&current[j]) {
                    trace!("{} + {} -> {}", current[i], current[j], merged);
                    combined.insert(merged);
                    consumed[i] = true;
                    consumed[j] = true;
                }
            }
        }

        let live = current.len();
        let before = primes.len();
        primes.extend(
            current
                .into_iter()
                .zip(consumed)
                .filter(|(_, used)| !used)
                .map(|(term, _)| term),
        );
        debug!(
            "round {}: {} live terms, {} merged patterns, {} new primes",
            rounds,
            live,
            combined.len(),
            primes.len() - before
        );

        current = combined.into_iter().collect();
    }

    PrimeImplicants { primes, rounds }
}
