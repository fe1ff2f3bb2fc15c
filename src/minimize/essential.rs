//! Coverage chart and essential prime implicant selection

use crate::term::{Minterm, Term};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Map from each target minterm to the prime implicants covering it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageChart {
    rows: BTreeMap<Minterm, Vec<Term>>,
}

impl CoverageChart {
    /// Build the chart for `minterms` over `primes`
    ///
    /// Every target minterm gets a row, even when nothing covers it. Minterms
    /// of a prime that are not targets are ignored.
    pub fn new(primes: &BTreeSet<Term>, minterms: &BTreeSet<Minterm>) -> Self {
        let mut rows: BTreeMap<Minterm, Vec<Term>> =
            minterms.iter().map(|&m| (m, Vec::new())).collect();
        for prime in primes {
            for m in prime.minterms() {
                if let Some(row) = rows.get_mut(m) {
                    row.push(prime.clone());
                }
            }
        }
        CoverageChart { rows }
    }

    /// Prime implicants covering `minterm`, ordered by pattern
    pub fn coverers(&self, minterm: Minterm) -> &[Term] {
        self.rows.get(&minterm).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate over `(minterm, coverers)` rows in ascending minterm order
    pub fn rows(&self) -> impl Iterator<Item = (Minterm, &[Term])> + '_ {
        self.rows.iter().map(|(&m, row)| (m, row.as_slice()))
    }

    /// Prime implicants that are the sole coverer of at least one minterm
    pub fn essential(&self) -> BTreeSet<Term> {
        self.rows
            .values()
            .filter(|row| row.len() == 1)
            .map(|row| row[0].clone())
            .collect()
    }
}

/// Outcome of essential selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssentialSelection {
    /// Implicants that every cover must contain
    pub essential: BTreeSet<Term>,
    /// The remaining prime implicants, candidates for the exact cover step
    pub non_essential: BTreeSet<Term>,
    /// Target minterms not covered by any essential implicant
    pub uncovered: BTreeSet<Minterm>,
}

/// Split `primes` into essential and non-essential implicants
///
/// # Examples
///
/// ```
/// use qmc_logic::minimize::essential::select_essential;
/// use qmc_logic::minimize::primes::prime_implicants;
/// use qmc_logic::Term;
/// use std::collections::BTreeSet;
///
/// let minterms: BTreeSet<u64> = [1, 4, 5, 6, 7].into();
/// let primes = prime_implicants(minterms.iter().map(|&m| Term::from_minterm(m, 3))).primes;
/// let selection = select_essential(&primes, &minterms);
/// assert_eq!(selection.essential.len(), 2);
/// assert!(selection.uncovered.is_empty());
/// ```
pub fn select_essential(
    primes: &BTreeSet<Term>,
    minterms: &BTreeSet<Minterm>,
) -> EssentialSelection {
    let chart = CoverageChart::new(primes, minterms);
    let essential = chart.essential();

    let covered: BTreeSet<Minterm> = essential
        .iter()
        .flat_map(|t| t.minterms().iter().copied())
        .collect();
    let uncovered: BTreeSet<Minterm> = minterms.difference(&covered).copied().collect();
    let non_essential: BTreeSet<Term> = primes.difference(&essential).cloned().collect();

    debug!(
        "{} essential of {} primes, {} minterms left uncovered",
        essential.len(),
        primes.len(),
        uncovered.len()
    );

    EssentialSelection {
        essential,
        non_essential,
        uncovered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimize::primes::prime_implicants;
    use test_log::test;

    fn primes_for(minterms: &BTreeSet<Minterm>, width: usize) -> BTreeSet<Term> {
        prime_implicants(minterms.iter().map(|&m| Term::from_minterm(m, width))).primes
    }

    fn patterns(terms: &BTreeSet<Term>) -> Vec<String> {
        terms.iter().map(Term::pattern_string).collect()
    }

    #[test]
    fn test_chart_rows() {
        let minterms: BTreeSet<Minterm> = [0, 1, 2, 5, 6, 7].into();
        let primes = primes_for(&minterms, 3);
        let chart = CoverageChart::new(&primes, &minterms);

        assert_eq!(chart.rows().count(), 6);
        for (_, row) in chart.rows() {
            assert_eq!(row.len(), 2);
        }
        let coverers: Vec<String> = chart.coverers(0).iter().map(Term::pattern_string).collect();
        assert_eq!(coverers, vec!["0-0", "00-"]);
        assert!(chart.coverers(3).is_empty());
    }

    #[test]
    fn test_chart_ignores_foreign_minterms() {
        let primes: BTreeSet<Term> = [Term::from_pattern(&[None, Some(true)]).unwrap()].into();
        let minterms: BTreeSet<Minterm> = [3].into();
        let chart = CoverageChart::new(&primes, &minterms);
        assert_eq!(chart.rows().count(), 1);
        assert!(chart.coverers(1).is_empty());
        assert_eq!(chart.coverers(3).len(), 1);
    }

    #[test]
    fn test_all_essential() {
        let minterms: BTreeSet<Minterm> = [1, 4, 5, 6, 7].into();
        let selection = select_essential(&primes_for(&minterms, 3), &minterms);
        assert_eq!(patterns(&selection.essential), vec!["-01", "1--"]);
        assert!(selection.non_essential.is_empty());
        assert!(selection.uncovered.is_empty());
    }

    #[test]
    fn test_cyclic_has_no_essentials() {
        let minterms: BTreeSet<Minterm> = [0, 1, 2, 5, 6, 7].into();
        let primes = primes_for(&minterms, 3);
        let selection = select_essential(&primes, &minterms);
        assert!(selection.essential.is_empty());
        assert_eq!(selection.non_essential, primes);
        assert_eq!(selection.uncovered, minterms);
    }

    #[test]
    fn test_partial_essential() {
        // f = sum(0, 1, 2, 5, 6, 7, 8) over 4 variables:
        // 8 (1000) is only covered by -000, which also covers 0
        let minterms: BTreeSet<Minterm> = [0, 1, 2, 5, 6, 7, 8].into();
        let selection = select_essential(&primes_for(&minterms, 4), &minterms);
        assert_eq!(patterns(&selection.essential), vec!["-000"]);
        assert!(!selection.uncovered.contains(&0));
        assert!(!selection.uncovered.contains(&8));
        assert_eq!(selection.uncovered, BTreeSet::from([1, 2, 5, 6, 7]));
        assert!(!selection.non_essential.is_empty());
    }
}
