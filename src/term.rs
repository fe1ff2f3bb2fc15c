//! Implicant terms for Quine-McCluskey minimization
//!
//! This module provides the [`Term`] type: a ternary bit pattern together with
//! the set of minterms it stands for. Patterns use the same encoding as cube
//! inputs elsewhere in the crate:
//! - `Some(false)` - the variable must be 0
//! - `Some(true)` - the variable must be 1
//! - `None` - don't care (written `-`)

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Decimal code of one input row on which the function is true
pub type Minterm = u64;

/// Widest pattern a [`Term`] can hold (one position per bit of [`Minterm`])
pub const MAX_VARIABLES: usize = Minterm::BITS as usize;

/// Number of bits needed to write `minterm` in binary (at least 1)
pub fn bit_length(minterm: Minterm) -> usize {
    ((Minterm::BITS - minterm.leading_zeros()) as usize).max(1)
}

/// Letter used for the variable at pattern position `index` (`A`, `B`, ...)
pub fn variable_name(index: usize) -> char {
    char::from_u32(u32::from(b'A') + index as u32).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// A product term over a fixed number of variables
///
/// Position 0 of the pattern is the most significant bit. Two terms are equal
/// when their patterns are equal; the minterm set always agrees with the
/// pattern. Ordering follows the pattern string, with `-` < `0` < `1`.
///
/// Terms are immutable and cheap to clone.
#[derive(Clone)]
pub struct Term {
    pattern: Arc<[Option<bool>]>,
    minterms: Arc<BTreeSet<Minterm>>,
}

impl Term {
    /// Seed term for a single minterm, written MSB-first over `width` bits
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Term;
    ///
    /// let t = Term::from_minterm(5, 3);
    /// assert_eq!(t.to_string(), "101");
    /// assert_eq!(t.to_literal_expression(), "AB'C");
    /// ```
    pub fn from_minterm(minterm: Minterm, width: usize) -> Self {
        debug_assert!(width <= MAX_VARIABLES);
        debug_assert!(width >= bit_length(minterm));
        let pattern: Arc<[Option<bool>]> = (0..width)
            .rev()
            .map(|bit| Some((minterm >> bit) & 1 == 1))
            .collect();
        Term {
            pattern,
            minterms: Arc::new(BTreeSet::from([minterm])),
        }
    }

    /// Build a term from an explicit pattern, expanding its minterm set
    ///
    /// Returns `None` for patterns wider than [`MAX_VARIABLES`].
    ///
    /// The minterm set is materialized: a pattern with `k` `-` positions
    /// allocates `2^k` minterms, so keep `k` small (a 64-wide all-`-`
    /// pattern will not fit in memory).
    pub fn from_pattern(pattern: &[Option<bool>]) -> Option<Self> {
        if pattern.len() > MAX_VARIABLES {
            return None;
        }
        let mut minterms = vec![0 as Minterm];
        for &position in pattern {
            let choices: &[Minterm] = match position {
                Some(false) => &[0],
                Some(true) => &[1],
                None => &[0, 1],
            };
            minterms = minterms
                .iter()
                .flat_map(|&prefix| choices.iter().map(move |&bit| (prefix << 1) | bit))
                .collect();
        }
        Some(Term {
            pattern: pattern.into(),
            minterms: Arc::new(minterms.into_iter().collect()),
        })
    }

    /// The ternary pattern, most significant position first
    pub fn pattern(&self) -> &[Option<bool>] {
        &self.pattern
    }

    /// Number of variables the pattern spans
    pub fn width(&self) -> usize {
        self.pattern.len()
    }

    /// The minterms this term stands for, in ascending order
    pub fn minterms(&self) -> &BTreeSet<Minterm> {
        &self.minterms
    }

    /// Whether `minterm` belongs to this term
    pub fn covers(&self, minterm: Minterm) -> bool {
        self.minterms.contains(&minterm)
    }

    /// Number of determinate positions (literals in the product)
    pub fn num_literals(&self) -> usize {
        self.pattern.iter().filter(|p| p.is_some()).count()
    }

    /// Pattern as a string of `0`, `1` and `-`
    pub fn pattern_string(&self) -> String {
        self.pattern
            .iter()
            .map(|p| match p {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            })
            .collect()
    }

    /// The single position at which both patterns hold different determinate bits
    ///
    /// `None` when the patterns have different widths, are identical, differ
    /// in more than one position, or disagree on where a `-` sits.
    fn single_difference(&self, other: &Term) -> Option<usize> {
        if self.pattern.len() != other.pattern.len() {
            return None;
        }
        let mut found = None;
        for (i, (a, b)) in self.pattern.iter().zip(other.pattern.iter()).enumerate() {
            if a == b {
                continue;
            }
            match (a, b) {
                (Some(_), Some(_)) if found.is_none() => found = Some(i),
                _ => return None,
            }
        }
        found
    }

    /// Whether the two terms differ in exactly one determinate position
    ///
    /// The relation is symmetric and never holds between a term and itself.
    pub fn can_combine_with(&self, other: &Term) -> bool {
        self.single_difference(other).is_some()
    }

    /// Merge two adjacent terms, placing a `-` where they differ
    ///
    /// Returns `None` unless [`can_combine_with`](Self::can_combine_with) holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::Term;
    ///
    /// let a = Term::from_minterm(4, 3); // 100
    /// let b = Term::from_minterm(6, 3); // 110
    /// let merged = a.combine_with(&b).unwrap();
    /// assert_eq!(merged.to_string(), "1-0");
    /// assert_eq!(merged.minterms().iter().copied().collect::<Vec<_>>(), vec![4, 6]);
    /// ```
    pub fn combine_with(&self, other: &Term) -> Option<Term> {
        let position = self.single_difference(other)?;
        let mut pattern = self.pattern.to_vec();
        pattern[position] = None;
        let minterms = self.minterms.union(&other.minterms).copied().collect();
        Some(Term {
            pattern: pattern.into(),
            minterms: Arc::new(minterms),
        })
    }

    /// Render as a product of literals, e.g. `A'BC`
    ///
    /// Position `i` is named by the `i`-th capital letter; a `0` bit is
    /// complemented with a trailing `'` and `-` positions are omitted. A term
    /// with no literals renders as the empty string.
    pub fn to_literal_expression(&self) -> String {
        let mut expr = String::new();
        for (i, position) in self.pattern.iter().enumerate() {
            if let Some(bit) = position {
                expr.push(variable_name(i));
                if !bit {
                    expr.push('\'');
                }
            }
        }
        expr
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pattern.cmp(&other.pattern)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern_string())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {:?}", self.pattern_string(), self.minterms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(pattern: &str) -> Term {
        let cells: Vec<Option<bool>> = pattern
            .chars()
            .map(|c| match c {
                '0' => Some(false),
                '1' => Some(true),
                _ => None,
            })
            .collect();
        Term::from_pattern(&cells).unwrap()
    }

    #[test]
    fn test_bit_length() {
        assert_eq!(bit_length(0), 1);
        assert_eq!(bit_length(1), 1);
        assert_eq!(bit_length(2), 2);
        assert_eq!(bit_length(7), 3);
        assert_eq!(bit_length(8), 4);
        assert_eq!(bit_length(Minterm::MAX), 64);
    }

    #[test]
    fn test_seed_pattern_is_msb_first() {
        assert_eq!(Term::from_minterm(1, 4).to_string(), "0001");
        assert_eq!(Term::from_minterm(8, 4).to_string(), "1000");
        assert_eq!(Term::from_minterm(0, 1).to_string(), "0");
    }

    #[test]
    fn test_from_pattern_expands_minterms() {
        let t = term("1-0");
        assert_eq!(t.minterms().iter().copied().collect::<Vec<_>>(), vec![4, 6]);
        let all = term("--");
        assert_eq!(all.minterms().len(), 4);
        assert!(Term::from_pattern(&vec![None; MAX_VARIABLES + 1]).is_none());
    }

    #[test]
    fn test_from_pattern_grows_with_dont_cares() {
        let mut pattern = vec![None; 10];
        pattern.push(Some(true));
        let t = Term::from_pattern(&pattern).unwrap();
        assert_eq!(t.minterms().len(), 1 << 10);
        assert!(t.minterms().iter().all(|m| m & 1 == 1));
        assert_eq!(t.num_literals(), 1);
    }

    #[test]
    fn test_can_combine_requires_one_determinate_difference() {
        assert!(term("000").can_combine_with(&term("001")));
        assert!(term("0-0").can_combine_with(&term("0-1")));
        // two differences
        assert!(!term("000").can_combine_with(&term("011")));
        // dash against a bit
        assert!(!term("0-0").can_combine_with(&term("000")));
        assert!(!term("0-0").can_combine_with(&term("01-")));
        // identical
        assert!(!term("101").can_combine_with(&term("101")));
        // width mismatch
        assert!(!term("01").can_combine_with(&term("011")));
    }

    #[test]
    fn test_can_combine_is_symmetric() {
        let terms = ["000", "001", "0-1", "-01", "1-1", "11-", "---"].map(term);
        for a in &terms {
            for b in &terms {
                assert_eq!(a.can_combine_with(b), b.can_combine_with(a), "{} {}", a, b);
            }
        }
    }

    #[test]
    fn test_combine_with() {
        let merged = term("0-1").combine_with(&term("1-1")).unwrap();
        assert_eq!(merged.to_string(), "--1");
        assert_eq!(
            merged.minterms().iter().copied().collect::<Vec<_>>(),
            vec![1, 3, 5, 7]
        );
        assert!(term("0-1").combine_with(&term("0-1")).is_none());
    }

    #[test]
    fn test_literal_expression() {
        assert_eq!(term("101").to_literal_expression(), "AB'C");
        assert_eq!(term("--0").to_literal_expression(), "C'");
        assert_eq!(term("0-").to_literal_expression(), "A'");
        assert_eq!(term("---").to_literal_expression(), "");
        assert_eq!(term("1-0-1").to_literal_expression(), "AC'E");
    }

    #[test]
    fn test_equality_and_order_by_pattern() {
        assert_eq!(term("1-0"), term("1-0"));
        assert!(term("-1") < term("01"));
        assert!(term("01") < term("1-"));
        let mut sorted = vec![term("11"), term("-0"), term("0-"), term("10")];
        sorted.sort();
        let names: Vec<String> = sorted.iter().map(Term::pattern_string).collect();
        assert_eq!(names, vec!["-0", "0-", "10", "11"]);
    }

    #[test]
    fn test_num_literals_and_debug() {
        let t = term("1-0");
        assert_eq!(t.num_literals(), 2);
        assert_eq!(t.width(), 3);
        assert_eq!(format!("{:?}", t), "1-0 -> {4, 6}");
    }
}
