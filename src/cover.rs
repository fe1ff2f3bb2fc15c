//! Minimized covers and their sum-of-products rendering
//!
//! A [`Cover`] is the result of minimization: a set of [`Term`]s whose union
//! is the ON-set of the function. Terms are kept in pattern order so that
//! iteration and rendering are deterministic.

use crate::term::{Minterm, Term};
use std::collections::BTreeSet;
use std::fmt;

/// A sum-of-products cover over a fixed number of variables
///
/// # Examples
///
/// ```
/// use qmc_logic::simplify;
///
/// let cover = simplify(&[1, 4, 5, 6, 7]);
/// assert_eq!(cover.len(), 2);
/// assert_eq!(cover.to_string(), "B'C + A");
/// assert!(cover.covers(5));
/// assert!(!cover.covers(2));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cover {
    /// Width of every term's pattern
    num_variables: usize,
    /// Terms in ascending pattern order, no duplicates
    terms: Vec<Term>,
}

impl Cover {
    /// Create an empty cover (the constant-false function)
    pub fn new(num_variables: usize) -> Self {
        Cover {
            num_variables,
            terms: Vec::new(),
        }
    }

    /// Create a cover from arbitrary terms, sorting and deduplicating them
    pub fn from_terms<I>(num_variables: usize, terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        let terms: BTreeSet<Term> = terms.into_iter().collect();
        debug_assert!(terms.iter().all(|t| t.width() == num_variables));
        Cover {
            num_variables,
            terms: terms.into_iter().collect(),
        }
    }

    /// Number of variables each term spans
    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    /// Number of terms (products) in the cover
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the cover has no terms
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// The terms, in ascending pattern order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Iterate over the terms
    pub fn iter(&self) -> std::slice::Iter<'_, Term> {
        self.terms.iter()
    }

    /// Total number of literals across all terms
    pub fn num_literals(&self) -> usize {
        self.terms.iter().map(Term::num_literals).sum()
    }

    /// Union of the minterms of all terms
    pub fn minterms(&self) -> BTreeSet<Minterm> {
        self.terms
            .iter()
            .flat_map(|t| t.minterms().iter().copied())
            .collect()
    }

    /// Evaluate the cover on input row `minterm`
    pub fn covers(&self, minterm: Minterm) -> bool {
        self.terms.iter().any(|t| t.covers(minterm))
    }

    /// Whether some term has no literals, making the cover constant true
    pub fn is_tautology(&self) -> bool {
        self.terms.iter().any(|t| t.num_literals() == 0)
    }

    /// Render as a sum of products, e.g. `A'B + BC'`
    ///
    /// Products with no literals are skipped, and a cover with nothing left
    /// to print renders as `0`. That includes the all-`-` term, so check
    /// [`Cover::is_tautology`] to tell a constant-true cover apart from an
    /// empty one.
    pub fn to_sop(&self) -> String {
        let products: Vec<String> = self
            .terms
            .iter()
            .map(Term::to_literal_expression)
            .filter(|expr| !expr.is_empty())
            .collect();
        if products.is_empty() {
            "0".to_string()
        } else {
            products.join(" + ")
        }
    }

    /// Consume the cover and return its terms
    pub fn into_terms(self) -> Vec<Term> {
        self.terms
    }
}

impl fmt::Display for Cover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_sop())
    }
}

impl<'a> IntoIterator for &'a Cover {
    type Item = &'a Term;
    type IntoIter = std::slice::Iter<'a, Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl IntoIterator for Cover {
    type Item = Term;
    type IntoIter = std::vec::IntoIter<Term>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}
