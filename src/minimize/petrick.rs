//! Exact cover of the remaining minterms with Petrick's method
//!
//! Each uncovered minterm contributes a clause: the OR of the candidate
//! implicants covering it. Multiplying the clauses out gives a sum of
//! products, and any product with the fewest implicants is a minimum cover.

use crate::term::{Minterm, Term};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// One product of the expansion: a set of implicants chosen together
pub type Product = BTreeSet<Term>;

/// Result of the exact cover search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetrickSolution {
    /// The selected minimum-cardinality product
    pub product: Product,
    /// Number of distinct products in the final expansion
    pub expansion_size: usize,
}

/// Candidate implicants covering `minterm`, ordered by pattern
pub fn clause(candidates: &BTreeSet<Term>, minterm: Minterm) -> Vec<Term> {
    candidates
        .iter()
        .filter(|t| t.covers(minterm))
        .cloned()
        .collect()
}

/// Choose a minimum set of `candidates` covering every minterm in `uncovered`
///
/// Products are deduplicated as sets, so picking an implicant twice collapses.
/// With `absorb` set, any product that strictly contains another one is
/// dropped after each multiplication step; the answer does not change.
///
/// Among the products of minimum size, the one whose sorted patterns compare
/// lowest wins.
///
/// # Panics
///
/// Panics if some uncovered minterm has no candidate covering it. Prime
/// implicant generation guarantees this cannot happen.
pub fn solve(
    candidates: &BTreeSet<Term>,
    uncovered: &BTreeSet<Minterm>,
    absorb: bool,
) -> PetrickSolution {
    let mut expansion: BTreeSet<Product> = BTreeSet::from([Product::new()]);

    for &minterm in uncovered {
        let clause = clause(candidates, minterm);
        assert!(
            !clause.is_empty(),
            "minterm {} has no covering prime implicant",
            minterm
        );
        trace!(
            "clause for {}: ({})",
            minterm,
            clause
                .iter()
                .map(Term::pattern_string)
                .collect::<Vec<_>>()
                .join(" + ")
        );

        let mut next = BTreeSet::new();
        for product in &expansion {
            for term in &clause {
                let mut extended = product.clone();
                extended.insert(term.clone());
                next.insert(extended);
            }
        }
        expansion = if absorb { absorb_supersets(next) } else { next };
    }

    debug!(
        "petrick expansion over {} minterms has {} products",
        uncovered.len(),
        expansion.len()
    );

    let expansion_size = expansion.len();
    let product = expansion
        .into_iter()
        .min_by(compare_products)
        .unwrap_or_default();

    PetrickSolution {
        product,
        expansion_size,
    }
}

/// Fewer implicants first, then lexicographic by sorted patterns
fn compare_products(a: &Product, b: &Product) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Drop every product that strictly contains another product of the set
fn absorb_supersets(products: BTreeSet<Product>) -> BTreeSet<Product> {
    let mut by_size: Vec<Product> = products.into_iter().collect();
    by_size.sort_by_key(BTreeSet::len);

    let mut kept: Vec<Product> = Vec::with_capacity(by_size.len());
    for product in by_size {
        if !kept.iter().any(|smaller| smaller.is_subset(&product)) {
            kept.push(product);
        }
    }
    kept.into_iter().collect()
}
