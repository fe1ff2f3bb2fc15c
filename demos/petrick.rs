//! Walk through the three stages on a function with a cyclic core
//!
//! f(A, B, C) = sum(0, 1, 2, 5, 6, 7) has six prime implicants, none of them
//! essential, so the whole cover is chosen by Petrick's method.

use qmc_logic::minimize::essential::select_essential;
use qmc_logic::minimize::petrick;
use qmc_logic::minimize::primes::prime_implicants;
use qmc_logic::{Cover, Minterm, Term};
use std::collections::BTreeSet;

fn main() {
    let minterms: BTreeSet<Minterm> = [0, 1, 2, 5, 6, 7].into();
    let width = 3;

    let generated = prime_implicants(minterms.iter().map(|&m| Term::from_minterm(m, width)));
    println!(
        "Prime implicants ({} rounds):",
        generated.rounds
    );
    for prime in &generated.primes {
        println!("  {:?}", prime);
    }

    let selection = select_essential(&generated.primes, &minterms);
    println!("\nEssential: {}", selection.essential.len());
    println!("Uncovered: {:?}", selection.uncovered);

    let solution = petrick::solve(&selection.non_essential, &selection.uncovered, true);
    println!(
        "\nPetrick expansion kept {} product(s)",
        solution.expansion_size
    );

    let cover = Cover::from_terms(width, selection.essential.into_iter().chain(solution.product));
    println!("F = {}", cover);
}
