//! Basic minimization example

use qmc_logic::simplify;

fn main() {
    println!("Boolean Function Minimization Example\n");

    println!("Function: F(A, B, C) = A'B'C + A'BC + AB'C + ABC");
    println!("(output is 1 whenever C is 1)\n");

    // ON-set as minterms: 001, 011, 101, 111
    let minterms = [1, 3, 5, 7];

    let cover = simplify(&minterms);

    println!("Minimized to {} term(s):", cover.len());
    for term in &cover {
        println!("  {}  ->  {}", term, term.to_literal_expression());
    }
    println!("\nF = {}", cover);
}
