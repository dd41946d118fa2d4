//! Basic usage examples for the range_query_trees crate.
//!
//! Demonstrates all three trees: SegTree and FenwickTree for point updates,
//! RangeSegTree for range assignment, plus prefix/suffix search.

use range_query_trees::{
    FenwickSpec, FenwickSum, FenwickTree, RangeSegTreeAssignMax, RangeSegTreeAssignSum, SegTree,
    SegTreeMax, SegTreeSpec, SegTreeSum, Side,
};

fn main() {
    println!("=== Segment Tree Examples ===\n");

    custom_spec_example();
    helper_types_example();
    search_example();

    println!("\n=== Range Segment Tree Examples ===\n");

    range_assignment_example();

    println!("\n=== Fenwick Tree Examples ===\n");

    fenwick_sum_example();
    fenwick_compose_example();
}

/// A custom SegTree spec: greatest common divisor.
fn custom_spec_example() {
    println!("1. Custom SegTree for GCD Queries");
    println!("---------------------------------");

    struct GcdSpec;

    impl SegTreeSpec for GcdSpec {
        type T = u64;

        fn op(a: &u64, b: &u64) -> u64 {
            let (mut a, mut b) = (*a, *b);
            while b != 0 {
                (a, b) = (b, a % b);
            }
            a
        }
    }

    let values = vec![12, 18, 30, 48, 36];
    let mut tree = SegTree::<GcdSpec>::from_slice(&values);

    println!("Values: {:?}", values);
    println!("GCD of [0, 5): {}", tree.query(..)); // 6
    println!("GCD of [2, 4): {}", tree.query(2..4)); // 6

    tree.update(2, 25);
    println!("After setting index 2 to 25, GCD of [0, 5): {}", tree.query(..)); // 1
    println!();
}

/// The prebuilt sum/min/max helper aliases.
fn helper_types_example() {
    println!("2. Helper Types");
    println!("---------------");

    let values = vec![3, 1, 4, 1, 5, 9, 2, 6];
    println!("Values: {:?}", values);

    let sum_tree = SegTreeSum::<i32>::from_slice(&values);
    println!("Sum  [2, 6): {}", sum_tree.query(2..6)); // 19

    let max_tree = SegTreeMax::<i32>::from_slice(&values);
    println!("Max  [0, 4): {}", max_tree.query(0..4)); // 4
    println!();
}

/// Prefix and suffix search over monotone predicates.
fn search_example() {
    println!("3. Prefix / Suffix Search");
    println!("-------------------------");

    let tree = SegTreeSum::<i64>::from_slice(&[2, 1, 3, 1, 4, 2]);

    // Exclusive end of the shortest prefix summing past 5.
    println!("prefix_search(sum > 5)  = {:?}", tree.prefix_search(|s| *s > 5, ..));
    // Inclusive start of the shortest suffix summing past 5.
    println!("suffix_search(sum > 5)  = {:?}", tree.suffix_search(|s| *s > 5, ..));
    // Unsatisfiable predicates return None.
    println!("prefix_search(sum > 99) = {:?}", tree.prefix_search(|s| *s > 99, ..));
    println!();
}

/// Range assignment with sum and max queries.
fn range_assignment_example() {
    println!("4. Range Assignment");
    println!("-------------------");

    let mut sum_tree = RangeSegTreeAssignSum::<i64>::from_value(8, 0);
    sum_tree.update(2..6, 3);
    println!("After assigning 3 over [2, 6): total = {}", sum_tree.query(..)); // 12
    sum_tree.update(0..4, 1);
    println!("After assigning 1 over [0, 4): total = {}", sum_tree.query(..)); // 10

    let mut max_tree = RangeSegTreeAssignMax::<i32>::from_vec((0..8).collect());
    max_tree.update(1..6, 9);
    println!("Max after assigning 9 over [1, 6): {}", max_tree.query(..)); // 9
    println!("Max over untouched [6, 8): {}", max_tree.query(6..8)); // 7
    println!();
}

/// Fenwick tree for plain sums.
fn fenwick_sum_example() {
    println!("5. Fenwick Sums");
    println!("---------------");

    let mut tree = FenwickSum::<i64>::from_slice(&[1, 2, 3, 4, 5, 6]);
    println!("Sum [0, 6): {}", tree.query(..)); // 21
    println!("Sum [2, 5): {}", tree.query(2..5)); // 12

    tree.update(2, 10); // replace, not add
    println!("After setting index 2 to 10, sum [2, 5): {}", tree.query(2..5)); // 19
    println!("Empty range folds to identity: {}", tree.query(3..3)); // 0
    println!();
}

/// A non-commutative invertible operation: affine function composition.
fn fenwick_compose_example() {
    println!("6. Fenwick with a Non-Commutative Operator");
    println!("------------------------------------------");

    /// `(a, b)` represents the map `x -> a*x + b`.
    struct ComposeSpec;

    impl FenwickSpec for ComposeSpec {
        type T = (f64, f64);
        const ID: (f64, f64) = (1.0, 0.0);

        fn op(f: &(f64, f64), g: &(f64, f64)) -> (f64, f64) {
            // apply f first, then g
            (f.0 * g.0, g.0 * f.1 + g.1)
        }

        fn inv(operand: &(f64, f64), side: Side, combined: &(f64, f64)) -> (f64, f64) {
            let inverse = (1.0 / operand.0, -operand.1 / operand.0);
            match side {
                Side::Left => Self::op(&inverse, combined),
                Side::Right => Self::op(combined, &inverse),
            }
        }
    }

    let maps = vec![(2.0, 1.0), (1.0, -3.0), (0.5, 0.0), (3.0, 2.0)];
    let tree = FenwickTree::<ComposeSpec>::from_slice(&maps);

    let (a, b) = tree.query(1..3); // x -> 0.5 * (x - 3)
    println!("Composition over [1, 3): x -> {}*x + {}", a, b);
    println!("Applied to x = 7: {}", a * 7.0 + b); // 2
}
