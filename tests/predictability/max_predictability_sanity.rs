// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rstest::*;
use seqmeasure::estimators::config::PredictabilitySolver;
use seqmeasure::estimators::predictability::{TOLERANCE, binary_entropy, fano_residual};
use seqmeasure::{ComplexityError, max_predictability, solve_max_predictability};

use crate::test_helpers::{StdRng, Rng, SeedableRng, assert_abs_diff_eq};

#[rstest]
#[case(0.5, 2, 0.11)]
#[case(2.0, 100, 0.805)]
#[case(1.0, 10, 0.865)]
#[case(3.0, 20, 0.528)]
#[case(4.0, 30, 0.372)]
fn known_predictability(#[case] entropy: f64, #[case] n: usize, #[case] expected: f64) {
    assert_abs_diff_eq!(max_predictability(entropy, n), expected, epsilon = 1e-12);
    let bisected = solve_max_predictability(entropy, n, PredictabilitySolver::Bisection).unwrap();
    assert_abs_diff_eq!(bisected, expected, epsilon = 1e-12);
}

#[test]
fn degenerate_inputs_are_fully_predictable() {
    assert_eq!(max_predictability(0.0, 5), 1.0);
    assert_eq!(max_predictability(1.2, 1), 1.0);
    assert_eq!(max_predictability(1.2, 0), 1.0);
}

#[test]
fn entropy_above_log_alphabet_has_no_solution() {
    assert_eq!(max_predictability(7.0, 100), 0.0);
    for solver in [PredictabilitySolver::LinearScan, PredictabilitySolver::Bisection] {
        let err = solve_max_predictability(7.0, 100, solver).unwrap_err();
        assert_eq!(
            err,
            ComplexityError::NoConvergence {
                entropy: 7.0,
                alphabet_size: 100
            }
        );
    }
    // log2(10) is the peak; anything clearly above it fails
    assert_eq!(max_predictability(10f64.log2() + 0.01, 10), 0.0);
}

#[test]
fn rising_branch_root_is_taken_near_the_peak() {
    assert_abs_diff_eq!(max_predictability(10f64.log2(), 10), 0.089, epsilon = 1e-12);
}

#[test]
fn grid_ties_round_to_even() {
    // first root at grid point 0.0625, an exact tie at three decimals
    let entropy = 0.33829006561701386;
    assert_eq!(max_predictability(entropy, 2), 0.062);
    for solver in [PredictabilitySolver::LinearScan, PredictabilitySolver::Bisection] {
        assert_eq!(solve_max_predictability(entropy, 2, solver), Ok(0.062));
    }
}

#[test]
fn bisection_reproduces_the_scan() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..300 {
        let n = rng.gen_range(2..200usize);
        let entropy = rng.gen_range(0.01..(n as f64).log2() + 0.2);
        let scan = solve_max_predictability(entropy, n, PredictabilitySolver::LinearScan);
        let bisect = solve_max_predictability(entropy, n, PredictabilitySolver::Bisection);
        assert_eq!(scan, bisect, "entropy {entropy}, n {n}");
    }
}

#[test]
fn predictability_decreases_with_entropy() {
    let mut last = 1.0;
    for i in 1..40 {
        let entropy = i as f64 * 0.1;
        let pi = max_predictability(entropy, 20);
        assert!(pi <= last, "entropy {entropy}");
        last = pi;
    }
}

#[test]
fn fano_pieces() {
    assert_eq!(binary_entropy(0.0), 0.0);
    assert_eq!(binary_entropy(1.0), 0.0);
    assert_abs_diff_eq!(binary_entropy(0.5), 1.0, epsilon = 1e-12);
    let pi = max_predictability(2.0, 100);
    assert!(fano_residual(pi, 2.0, 100).abs() < 10.0 * TOLERANCE);
}
