// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rstest::*;
use seqmeasure::{regularity, stationarity};

use crate::test_helpers::assert_abs_diff_eq;

#[rstest]
#[case(vec![], 1.0)]
#[case(vec![1, 1, 1, 1], 1.0)]
#[case(vec![1, 2, 3, 4], 0.0)]
#[case(vec![1, 1, 2, 2], 0.5)]
#[case(vec![1, 1, 2, 1], 0.5)]
#[case(vec![1, 2, 1, 2], 0.5)]
#[case(vec![1, 2, 3, 1], 0.25)]
#[case(vec![1, 2, 1], 1.0 / 3.0)]
fn regularity_cases(#[case] seq: Vec<i32>, #[case] expected: f64) {
    assert_abs_diff_eq!(regularity(&seq), expected, epsilon = 1e-12);
}

#[rstest]
#[case(vec![], 1.0)]
#[case(vec![7], 1.0)]
#[case(vec![1, 1, 1, 1], 1.0)]
#[case(vec![1, 2, 3, 4], 0.0)]
#[case(vec![1, 1, 2, 2], 2.0 / 3.0)]
#[case(vec![1, 1, 2, 1], 1.0 / 3.0)]
#[case(vec![1, 2, 1, 2], 0.0)]
#[case(vec![1, 2, 3, 1], 0.0)]
#[case(vec![1, 2, 1], 0.0)]
fn stationarity_cases(#[case] seq: Vec<i32>, #[case] expected: f64) {
    assert_abs_diff_eq!(stationarity(&seq), expected, epsilon = 1e-12);
}

#[test]
fn ratios_work_on_labels() {
    let trace = ["home", "home", "work", "work", "home"];
    assert_abs_diff_eq!(regularity(&trace), 0.6, epsilon = 1e-12);
    assert_abs_diff_eq!(stationarity(&trace), 0.5, epsilon = 1e-12);
}
