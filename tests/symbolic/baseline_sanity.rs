// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rstest::*;
use seqmeasure::estimators::approaches::symbolic::baseline::{
    BaselineEntropy, ClosedFormBaselineEntropy, baseline_sequence,
};
use seqmeasure::estimators::approaches::symbolic::symbol_utils::{SymbolSequence, normalize};
use seqmeasure::estimators::config::{EstimatorConfig, RoutineLength};
use seqmeasure::estimators::entropy::Entropy;
use seqmeasure::estimators::GlobalValue;
use seqmeasure::{baseline_entropy, baseline_entropy_closed_form};

use crate::test_helpers::{assert_abs_diff_eq, chars};

#[rstest]
#[case("AAAA", 1.3333333333333333, 1.1428571428571428, 1.6)]
#[case("ABAB", 1.3333333333333333, 1.3333333333333333, 2.0)]
#[case("ABCABCABCA", 1.2776646518797548, 1.4443165629945054, 1.748383207835454)]
#[case("AABBAABBAB", 1.107309364962454, 1.2303437388471712, 1.5099673158578921)]
fn known_baselines(
    #[case] text: &str,
    #[case] constructive: f64,
    #[case] closed: f64,
    #[case] closed_n_minus_m: f64,
) {
    let seq = chars(text);
    assert_abs_diff_eq!(baseline_entropy(&seq), constructive, epsilon = 1e-12);
    assert_abs_diff_eq!(baseline_entropy_closed_form(&seq), closed, epsilon = 1e-12);

    let config = EstimatorConfig::default().with_routine_length(RoutineLength::NMinusM);
    let est = ClosedFormBaselineEntropy::from_symbols(&seq).with_config(&config);
    assert_abs_diff_eq!(est.global_value(), closed_n_minus_m, epsilon = 1e-12);
}

#[test]
fn baseline_sequence_layout() {
    let seq = normalize(&chars("CABAC"));
    // A=0, B=1, C=2; routine repeats the first symbol
    assert_eq!(baseline_sequence(&seq).codes(), &[2, 2, 0, 1, 2]);
    let est = Entropy::new_baseline(&chars("CABAC"));
    assert_eq!(est.baseline_sequence().len(), 5);
    assert!(baseline_sequence(&SymbolSequence::default()).is_empty());
}

#[test]
fn routine_size() {
    let est = ClosedFormBaselineEntropy::from_sizes(10, 3);
    assert_eq!(est.routine_size(), 20);
    let config = EstimatorConfig::default().with_routine_length(RoutineLength::NMinusM);
    assert_eq!(est.with_config(&config).routine_size(), 16);
}

#[test]
fn empty_sequence() {
    let empty: [&str; 0] = [];
    assert_eq!(baseline_entropy(&empty), 0.0);
    assert_eq!(baseline_entropy_closed_form(&empty), 0.0);
    assert_eq!(BaselineEntropy::new(SymbolSequence::default()).global_value(), 0.0);
}

#[test]
#[should_panic(expected = "alphabet size cannot exceed sequence length")]
fn closed_form_rejects_impossible_sizes() {
    ClosedFormBaselineEntropy::from_sizes(3, 4);
}

#[test]
fn closed_form_follows_constructive_for_long_sequences() {
    let mut trace: Vec<u32> = vec![0; 400];
    trace.extend(1..6);
    let constructive = Entropy::new_baseline(&trace).global_value();
    let closed = Entropy::new_baseline_closed_form(&trace).global_value();
    assert!((constructive - closed).abs() / constructive < 0.1);
}
