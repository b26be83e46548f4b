// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conditional entropy rate H(X | C) of a sequence given an aligned context
//! sequence, approximated with the Kontoyiannis estimator.
//!
//! Reference: https://dl.acm.org/doi/10.1145/3459625

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::estimators::approaches::symbolic::kontoyiannis::KontoyiannisEntropy;
use crate::estimators::approaches::symbolic::symbol_utils::{
    SymbolSequence, normalize, normalize_shared,
};
use crate::estimators::config::EstimatorConfig;
use crate::estimators::error::{Result, ensure_same_length};
use crate::estimators::traits::{GlobalValue, JointEntropy};

/// How the context sequence is combined with the sequence of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextStrategy {
    /// Estimate X within each context value and average, weighted by stratum size.
    #[default]
    Splitting,
    /// H(X, C) - H(C) over the sequence of (X_i, C_i) pairs.
    Merging,
    /// H(C followed by X) - H(C).
    Concatenating,
}

impl ContextStrategy {
    /// Conditional entropy rate of `x` given `c`. Both must have the same length.
    pub fn conditional_entropy<X: Display, C: Display>(
        self,
        x: &[X],
        c: &[C],
        config: &EstimatorConfig,
    ) -> Result<f64> {
        ensure_same_length(x.len(), c.len())?;
        match self {
            Self::Splitting => sequence_splitting_codes(&normalize(x), &normalize(c), config),
            Self::Merging => sequence_merging_codes(&normalize(x), &normalize(c), config),
            Self::Concatenating => {
                let (c, x) = normalize_shared(c, x);
                sequence_concatenating_codes(&x, &c, config)
            }
        }
    }
}

fn entropy_rate(sequence: SymbolSequence, config: &EstimatorConfig) -> f64 {
    KontoyiannisEntropy::new(sequence)
        .with_config(config)
        .global_value()
}

/// Sequence splitting on normalized sequences.
///
/// Strata are visited in context-code order, so the weighted sum is reproducible.
/// Transitions across contexts are lost; only within-context structure counts.
pub fn sequence_splitting_codes(
    x: &SymbolSequence,
    c: &SymbolSequence,
    config: &EstimatorConfig,
) -> Result<f64> {
    ensure_same_length(x.len(), c.len())?;
    let n = x.len() as f64;

    let mut strata: BTreeMap<i32, Vec<i32>> = BTreeMap::new();
    for (&xi, &ci) in x.codes().iter().zip(c.codes()) {
        strata.entry(ci).or_default().push(xi);
    }
    let strata: Vec<Vec<i32>> = strata.into_values().collect();

    let weighted: f64 = stratum_entropies(strata, config)
        .into_iter()
        .map(|(len, h)| (len as f64 / n) * h)
        .sum();
    debug!(n = x.len(), conditional_entropy = weighted, "sequence splitting");
    Ok(weighted)
}

#[cfg(feature = "parallel")]
fn stratum_entropies(strata: Vec<Vec<i32>>, config: &EstimatorConfig) -> Vec<(usize, f64)> {
    use rayon::prelude::*;
    strata
        .into_par_iter()
        .map(|codes| (codes.len(), entropy_rate(SymbolSequence::from_codes(codes), config)))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn stratum_entropies(strata: Vec<Vec<i32>>, config: &EstimatorConfig) -> Vec<(usize, f64)> {
    strata
        .into_iter()
        .map(|codes| (codes.len(), entropy_rate(SymbolSequence::from_codes(codes), config)))
        .collect()
}

/// Sequence merging on normalized sequences: each position becomes the pair
/// (X_i, C_i). The estimator is not additive for finite samples, so this is an
/// approximation of H(X | C) and may come out negative for short sequences.
pub fn sequence_merging_codes(
    x: &SymbolSequence,
    c: &SymbolSequence,
    config: &EstimatorConfig,
) -> Result<f64> {
    ensure_same_length(x.len(), c.len())?;
    let joint = KontoyiannisEntropy::joint_entropy(&[x.clone(), c.clone()], *config);
    let context = entropy_rate(c.clone(), config);
    debug!(n = x.len(), joint, context, "sequence merging");
    Ok(joint - context)
}

/// Sequence concatenating on normalized sequences. `x` and `c` must share one code
/// space (see [`normalize_shared`]) so that matches can reach from `x` back into `c`.
pub fn sequence_concatenating_codes(
    x: &SymbolSequence,
    c: &SymbolSequence,
    config: &EstimatorConfig,
) -> Result<f64> {
    ensure_same_length(x.len(), c.len())?;
    let combined = entropy_rate(c.concat(x), config);
    let context = entropy_rate(c.clone(), config);
    debug!(n = x.len(), combined, context, "sequence concatenating");
    Ok(combined - context)
}
