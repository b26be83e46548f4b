// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free functions over plain symbol slices, using [`EstimatorConfig::default`].
//!
//! Substring-based measures accept any `T: Display` and compare symbols by their
//! string projection; frequency-based measures accept any `T: Eq + Hash`.

use std::fmt::Display;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::estimators::approaches::discrete::discrete_utils::encode_tokens;
use crate::estimators::approaches::discrete::mle::ShannonEntropy;
use crate::estimators::approaches::discrete::uniform::UniformEntropy;
use crate::estimators::approaches::symbolic::baseline::{
    BaselineEntropy, ClosedFormBaselineEntropy,
};
use crate::estimators::approaches::symbolic::diversity::DiversityEstimator;
use crate::estimators::approaches::symbolic::kontoyiannis::{KontoyiannisEntropy, MatchVariant};
use crate::estimators::approaches::symbolic::symbol_utils::SymbolSequence;
use crate::estimators::config::EstimatorConfig;
use crate::estimators::context::ContextStrategy;
use crate::estimators::error::{Result, ensure_same_length};
use crate::estimators::predictability;
use crate::estimators::traits::{GlobalValue, JointEntropy};

pub use crate::estimators::approaches::discrete::ratios::{regularity, stationarity};
pub use crate::estimators::predictability::{max_predictability, solve_max_predictability};

/// Kontoyiannis entropy rate with strict match lengths, in bits per symbol.
pub fn entropy_rate<T: Display>(sequence: &[T]) -> f64 {
    KontoyiannisEntropy::from_symbols(sequence).global_value()
}

/// Kontoyiannis entropy rate with longest-match lengths, in bits per symbol.
pub fn entropy_rate_longest_match<T: Display>(sequence: &[T]) -> f64 {
    KontoyiannisEntropy::from_symbols(sequence)
        .with_variant(MatchVariant::LongestMatch)
        .global_value()
}

/// Entropy rate of the baseline sequence (routine plus novelty).
pub fn baseline_entropy<T: Display>(sequence: &[T]) -> f64 {
    BaselineEntropy::from_symbols(sequence).global_value()
}

/// Closed-form approximation of [`baseline_entropy`] with `k = n - m + 1`.
pub fn baseline_entropy_closed_form<T: Display>(sequence: &[T]) -> f64 {
    ClosedFormBaselineEntropy::from_symbols(sequence).global_value()
}

/// Share of distinct substrings among all substrings, in [0, 1].
pub fn diversity<T: Display>(sequence: &[T]) -> f64 {
    DiversityEstimator::from_symbols(sequence).global_value()
}

/// Maximum predictability of the sequence minus that of its baseline sequence.
pub fn predictability_gap<T: Display>(sequence: &[T]) -> f64 {
    predictability::predictability_gap(
        &SymbolSequence::from_symbols(sequence),
        &EstimatorConfig::default(),
    )
}

/// H(X | C) by estimating X separately within each context value.
pub fn sequence_splitting<X: Display, C: Display>(x: &[X], c: &[C]) -> Result<f64> {
    ContextStrategy::Splitting.conditional_entropy(x, c, &EstimatorConfig::default())
}

/// H(X | C) as H(X, C) - H(C) with the entropy-rate estimator.
pub fn sequence_merging<X: Display, C: Display>(x: &[X], c: &[C]) -> Result<f64> {
    ContextStrategy::Merging.conditional_entropy(x, c, &EstimatorConfig::default())
}

/// H(X | C) as H(C followed by X) - H(C) with the entropy-rate estimator.
pub fn sequence_concatenating<X: Display, C: Display>(x: &[X], c: &[C]) -> Result<f64> {
    ContextStrategy::Concatenating.conditional_entropy(x, c, &EstimatorConfig::default())
}

/// Shannon entropy of the symbol frequencies, in bits.
pub fn shannon_entropy<T: Eq + Hash>(sequence: &[T]) -> f64 {
    ShannonEntropy::from_tokens(sequence).global_value()
}

/// `log2` of the number of distinct symbols.
pub fn uniform_entropy<T: Eq + Hash>(sequence: &[T]) -> f64 {
    UniformEntropy::from_tokens(sequence).global_value()
}

/// Shannon entropy of the aligned pairs (X_i, Y_i), in bits.
pub fn joint_entropy<X: Eq + Hash, Y: Eq + Hash>(x: &[X], y: &[Y]) -> Result<f64> {
    ensure_same_length(x.len(), y.len())?;
    Ok(ShannonEntropy::joint_entropy(
        &[encode_tokens(x), encode_tokens(y)],
        (),
    ))
}

/// H(X | Y) = H(X, Y) - H(Y) from frequency tables.
pub fn conditional_entropy<X: Eq + Hash, Y: Eq + Hash>(x: &[X], y: &[Y]) -> Result<f64> {
    Ok(joint_entropy(x, y)? - shannon_entropy(y))
}

/// The three entropies of Song et al. (2010).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SongEntropies {
    /// `S_rand`: uniform entropy over the visited symbols
    pub random: f64,
    /// `S_unc`: Shannon entropy of the visit frequencies
    pub uncorrelated: f64,
    /// `S_real`: Kontoyiannis entropy rate
    pub real: f64,
}

pub fn song_entropies<T: Display + Eq + Hash>(sequence: &[T]) -> SongEntropies {
    SongEntropies {
        random: uniform_entropy(sequence),
        uncorrelated: shannon_entropy(sequence),
        real: entropy_rate(sequence),
    }
}

/// Every measure of one sequence, computed with a single configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceProfile {
    pub length: usize,
    pub alphabet_size: usize,
    pub entropies: SongEntropies,
    pub entropy_rate_longest_match: f64,
    pub baseline_entropy: f64,
    pub baseline_entropy_closed_form: f64,
    pub diversity: f64,
    pub regularity: f64,
    pub stationarity: f64,
    pub max_predictability: f64,
    pub predictability_gap: f64,
}

impl SequenceProfile {
    pub fn compute<T: Display + Eq + Hash>(sequence: &[T], config: &EstimatorConfig) -> Self {
        let symbols = SymbolSequence::from_symbols(sequence);
        let alphabet_size = symbols.alphabet_size();

        let real = KontoyiannisEntropy::new(symbols.clone())
            .with_config(config)
            .global_value();
        let entropies = SongEntropies {
            random: uniform_entropy(sequence),
            uncorrelated: shannon_entropy(sequence),
            real,
        };

        Self {
            length: sequence.len(),
            alphabet_size,
            entropies,
            entropy_rate_longest_match: KontoyiannisEntropy::new(symbols.clone())
                .with_variant(MatchVariant::LongestMatch)
                .with_config(config)
                .global_value(),
            baseline_entropy: BaselineEntropy::new(symbols.clone())
                .with_config(config)
                .global_value(),
            baseline_entropy_closed_form: ClosedFormBaselineEntropy::new(&symbols)
                .with_config(config)
                .global_value(),
            diversity: DiversityEstimator::new(symbols.clone())
                .with_config(config)
                .global_value(),
            regularity: regularity(sequence),
            stationarity: stationarity(sequence),
            max_predictability: predictability::max_predictability_with(
                real,
                alphabet_size,
                config,
            ),
            predictability_gap: predictability::predictability_gap(&symbols, config),
        }
    }
}
