// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;
use std::hash::Hash;

use crate::estimators::approaches::discrete::mle::ShannonEntropy;
use crate::estimators::approaches::discrete::uniform::UniformEntropy;
use crate::estimators::approaches::symbolic::baseline::{
    BaselineEntropy, ClosedFormBaselineEntropy,
};
use crate::estimators::approaches::symbolic::kontoyiannis::{KontoyiannisEntropy, MatchVariant};
pub use crate::estimators::traits::GlobalValue;

/// Entropy estimation methods for symbol sequences
///
/// This struct provides static methods for creating entropy estimators for the
/// different estimation approaches. All estimators report bits.
pub struct Entropy;

impl Entropy {
    /// Creates a Kontoyiannis entropy-rate estimator using strict match lengths
    ///
    /// # Arguments
    ///
    /// * `sequence` - Symbols, compared through their `Display` projection
    ///
    /// # Returns
    ///
    /// An estimator of the entropy rate in bits per symbol (`S_real`)
    pub fn new_kontoyiannis<T: Display>(sequence: &[T]) -> KontoyiannisEntropy {
        KontoyiannisEntropy::from_symbols(sequence)
    }

    /// Creates a Kontoyiannis entropy-rate estimator using longest-match lengths
    pub fn new_longest_match<T: Display>(sequence: &[T]) -> KontoyiannisEntropy {
        KontoyiannisEntropy::from_symbols(sequence).with_variant(MatchVariant::LongestMatch)
    }

    /// Creates an estimator of the entropy rate of the sequence's baseline sequence
    ///
    /// The baseline keeps the length and the number of distinct symbols but repeats
    /// one symbol for every position not needed to show each symbol once.
    pub fn new_baseline<T: Display>(sequence: &[T]) -> BaselineEntropy {
        BaselineEntropy::from_symbols(sequence)
    }

    /// Creates the closed-form approximation of the baseline entropy
    pub fn new_baseline_closed_form<T: Display>(sequence: &[T]) -> ClosedFormBaselineEntropy {
        ClosedFormBaselineEntropy::from_symbols(sequence)
    }

    /// Creates a Shannon entropy estimator over symbol frequencies (`S_unc`)
    pub fn new_shannon<T: Eq + Hash>(sequence: &[T]) -> ShannonEntropy {
        ShannonEntropy::from_tokens(sequence)
    }

    /// Creates the uniform (maximum) entropy over the observed alphabet (`S_rand`)
    pub fn new_uniform<T: Eq + Hash>(sequence: &[T]) -> UniformEntropy {
        UniformEntropy::from_tokens(sequence)
    }
}
