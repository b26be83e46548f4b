// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;

use ndarray::Array1;
use tracing::debug;

use crate::estimators::approaches::symbolic::suffix_array::SuffixIndex;
use crate::estimators::approaches::symbolic::symbol_utils::SymbolSequence;
use crate::estimators::config::{AllDistinctDiversity, EstimatorConfig};
use crate::estimators::traits::{GlobalValue, OptionalLocalValues};

/// Substring diversity: the share of distinct substrings among all n(n+1)/2
/// contiguous substrings of the sequence, in [0, 1].
///
/// The distinct count is `n(n+1)/2 - Σ lcp` from the suffix array and LCP array.
/// Sequences of length 0 or 1 have diversity 0.0. A sequence without repeated
/// symbols has no shared prefixes and therefore diversity 1.0, unless the config
/// asks for [`AllDistinctDiversity::Zero`].
pub struct DiversityEstimator {
    sequence: SymbolSequence,
    all_distinct: AllDistinctDiversity,
}

impl DiversityEstimator {
    pub fn new(sequence: SymbolSequence) -> Self {
        Self {
            sequence,
            all_distinct: AllDistinctDiversity::default(),
        }
    }

    pub fn from_symbols<T: Display>(sequence: &[T]) -> Self {
        Self::new(SymbolSequence::from_symbols(sequence))
    }

    pub fn with_config(mut self, config: &EstimatorConfig) -> Self {
        self.all_distinct = config.all_distinct;
        self
    }
}

impl GlobalValue for DiversityEstimator {
    fn global_value(&self) -> f64 {
        let n = self.sequence.len();
        if n <= 1 {
            return 0.0;
        }
        if self.all_distinct == AllDistinctDiversity::Zero && self.sequence.alphabet_size() == n {
            return 0.0;
        }
        let index = SuffixIndex::new(self.sequence.codes());
        let total = index.total_substrings();
        let distinct = index.distinct_substrings();
        debug!(n, total, distinct, "computed substring diversity");
        distinct as f64 / total as f64
    }
}

impl OptionalLocalValues for DiversityEstimator {
    fn supports_local(&self) -> bool {
        false
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Err("Substring diversity is a property of the whole sequence and has no local values.")
    }
}
