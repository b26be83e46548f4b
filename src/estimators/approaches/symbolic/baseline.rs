// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Baseline entropy: the entropy rate a sequence would have if it kept its length
//! and its number of distinct symbols but was otherwise perfectly routine.
//!
//! Reference: https://epjdatascience.springeropen.com/articles/10.1140/epjds/s13688-021-00304-8

use std::fmt::Display;

use ndarray::Array1;

use crate::estimators::approaches::symbolic::kontoyiannis::KontoyiannisEntropy;
use crate::estimators::approaches::symbolic::symbol_utils::SymbolSequence;
use crate::estimators::config::{EstimatorConfig, RoutineLength};
use crate::estimators::traits::{GlobalValue, OptionalLocalValues};

/// Synthetic sequence with the same length `n` and alphabet size `m`: the first
/// symbol repeated `n - m` times (routine), then every distinct symbol once in
/// ascending code order (novelty).
pub fn baseline_sequence(sequence: &SymbolSequence) -> SymbolSequence {
    let Some(&first) = sequence.codes().first() else {
        return SymbolSequence::default();
    };
    let novelty = sequence.distinct_codes();
    let mut codes = vec![first; sequence.len() - novelty.len()];
    codes.extend(novelty);
    SymbolSequence::from_codes(codes)
}

/// Kontoyiannis entropy rate of the [`baseline_sequence`].
pub struct BaselineEntropy {
    sequence: SymbolSequence,
    config: EstimatorConfig,
}

impl BaselineEntropy {
    pub fn new(sequence: SymbolSequence) -> Self {
        Self {
            sequence,
            config: EstimatorConfig::default(),
        }
    }

    pub fn from_symbols<T: Display>(sequence: &[T]) -> Self {
        Self::new(SymbolSequence::from_symbols(sequence))
    }

    pub fn with_config(mut self, config: &EstimatorConfig) -> Self {
        self.config = *config;
        self
    }

    pub fn baseline_sequence(&self) -> SymbolSequence {
        baseline_sequence(&self.sequence)
    }
}

impl GlobalValue for BaselineEntropy {
    fn global_value(&self) -> f64 {
        if self.sequence.is_empty() {
            return 0.0;
        }
        KontoyiannisEntropy::new(self.baseline_sequence())
            .with_config(&self.config)
            .global_value()
    }
}

impl OptionalLocalValues for BaselineEntropy {
    fn supports_local(&self) -> bool {
        false
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Err("Baseline entropy describes a synthetic sequence and has no local values.")
    }
}

/// Closed-form approximation of the baseline entropy, without building the sequence.
///
/// With routine run length `k` (see [`RoutineLength`]):
/// `n·log2(n) / (ceil(k²/4 + k/2) + m)`. Not reliable below roughly 100 symbols.
pub struct ClosedFormBaselineEntropy {
    n: usize,
    m: usize,
    routine_length: RoutineLength,
}

impl ClosedFormBaselineEntropy {
    pub fn new(sequence: &SymbolSequence) -> Self {
        Self::from_sizes(sequence.len(), sequence.alphabet_size())
    }

    pub fn from_symbols<T: Display>(sequence: &[T]) -> Self {
        Self::new(&SymbolSequence::from_symbols(sequence))
    }

    /// Sequence length `n` and number of distinct symbols `m`; requires `m <= n`.
    pub fn from_sizes(n: usize, m: usize) -> Self {
        assert!(m <= n, "alphabet size cannot exceed sequence length");
        Self {
            n,
            m,
            routine_length: RoutineLength::default(),
        }
    }

    pub fn with_config(mut self, config: &EstimatorConfig) -> Self {
        self.routine_length = config.routine_length;
        self
    }

    /// `ceil(k²/4 + k/2)`
    pub fn routine_size(&self) -> usize {
        let k = self.routine_length.run_length(self.n, self.m) as f64;
        (k * k / 4.0 + k / 2.0).ceil() as usize
    }
}

impl GlobalValue for ClosedFormBaselineEntropy {
    fn global_value(&self) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let n_f = self.n as f64;
        n_f * n_f.log2() / (self.routine_size() + self.m) as f64
    }
}
