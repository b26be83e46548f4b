// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::hash::Hash;

use ndarray::Array1;

use crate::estimators::approaches::discrete::discrete_utils::DiscreteDataset;
use crate::estimators::traits::{GlobalValue, LocalValues, OptionalLocalValues};

/// Entropy of a uniform distribution over the observed alphabet, `log2(K)` bits (`S_rand`).
///
/// This is the maximum entropy any distribution over the same K symbols can have.
pub struct UniformEntropy {
    dataset: DiscreteDataset,
}

impl UniformEntropy {
    pub fn new(data: Array1<i32>) -> Self {
        let dataset = DiscreteDataset::from_data(data);
        Self { dataset }
    }

    pub fn from_tokens<T: Eq + Hash>(tokens: &[T]) -> Self {
        let dataset = DiscreteDataset::from_tokens(tokens);
        Self { dataset }
    }
}

impl GlobalValue for UniformEntropy {
    fn global_value(&self) -> f64 {
        if self.dataset.k == 0 {
            return 0.0;
        }
        (self.dataset.k as f64).log2()
    }
}

impl LocalValues for UniformEntropy {
    fn local_values(&self) -> Array1<f64> {
        Array1::from_elem(self.dataset.n, self.global_value())
    }
}

impl OptionalLocalValues for UniformEntropy {
    fn supports_local(&self) -> bool {
        true
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}
