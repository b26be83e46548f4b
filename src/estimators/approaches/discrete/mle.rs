// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::hash::Hash;

use ndarray::Array1;

use crate::estimators::approaches::discrete::discrete_utils::{
    DiscreteDataset, reduce_joint_space_compact,
};
use crate::estimators::traits::{GlobalValue, JointEntropy, LocalValues, OptionalLocalValues};

/// Shannon entropy of the symbol frequencies, in bits (`S_unc`).
///
/// Computes H = -Σ p_i log2 p_i from empirical probabilities p_i = n_i/N. It ignores
/// the order of the sequence entirely, so it upper-bounds the entropy rate of the
/// same sequence. Local values are -log2 p(x) per position.
pub struct ShannonEntropy {
    dataset: DiscreteDataset,
}

impl ShannonEntropy {
    pub fn new(data: Array1<i32>) -> Self {
        let dataset = DiscreteDataset::from_data(data);
        Self { dataset }
    }

    pub fn from_tokens<T: Eq + Hash>(tokens: &[T]) -> Self {
        let dataset = DiscreteDataset::from_tokens(tokens);
        Self { dataset }
    }
}

impl GlobalValue for ShannonEntropy {
    fn global_value(&self) -> f64 {
        if self.dataset.n == 0 {
            return 0.0;
        }
        let n_f = self.dataset.n as f64;
        let mut h = 0.0_f64;
        for &cnt in self.dataset.counts.values() {
            let p = (cnt as f64) / n_f;
            h -= if p > 0.0 { p * p.log2() } else { 0.0 };
        }
        h
    }
}

impl LocalValues for ShannonEntropy {
    fn local_values(&self) -> Array1<f64> {
        let p_local = self.dataset.map_probs();
        -p_local.mapv(f64::log2)
    }
}

impl OptionalLocalValues for ShannonEntropy {
    fn supports_local(&self) -> bool {
        true
    }
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        Ok(self.local_values())
    }
}

impl JointEntropy for ShannonEntropy {
    type Source = Array1<i32>;
    type Params = ();

    /// H(X1, ..., Xn) over the tuples observed at each position.
    fn joint_entropy(series: &[Self::Source], _params: Self::Params) -> f64 {
        if series.is_empty() {
            return 0.0;
        }
        let joint_codes = reduce_joint_space_compact(series);
        ShannonEntropy::new(joint_codes).global_value()
    }
}
