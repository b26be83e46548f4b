// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use std::collections::HashMap;
use std::hash::Hash;

/// Shared dataset for frequency-table estimators.
pub struct DiscreteDataset {
    /// Compact symbol codes (1D)
    pub data: Array1<i32>,
    /// Counts per unique symbol
    pub counts: HashMap<i32, usize>,
    /// Total number of observations
    pub n: usize,
    /// Number of unique symbols
    pub k: usize,
    /// Probability dictionary p(x) for each unique symbol
    pub dist: HashMap<i32, f64>,
}

impl DiscreteDataset {
    /// Build a DiscreteDataset from compact 1D codes
    pub fn from_data(data: Array1<i32>) -> Self {
        let n = data.len();
        let counts = count_frequencies(&data);
        let k = counts.len();
        let n_f = n as f64;
        let mut dist = HashMap::with_capacity(k);
        for (val, cnt) in counts.iter() {
            dist.insert(*val, *cnt as f64 / n_f);
        }
        Self {
            data,
            counts,
            n,
            k,
            dist,
        }
    }

    /// Build a DiscreteDataset from arbitrary hashable tokens.
    pub fn from_tokens<T: Eq + Hash>(tokens: &[T]) -> Self {
        Self::from_data(encode_tokens(tokens))
    }

    /// Map each sample to its probability using the cached distribution dictionary
    pub fn map_probs(&self) -> Array1<f64> {
        self.data.mapv(|v| self.dist[&v])
    }
}

/// Map arbitrary tokens to compact i32 codes.
/// Each unique token gets assigned a unique i32 ID based on first occurrence order.
pub fn encode_tokens<T: Eq + Hash>(tokens: &[T]) -> Array1<i32> {
    let mut map: HashMap<&T, i32> = HashMap::with_capacity(tokens.len());
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let next_id = map.len() as i32;
        out.push(*map.entry(token).or_insert(next_id));
    }
    Array1::from(out)
}

/// Count the occurrences of each code in an array.
pub fn count_frequencies(data: &Array1<i32>) -> HashMap<i32, usize> {
    let mut frequency_map = HashMap::new();
    for &value in data.iter() {
        *frequency_map.entry(value).or_insert(0) += 1;
    }
    frequency_map
}

/// Reduce multiple code arrays (aligned by index) into a single compact joint code space.
///
/// Given k arrays of equal length containing compact i32 codes, this function produces a
/// single `Array1<i32>` where each position's tuple of codes is mapped to a unique compact i32 ID.
/// The mapping preserves first-occurrence order for determinism.
pub fn reduce_joint_space_compact(code_arrays: &[Array1<i32>]) -> Array1<i32> {
    if code_arrays.is_empty() {
        return Array1::zeros(0);
    }
    let len = code_arrays[0].len();
    for arr in code_arrays.iter() {
        assert_eq!(
            arr.len(),
            len,
            "All code arrays must have the same length for joint reduction"
        );
    }
    let keys: Vec<Vec<i32>> = (0..len)
        .map(|i| code_arrays.iter().map(|arr| arr[i]).collect())
        .collect();
    encode_tokens(&keys)
}
