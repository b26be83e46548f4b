// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashSet;
use std::hash::Hash;

/// Share of visits that return to an already visited symbol.
///
/// `1 - unique / total`, with 1.0 when there is at most one unique symbol
/// (this includes the empty sequence) and 0.0 when every symbol is distinct.
pub fn regularity<T: Eq + Hash>(sequence: &[T]) -> f64 {
    let unique = sequence.iter().collect::<HashSet<_>>().len();
    if unique <= 1 {
        return 1.0;
    }
    if unique == sequence.len() {
        return 0.0;
    }
    1.0 - (unique as f64 / sequence.len() as f64)
}

/// Fraction of transitions whose source and destination symbols are the same.
///
/// 1.0 for sequences with at most one element, 0.0 when every symbol is distinct.
pub fn stationarity<T: Eq + Hash>(sequence: &[T]) -> f64 {
    if sequence.len() <= 1 {
        return 1.0;
    }
    let unique = sequence.iter().collect::<HashSet<_>>().len();
    if unique == sequence.len() {
        return 0.0;
    }
    let stationary = sequence.windows(2).filter(|w| w[0] == w[1]).count();
    stationary as f64 / (sequence.len() - 1) as f64
}
