// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Upper bound on predictability from Fano's inequality.
//!
//! For a sequence with entropy `S` over `N` symbols, the maximum accuracy Π of any
//! predictor satisfies
//!
//! ```text
//! S = H(Π) + (1 - Π) log2(N - 1),   H(Π) = -Π log2 Π - (1 - Π) log2(1 - Π)
//! ```
//!
//! The right-hand side rises from `log2(N - 1)` at Π → 0 to its peak `log2 N` at
//! Π = 1/N and falls to 0 at Π = 1. The reference solver scans Π upwards and takes
//! the first root it meets, so for `log2(N - 1) < S <= log2 N` it returns the root
//! on the rising branch.
//!
//! Reference: Song, Qu, Blumm, Barabási. Limits of Predictability in Human Mobility.
//! Science 327(5968), 2010.

use tracing::{debug, warn};

use crate::estimators::approaches::symbolic::baseline::BaselineEntropy;
use crate::estimators::approaches::symbolic::kontoyiannis::KontoyiannisEntropy;
use crate::estimators::approaches::symbolic::symbol_utils::SymbolSequence;
use crate::estimators::config::{EstimatorConfig, PredictabilitySolver};
use crate::estimators::error::{ComplexityError, Result};
use crate::estimators::traits::GlobalValue;

/// Step between scanned values of Π.
pub const SCAN_STEP: f64 = 0.0001;
/// Largest accepted |residual| of the Fano equality.
pub const TOLERANCE: f64 = 0.001;

const SCAN_STEPS: usize = 9999;

/// Binary entropy H(p) in bits, 0 at the endpoints.
pub fn binary_entropy(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }
    -p * p.log2() - (1.0 - p) * (1.0 - p).log2()
}

/// Right-hand side of Fano's equality minus the entropy; meaningful for `alphabet_size >= 2`.
pub fn fano_residual(p: f64, entropy: f64, alphabet_size: usize) -> f64 {
    let rest = (alphabet_size.saturating_sub(1) as f64).log2();
    binary_entropy(p) + (1.0 - p) * rest - entropy
}

/// Maximum predictability Π in [0, 1] for entropy `entropy` over `alphabet_size` symbols.
///
/// Returns 1.0 when the entropy is zero or there is at most one symbol, and 0.0 when
/// no Π satisfies the equality within [`TOLERANCE`]. Use
/// [`solve_max_predictability`] to tell the latter apart from a real result.
pub fn max_predictability(entropy: f64, alphabet_size: usize) -> f64 {
    max_predictability_with(entropy, alphabet_size, &EstimatorConfig::default())
}

pub fn max_predictability_with(
    entropy: f64,
    alphabet_size: usize,
    config: &EstimatorConfig,
) -> f64 {
    solve_max_predictability(entropy, alphabet_size, config.solver).unwrap_or(0.0)
}

/// Like [`max_predictability`], but reports non-convergence as an error.
pub fn solve_max_predictability(
    entropy: f64,
    alphabet_size: usize,
    solver: PredictabilitySolver,
) -> Result<f64> {
    if entropy == 0.0 || alphabet_size <= 1 {
        return Ok(1.0);
    }
    let root = match solver {
        PredictabilitySolver::LinearScan => scan(entropy, alphabet_size),
        PredictabilitySolver::Bisection => bisect(entropy, alphabet_size),
    };
    match root {
        Some(pi) => {
            debug!(entropy, alphabet_size, pi, ?solver, "solved Fano equality");
            Ok(pi)
        }
        None => {
            warn!(entropy, alphabet_size, ?solver, "Fano equality has no root within tolerance");
            Err(ComplexityError::NoConvergence {
                entropy,
                alphabet_size,
            })
        }
    }
}

fn grid_point(i: usize) -> f64 {
    SCAN_STEP + i as f64 * SCAN_STEP
}

fn scan(entropy: f64, alphabet_size: usize) -> Option<f64> {
    (0..SCAN_STEPS)
        .map(grid_point)
        .find(|&p| fano_residual(p, entropy, alphabet_size).abs() <= TOLERANCE)
        .map(round3)
}

/// Binary search over the scan grid, one monotonic branch at a time. On each branch
/// the grid points within tolerance form one contiguous run, so the first point of
/// the run is exactly what the scan would return.
fn bisect(entropy: f64, alphabet_size: usize) -> Option<f64> {
    let residual = |i: usize| fano_residual(grid_point(i), entropy, alphabet_size);
    let peak_at = 1.0 / alphabet_size as f64;
    let split = partition_point(0, SCAN_STEPS, |i| grid_point(i) <= peak_at);

    let rising = partition_point(0, split, |i| residual(i) < -TOLERANCE);
    if rising < split && residual(rising) <= TOLERANCE {
        return Some(round3(grid_point(rising)));
    }
    let falling = partition_point(split, SCAN_STEPS, |i| residual(i) > TOLERANCE);
    if falling < SCAN_STEPS && residual(falling).abs() <= TOLERANCE {
        return Some(round3(grid_point(falling)));
    }
    None
}

/// First index in `lo..hi` for which `before` is false; `before` must hold on a prefix.
fn partition_point(mut lo: usize, mut hi: usize, before: impl Fn(usize) -> bool) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if before(mid) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Three decimals of the exact binary value of `p`, ties to even. Scaling by 1000
/// first would turn grid points such as 0.0625 into exact ties and round them up.
fn round3(p: f64) -> f64 {
    format!("{p:.3}").parse().unwrap_or(p)
}

/// Difference between the maximum predictability of a sequence and that of its
/// baseline sequence, both over the sequence's own alphabet size.
///
/// Positive when the sequence is more predictable than pure routine plus novelty
/// would make it. 0.0 for an empty sequence.
pub fn predictability_gap(sequence: &SymbolSequence, config: &EstimatorConfig) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let alphabet_size = sequence.alphabet_size();

    let original = KontoyiannisEntropy::new(sequence.clone())
        .with_config(config)
        .global_value();
    let baseline = BaselineEntropy::new(sequence.clone())
        .with_config(config)
        .global_value();

    let original_pi = max_predictability_with(original, alphabet_size, config);
    let baseline_pi = max_predictability_with(baseline, alphabet_size, config);
    original_pi - baseline_pi
}
