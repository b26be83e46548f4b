// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # seqmeasure
//!
//! Information-theoretic complexity measures for symbolic sequences such as
//! discretized location traces: how predictable, diverse, and context-dependent
//! a sequence is.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqmeasure::{diversity, entropy_rate, max_predictability, sequence_splitting};
//!
//! let trace = ["home", "work", "home", "gym", "home", "work", "home", "work"];
//! let s_real = entropy_rate(&trace);
//! let pi_max = max_predictability(s_real, 3);
//! let div = diversity(&trace);
//!
//! let hours = [8, 9, 18, 19, 8, 9, 18, 9];
//! let h_given_hour = sequence_splitting(&trace, &hours).unwrap();
//! assert!(h_given_hour <= s_real + 1e-9);
//! assert!((0.0..=1.0).contains(&pi_max));
//! assert!((0.0..=1.0).contains(&div));
//! ```
//!
//! ## Measures
//!
//! | Measure | Approach | Entry point |
//! |---------|----------|-------------|
//! | Entropy rate (strict match) | Kontoyiannis | [`entropy_rate`] |
//! | Entropy rate (longest match) | Kontoyiannis | [`entropy_rate_longest_match`] |
//! | Baseline entropy | constructive / closed form | [`baseline_entropy`], [`baseline_entropy_closed_form`] |
//! | Substring diversity | suffix array + LCP | [`diversity`] |
//! | Maximum predictability | Fano inversion | [`max_predictability`], [`predictability_gap`] |
//! | Conditional entropy | splitting / merging / concatenating | [`sequence_splitting`], [`sequence_merging`], [`sequence_concatenating`] |
//! | Shannon, uniform, joint entropy | frequency tables | [`shannon_entropy`], [`uniform_entropy`], [`joint_entropy`] |
//! | Regularity, stationarity | frequency ratios | [`regularity`], [`stationarity`] |
//!
//! All entropies are in bits.
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: free functions in [`estimators::measures`] and the
//!    [`estimators::entropy::Entropy`] factory
//! 2. **Estimation Approaches**: symbolic (substring based) and discrete
//!    (frequency based) estimators
//! 3. **Core Infrastructure**: shared traits, configuration and error types
//!
//! ## Feature Flags
//!
//! - `parallel`: compute naive match lengths and per-context entropies with rayon

pub mod estimators;

pub use estimators::config::EstimatorConfig;
pub use estimators::error::{ComplexityError, Result};
pub use estimators::measures::*;
pub use estimators::traits::{GlobalValue, JointEntropy, LocalValues, OptionalLocalValues};
