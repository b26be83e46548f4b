// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod discrete;
pub mod symbolic;

// Unified re-exports for common estimators so tests and users can import
// seqmeasure::estimators::approaches::* ergonomically.
pub use discrete::mle::ShannonEntropy;
pub use discrete::uniform::UniformEntropy;
pub use symbolic::baseline::{BaselineEntropy, ClosedFormBaselineEntropy};
pub use symbolic::diversity::DiversityEstimator;
pub use symbolic::kontoyiannis::{KontoyiannisEntropy, MatchVariant};
pub use symbolic::symbol_utils::{SymbolAlphabet, SymbolSequence};
