// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors returned by the sequence complexity measures.
///
/// Degenerate inputs (empty sequences, a single-symbol alphabet, zero entropy) are
/// not errors; every measure defines a sentinel value for them instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComplexityError {
    #[error("sequences must have the same size (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("no predictability satisfies Fano's equality for entropy {entropy} over {alphabet_size} symbols")]
    NoConvergence { entropy: f64, alphabet_size: usize },
}

pub type Result<T> = std::result::Result<T, ComplexityError>;

/// Fail with `LengthMismatch` unless both sequences have the same length.
pub(crate) fn ensure_same_length(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(ComplexityError::LengthMismatch { left, right });
    }
    Ok(())
}
