// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod approaches;
pub mod config;
pub mod context;
pub mod entropy;
pub mod error;
pub mod measures;
pub mod predictability;
pub mod traits;

pub use traits::{GlobalValue, JointEntropy, LocalValues, OptionalLocalValues};
