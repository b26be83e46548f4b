// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Frequency-table estimators: they only compare symbols for equality and never
// look at the order of the sequence beyond adjacent pairs.

pub mod discrete_utils;
pub mod mle;
pub mod ratios;
pub mod uniform;
