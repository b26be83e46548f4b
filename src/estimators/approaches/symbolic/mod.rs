// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// Symbolic (substring based) estimators: everything that needs to know where a
// run of symbols occurred before, rather than only how often a symbol occurred.

pub mod baseline;
pub mod diversity;
pub mod kontoyiannis;
pub mod match_length;
pub mod suffix_array;
pub mod symbol_utils;
