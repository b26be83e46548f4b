// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0


//! Module containing tests for frequency-table estimators and ratios.
mod ratio_metrics;
