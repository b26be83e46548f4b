// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Estimator configuration.
//!
//! Every option has a default, so a configuration can be deserialized from a partial
//! document (`{"solver": "bisection"}`) and the free functions in
//! [`crate::estimators::measures`] simply use [`EstimatorConfig::default`].

use serde::{Deserialize, Serialize};

/// How prior occurrences of a substring are searched when computing match lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSearch {
    /// Direct containment search of each candidate against the prefix.
    Naive,
    /// Incrementally built suffix automaton of the prefix.
    #[default]
    SuffixAutomaton,
}

/// Root finder used to invert Fano's inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictabilitySolver {
    /// Scan Π from 0.0001 to 0.9999 in steps of 0.0001 and take the first step within tolerance.
    #[default]
    LinearScan,
    /// Binary search over the same grid, branch by branch; returns the scan's value.
    Bisection,
}

/// Definition of the routine run length `k` used by the closed-form baseline entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineLength {
    /// `k = n - m + 1`
    #[default]
    NMinusMPlusOne,
    /// `k = n - m`
    NMinusM,
}

impl RoutineLength {
    /// Routine run length for a sequence of length `n` over `m` distinct symbols.
    pub fn run_length(self, n: usize, m: usize) -> usize {
        match self {
            Self::NMinusMPlusOne => n - m + 1,
            Self::NMinusM => n - m,
        }
    }
}

/// Diversity reported for a sequence in which every symbol is distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllDistinctDiversity {
    /// Compute the ratio from the LCP array like any other input, which yields 1.0.
    #[default]
    Ratio,
    /// Return 0.0, the historical early exit.
    Zero,
}

/// Options shared by all sequence complexity estimators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    pub match_search: MatchSearch,
    pub solver: PredictabilitySolver,
    pub routine_length: RoutineLength,
    pub all_distinct: AllDistinctDiversity,
}

impl EstimatorConfig {
    pub fn with_match_search(mut self, match_search: MatchSearch) -> Self {
        self.match_search = match_search;
        self
    }

    pub fn with_solver(mut self, solver: PredictabilitySolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_routine_length(mut self, routine_length: RoutineLength) -> Self {
        self.routine_length = routine_length;
        self
    }

    pub fn with_all_distinct(mut self, all_distinct: AllDistinctDiversity) -> Self {
        self.all_distinct = all_distinct;
        self
    }
}
