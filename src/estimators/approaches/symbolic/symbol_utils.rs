// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeSet;
use std::fmt::Display;

use ndarray::Array1;

/// Sorted set of distinct symbol projections.
///
/// A symbol is projected to its `Display` string; two tokens are the same symbol iff
/// their projections are equal. The code of a symbol is the rank of its projection,
/// so comparing codes orders symbols exactly as comparing their strings would.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolAlphabet {
    symbols: Vec<String>,
}

impl SymbolAlphabet {
    pub fn from_symbols<T: Display>(sequence: &[T]) -> Self {
        Self::from_projections(sequence.iter().map(|s| s.to_string()))
    }

    pub fn from_projections<I: IntoIterator<Item = String>>(projections: I) -> Self {
        let sorted: BTreeSet<String> = projections.into_iter().collect();
        Self {
            symbols: sorted.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Projections in code order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn code_of(&self, projection: &str) -> Option<i32> {
        self.symbols
            .binary_search_by(|s| s.as_str().cmp(projection))
            .ok()
            .map(|rank| rank as i32)
    }

    pub fn symbol(&self, code: i32) -> Option<&str> {
        usize::try_from(code)
            .ok()
            .and_then(|rank| self.symbols.get(rank))
            .map(String::as_str)
    }

    /// Encode a sequence with this alphabet, or None if one of its symbols is missing.
    pub fn encode<T: Display>(&self, sequence: &[T]) -> Option<SymbolSequence> {
        sequence
            .iter()
            .map(|s| self.code_of(&s.to_string()))
            .collect::<Option<Vec<i32>>>()
            .map(SymbolSequence::from_codes)
    }

    fn encode_projected(&self, projected: &[String]) -> SymbolSequence {
        // Every projection was inserted into the alphabet, so the search always hits.
        let codes = projected
            .iter()
            .map(|p| match self.symbols.binary_search(p) {
                Ok(rank) | Err(rank) => rank as i32,
            })
            .collect();
        SymbolSequence::from_codes(codes)
    }
}

/// A symbol sequence normalized to compact codes, ready for substring algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolSequence {
    codes: Vec<i32>,
}

impl SymbolSequence {
    /// Normalize any displayable tokens; codes follow the string order of the symbols.
    pub fn from_symbols<T: Display>(sequence: &[T]) -> Self {
        let projected = project(sequence);
        let alphabet = SymbolAlphabet::from_projections(projected.iter().cloned());
        alphabet.encode_projected(&projected)
    }

    pub fn from_codes(codes: Vec<i32>) -> Self {
        Self { codes }
    }

    pub fn codes(&self) -> &[i32] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Distinct codes in ascending order.
    pub fn distinct_codes(&self) -> Vec<i32> {
        let distinct: BTreeSet<i32> = self.codes.iter().copied().collect();
        distinct.into_iter().collect()
    }

    /// Number of distinct symbols, `N = |Alphabet|`.
    pub fn alphabet_size(&self) -> usize {
        self.distinct_codes().len()
    }

    /// This sequence followed by `other`. Both must share one code space.
    pub fn concat(&self, other: &SymbolSequence) -> SymbolSequence {
        let mut codes = Vec::with_capacity(self.len() + other.len());
        codes.extend_from_slice(&self.codes);
        codes.extend_from_slice(&other.codes);
        SymbolSequence::from_codes(codes)
    }

    pub fn to_array(&self) -> Array1<i32> {
        Array1::from(self.codes.clone())
    }
}

impl From<Array1<i32>> for SymbolSequence {
    fn from(codes: Array1<i32>) -> Self {
        Self::from_codes(codes.to_vec())
    }
}

/// Normalize a sequence of displayable tokens.
pub fn normalize<T: Display>(sequence: &[T]) -> SymbolSequence {
    SymbolSequence::from_symbols(sequence)
}

/// Normalize two sequences into one shared code space, so that equal projections
/// receive equal codes across both.
pub fn normalize_shared<A: Display, B: Display>(
    first: &[A],
    second: &[B],
) -> (SymbolSequence, SymbolSequence) {
    let first = project(first);
    let second = project(second);
    let alphabet = SymbolAlphabet::from_projections(first.iter().chain(second.iter()).cloned());
    (
        alphabet.encode_projected(&first),
        alphabet.encode_projected(&second),
    )
}

fn project<T: Display>(sequence: &[T]) -> Vec<String> {
    sequence.iter().map(|s| s.to_string()).collect()
}
