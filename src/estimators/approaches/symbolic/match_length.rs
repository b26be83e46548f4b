// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Match-length tables for the Kontoyiannis estimator.
//!
//! For a position `i` let `L_i` be the length of the longest run starting at `i`
//! that occurs entirely inside the prefix `codes[..i]`. Occurrence in a prefix is
//! closed under taking prefixes, so the first extension that fails to occur is
//! always `L_i + 1` long. This gives both tables from one `L` table:
//!
//! - strict: `λ_i = min(L_i + 1, n - i)` (the first failing extension, or the rest
//!   of the sequence when every extension matches)
//! - longest match: `λ_i = L_i + 1`
//!
//! [`MatchSearch::Naive`] runs the containment loops literally,
//! [`MatchSearch::SuffixAutomaton`] walks a suffix automaton of the prefix instead.

use std::collections::HashMap;

use ndarray::Array1;

use crate::estimators::config::MatchSearch;

/// Strict match lengths: for each `i`, `k - i` for the smallest `k > i` such that
/// `codes[i..k]` does not occur in `codes[..i]`, capped at the end of the sequence.
pub fn strict_match_lengths(codes: &[i32], search: MatchSearch) -> Array1<usize> {
    let n = codes.len();
    let lengths = match search {
        MatchSearch::Naive => per_position(n, |i| strict_match_naive(codes, i)),
        MatchSearch::SuffixAutomaton => longest_prior_matches(codes)
            .into_iter()
            .enumerate()
            .map(|(i, l)| (l + 1).min(n - i))
            .collect(),
    };
    Array1::from(lengths)
}

/// Longest-match lengths: for each `i`, one more than the longest run starting at
/// `i` that occurs in `codes[..i]`.
pub fn longest_match_lengths(codes: &[i32], search: MatchSearch) -> Array1<usize> {
    let n = codes.len();
    let prior = match search {
        MatchSearch::Naive => per_position(n, |i| longest_prior_match_naive(codes, i)),
        MatchSearch::SuffixAutomaton => longest_prior_matches(codes),
    };
    Array1::from(prior.into_iter().map(|l| l + 1).collect::<Vec<_>>())
}

/// `L_i` for every position, computed with an incrementally built suffix automaton.
///
/// Before position `i` is queried the automaton holds exactly `codes[..i]`, so a
/// walk from the root reads the longest prefix of `codes[i..]` that occurs there.
/// Runs in O(n + Σ L_i).
pub fn longest_prior_matches(codes: &[i32]) -> Vec<usize> {
    let mut automaton = SuffixAutomaton::with_capacity(codes.len());
    let mut prior = Vec::with_capacity(codes.len());
    for (i, &c) in codes.iter().enumerate() {
        prior.push(automaton.longest_prefix_match(&codes[i..]));
        automaton.extend(c);
    }
    prior
}

fn strict_match_naive(codes: &[i32], i: usize) -> usize {
    let prefix = &codes[..i];
    let n = codes.len();
    let mut k = i;
    loop {
        k += 1;
        if k >= n || !occurs_in(prefix, &codes[i..k]) {
            break;
        }
    }
    k - i
}

fn longest_prior_match_naive(codes: &[i32], i: usize) -> usize {
    let prefix = &codes[..i];
    let mut len = 0;
    while i + len < codes.len() && occurs_in(prefix, &codes[i..=i + len]) {
        len += 1;
    }
    len
}

fn occurs_in(haystack: &[i32], needle: &[i32]) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(feature = "parallel")]
fn per_position<F>(n: usize, f: F) -> Vec<usize>
where
    F: Fn(usize) -> usize + Sync + Send,
{
    use rayon::prelude::*;
    (0..n).into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
fn per_position<F>(n: usize, f: F) -> Vec<usize>
where
    F: Fn(usize) -> usize,
{
    (0..n).map(f).collect()
}

#[derive(Debug, Clone, Default)]
struct State {
    len: usize,
    link: Option<usize>,
    next: HashMap<i32, usize>,
}

/// Suffix automaton over compact symbol codes.
///
/// Recognizes exactly the substrings of everything passed to [`SuffixAutomaton::extend`]
/// so far. State 0 is the root (the empty string).
#[derive(Debug, Clone)]
pub struct SuffixAutomaton {
    states: Vec<State>,
    last: usize,
}

impl Default for SuffixAutomaton {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl SuffixAutomaton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        let mut states = Vec::with_capacity(2 * n + 1);
        states.push(State::default());
        Self { states, last: 0 }
    }

    /// Number of states, at most `2n - 1` for `n >= 2` appended symbols.
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Append one symbol to the recognized text.
    pub fn extend(&mut self, c: i32) {
        let cur = self.states.len();
        self.states.push(State {
            len: self.states[self.last].len + 1,
            link: None,
            next: HashMap::new(),
        });

        let mut p = Some(self.last);
        while let Some(pi) = p {
            if self.states[pi].next.contains_key(&c) {
                break;
            }
            self.states[pi].next.insert(c, cur);
            p = self.states[pi].link;
        }

        match p {
            None => self.states[cur].link = Some(0),
            Some(pi) => {
                let q = self.states[pi].next[&c];
                if self.states[pi].len + 1 == self.states[q].len {
                    self.states[cur].link = Some(q);
                } else {
                    let clone = self.states.len();
                    let cloned = State {
                        len: self.states[pi].len + 1,
                        link: self.states[q].link,
                        next: self.states[q].next.clone(),
                    };
                    self.states.push(cloned);
                    let mut r = Some(pi);
                    while let Some(ri) = r {
                        if self.states[ri].next.get(&c) != Some(&q) {
                            break;
                        }
                        self.states[ri].next.insert(c, clone);
                        r = self.states[ri].link;
                    }
                    self.states[q].link = Some(clone);
                    self.states[cur].link = Some(clone);
                }
            }
        }
        self.last = cur;
    }

    /// Length of the longest prefix of `pattern` that is a substring of the text.
    pub fn longest_prefix_match(&self, pattern: &[i32]) -> usize {
        let mut state = 0;
        for (len, c) in pattern.iter().enumerate() {
            match self.states[state].next.get(c) {
                Some(&next) => state = next,
                None => return len,
            }
        }
        pattern.len()
    }

    pub fn contains(&self, pattern: &[i32]) -> bool {
        self.longest_prefix_match(pattern) == pattern.len()
    }
}
