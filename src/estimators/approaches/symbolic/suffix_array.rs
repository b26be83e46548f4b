// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::BTreeMap;

use tracing::{debug, trace};

/// Suffix array of a code sequence computed with Manber–Myers prefix doubling.
///
/// Suffix start indices are bucketed by their first symbol, then every bucket with
/// ties is re-keyed by the window `codes[i + order/2 .. i + order]` with `order`
/// doubling per round. A window that runs past the end of the sequence is shorter,
/// and a shorter window sorts before any window it is a prefix of. Grouping keeps
/// insertion order, so the result is reproducible.
///
/// O(n log^2 n); meant for traces of thousands of symbols.
pub fn suffix_array_manber_myers(codes: &[i32]) -> Vec<usize> {
    let mut sa = Vec::with_capacity(codes.len());
    sort_bucket(codes, (0..codes.len()).collect(), 1, &mut sa);
    sa
}

fn sort_bucket(codes: &[i32], bucket: Vec<usize>, order: usize, out: &mut Vec<usize>) {
    let n = codes.len();
    let mut groups: BTreeMap<&[i32], Vec<usize>> = BTreeMap::new();
    for i in bucket {
        let start = (i + order / 2).min(n);
        let end = (i + order).min(n);
        groups.entry(&codes[start..end]).or_default().push(i);
    }
    trace!(order, buckets = groups.len(), "refined suffix bucket");
    for group in groups.into_values() {
        if group.len() > 1 {
            sort_bucket(codes, group, order * 2, out);
        } else {
            out.extend(group);
        }
    }
}

/// Inverse permutation of a suffix array: `rank[sa[r]] == r`.
pub fn rank_array(sa: &[usize]) -> Vec<usize> {
    let mut rank = vec![0; sa.len()];
    for (r, &i) in sa.iter().enumerate() {
        rank[i] = r;
    }
    rank
}

/// LCP array with Kasai's algorithm in O(n).
///
/// `lcp[r]` is the length of the longest common prefix of the suffixes at `sa[r]`
/// and `sa[r + 1]`; the last entry is 0. Positions are visited in sequence order so
/// that the running match length `k` drops by at most one per step.
pub fn lcp_kasai(codes: &[i32], sa: &[usize]) -> Vec<usize> {
    let n = codes.len();
    assert_eq!(sa.len(), n, "suffix array must cover the whole sequence");
    let rank = rank_array(sa);
    let mut lcp = vec![0; n];
    let mut k = 0usize;
    for i in 0..n {
        k = k.saturating_sub(1);
        if rank[i] == n - 1 {
            k = 0;
            continue;
        }
        let j = sa[rank[i] + 1];
        while i + k < n && j + k < n && codes[i + k] == codes[j + k] {
            k += 1;
        }
        lcp[rank[i]] = k;
    }
    lcp
}

/// Suffix array together with its LCP array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixIndex {
    pub suffix_array: Vec<usize>,
    pub lcp: Vec<usize>,
}

impl SuffixIndex {
    pub fn new(codes: &[i32]) -> Self {
        let suffix_array = suffix_array_manber_myers(codes);
        let lcp = lcp_kasai(codes, &suffix_array);
        debug!(n = codes.len(), "built suffix index");
        Self { suffix_array, lcp }
    }

    pub fn len(&self) -> usize {
        self.suffix_array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffix_array.is_empty()
    }

    /// Substring instances counted by position: n(n+1)/2.
    pub fn total_substrings(&self) -> usize {
        let n = self.len();
        n * (n + 1) / 2
    }

    /// Substrings counted by content. Each LCP entry counts the substrings a suffix
    /// shares with its lexicographic successor.
    pub fn distinct_substrings(&self) -> usize {
        self.total_substrings() - self.lcp.iter().sum::<usize>()
    }
}
