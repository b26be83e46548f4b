// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rstest::*;
use seqmeasure::estimators::approaches::symbolic::suffix_array::{
    SuffixIndex, lcp_kasai, rank_array, suffix_array_manber_myers,
};
use seqmeasure::estimators::approaches::symbolic::symbol_utils::normalize;

use crate::test_helpers::{brute_force_distinct_substrings, chars, generate_random_codes};

#[rstest]
#[case("", vec![], vec![])]
#[case("a", vec![0], vec![0])]
#[case("aaa", vec![2, 1, 0], vec![1, 2, 0])]
#[case("abab", vec![2, 0, 3, 1], vec![2, 0, 1, 0])]
#[case("banana", vec![5, 3, 1, 0, 4, 2], vec![1, 3, 0, 0, 2, 0])]
#[case("mississippi", vec![10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2], vec![1, 1, 4, 0, 0, 1, 0, 2, 1, 3, 0])]
fn known_suffix_arrays(#[case] text: &str, #[case] sa: Vec<usize>, #[case] lcp: Vec<usize>) {
    let seq = normalize(&chars(text));
    let built = suffix_array_manber_myers(seq.codes());
    assert_eq!(built, sa);
    assert_eq!(lcp_kasai(seq.codes(), &built), lcp);
}

#[test]
fn rank_is_inverse_of_suffix_array() {
    let codes = generate_random_codes(200, 4, 11);
    let sa = suffix_array_manber_myers(&codes);
    let rank = rank_array(&sa);
    for (r, &i) in sa.iter().enumerate() {
        assert_eq!(rank[i], r);
    }
}

#[test]
fn suffix_array_matches_sorted_suffixes() {
    for seed in 0..10 {
        let codes = generate_random_codes(150, 3, seed);
        let mut expected: Vec<usize> = (0..codes.len()).collect();
        expected.sort_by(|&a, &b| codes[a..].cmp(&codes[b..]));
        assert_eq!(suffix_array_manber_myers(&codes), expected, "seed {seed}");
    }
}

#[test]
fn lcp_is_bounded_by_remaining_length() {
    let codes = generate_random_codes(300, 2, 5);
    let index = SuffixIndex::new(&codes);
    let n = codes.len();
    for r in 0..n - 1 {
        let (a, b) = (index.suffix_array[r], index.suffix_array[r + 1]);
        assert!(index.lcp[r] <= n - a.max(b));
        assert_eq!(codes[a..a + index.lcp[r]], codes[b..b + index.lcp[r]]);
    }
    assert_eq!(index.lcp[n - 1], 0);
}

#[test]
fn distinct_substrings_match_enumeration() {
    for seed in 0..20 {
        let codes = generate_random_codes(20, 3, seed);
        let index = SuffixIndex::new(&codes);
        assert_eq!(index.total_substrings(), 20 * 21 / 2);
        assert_eq!(
            index.distinct_substrings(),
            brute_force_distinct_substrings(&codes),
            "seed {seed}"
        );
    }
}
