// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::Array1;
use seqmeasure::estimators::approaches::symbolic::symbol_utils::{
    SymbolAlphabet, SymbolSequence, normalize, normalize_shared,
};

#[test]
fn codes_follow_string_order() {
    let seq = normalize(&["b", "a", "c", "a"]);
    assert_eq!(seq.codes(), &[1, 0, 2, 0]);
    assert_eq!(seq.alphabet_size(), 3);
    assert_eq!(seq.distinct_codes(), vec![0, 1, 2]);
}

#[test]
fn numbers_are_ordered_by_their_projection() {
    // "10" < "9" as strings
    let seq = normalize(&[10, 9, 10]);
    assert_eq!(seq.codes(), &[0, 1, 0]);
}

#[test]
fn multi_character_symbols_stay_whole() {
    let seq = normalize(&["HW", "H", "W", "HW"]);
    assert_eq!(seq.alphabet_size(), 3);
    assert_eq!(seq.codes()[0], seq.codes()[3]);
}

#[test]
fn tokens_with_equal_projection_are_one_symbol() {
    let (numbers, strings) = normalize_shared(&[1, 2], &["1", "3"]);
    assert_eq!(numbers.codes()[0], strings.codes()[0]);
    assert_ne!(numbers.codes()[1], strings.codes()[1]);
}

#[test]
fn shared_normalization_uses_one_code_space() {
    let (first, second) = normalize_shared(&["x", "y"], &["y", "z"]);
    assert_eq!(first.codes(), &[0, 1]);
    assert_eq!(second.codes(), &[1, 2]);
    assert_eq!(first.concat(&second).codes(), &[0, 1, 1, 2]);
}

#[test]
fn alphabet_lookup() {
    let alphabet = SymbolAlphabet::from_symbols(&["home", "work", "home", "gym"]);
    assert_eq!(alphabet.len(), 3);
    assert_eq!(alphabet.symbols(), &["gym", "home", "work"]);
    assert_eq!(alphabet.code_of("work"), Some(2));
    assert_eq!(alphabet.code_of("cafe"), None);
    assert_eq!(alphabet.symbol(1), Some("home"));
    assert_eq!(alphabet.symbol(-1), None);
    assert_eq!(alphabet.symbol(3), None);

    let encoded = alphabet.encode(&["gym", "home"]).unwrap();
    assert_eq!(encoded.codes(), &[0, 1]);
    assert!(alphabet.encode(&["gym", "cafe"]).is_none());
}

#[test]
fn empty_sequence() {
    let seq = normalize::<&str>(&[]);
    assert!(seq.is_empty());
    assert_eq!(seq.alphabet_size(), 0);
    assert!(SymbolAlphabet::from_symbols::<&str>(&[]).is_empty());
}

#[test]
fn array_conversion() {
    let seq = SymbolSequence::from(Array1::from(vec![3, 1, 3]));
    assert_eq!(seq.codes(), &[3, 1, 3]);
    assert_eq!(seq.to_array(), Array1::from(vec![3, 1, 3]));
}
