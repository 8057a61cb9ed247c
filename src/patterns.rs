//! Genome-scale pattern utilities: k-mer frequencies, exact and approximate
//! matching, and the G-C skew used to locate a replication origin.

use crate::alphabet;
use crate::error::{MotifError, Result};
use std::collections::BTreeMap;

fn windows<'a>(text: &'a str, k: usize) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    let last = if k == 0 || k > text.len() {
        0
    } else {
        text.len() - k + 1
    };
    (0..last).filter_map(move |i| text.get(i..i + k).map(|window| (i, window)))
}

/// Number of (possibly overlapping) occurrences of `pattern` in `text`
pub fn pattern_count(text: &str, pattern: &str) -> usize {
    windows(text, pattern.len())
        .filter(|&(_, window)| window == pattern)
        .count()
}

/// Count of every k-mer occurring in `text`
pub fn frequency_map(text: &str, k: usize) -> BTreeMap<&str, usize> {
    let mut freq = BTreeMap::new();
    for (_, kmer) in windows(text, k) {
        *freq.entry(kmer).or_insert(0) += 1;
    }
    freq
}

/// The most frequent k-mers of `text`, in order of first appearance
pub fn frequent_words(text: &str, k: usize) -> Vec<String> {
    let freq = frequency_map(text, k);
    let Some(&max) = freq.values().max() else {
        return Vec::new();
    };
    let mut words: Vec<String> = Vec::new();
    for (_, kmer) in windows(text, k) {
        if freq[kmer] == max && !words.iter().any(|w| w == kmer) {
            words.push(kmer.to_string());
        }
    }
    words
}

/// The sequence read backwards
pub fn reverse(sequence: &str) -> String {
    sequence.chars().rev().collect()
}

/// Complements every base (A <-> T, C <-> G) without changing the order.
///
/// # Errors
/// * `MotifError::InvalidSymbol` if the sequence contains anything but A, C, G, T
pub fn complement(sequence: &str) -> Result<String> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, symbol)| alphabet::complement(symbol, position))
        .collect()
}

/// Generates the reverse complement of a DNA sequence.
///
/// # Errors
/// * `MotifError::InvalidSymbol` if the sequence contains anything but A, C, G, T
pub fn reverse_complement(sequence: &str) -> Result<String> {
    complement(sequence).map(|complemented| reverse(&complemented))
}

/// Every start position where `pattern` occurs exactly in `genome`
pub fn pattern_matching(genome: &str, pattern: &str) -> Vec<usize> {
    windows(genome, pattern.len())
        .filter(|&(_, window)| window == pattern)
        .map(|(i, _)| i)
        .collect()
}

/// Occurrences of `symbol` in the half-genome window starting at each position.
///
/// The genome is treated as circular, so windows near the end wrap around.
pub fn symbol_array(genome: &str, symbol: char) -> Vec<usize> {
    let bases: Vec<char> = genome.chars().collect();
    let n = bases.len();
    if n == 0 {
        return Vec::new();
    }
    let half = n / 2;
    let at = |i: usize| bases[i % n] == symbol;

    let mut array = Vec::with_capacity(n);
    let mut count = (0..half).filter(|&i| at(i)).count();
    array.push(count);
    for i in 1..n {
        if at(i - 1) {
            count -= 1;
        }
        if at(i + half - 1) {
            count += 1;
        }
        array.push(count);
    }
    array
}

/// Running difference between G and C counts; `skew[i]` covers the first `i` bases
pub fn skew_array(genome: &str) -> Vec<i64> {
    let mut skew = Vec::with_capacity(genome.len() + 1);
    let mut current = 0i64;
    skew.push(current);
    for base in genome.chars() {
        match base {
            'G' => current += 1,
            'C' => current -= 1,
            _ => {}
        }
        skew.push(current);
    }
    skew
}

/// Positions at which the skew reaches its minimum
pub fn minimum_skew(genome: &str) -> Vec<usize> {
    let skew = skew_array(genome);
    let min = skew.iter().copied().min().unwrap_or(0);
    skew.iter()
        .enumerate()
        .filter(|&(_, &value)| value == min)
        .map(|(i, _)| i)
        .collect()
}

/// Number of positions at which `a` and `b` differ.
///
/// # Errors
/// * `MotifError::DimensionMismatch` if the strings differ in length
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    if a.len() != b.len() {
        return Err(MotifError::dimension_mismatch(a.len(), b.len()));
    }
    Ok(a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count())
}

/// Start positions where `pattern` occurs in `genome` with at most `d` mismatches
pub fn approx_pattern_matching(genome: &str, pattern: &str, d: usize) -> Vec<usize> {
    windows(genome, pattern.len())
        .filter(|&(_, window)| mismatches(window, pattern) <= d)
        .map(|(i, _)| i)
        .collect()
}

/// Number of windows of `genome` within `d` mismatches of `pattern`
pub fn approx_pattern_count(genome: &str, pattern: &str, d: usize) -> usize {
    approx_pattern_matching(genome, pattern, d).len()
}

// windows always match the pattern length
fn mismatches(window: &str, pattern: &str) -> usize {
    window
        .bytes()
        .zip(pattern.bytes())
        .filter(|(x, y)| x != y)
        .count()
}
