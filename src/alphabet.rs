//! The fixed four-letter nucleotide alphabet.
//!
//! Every matrix in this crate has one row per nucleotide, in the order
//! A, C, G, T. That order is also the tie-breaking order for consensus calls.

use crate::error::{MotifError, Result};
use phf::phf_map;

/// Nucleotides in row order.
pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Number of symbols in the alphabet.
pub const ALPHABET_SIZE: usize = NUCLEOTIDES.len();

static ROW_INDEX: phf::Map<char, usize> = phf_map! {
    'A' => 0,
    'C' => 1,
    'G' => 2,
    'T' => 3,
};

static COMPLEMENT: phf::Map<char, char> = phf_map! {
    'A' => 'T',
    'C' => 'G',
    'G' => 'C',
    'T' => 'A',
};

/// Returns the matrix row of `symbol`, or `None` when it is not a nucleotide.
pub fn index_of(symbol: char) -> Option<usize> {
    ROW_INDEX.get(&symbol).copied()
}

/// Like [`index_of`] but reports `position` in the error.
pub fn checked_index(symbol: char, position: usize) -> Result<usize> {
    index_of(symbol).ok_or_else(|| MotifError::invalid_symbol(symbol, position))
}

/// Watson-Crick complement of a single nucleotide.
pub fn complement(symbol: char, position: usize) -> Result<char> {
    COMPLEMENT
        .get(&symbol)
        .copied()
        .ok_or_else(|| MotifError::invalid_symbol(symbol, position))
}

/// Checks that every character of `sequence` belongs to {A, C, G, T}.
///
/// # Errors
/// * `MotifError::InvalidSymbol` naming the first offending character
pub fn validate(sequence: &str) -> Result<()> {
    for (position, symbol) in sequence.chars().enumerate() {
        checked_index(symbol, position)?;
    }
    Ok(())
}
