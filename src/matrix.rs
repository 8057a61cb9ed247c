//! Count, profile and consensus views of a motif set.
//!
//! Every function here recomputes its result from the motif set it is given;
//! nothing is cached between calls.

use crate::alphabet::{checked_index, ALPHABET_SIZE, NUCLEOTIDES};
use crate::error::{MotifError, Result};
use crate::types::{CountMatrix, ProfileMatrix};
use ndarray::{Array2, Axis};

/// Pseudocount added to every cell by the smoothed variants (Laplace's rule)
pub const PSEUDOCOUNT: usize = 1;

/// Returns the common motif length, failing on an empty or ragged set.
pub(crate) fn motif_width<S: AsRef<str>>(motifs: &[S]) -> Result<usize> {
    let first = motifs
        .first()
        .ok_or_else(|| MotifError::degenerate("motif set is empty"))?;
    let width = first.as_ref().len();
    for motif in motifs {
        let len = motif.as_ref().len();
        if len != width {
            return Err(MotifError::dimension_mismatch(width, len));
        }
    }
    Ok(width)
}

fn tally<S: AsRef<str>>(motifs: &[S], initial: usize) -> Result<CountMatrix> {
    let width = motif_width(motifs)?;
    let mut counts = Array2::from_elem((ALPHABET_SIZE, width), initial);
    for motif in motifs {
        for (column, symbol) in motif.as_ref().chars().enumerate() {
            let row = checked_index(symbol, column)?;
            counts[[row, column]] += 1;
        }
    }
    Ok(CountMatrix::new(counts))
}

fn normalize(counts: &CountMatrix) -> Result<ProfileMatrix> {
    let mut probabilities = counts.as_array().mapv(|c| c as f64);
    for mut column in probabilities.axis_iter_mut(Axis(1)) {
        let total = column.sum();
        column.mapv_inplace(|c| c / total);
    }
    ProfileMatrix::new(probabilities)
}

/// Counts how often each nucleotide occurs in each column of `motifs`.
///
/// # Errors
/// * `MotifError::DegenerateInput` if `motifs` is empty
/// * `MotifError::DimensionMismatch` if the motifs differ in length
/// * `MotifError::InvalidSymbol` if a motif contains anything but A, C, G, T
pub fn count<S: AsRef<str>>(motifs: &[S]) -> Result<CountMatrix> {
    tally(motifs, 0)
}

/// Same as [`count`] with every cell starting at [`PSEUDOCOUNT`], so each
/// column sums to `t + 4`.
pub fn count_with_pseudocounts<S: AsRef<str>>(motifs: &[S]) -> Result<CountMatrix> {
    tally(motifs, PSEUDOCOUNT)
}

/// Column-normalized [`count`]: each column sums to 1.
pub fn profile<S: AsRef<str>>(motifs: &[S]) -> Result<ProfileMatrix> {
    normalize(&count(motifs)?)
}

/// Column-normalized [`count_with_pseudocounts`]; no probability is ever zero.
pub fn profile_with_pseudocounts<S: AsRef<str>>(motifs: &[S]) -> Result<ProfileMatrix> {
    normalize(&count_with_pseudocounts(motifs)?)
}

/// Most frequent nucleotide of every column.
///
/// Ties go to the first nucleotide in A, C, G, T order.
pub fn consensus<S: AsRef<str>>(motifs: &[S]) -> Result<String> {
    let counts = count(motifs)?;
    Ok(consensus_of(&counts))
}

fn consensus_of(counts: &CountMatrix) -> String {
    (0..counts.width())
        .map(|column| {
            let column = counts.column(column);
            let mut best = 0;
            for (row, &c) in column.iter().enumerate() {
                if c > column[best] {
                    best = row;
                }
            }
            NUCLEOTIDES[best]
        })
        .collect()
}

/// Total number of positions at which a motif disagrees with the consensus.
///
/// Zero means every motif is identical.
pub fn score<S: AsRef<str>>(motifs: &[S]) -> Result<usize> {
    let counts = count(motifs)?;
    let t = motifs.len();
    Ok((0..counts.width())
        .map(|column| t - counts.column(column).iter().max().copied().unwrap_or(0))
        .sum())
}

/// Sum of the per-column Shannon entropies of the raw profile, in bits.
pub fn entropy<S: AsRef<str>>(motifs: &[S]) -> Result<f64> {
    let profile = profile(motifs)?;
    Ok(profile
        .as_array()
        .axis_iter(Axis(1))
        .map(|column| {
            -column
                .iter()
                .filter(|&&p| p > 0.0)
                .map(|&p| p * p.log2())
                .sum::<f64>()
        })
        .sum())
}
