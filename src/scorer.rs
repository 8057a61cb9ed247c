//! Likelihood of k-mers under a profile matrix.

use crate::alphabet::checked_index;
use crate::error::{MotifError, Result};
use crate::types::{MotifSet, ProfileMatrix};

/// Probability that `profile` generates `kmer`.
///
/// The product of `profile[kmer[i]][i]` over every position.
///
/// # Errors
/// * `MotifError::DimensionMismatch` if `kmer` is not as wide as `profile`
/// * `MotifError::InvalidSymbol` if `kmer` contains anything but A, C, G, T
pub fn probability(kmer: &str, profile: &ProfileMatrix) -> Result<f64> {
    if kmer.len() != profile.width() {
        return Err(MotifError::dimension_mismatch(profile.width(), kmer.len()));
    }
    let mut p = 1.0;
    for (column, symbol) in kmer.chars().enumerate() {
        p *= profile.at(checked_index(symbol, column)?, column);
    }
    Ok(p)
}

/// Checks that `sequence` has at least one window of length `k`.
pub(crate) fn check_window(sequence: &str, k: usize) -> Result<()> {
    if k == 0 {
        return Err(MotifError::degenerate("motif length k must be positive"));
    }
    if k > sequence.len() {
        return Err(MotifError::degenerate(format!(
            "motif length {} exceeds sequence length {}",
            k,
            sequence.len()
        )));
    }
    crate::alphabet::validate(sequence)
}

/// Natural log of [`probability`], summed per column so long k-mers do not
/// underflow. A zero profile entry gives negative infinity.
pub fn log_probability(kmer: &str, profile: &ProfileMatrix) -> Result<f64> {
    if kmer.len() != profile.width() {
        return Err(MotifError::dimension_mismatch(profile.width(), kmer.len()));
    }
    let mut log_p = 0.0;
    for (column, symbol) in kmer.chars().enumerate() {
        log_p += profile.at(checked_index(symbol, column)?, column).ln();
    }
    Ok(log_p)
}

/// Log-probability of every length-`k` window of `sequence`, by start offset.
pub fn window_log_probabilities(
    sequence: &str,
    k: usize,
    profile: &ProfileMatrix,
) -> Result<Vec<f64>> {
    check_window(sequence, k)?;
    (0..=sequence.len() - k)
        .map(|start| log_probability(&sequence[start..start + k], profile))
        .collect()
}

/// Window probabilities of `sequence` scaled so the most probable window has
/// weight 1.
///
/// The ratios between windows are those of their probabilities, which makes
/// the result suitable for sampling even when every raw probability would
/// underflow. If every window has probability zero, every weight is zero.
pub fn window_weights(sequence: &str, k: usize, profile: &ProfileMatrix) -> Result<Vec<f64>> {
    let log_probabilities = window_log_probabilities(sequence, k, profile)?;
    let max = log_probabilities
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return Ok(vec![0.0; log_probabilities.len()]);
    }
    Ok(log_probabilities
        .iter()
        .map(|&log_p| (log_p - max).exp())
        .collect())
}

/// The profile-most-probable k-mer of `sequence`.
///
/// Windows are compared by log-probability, scanned left to right, and only a
/// strictly higher value replaces the current best, so the leftmost maximum
/// wins. When every window has probability zero the first window is returned.
///
/// # Errors
/// * `MotifError::DegenerateInput` if `k` is zero or longer than `sequence`
/// * `MotifError::DimensionMismatch` if `k` differs from the profile width
pub fn most_probable_kmer<'a>(
    sequence: &'a str,
    k: usize,
    profile: &ProfileMatrix,
) -> Result<&'a str> {
    let log_probabilities = window_log_probabilities(sequence, k, profile)?;
    let mut best = 0;
    for (start, &log_p) in log_probabilities.iter().enumerate() {
        if log_p > log_probabilities[best] {
            best = start;
        }
    }
    Ok(&sequence[best..best + k])
}

/// The most probable k-mer of every sequence in `dna`, in order.
pub fn profile_motifs<S: AsRef<str>>(profile: &ProfileMatrix, dna: &[S]) -> Result<MotifSet> {
    let k = profile.width();
    dna.iter()
        .map(|sequence| most_probable_kmer(sequence.as_ref(), k, profile).map(str::to_string))
        .collect()
}
