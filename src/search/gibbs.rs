use super::{random_motifs, weighted_die};
use crate::error::{MotifError, Result};
use crate::matrix::{profile_with_pseudocounts, score};
use crate::scorer::window_weights;
use crate::types::MotifSet;
use log::debug;
use rand::Rng;

/// Gibbs sampling motif search.
///
/// Starts from random motifs and performs exactly `iterations` steps. Each step
/// picks one sequence uniformly at random, builds the pseudocount profile of
/// all the other motifs, and replaces that sequence's motif with a window drawn
/// in proportion to its probability under the held-out profile. The current
/// motifs may get worse from one step to the next; only the best set seen is
/// kept and returned.
///
/// # Arguments
/// * `dna` - Input sequences; only the first `t` are used
/// * `k` - Motif length
/// * `t` - Number of sequences to search, at least two
/// * `iterations` - Fixed number of resampling steps
/// * `rng` - Source of randomness; a seeded generator makes the run reproducible
///
/// # Errors
/// * `MotifError::InvalidParameter` if `t` is less than two or exceeds the
///   number of sequences
/// * `MotifError::DegenerateInput` if `k` does not fit a sequence
pub fn gibbs_sampler<S, R>(
    dna: &[S],
    k: usize,
    t: usize,
    iterations: usize,
    rng: &mut R,
) -> Result<MotifSet>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    if t < 2 {
        return Err(MotifError::invalid_parameter(
            "t",
            t,
            "Gibbs sampling holds one sequence out and needs at least two",
        ));
    }
    let mut motifs = random_motifs(dna, k, t, rng)?;
    let mut best = motifs.clone();
    let mut best_score = score(&best)?;

    for iteration in 0..iterations {
        let held_out = rng.gen_range(0..t);
        let others: Vec<&str> = motifs
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != held_out)
            .map(|(_, motif)| motif.as_str())
            .collect();
        let profile = profile_with_pseudocounts(&others)?;

        let sequence = dna[held_out].as_ref();
        let weights = window_weights(sequence, k, &profile)?;
        let start = weighted_die(&weights, rng)?;
        motifs[held_out] = sequence[start..start + k].to_string();

        let motifs_score = score(&motifs)?;
        if motifs_score < best_score {
            debug!(
                "gibbs iteration {}: score {} -> {}",
                iteration, best_score, motifs_score
            );
            best = motifs.clone();
            best_score = motifs_score;
        }
    }

    Ok(best)
}
