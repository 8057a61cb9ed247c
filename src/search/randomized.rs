use super::random_motifs;
use crate::error::Result;
use crate::matrix::{profile_with_pseudocounts, score};
use crate::scorer::profile_motifs;
use crate::types::MotifSet;
use log::debug;
use rand::Rng;

/// One randomized motif search: a hill climb from random starting motifs.
///
/// Starting from one random k-mer per sequence, the pseudocount profile of the
/// current motifs is used to pick every sequence's most probable k-mer. The new
/// set is adopted while it scores strictly better; the first set that does not
/// improve ends the climb. The score strictly decreases on every adopted step,
/// so the loop always terminates.
///
/// A single climb stops at a local optimum. Callers are expected to repeat the
/// search with the same generator and keep the best result (see
/// [`run_search`](super::run_search)).
pub fn randomized_motif_search<S, R>(dna: &[S], k: usize, t: usize, rng: &mut R) -> Result<MotifSet>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut best = random_motifs(dna, k, t, rng)?;
    let mut best_score = score(&best)?;
    let dna = &dna[..t];

    loop {
        let profile = profile_with_pseudocounts(&best)?;
        let motifs = profile_motifs(&profile, dna)?;
        let motifs_score = score(&motifs)?;
        if motifs_score < best_score {
            debug!("randomized search improved score {} -> {}", best_score, motifs_score);
            best = motifs;
            best_score = motifs_score;
        } else {
            return Ok(best);
        }
    }
}
