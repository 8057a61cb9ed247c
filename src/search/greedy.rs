use super::check_inputs;
use crate::error::Result;
use crate::matrix::{profile_with_pseudocounts, score};
use crate::scorer::most_probable_kmer;
use crate::types::MotifSet;

/// Deterministic greedy motif search.
///
/// Each window of the first sequence seeds a candidate motif set. Every later
/// sequence contributes its most probable k-mer under the pseudocount profile
/// of the motifs chosen so far. The first candidate with the strictly lowest
/// score is returned; if no candidate beats the first k-mer of every sequence,
/// that set is returned instead.
///
/// # Arguments
/// * `dna` - Input sequences; only the first `t` are used
/// * `k` - Motif length
/// * `t` - Number of sequences to search
///
/// # Errors
/// * `MotifError::DegenerateInput` if `t` is zero or `k` does not fit a sequence
/// * `MotifError::InvalidParameter` if `t` exceeds the number of sequences
/// * `MotifError::InvalidSymbol` if a sequence contains anything but A, C, G, T
pub fn greedy_motif_search<S: AsRef<str>>(dna: &[S], k: usize, t: usize) -> Result<MotifSet> {
    check_inputs(dna, k, t)?;
    let dna: Vec<&str> = dna[..t].iter().map(|s| s.as_ref()).collect();

    let mut best: MotifSet = dna.iter().map(|s| s[..k].to_string()).collect();
    let mut best_score = score(&best)?;

    let first = dna[0];
    for start in 0..=first.len() - k {
        let mut motifs: MotifSet = Vec::with_capacity(t);
        motifs.push(first[start..start + k].to_string());
        for sequence in &dna[1..] {
            let profile = profile_with_pseudocounts(&motifs)?;
            motifs.push(most_probable_kmer(sequence, k, &profile)?.to_string());
        }
        let candidate_score = score(&motifs)?;
        if candidate_score < best_score {
            best = motifs;
            best_score = candidate_score;
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MotifError;

    const DNA: [&str; 5] = [
        "GGCGTTCAGGCA",
        "AAGAATCAGTCA",
        "CAAGGAGTTCGC",
        "CACGTCAATCAC",
        "CAATAATATTCG",
    ];

    #[test]
    fn reference_run() {
        let motifs = greedy_motif_search(&DNA, 3, 5).unwrap();
        assert_eq!(motifs, vec!["TTC", "ATC", "TTC", "ATC", "TTC"]);
        assert_eq!(score(&motifs).unwrap(), 2);
    }

    #[test]
    fn is_deterministic() {
        let first = greedy_motif_search(&DNA, 4, 5).unwrap();
        let second = greedy_motif_search(&DNA, 4, 5).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn uses_only_first_t_sequences() {
        let motifs = greedy_motif_search(&DNA, 3, 2).unwrap();
        assert_eq!(motifs.len(), 2);
    }

    #[test]
    fn finds_shared_kmer() {
        let dna = ["TTACGTAGCA", "GGGACGTAGT", "ACGTAGCCCC", "CCCCCACGTA"];
        let motifs = greedy_motif_search(&dna, 5, 4).unwrap();
        assert_eq!(score(&motifs).unwrap(), 0);
        assert!(motifs.iter().all(|m| m == "ACGTA"));
    }

    #[test]
    fn rejects_oversized_k() {
        assert!(matches!(
            greedy_motif_search(&DNA, 13, 5),
            Err(MotifError::DegenerateInput(_))
        ));
    }
}
