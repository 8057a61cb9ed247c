use motif_finder::alphabet::NUCLEOTIDES;
use motif_finder::matrix::{consensus, count, count_with_pseudocounts, profile, score};
use motif_finder::scorer::{most_probable_kmer, probability};
use motif_finder::search::{gibbs_sampler, greedy_motif_search, randomized_motif_search};
use motif_finder::{run_search, SearchConfig, Strategy as SearchStrategy};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DNA: [&str; 5] = [
    "GGCGTTCAGGCA",
    "AAGAATCAGTCA",
    "CAAGGAGTTCGC",
    "CACGTCAATCAC",
    "CAATAATATTCG",
];

// each sequence carries the planted site ATGCATGC
const PLANTED: [&str; 6] = [
    "TTGACCATGCATGCGGTA",
    "ATGCATGCTTAGGACCGT",
    "CCGTAGGACTATGCATGC",
    "GGATGCATGCAATTCCAG",
    "TACCGATGCATGCGATTA",
    "CAGTTAGGATGCATGCCT",
];

#[test]
fn greedy_reference_run() {
    let motifs = greedy_motif_search(&DNA, 3, 5).unwrap();
    assert_eq!(motifs, vec!["TTC", "ATC", "TTC", "ATC", "TTC"]);
}

#[test]
fn greedy_recovers_planted_site() {
    let motifs = greedy_motif_search(&PLANTED, 8, 6).unwrap();
    assert_eq!(score(&motifs).unwrap(), 0);
    assert_eq!(consensus(&motifs).unwrap(), "ATGCATGC");
}

#[test]
fn randomized_restarts_recover_planted_site() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = SearchConfig::new(8, SearchStrategy::Randomized).with_restarts(300);
    let outcome = run_search(&PLANTED, &config, &mut rng).unwrap();
    assert_eq!(outcome.score, 0);
    assert_eq!(outcome.consensus, "ATGCATGC");
    assert_eq!(outcome.entropy, 0.0);
}

#[test]
fn gibbs_restarts_recover_planted_site() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = SearchConfig::new(8, SearchStrategy::Gibbs)
        .with_iterations(500)
        .with_restarts(20);
    let outcome = run_search(&PLANTED, &config, &mut rng).unwrap();
    assert_eq!(outcome.score, 0);
    assert!(outcome.motifs.iter().all(|m| m == "ATGCATGC"));
}

#[test]
fn seeded_searches_are_reproducible() {
    let mut a = StdRng::seed_from_u64(7);
    let mut b = StdRng::seed_from_u64(7);
    assert_eq!(
        gibbs_sampler(&DNA, 4, 5, 250, &mut a).unwrap(),
        gibbs_sampler(&DNA, 4, 5, 250, &mut b).unwrap()
    );
    assert_eq!(
        randomized_motif_search(&DNA, 4, 5, &mut a).unwrap(),
        randomized_motif_search(&DNA, 4, 5, &mut b).unwrap()
    );
}

#[test]
fn greedy_ignores_restarts() {
    let mut rng = StdRng::seed_from_u64(0);
    let config = SearchConfig::new(3, SearchStrategy::Greedy).with_restarts(50);
    let outcome = run_search(&DNA, &config, &mut rng).unwrap();
    assert_eq!(outcome.motifs, vec!["TTC", "ATC", "TTC", "ATC", "TTC"]);
    assert_eq!(outcome.score, 2);
    assert_eq!(outcome.consensus, "TTC");
}

#[test]
fn run_search_validates_config() {
    let mut rng = StdRng::seed_from_u64(0);
    let config = SearchConfig::new(3, SearchStrategy::Greedy).with_t(9);
    assert!(run_search(&DNA, &config, &mut rng).is_err());
}

fn motif_set() -> impl Strategy<Value = Vec<String>> {
    (1usize..10).prop_flat_map(|k| {
        let motif = proptest::string::string_regex(&format!("[ACGT]{{{}}}", k)).unwrap();
        prop::collection::vec(motif, 1..12)
    })
}

proptest! {
    #[test]
    fn counts_sum_to_number_of_motifs(motifs in motif_set()) {
        let t = motifs.len();
        let raw = count(&motifs).unwrap();
        let smoothed = count_with_pseudocounts(&motifs).unwrap();
        for column in 0..raw.width() {
            prop_assert_eq!(raw.column_total(column), t);
            prop_assert_eq!(smoothed.column_total(column), t + 4);
        }
    }

    #[test]
    fn profile_columns_sum_to_one(motifs in motif_set()) {
        let profile = profile(&motifs).unwrap();
        for column in 0..profile.width() {
            prop_assert!((profile.column(column).sum() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_score_iff_all_match_consensus(motifs in motif_set()) {
        let consensus = consensus(&motifs).unwrap();
        let all_match = motifs.iter().all(|m| *m == consensus);
        prop_assert_eq!(score(&motifs).unwrap() == 0, all_match);
    }

    #[test]
    fn most_probable_kmer_scores_at_least_every_window(
        motifs in motif_set(),
        sequence in "[ACGT]{10,30}",
    ) {
        let k = motifs[0].len();
        let profile = profile(&motifs).unwrap();
        let best = most_probable_kmer(&sequence, k, &profile).unwrap();
        let best_p = probability(best, &profile).unwrap();
        for start in 0..=sequence.len() - k {
            prop_assert!(probability(&sequence[start..start + k], &profile).unwrap() <= best_p);
        }
    }

    #[test]
    fn weaker_symbol_never_raises_probability(
        motifs in motif_set(),
        position in any::<prop::sample::Index>(),
    ) {
        let profile = profile(&motifs).unwrap();
        let kmer = motifs[0].clone();
        let column = position.index(kmer.len());
        let original = kmer.as_bytes()[column] as char;
        let original_p = profile.get(original, column).unwrap();

        for symbol in NUCLEOTIDES {
            if profile.get(symbol, column).unwrap() <= original_p {
                let mut weaker: Vec<char> = kmer.chars().collect();
                weaker[column] = symbol;
                let weaker: String = weaker.into_iter().collect();
                prop_assert!(
                    probability(&weaker, &profile).unwrap() <= probability(&kmer, &profile).unwrap()
                );
            }
        }
    }
}
