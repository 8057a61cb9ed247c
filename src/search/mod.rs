//! Motif search strategies built on the profile scorer.
//!
//! All three strategies take the input sequences `dna`, the motif length `k`
//! and the number of leading sequences to use `t`. The randomized ones also
//! take the random number generator explicitly, so a seeded generator makes a
//! run reproducible.

pub mod gibbs;
pub mod greedy;
pub mod randomized;

pub use gibbs::gibbs_sampler;
pub use greedy::greedy_motif_search;
pub use randomized::randomized_motif_search;

use crate::config::SearchConfig;
use crate::error::{MotifError, Result};
use crate::matrix;
use crate::scorer::check_window;
use crate::types::MotifSet;
use log::info;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which search procedure [`run_search`] drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Greedy,
    Randomized,
    Gibbs,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Greedy => "greedy",
            Strategy::Randomized => "randomized",
            Strategy::Gibbs => "gibbs",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "greedy" => Ok(Strategy::Greedy),
            "randomized" | "random" => Ok(Strategy::Randomized),
            "gibbs" => Ok(Strategy::Gibbs),
            other => Err(MotifError::invalid_parameter(
                "strategy",
                other,
                "expected greedy, randomized or gibbs",
            )),
        }
    }
}

/// Best motif set of a search together with its summary statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchOutcome {
    pub motifs: MotifSet,
    pub score: usize,
    pub consensus: String,
    pub entropy: f64,
}

impl SearchOutcome {
    pub fn from_motifs(motifs: MotifSet) -> Result<Self> {
        Ok(Self {
            score: matrix::score(&motifs)?,
            consensus: matrix::consensus(&motifs)?,
            entropy: matrix::entropy(&motifs)?,
            motifs,
        })
    }
}

/// Validates `k` and `t` against the first `t` sequences of `dna`.
pub(crate) fn check_inputs<S: AsRef<str>>(dna: &[S], k: usize, t: usize) -> Result<()> {
    if t == 0 {
        return Err(MotifError::degenerate("at least one sequence is required"));
    }
    if t > dna.len() {
        return Err(MotifError::invalid_parameter(
            "t",
            t,
            format!("only {} sequences available", dna.len()),
        ));
    }
    for sequence in &dna[..t] {
        check_window(sequence.as_ref(), k)?;
    }
    Ok(())
}

/// Picks one uniformly random k-mer from each of the first `t` sequences.
///
/// Start offsets are drawn from the inclusive range `[0, n - k]`, so every
/// window of a sequence of length `n` can be chosen.
pub fn random_motifs<S, R>(dna: &[S], k: usize, t: usize, rng: &mut R) -> Result<MotifSet>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    check_inputs(dna, k, t)?;
    Ok(dna[..t]
        .iter()
        .map(|sequence| {
            let sequence = sequence.as_ref();
            let start = rng.gen_range(0..=sequence.len() - k);
            sequence[start..start + k].to_string()
        })
        .collect())
}

/// Rolls a die whose faces are weighted by `weights`.
///
/// Weights are normalized to sum to one and laid out as cumulative buckets
/// in index order; the first bucket whose cumulative sum reaches a uniform
/// draw from [0, 1) wins.
///
/// # Errors
/// * `MotifError::DegenerateInput` if there are no weights or they sum to zero
pub fn weighted_die<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize> {
    let total: f64 = weights.iter().sum();
    if weights.is_empty() || total <= 0.0 || !total.is_finite() {
        return Err(MotifError::degenerate(
            "weighted die needs at least one positive weight",
        ));
    }
    let draw: f64 = rng.gen();
    let mut cumulative = 0.0;
    for (face, weight) in weights.iter().enumerate() {
        cumulative += weight / total;
        if cumulative >= draw {
            return Ok(face);
        }
    }
    // rounding can leave the final cumulative sum a hair below the draw
    Ok(weights
        .iter()
        .rposition(|&weight| weight > 0.0)
        .unwrap_or(weights.len() - 1))
}

/// Runs the configured strategy `config.restarts` times and keeps the best result.
///
/// The greedy search is deterministic and runs once regardless of the restart
/// count. Among equally scored results the earliest is kept.
pub fn run_search<S, R>(dna: &[S], config: &SearchConfig, rng: &mut R) -> Result<SearchOutcome>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    config.validate(dna.len())?;
    let k = config.k;
    let t = config.t.unwrap_or(dna.len());

    let runs = match config.strategy {
        Strategy::Greedy => 1,
        _ => config.restarts,
    };

    let mut best: Option<(MotifSet, usize)> = None;
    for run in 0..runs {
        let motifs = match config.strategy {
            Strategy::Greedy => greedy_motif_search(dna, k, t)?,
            Strategy::Randomized => randomized_motif_search(dna, k, t, rng)?,
            Strategy::Gibbs => gibbs_sampler(dna, k, t, config.iterations, rng)?,
        };
        let score = matrix::score(&motifs)?;
        info!(
            "{} run {}/{}: score {}",
            config.strategy,
            run + 1,
            runs,
            score
        );
        if best.as_ref().map_or(true, |(_, s)| score < *s) {
            best = Some((motifs, score));
        }
    }

    let (motifs, _) = best.ok_or_else(|| MotifError::degenerate("no search run completed"))?;
    SearchOutcome::from_motifs(motifs)
}
