use crate::error::{MotifError, Result};
use crate::search::Strategy;
use serde::{Deserialize, Serialize};

/// Default motif length, the width of the DosR binding site
pub const DEFAULT_K: usize = 15;
/// Default number of Gibbs resampling steps per run
pub const DEFAULT_ITERATIONS: usize = 10_000;
/// Default number of independent runs for the randomized strategies
pub const DEFAULT_RESTARTS: usize = 20;

/// Parameters of a motif search run
///
/// `t` defaults to every input sequence when unset. `seed` is only consumed by
/// callers that build their own generator; [`run_search`](crate::search::run_search)
/// always uses the generator it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub k: usize,
    pub t: Option<usize>,
    pub strategy: Strategy,
    pub iterations: usize,
    pub restarts: usize,
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            t: None,
            strategy: Strategy::Gibbs,
            iterations: DEFAULT_ITERATIONS,
            restarts: DEFAULT_RESTARTS,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn new(k: usize, strategy: Strategy) -> Self {
        Self {
            k,
            strategy,
            ..Self::default()
        }
    }

    pub fn with_t(mut self, t: usize) -> Self {
        self.t = Some(t);
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = restarts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters against the number of available sequences.
    ///
    /// # Errors
    /// * `MotifError::InvalidParameter` naming the first offending field
    pub fn validate(&self, n_sequences: usize) -> Result<()> {
        if self.k == 0 {
            return Err(MotifError::invalid_parameter("k", self.k, "must be positive"));
        }
        let t = self.t.unwrap_or(n_sequences);
        if t == 0 || t > n_sequences {
            return Err(MotifError::invalid_parameter(
                "t",
                t,
                format!("must be between 1 and {}", n_sequences),
            ));
        }
        if self.restarts == 0 {
            return Err(MotifError::invalid_parameter(
                "restarts",
                self.restarts,
                "must be at least 1",
            ));
        }
        if self.strategy == Strategy::Gibbs && self.iterations == 0 {
            return Err(MotifError::invalid_parameter(
                "iterations",
                self.iterations,
                "Gibbs sampling needs at least one iteration",
            ));
        }
        Ok(())
    }
}
