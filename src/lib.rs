//! Discovery of conserved DNA motifs by greedy, randomized and Gibbs-sampling search

pub mod alphabet;
pub mod config;
pub mod error;
pub mod fasta;
pub mod matrix;
pub mod patterns;
pub mod scorer;
pub mod search;
pub mod types;

pub use config::SearchConfig;
pub use error::{MotifError, Result};
pub use search::{run_search, SearchOutcome, Strategy};
