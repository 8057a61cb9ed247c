use clap::Parser;
use log::info;
use motif_finder::config::{DEFAULT_ITERATIONS, DEFAULT_K, DEFAULT_RESTARTS};
use motif_finder::fasta::{motifs_frame, read_sequences, sequences};
use motif_finder::{run_search, MotifError, SearchConfig, SearchOutcome, Strategy};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::{self, File};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum SearchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("Motif search error: {0}")]
    Motif(#[from] MotifError),

    #[error("Unsupported output format: {0} (expected .csv or .parquet)")]
    UnsupportedOutput(String),
}

#[derive(Parser)]
#[command(
    name = "motif-search",
    about = "Finds a conserved motif shared by a set of DNA sequences",
    long_about = "Searches one k-mer per input sequence so that the chosen k-mers agree as closely \
                  as possible. Supports a deterministic greedy search, randomized hill climbing \
                  with restarts, and Gibbs sampling with restarts. The best motif set is written \
                  as a table with one row per input sequence.",
    version,
    after_help = "Example usage:\n    \
                  motif-search DosR.txt motifs.csv --k 15 --strategy gibbs --iterations 2000\n    \
                  motif-search upstream.fasta motifs.parquet --strategy randomized --restarts 1000 --seed 7",
    color = clap::ColorChoice::Always
)]
#[derive(Debug)]
struct Args {
    /// Path to input sequences, FASTA or one sequence per line
    #[arg(value_name = "SEQUENCE_FILE")]
    sequence_file: String,

    /// Path for output file (supports .csv or .parquet format)
    /// Will create output directory if it doesn't exist
    #[arg(value_name = "OUTPUT_FILE")]
    output_file: String,

    /// Motif length
    #[arg(short, long, default_value_t = DEFAULT_K)]
    k: usize,

    /// Search strategy: greedy, randomized or gibbs
    #[arg(long, default_value = "gibbs")]
    strategy: Strategy,

    /// Number of leading sequences to search (defaults to all)
    #[arg(short, long)]
    t: Option<usize>,

    /// Resampling steps per Gibbs run
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Independent runs of the randomized strategies
    #[arg(long, default_value_t = DEFAULT_RESTARTS)]
    restarts: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> SearchConfig {
        let mut config = SearchConfig::new(self.k, self.strategy)
            .with_iterations(self.iterations)
            .with_restarts(self.restarts);
        if let Some(t) = self.t {
            config = config.with_t(t);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn outcome_frame(outcome: &SearchOutcome) -> Result<DataFrame, SearchError> {
    let mut df = motifs_frame(&outcome.motifs)?;
    let n = df.height();
    df.with_column(Column::new(
        "consensus".into(),
        vec![outcome.consensus.as_str(); n],
    ))?;
    df.with_column(Column::new("score".into(), vec![outcome.score as u32; n]))?;
    Ok(df)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Csv,
    Parquet,
}

impl OutputFormat {
    fn from_path(output_file: &str) -> Result<Self, SearchError> {
        let extension = Path::new(output_file)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "parquet" => Ok(OutputFormat::Parquet),
            other => Err(SearchError::UnsupportedOutput(other.to_string())),
        }
    }
}

fn write_table(
    df: &mut DataFrame,
    output_file: &str,
    format: OutputFormat,
) -> Result<(), SearchError> {
    match format {
        OutputFormat::Csv => {
            let mut file = File::create(output_file)?;
            CsvWriter::new(&mut file).finish(df)?;
        }
        OutputFormat::Parquet => {
            let mut file = File::create(output_file)?;
            ParquetWriter::new(&mut file).finish(df)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), SearchError> {
    env_logger::init();
    let start_time = std::time::Instant::now();

    let args = Args::parse();
    let config = args.config();
    let format = OutputFormat::from_path(&args.output_file)?;

    // Create output directory if it doesn't exist
    if let Some(parent) = Path::new(&args.output_file).parent() {
        fs::create_dir_all(parent)?;
    }

    let df = read_sequences(&args.sequence_file)?;
    let dna = sequences(&df)?;
    println!("{} sequences loaded", dna.len());

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!("running {:?}", config);

    let outcome = run_search(&dna, &config, &mut rng)?;
    for motif in &outcome.motifs {
        println!("{}", motif);
    }
    println!(
        "consensus {} score {} entropy {:.4}",
        outcome.consensus, outcome.score, outcome.entropy
    );

    let mut results_df = outcome_frame(&outcome)?;
    write_table(&mut results_df, &args.output_file, format)?;

    let elapsed = start_time.elapsed();
    println!(
        "Total execution time: {:.4} minutes",
        elapsed.as_secs_f64() / 60.0
    );

    Ok(())
}
