use crate::alphabet;
use crate::error::{MotifError, Result};
use crate::types::Sequence;
use log::warn;
use polars::prelude::*;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

fn into_frame(records: Vec<(String, String)>) -> Result<DataFrame> {
    if records.is_empty() {
        return Err(MotifError::InvalidFileFormat("No sequences found".into()));
    }

    let (labels, sequences): (Vec<String>, Vec<String>) = records.into_iter().unzip();
    let df = DataFrame::new(vec![
        Column::new("label".into(), labels),
        Column::new("sequence".into(), sequences),
    ])
    .map_err(|_| MotifError::DataError("Failed to create DataFrame".into()))?;

    Ok(df)
}

/// Reads sequences from a FASTA format file and converts them into a Polars DataFrame.
///
/// # Arguments
/// * `filename` - Path to the FASTA file to read
///
/// # Returns
/// * `Result<DataFrame>` - A DataFrame with two columns:
///   - "label": The sequence identifiers (without '>' prefix)
///   - "sequence": The corresponding DNA sequences in uppercase
///
/// # Errors
/// * Returns `MotifError::InvalidFileFormat` if no sequences are found
/// * Returns `MotifError::DataError` if DataFrame creation fails
/// * Returns `MotifError::Io` for file reading issues
pub fn read_fasta<P: AsRef<Path>>(filename: P) -> Result<DataFrame> {
    let mut records: Vec<(String, String)> = Vec::new();
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    let mut current_header: Option<String> = None;
    let mut current_sequence = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if let Some(header) = line.strip_prefix('>') {
            if let Some(previous) = current_header.take() {
                push_record(&mut records, previous, &mut current_sequence);
            }
            current_header = Some(header.to_string());
        } else if !line.is_empty() {
            if current_header.is_none() {
                return Err(MotifError::InvalidFileFormat(
                    "Sequence data before first '>' header".into(),
                ));
            }
            current_sequence.push_str(line);
        }
    }

    if let Some(previous) = current_header {
        push_record(&mut records, previous, &mut current_sequence);
    }

    into_frame(records)
}

fn push_record(records: &mut Vec<(String, String)>, header: String, sequence: &mut String) {
    if sequence.is_empty() {
        warn!("skipping FASTA record '{}' with no sequence", header);
        return;
    }
    records.push((header, sequence.to_uppercase()));
    sequence.clear();
}

/// Reads one sequence per non-empty line, labelling them `seq_0`, `seq_1`, ...
///
/// # Errors
/// * Returns `MotifError::InvalidFileFormat` if the file holds no sequence
/// * Returns `MotifError::Io` for file reading issues
pub fn read_lines<P: AsRef<Path>>(filename: P) -> Result<DataFrame> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);

    let mut records: Vec<(String, String)> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            records.push((format!("seq_{}", records.len()), line.to_uppercase()));
        }
    }

    into_frame(records)
}

/// Reads a FASTA file, or a plain one-sequence-per-line file when the first
/// non-blank line does not start with '>'.
pub fn read_sequences<P: AsRef<Path>>(filename: P) -> Result<DataFrame> {
    let path = filename.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let mut is_fasta = false;
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            is_fasta = line.starts_with('>');
            break;
        }
    }

    if is_fasta {
        read_fasta(path)
    } else {
        read_lines(path)
    }
}

/// Extracts the "sequence" column as validated DNA strings.
///
/// # Errors
/// * Returns `MotifError::DataError` if the column is missing or not a string column
/// * Returns `MotifError::InvalidSymbol` if a sequence contains anything but A, C, G, T
pub fn sequences(df: &DataFrame) -> Result<Vec<Sequence>> {
    let column = df
        .column("sequence")
        .map_err(|e| MotifError::DataError(e.to_string()))?
        .str()
        .map_err(|e| MotifError::DataError(e.to_string()))?;

    column
        .into_iter()
        .enumerate()
        .map(|(idx, seq)| {
            let seq = seq.ok_or_else(|| {
                MotifError::DataError(format!("Missing sequence in row {}", idx))
            })?;
            alphabet::validate(seq)?;
            Ok(seq.to_string())
        })
        .collect()
}

/// Builds a table of a motif set with columns "index" and "motif".
pub fn motifs_frame<S: AsRef<str>>(motifs: &[S]) -> Result<DataFrame> {
    let index: Vec<u32> = (0..motifs.len() as u32).collect();
    let motifs: Vec<&str> = motifs.iter().map(|m| m.as_ref()).collect();
    let df = DataFrame::new(vec![
        Column::new("index".into(), index),
        Column::new("motif".into(), motifs),
    ])?;
    Ok(df)
}

/// Writes sequences from a Polars DataFrame to a FASTA format file.
///
/// # Arguments
/// * `df` - DataFrame containing sequences with "label" and "sequence" columns
/// * `filename` - Path where the FASTA file should be written
///
/// # Errors
/// * Returns `MotifError::DataError` if required columns are missing
/// * Returns `MotifError::Io` for file writing issues
pub fn write_fasta<P: AsRef<Path>>(df: &DataFrame, filename: P) -> Result<()> {
    let labels = df.column("label")?.str()?;
    let sequences = df.column("sequence")?.str()?;

    let mut file = File::create(filename)?;

    for (label, sequence) in labels.into_iter().zip(sequences.into_iter()) {
        if let (Some(label), Some(sequence)) = (label, sequence) {
            writeln!(file, ">{}", label)?;
            writeln!(file, "{}", sequence)?;
        }
    }

    Ok(())
}
