use motif_finder::error::MotifError;
use motif_finder::fasta;
use polars::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_read_fasta() {
    let file = write_temp(
        ">Rv0079 upstream\nGGCGTTCAGG\nCA\n\n>Rv0080\naagaatcagtca\n>empty\n>Rv1733c\nCAAGGAGTTCGC\n",
    );
    let df = fasta::read_fasta(file.path()).unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 2);

    let dna = fasta::sequences(&df).unwrap();
    assert_eq!(dna, vec!["GGCGTTCAGGCA", "AAGAATCAGTCA", "CAAGGAGTTCGC"]);

    // test file does not exist
    let result = fasta::read_fasta("tests/data/nonexistent.fasta");
    assert!(matches!(result, Err(MotifError::Io(_))));
}

#[test]
fn test_read_fasta_without_records() {
    let file = write_temp("\n\n");
    assert!(matches!(
        fasta::read_fasta(file.path()),
        Err(MotifError::InvalidFileFormat(_))
    ));
}

#[test]
fn test_read_sequences_detects_format() {
    let plain = write_temp("GGCGTTCAGGCA\nAAGAATCAGTCA\n\nCAAGGAGTTCGC\n");
    let df = fasta::read_sequences(plain.path()).unwrap();
    assert_eq!(df.height(), 3);
    let labels: Vec<&str> = df
        .column("label")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(labels, vec!["seq_0", "seq_1", "seq_2"]);

    let fasta_file = write_temp("\n>a\nACGT\n>b\nTTGA\n");
    let df = fasta::read_sequences(fasta_file.path()).unwrap();
    assert_eq!(fasta::sequences(&df).unwrap(), vec!["ACGT", "TTGA"]);
}

#[test]
fn test_sequences_rejects_ambiguity_codes() {
    let file = write_temp(">a\nACGTNACGT\n");
    let df = fasta::read_fasta(file.path()).unwrap();
    assert!(matches!(
        fasta::sequences(&df),
        Err(MotifError::InvalidSymbol { symbol: 'N', position: 4 })
    ));
}

#[test]
fn test_write_fasta() {
    let out = NamedTempFile::new().unwrap();
    let df: DataFrame = df!(
        "label" => ["chr1-4357766-4357930_CPPP_WT", "chr1-4357733-4357765_CPPP_WT", "chr1-4357712-4357732_CPPP_WT"],
        "sequence" => ["AGCTTTTTAATAGAGTCAGCAAAACTGAAGCCT", "TGCTTTTTTTTTGAGTCAGCAAAACTGAAGCCT", "CGCTTTTTAATAGAGTCAGCAAAACTGAAGCCT"],
    )
    .unwrap();

    fasta::write_fasta(&df, out.path()).unwrap();

    let df_out = fasta::read_fasta(out.path()).unwrap();
    assert_eq!(df_out.height(), 3);
    assert_eq!(df_out.width(), 2);
}

#[test]
fn test_motifs_frame() {
    let df = fasta::motifs_frame(&["TTC", "ATC", "TTC"]).unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 2);
    let motifs: Vec<&str> = df
        .column("motif")
        .unwrap()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(motifs, vec!["TTC", "ATC", "TTC"]);
}
