use crate::alphabet::ALPHABET_SIZE;
use crate::error::{MotifError, Result};
use ndarray::{Array2, ArrayView1, Axis};

/// How far a profile column may sum away from 1
pub const COLUMN_SUM_TOLERANCE: f64 = 1e-9;

/// A DNA sequence over {A, C, G, T}
pub type Sequence = String;

/// One motif per input sequence, all of the same length k
pub type MotifSet = Vec<String>;

/// Per-column nucleotide counts of a motif set
/// Stored as a 4 x k array with rows A, C, G, T
#[derive(Debug, Clone, PartialEq)]
pub struct CountMatrix {
    counts: Array2<usize>,
}

impl CountMatrix {
    pub(crate) fn new(counts: Array2<usize>) -> Self {
        Self { counts }
    }

    /// Number of columns (the motif length k)
    pub fn width(&self) -> usize {
        self.counts.ncols()
    }

    /// Count of `symbol` at `column`, or `None` if either is out of range
    pub fn get(&self, symbol: char, column: usize) -> Option<usize> {
        let row = crate::alphabet::index_of(symbol)?;
        self.counts.get((row, column)).copied()
    }

    /// Counts of every nucleotide at `column`, in row order
    pub fn column(&self, column: usize) -> ArrayView1<'_, usize> {
        self.counts.column(column)
    }

    /// Sum over all symbols at `column`
    pub fn column_total(&self, column: usize) -> usize {
        self.counts.column(column).sum()
    }

    pub fn as_array(&self) -> &Array2<usize> {
        &self.counts
    }
}

/// Per-column probability distribution over {A, C, G, T}
/// Stored as a 4 x k array with rows A, C, G, T
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMatrix {
    probabilities: Array2<f64>,
}

impl ProfileMatrix {
    /// Builds a profile from a 4 x k array of probabilities.
    ///
    /// # Errors
    /// * `MotifError::DimensionMismatch` if the array does not have four rows
    /// * `MotifError::DataError` if a value lies outside [0, 1] or a column does
    ///   not sum to 1 within [`COLUMN_SUM_TOLERANCE`]
    pub fn new(probabilities: Array2<f64>) -> Result<Self> {
        if probabilities.nrows() != ALPHABET_SIZE {
            return Err(MotifError::dimension_mismatch(
                ALPHABET_SIZE,
                probabilities.nrows(),
            ));
        }
        if probabilities.iter().any(|p| !(0.0..=1.0).contains(p)) {
            return Err(MotifError::DataError(
                "profile probabilities must lie in [0, 1]".into(),
            ));
        }
        for (column, values) in probabilities.axis_iter(Axis(1)).enumerate() {
            let total = values.sum();
            if (total - 1.0).abs() > COLUMN_SUM_TOLERANCE {
                return Err(MotifError::DataError(format!(
                    "profile column {} sums to {}, expected 1",
                    column, total
                )));
            }
        }
        Ok(Self { probabilities })
    }

    /// Builds a profile from one row per nucleotide, in the order A, C, G, T.
    pub fn from_rows(rows: [&[f64]; 4]) -> Result<Self> {
        let width = rows[0].len();
        for row in &rows {
            if row.len() != width {
                return Err(MotifError::dimension_mismatch(width, row.len()));
            }
        }
        let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        let probabilities = Array2::from_shape_vec((ALPHABET_SIZE, width), flat)
            .map_err(|e| MotifError::DataError(e.to_string()))?;
        Self::new(probabilities)
    }

    /// Number of columns (the motif length k)
    pub fn width(&self) -> usize {
        self.probabilities.ncols()
    }

    /// Probability of `symbol` at `column`, or `None` if either is out of range
    pub fn get(&self, symbol: char, column: usize) -> Option<f64> {
        let row = crate::alphabet::index_of(symbol)?;
        self.probabilities.get((row, column)).copied()
    }

    pub(crate) fn at(&self, row: usize, column: usize) -> f64 {
        self.probabilities[[row, column]]
    }

    /// Probabilities of every nucleotide at `column`, in row order
    pub fn column(&self, column: usize) -> ArrayView1<'_, f64> {
        self.probabilities.column(column)
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.probabilities
    }
}
