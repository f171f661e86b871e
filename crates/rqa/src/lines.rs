//! Line-Structure Extraction
//!
//! Scans a binary recurrence matrix for maximal runs of 1s along diagonals
//! (both sides of the line of identity, reported with signed offset),
//! columns and rows. A run is emitted only once it terminates, either at a
//! zero cell or at the matrix boundary; runs shorter than the configured
//! minimum are dropped whole.

use crate::error::RqaError;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// A diagonal run of recurrence points at offset `k = col - row`.
///
/// Offsets are signed: `k > 0` lies above the line of identity, `k < 0`
/// below. A symmetric matrix produces these in mirror pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagonalSegment {
    /// Row of the first cell in the run
    pub row: usize,
    /// Column of the first cell in the run
    pub col: usize,
    /// Signed diagonal offset (never 0; the line of identity is excluded)
    pub offset: i64,
    /// Number of consecutive recurrence points
    pub length: usize,
}

/// A vertical or horizontal run of recurrence points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Row of the first cell in the run
    pub row: usize,
    /// Column of the first cell in the run
    pub col: usize,
    /// Number of consecutive recurrence points
    pub length: usize,
}

/// All line structures found in one recurrence matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegments {
    /// Diagonal runs on both sides of the line of identity
    pub diagonal: Vec<DiagonalSegment>,
    /// Vertical runs (fixed column)
    pub vertical: Vec<LineSegment>,
    /// Horizontal runs (fixed row)
    pub horizontal: Vec<LineSegment>,
}

impl LineSegments {
    /// Diagonal runs strictly above the line of identity (`offset > 0`).
    ///
    /// A symmetric matrix mirrors every diagonal run across the LOI, so any
    /// statistic meant to count distinct structure (DET, L, L_max, ENTR)
    /// must restrict itself to this subset. The filter is a named operation
    /// so the restriction survives a future non-symmetric distance.
    pub fn upper_diagonals(&self) -> impl Iterator<Item = &DiagonalSegment> {
        self.diagonal.iter().filter(|s| s.offset > 0)
    }
}

/// Run accumulator shared by all three scans; calls `emit` with
/// (start index within the walk, run length) for each qualifying run.
struct RunScanner<F: FnMut(usize, usize)> {
    min_len: usize,
    run_start: usize,
    run_len: usize,
    emit: F,
}

impl<F: FnMut(usize, usize)> RunScanner<F> {
    fn new(min_len: usize, emit: F) -> Self {
        Self {
            min_len,
            run_start: 0,
            run_len: 0,
            emit,
        }
    }

    fn step(&mut self, pos: usize, cell: u8) {
        if cell != 0 {
            if self.run_len == 0 {
                self.run_start = pos;
            }
            self.run_len += 1;
        } else {
            self.finish();
        }
    }

    fn finish(&mut self) {
        if self.run_len >= self.min_len {
            (self.emit)(self.run_start, self.run_len);
        }
        self.run_len = 0;
    }
}

/// Extract diagonal, vertical and horizontal line structures.
///
/// `min_len` must be at least 2; a `min_len` larger than the matrix size
/// simply yields no segments in any orientation.
pub fn extract_lines(matrix: &Array2<u8>, min_len: usize) -> Result<LineSegments, RqaError> {
    let (rows, cols) = matrix.dim();
    if rows == 0 {
        return Err(RqaError::EmptyMatrix);
    }
    if rows != cols {
        return Err(RqaError::NonSquareMatrix { rows, cols });
    }
    if min_len < 2 {
        return Err(RqaError::InvalidMinLength(min_len));
    }

    let n = rows;
    let mut segments = LineSegments::default();

    // Diagonals above and below the LOI, enumerated separately so both
    // signed offsets are reported.
    for k in 1..n {
        let mut upper = RunScanner::new(min_len, |start, length| {
            segments.diagonal.push(DiagonalSegment {
                row: start,
                col: start + k,
                offset: k as i64,
                length,
            });
        });
        for i in 0..(n - k) {
            upper.step(i, matrix[(i, i + k)]);
        }
        upper.finish();

        let mut lower = RunScanner::new(min_len, |start, length| {
            segments.diagonal.push(DiagonalSegment {
                row: start + k,
                col: start,
                offset: -(k as i64),
                length,
            });
        });
        for j in 0..(n - k) {
            lower.step(j, matrix[(j + k, j)]);
        }
        lower.finish();
    }

    // Verticals: walk down each column.
    for col in 0..n {
        let mut scanner = RunScanner::new(min_len, |start, length| {
            segments.vertical.push(LineSegment {
                row: start,
                col,
                length,
            });
        });
        for row in 0..n {
            scanner.step(row, matrix[(row, col)]);
        }
        scanner.finish();
    }

    // Horizontals: walk across each row.
    for row in 0..n {
        let mut scanner = RunScanner::new(min_len, |start, length| {
            segments.horizontal.push(LineSegment {
                row,
                col: start,
                length,
            });
        });
        for col in 0..n {
            scanner.step(col, matrix[(row, col)]);
        }
        scanner.finish();
    }

    Ok(segments)
}
