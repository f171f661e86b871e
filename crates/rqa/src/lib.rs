//! Recurrence Quantification Analysis
//!
//! Extracts diagonal, vertical and horizontal line structures from a binary
//! recurrence matrix and derives the scalar RQA invariants (RR, DET, LAM,
//! L, TT, L_max, ENTR) used as classifier features.

mod error;
mod invariants;
mod lines;

pub use error::RqaError;
pub use invariants::{rqa_invariants, RqaInvariants};
pub use lines::{extract_lines, DiagonalSegment, LineSegment, LineSegments};
