//! Box-Counting Dimension

use crate::error::FractalError;
use serde::{Deserialize, Serialize};
use signal_math::linear_fit;
use std::collections::HashSet;

/// Axis-aligned bounding region the grid is laid over.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Extent {
    /// Left edge
    pub min_x: f64,
    /// Bottom edge
    pub min_y: f64,
    /// Horizontal span (> 0)
    pub width: f64,
    /// Vertical span (> 0)
    pub height: f64,
}

impl Extent {
    /// Unit square at the origin.
    pub fn unit() -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }

    /// Smallest extent covering a point set. Zero spans are widened to a
    /// minimal strip so a degenerate (axis-aligned) set still grids.
    pub fn bounding(points: &[(f64, f64)]) -> Option<Self> {
        let first = points.first()?;
        let mut min_x = first.0;
        let mut max_x = first.0;
        let mut min_y = first.1;
        let mut max_y = first.1;
        for &(x, y) in points {
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        Some(Self {
            min_x,
            min_y,
            width: (max_x - min_x).max(f64::EPSILON),
            height: (max_y - min_y).max(f64::EPSILON),
        })
    }
}

/// Box-counting result: the fitted dimension and the occupancy count at
/// every tested scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxCountEstimate {
    /// Slope of ln N(eps) vs ln(1/eps); 0 when the counts carry no scaling
    pub dimension: f64,
    /// (box size, occupied-cell count) per tested scale, input order
    pub counts: Vec<(f64, usize)>,
}

/// Estimate the box-counting dimension of a sampled curve or shape.
///
/// For each box size the extent is discretized into a grid of that cell
/// side and the distinct cells touched by any point are counted; the
/// dimension is the least-squares slope of `ln N(eps)` against
/// `ln(1/eps)`. Identical counts at every scale are degenerate input and
/// report dimension 0.
pub fn box_counting_dimension(
    points: &[(f64, f64)],
    extent: Extent,
    sizes: &[f64],
) -> Result<BoxCountEstimate, FractalError> {
    if points.is_empty() {
        return Err(FractalError::EmptyPointSet);
    }
    if extent.width <= 0.0 || extent.height <= 0.0 {
        return Err(FractalError::InvalidExtent {
            width: extent.width,
            height: extent.height,
        });
    }
    for &size in sizes {
        if !(size > 0.0) {
            return Err(FractalError::InvalidBoxSize(size));
        }
    }
    let mut distinct = sizes.to_vec();
    distinct.sort_by(|a, b| a.total_cmp(b));
    distinct.dedup();
    if distinct.len() < 2 {
        return Err(FractalError::TooFewScales(distinct.len()));
    }

    let mut counts = Vec::with_capacity(sizes.len());
    let mut occupied: HashSet<(u64, u64)> = HashSet::new();
    for &size in sizes {
        occupied.clear();
        let cells_x = (extent.width / size).ceil().max(1.0) as u64;
        let cells_y = (extent.height / size).ceil().max(1.0) as u64;
        for &(x, y) in points {
            let cx = (((x - extent.min_x) / size).floor().max(0.0) as u64).min(cells_x - 1);
            let cy = (((y - extent.min_y) / size).floor().max(0.0) as u64).min(cells_y - 1);
            occupied.insert((cx, cy));
        }
        counts.push((size, occupied.len()));
    }

    let xs: Vec<f64> = counts.iter().map(|&(size, _)| (1.0 / size).ln()).collect();
    let ys: Vec<f64> = counts.iter().map(|&(_, count)| (count as f64).ln()).collect();
    let dimension = linear_fit(&xs, &ys).slope;

    Ok(BoxCountEstimate { dimension, counts })
}
