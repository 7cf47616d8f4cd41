//! Raster masks from boundary coordinate sequences
//!
//! Both mask builders take absolute (row, col) coordinates and an explicit
//! (rows, cols) shape. A coordinate outside the shape is an error rather
//! than being clipped: it means the annotation was paired with the wrong
//! image, and a silently cropped mask would hide that.

use crate::error::{DdsmError, Result};
use ndarray::Array2;

/// Validates one coordinate against the mask shape
fn bounded(coord: (i64, i64), shape: (usize, usize)) -> Result<(usize, usize)> {
    let (row, col) = coord;
    let (rows, cols) = shape;
    let r = usize::try_from(row).ok().filter(|&r| r < rows);
    let c = usize::try_from(col).ok().filter(|&c| c < cols);
    match (r, c) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(DdsmError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }),
    }
}

/// Scatters boundary coordinates into a boolean mask
///
/// The mask is true at exactly the listed coordinates; the interior of the
/// boundary is not filled.
///
/// # Errors
///
/// Returns [`DdsmError::OutOfBounds`] if any coordinate falls outside
/// `shape`.
pub fn point_mask(coords: &[(i64, i64)], shape: (usize, usize)) -> Result<Array2<bool>> {
    let mut mask = Array2::from_elem(shape, false);
    for &coord in coords {
        let (r, c) = bounded(coord, shape)?;
        mask[[r, c]] = true;
    }
    Ok(mask)
}

/// Fills the polygon bounded by a closed coordinate sequence
///
/// Interior pixels are 1.0 and the exterior stays 0.0. The sequence is
/// treated as a closed loop whether or not its last coordinate repeats the
/// first. The boundary pixels themselves are part of the filled region, so
/// the point mask of the same sequence is always a subset of this mask.
///
/// # Algorithm
///
/// Scanline fill with the even-odd rule: for each row spanned by the
/// polygon, collect the columns where an edge crosses the row (counting an
/// edge when one endpoint is strictly above and the other at or below),
/// sort them, and fill between successive pairs. Boundary coordinates are
/// then stamped directly.
///
/// # Errors
///
/// Returns [`DdsmError::OutOfBounds`] if any coordinate falls outside
/// `shape`; the check runs before any filling.
pub fn fill_mask(coords: &[(i64, i64)], shape: (usize, usize)) -> Result<Array2<f32>> {
    let mut mask = Array2::zeros(shape);

    let mut points = Vec::with_capacity(coords.len());
    for &coord in coords {
        points.push(bounded(coord, shape)?);
    }
    let Some(&(first_row, _)) = points.first() else {
        return Ok(mask);
    };

    let mut min_row = first_row;
    let mut max_row = first_row;
    for &(row, _) in &points {
        min_row = min_row.min(row);
        max_row = max_row.max(row);
    }

    let cols = shape.1;
    let mut crossings: Vec<f64> = Vec::new();
    for row in min_row..=max_row {
        crossings.clear();
        let yf = row as f64;
        let mut prev = points[points.len() - 1];
        for &cur in &points {
            let (py, px) = (cur.0 as f64, cur.1 as f64);
            let (qy, qx) = (prev.0 as f64, prev.1 as f64);
            if (py < yf && qy >= yf) || (qy < yf && py >= yf) {
                crossings.push(px + (yf - py) / (qy - py) * (qx - px));
            }
            prev = cur;
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let start = pair[0] as usize;
            let end = (pair[1] as usize + 1).min(cols);
            for col in start..end {
                mask[[row, col]] = 1.0;
            }
        }
    }

    for &(r, c) in &points {
        mask[[r, c]] = 1.0;
    }
    Ok(mask)
}
