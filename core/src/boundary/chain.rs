//! Chain-code boundary decoding
//!
//! An outline's boundary is stored as a start coordinate plus a chain code:
//! each digit names one step to an 8-connected neighbour, clockwise from
//! straight up. Absolute coordinates come from cumulative integration of
//! the decoded steps. The stored start is written (column, row) and is
//! reversed to (row, column) before integration.

use crate::error::{DdsmError, Result};

/// Relative (row, col) steps indexed by chain-code digit
const CHAIN_STEPS: [(i64, i64); 8] = [
    (-1, 0),  // 0: up
    (-1, 1),  // 1: up-right
    (0, 1),   // 2: right
    (1, 1),   // 3: down-right
    (1, 0),   // 4: down
    (1, -1),  // 5: down-left
    (0, -1),  // 6: left
    (-1, -1), // 7: up-left
];

/// Decodes one chain-code digit into its relative (row, col) step
///
/// # Errors
///
/// Returns [`DdsmError::BadChainCode`] for any digit outside 0-7.
pub fn decode_step(digit: i64) -> Result<(i64, i64)> {
    usize::try_from(digit)
        .ok()
        .and_then(|d| CHAIN_STEPS.get(d))
        .copied()
        .ok_or(DdsmError::BadChainCode(digit))
}

/// Integrates relative steps from a stored start coordinate
///
/// The start arrives in its stored (column, row) order and is reversed
/// before integration. Element `i + 1` of the result is element `i` plus
/// step `i`, so the output is one coordinate longer than the step list.
pub fn integrate_path(start: (i64, i64), steps: &[(i64, i64)]) -> Vec<(i64, i64)> {
    let (col, row) = start;
    let mut current = (row, col);
    let mut coords = Vec::with_capacity(steps.len() + 1);
    coords.push(current);
    for step in steps {
        current = (current.0 + step.0, current.1 + step.1);
        coords.push(current);
    }
    coords
}

/// Decodes a chain-code path and integrates it from `start`
///
/// # Errors
///
/// Returns [`DdsmError::BadChainCode`] for any path digit outside 0-7.
pub fn path_to_coordinates(start: (i64, i64), path: &[i64]) -> Result<Vec<(i64, i64)>> {
    let mut steps = Vec::with_capacity(path.len());
    for &digit in path {
        steps.push(decode_step(digit)?);
    }
    Ok(integrate_path(start, &steps))
}
