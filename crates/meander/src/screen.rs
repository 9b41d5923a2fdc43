//! Edge projection: from a face grid to the drawn geometry of its boundary.
//!
//! The screen doubles the vertex grid: even-even cells are vertices (always
//! drawn), odd cells between them mark boundary edges. A face side is drawn
//! exactly when the two faces straddling it differ in color, which the
//! projection reads off the four directional shifts. Pure and stateless; it
//! exists both as the hand-off to renderers and as the thing the test suite
//! traverses to check the single-loop invariant.

use std::collections::BTreeSet;

use nalgebra::DMatrix;

use crate::cycle::Shape;
use crate::grid::{shift_down, shift_left, shift_right, shift_up, Cell, FaceGrid};

/// Drawing surface of shape `(2*rows - 1, 2*cols - 1)`; `true` is drawn.
pub type Screen = DMatrix<bool>;

/// Project the boundary of `grid` onto a drawing screen.
pub fn project_edges(grid: &FaceGrid, shape: Shape) -> Screen {
    let mut screen = DMatrix::from_element(2 * shape.rows - 1, 2 * shape.cols - 1, false);

    for r in 0..shape.rows {
        for c in 0..shape.cols {
            screen[(2 * r, 2 * c)] = true;
        }
    }

    let above = shift_down(grid);
    let below = shift_up(grid);
    let left = shift_right(grid);
    let right = shift_left(grid);
    for r in 0..grid.nrows() {
        for c in 0..grid.ncols() {
            if grid[(r, c)] != Cell::In {
                continue;
            }
            if above[(r, c)] == Cell::Out {
                screen[(2 * r, 2 * c + 1)] = true;
            }
            if below[(r, c)] == Cell::Out {
                screen[(2 * r + 2, 2 * c + 1)] = true;
            }
            if left[(r, c)] == Cell::Out {
                screen[(2 * r + 1, 2 * c)] = true;
            }
            if right[(r, c)] == Cell::Out {
                screen[(2 * r + 1, 2 * c + 2)] = true;
            }
        }
    }
    screen
}

/// Walk the drawn cells of `screen` as one closed tour.
///
/// Starts from the smallest drawn coordinate and greedily steps to an
/// unvisited drawn 4-neighbor. Returns the ordered tour when every drawn cell
/// is consumed and the walk closes back on its start; `None` when the drawn
/// set is empty, splits into several loops, or dangles.
pub fn trace_loop(screen: &Screen) -> Option<Vec<(usize, usize)>> {
    let mut remaining: BTreeSet<(usize, usize)> = BTreeSet::new();
    for r in 0..screen.nrows() {
        for c in 0..screen.ncols() {
            if screen[(r, c)] {
                remaining.insert((r, c));
            }
        }
    }
    let start = *remaining.iter().next()?;
    let mut tour = Vec::with_capacity(remaining.len());
    let mut cur = start;
    loop {
        remaining.remove(&cur);
        tour.push(cur);
        let (r, c) = cur;
        let step = [
            (r, c + 1),
            (r + 1, c),
            (r, c.wrapping_sub(1)),
            (r.wrapping_sub(1), c),
        ]
        .into_iter()
        .find(|n| remaining.contains(n));
        match step {
            Some(next) => cur = next,
            None => break,
        }
    }
    if !remaining.is_empty() {
        return None;
    }
    // The tour must close: last cell adjacent to the first.
    let (lr, lc) = *tour.last()?;
    let (sr, sc) = start;
    if tour.len() > 2 && lr.abs_diff(sr) + lc.abs_diff(sc) == 1 {
        Some(tour)
    } else {
        None
    }
}
