//! Face-grid encoding and primitive operations.
//!
//! Purpose
//! - A `FaceGrid` holds one cell per face of the vertex grid's dual; the two
//!   steady-state colors encode the loop interior (`In`) and exterior (`Out`).
//! - The four directional shifts let callers compare every cell against a
//!   neighbor without bounds checks; `flood_fill` is the region-relabeling
//!   primitive used to split the interior during a slide.

use nalgebra::DMatrix;

/// Face color. `Split` only exists inside a single slide, marking one of the
/// two fragments the interior is temporarily divided into; a committed grid
/// contains only `Out` and `In`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Out,
    In,
    Split,
}

impl Cell {
    /// Numeric weight (0/1/2) used by the fuse-candidate neighbor sums.
    #[inline]
    pub fn weight(self) -> u8 {
        match self {
            Cell::Out => 0,
            Cell::In => 1,
            Cell::Split => 2,
        }
    }
}

/// Two-colored face grid of shape `(rows - 1, cols - 1)` for a `(rows, cols)`
/// vertex grid.
pub type FaceGrid = DMatrix<Cell>;

/// Shift every row down one step; each cell of the result holds the value of
/// the cell *above* it. The vacated top row is backfilled with `Out`.
///
/// All four shifts are non-wrapping: this is zero-padding, not rotation.
pub fn shift_down(g: &FaceGrid) -> FaceGrid {
    DMatrix::from_fn(g.nrows(), g.ncols(), |r, c| {
        if r == 0 {
            Cell::Out
        } else {
            g[(r - 1, c)]
        }
    })
}

/// Shift every row up one step; each cell holds the value of the cell *below*
/// it. The vacated bottom row is backfilled with `Out`.
pub fn shift_up(g: &FaceGrid) -> FaceGrid {
    DMatrix::from_fn(g.nrows(), g.ncols(), |r, c| {
        if r + 1 == g.nrows() {
            Cell::Out
        } else {
            g[(r + 1, c)]
        }
    })
}

/// Shift every column right one step; each cell holds the value of the cell to
/// its *left*. The vacated first column is backfilled with `Out`.
pub fn shift_right(g: &FaceGrid) -> FaceGrid {
    DMatrix::from_fn(g.nrows(), g.ncols(), |r, c| {
        if c == 0 {
            Cell::Out
        } else {
            g[(r, c - 1)]
        }
    })
}

/// Shift every column left one step; each cell holds the value of the cell to
/// its *right*. The vacated last column is backfilled with `Out`.
pub fn shift_left(g: &FaceGrid) -> FaceGrid {
    DMatrix::from_fn(g.nrows(), g.ncols(), |r, c| {
        if c + 1 == g.ncols() {
            Cell::Out
        } else {
            g[(r, c + 1)]
        }
    })
}

/// In-bounds 4-neighbors of `(r, c)` on a `rows x cols` grid.
pub(crate) fn neighbors4(
    r: usize,
    c: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let mut out = [None; 4];
    if r > 0 {
        out[0] = Some((r - 1, c));
    }
    if r + 1 < rows {
        out[1] = Some((r + 1, c));
    }
    if c > 0 {
        out[2] = Some((r, c - 1));
    }
    if c + 1 < cols {
        out[3] = Some((r, c + 1));
    }
    out.into_iter().flatten()
}

/// Relabel with `label` every cell 4-connected to `seed` through cells whose
/// value equals `target`. No-op if the seed does not match `target`.
pub fn flood_fill(grid: &mut FaceGrid, seed: (usize, usize), target: Cell, label: Cell) {
    if target == label || grid[seed] != target {
        return;
    }
    let (rows, cols) = (grid.nrows(), grid.ncols());
    grid[seed] = label;
    let mut stack = vec![seed];
    while let Some((r, c)) = stack.pop() {
        for n in neighbors4(r, c, rows, cols) {
            if grid[n] == target {
                grid[n] = label;
                stack.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from_rows(rows: &[&[u8]]) -> FaceGrid {
        DMatrix::from_fn(rows.len(), rows[0].len(), |r, c| match rows[r][c] {
            0 => Cell::Out,
            1 => Cell::In,
            _ => Cell::Split,
        })
    }

    #[test]
    fn shifts_zero_fill_the_vacated_edge() {
        let g = grid_from_rows(&[&[1, 1], &[1, 1]]);
        let down = shift_down(&g);
        assert!((0..2).all(|c| down[(0, c)] == Cell::Out));
        assert!((0..2).all(|c| down[(1, c)] == Cell::In));
        let up = shift_up(&g);
        assert!((0..2).all(|c| up[(1, c)] == Cell::Out));
        let right = shift_right(&g);
        assert!((0..2).all(|r| right[(r, 0)] == Cell::Out));
        let left = shift_left(&g);
        assert!((0..2).all(|r| left[(r, 1)] == Cell::Out));
    }

    #[test]
    fn shifts_preserve_shape_and_move_values() {
        let g = grid_from_rows(&[&[1, 0, 0], &[0, 1, 0], &[0, 0, 1]]);
        let down = shift_down(&g);
        assert_eq!(down.shape(), g.shape());
        // The diagonal moves one row down.
        assert_eq!(down[(1, 0)], Cell::In);
        assert_eq!(down[(2, 1)], Cell::In);
        let left = shift_left(&g);
        // The diagonal moves one column left.
        assert_eq!(left[(1, 1)], Cell::Out);
        assert_eq!(left[(0, 1)], Cell::Out);
        assert_eq!(left[(1, 0)], Cell::In);
        assert_eq!(left[(2, 1)], Cell::In);
    }

    #[test]
    fn flood_fill_relabels_only_the_connected_component() {
        // Two In components separated by an Out column.
        let mut g = grid_from_rows(&[&[1, 0, 1], &[1, 0, 1], &[1, 0, 1]]);
        flood_fill(&mut g, (0, 0), Cell::In, Cell::Split);
        for r in 0..3 {
            assert_eq!(g[(r, 0)], Cell::Split);
            assert_eq!(g[(r, 1)], Cell::Out);
            assert_eq!(g[(r, 2)], Cell::In);
        }
    }

    #[test]
    fn flood_fill_ignores_mismatched_seed() {
        let mut g = grid_from_rows(&[&[1, 0], &[0, 1]]);
        let before = g.clone();
        flood_fill(&mut g, (0, 1), Cell::In, Cell::Split);
        assert_eq!(g, before);
    }

    #[test]
    fn flood_fill_is_four_connected_not_eight() {
        // Diagonal touch must not leak.
        let mut g = grid_from_rows(&[&[1, 0], &[0, 1]]);
        flood_fill(&mut g, (0, 0), Cell::In, Cell::Split);
        assert_eq!(g[(0, 0)], Cell::Split);
        assert_eq!(g[(1, 1)], Cell::In);
    }
}
