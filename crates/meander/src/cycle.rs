//! Starting cycle construction and the sliding mutation engine.
//!
//! Model
//! - `make_starting_cycle` lays a serpentine one-face-wide corridor whose
//!   boundary is a Hamiltonian cycle of the vertex grid.
//! - `slide` breaks the interior into two fragments by removing one corner
//!   cell, then fuses them back together at a different cell. Every committed
//!   slide leaves the boundary a single simple loop through all vertices.
//!   Sliding alone cannot reach every Hamiltonian cycle (see 'An Algorithm for
//!   Finding Hamiltonian Cycles in Grid Graphs Without Holes'); that is
//!   accepted, the goal is visual variety rather than exhaustive coverage.
//!
//! Determinism
//! - Candidate selection is count-then-index over a row-major scan with a
//!   single `gen_range` draw, so a seeded RNG replays the exact design.

use std::fmt;

use nalgebra::DMatrix;
use rand::Rng;

use crate::grid::{flood_fill, shift_down, shift_left, shift_right, shift_up, Cell, FaceGrid};

/// Vertex-grid shape backing a design.
///
/// Users specify the design size in face cells (`WIDTHxHEIGHT`, both odd);
/// the vertex grid is one larger in each direction. The odd-size contract is
/// what makes the serpentine corridor close into a Hamiltonian cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    /// Validate a user-facing design size and derive the vertex-grid shape.
    ///
    /// Both dimensions must be odd and at least 3. This is the configuration
    /// boundary: nothing past it ever sees an even-sized design.
    pub fn from_design_size(width: usize, height: usize) -> Result<Self, ShapeError> {
        if width < 3 || height < 3 {
            return Err(ShapeError::TooSmall { width, height });
        }
        if width % 2 == 0 || height % 2 == 0 {
            return Err(ShapeError::EvenDimension { width, height });
        }
        Ok(Shape {
            rows: height + 1,
            cols: width + 1,
        })
    }

    /// Face-grid row count (`rows - 1`).
    #[inline]
    pub fn face_rows(self) -> usize {
        self.rows - 1
    }

    /// Face-grid column count (`cols - 1`).
    #[inline]
    pub fn face_cols(self) -> usize {
        self.cols - 1
    }

    /// Number of vertices the cycle must visit.
    #[inline]
    pub fn vertex_count(self) -> usize {
        self.rows * self.cols
    }
}

/// Configuration errors, detected before any mutation runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    EvenDimension { width: usize, height: usize },
    TooSmall { width: usize, height: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EvenDimension { width, height } => write!(
                f,
                "design size {width}x{height} invalid: both dimensions must be odd"
            ),
            Self::TooSmall { width, height } => write!(
                f,
                "design size {width}x{height} invalid: both dimensions must be at least 3"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Invariant-violation errors. Fatal and non-retryable: any of these means a
/// previous step corrupted the grid, so the failing state is carried along
/// for diagnosis instead of being patched over.
#[derive(Clone, Debug)]
pub enum SlideError {
    /// No cell satisfies the removable-corner predicate.
    NoRemovableCell { grid: FaceGrid },
    /// The split fragments have no cell that can rejoin them.
    NoFuseCell { grid: FaceGrid },
    /// The removed cell had no `In` neighbor to seed the split from.
    IsolatedCell {
        grid: FaceGrid,
        coord: (usize, usize),
    },
}

impl SlideError {
    /// The face grid as it was when the violation was detected.
    pub fn grid(&self) -> &FaceGrid {
        match self {
            Self::NoRemovableCell { grid }
            | Self::NoFuseCell { grid }
            | Self::IsolatedCell { grid, .. } => grid,
        }
    }
}

impl fmt::Display for SlideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = (self.grid().nrows(), self.grid().ncols());
        match self {
            Self::NoRemovableCell { .. } => {
                write!(f, "no removable cell in {rows}x{cols} face grid")
            }
            Self::NoFuseCell { .. } => {
                write!(f, "no fuse cell in split {rows}x{cols} face grid")
            }
            Self::IsolatedCell { coord, .. } => write!(
                f,
                "removed cell {coord:?} has no interior neighbor in {rows}x{cols} face grid"
            ),
        }
    }
}

impl std::error::Error for SlideError {}

/// Build the serpentine starting cycle for `shape`.
///
/// Even face rows are fully interior; odd rows keep a single interior cell at
/// the left or right end, alternating every other connector. For an odd
/// design size the boundary of this corridor visits every vertex once.
///
/// A shape with an even design dimension still yields a grid here, just not a
/// cycle. That permissiveness is deliberate (the degenerate outputs can be
/// pretty); `Shape::from_design_size` is where sizes get rejected.
pub fn make_starting_cycle(shape: Shape) -> FaceGrid {
    let cols = shape.face_cols();
    DMatrix::from_fn(shape.face_rows(), cols, |yi, xi| {
        if yi % 2 == 0 {
            Cell::In
        } else if (yi / 2) % 2 == 0 {
            if xi == 0 {
                Cell::In
            } else {
                Cell::Out
            }
        } else if xi == cols - 1 {
            Cell::In
        } else {
            Cell::Out
        }
    })
}

/// Pick one `true` entry uniformly at random.
///
/// Row-major scan, count, then a single index draw. The scan order is part of
/// the determinism contract; do not swap in another sampling scheme.
fn pick_candidate<R: Rng>(mask: &DMatrix<bool>, rng: &mut R) -> Option<(usize, usize)> {
    let mut count = 0usize;
    for r in 0..mask.nrows() {
        for c in 0..mask.ncols() {
            if mask[(r, c)] {
                count += 1;
            }
        }
    }
    if count == 0 {
        return None;
    }
    let choice = rng.gen_range(0..count);
    let mut skipped = 0usize;
    for r in 0..mask.nrows() {
        for c in 0..mask.ncols() {
            if mask[(r, c)] {
                if skipped == choice {
                    return Some((r, c));
                }
                skipped += 1;
            }
        }
    }
    unreachable!("choice index within counted candidates")
}

/// Apply one slide to `grid`.
///
/// Removes a random corner cell from the interior, splitting it in two, then
/// turns a random exterior cell between the fragments interior again. The
/// committed grid differs from the input in exactly those two cells — or not
/// at all, when the fuse draw lands back on the removed cell — and its
/// boundary is again a single Hamiltonian loop.
pub fn slide<R: Rng>(grid: &mut FaceGrid, rng: &mut R) -> Result<(), SlideError> {
    let above = shift_down(grid);
    let below = shift_up(grid);
    let left = shift_right(grid);
    let right = shift_left(grid);

    // Every location that can be turned off: an interior cell whose vertical
    // neighbors agree, whose horizontal neighbors agree, and which sits at a
    // corner of the boundary (vertical and horizontal pairs differ).
    let removable = DMatrix::from_fn(grid.nrows(), grid.ncols(), |r, c| {
        grid[(r, c)] == Cell::In
            && above[(r, c)] != left[(r, c)]
            && above[(r, c)] == below[(r, c)]
            && left[(r, c)] == right[(r, c)]
    });
    let coord = pick_candidate(&removable, rng).ok_or_else(|| SlideError::NoRemovableCell {
        grid: grid.clone(),
    })?;

    let mut working = grid.clone();
    working[coord] = Cell::Out;

    // One of the two fragments starts at whichever neighbor was interior,
    // checked in left/right/above/below priority order. The shifts backfill
    // the grid edge with `Out`, so a matching direction is always in bounds.
    let (r, c) = coord;
    let seed = if left[coord] == Cell::In {
        (r, c - 1)
    } else if right[coord] == Cell::In {
        (r, c + 1)
    } else if above[coord] == Cell::In {
        (r - 1, c)
    } else if below[coord] == Cell::In {
        (r + 1, c)
    } else {
        return Err(SlideError::IsolatedCell {
            grid: grid.clone(),
            coord,
        });
    };
    flood_fill(&mut working, seed, Cell::In, Cell::Split);

    let above = shift_down(&working);
    let below = shift_up(&working);
    let left = shift_right(&working);
    let right = shift_left(&working);

    // Every location that can fuse the fragments back together: an exterior
    // cell flanked by one `In` (1) and one `Split` (2) on the same axis, with
    // the other axis fully exterior. The just-removed cell stays eligible;
    // when it is drawn the slide commits as a no-op. Some reachable states
    // have it as the only fuse candidate, so excluding it would abort a
    // perfectly valid grid.
    let fuse_mask = DMatrix::from_fn(working.nrows(), working.ncols(), |r, c| {
        if working[(r, c)] != Cell::Out {
            return false;
        }
        let x_neighbors = left[(r, c)].weight() + right[(r, c)].weight();
        let y_neighbors = above[(r, c)].weight() + below[(r, c)].weight();
        (x_neighbors == 3 && y_neighbors == 0) || (x_neighbors == 0 && y_neighbors == 3)
    });
    let fuse = pick_candidate(&fuse_mask, rng).ok_or_else(|| SlideError::NoFuseCell {
        grid: grid.clone(),
    })?;

    grid[coord] = Cell::Out;
    grid[fuse] = Cell::In;
    Ok(())
}

/// Run `steps` consecutive slides. Primary entry point for design generation;
/// stops at the first invariant violation.
pub fn run_slides<R: Rng>(
    grid: &mut FaceGrid,
    steps: usize,
    rng: &mut R,
) -> Result<(), SlideError> {
    for _ in 0..steps {
        slide(grid, rng)?;
    }
    Ok(())
}
