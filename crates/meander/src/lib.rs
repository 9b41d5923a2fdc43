//! Meander designs: single Hamiltonian loops on rectangular grids.
//!
//! A design is a face grid — the two-coloring of the dual of a vertex grid —
//! whose color boundary is one simple closed curve through every vertex. The
//! crate builds a serpentine starting cycle, mutates it with invariant-
//! preserving "slides", and projects the result to drawable edge geometry.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Breaking changes are fine when they improve the design.

pub mod cycle;
pub mod grid;
pub mod rand;
pub mod screen;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cycle::{
        make_starting_cycle, run_slides, slide, Shape, ShapeError, SlideError,
    };
    pub use crate::grid::{Cell, FaceGrid};
    pub use crate::rand::{fresh_seed, rng_for_seed, seed_from_str};
    pub use crate::screen::{project_edges, trace_loop, Screen};
}
