//! Bounded Game of Life engine.
//!
//! [`CoreGrid`] owns a [`CellMatrix`] of dead/alive cells, validates it against
//! [`GridBounds`] and advances it one generation per [`CoreGrid::step`] with the
//! classic B3/S23 rule. Cells beyond the border count as dead; nothing wraps.

mod bounds;
mod core_grid;
mod error;
mod grid;
pub mod rules;

pub use bounds::GridBounds;
pub use core_grid::CoreGrid;
pub use error::{GridError, GridErrorKind};
pub use grid::{CellMatrix, TCell, ALIVE, DEAD};
