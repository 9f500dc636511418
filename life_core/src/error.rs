use thiserror::Error;

use crate::grid::TCell;

/// Broad class of a [`GridError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridErrorKind {
    /// Dimensions or cell values break the grid invariants.
    InvalidGrid,
    /// A cell position outside the matrix was addressed.
    Index,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions should be even numbers, got {rows}x{cols}")]
    OddDimensions { rows: usize, cols: usize },

    #[error("grid dimension {axis} ({value}) should be between {min} and {max}")]
    DimensionOutOfBounds { axis: usize, value: usize, min: usize, max: usize },

    #[error("cell ({row}, {col}) holds {value}, cells should be 0 or 1 (dead or alive)")]
    InvalidCellValue { row: usize, col: usize, value: TCell },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    IndexOutOfBounds { row: usize, col: usize, rows: usize, cols: usize },
}

impl GridError {
    pub fn kind(&self) -> GridErrorKind {
        match self {
            GridError::IndexOutOfBounds { .. } => GridErrorKind::Index,
            _ => GridErrorKind::InvalidGrid,
        }
    }
}
