// grid.rs - Cell matrix type for the Game of Life engine

use std::ops::{Index, IndexMut};

use crate::error::GridError;

pub type TCell = u8;

pub const DEAD: TCell = 0;
pub const ALIVE: TCell = 1;

/// Rectangular, row-major matrix of raw cell values.
///
/// The container only guarantees that every row has the same length. Whether
/// the values are legal cell states, and whether the dimensions fit the
/// configured bounds, is checked by [`crate::CoreGrid`].
#[derive(Debug, PartialEq, Eq)]
pub struct CellMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<TCell>,
}

impl CellMatrix {
    /// All-dead matrix of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, cells: vec![DEAD; rows * cols] }
    }

    /// Builds a matrix from nested rows, rejecting ragged input.
    pub fn from_rows(rows: Vec<Vec<TCell>>) -> Result<Self, GridError> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);

        let mut cells = Vec::with_capacity(row_count * col_count);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != col_count {
                return Err(GridError::RaggedRows { row, expected: col_count, found: values.len() });
            }
            cells.extend(values);
        }

        Ok(Self { rows: row_count, cols: col_count, cells })
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }

    /// `(rows, cols)`
    pub fn dims(&self) -> [usize; 2] { [self.rows, self.cols] }

    pub fn get(&self, row: usize, col: usize) -> Option<TCell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut TCell> {
        if row < self.rows && col < self.cols {
            Some(&mut self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[TCell]> {
        (row < self.rows).then(|| self.row_slice(row))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[TCell]> + '_ {
        // cols may be zero
        (0..self.rows).map(move |row| self.row_slice(row))
    }

    fn row_slice(&self, row: usize) -> &[TCell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Cells with their `(row, col)` position, in row-major order.
    pub fn indexed_cells(&self) -> impl Iterator<Item = ((usize, usize), TCell)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().map(move |(i, &cell)| ((i / cols, i % cols), cell))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == ALIVE).count()
    }

    pub fn to_rows(&self) -> Vec<Vec<TCell>> {
        self.iter_rows().map(<[TCell]>::to_vec).collect()
    }
}

impl Clone for CellMatrix {
    fn clone(&self) -> Self {
        Self { rows: self.rows, cols: self.cols, cells: self.cells.clone() }
    }

    // Reuses the buffer; step snapshots every turn
    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.cells.clone_from(&source.cells);
    }
}

impl Index<(usize, usize)> for CellMatrix {
    type Output = TCell;

    fn index(&self, (row, col): (usize, usize)) -> &TCell {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) outside {}x{} matrix", self.rows, self.cols);
        &self.cells[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for CellMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut TCell {
        assert!(row < self.rows && col < self.cols, "cell ({row}, {col}) outside {}x{} matrix", self.rows, self.cols);
        &mut self.cells[row * self.cols + col]
    }
}
