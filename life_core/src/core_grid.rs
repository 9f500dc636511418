// core_grid.rs - The grid evolution engine

use crate::bounds::GridBounds;
use crate::error::GridError;
use crate::grid::{CellMatrix, TCell, ALIVE, DEAD};
use crate::rules;

/// Owns the cell matrix of one simulation run.
///
/// `current` is the live state. `previous` is the frozen snapshot every
/// `step` reads neighbors from, so all cells of a generation move from the
/// same prior turn. `initial` is the reset point.
#[derive(Clone, Debug)]
pub struct CoreGrid {
    initial: CellMatrix,
    current: CellMatrix,
    previous: CellMatrix,
    bounds: GridBounds,
    turn: u64,
}

impl CoreGrid {
    pub fn new(matrix: CellMatrix, bounds: GridBounds) -> Result<Self, GridError> {
        validate_matrix(&matrix, &bounds)?;
        log::debug!("core grid created: {}x{}, {} alive", matrix.rows(), matrix.cols(), matrix.alive_count());

        Ok(Self {
            current: matrix.clone(),
            previous: matrix.clone(),
            initial: matrix,
            bounds,
            turn: 0,
        })
    }

    /// Re-checks dimensions and cell values of the live matrix.
    pub fn validate(&self) -> Result<(), GridError> {
        validate_matrix(&self.current, &self.bounds)
    }

    /// Advances the simulation by one generation.
    pub fn step(&mut self) {
        self.turn += 1;
        self.previous.clone_from(&self.current);
        rules::evolve(&self.previous, &mut self.current);

        debug_assert!(self.validate().is_ok(), "step produced an invalid grid");
        log::trace!("turn {}: {} alive", self.turn, self.alive_cell_count());
    }

    /// Writes a single cell. Position and value are checked before the write,
    /// so a rejected call leaves the matrix unchanged.
    pub fn set_cell(&mut self, row: usize, col: usize, value: TCell) -> Result<(), GridError> {
        let (rows, cols) = (self.current.rows(), self.current.cols());
        let Some(cell) = self.current.get_mut(row, col) else {
            return Err(GridError::IndexOutOfBounds { row, col, rows, cols });
        };
        if !is_cell_state(value) {
            return Err(GridError::InvalidCellValue { row, col, value });
        }
        *cell = value;
        self.validate()
    }

    pub fn cell_matrix(&self) -> &CellMatrix { &self.current }
    pub fn initial_matrix(&self) -> &CellMatrix { &self.initial }
    pub fn bounds(&self) -> &GridBounds { &self.bounds }
    pub fn turn(&self) -> u64 { self.turn }
    pub fn rows(&self) -> usize { self.current.rows() }
    pub fn cols(&self) -> usize { self.current.cols() }

    pub fn alive_cell_count(&self) -> usize {
        self.current.alive_count()
    }

    /// Restores the initial matrix and zeroes the turn counter.
    pub fn reset(&mut self) {
        self.current.clone_from(&self.initial);
        self.previous.clone_from(&self.initial);
        self.turn = 0;
        log::debug!("core grid reset to initial matrix");
    }

    /// Replaces the reset point with `matrix` and restarts from it.
    /// On error the grid keeps its previous state.
    pub fn reseed(&mut self, matrix: CellMatrix) -> Result<(), GridError> {
        validate_matrix(&matrix, &self.bounds)?;
        self.current.clone_from(&matrix);
        self.previous.clone_from(&matrix);
        self.initial = matrix;
        self.turn = 0;
        log::debug!("core grid reseeded: {} alive", self.initial.alive_count());
        Ok(())
    }
}

fn is_cell_state(value: TCell) -> bool {
    value == DEAD || value == ALIVE
}

/// Dimension parity, dimension bounds, then cell values. First violation wins.
fn validate_matrix(matrix: &CellMatrix, bounds: &GridBounds) -> Result<(), GridError> {
    let dims = matrix.dims();
    if dims.iter().any(|dim| dim % 2 != 0) {
        return Err(GridError::OddDimensions { rows: dims[0], cols: dims[1] });
    }

    for (axis, &value) in dims.iter().enumerate() {
        if !bounds.contains(axis, value) {
            return Err(GridError::DimensionOutOfBounds {
                axis,
                value,
                min: bounds.min[axis],
                max: bounds.max[axis],
            });
        }
    }

    match matrix.indexed_cells().find(|&(_, value)| !is_cell_state(value)) {
        Some(((row, col), value)) => Err(GridError::InvalidCellValue { row, col, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridErrorKind;

    const BOUNDS: GridBounds = GridBounds::new([2, 2], [8, 8]);

    fn grid(rows: Vec<Vec<TCell>>) -> CoreGrid {
        CoreGrid::new(CellMatrix::from_rows(rows).unwrap(), BOUNDS).unwrap()
    }

    #[test]
    fn new_grid_starts_at_turn_zero() {
        let g = grid(vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(g.turn(), 0);
        assert_eq!(g.alive_cell_count(), 2);
        assert_eq!(g.cell_matrix(), g.initial_matrix());
    }

    #[test]
    fn odd_dimensions_are_reported_before_bounds() {
        let err = CoreGrid::new(CellMatrix::new(1, 3), BOUNDS).unwrap_err();
        assert_eq!(err, GridError::OddDimensions { rows: 1, cols: 3 });
        assert_eq!(err.kind(), GridErrorKind::InvalidGrid);
    }

    #[test]
    fn bounds_are_reported_before_cell_values() {
        let m = CellMatrix::from_rows(vec![vec![3; 10]; 2]).unwrap();
        let err = CoreGrid::new(m, BOUNDS).unwrap_err();
        assert_eq!(err, GridError::DimensionOutOfBounds { axis: 1, value: 10, min: 2, max: 8 });
    }

    #[test]
    fn first_invalid_cell_is_reported() {
        let m = CellMatrix::from_rows(vec![vec![0, 0], vec![2, 3]]).unwrap();
        let err = CoreGrid::new(m, BOUNDS).unwrap_err();
        assert_eq!(err, GridError::InvalidCellValue { row: 1, col: 0, value: 2 });
    }

    #[test]
    fn set_cell_writes_legal_values() {
        let mut g = grid(vec![vec![0; 4]; 4]);
        g.set_cell(2, 3, ALIVE).unwrap();
        assert_eq!(g.cell_matrix()[(2, 3)], ALIVE);
        g.set_cell(2, 3, DEAD).unwrap();
        assert_eq!(g.alive_cell_count(), 0);
    }

    #[test]
    fn set_cell_outside_grid_is_an_index_error() {
        let mut g = grid(vec![vec![0; 4]; 2]);
        let err = g.set_cell(2, 0, ALIVE).unwrap_err();
        assert_eq!(err, GridError::IndexOutOfBounds { row: 2, col: 0, rows: 2, cols: 4 });
        assert_eq!(err.kind(), GridErrorKind::Index);
    }

    #[test]
    fn step_does_not_touch_initial_matrix() {
        let mut g = grid(vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let before = g.initial_matrix().clone();
        g.step();
        assert_eq!(g.turn(), 1);
        assert_ne!(g.cell_matrix(), &before);
        assert_eq!(g.initial_matrix(), &before);
    }

    #[test]
    fn reseed_replaces_reset_point() {
        let mut g = grid(vec![vec![0; 4]; 4]);
        g.step();
        let mut seed = CellMatrix::new(4, 4);
        seed[(1, 1)] = ALIVE;
        g.reseed(seed.clone()).unwrap();
        assert_eq!(g.turn(), 0);
        assert_eq!(g.cell_matrix(), &seed);

        g.step();
        g.reset();
        assert_eq!(g.cell_matrix(), &seed);
    }

    #[test]
    fn rejected_reseed_keeps_state() {
        let mut g = grid(vec![vec![1, 1], vec![1, 1]]);
        g.step();
        let err = g.reseed(CellMatrix::new(3, 4)).unwrap_err();
        assert_eq!(err.kind(), GridErrorKind::InvalidGrid);
        assert_eq!(g.turn(), 1);
        assert_eq!(g.initial_matrix(), &CellMatrix::from_rows(vec![vec![1, 1], vec![1, 1]]).unwrap());
    }
}
