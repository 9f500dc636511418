// rules.rs - Neighbor counting and the B3/S23 transition rule

use crate::grid::{CellMatrix, TCell, ALIVE, DEAD};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Counts alive cells among the 8 neighbors of `(row, col)`.
/// Positions outside the matrix count as dead; the grid does not wrap.
pub fn live_neighbors(matrix: &CellMatrix, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (Some(nr), Some(nc)) = (row.checked_add_signed(dr), col.checked_add_signed(dc)) else {
            continue;
        };
        if matrix.get(nr, nc) == Some(ALIVE) { count += 1; }
    }
    count
}

pub fn next_state(cell: TCell, live_neighbors: u8) -> TCell {
    match (cell, live_neighbors) {
        (ALIVE, 2) | (ALIVE, 3) => ALIVE,   // Survival
        (DEAD, 3)               => ALIVE,   // Birth
        _                       => DEAD,    // Death or stays dead
    }
}

/// Writes the next generation of `source` into `target`.
/// Both matrices must have the same dimensions.
pub fn evolve(source: &CellMatrix, target: &mut CellMatrix) {
    debug_assert_eq!(source.dims(), target.dims());
    for ((row, col), cell) in source.indexed_cells() {
        target[(row, col)] = next_state(cell, live_neighbors(source, row, col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: Vec<Vec<TCell>>) -> CellMatrix {
        CellMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn survival_needs_two_or_three_neighbors() {
        for count in 0..=8 {
            let expected = if count == 2 || count == 3 { ALIVE } else { DEAD };
            assert_eq!(next_state(ALIVE, count), expected, "alive cell with {count} neighbors");
        }
    }

    #[test]
    fn birth_needs_exactly_three_neighbors() {
        for count in 0..=8 {
            let expected = if count == 3 { ALIVE } else { DEAD };
            assert_eq!(next_state(DEAD, count), expected, "dead cell with {count} neighbors");
        }
    }

    #[test]
    fn neighbors_exclude_the_cell_itself() {
        let full = matrix(vec![vec![1; 3]; 3]);
        assert_eq!(live_neighbors(&full, 1, 1), 8);
    }

    #[test]
    fn corners_and_edges_see_only_inside_cells() {
        let full = matrix(vec![vec![1; 4]; 4]);
        assert_eq!(live_neighbors(&full, 0, 0), 3);
        assert_eq!(live_neighbors(&full, 0, 3), 3);
        assert_eq!(live_neighbors(&full, 3, 0), 3);
        assert_eq!(live_neighbors(&full, 3, 3), 3);
        assert_eq!(live_neighbors(&full, 0, 1), 5);
        assert_eq!(live_neighbors(&full, 2, 3), 5);
    }

    #[test]
    fn opposite_edges_are_not_neighbors() {
        let mut m = CellMatrix::new(4, 4);
        m[(0, 3)] = ALIVE;
        m[(3, 0)] = ALIVE;
        m[(3, 3)] = ALIVE;
        assert_eq!(live_neighbors(&m, 0, 0), 0);
    }

    #[test]
    fn evolve_reads_only_the_source() {
        // Blinker: an in-place sweep would corrupt later cells of the same row.
        let source = matrix(vec![
            vec![0, 0, 0, 0],
            vec![1, 1, 1, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]);
        let mut target = CellMatrix::new(4, 4);
        evolve(&source, &mut target);
        assert_eq!(target, matrix(vec![
            vec![0, 1, 0, 0],
            vec![0, 1, 0, 0],
            vec![0, 1, 0, 0],
            vec![0, 0, 0, 0],
        ]));
    }
}
