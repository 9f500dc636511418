// patterns.rs - Seed patterns for the edit mode

use life_core::{CellMatrix, ALIVE};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A named shape, as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(1, 1), (1, 2), (0, 2), (2, 1), (2, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

impl Pattern {
    /// `(height, width)` of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }
}

/// Fresh matrix with `pattern` centred in it. Cells that fall outside are dropped.
pub fn pattern_matrix(rows: usize, cols: usize, pattern: &Pattern) -> CellMatrix {
    let mut matrix = CellMatrix::new(rows, cols);
    let (height, width) = pattern.extent();
    let (top, left) = (rows.saturating_sub(height) / 2, cols.saturating_sub(width) / 2);

    for &(row, col) in pattern.cells {
        if let Some(cell) = matrix.get_mut(top + row, left + col) {
            *cell = ALIVE;
        }
    }
    matrix
}

/// Roughly a third of the cells alive, reproducible from `seed`.
pub fn random_matrix(rows: usize, cols: usize, seed: u64) -> CellMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut matrix = CellMatrix::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(1.0 / 3.0) { matrix[(row, col)] = ALIVE; }
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_fits_the_default_grid() {
        for pattern in PATTERNS {
            let matrix = pattern_matrix(48, 64, pattern);
            assert_eq!(matrix.alive_count(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn pattern_is_centred() {
        let blinker = &PATTERNS[1];
        let matrix = pattern_matrix(6, 6, blinker);
        assert_eq!(matrix.row(3), Some(&[0, 0, 0, 0, 0, 0][..]));
        assert_eq!(matrix.row(2), Some(&[0, 1, 1, 1, 0, 0][..]));
    }

    #[test]
    fn oversized_pattern_is_clipped() {
        let gun = PATTERNS.iter().find(|p| p.name == "Gosper Glider Gun").unwrap();
        assert_eq!(gun.extent(), (9, 36));
        let matrix = pattern_matrix(8, 8, gun);
        assert!(matrix.alive_count() < gun.cells.len());
    }

    #[test]
    fn random_fill_is_reproducible() {
        let a = random_matrix(20, 20, 7);
        let b = random_matrix(20, 20, 7);
        assert_eq!(a, b);
        assert_ne!(a, random_matrix(20, 20, 8));
        let alive = a.alive_count();
        assert!(alive > 60 && alive < 200, "{alive} alive");
    }
}
