/// Inclusive per-axis limits on grid dimensions, `[rows, cols]`.
///
/// The record is taken as given: `min <= max` and evenness are checked where
/// the values are loaded, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub min: [usize; 2],
    pub max: [usize; 2],
}

impl GridBounds {
    pub const fn new(min: [usize; 2], max: [usize; 2]) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, axis: usize, value: usize) -> bool {
        self.min[axis] <= value && value <= self.max[axis]
    }
}
