// runner.rs - Orchestrates edit mode, the turn timer and the core grid

use std::time::{Duration, Instant};

use life_core::{CellMatrix, CoreGrid, GridError, ALIVE, DEAD};

use crate::clock::SimulationClock;
use crate::config::GameConfig;
use crate::patterns::{self, Pattern};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    /// Cells can be toggled, the grid does not advance
    Edit,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlButton {
    Start,
    Stop,
    Reset,
}

impl ControlButton {
    pub const ALL: [ControlButton; 3] = [ControlButton::Start, ControlButton::Stop, ControlButton::Reset];

    pub fn label(self) -> &'static str {
        match self {
            ControlButton::Start => "START",
            ControlButton::Stop  => "STOP",
            ControlButton::Reset => "RESET",
        }
    }
}

/// Callback slots wired to the button panel.
pub trait SimulationControls {
    fn on_start(&mut self, now: Instant);
    fn on_stop(&mut self, now: Instant);
    fn on_reset(&mut self);
}

pub struct SimulationRunner {
    grid: CoreGrid,
    state: SimState,
    turn_timeout: Duration,
    last_turn: Option<Instant>,
    clock: SimulationClock,
}

impl SimulationRunner {
    /// Starts in edit mode on an all-dead grid of the configured size.
    pub fn new(config: &GameConfig) -> Result<Self, GridError> {
        let [rows, cols] = config.video_settings.grid_dim;
        let grid = CoreGrid::new(CellMatrix::new(rows, cols), config.grid_bounds())?;

        Ok(Self {
            grid,
            state: SimState::Edit,
            turn_timeout: config.turn_timeout(),
            last_turn: None,
            clock: SimulationClock::new(),
        })
    }

    pub fn state(&self) -> SimState { self.state }
    pub fn grid(&self) -> &CoreGrid { &self.grid }
    pub fn cell_matrix(&self) -> &CellMatrix { self.grid.cell_matrix() }
    pub fn alive_cell_count(&self) -> usize { self.grid.alive_cell_count() }
    pub fn turn(&self) -> u64 { self.grid.turn() }
    pub fn elapsed(&self, now: Instant) -> Duration { self.clock.elapsed(now) }
    pub fn turn_timeout(&self) -> Duration { self.turn_timeout }

    pub fn set_turn_timeout(&mut self, timeout: Duration) {
        self.turn_timeout = timeout.max(Duration::from_millis(1));
    }

    pub fn is_enabled(&self, button: ControlButton) -> bool {
        match button {
            ControlButton::Start => self.state != SimState::Running,
            ControlButton::Stop  => self.state == SimState::Running,
            ControlButton::Reset => true,
        }
    }

    /// Routes a button click to its callback slot. Disabled buttons do nothing.
    pub fn press(&mut self, button: ControlButton, now: Instant) {
        if !self.is_enabled(button) { return; }
        match button {
            ControlButton::Start => self.on_start(now),
            ControlButton::Stop  => self.on_stop(now),
            ControlButton::Reset => self.on_reset(),
        }
    }

    /// Advances one turn once the timeout has elapsed. Returns whether a turn ran.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != SimState::Running { return false; }

        let due = self.last_turn.is_none_or(|last| now.saturating_duration_since(last) >= self.turn_timeout);
        if due {
            self.last_turn = Some(now);
            self.add_turn();
        }
        due
    }

    pub fn add_turn(&mut self) {
        self.grid.step();
        log::debug!("turn {}: {} alive cells", self.grid.turn(), self.grid.alive_cell_count());
    }

    /// Flips one cell. Returns `Ok(false)` outside edit mode, where the grid is left alone.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        if self.state != SimState::Edit { return Ok(false); }

        let value = match self.grid.cell_matrix().get(row, col) {
            Some(ALIVE) => DEAD,
            _           => ALIVE,
        };
        self.grid.set_cell(row, col, value)?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<bool, GridError> {
        self.load_seed(CellMatrix::new(self.grid.rows(), self.grid.cols()))
    }

    pub fn apply_pattern(&mut self, pattern: &Pattern) -> Result<bool, GridError> {
        self.load_seed(patterns::pattern_matrix(self.grid.rows(), self.grid.cols(), pattern))
    }

    pub fn randomize(&mut self, seed: u64) -> Result<bool, GridError> {
        self.load_seed(patterns::random_matrix(self.grid.rows(), self.grid.cols(), seed))
    }

    /// Replaces the seed. Same edit-mode contract as [`Self::toggle_cell`].
    fn load_seed(&mut self, matrix: CellMatrix) -> Result<bool, GridError> {
        if self.state != SimState::Edit { return Ok(false); }
        self.grid.reseed(matrix)?;
        Ok(true)
    }
}

impl SimulationControls for SimulationRunner {
    fn on_start(&mut self, now: Instant) {
        match self.state {
            SimState::Running => return,
            SimState::Edit => {
                // The edited matrix becomes the new reset point
                let edited = self.grid.cell_matrix().clone();
                if let Err(err) = self.grid.reseed(edited) {
                    log::error!("edited grid rejected: {err}");
                    return;
                }
                log::info!("edit committed: {} alive cells", self.grid.alive_cell_count());
            }
            SimState::Stopped => {}
        }

        self.state = SimState::Running;
        self.last_turn = Some(now);
        self.clock.start(now);
        log::info!("simulation started at turn {}", self.grid.turn());
    }

    fn on_stop(&mut self, now: Instant) {
        if self.state != SimState::Running { return; }
        self.state = SimState::Stopped;
        self.clock.stop(now);
        log::info!("simulation stopped at turn {}", self.grid.turn());
    }

    fn on_reset(&mut self) {
        self.state = SimState::Edit;
        self.grid.reset();
        self.clock.reset();
        self.last_turn = None;
        log::info!("simulation reset, back to edit mode");
    }
}
