// ui.rs - egui front end: display panel, info panel and button panel

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::clock::format_elapsed;
use crate::config::{GameConfig, UiSettings};
use crate::patterns;
use crate::runner::{ControlButton, SimState, SimulationRunner};

struct Palette {
    background: Color32,
    cell: Color32,
    grid: Color32,
    text: Color32,
}

impl From<&UiSettings> for Palette {
    fn from(ui: &UiSettings) -> Self {
        let rgb = |[r, g, b]: [u8; 3]| Color32::from_rgb(r, g, b);
        Self {
            background: rgb(ui.background_color),
            cell: rgb(ui.cell_color),
            grid: rgb(ui.grid_color),
            text: rgb(ui.text_color),
        }
    }
}

pub struct LifeApp {
    runner: SimulationRunner,
    palette: Palette,
    selected_pattern: usize,
    random_seed: u64,
}

impl LifeApp {
    pub fn new(config: &GameConfig, runner: SimulationRunner) -> Self {
        Self {
            runner,
            palette: Palette::from(&config.ui),
            selected_pattern: 0,
            random_seed: 0,
        }
    }

    fn info_panel(&self, ui: &mut egui::Ui, now: Instant) {
        let grid = self.runner.grid();
        ui.colored_label(self.palette.text, format!("Grid : {} x {}", grid.rows(), grid.cols()));

        if self.runner.state() == SimState::Edit {
            for line in ["Edit mode running,", "press [ENTER] to start", "the simulation"] {
                ui.colored_label(self.palette.text, line);
            }
        } else {
            ui.colored_label(self.palette.text, format!("Alive cells : {}", self.runner.alive_cell_count()));
            ui.colored_label(self.palette.text, format!("Turn #{}", self.runner.turn()));
            ui.colored_label(self.palette.text, format!("Time : {}", format_elapsed(self.runner.elapsed(now))));
        }
    }

    fn button_panel(&mut self, ui: &mut egui::Ui, now: Instant) {
        ui.horizontal(|ui| {
            for button in ControlButton::ALL {
                let enabled = self.runner.is_enabled(button);
                if ui.add_enabled(enabled, egui::Button::new(button.label())).clicked() {
                    self.runner.press(button, now);
                }
            }
        });

        ui.separator();

        // Speed control
        let mut speed = 1000.0 / self.runner.turn_timeout().as_millis() as f32;
        if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" turns/sec")).changed() {
            self.runner.set_turn_timeout(Duration::from_millis((1000.0 / speed) as u64));
        }
    }

    fn edit_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_enabled_ui(self.runner.state() == SimState::Edit, |ui| {
            egui::ComboBox::from_id_source("pattern_selector")
                .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            ui.horizontal(|ui| {
                if ui.button("Apply Pattern").clicked() {
                    let pattern = &patterns::PATTERNS[self.selected_pattern];
                    if let Err(err) = self.runner.apply_pattern(pattern) {
                        log::warn!("pattern {} rejected: {err}", pattern.name);
                    }
                }
                if ui.button("Random").clicked() {
                    self.random_seed = self.random_seed.wrapping_add(1);
                    if let Err(err) = self.runner.randomize(self.random_seed) {
                        log::warn!("random fill rejected: {err}");
                    }
                }
                if ui.button("Clear").clicked() {
                    if let Err(err) = self.runner.clear() {
                        log::warn!("clear rejected: {err}");
                    }
                }
            });
        });
    }

    fn display_panel(&mut self, ui: &mut egui::Ui) {
        let matrix = self.runner.cell_matrix();
        let (rows, cols) = (matrix.rows(), matrix.cols());
        if rows == 0 || cols == 0 { return; }

        let spacing = 0.5;
        let available = ui.available_size();
        let box_size = ((available.x / cols as f32).min(available.y / rows as f32) - spacing).max(1.0);
        let pitch = box_size + spacing;
        let total_size = Vec2::new(pitch * cols as f32 - spacing, pitch * rows as f32 - spacing);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.palette.background);

        for ((row, col), cell) in matrix.indexed_cells() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                Vec2::splat(box_size),
            );
            if cell == life_core::ALIVE {
                painter.rect_filled(rect, 1.0, self.palette.cell);
            }
            painter.rect_stroke(rect, 1.0, Stroke::new(0.2, self.palette.grid));
        }

        // Click toggles a cell while editing
        if response.clicked() && self.runner.state() == SimState::Edit {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                let (row, col) = ((offset.y / pitch) as usize, (offset.x / pitch) as usize);
                if let Err(err) = self.runner.toggle_cell(row, col) {
                    log::warn!("edit rejected: {err}");
                }
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if self.runner.state() == SimState::Edit && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.runner.press(ControlButton::Start, now);
        }

        self.runner.tick(now);

        egui::SidePanel::right("control_panel")
            .exact_width(ctx.screen_rect().width() * 0.3)
            .show(ctx, |ui| {
                ui.heading("Game of Life");
                ui.separator();
                self.info_panel(ui, now);
                ui.separator();
                self.button_panel(ui, now);
                ui.separator();
                self.edit_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.display_panel(ui);
        });

        // Keep turns and the clock moving while running
        if self.runner.state() == SimState::Running {
            ctx.request_repaint();
        }
    }
}
