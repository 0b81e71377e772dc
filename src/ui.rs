// ui.rs - egui rendering and pointer handling for LifeApp

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use crate::app::{CELL_SIZE, LifeApp};
use life_engine::PATTERNS;

/// Maps a pointer position on the canvas to grid coordinates.
fn cell_at(origin: Pos2, pos: Pos2, width: usize, height: usize) -> Option<(usize, usize)> {
    let local = (pos - origin) / CELL_SIZE;
    if local.x < 0.0 || local.y < 0.0 {
        return None;
    }
    let (x, y) = (local.x.floor() as usize, local.y.floor() as usize);
    (x < width && y < height).then_some((x, y))
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    let running = !self.is_running;
                    self.set_running(running);
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear();
                }

                if ui.button("🎲 Random").clicked() {
                    self.randomize();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.engine.generation()));
            });

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut fps = self.config.target_fps;
                if ui.add(egui::Slider::new(&mut fps, 1.0..=60.0).suffix(" gen/sec")).changed() {
                    self.set_target_fps(fps);
                }

                ui.label("Density:");
                ui.add(egui::Slider::new(&mut self.config.live_probability, 0.0..=1.0));

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.label("Drag to paint live cells. Click a cell to flip it while paused.");
            if let Some(status) = &self.status {
                ui.colored_label(Color32::RED, status);
            }

            ui.separator();

            let (width, height) = (self.engine.width(), self.engine.height());
            let total_size = Vec2::new(width as f32, height as f32) * CELL_SIZE;
            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click_and_drag());
            let origin = response.rect.min;

            painter.rect_filled(response.rect, 0.0, self.dead_color);

            for (x, y, alive) in self.engine.current().iter() {
                if !alive {
                    continue;
                }
                let min = origin + Vec2::new(x as f32, y as f32) * CELL_SIZE;
                let rect = Rect::from_min_size(min, Vec2::splat(CELL_SIZE));
                painter.rect_filled(rect.shrink(0.4), 0.0, self.live_color);
            }
            painter.rect_stroke(response.rect, 0.0, Stroke::new(1.0, Color32::GRAY));

            if let Some((x, y)) = response
                .interact_pointer_pos()
                .and_then(|pos| cell_at(origin, pos, width, height))
            {
                if response.dragged() {
                    self.paint(x, y);
                } else if response.clicked() && !self.is_running {
                    self.toggle(x, y);
                }
            }

            ui.separator();

            let live_cells = self.engine.population();
            let total = width * height;
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });
        });

        if self.is_running {
            ctx.request_repaint();
        }
    }
}
