//! User interface for the sketch surface.
//!
//! # Module Organization
//!
//! - `state` - The `SketchApp` struct and its persistence
//! - `canvas` - Mapping egui input to sketch events
//! - `rendering` - Drawing nodes and strokes
//! - `file_ops` - Export dialogs

mod canvas;
mod file_ops;
mod rendering;
mod state;

#[cfg(test)]
mod tests;

pub use state::SketchApp;

use crate::sketch::SketchEvent;
use eframe::egui;

impl eframe::App for SketchApp {
    /// Persist settings between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => storage.set_string(crate::constants::STORAGE_KEY, json),
            Err(err) => log::error!("failed to serialize app state: {err}"),
        }
    }

    /// Main update function called by egui for each frame.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `_frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_undo_key(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });
    }
}

impl SketchApp {
    /// Draws the toolbar with undo, clear, reset, export and theme controls.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        let ctx = ui.ctx().clone();
        ui.horizontal(|ui| {
            let can_undo = !self.sketch.shapes().is_empty();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                self.apply(&ctx, SketchEvent::Undo);
            }
            if ui.add_enabled(can_undo, egui::Button::new("Clear")).clicked() && self.sketch.clear() {
                ctx.request_repaint();
            }
            if ui.button("Reset").clicked() && self.sketch.reset_decoration() {
                ctx.request_repaint();
            }
            ui.separator();
            if ui.button("Export SVG").clicked() {
                self.export_svg();
            }
            if ui.button("Export PNG").clicked() {
                self.export_png();
            }
            ui.separator();
            ui.checkbox(&mut self.dark_mode, "Dark mode");
            ui.label(format!("{} shapes", self.sketch.shapes().len()));
        });
    }

    /// Allocates the drawing surface, handles its input and paints it.
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        self.sync_viewport(ui.ctx(), response.rect);
        self.handle_drawing(ui, &response);
        self.render_sketch(&painter);
    }
}
