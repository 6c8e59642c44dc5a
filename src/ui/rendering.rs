//! Canvas rendering for nodes, completed shapes and the live path.

use super::state::SketchApp;
use crate::constants;
use crate::types::Point;
use eframe::egui;

/// Colors for one theme.
struct Palette {
    node: egui::Color32,
    stroke: egui::Color32,
}

impl SketchApp {
    fn palette(&self) -> Palette {
        if self.dark_mode {
            Palette {
                node: egui::Color32::from_rgb(52, 52, 64),
                stroke: egui::Color32::from_rgb(240, 200, 80),
            }
        } else {
            Palette {
                node: egui::Color32::from_rgb(215, 215, 225),
                stroke: egui::Color32::from_rgb(40, 90, 200),
            }
        }
    }

    /// Renders the current sketch frame.
    ///
    /// Nodes are drawn first, then completed shapes, then the live path as a
    /// translucent preview on top.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    pub fn render_sketch(&self, painter: &egui::Painter) {
        let palette = self.palette();
        let frame = self.sketch.frame();
        let width = self.sketch.config().stroke_width;

        for node in frame.nodes {
            painter.circle_filled(self.canvas_to_screen(node.center), node.radius, palette.node);
        }

        for shape in frame.shapes {
            self.draw_stroke(painter, shape, width, palette.stroke);
        }

        if let Some(path) = frame.live_path {
            let preview = palette.stroke.gamma_multiply(constants::PREVIEW_OPACITY);
            self.draw_stroke(painter, path, width, preview);
        }
    }

    /// Draws a thick polyline with round caps and joins.
    ///
    /// egui lines have square joins, so a disc is placed on every vertex.
    fn draw_stroke(&self, painter: &egui::Painter, points: &[Point], width: f32, color: egui::Color32) {
        let screen: Vec<egui::Pos2> = points.iter().map(|p| self.canvas_to_screen(*p)).collect();
        if screen.len() > 1 {
            painter.add(egui::Shape::line(screen.clone(), egui::Stroke::new(width, color)));
        }
        for pos in screen {
            painter.circle_filled(pos, width / 2.0, color);
        }
    }
}
