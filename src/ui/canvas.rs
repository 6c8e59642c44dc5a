//! Canvas interaction: turns egui pointer and keyboard input into sketch events.

use super::state::SketchApp;
use crate::sketch::SketchEvent;
use eframe::egui;

impl SketchApp {
    /// Feeds one event to the sketch and asks for a repaint if it changed.
    pub fn apply(&mut self, ctx: &egui::Context, event: SketchEvent) {
        if self.sketch.handle(event) {
            ctx.request_repaint();
        }
    }

    /// Keeps the grid in sync with the canvas size.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `canvas_rect` - The screen-space rectangle of the canvas area
    pub fn sync_viewport(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.canvas_origin = canvas_rect.min;
        let size = canvas_rect.size();
        self.apply(
            ctx,
            SketchEvent::Resize {
                width: size.x,
                height: size.y,
            },
        );
    }

    /// Handles primary-button drawing on the canvas.
    ///
    /// Every pointer event of the frame is replayed in order, so a fast drag
    /// still captures each node it crosses. Press starts a path, movement
    /// extends it, and release or leaving the canvas finishes it.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `response` - The response from the canvas widget
    pub fn handle_drawing(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let ctx = ui.ctx().clone();
        let events = ui.input(|i| self.pointer_events(&i.events, response.rect));
        for event in events {
            self.apply(&ctx, event);
        }
    }

    /// Translates raw egui input into sketch events.
    ///
    /// Moves and leaves while idle are harmless; the sketch ignores them.
    fn pointer_events(&self, events: &[egui::Event], canvas_rect: egui::Rect) -> Vec<SketchEvent> {
        events
            .iter()
            .filter_map(|event| match event {
                egui::Event::PointerMoved(p) if canvas_rect.contains(*p) => {
                    Some(SketchEvent::PointerMove(self.screen_to_canvas(*p)))
                }
                egui::Event::PointerMoved(_) | egui::Event::PointerGone => {
                    Some(SketchEvent::PointerLeave)
                }
                egui::Event::PointerButton {
                    pos,
                    button: egui::PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !*pressed {
                        Some(SketchEvent::PointerUp)
                    } else if canvas_rect.contains(*pos) {
                        Some(SketchEvent::PointerDown(self.screen_to_canvas(*pos)))
                    } else {
                        None
                    }
                }
                _ => None,
            })
            .collect()
    }

    /// Handles the undo keyboard shortcut.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context for checking input
    pub fn handle_undo_key(&mut self, ctx: &egui::Context) {
        // Text fields keep their own undo
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::Z) && i.modifiers.command && !i.modifiers.shift) {
            self.apply(ctx, SketchEvent::Undo);
        }
    }
}
