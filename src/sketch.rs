//! The sketch surface state and its event handling.
//!
//! [`Sketch`] owns the grid, the live path and the completed shapes. Every
//! external input is delivered as a [`SketchEvent`] and handled to completion
//! before the next one; [`Sketch::handle`] reports whether the rendered frame
//! changed so the caller knows when to repaint.

use crate::config::SketchConfig;
use crate::decor;
use crate::grid::{GridLayout, GridSpec};
use crate::path::PathAccumulator;
use crate::resolver;
use crate::shapes::{ShapeSet, Toggle};
use crate::types::{Node, Point, Shape};

/// Discrete inputs consumed by a [`Sketch`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SketchEvent {
    /// The viewport now has this size in pixels
    Resize {
        /// Viewport width
        width: f32,
        /// Viewport height
        height: f32,
    },
    /// Primary pointer pressed
    PointerDown(Point),
    /// Pointer moved while pressed
    PointerMove(Point),
    /// Primary pointer released
    PointerUp,
    /// Pointer left the drawing surface
    PointerLeave,
    /// Undo the most recent shape
    Undo,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Grid nodes in row-major order
    pub nodes: &'a [Node],
    /// Completed shapes in insertion order
    pub shapes: &'a [Shape],
    /// The path currently being drawn
    pub live_path: Option<&'a [Point]>,
}

/// Grid, live path and completed shapes for one drawing surface.
#[derive(Debug, Clone)]
pub struct Sketch {
    config: SketchConfig,
    viewport: Option<(f32, f32)>,
    grid: GridLayout,
    path: PathAccumulator,
    shapes: ShapeSet,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl Sketch {
    /// Creates a sketch with no viewport yet.
    pub fn new(config: SketchConfig) -> Self {
        Self {
            config,
            viewport: None,
            grid: GridLayout::default(),
            path: PathAccumulator::new(),
            shapes: ShapeSet::new(),
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// Swaps the configuration and rebuilds the grid for the current viewport.
    pub fn set_config(&mut self, config: SketchConfig) {
        self.config = config;
        if let Some((width, height)) = self.viewport {
            self.regenerate(width, height);
        }
    }

    /// Last viewport size seen, if any.
    pub fn viewport(&self) -> Option<(f32, f32)> {
        self.viewport
    }

    /// Current grid.
    pub fn grid(&self) -> &GridLayout {
        &self.grid
    }

    /// Completed shapes.
    pub fn shapes(&self) -> &ShapeSet {
        &self.shapes
    }

    /// The in-progress path, if a gesture is active.
    pub fn live_path(&self) -> Option<&[Point]> {
        self.path.current()
    }

    /// Borrowed snapshot for the renderer.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            nodes: self.grid.nodes(),
            shapes: self.shapes.shapes(),
            live_path: self.path.current(),
        }
    }

    /// Applies one event. Returns true if the frame changed.
    pub fn handle(&mut self, event: SketchEvent) -> bool {
        match event {
            SketchEvent::Resize { width, height } => self.resize(width, height),
            SketchEvent::PointerDown(pos) => {
                let captured = self.capture(pos);
                self.path.begin(captured)
            }
            SketchEvent::PointerMove(pos) => {
                let captured = self.capture(pos);
                self.path.extend(captured)
            }
            SketchEvent::PointerUp | SketchEvent::PointerLeave => self.end_capture(),
            SketchEvent::Undo => self.undo(),
        }
    }

    /// Regenerates the grid if the viewport size changed.
    ///
    /// Regeneration replaces the whole shape set with the decorative shapes,
    /// so shapes drawn by the user do not survive a resize. A path being drawn
    /// is dropped too, since its points belong to the old grid.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        if self.viewport == Some((width, height)) {
            return false;
        }
        self.regenerate(width, height);
        true
    }

    /// Removes the most recently added shape.
    pub fn undo(&mut self) -> bool {
        self.shapes.undo().is_some()
    }

    /// Removes every shape.
    pub fn clear(&mut self) -> bool {
        let changed = !self.shapes.is_empty();
        self.shapes.clear();
        changed
    }

    /// Reinstalls the decorative shapes for the current grid.
    pub fn reset_decoration(&mut self) -> bool {
        self.shapes
            .replace_all(decor::layout(&self.config.decor, &self.grid));
        true
    }

    fn regenerate(&mut self, width: f32, height: f32) {
        self.viewport = Some((width, height));
        self.grid = GridLayout::generate(width, height, &GridSpec::from(&self.config));
        if self.path.is_drawing() {
            log::debug!("viewport changed mid-drag, discarding live path");
        }
        self.path = PathAccumulator::new();
        self.reset_decoration();
        log::debug!(
            "grid regenerated for {width}x{height}: {}x{} nodes, {} decorative shapes",
            self.grid.cols(),
            self.grid.rows(),
            self.shapes.len()
        );
    }

    fn capture(&self, pointer: Point) -> Option<Point> {
        resolver::resolve(pointer, self.grid.nodes(), self.config.capture_slack)
            .map(|node| node.center)
    }

    fn end_capture(&mut self) -> bool {
        let was_drawing = self.path.is_drawing();
        if let Some(path) = self.path.finish() {
            if let Toggle::Removed(index) = self.shapes.complete(path) {
                log::trace!("path erased shape {index}");
            }
        }
        was_drawing
    }
}
