//! # Dot Sketch
//!
//! A grid-based sketch surface. A lattice of round nodes fills the window and
//! the user draws by dragging across them: every pointer position snaps to the
//! nearest node and the snapped centers form a path. Releasing the pointer
//! completes the path as a thick rounded stroke, unless the same path (drawn
//! either way round) already exists, in which case that stroke is erased.
//!
//! ## Features
//! - Deterministic, centered grid layout for any viewport size
//! - Nearest-node capture within a configurable radius
//! - Toggle-on-complete shape set with undo
//! - Decorative word laid out over every freshly generated grid
//! - SVG and PNG export
//!
//! The drawing core ([`Sketch`] and the modules it is built from) has no
//! windowing dependency; the `eframe` shell only feeds it events and paints
//! its [`Frame`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod decor;
mod error;
pub mod export;
pub mod geometry;
pub mod grid;
pub mod path;
pub mod resolver;
pub mod shapes;
mod sketch;
mod types;
mod ui;

// Re-export public types and functions
pub use config::SketchConfig;
pub use error::{Result, SketchError};
pub use grid::{GridLayout, GridSpec};
pub use shapes::{ShapeSet, Toggle};
pub use sketch::{Frame, Sketch, SketchEvent};
pub use types::*;
use ui::SketchApp;

/// Runs the sketch application in a native window.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an `eframe::Error` if
/// initialization fails.
///
/// # Example
///
/// ```no_run
/// fn main() -> Result<(), eframe::Error> {
///     dot_sketch::run_app()
/// }
/// ```
pub fn run_app() -> std::result::Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Dot Sketch",
        options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc)))),
    )
}
