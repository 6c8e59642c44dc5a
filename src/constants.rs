//! Shared application-wide constants.
//! Centralizes the default values behind [`crate::SketchConfig`].

// Grid layout
/// Default node diameter in pixels.
pub const NODE_DIAMETER: f32 = 40.0;
/// Default gap between neighbouring nodes in pixels.
pub const NODE_GAP: f32 = 16.0;
/// Default outer padding around the grid in pixels.
pub const PADDING: f32 = 32.0;
/// Smallest accepted node pitch (diameter plus gap) in pixels.
pub const MIN_PITCH: f32 = 1.0;

// Capture
/// Extra distance beyond the node radius within which a pointer still captures the node.
pub const CAPTURE_SLACK: f32 = 20.0;

// Strokes
/// Width of completed shape strokes in pixels.
pub const STROKE_WIDTH: f32 = 18.0;
/// Opacity of the in-progress path preview.
pub const PREVIEW_OPACITY: f32 = 0.5;

// Decoration
/// Width of the decorative text footprint in grid cells.
pub const DECOR_WIDTH: usize = 25;
/// Height of the decorative text footprint in grid cells.
pub const DECOR_HEIGHT: usize = 5;

// Config
/// Environment variable naming a JSON config file to load at startup.
pub const CONFIG_ENV_VAR: &str = "DOT_SKETCH_CONFIG";
/// Storage key used to persist the config between sessions.
pub const STORAGE_KEY: &str = "sketch_config";
