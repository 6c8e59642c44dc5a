//! Application state for the sketch window.

use crate::config::SketchConfig;
use crate::export::ExportOptions;
use crate::sketch::Sketch;
use eframe::egui;
use serde::{Deserialize, Serialize};

/// Settings persisted between sessions.
///
/// Shapes are not stored; they are rebuilt from the decorative catalog on
/// every start.
#[derive(Serialize, Deserialize)]
#[serde(default)]
struct PersistedState {
    config: SketchConfig,
    dark_mode: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            config: SketchConfig::default(),
            dark_mode: true,
        }
    }
}

/// The main application structure: the sketch plus window-level settings.
pub struct SketchApp {
    /// Grid, live path and shapes; owns the active config
    pub sketch: Sketch,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Screen position of the canvas origin, updated every frame
    pub canvas_origin: egui::Pos2,
    /// Options used by the export buttons
    pub export_options: ExportOptions,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_config(SketchConfig::default())
    }
}

impl SketchApp {
    /// Creates the app, restoring persisted settings when available.
    ///
    /// A config file named by the environment takes precedence over the
    /// stored one.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if std::env::var_os(crate::constants::CONFIG_ENV_VAR).is_some() {
            return Self::with_config(SketchConfig::from_env());
        }
        let restored = cc
            .storage
            .and_then(|storage| storage.get_string(crate::constants::STORAGE_KEY))
            .and_then(|json| match Self::from_json(&json) {
                Ok(app) => Some(app),
                Err(err) => {
                    log::warn!("ignoring stored app state: {err}");
                    None
                }
            });
        restored.unwrap_or_default()
    }

    /// Creates an app drawing with `config`.
    pub fn with_config(config: SketchConfig) -> Self {
        Self {
            sketch: Sketch::new(config),
            dark_mode: true,
            canvas_origin: egui::Pos2::ZERO,
            export_options: ExportOptions::default(),
        }
    }

    /// Replaces the active config and rebuilds the grid.
    pub fn set_config(&mut self, config: SketchConfig) {
        self.sketch.set_config(config);
    }

    /// Serializes the persisted settings to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let state = PersistedState {
            config: self.sketch.config().clone(),
            dark_mode: self.dark_mode,
        };
        serde_json::to_string_pretty(&state)
    }

    /// Restores settings from JSON, rebuilding the sketch from the config.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let stored: PersistedState = serde_json::from_str(json)?;
        stored.config.validate()?;
        Ok(Self {
            dark_mode: stored.dark_mode,
            ..Self::with_config(stored.config)
        })
    }

    /// Converts a screen position to sketch coordinates.
    pub fn screen_to_canvas(&self, screen_pos: egui::Pos2) -> crate::Point {
        let local = screen_pos - self.canvas_origin;
        crate::Point::new(local.x, local.y)
    }

    /// Converts sketch coordinates to a screen position.
    pub fn canvas_to_screen(&self, p: crate::Point) -> egui::Pos2 {
        self.canvas_origin + egui::vec2(p.x, p.y)
    }
}
