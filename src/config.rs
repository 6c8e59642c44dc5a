//! Tunable sketch settings.
//!
//! Every layout and capture constant can be overridden from a JSON file
//! without recompiling. Missing fields fall back to [`crate::constants`].

use crate::constants;
use crate::decor::DecorCatalog;
use crate::error::{Result, SketchError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout, capture and styling settings for a sketch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Node diameter in pixels
    pub node_diameter: f32,
    /// Gap between neighbouring nodes in pixels
    pub node_gap: f32,
    /// Outer padding around the grid in pixels
    pub padding: f32,
    /// Capture distance beyond the node radius
    pub capture_slack: f32,
    /// Width of completed strokes in pixels
    pub stroke_width: f32,
    /// Decorative glyphs installed whenever the grid is regenerated
    pub decor: DecorCatalog,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            node_diameter: constants::NODE_DIAMETER,
            node_gap: constants::NODE_GAP,
            padding: constants::PADDING,
            capture_slack: constants::CAPTURE_SLACK,
            stroke_width: constants::STROKE_WIDTH,
            decor: DecorCatalog::default(),
        }
    }
}

impl SketchConfig {
    /// Radius shared by every node.
    pub fn node_radius(&self) -> f32 {
        self.node_diameter / 2.0
    }

    /// Parses and validates a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads, parses and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SketchError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Loads the file named by the config environment variable, or defaults.
    ///
    /// A broken file is logged and ignored so the application still starts.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(constants::CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("loaded sketch config from {path}");
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    /// Rejects values the layout cannot work with.
    pub fn validate(&self) -> Result<()> {
        positive("node_diameter", self.node_diameter)?;
        positive("stroke_width", self.stroke_width)?;
        non_negative("node_gap", self.node_gap)?;
        non_negative("padding", self.padding)?;
        non_negative("capture_slack", self.capture_slack)?;
        let pitch = self.node_diameter + self.node_gap;
        if pitch < constants::MIN_PITCH {
            return Err(SketchError::InvalidConfig {
                field: "node_diameter",
                reason: format!(
                    "diameter plus gap must be at least {} px, got {pitch}",
                    constants::MIN_PITCH
                ),
            });
        }
        self.decor.validate()
    }
}

fn positive(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SketchError::InvalidConfig {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SketchError::InvalidConfig {
            field,
            reason: format!("must be zero or positive, got {value}"),
        })
    }
}
