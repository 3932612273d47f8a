//! Canvas configuration surface.
//!
//! The host owns a [`CanvasSettings`] value and may mutate it freely between
//! events; the engine reads it on every operation. Settings round-trip
//! through JSON so hosts can persist them alongside their own configuration.

use crate::constants::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::types::{ElementKind, Size};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors from loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Host-owned canvas configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Canvas width in length units
    pub canvas_width: f32,

    /// Canvas height in length units
    pub canvas_height: f32,

    /// Keep elements inside the canvas during drag and resize
    pub clip_elements_to_canvas: bool,

    /// Force width == height on every resize output
    pub maintain_square_aspect_ratio: bool,

    /// Kinds admitted onto the canvas. An empty list admits every kind.
    pub allowed_element_types: Vec<ElementKind>,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            clip_elements_to_canvas: true,
            maintain_square_aspect_ratio: false,
            allowed_element_types: ElementKind::ALL.to_vec(),
        }
    }
}

impl CanvasSettings {
    /// The canvas extent as a boundary for clamping and resize solving.
    pub fn boundary(&self) -> Size {
        Size::new(self.canvas_width, self.canvas_height)
    }

    /// Whether `kind` passes the admission check.
    pub fn is_allowed(&self, kind: ElementKind) -> bool {
        self.allowed_element_types.is_empty() || self.allowed_element_types.contains(&kind)
    }

    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize settings to a pretty-printed JSON string.
    pub fn to_json(&self) -> SettingsResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Save settings to a JSON file.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
