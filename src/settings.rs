//! Persistent selection settings.
//!
//! Settings live in a JSON file under the platform config directory. Every
//! field has a default, so partial files (or no file at all) are fine.
//!
//! ```json
//! { "color": "#ff8800", "line_width": 3.0, "default_frame": "galactic" }
//! ```

use crate::constants::{
    DEFAULT_FRAME, DEFAULT_LINE_WIDTH, DEFAULT_SELECT_COLOR, MAX_LINE_WIDTH, SETTINGS_DIR_NAME,
    SETTINGS_FILE_NAME,
};
use crate::frame::{FrameDescriptor, FrameError};
use crate::style::{Color, ColorError, ColorSource, SelectStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Selection color is not a hex color
    #[error("Invalid color setting: {0}")]
    InvalidColor(#[from] ColorError),

    /// Line width outside `(0, MAX_LINE_WIDTH]`
    #[error("Invalid line width: {0}")]
    InvalidLineWidth(f32),

    /// Default frame name matches no known frame
    #[error("Invalid default frame: {0}")]
    InvalidFrame(#[from] FrameError),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// User-configurable look of the selection rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectSettings {
    /// Hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`)
    pub color: String,
    /// Stroke width in pixels
    pub line_width: f32,
    /// Frame name or alias used for displayed positions
    pub default_frame: String,
}

impl Default for SelectSettings {
    fn default() -> Self {
        Self {
            color: DEFAULT_SELECT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
            default_frame: DEFAULT_FRAME.to_string(),
        }
    }
}

impl SelectSettings {
    /// Read and validate settings from `path`.
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let content = fs::read_to_string(path)?;
        let settings: SelectSettings = serde_json::from_str(&content)?;
        settings.validate()?;
        debug!(path = %path.display(), "Loaded selection settings");
        Ok(settings)
    }

    /// Like [`SelectSettings::load`], falling back to defaults. A missing
    /// file is expected; anything else is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(path = %path.display(), "Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        self.parsed_color()?;
        if !(self.line_width > 0.0 && self.line_width <= MAX_LINE_WIDTH) {
            return Err(SettingsError::InvalidLineWidth(self.line_width));
        }
        self.frame()?;
        Ok(())
    }

    /// Strictly parsed `default_frame`.
    pub fn frame(&self) -> SettingsResult<&'static FrameDescriptor> {
        Ok(self.default_frame.parse::<&'static FrameDescriptor>()?)
    }

    pub fn parsed_color(&self) -> SettingsResult<Color> {
        Ok(self.color.parse::<Color>()?)
    }

    /// Overlay style with a constant color.
    pub fn to_style(&self) -> SettingsResult<SelectStyle> {
        self.validate()?;
        Ok(SelectStyle {
            color: ColorSource::constant(self.parsed_color()?),
            line_width: self.line_width,
        })
    }
}

/// `<config dir>/skyselect/settings.json`, when the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
}
