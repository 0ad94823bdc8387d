use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::ConfigError;
use crate::picture::TileDimensions;

/// Name of the config file the binary looks for in the working directory
pub const CONFIG_FILE_NAME: &str = "pixel_tiles.json";

/// Session settings for the editor.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old configs
pub struct EditorConfig {
    /// Maximum number of pictures kept on the undo stack
    pub undo_limit: usize,
    /// Picture edits closer together than this collapse into one undo step
    pub coalesce_window_ms: u64,
    /// Canvas size of a new session
    pub default_tiles: TileDimensions,
    /// Fill color of new and resized pictures
    pub background: Color,
    /// Initial draw color
    pub default_color: Color,
    /// Screen points per picture cell
    pub scale: f32,
    /// Imported images are cropped to this many cells per side
    pub max_import_side: u32,
    /// Largest tile count accepted on either axis when resizing
    pub max_tiles: usize,
    pub grid_on_start: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            undo_limit: 100,
            coalesce_window_ms: 1000,
            default_tiles: TileDimensions::default(),
            background: Color::BACKGROUND,
            default_color: Color::BLACK,
            scale: 10.0,
            max_import_side: 100,
            max_tiles: 64,
            grid_on_start: true,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads `path` when it exists, otherwise falls back to the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading editor config from {}", path.display());
            Self::load(path)
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.undo_limit == 0 {
            return Err(ConfigError::Invalid("undo_limit must be at least 1".into()));
        }
        if self.max_tiles == 0 {
            return Err(ConfigError::Invalid("max_tiles must be at least 1".into()));
        }
        if let Err(err) = self.default_tiles.check(self.max_tiles) {
            return Err(ConfigError::Invalid(format!("default_tiles: {err}")));
        }
        if !(self.scale.is_finite() && self.scale >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "scale must be at least 1, got {}",
                self.scale
            )));
        }
        if self.max_import_side == 0 {
            return Err(ConfigError::Invalid("max_import_side must be non-zero".into()));
        }
        Ok(())
    }
}
