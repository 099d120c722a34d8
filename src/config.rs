//! Gallery configuration module.
//!
//! Handles loading and validating `config.toml`, which lives next to the
//! tiles directory (i.e. in the page root). The file carries the page title,
//! the tiles directory name, the stylesheet reference, and the static
//! overlay annotations.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Tiles"           # Page title
//! tiles_dir = "tiles"       # Directory scanned for tile images
//! stylesheet = "main.css"   # Stylesheet href; copied to output if present
//!
//! # Overlay labels, positioned on the tile grid. Repeat per label.
//! [[overlay]]
//! grid_x = 8
//! grid_y = 1
//! anchor_x = 1
//! anchor_y = 1
//! text = "Label"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown
//! keys are rejected to catch typos early.

use crate::types::OverlayAnnotation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page title for the generated document.
    pub title: String,
    /// Name of the directory scanned for tile images, relative to the
    /// page root.
    pub tiles_dir: String,
    /// Stylesheet href referenced from the document head. The file itself
    /// is opaque external content; it is copied to the output directory
    /// when present, never generated.
    pub stylesheet: String,
    /// Static overlay annotations, rendered in declaration order.
    #[serde(rename = "overlay", skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<OverlayAnnotation>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Tiles".to_string(),
            tiles_dir: "tiles".to_string(),
            stylesheet: "main.css".to_string(),
            overlays: Vec::new(),
        }
    }
}

impl GalleryConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiles_dir.is_empty() {
            return Err(ConfigError::Validation("tiles_dir must not be empty".into()));
        }
        if Path::new(&self.tiles_dir).is_absolute() || self.tiles_dir.contains("..") {
            return Err(ConfigError::Validation(
                "tiles_dir must be a plain relative path".into(),
            ));
        }
        if self.stylesheet.is_empty() {
            return Err(ConfigError::Validation(
                "stylesheet must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Load config from `config.toml` in the given directory.
///
/// Returns the stock defaults if no file exists. Unknown keys are rejected
/// and the result is validated.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        GalleryConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Tilewall Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file in the page root, next to the tiles directory:
#   site/
#   ├── config.toml
#   ├── main.css
#   └── tiles/
#
# Unknown keys will cause an error.

# Page title for the generated document.
title = "Tiles"

# Directory scanned for tile images, relative to the page root.
tiles_dir = "tiles"

# Stylesheet href referenced from the document head. Copied to the output
# directory when the file exists in the page root; never generated.
stylesheet = "main.css"

# ---------------------------------------------------------------------------
# Overlay labels
# ---------------------------------------------------------------------------
# Each [[overlay]] table places one label on the tile grid. Positions are
# grid cells; the anchor picks a corner of the cell to pin the label to.
# Overlays are independent of tiles - they just share the coordinate space.
#
# [[overlay]]
# grid_x = 8        # Grid column
# grid_y = 1        # Grid row
# anchor_x = 1      # Horizontal anchor within the cell
# anchor_y = 1      # Vertical anchor within the cell
# text = "Label"    # Optional label text
"##
}
