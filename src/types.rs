//! Shared types serialized between the scan and render stages.
//!
//! The scan stage writes these as JSON (`manifest.json`); the render stage
//! reads them back. Both sides must agree on the shape, so it lives here.

use serde::{Deserialize, Serialize};

/// One renderable image entry sourced from the tiles directory.
///
/// Indices are assigned in enumeration order (lexicographic by file name)
/// and are unique and contiguous from 0 within a single scan. They exist
/// only for the duration of one build; nothing persists them across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileEntry {
    /// Zero-based position in enumeration order.
    pub index: u32,
    /// Path relative to the page root, e.g. `tiles/sunset.jpg`.
    pub source_path: String,
    /// Bare file name, e.g. `sunset.jpg`.
    pub file_name: String,
}

/// A positioned text label, independent of any tile.
///
/// Annotations come from `config.toml` (`[[overlay]]` tables), never from
/// the filesystem scan. They share the tile grid's coordinate space by
/// convention only; no field ties an annotation to a tile index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayAnnotation {
    /// Grid column the overlay starts in.
    pub grid_x: i32,
    /// Grid row the overlay starts in.
    pub grid_y: i32,
    /// Horizontal anchor position within the grid cell.
    pub anchor_x: i32,
    /// Vertical anchor position within the grid cell.
    pub anchor_y: i32,
    /// Literal label text. Absent means an empty positioned block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Everything the render stage needs: the ordered tiles plus the fixed
/// overlay annotations, combined for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryDocument {
    pub tiles: Vec<TileEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overlays: Vec<OverlayAnnotation>,
}
