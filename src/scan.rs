//! Tile directory scanning and manifest generation.
//!
//! Stage 1 of the tilewall build pipeline. Enumerates the tiles directory
//! and produces a structured manifest that the render stage consumes.
//!
//! ## Page Structure
//!
//! ```text
//! site/                            # Page root
//! ├── config.toml                  # Gallery configuration (optional)
//! ├── main.css                     # Stylesheet (opaque, copied to output)
//! └── tiles/                       # Tiles directory
//!     ├── lake.png
//!     └── sunset.jpg
//! ```
//!
//! ## Enumeration Rules
//!
//! - The current- and parent-directory pseudo-entries are never tiles.
//!   Every other entry is one, dotfiles included.
//! - Entries are sorted lexicographically by file name, so a given
//!   directory always produces the same tile order on every platform.
//! - Indices are zero-based and contiguous in that order.
//!
//! ## Directory Access
//!
//! Enumeration goes through the [`DirReader`] trait rather than ambient
//! filesystem access, so tests can substitute an in-memory listing.
//! [`FsDirReader`] is the production implementation.

use crate::config::{self, ConfigError, GalleryConfig};
use crate::types::TileEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot read tiles directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub tiles: Vec<TileEntry>,
    pub config: GalleryConfig,
}

/// Directory enumeration capability.
///
/// Returns the raw entry names of a directory, in no guaranteed order.
/// Implementations may yield the pseudo-entries "." and ".."; the scanner
/// filters them out.
pub trait DirReader {
    fn read_names(&self, dir: &Path) -> std::io::Result<Vec<String>>;
}

/// [`DirReader`] backed by the real filesystem.
///
/// Entry names that are not valid UTF-8 are skipped: they cannot appear in
/// the document's `src` attribute, and a lossy conversion would produce a
/// tile pointing at a path that does not exist.
pub struct FsDirReader;

impl DirReader for FsDirReader {
    fn read_names(&self, dir: &Path) -> std::io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            if let Ok(name) = entry?.file_name().into_string() {
                names.push(name);
            }
        }
        Ok(names)
    }
}

/// Scan the page root: load its config, then enumerate its tiles directory.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let tiles = list_tiles(&FsDirReader, root, &config.tiles_dir)?;
    Ok(Manifest { tiles, config })
}

/// Enumerate the tiles directory into an ordered [`TileEntry`] sequence.
///
/// `source_path` values are relative to the page root (`tiles/sunset.jpg`),
/// which is also how the rendered document references them. An empty
/// directory yields an empty sequence; a missing or unreadable one fails
/// with [`ScanError::DirectoryAccess`] and never a partial sequence.
pub fn list_tiles(
    reader: &dyn DirReader,
    root: &Path,
    tiles_dir: &str,
) -> Result<Vec<TileEntry>, ScanError> {
    let dir = root.join(tiles_dir);
    let mut names: Vec<String> = reader
        .read_names(&dir)
        .map_err(|source| ScanError::DirectoryAccess {
            path: dir.clone(),
            source,
        })?
        .into_iter()
        .filter(|name| is_tile_name(name))
        .collect();

    names.sort();

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(i, name)| TileEntry {
            index: i as u32,
            source_path: format!("{}/{}", tiles_dir, name),
            file_name: name,
        })
        .collect())
}

/// Whether a raw directory entry name counts as a tile.
///
/// Only the "." / ".." pseudo-entries are excluded; every other entry in
/// the tiles directory becomes a tile, dotfiles included.
fn is_tile_name(name: &str) -> bool {
    name != "." && name != ".."
}
