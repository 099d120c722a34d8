//! CLI output formatting for both pipeline stages.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! Tiles (2)
//! 000 lake.png
//!     Source: tiles/lake.png
//! 001 sunset.jpg
//!     Source: tiles/sunset.jpg
//!
//! Overlays (1)
//! 000 "Label" at (8, 1)
//! ```
//!
//! ## Render
//!
//! ```text
//! index.html: 2 tiles, 1 overlay
//! ```

use crate::scan::Manifest;

/// Format a tile's zero-based index as 3-digit zero-padded.
fn format_index(index: u32) -> String {
    format!("{:0>3}", index)
}

/// Format scan stage output showing the discovered tiles and the
/// configured overlays.
pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push(format!("Tiles ({})", manifest.tiles.len()));
    for tile in &manifest.tiles {
        lines.push(format!("{} {}", format_index(tile.index), tile.file_name));
        lines.push(format!("    Source: {}", tile.source_path));
    }

    if !manifest.config.overlays.is_empty() {
        lines.push(String::new());
        lines.push(format!("Overlays ({})", manifest.config.overlays.len()));
        for (i, overlay) in manifest.config.overlays.iter().enumerate() {
            let label = match &overlay.text {
                Some(text) => format!("\"{}\"", text),
                None => "(no text)".to_string(),
            };
            lines.push(format!(
                "{} {} at ({}, {})",
                format_index(i as u32),
                label,
                overlay.grid_x,
                overlay.grid_y
            ));
        }
    }

    lines
}

/// Format render stage output: one summary line.
pub fn format_render_output(manifest: &Manifest) -> Vec<String> {
    let overlays = manifest.config.overlays.len();
    vec![format!(
        "index.html: {} {}, {} {}",
        manifest.tiles.len(),
        if manifest.tiles.len() == 1 { "tile" } else { "tiles" },
        overlays,
        if overlays == 1 { "overlay" } else { "overlays" },
    )]
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{}", line);
    }
}

pub fn print_render_output(manifest: &Manifest) {
    for line in format_render_output(manifest) {
        println!("{}", line);
    }
}
