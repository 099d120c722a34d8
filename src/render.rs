//! HTML document generation.
//!
//! Stage 2 of the tilewall build pipeline. Takes the scan manifest and
//! produces the final static page.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # The tile wall page
//! └── main.css                   # Stylesheet (copied if present)
//! ```
//!
//! ## Document Shape
//!
//! One `img` element per tile, `src` pointing at the tile's path relative
//! to the page root and `id` derived from its index (`tile-0`, `tile-1`,
//! ...). Overlay annotations become positioned `div.overlay` blocks placed
//! via inline grid coordinates; the anchor values are exposed as CSS custom
//! properties for the stylesheet to interpret. The stylesheet itself is
//! opaque external content — referenced by `href` and copied verbatim,
//! never generated.
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Templates are type-safe Rust code with automatic XSS escaping.
//! [`render_document`] is pure: identical inputs produce identical markup.

use crate::config::GalleryConfig;
use crate::scan::Manifest;
use crate::types::{GalleryDocument, OverlayAnnotation, TileEntry};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the complete gallery page from a document and its config.
///
/// Pure composition: tiles and overlays pass through unchanged, in order.
pub fn render_document(document: &GalleryDocument, config: &GalleryConfig) -> Markup {
    let content = html! {
        main.tile-wall {
            @for tile in &document.tiles {
                (render_tile(tile))
            }
            @for overlay in &document.overlays {
                (render_overlay(overlay))
            }
        }
    };
    base_document(&config.title, &config.stylesheet, content)
}

/// Render the "gallery unavailable" page shown when the tiles directory
/// cannot be read, instead of a half-rendered document.
pub fn render_unavailable(config: &GalleryConfig) -> Markup {
    let content = html! {
        main.gallery-unavailable {
            p { "Gallery unavailable" }
        }
    };
    base_document(&config.title, &config.stylesheet, content)
}

/// Renders the base HTML document structure.
fn base_document(title: &str, stylesheet: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(stylesheet);
            }
            body {
                (content)
            }
        }
    }
}

/// Renders a single tile image.
fn render_tile(tile: &TileEntry) -> Markup {
    html! {
        img id={ "tile-" (tile.index) } src=(tile.source_path) alt=(tile.file_name) loading="lazy";
    }
}

/// Renders a single overlay annotation block.
///
/// Grid placement goes on the inline style; the anchor pair is exposed as
/// custom properties so the stylesheet decides how to pin the label within
/// its cell.
fn render_overlay(overlay: &OverlayAnnotation) -> Markup {
    let style = format!(
        "grid-column-start: {}; grid-row-start: {}; --anchor-x: {}; --anchor-y: {};",
        overlay.grid_x, overlay.grid_y, overlay.anchor_x, overlay.anchor_y
    );
    html! {
        div.overlay style=(style) {
            @if let Some(text) = &overlay.text {
                p { (text) }
            }
        }
    }
}

/// Render the page from a scan manifest and write it to `output_dir`.
///
/// Copies the configured stylesheet from the page root when it exists;
/// a missing stylesheet is not an error (the href still points at it).
pub fn write_site(manifest_path: &Path, root: &Path, output_dir: &Path) -> Result<(), RenderError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;

    let document = GalleryDocument {
        tiles: manifest.tiles,
        overlays: manifest.config.overlays.clone(),
    };
    let page = render_document(&document, &manifest.config);

    fs::create_dir_all(output_dir)?;
    fs::write(output_dir.join("index.html"), page.into_string())?;

    copy_tiles(root, output_dir, &document.tiles)?;

    let stylesheet_src = root.join(&manifest.config.stylesheet);
    if stylesheet_src.is_file() {
        let stylesheet_dst = output_dir.join(&manifest.config.stylesheet);
        if let Some(parent) = stylesheet_dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(&stylesheet_src, &stylesheet_dst)?;
    }

    Ok(())
}

/// Write the unavailable page to `output_dir`, replacing any stale index.
pub fn write_unavailable(config: &GalleryConfig, output_dir: &Path) -> Result<(), RenderError> {
    fs::create_dir_all(output_dir)?;
    fs::write(
        output_dir.join("index.html"),
        render_unavailable(config).into_string(),
    )?;
    Ok(())
}

/// Copy tile files into the output directory, preserving their
/// root-relative paths so the document's `src` attributes resolve.
fn copy_tiles(root: &Path, output_dir: &Path, tiles: &[TileEntry]) -> Result<(), RenderError> {
    for tile in tiles {
        let src = root.join(&tile.source_path);
        let dst = output_dir.join(&tile.source_path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        // Subdirectory entries still get an img tag but have no file to copy.
        if src.is_file() {
            fs::copy(&src, &dst)?;
        }
    }
    Ok(())
}
