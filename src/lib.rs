//! # Tilewall
//!
//! A minimal static page generator for directory-driven image tile walls.
//! Your filesystem is the data source: every file in the tiles directory
//! becomes one image tile, and a handful of grid-positioned text labels
//! come from static configuration.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! Tilewall processes content through two independent stages, with a JSON
//! manifest between them:
//!
//! ```text
//! 1. Scan      tiles/    →  manifest.json    (filesystem → tile entries)
//! 2. Render    manifest  →  dist/index.html  (final HTML page)
//! ```
//!
//! This separation exists for two reasons:
//!
//! - **Debuggability**: the manifest is human-readable JSON you can inspect.
//! - **Testability**: rendering is a pure function from manifest to markup,
//!   so tests can exercise it without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — enumerates the tiles directory into indexed tile entries |
//! | [`render`] | Stage 2 — renders the tile wall page from the manifest using Maud |
//! | [`config`] | `config.toml` loading and validation, including overlay labels |
//! | [`types`] | Shared types serialized between stages |
//! | [`output`] | CLI output formatting for pipeline results |
//!
//! # Design Decisions
//!
//! ## Deterministic Tile Order
//!
//! Directory enumeration order is filesystem-dependent, so the scanner
//! sorts entries lexicographically by file name. The same directory always
//! produces the same page, on any platform.
//!
//! ## Injected Directory Access
//!
//! Enumeration goes through the [`scan::DirReader`] trait instead of
//! ambient filesystem calls. The production implementation wraps
//! `fs::read_dir`; tests substitute an in-memory listing, including one
//! that yields the "." / ".." pseudo-entries to prove they never leak into
//! the page.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system: malformed markup is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Overlays Are Configuration, Not Content
//!
//! Overlay labels never come from the filesystem. They are `[[overlay]]`
//! tables in `config.toml`, immutable for the process lifetime, and share
//! the tile grid's coordinate space by convention only.

pub mod config;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;
