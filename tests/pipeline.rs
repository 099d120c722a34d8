//! End-to-end pipeline tests: scan a real directory, serialize the manifest
//! the way the CLI does, and render the final page from it.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use tilewall::{config, render, scan};

/// Build a page root with a tiles directory, a stylesheet, and a config
/// carrying one overlay label.
fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let tiles = tmp.path().join("tiles");
    fs::create_dir_all(&tiles).unwrap();
    fs::write(tiles.join("sunset.jpg"), "fake image").unwrap();
    fs::write(tiles.join("lake.png"), "fake image").unwrap();
    fs::write(tmp.path().join("main.css"), "body { margin: 0 }").unwrap();
    fs::write(
        tmp.path().join("config.toml"),
        r#"
[[overlay]]
grid_x = 8
grid_y = 1
anchor_x = 1
anchor_y = 1
text = "Label"
"#,
    )
    .unwrap();
    tmp
}

/// Run scan → manifest.json → write_site, mirroring the `build` command.
fn build(root: &Path, out: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = scan::scan(root)?;
    let manifest_path = root.join("manifest.json");
    fs::write(&manifest_path, serde_json::to_string_pretty(&manifest)?)?;
    render::write_site(&manifest_path, root, out)?;
    Ok(())
}

#[test]
fn full_pipeline_produces_expected_page() {
    let site = setup_site();
    let out = TempDir::new().unwrap();

    build(site.path(), out.path()).unwrap();

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();

    // Two tiles, indexed contiguously, sorted by name (lake before sunset)
    assert_eq!(html.matches("<img").count(), 2);
    assert!(html.contains(r#"id="tile-0" src="tiles/lake.png""#));
    assert!(html.contains(r#"id="tile-1" src="tiles/sunset.jpg""#));

    // One overlay block containing the label
    assert_eq!(html.matches(r#"class="overlay""#).count(), 1);
    assert!(html.contains("Label"));
    assert!(html.contains("grid-column-start: 8"));

    // Stylesheet referenced and copied
    assert!(html.contains(r#"href="main.css""#));
    assert!(out.path().join("main.css").is_file());

    // Tile files copied under their root-relative paths
    assert!(out.path().join("tiles/sunset.jpg").is_file());
    assert!(out.path().join("tiles/lake.png").is_file());
}

#[test]
fn manifest_round_trips_through_json() {
    let site = setup_site();

    let manifest = scan::scan(site.path()).unwrap();
    let json = serde_json::to_string_pretty(&manifest).unwrap();
    let parsed: scan::Manifest = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.tiles, manifest.tiles);
    assert_eq!(parsed.config.overlays, manifest.config.overlays);
}

#[test]
fn empty_tiles_directory_builds_empty_page() {
    let site = TempDir::new().unwrap();
    fs::create_dir_all(site.path().join("tiles")).unwrap();
    let out = TempDir::new().unwrap();

    build(site.path(), out.path()).unwrap();

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert_eq!(html.matches("<img").count(), 0);
    assert!(html.contains("<title>Tiles</title>"));
}

#[test]
fn missing_tiles_directory_yields_unavailable_page() {
    let site = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let err = scan::scan(site.path()).unwrap_err();
    assert!(matches!(err, scan::ScanError::DirectoryAccess { .. }));

    // The build command's fallback: write the unavailable page instead.
    let config = config::load_config(site.path()).unwrap_or_default();
    render::write_unavailable(&config, out.path()).unwrap();

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains("Gallery unavailable"));
    assert!(!html.contains("<img"));
}

#[test]
fn stylesheet_in_subdirectory_is_copied() {
    let site = TempDir::new().unwrap();
    fs::create_dir_all(site.path().join("tiles")).unwrap();
    fs::create_dir_all(site.path().join("css")).unwrap();
    fs::write(site.path().join("css/main.css"), "body { margin: 0 }").unwrap();
    fs::write(
        site.path().join("config.toml"),
        r#"stylesheet = "css/main.css""#,
    )
    .unwrap();
    let out = TempDir::new().unwrap();

    build(site.path(), out.path()).unwrap();

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains(r#"href="css/main.css""#));
    assert!(out.path().join("css/main.css").is_file());
}

#[test]
fn rebuild_after_adding_a_tile_reindexes_contiguously() {
    let site = setup_site();
    let out = TempDir::new().unwrap();

    build(site.path(), out.path()).unwrap();
    fs::write(site.path().join("tiles/alps.jpg"), "fake image").unwrap();
    build(site.path(), out.path()).unwrap();

    let html = fs::read_to_string(out.path().join("index.html")).unwrap();
    assert!(html.contains(r#"id="tile-0" src="tiles/alps.jpg""#));
    assert!(html.contains(r#"id="tile-1" src="tiles/lake.png""#));
    assert!(html.contains(r#"id="tile-2" src="tiles/sunset.jpg""#));
}
