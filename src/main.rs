use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tilewall::{config, output, render, scan};

/// Crate version, suffixed with the commit hash when built from a checkout.
/// The formatted string is leaked; this runs once at startup.
fn version_string() -> &'static str {
    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        Box::leak(format!("{} ({hash})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "tilewall")]
#[command(about = "Static page generator for image tile walls")]
#[command(long_about = "\
Static page generator for image tile walls

Your filesystem is the data source. Every file in the tiles directory
becomes one image tile; overlay labels come from config.toml.

Page structure:

  site/
  ├── config.toml                  # Gallery config (optional)
  ├── main.css                     # Stylesheet (opaque, copied to output)
  └── tiles/                       # One <img> per entry, sorted by name
      ├── lake.png
      └── sunset.jpg

Run 'tilewall gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Page root directory (contains config.toml and the tiles directory)
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".tilewall-temp", global = true)]
    temp_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the tiles directory into a manifest
    Scan,
    /// Produce the final HTML page from the manifest
    Render,
    /// Run the full pipeline: scan → render
    Build,
    /// Validate the page root without building
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            std::fs::create_dir_all(&cli.temp_dir)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(cli.temp_dir.join("manifest.json"), json)?;
            output::print_scan_output(&manifest);
        }
        Command::Render => {
            let manifest_path = cli.temp_dir.join("manifest.json");
            render::write_site(&manifest_path, &cli.source, &cli.output)?;
            let manifest: scan::Manifest =
                serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)?;
            output::print_render_output(&manifest);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = match scan::scan(&cli.source) {
                Ok(manifest) => manifest,
                Err(err @ scan::ScanError::DirectoryAccess { .. }) => {
                    // Write the unavailable page rather than leaving a
                    // stale or half-rendered index behind.
                    let config = config::load_config(&cli.source).unwrap_or_default();
                    render::write_unavailable(&config, &cli.output)?;
                    eprintln!("==> Gallery unavailable: {err}");
                    return Err(err.into());
                }
                Err(err) => return Err(err.into()),
            };
            std::fs::create_dir_all(&cli.temp_dir)?;
            let manifest_path = cli.temp_dir.join("manifest.json");
            let json = serde_json::to_string_pretty(&manifest)?;
            std::fs::write(&manifest_path, json)?;
            output::print_scan_output(&manifest);

            println!("==> Stage 2: Rendering → {}", cli.output.display());
            render::write_site(&manifest_path, &cli.source, &cli.output)?;
            output::print_render_output(&manifest);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
