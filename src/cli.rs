use crate::error::MeasureError;
use crate::types::{ImageFormat, Measurement};
use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calipers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print image dimensions by reading only the file header", long_about = None)]
pub struct Cli {
    /// Image files to measure
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Print one JSON object per file
    #[arg(short, long)]
    pub json: bool,

    /// Enable debug output (-vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn default_directive(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "calipers=debug",
            _ => "calipers=trace",
        }
    }
}

/// Installs a stderr fmt subscriber. `RUST_LOG` wins over `-v` when set.
pub fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_directive()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    path: &'a Path,
    format: ImageFormat,
    width: u32,
    height: u32,
}

/// Renders a successful measurement for stdout.
pub fn render(path: &Path, measurement: &Measurement, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(&JsonLine {
            path,
            format: measurement.format,
            width: measurement.width,
            height: measurement.height,
        })
    } else {
        Ok(format!("{}: {}", path.display(), measurement))
    }
}

/// Renders a failure for stderr.
pub fn render_error(path: &Path, err: &MeasureError) -> String {
    format!("{}: {}", path.display(), err)
}
