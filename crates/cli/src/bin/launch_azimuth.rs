use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use launch_azimuth_calculator::config::load_bodies;
use launch_azimuth_calculator::export::{Document, write_json};
use launch_azimuth_calculator::{Catalog, MissionParameters, compute, report};
use tracing::debug;

#[path = "launch_azimuth/logging.rs"]
mod logging;

/// Compute the launch azimuth and the delta-v credit from planetary rotation.
#[derive(Parser, Debug)]
#[command(
    author,
    version = launch_azimuth_calculator::version(),
    about = "Launch azimuth calculator for a rotating spherical body"
)]
struct Cli {
    /// Body to launch from (case-insensitive)
    #[arg(long, default_value = "Earth")]
    body: String,

    /// Extra body catalog: TOML file, YAML list, or directory of TOML files
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Target orbital inclination in degrees [default: 51.6]
    #[arg(long, allow_negative_numbers = true)]
    inc: Option<f64>,

    /// Target orbital altitude above mean surface in metres (defaults to catalog)
    #[arg(long, allow_negative_numbers = true)]
    alt: Option<f64>,

    /// Launch site latitude in degrees (defaults to catalog)
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Destination for JSON output (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// List catalog bodies and exit
    #[arg(long, default_value_t = false)]
    list_bodies: bool,

    /// Log pipeline stages to stderr (overridden by RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut catalog = Catalog::builtin();
    if let Some(path) = &cli.catalog {
        let configs = load_bodies(path)
            .with_context(|| format!("loading body catalog {}", path.display()))?;
        debug!(count = configs.len(), "loaded catalog entries");
        catalog.extend_from_configs(&configs)?;
    }

    if cli.list_bodies {
        for name in catalog.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let body = catalog.find(&cli.body)?;
    let params = MissionParameters::with_defaults(body, cli.inc, cli.alt, cli.lat);
    let result = compute(body, &params)?;

    match cli.format {
        Format::Text => report::write_text(&mut io::stdout().lock(), &result)?,
        Format::Json => {
            let document = Document {
                body: body.name(),
                inputs: &params,
                result: &result,
            };
            write_json(&cli.output, &document)
                .with_context(|| format!("writing {}", cli.output.display()))?;
        }
    }

    Ok(())
}
