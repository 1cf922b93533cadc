//! Render a masked border overlay over an image from a JSON
//! configuration: banded zones along the edges, cutouts punched by the
//! configured strategy, a solid color composited through the result.

mod config;

use std::path::PathBuf;

use clap::Parser;
use config::FingerprintConfig;
use edgeprint_mask::render_masked_overlay;

/// Render a masked border overlay over an image from a JSON config.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Path to the JSON configuration file.
    config: PathBuf,

    /// Output image path (PNG recommended). Required unless --validate.
    #[arg(short, long, required_unless_present = "validate")]
    output: Option<PathBuf>,

    /// Override the input image path from the config.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Override the random seed from the config.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Check the configuration and exit without rendering.
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let resolved = FingerprintConfig::load(&args.config)?.resolve()?;

    if args.validate {
        println!("{} is valid", args.config.display());
        return Ok(());
    }

    let input = args.input.unwrap_or(resolved.input_image);
    let mut spec = resolved.spec;
    if args.seed.is_some() {
        spec.seed = args.seed;
    }

    let bytes = std::fs::read(&input)
        .map_err(|e| format!("failed to read input image {}: {e}", input.display()))?;
    let composited = render_masked_overlay(&bytes, &spec)?;

    // Clap guarantees an output path when not validating.
    let Some(output) = args.output else {
        return Err("--output is required when rendering".into());
    };
    composited.save(&output)?;
    println!("wrote {}", output.display());
    Ok(())
}
