use anyhow::{Context, Result};
use clap::Parser;
use site_assets::{asset_gen, Config};
use std::{path::PathBuf, process::ExitCode};
use tracing::Level;

#[derive(Debug, Parser)]
#[clap(
    name = "site-assets",
    about = "Generate the website hero mockup and feature icons"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// JSON config file (palette, glow, font, output directory).
    #[clap(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// TrueType font used for the hero text.
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Generate only these assets (hero, price, nopay, human, lock, bouncer).
    #[clap(long, value_delimiter = ',', value_name = "NAMES")]
    only: Option<Vec<String>>,

    /// Log drawing and file details to stderr.
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    println!("Generating website assets...");
    println!("{}", "-".repeat(40));

    match run(&args) {
        Ok(written) => {
            println!("{}", "-".repeat(40));
            println!("All assets generated successfully! ({} files)", written.len());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).context("Failed to load config")?,
        None => Config::default(),
    };
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if let Some(font) = &args.font {
        config.font = Some(font.clone());
    }

    asset_gen::generate_assets(&config, args.only.as_deref())
}
