//! Confetti CLI
//!
//! - `confetti init [PATH]` writes a default confetti.toml
//! - `confetti preview` plays an explosion headlessly and prints one
//!   particle's transform per frame

mod config;
mod preview;
mod project;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use confetti::ScreenSize;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::preview::PreviewOptions;

#[derive(Parser, Debug)]
#[command(name = "confetti")]
#[command(about = "Scaffold and preview confetti explosions")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an explosion on a fixed frame clock and print the frames
    Preview(PreviewArgs),

    /// Write a default confetti.toml
    Init {
        /// Directory to write into
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Screen width the default origin is centred on
        #[arg(long, default_value = "390")]
        width: f32,
    },
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Config file or directory containing confetti.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the piece count
    #[arg(long)]
    count: Option<usize>,

    /// Override the RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Frames per second of the preview clock
    #[arg(long, default_value = "60")]
    fps: u32,

    /// Screen width
    #[arg(long, default_value = "390")]
    width: f32,

    /// Screen height
    #[arg(long, default_value = "844")]
    height: f32,

    /// Index of the piece to print
    #[arg(short, long, default_value = "0")]
    particle: usize,

    /// Print JSON lines instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Preview(args) => cmd_preview(args),
        Commands::Init { path, width } => cmd_init(path, width),
    }
}

fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let mut config = config::resolve(args.config.as_deref(), args.width)?;
    if let Some(count) = args.count {
        config.count = count;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let frames = preview::run(
        config,
        PreviewOptions {
            fps: args.fps,
            screen: ScreenSize::new(args.width, args.height),
            particle: args.particle,
        },
    )?;

    let mut out = io::stdout().lock();
    if args.json {
        preview::write_json(&mut out, &frames)
    } else {
        preview::write_table(&mut out, &frames)
    }
}

fn cmd_init(path: PathBuf, width: f32) -> Result<()> {
    let written = project::init_config(&path, width)?;
    tracing::info!("Created {}", written.display());
    Ok(())
}
