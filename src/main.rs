//! slidedeck - Terminal Slide Presentation Viewer
//!
//! ## Usage
//!
//! ```bash
//! slidedeck <deck_file>
//! slidedeck --fancy --log talk.deck
//! ```
//!
//! ## Navigation
//!
//! - `Left/Right`: Previous/next slide
//! - Mouse: click the arrows or an indicator dot
//! - `f`: Toggle fullscreen
//! - `q` or `Esc`: Quit

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use slidedeck::controller::{run_app, AppOptions};
use slidedeck::deck::parse_deck_file;

/// Log filter used when `RUST_LOG` is unset; navigation traces are `debug!`.
const DEFAULT_LOG_FILTER: &str = "debug";

/// slidedeck - A terminal viewer for slide presentations
///
/// Slides are separated by `---` lines; the first `# ` line of a slide is its title.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Deck file to present
    file: PathBuf,

    /// Use Unicode arrows and dots instead of ASCII
    #[arg(long = "fancy")]
    fancy: bool,

    /// Never ask the terminal for fullscreen (F reports a failure instead)
    #[arg(long = "no-fullscreen")]
    no_fullscreen: bool,

    /// Write a debug-level log to a randomly named file in the temp directory
    #[arg(long = "log")]
    log: bool,

    /// Write the log to this file (implies --log)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Sets up file logging if requested and returns the log path.
///
/// The terminal belongs to the TUI, so logs never go to stderr.
/// The level comes from `RUST_LOG` and defaults to `debug`.
fn init_logging(args: &Args) -> Result<Option<PathBuf>> {
    let path = match (&args.log_file, args.log) {
        (Some(path), _) => path.clone(),
        (None, true) => std::env::temp_dir().join(format!(
            "slidedeck-{:08x}.log",
            rand::random::<u32>()
        )),
        (None, false) => return Ok(None),
    };

    let file = File::create(&path)
        .with_context(|| format!("Cannot create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(Some(path))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_path = init_logging(&args)?;

    let deck = parse_deck_file(&args.file)
        .with_context(|| format!("Cannot load deck {}", args.file.display()))?;
    info!("loaded {} slides from {}", deck.len(), args.file.display());

    let options = AppOptions {
        fancy: args.fancy,
        allow_fullscreen: !args.no_fullscreen,
    };
    run_app(deck, options)?;

    if let Some(path) = log_path {
        eprintln!("Log written to {}", path.display());
    }

    Ok(())
}
