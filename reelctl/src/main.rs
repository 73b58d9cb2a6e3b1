//! `reelctl`: run or check a reel carousel from the terminal.

use std::{fs::File, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use reelctl::{
    TerminalHost,
    host::MAX_VIEWPORT_WIDTH,
    cli::{Overrides, check_report, load_settings, run_headless},
    script,
    tui::{self, CrosstermEventSource, EventSource, ScriptEventSource},
};
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "reelctl", about = "Terminal host for the reel carousel")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the carousel full-screen, or replay a script
    Run {
        /// Settings file (TOML or JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Override the number of items
        #[arg(long)]
        items: Option<usize>,
        /// Lay items out right-to-left
        #[arg(long)]
        mirrored: bool,
        /// Viewport width in columns for scripted runs
        #[arg(long, default_value_t = 60.0, value_parser = parse_width)]
        width: f32,
        /// Event script to replay instead of reading the terminal
        #[arg(long)]
        script: Option<PathBuf>,
        /// Replay the script without a terminal and print the final state
        #[arg(long, requires = "script")]
        headless: bool,
        /// Write logs here; interactive runs discard them otherwise
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Validate settings and describe the resulting layout
    Check {
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long, default_value_t = 60.0, value_parser = parse_width)]
        width: f32,
    },
}

fn parse_width(raw: &str) -> Result<f32, String> {
    let width: f32 = raw.parse().map_err(|err| format!("{err}"))?;
    if width.is_finite() && (0.0..=MAX_VIEWPORT_WIDTH).contains(&width) {
        Ok(width)
    } else {
        Err(format!("width must be between 0 and {MAX_VIEWPORT_WIDTH}"))
    }
}

fn init_tracing(log_file: Option<&PathBuf>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| {
                format!("failed to create log file {}", path.display())
            })?;
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
        }
        // Anything on the terminal would tear the full-screen UI
        None if interactive => registry
            .with(fmt::layer().with_writer(std::io::sink))
            .init(),
        None => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            config,
            items,
            mirrored,
            width,
            script: script_path,
            headless,
            log_file,
        } => {
            init_tracing(log_file.as_ref(), !headless)?;
            let (mut settings, source) = load_settings(config.as_deref())?;
            Overrides { items, mirrored }.apply(&mut settings);
            tracing::info!(?source, "carousel settings loaded");

            let events = script_path
                .as_deref()
                .map(script::load)
                .transpose()?;

            if headless {
                let Some(events) = events else {
                    bail!("--headless needs --script");
                };
                let snapshot = run_headless(&settings, width, events)?;
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
                return Ok(());
            }

            let mut host = TerminalHost::new(&settings, width)?;
            let mut source: Box<dyn EventSource> = match events {
                Some(events) => Box::new(ScriptEventSource::new(events)),
                None => Box::new(CrosstermEventSource),
            };
            tui::run(&mut host, &mut *source)
        }
        Command::Check { config, width } => {
            init_tracing(None, false)?;
            let (settings, source) = load_settings(config.as_deref())?;
            println!("{}", check_report(&settings, &source, width)?);
            Ok(())
        }
    }
}
