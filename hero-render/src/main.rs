//! # hero-render
//!
//! Render the landing-page hero to static HTML.
//!
//! ## Usage
//!
//! ```bash
//! # Full page with default copy
//! hero-render > hero.html
//!
//! # Overrides from a file, tweaked on the command line
//! hero-render --overrides hero.json --set title="Warehouse robots" --pattern grid -o hero.html
//!
//! # Fragment for embedding, already revealed
//! hero-render --fragment --revealed
//! ```
//!
//! Logs go to stderr; `RUST_LOG` wins over `--log-level`.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use hero_leptos::types::{BackgroundPattern, HeroOverrides};
use hero_leptos::{RenderOptions, render_hero, render_page};

#[derive(Parser, Debug)]
#[command(name = "hero-render")]
#[command(about = "Render the landing-page hero section to static HTML")]
#[command(version)]
struct Args {
    /// JSON file with hero overrides (camelCase keys)
    #[arg(long)]
    overrides: Option<PathBuf>,

    /// Override a single field, e.g. --set title=Robots (repeatable, applied after --overrides)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Background pattern (dots, grid, gradient); applied last
    #[arg(long)]
    pattern: Option<String>,

    /// Emit only the <section>, without the page shell
    #[arg(long)]
    fragment: bool,

    /// Render every block in its settled pose
    #[arg(long)]
    revealed: bool,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Combine file, `--set` pairs and `--pattern` into one overrides record.
fn collect_overrides(args: &Args) -> Result<HeroOverrides> {
    let mut overrides = match &args.overrides {
        Some(path) => HeroOverrides::from_file(path)
            .with_context(|| format!("loading overrides from {}", path.display()))?,
        None => HeroOverrides::default(),
    };

    if !args.set.is_empty() {
        let pairs = HeroOverrides::from_pairs(&args.set).context("parsing --set overrides")?;
        overrides = overrides.merge(pairs);
    }

    if let Some(pattern) = &args.pattern {
        let pattern: BackgroundPattern = pattern.parse().context("parsing --pattern")?;
        overrides.background_pattern = Some(pattern);
    }

    debug!(fields = overrides.len(), "collected overrides");
    Ok(overrides)
}

fn render(args: &Args, overrides: &HeroOverrides) -> String {
    let options = RenderOptions {
        revealed: args.revealed,
    };
    if args.fragment {
        render_hero(overrides, &options)
    } else {
        render_page(overrides, &options)
    }
}

fn run(args: Args) -> Result<()> {
    let overrides = collect_overrides(&args)?;
    let html = render(&args, &overrides);

    match &args.output {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "hero written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(html.as_bytes()).context("writing to stdout")?;
            stdout.write_all(b"\n").context("writing to stdout")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs to stderr, stdout carries the HTML
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[hero-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
