/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pubweb_core::Config;
use pubweb_processor::io::{load_bibliography, load_config};
use pubweb_processor::{fragment_or_placeholder, inject_file, Processor, RenderMode};

#[derive(Parser, Debug)]
#[command(name = "pubweb", author, version)]
#[command(about = "Render a BibTeX bibliography into the publications section of a web page")]
struct Cli {
    /// Layout of the publication list
    #[arg(short, long, value_enum, default_value_t = Mode::Card)]
    mode: Mode,

    /// Only list works where the page owner is first or shared-first author
    #[arg(long)]
    selected: bool,

    /// Project root that default paths resolve against
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// BibTeX file (overrides the configured bibliography)
    #[arg(long)]
    bib: Option<PathBuf>,

    /// HTML document to update (overrides the configured document)
    #[arg(long)]
    html: Option<PathBuf>,

    /// Print the fragment instead of rewriting the document
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum Mode {
    Card,
    Citation,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Card => RenderMode::Card,
            Mode::Citation => RenderMode::Citation,
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "pubweb=debug,pubweb_processor=debug"
    } else {
        "pubweb=info,pubweb_processor=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Config::default(),
    };

    let bib_path = cli
        .bib
        .clone()
        .unwrap_or_else(|| cli.root.join(&config.bibliography));
    let html_path = cli
        .html
        .clone()
        .unwrap_or_else(|| cli.root.join(&config.document));

    if !bib_path.exists() {
        bail!("BibTeX file not found at {}", bib_path.display());
    }
    if !cli.stdout && !html_path.exists() {
        bail!("HTML file not found at {}", html_path.display());
    }

    let mode = RenderMode::from(cli.mode);
    info!(bibliography = %bib_path.display(), %mode, selected = cli.selected, "generating publications");

    let fragment = fragment_or_placeholder(
        load_bibliography(&bib_path)
            .and_then(|bib| Processor::new(bib, config).render(mode, cli.selected)),
    );

    if cli.stdout {
        println!("{}", fragment);
        return Ok(());
    }

    inject_file(&html_path, &fragment)
        .with_context(|| format!("failed to update {}", html_path.display()))?;
    Ok(())
}
