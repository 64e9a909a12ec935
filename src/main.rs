//! Recolor - generate colored variants of placeholder-filled SVG icons.

mod cli;
mod config;
mod logger;
mod recolor;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::RecolorConfig;
use recolor::Recolorer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = RecolorConfig::load(&cli.dir, cli.config.as_deref())
        .context("failed to load configuration")?;

    let report = Recolorer::new(config.rule, &cli.fill, cli.replacement)
        .dry_run(cli.dry_run)
        .run(&cli.dir)?;

    if report.is_empty() {
        log!("recolor"; "no matching files in {}", cli.dir.display());
        return Ok(());
    }
    if cli.dry_run {
        for entry in report.entries() {
            log!("dry-run"; "{} -> {}", entry.input, entry.output);
        }
    }
    log!("recolor"; "{}", report.summary());
    Ok(())
}
