use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use graph_explorer_cli::args::Cli;
use graph_explorer_cli::commands;
use graph_explorer_cli::config::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let settings = Settings::discover(cli.config.as_deref(), &cwd)?;
    init_tracing(&settings.log_level);

    let report = commands::run(&cli, &settings)?;
    let format = cli.format.unwrap_or(settings.format);
    let rendered = report.render(format).context("cannot render report")?;
    print!("{rendered}");
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// `RUST_LOG` wins over the configured level. Logs go to stderr.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
