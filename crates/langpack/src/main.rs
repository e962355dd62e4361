//! Main entry point for langpack.

use anyhow::{Context, Result};
use clap::Parser;
use langpack::{App, Cli};
use std::io;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app = App::from_cli(&cli).context("Failed to start langpack")?;
    let mut out = io::stdout().lock();
    app.run(&cli.command, &mut out).context("Command failed")?;

    Ok(())
}
