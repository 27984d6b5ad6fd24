//! Print a field from the toolchain services API response.
//!
//! Usage:
//!   toolchain-lookup sid
//!   toolchain-lookup ad-url
//!   toolchain-lookup 01234567-89ab-cdef-0123-456789abcdef
//!   toolchain-lookup --catalog services.json --tag pipeline sid
//!   toolchain-lookup -- --help      # a mode that collides with a flag
//!
//! Flags are only recognised before the mode; everything from the mode on
//! (or after `--`) is passed through untouched.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use toolchain_lookup::logging::init_logging;
use toolchain_lookup::{ACTIVE_DEPLOY_TAG, CatalogSource, evaluate_with};

#[derive(Parser, Debug)]
#[command(name = "toolchain-lookup", version)]
#[command(about = "Print a service field from the TC_API_RES services response")]
struct Cli {
    /// Read the services response from a file instead of TC_API_RES.
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Substring of `service_id` that marks the tagged service.
    #[arg(long, default_value = ACTIVE_DEPLOY_TAG)]
    tag: String,
    /// Mode: `sid`, `ad-url`, or a 36-character instance id to resolve to its name.
    /// Anything after the mode is ignored.
    #[arg(value_name = "MODE", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() {
    init_logging();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let source = match cli.catalog.as_deref() {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Environment,
    };
    let lines = evaluate_with(source, &cli.args, &cli.tag)?;

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}").context("writing lookup result")?;
    }
    stdout.flush().context("flushing stdout")?;
    Ok(())
}
