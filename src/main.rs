//! Command-line front end for parsing and serializing links.

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pear_link::logging;
use pear_link::{Link, LinkConfig, PearLink};

/// Parse, serialize and normalize pear:// and file:// links.
#[derive(Debug, Parser)]
#[command(name = "pear-link")]
#[command(about = "Parse, serialize and normalize pear:// and file:// links", long_about = None)]
struct Cli {
    /// TOML file with an [aliases] table.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a link or path and print it as JSON.
    Parse {
        /// Link, file URL, or filesystem path.
        link: String,
    },

    /// Print the canonical address of a link given as JSON.
    Serialize {
        /// Link record as printed by `parse`.
        json: String,
    },

    /// Strip trailing separators from a link or path.
    Normalize {
        /// Link, origin, or filesystem path.
        link: String,
    },

    /// Print the origin of a link or path.
    Origin {
        /// Link, file URL, or filesystem path.
        link: String,
    },
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => LinkConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => LinkConfig::default(),
    };
    let links = PearLink::new(&config)?;

    match cli.command {
        Command::Parse { link } => {
            let parsed = links.parse(&link)?;
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        Command::Serialize { json } => {
            let link: Link = serde_json::from_str(&json).context("invalid link JSON")?;
            println!("{}", links.serialize(&link)?);
        }
        Command::Normalize { link } => {
            println!("{}", links.normalize(&link));
        }
        Command::Origin { link } => {
            println!("{}", links.parse(&link)?.origin);
        }
    }

    Ok(())
}

fn main() {
    logging::init_logging_stderr();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("pear-link error: {:#}", err);
        process::exit(1);
    }
}
