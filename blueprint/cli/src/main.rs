//! Blueprint CLI
//!
//! Checks API definition documents for duplicate endpoints and prints the
//! CRUD definitions generated for a resource.
//!
//! ## Usage
//!
//! ```bash
//! # Check a JSON array of endpoints
//! blueprint check api.json
//!
//! # Print the six CRUD endpoints for a resource
//! blueprint crud user --schema user.schema.json
//!
//! # More logging (RUST_LOG overrides)
//! blueprint -vv check api.json
//! ```

mod errors;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blueprint_define::{Endpoint, Schema, as_api, generate_crud};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::errors::CliError;

/// Blueprint - declarative REST API contracts
#[derive(Parser, Debug)]
#[command(name = "blueprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a JSON array of endpoints for duplicate method and path pairs
    Check {
        /// Path to the API definition document
        file: PathBuf,
    },
    /// Print the CRUD endpoints generated for a resource as JSON
    Crud {
        /// Singular resource name (e.g. "user")
        resource: String,

        /// Path to a JSON schema document for the resource
        #[arg(short, long)]
        schema: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "✗".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Check { file } => {
            let endpoints: Vec<Endpoint> = read_json(&file)?;
            debug!(path = %file.display(), endpoints = endpoints.len(), "loaded API definition");

            let api = as_api(endpoints)?;
            for endpoint in &api {
                info!(
                    alias = endpoint.alias.as_deref().unwrap_or("-"),
                    "{}",
                    endpoint.key()
                );
            }
            println!(
                "{} {} endpoints, no duplicates",
                "✓".green().bold(),
                api.len()
            );
        }
        Command::Crud { resource, schema } => {
            let schema: Schema = read_json(&schema)?;
            let api = generate_crud(&resource, schema)?;
            let output = serde_json::to_string_pretty(&api).map_err(CliError::Serialize)?;
            println!("{output}");
        }
    }
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins; otherwise -v flags raise the level from the WARN default
    let filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
        .to_string(),
    };

    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .compact()
        .init();
}
