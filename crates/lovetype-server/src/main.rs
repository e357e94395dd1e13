//! `lovetype` command-line entry point.
//!
//! - `serve`: run the HTTP API
//! - `classify <A> <B>`: print one classification as JSON
//! - `types`: list known type identifiers
//! - `health`: print dataset availability

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use lovetype_core::config::CliOverrides;
use lovetype_core::tracing::init_tracing;
use lovetype_core::{LovetypeConfig, LovetypeErrorCode};
use lovetype_server::AppState;

#[derive(Parser, Debug)]
#[command(name = "lovetype", version, about = "Pair compatibility classifier")]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./lovetype.toml when present)
    #[arg(long, global = true, env = "LOVETYPE_CONFIG")]
    config: Option<PathBuf>,

    /// Reference-data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Classify one pair and print the result as JSON
    Classify {
        type_a: String,
        type_b: String,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// List known type identifiers
    Types,
    /// Print dataset availability
    Health,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let (host, port) = match &self.command {
            Command::Serve { host, port } => (host.clone(), *port),
            _ => (None, None),
        };
        CliOverrides {
            data_dir: self.data_dir.clone(),
            host,
            port,
            json_logs: self.json_logs.then_some(true),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let root = std::env::current_dir().context("reading working directory")?;
    let config = LovetypeConfig::load(&root, cli.config.as_deref(), Some(&cli.overrides()))
        .map_err(|e| anyhow::anyhow!(e.coded_string()))?;
    init_tracing(&config.observability);

    match cli.command {
        Command::Serve { .. } => {
            lovetype_server::serve(&config).await?;
        }
        Command::Classify {
            type_a,
            type_b,
            pretty,
        } => {
            let state = AppState::open(config.data.effective_data_dir());
            match state.engine.classify_pair(&type_a, &type_b) {
                Ok(result) => {
                    let json = if pretty {
                        serde_json::to_string_pretty(&result)?
                    } else {
                        serde_json::to_string(&result)?
                    };
                    println!("{json}");
                }
                Err(e) => {
                    eprintln!("{}", e.coded_string());
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Types => {
            let state = AppState::open(config.data.effective_data_dir());
            for id in state.engine.list_known_type_identifiers() {
                println!("{id}");
            }
        }
        Command::Health => {
            let state = AppState::open(config.data.effective_data_dir());
            let report = state.store.describe_data_availability();
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
