//! Bankapp CLI - run banking scenarios from the command line
//!
//! Usage:
//! ```bash
//! bankapp demo
//! bankapp demo --bank-name "Other Bank" --format json
//! bankapp run scenarios/transfer.json -v
//! ```

use anyhow::{Context, Result};
use bankapp_dsl::{demonstration, run, Scenario};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

mod output;

/// Bankapp - in-memory accounts, deposits, withdrawals and transfers
#[derive(Parser)]
#[command(name = "bankapp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demonstration scenario
    Demo {
        /// Bank name to use instead of the default
        #[arg(long)]
        bank_name: Option<String>,
    },

    /// Run a scenario from a JSON file
    Run {
        /// Scenario file path
        path: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .init();

    let scenario = match &cli.command {
        Commands::Demo { bank_name } => match bank_name {
            Some(name) => demonstration().with_bank_name(name),
            None => demonstration(),
        },
        Commands::Run { path } => Scenario::from_json_file(path)
            .with_context(|| format!("Failed to load scenario {:?}", path))?,
    };

    let report = run(&scenario);

    let rendered = match cli.format {
        OutputFormat::Text => output::render_text(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&output::render_json(&report))
            .context("Failed to serialize report")?,
    };
    println!("{}", rendered);

    output::check_expectations(&report)
}
