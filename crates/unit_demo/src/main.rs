//! Unit demonstration runner.
//!
//! # Usage
//!
//! ```bash
//! # List built-in scenarios
//! cargo run -p unit_demo -- list
//!
//! # Run a built-in scenario
//! cargo run -p unit_demo -- run defense
//!
//! # Run a RON scenario file and print the report as JSON
//! cargo run -p unit_demo -- --json script my_scenario.ron
//! ```
//!
//! Narration is logged to stderr; `--json` reports go to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use unit_core::scenario::{ScenarioData, ScenarioReport};
use unit_demo::{builtin, loader};

#[derive(Parser)]
#[command(name = "unit_demo")]
#[command(about = "Run combat unit demonstration scenarios")]
#[command(version)]
struct Cli {
    /// Enable debug logging (state changes as well as narration)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print the final report as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in scenarios
    List,
    /// Run a built-in scenario
    Run {
        /// Scenario name (see `list`)
        name: String,
    },
    /// Run a scenario from a RON file
    Script {
        /// Path to the scenario file
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Narration is info-level; RUST_LOG overrides the flag.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let scenario = match cli.command {
        Commands::List => {
            for (name, summary, _) in builtin::BUILTIN_SCENARIOS {
                println!("{name:<10} {summary}");
            }
            return;
        }
        Commands::Run { name } => match builtin::find(&name) {
            Some(Ok(scenario)) => scenario,
            Some(Err(e)) => {
                tracing::error!("Built-in scenario '{name}' is malformed: {e}");
                std::process::exit(1);
            }
            None => {
                let known: Vec<_> = builtin::names().collect();
                tracing::error!("Unknown scenario '{name}' (known: {})", known.join(", "));
                std::process::exit(1);
            }
        },
        Commands::Script { path } => match loader::load_scenario(&path) {
            Ok(scenario) => scenario,
            Err(e) => {
                tracing::error!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
    };

    let report = run(&scenario);
    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn run(scenario: &ScenarioData) -> ScenarioReport {
    tracing::info!("Running scenario: {}", scenario.name);
    match scenario.run() {
        Ok(report) => {
            tracing::info!(
                actions = report.narrations.len(),
                rejected = report.rejections(),
                "Scenario complete"
            );
            report
        }
        Err(e) => {
            tracing::error!("Scenario '{}' failed: {e}", scenario.name);
            std::process::exit(1);
        }
    }
}
