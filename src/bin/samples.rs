use anyhow::Result;
use clap::{Parser, Subcommand};
use orderly::order::OrderTrigger;
use orderly::samples;
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "samples")]
#[command(about = "Run one behavioral sample and print what it does")]
struct Cli {
    /// Emit diagnostics as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk the sample organisation with the org-tree cursor
    Iterator,
    /// Drive a purchase order through its lifecycle
    State {
        /// Trigger to fire, repeatable, e.g. --trigger RegisterOrder (defaults to the happy path)
        #[arg(long = "trigger", value_name = "TRIGGER")]
        triggers: Vec<OrderTrigger>,
        /// Print the accepted transitions as JSON afterwards
        #[arg(long)]
        history_json: bool,
    },
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Iterator => {
            samples::iterator::run(&mut out)?;
        }
        Commands::State {
            triggers,
            history_json,
        } => {
            let script = if triggers.is_empty() {
                samples::state::DEFAULT_SCRIPT.to_vec()
            } else {
                triggers
            };
            let order = samples::state::run(&mut out, &script)?;
            if history_json {
                writeln!(out, "{}", samples::state::history_json(&order)?)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
