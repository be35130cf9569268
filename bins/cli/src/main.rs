//! Quanta CLI
//!
//! Usage:
//! ```bash
//! quanta validate journal.json
//! quanta convert 10 0.4535924
//! quanta convert 4.5359 0.4535924 --inverse
//! quanta calc div 100.00 3 intermediate
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quanta_core::{Decimal, PolicyTable};
use quanta_shared::AppConfig;

mod commands;

use commands::CalcOp;

/// Quanta - exact decimal, money, ledger and unit conversion tools
#[derive(Parser)]
#[command(name = "quanta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a journal entry file and print its totals
    Validate {
        /// Path to a JSON journal entry (`{"lines": [...]}`)
        path: PathBuf,
    },

    /// Convert a quantity with a conversion factor (quantity policy)
    Convert {
        /// Quantity in the source unit
        #[arg(allow_hyphen_values = true)]
        quantity: Decimal,
        /// `1 source = factor target`
        factor: Decimal,
        /// Convert from the target unit back to the source unit
        #[arg(long)]
        inverse: bool,
    },

    /// Exact arithmetic on two decimals
    Calc {
        /// Operation
        op: CalcOp,
        /// Left operand
        #[arg(allow_hyphen_values = true)]
        a: Decimal,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        b: Decimal,
        /// Policy used by `div`
        #[arg(default_value = "standard")]
        policy: String,
    },
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let policies = PolicyTable::from_config(&config.precision)?;
    debug!(rounding = %config.precision.rounding, "Configuration loaded");

    let output = match Cli::parse().command {
        Commands::Validate { path } => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            info!(path = %path.display(), "Validating journal entry");
            commands::validate(&text)?
        }
        Commands::Convert {
            quantity,
            factor,
            inverse,
        } => commands::convert(&quantity, &factor, inverse, &policies)?,
        Commands::Calc { op, a, b, policy } => commands::calc(op, &a, &b, &policy, &policies)?,
    };

    println!("{output}");
    Ok(())
}
