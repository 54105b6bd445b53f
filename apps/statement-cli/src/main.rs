//! # Statement
//!
//! Prints the statement for the built-in BigCo sample invoice.
//!
//! ## Usage
//! ```bash
//! cargo run -p theater-statement --bin statement
//!
//! # Custom pricing rules
//! cargo run -p theater-statement --bin statement -- --config ./statement.toml
//!
//! # Single override, with debug logs on stderr
//! THEATER_COMEDY_PER_ATTENDEE=250 RUST_LOG=debug cargo run -p theater-statement
//! ```

use std::env;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use theater_statement::sample::{bigco_invoice, shakespeare_catalog};
use theater_statement::{StatementConfig, StatementPrinter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = StatementConfig::load(config_path_from_args())?;
    info!(rules = ?config.pricing, "Configuration loaded");

    let printer = StatementPrinter::new(config.pricing);
    let statement = printer.print(&bigco_invoice(), &shakespeare_catalog())?;

    print!("{statement}");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// - `RUST_LOG=debug` - Show debug logs
/// - Default: INFO, DEBUG for theater crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,theater_statement=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads `--config <path>` from the command line.
fn config_path_from_args() -> Option<PathBuf> {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}
