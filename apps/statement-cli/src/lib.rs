//! # Theater Statement Printer
//!
//! Application layer over `theater-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main.rs ──► init_tracing                                               │
//! │     │                                                                   │
//! │     ├──► StatementConfig::load  (defaults → TOML → THEATER_* env)       │
//! │     │                                                                   │
//! │     └──► StatementPrinter::print ──► theater_core::build + render       │
//! │                                            │                            │
//! │                                            ▼                            │
//! │                                         stdout                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! - `--config <path>` / `THEATER_CONFIG` - statement.toml location
//! - `THEATER_<RULE>` - override a single pricing rule (e.g. `THEATER_COMEDY_PER_ATTENDEE`)
//! - `RUST_LOG` - log filter (logs go to stderr)

pub mod config;
pub mod error;
pub mod printer;
pub mod sample;

pub use config::StatementConfig;
pub use error::{AppError, AppResult};
pub use printer::StatementPrinter;
