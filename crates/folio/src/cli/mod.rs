//! # CLI Behavior
//!
//! One UI client for folio. The only place that knows about terminal I/O, exit codes and
//! output formatting.
//!
//! ## Naked Execution
//!
//! Running `folio` with no subcommand lists the projects of the selected backend.
//!
//! ## Backend Selection
//!
//! `--backend local|remote` picks the store for one invocation. Without the flag the
//! `backend` config key decides (default `local`).
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context setup and per-command handlers
//! - `render`: Output formatting (colors, list rows, card markup, JSON)
//! - `logging`: `tracing` subscriber setup

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
