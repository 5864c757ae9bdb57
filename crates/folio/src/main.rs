//! # Folio CLI
//!
//! The `folio` binary is a thin client of the `folioapp` library. This file only calls
//! `cli::run()` and turns an error into a message on stderr and exit status 1; parsing,
//! context setup, dispatch and terminal output live in `src/cli/`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/folio/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal output (render.rs), log setup (logging.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/folioapp/src/api.rs)                     │
//! │  - Picks the backend, dispatches to command modules         │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! Business rules are tested in `folioapp`. The CLI has unit tests for argument parsing
//! and output formatting, and end-to-end tests in `tests/` that run the built binary
//! against a temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
