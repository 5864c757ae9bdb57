//! # Folio Architecture
//!
//! Folio manages the project items shown on a portfolio page: short cards with a title,
//! an image, a description and a link. It is a **UI-agnostic library**; the `folio` binary
//! is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (folio crate)                                          │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Picks the backend per call, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - validate → read → mutate → write                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Backend trait: LocalStore (key/value), RemoteStore (HTTP)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing exits the process.
//! Diagnostics go through `tracing`; the binary decides whether to show them.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: create, update, delete, list, render
//! - [`store`]: The `Backend` trait, local and remote backends, their substrates
//! - [`model`]: `Item`, `BackendKind`, sample projects
//! - [`codec`]: Form input → `Item`, validation, index parsing
//! - [`index`]: Positional and id selectors
//! - [`card`]: `<project-card>` attribute mapping
//! - [`secret`]: Remote master key resolution
//! - [`config`]: `folio.toml` and environment settings
//! - [`init`]: Builds a ready-to-use context
//! - [`error`]: Error types

pub mod api;
pub mod card;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod secret;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
