//! # CLI Behavior
//!
//! This is **one possible UI client** for zettel, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! For the overall architecture, see the crate-level documentation in [`crate`].
//!
//! ## Naked Execution (`zettel`)
//!
//! Running `zettel` with no arguments defaults to `zettel list`.
//!
//! ## Selectors
//!
//! Commands that act on a note (`next`, `child`, `new`) accept a path relative to the
//! notes root, an identifier or a title, tried in that order.
//!
//! ## Logging
//!
//! Diagnostics go to stderr through `tracing`. The default level is `warn`;
//! `--verbose` turns on debug output for both crates and `RUST_LOG` overrides both.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and dispatch
//! - `print`: output formatting (outline, messages)
//! - `setup`: argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::run;
