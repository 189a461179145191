//! # Zettel Architecture
//!
//! Zettel keeps a folder of notes in outline order using hierarchical identifiers
//! (`1`, `1a`, `1a1`, `1b`, `2`...). It is a library that happens to have a CLI client.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (zettel crate)                                   │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the current snapshot     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over a NoteCollection                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FolderStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Identifier Engine
//!
//! Underneath the layers sits a small set of pure functions over identifier strings.
//! They never fail and never touch I/O:
//!
//! - [`segment`]: split an identifier into digit, letter and other runs
//! - [`increment`]: carry-propagating successor of a single run
//! - [`id`]: next sibling, first child, nesting level
//! - [`order`]: outline comparator and split-level
//! - [`alloc`]: find a free identifier with a bounded number of attempts
//! - [`collection`]: sorted, annotated snapshot of all notes
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data type ([`model::NoteMeta`])
//! - [`frontmatter`]: Reading identifiers from note files
//! - [`config`]: Configuration management
//! - [`init`]: Notes root discovery and wiring
//! - [`error`]: Error types

pub mod alloc;
pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod id;
pub mod increment;
pub mod init;
pub mod model;
pub mod order;
pub mod segment;
pub mod store;
