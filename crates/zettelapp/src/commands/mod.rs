//! # Command Layer
//!
//! This module contains the **core business logic** of zettel. Each command lives in
//! its own submodule and implements pure Rust functions that operate on data types.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Resolve the note a request is about (see [`helpers`])
//! - Run the identifier engine over the current [`NoteCollection`]
//! - Return structured [`CmdResult`] with notes, identifiers and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! Commands explicitly avoid:
//! - **Any terminal I/O**: No stdout, stderr, colours or layout
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Soft Failures
//!
//! Not finding an identifier is not an error. A note without an identifier, or an
//! allocation that runs out of attempts, yields a `CmdResult` with no
//! `allocated_id` and a warning message. The caller simply does not assign one.
//! `Err` is reserved for broken input (unknown note, ambiguous selector) and I/O.
//!
//! ## Command Modules
//!
//! - [`list`]: The annotated outline, optionally filtered
//! - [`next_id`]: Propose a sibling or child identifier for a note
//! - [`create`]: Create a new note with a freshly allocated identifier
//! - [`refresh`]: Rebuild and report rows whose split-level changed
//! - [`init`]: Mark a folder as a notes root
//! - [`helpers`]: Selector resolution

use crate::collection::AnnotatedNote;
use crate::error::Result;
use serde::Serialize;
use std::path::PathBuf;

pub mod create;
pub mod helpers;
pub mod init;
pub mod list;
pub mod next_id;
pub mod refresh;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    /// Notes to display, in outline order
    pub listed_notes: Vec<AnnotatedNote>,
    /// Notes the command was about (the source note, or the note just created)
    pub affected_notes: Vec<AnnotatedNote>,
    /// A freshly minted identifier, when one was found
    pub allocated_id: Option<String>,
    /// Paths produced by the command (created notes, rows to re-measure)
    pub note_paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_notes(mut self, notes: Vec<AnnotatedNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_affected_notes(mut self, notes: Vec<AnnotatedNote>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_note_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.note_paths = paths;
        self
    }

    /// Pretty-printed JSON for machine consumers.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::NoteCollection;
    use crate::model::NoteMeta;

    #[test]
    fn test_json_flattens_notes() {
        let collection = NoteCollection::annotate(vec![
            NoteMeta::new("a.md", "A").with_id("1"),
            NoteMeta::new("b.md", "B").with_id("1a"),
        ]);
        let mut result = CmdResult::default().with_listed_notes(collection.notes().to_vec());
        result.add_message(CmdMessage::info("hello"));

        let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(value["listed_notes"][1]["id"], "1a");
        assert_eq!(value["listed_notes"][1]["split_level"], 2);
        assert_eq!(value["listed_notes"][0]["split_level"], serde_json::Value::Null);
        assert_eq!(value["messages"][0]["level"], "info");
    }
}
