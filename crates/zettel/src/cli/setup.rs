use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "zettel", bin_name = "zettel", version, disable_help_subcommand = true)]
#[command(about = "Outline-numbered notes: list the outline, mint sibling and child identifiers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes root (defaults to the nearest folder holding .zettel)
    #[arg(long, global = true, env = "ZETTEL_ROOT", help_heading = "Options")]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Mark the current folder (or --root) as a notes root
    Init,

    /// Show the outline
    #[command(alias = "ls")]
    List {
        /// Only notes whose title or identifier contains this text
        filter: Option<String>,

        /// Print JSON instead of the outline
        #[arg(long)]
        json: bool,
    },

    /// Propose the next sibling identifier for a note
    Next {
        /// Path, identifier or title of the note
        selector: String,
    },

    /// Propose the first free child identifier for a note
    Child {
        /// Path, identifier or title of the note
        selector: String,
    },

    /// Create a note after (or below) another one
    #[command(alias = "n")]
    New {
        /// Path, identifier or title of the note to start from
        selector: String,

        /// Title (and file name) of the new note
        title: String,

        /// Create a child instead of a sibling
        #[arg(short, long)]
        child: bool,
    },
}
