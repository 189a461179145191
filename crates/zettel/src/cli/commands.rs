//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: Install the `tracing` subscriber
//! 3. **Context Setup**: Resolve the notes root and build the API
//! 4. **Dispatch**: Route each command to the API facade
//! 5. **Output Formatting**: Hand the `CmdResult` to `print`

use super::print::{print_allocated, print_messages, print_outline};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zettelapp::error::Result;
use zettelapp::init::initialize;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(&cwd, cli.root.clone())?;
    let use_toc_title = ctx.config.use_toc_title;
    debug!(root = %ctx.root.display(), notes = ctx.api.collection().len(), "context ready");

    match cli.command.unwrap_or(Commands::List {
        filter: None,
        json: false,
    }) {
        Commands::Init => {
            let result = ctx.api.init()?;
            print_messages(&result.messages);
        }
        Commands::List { filter, json } => {
            let result = ctx.api.list(filter.as_deref())?;
            if json {
                println!("{}", result.to_json()?);
            } else {
                print_outline(&result.listed_notes, use_toc_title);
                print_messages(&result.messages);
            }
        }
        Commands::Next { selector } => {
            let result = ctx.api.next_id(&selector, false)?;
            print_allocated(&result);
        }
        Commands::Child { selector } => {
            let result = ctx.api.next_id(&selector, true)?;
            print_allocated(&result);
        }
        Commands::New {
            selector,
            title,
            child,
        } => {
            let result = ctx.api.create_note(&selector, child, &title)?;
            print_messages(&result.messages);
            if !result.affected_notes.is_empty() {
                print_outline(&result.affected_notes, use_toc_title);
            }
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "zettelapp=debug,zettel=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
