// src/cli/args.rs
use crate::ports::Tab;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved notes (optional, overrides config)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a summary and flashcards from text
    Generate {
        /// Title for the notes
        #[arg(short, long, value_name = "TITLE")]
        title: String,

        /// Text to process (reads stdin when neither --text nor --file is given)
        #[arg(long, value_name = "TEXT", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text to process from a file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Which part of the result to show
        #[arg(long, value_enum, default_value_t = Tab::Both)]
        tab: Tab,

        /// Output the note as JSON
        #[arg(long)]
        json: bool,

        /// Save the generated note
        #[arg(long)]
        save: bool,

        /// Export the generated note as PDF
        #[arg(long)]
        export: bool,
    },

    /// List saved notes with ID and title
    List {
        /// Optional search term to filter notes by title
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Show a saved note
    Show {
        /// Note ID to show
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Which part of the note to show
        #[arg(long, value_enum, default_value_t = Tab::Both)]
        tab: Tab,

        /// Output note as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a saved note
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },

    /// Export a saved note as PDF to smart-notes.pdf
    Export {
        /// Note ID to export
        #[arg(value_name = "NOTE_ID")]
        note_id: String,
    },
}
