// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use application::{NoteDeleter, NoteGenerator, NoteLister, NoteSaver, NoteViewer};
use domain::{DomainError, Note};
use infrastructure::{Config, FileKeyValueStore, HuggingFaceClient, LocalNoteRepository, PdfExporter};
use ports::{Tab, TextPresenter};
use tracing::{debug, info, warn};

use crate::cli::args::{Args, Command};

const GENERATE_FAILED: &str = "Failed to process text. Please try again.";
const SAVE_FAILED: &str = "Failed to save notes";
const DELETE_FAILED: &str = "Failed to delete notes";
const EXPORT_FAILED: &str = "Failed to export PDF";

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting smartnotes with arguments");

    let config = load_config(args.config.as_deref())?;
    let notes_dir = store_dir(&config, args.store)?;
    debug!(?notes_dir, "Using note store");
    let repository = LocalNoteRepository::new(FileKeyValueStore::new(&notes_dir));
    let presenter = TextPresenter::new();

    match args.command {
        Command::Generate {
            title,
            text,
            file,
            tab,
            json,
            save,
            export,
        } => {
            let input = read_input(text, file.as_deref())?;
            let client = HuggingFaceClient::with_endpoint(
                resolve_api_key(&config),
                config.inference.endpoint.clone(),
            );

            info!(%title, "Generating notes");
            let note = notify(
                NoteGenerator::new(client).generate_note(&title, &input).await,
                GENERATE_FAILED,
            )?;
            eprintln!("Notes generated successfully!");
            print_note(&presenter, &note, tab, json)?;

            if save {
                let saved = notify(NoteSaver::new(repository).save_note(&note), SAVE_FAILED)?;
                eprintln!(
                    "Notes saved successfully! (id {})",
                    saved.id.as_deref().unwrap_or_default()
                );
            }
            if export {
                export_note(&note)?;
            }
        }
        Command::List { search } => {
            let notes = NoteLister::new(repository).list_notes(search.as_deref());
            print!("{}", presenter.render_list(&notes));
        }
        Command::Show { note_id, tab, json } => {
            let note = notify(NoteViewer::new(repository).view_note(&note_id), "Failed to load notes")?;
            print_note(&presenter, &note, tab, json)?;
        }
        Command::Delete { note_id } => {
            notify(NoteDeleter::new(repository).delete_note(&note_id), DELETE_FAILED)?;
            eprintln!("Notes deleted successfully!");
        }
        Command::Export { note_id } => {
            let note = notify(NoteViewer::new(repository).view_note(&note_id), EXPORT_FAILED)?;
            export_note(&note)?;
        }
    }

    Ok(())
}

/// Turn a domain failure into a short notice for the user. The detail is
/// logged as a warning.
pub fn notify<T>(result: Result<T, DomainError>, failure: &str) -> Result<T> {
    result.map_err(|err| {
        warn!(error = %err, "{failure}");
        if err.is_user_error() {
            anyhow!(err.to_string())
        } else {
            anyhow!(failure.to_string())
        }
    })
}

fn export_note(note: &Note) -> Result<()> {
    let path = notify(
        PdfExporter::in_current_dir().and_then(|exporter| exporter.export(note)),
        EXPORT_FAILED,
    )?;
    eprintln!("PDF exported successfully! ({})", path.display());
    Ok(())
}

fn print_note(presenter: &TextPresenter, note: &Note, tab: Tab, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(note).context("Failed to serialize note")?;
        println!("{out}");
    } else {
        print!("{}", presenter.render(note, tab));
    }
    Ok(())
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            debug!(?path, "Loading provided config");
            Config::load(path).with_context(|| format!("Invalid config file {}", path.display()))
        }
        None => {
            let path = Config::default_path()?;
            debug!(?path, "Loading default config");
            Config::load_or_default(&path)
                .with_context(|| format!("Invalid config file {}", path.display()))
        }
    }
}

fn resolve_api_key(config: &Config) -> String {
    config.api_key().unwrap_or_else(|| {
        warn!(
            "{} is not set and no api_key is configured, inference requests will likely be rejected",
            constants::API_KEY_ENV
        );
        String::new()
    })
}

/// Text to process: `--text`, else `--file`, else stdin.
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

/// Directory the note collection would be read from for the given overrides.
pub fn store_dir(config: &Config, store: Option<PathBuf>) -> Result<PathBuf> {
    match store {
        Some(dir) => Ok(dir),
        None => config.storage_dir(),
    }
}
