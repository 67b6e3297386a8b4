// src/infrastructure/mod.rs
pub mod card_parser;
pub mod config;
pub mod huggingface;
pub mod key_value;
pub mod note_store;
pub mod renderer;

pub use config::Config;
pub use huggingface::HuggingFaceClient;
pub use key_value::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use note_store::LocalNoteRepository;
pub use renderer::PdfExporter;
