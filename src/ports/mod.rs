// src/ports/mod.rs
pub mod terminal;

pub use terminal::{Tab, TextPresenter};
