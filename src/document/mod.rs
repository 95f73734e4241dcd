// src/document/mod.rs
pub mod models;
pub mod reader;

pub use reader::{load_document, DEFAULT_MAX_FILE_SIZE};
