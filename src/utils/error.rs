// src/utils/error.rs
#![allow(dead_code)]
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Unsupported document type: {0}")]
    UnsupportedFormat(String),

    #[error("File {path} is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { path: String, size: u64, limit: u64 },

    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("Failed to read DOCX: {0}")]
    Docx(String),

    #[error("No text could be extracted from {0}")]
    NoText(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
