use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaesarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown language: {0}. Must be \"en\" (English) or \"sp\" (Spanish)")]
    UnknownLanguage(String),

    #[error("Invalid level: {0:?}. Must be a number")]
    InvalidLevel(String),

    #[error("Level {level} out of range. Must be between {min} and {max}, including both")]
    LevelOutOfRange { level: i64, min: u32, max: u32 },

    #[error("No such file: {}", .0.display())]
    NoSuchFile(PathBuf),

    #[error("Not a regular file: {}", .0.display())]
    NotARegularFile(PathBuf),

    #[error("File is not valid UTF-8 text: {}", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Input ended before the question was answered")]
    PromptClosed,
}

pub type Result<T> = std::result::Result<T, CaesarError>;
