//! Unified error types for the flashcard application.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error decoding an image
    ImageLoad(String),
    /// Error fetching a remote image reference
    ImageFetch(String),
    /// Error reading the catalog source
    CatalogRead(String),
    /// Malformed catalog file
    CatalogParse(String),
    /// Error scanning directory for image files
    DirectoryScan(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::ImageFetch(msg) => write!(f, "Image fetch error: {}", msg),
            AppError::CatalogRead(msg) => write!(f, "Catalog read error: {}", msg),
            AppError::CatalogParse(msg) => write!(f, "Catalog parse error: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "Directory scan error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::CatalogParse(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::ImageFetch(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
