//! Application configuration constants.

use std::time::Duration;

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "webp"];

/// Catalog file looked up in the working directory when no argument is given.
pub const DEFAULT_CATALOG_FILE: &str = "flashcards.toml";

/// Number of decoded images kept in the LRU cache.
pub const IMAGE_CACHE_CAPACITY: usize = 16;

/// Timeout for fetching remote image references.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(20);
