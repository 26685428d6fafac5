//! State management for the flashcard application.

use crate::config::IMAGE_CACHE_CAPACITY;
use crate::image_cache::ImageCache;
use std::sync::{Arc, Mutex};

pub mod card;
pub mod session;
pub mod shuffle;

pub use card::{CardPhase, CardPresentation};
pub use session::{CardKey, SessionState};

/// Application-wide state container.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<SessionState>>,
    /// Presentation state of the displayed card.
    pub card: Arc<Mutex<CardPresentation>>,
    /// LRU cache for decoded images, shared with loader threads.
    pub image_cache: Arc<Mutex<ImageCache>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Arc::new(Mutex::new(SessionState::new())),
            card: Arc::new(Mutex::new(CardPresentation::new())),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
