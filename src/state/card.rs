//! Per-card presentation state: loading and revealed flags.

use crate::state::session::CardKey;
use log::debug;

/// What the card area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPhase {
    /// No card is displayed ("no cards" placeholder).
    Empty,
    /// Image still loading; reveal is inert.
    Loading,
    /// Loaded and obscured; reveal is allowed.
    Hidden,
    /// Fully shown.
    Revealed,
}

/// Transient state of the displayed card, keyed by its [`CardKey`].
#[derive(Debug, Default)]
pub struct CardPresentation {
    key: Option<CardKey>,
    loading: bool,
    revealed: bool,
}

impl CardPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts presenting `key`: loading, not revealed.
    ///
    /// Always resets, even when `key` equals the current one.
    pub fn reset(&mut self, key: CardKey) {
        debug!("Presenting card {:?}", key);
        self.key = Some(key);
        self.loading = true;
        self.revealed = false;
    }

    /// Drops the current card (no cards to show).
    pub fn clear(&mut self) {
        self.key = None;
        self.loading = false;
        self.revealed = false;
    }

    /// Marks the image for `key` as finished, whether it loaded or failed.
    ///
    /// Signals for any other key are stale and discarded. Returns whether
    /// the signal was applied.
    pub fn on_image_ready(&mut self, key: &CardKey) -> bool {
        if self.key.as_ref() != Some(key) {
            debug!("Discarding stale image signal for {:?}", key);
            return false;
        }
        self.loading = false;
        true
    }

    /// Reveals the card. Only has an effect from [`CardPhase::Hidden`].
    pub fn reveal(&mut self) -> bool {
        if self.phase() != CardPhase::Hidden {
            return false;
        }
        self.revealed = true;
        true
    }

    pub fn phase(&self) -> CardPhase {
        match (&self.key, self.loading, self.revealed) {
            (None, _, _) => CardPhase::Empty,
            (Some(_), true, _) => CardPhase::Loading,
            (Some(_), false, false) => CardPhase::Hidden,
            (Some(_), false, true) => CardPhase::Revealed,
        }
    }

    pub fn key(&self) -> Option<&CardKey> {
        self.key.as_ref()
    }
}
