//! Service for card presentation operations.
//!
//! Wraps the shared [`CardPresentation`] so UI handlers and loader callbacks
//! go through one place.

use crate::state::{CardKey, CardPhase, CardPresentation};
use log::warn;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Service for managing the displayed card.
#[derive(Clone)]
pub struct CardService {
    card: Arc<Mutex<CardPresentation>>,
}

impl CardService {
    pub fn new(card: Arc<Mutex<CardPresentation>>) -> Self {
        Self { card }
    }

    fn lock(&self) -> MutexGuard<'_, CardPresentation> {
        self.card.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Presents `key`, or the empty placeholder when there is no card.
    pub fn present(&self, key: Option<CardKey>) -> CardPhase {
        let mut card = self.lock();
        match key {
            Some(key) => card.reset(key),
            None => card.clear(),
        }
        card.phase()
    }

    /// Applies a load-finished signal; `false` if it was stale.
    pub fn image_ready(&self, key: &CardKey) -> bool {
        self.lock().on_image_ready(key)
    }

    /// Finishes the load for `key`. A failed load clears the loading state
    /// exactly like a successful one; it is only logged.
    pub fn image_finished(&self, key: &CardKey, loaded: bool) -> bool {
        if !loaded {
            warn!("Card image {} failed to load; showing it empty", key.reference);
        }
        self.image_ready(key)
    }

    /// Reveals the current card if it is loaded and still hidden.
    pub fn reveal(&self) -> bool {
        self.lock().reveal()
    }

    pub fn phase(&self) -> CardPhase {
        self.lock().phase()
    }

    pub fn current_key(&self) -> Option<CardKey> {
        self.lock().key().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardSet, Catalog};
    use crate::services::SessionService;
    use crate::state::SessionState;

    fn services() -> (SessionService, CardService) {
        let catalog: &'static Catalog = Box::leak(Box::new(Catalog::from_sets([CardSet {
            name: "Animals".into(),
            images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
        }])));
        (
            SessionService::new(Arc::new(Mutex::new(SessionState::new())), catalog),
            CardService::new(Arc::new(Mutex::new(CardPresentation::new()))),
        )
    }

    #[test]
    fn animals_walkthrough() {
        let (session, cards) = services();

        let first = session.select_set("Animals").unwrap();
        assert_eq!(first.position, 0);
        assert_eq!(session.progress(), (0, 3));
        assert_eq!(cards.present(Some(first.clone())), CardPhase::Loading);

        // Clicking before the image is ready does nothing.
        assert!(!cards.reveal());
        assert_eq!(cards.phase(), CardPhase::Loading);

        assert!(cards.image_ready(&first));
        assert!(cards.reveal());
        assert_eq!(cards.phase(), CardPhase::Revealed);
        assert!(!cards.reveal());

        for _ in 0..3 {
            let next = session.advance();
            cards.present(next);
            assert_eq!(cards.phase(), CardPhase::Loading);
        }
        assert_eq!(session.progress().0, 0);
        assert_eq!(cards.current_key(), Some(first));
    }

    #[test]
    fn late_signal_after_next_is_ignored() {
        let (session, cards) = services();
        let first = session.select_set("Animals").unwrap();
        cards.present(Some(first.clone()));

        let second = session.advance().unwrap();
        cards.present(Some(second.clone()));

        assert!(!cards.image_ready(&first));
        assert_eq!(cards.phase(), CardPhase::Loading);
        assert!(cards.image_ready(&second));
        assert_eq!(cards.phase(), CardPhase::Hidden);
    }

    #[test]
    fn failed_load_finishes_like_success() {
        let (session, cards) = services();
        let first = session.select_set("Animals").unwrap();
        cards.present(Some(first.clone()));

        assert!(cards.image_finished(&first, false));
        assert_eq!(cards.phase(), CardPhase::Hidden);
        assert!(cards.reveal());
        assert_eq!(cards.phase(), CardPhase::Revealed);
    }

    #[test]
    fn failed_load_for_old_card_is_discarded() {
        let (session, cards) = services();
        let first = session.select_set("Animals").unwrap();
        cards.present(Some(first.clone()));
        let second = session.advance().unwrap();
        cards.present(Some(second.clone()));

        assert!(!cards.image_finished(&first, false));
        assert_eq!(cards.phase(), CardPhase::Loading);
        assert!(!cards.reveal());
        assert!(cards.image_finished(&second, true));
        assert_eq!(cards.phase(), CardPhase::Hidden);
    }

    #[test]
    fn unknown_set_shows_placeholder() {
        let (session, cards) = services();
        let key = session.select_set("Minerals");
        assert!(key.is_none());
        assert_eq!(cards.present(key), CardPhase::Empty);
        assert!(!cards.reveal());
        assert!(session.advance().is_none());
    }
}
