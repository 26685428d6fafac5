//! Service for session operations: set selection and advancing.
//!
//! Couples the shared [`SessionState`] with the installed catalog and the
//! thread-local random source.

use crate::catalog::Catalog;
use crate::state::{CardKey, SessionState};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Service for managing the card session.
#[derive(Clone)]
pub struct SessionService {
    session: Arc<Mutex<SessionState>>,
    catalog: &'static Catalog,
}

impl SessionService {
    pub fn new(session: Arc<Mutex<SessionState>>, catalog: &'static Catalog) -> Self {
        Self { session, catalog }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Selects a set with a fresh shuffle and returns its first card.
    pub fn select_set(&self, name: &str) -> Option<CardKey> {
        let mut session = self.lock();
        session.select_set(name, self.catalog, &mut rand::thread_rng());
        session.current()
    }

    /// Selects the first catalog set, if the catalog has any.
    pub fn select_first_set(&self) -> Option<CardKey> {
        let name = self.catalog.first_set_name()?;
        self.select_set(name)
    }

    /// Advances to the next card and returns it.
    pub fn advance(&self) -> Option<CardKey> {
        self.lock().advance()
    }

    pub fn peek_next(&self) -> Option<String> {
        self.lock().peek_next()
    }

    pub fn progress(&self) -> (usize, usize) {
        self.lock().progress()
    }

    pub fn selected_set(&self) -> Option<String> {
        self.lock().selected_set().map(str::to_string)
    }

    /// Names of all sets in catalog order.
    pub fn set_names(&self) -> Vec<String> {
        self.catalog.names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardSet;

    fn service(sets: Vec<CardSet>) -> SessionService {
        let catalog: &'static Catalog = Box::leak(Box::new(Catalog::from_sets(sets)));
        SessionService::new(Arc::new(Mutex::new(SessionState::new())), catalog)
    }

    fn animals() -> CardSet {
        CardSet {
            name: "Animals".into(),
            images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
        }
    }

    #[test]
    fn first_set_is_selected_at_startup() {
        let svc = service(vec![
            animals(),
            CardSet {
                name: "Plants".into(),
                images: vec!["fern.png".into()],
            },
        ]);
        let card = svc.select_first_set().unwrap();
        assert_eq!(card.set_name, "Animals");
        assert_eq!(svc.selected_set().as_deref(), Some("Animals"));
        assert_eq!(svc.set_names(), vec!["Animals", "Plants"]);
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        let svc = service(vec![]);
        assert!(svc.select_first_set().is_none());
        assert_eq!(svc.selected_set(), None);
        assert_eq!(svc.progress(), (0, 0));
    }

    #[test]
    fn three_advances_return_to_start() {
        let svc = service(vec![animals()]);
        let first = svc.select_set("Animals").unwrap();
        assert_eq!(svc.advance().unwrap().position, 1);
        assert_eq!(svc.advance().unwrap().position, 2);
        assert_eq!(svc.advance(), Some(first));
    }
}
