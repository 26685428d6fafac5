//! Session state: the selected card set, its shuffled order and the position.

use crate::catalog::Catalog;
use crate::state::shuffle::shuffled;
use log::{debug, info, warn};
use rand::Rng;

/// Identity of one displayed card instance.
///
/// Includes the position so the same reference shown twice in a row still
/// counts as a different card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardKey {
    pub set_name: String,
    pub position: usize,
    pub reference: String,
}

/// Session lifecycle.
#[derive(Debug, Default)]
pub enum SessionState {
    /// No set has been selected yet.
    #[default]
    Uninitialized,
    /// A set is active. `position < order.len()` whenever `order` is non-empty.
    Loaded {
        set_name: String,
        order: Vec<String>,
        position: usize,
    },
}

impl SessionState {
    /// Creates a new uninitialized session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a set by name, reshuffling it and resetting the position.
    ///
    /// An unknown name yields an empty order, i.e. the "no cards" state.
    pub fn select_set<R: Rng + ?Sized>(&mut self, name: &str, catalog: &Catalog, rng: &mut R) {
        let order = match catalog.images(name) {
            Some(images) => shuffled(images, rng),
            None => {
                warn!("Unknown card set {:?}; no cards to show", name);
                Vec::new()
            }
        };
        info!("Selected card set {:?} ({} cards)", name, order.len());

        *self = SessionState::Loaded {
            set_name: name.to_string(),
            order,
            position: 0,
        };
    }

    /// Moves to the next card, wrapping to the start. Returns the new card.
    pub fn advance(&mut self) -> Option<CardKey> {
        match self {
            SessionState::Loaded {
                order, position, ..
            } if !order.is_empty() => {
                *position = if *position + 1 >= order.len() {
                    0
                } else {
                    *position + 1
                };
                debug!("Advanced to position {}/{}", *position, order.len());
            }
            _ => {
                debug!("Advance ignored: no cards");
                return None;
            }
        }
        self.current()
    }

    /// The card at the current position, if there is one.
    pub fn current(&self) -> Option<CardKey> {
        match self {
            SessionState::Loaded {
                set_name,
                order,
                position,
            } => order.get(*position).map(|reference| CardKey {
                set_name: set_name.clone(),
                position: *position,
                reference: reference.clone(),
            }),
            SessionState::Uninitialized => None,
        }
    }

    /// The reference after the current one, for preloading.
    pub fn peek_next(&self) -> Option<String> {
        match self {
            SessionState::Loaded {
                order, position, ..
            } if order.len() > 1 => Some(order[(*position + 1) % order.len()].clone()),
            _ => None,
        }
    }

    /// `(position, total)` for the progress label; `(0, 0)` when empty.
    pub fn progress(&self) -> (usize, usize) {
        match self {
            SessionState::Loaded {
                order, position, ..
            } => (*position, order.len()),
            SessionState::Uninitialized => (0, 0),
        }
    }

    /// Name of the active set.
    pub fn selected_set(&self) -> Option<&str> {
        match self {
            SessionState::Loaded { set_name, .. } => Some(set_name),
            SessionState::Uninitialized => None,
        }
    }

    /// The shuffled order of the active set.
    #[cfg(test)]
    pub fn order(&self) -> &[String] {
        match self {
            SessionState::Loaded { order, .. } => order,
            SessionState::Uninitialized => &[],
        }
    }
}
