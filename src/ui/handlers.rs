//! Event handlers for UI callbacks.
//!
//! Registers the Logic callbacks (select_set, next_card, reveal_card). All of
//! them run on the Slint event loop; image work is pushed to rayon by
//! [`show_card`].

use crate::catalog::Catalog;
use crate::services::{CardService, SessionService};
use crate::state::AppState;
use crate::ui::card_display::{reveal_card, show_card};
use slint::ComponentHandle;

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState, catalog: &'static Catalog) {
    let session = SessionService::new(state.session.clone(), catalog);
    let cards = CardService::new(state.card.clone());

    // Set selection handler; re-selecting the same set reshuffles too.
    ui.global::<crate::Logic>().on_select_set({
        let ui_handle = ui.as_weak();
        let session = session.clone();
        let cards = cards.clone();
        let cache = state.image_cache.clone();
        move |name| {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let key = session.select_set(name.as_str());
            ui.global::<crate::ViewState>().set_selected_set(name);
            show_card(&ui, key, &session, &cards, &cache);
        }
    });

    // Next card handler
    ui.global::<crate::Logic>().on_next_card({
        let ui_handle = ui.as_weak();
        let session = session.clone();
        let cards = cards.clone();
        let cache = state.image_cache.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let Some(key) = session.advance() else {
                return;
            };
            show_card(&ui, Some(key), &session, &cards, &cache);
        }
    });

    // Reveal handler
    ui.global::<crate::Logic>().on_reveal_card({
        let ui_handle = ui.as_weak();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                reveal_card(&ui, &cards);
            }
        }
    });
}
