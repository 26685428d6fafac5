//! Card presentation and image loading.
//!
//! Uses `rayon::spawn` for fetching and decoding, then
//! `slint::invoke_from_event_loop` to hand the result back to the UI thread.
//! Each reference has at most one load in flight, shared by the displayed
//! card and the next-card preload. A finished load is applied only to a
//! displayed card showing that reference; otherwise it just fills the cache.

use crate::error::Result;
use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::services::{CardService, SessionService};
use crate::state::CardKey;
use crate::ui::{set_card_phase, set_card_view, set_progress};
use log::debug;
use std::sync::{Arc, Mutex};

/// Presents `key` (or the empty placeholder) and starts loading its image.
pub fn show_card(
    ui: &crate::AppWindow,
    key: Option<CardKey>,
    session: &SessionService,
    cards: &CardService,
    cache: &Arc<Mutex<ImageCache>>,
) {
    let phase = cards.present(key.clone());
    set_card_view(ui, phase, slint::Image::default());
    set_progress(ui, session.progress());

    let Some(key) = key else {
        return;
    };

    let ui_handle = slint::ComponentHandle::as_weak(ui);
    load_card_image(ui, key, cards, cache);
    if let Some(next) = session.peek_next() {
        start_load(ui_handle, next, cards.clone(), cache.clone());
    }
}

/// Reveals the current card if it is ready and still hidden.
pub fn reveal_card(ui: &crate::AppWindow, cards: &CardService) {
    if cards.reveal() {
        set_card_phase(ui, cards.phase());
    } else {
        debug!(
            "Reveal ignored for {:?} in phase {:?}",
            cards.current_key(),
            cards.phase()
        );
    }
}

fn load_card_image(
    ui: &crate::AppWindow,
    key: CardKey,
    cards: &CardService,
    cache: &Arc<Mutex<ImageCache>>,
) {
    let cached = cache.lock().ok().and_then(|mut c| c.get(&key.reference));

    if let Some(cached_image) = cached {
        let image = image_loader::create_slint_image(
            cached_image.data,
            cached_image.width,
            cached_image.height,
        );
        finish_load(ui, cards, &key, Ok(image));
        return;
    }

    start_load(
        slint::ComponentHandle::as_weak(ui),
        key.reference,
        cards.clone(),
        cache.clone(),
    );
}

/// Loads `reference` on rayon unless it is cached or already loading.
fn start_load(
    ui: slint::Weak<crate::AppWindow>,
    reference: String,
    cards: CardService,
    cache: Arc<Mutex<ImageCache>>,
) {
    let claimed = cache
        .lock()
        .map(|mut c| c.begin_load(&reference))
        .unwrap_or(false);
    if !claimed {
        debug!("Load of {} already cached or in flight", reference);
        return;
    }

    rayon::spawn(move || {
        let result = load_into_cache(&reference, &cache);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui) = ui.upgrade() else {
                return;
            };
            let Some(key) = cards.current_key().filter(|k| k.reference == reference) else {
                return;
            };
            let image = result.map(|cached_image| {
                image_loader::create_slint_image(
                    cached_image.data,
                    cached_image.width,
                    cached_image.height,
                )
            });
            finish_load(&ui, &cards, &key, image);
        });
    });
}

/// Loads a reference and releases its in-flight claim. Blocking.
fn load_into_cache(reference: &str, cache: &Arc<Mutex<ImageCache>>) -> Result<CachedImage> {
    let result = image_loader::load_image_blocking(reference)
        .map(|(data, width, height)| CachedImage::new(data, width, height));
    if let Err(e) = &result {
        debug!("Load of {} failed: {}", reference, e);
    }
    if let Ok(mut cache) = cache.lock() {
        cache.finish_load(reference, result.as_ref().ok().cloned());
    }
    result
}

/// Applies a finished load. Failures clear the loading state like successes.
fn finish_load(
    ui: &crate::AppWindow,
    cards: &CardService,
    key: &CardKey,
    image: Result<slint::Image>,
) {
    if cards.image_finished(key, image.is_ok()) {
        set_card_view(ui, cards.phase(), image.unwrap_or_default());
    }
}
