//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - Slint event loop: every session and card state transition
//! - `rayon::spawn`: image fetch and decode, next-card preload
//! - `slint::invoke_from_event_loop`: hands decoded images back to the UI thread

pub mod card_display;
pub mod handlers;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
