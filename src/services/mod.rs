//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and maintainability.

pub mod card_service;
pub mod session_service;

pub use card_service::CardService;
pub use session_service::SessionService;
