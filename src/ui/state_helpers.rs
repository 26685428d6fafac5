//! Helper functions to set groups of ViewState properties together.

use crate::state::CardPhase;
use log::error;
use slint::ComponentHandle;

impl From<CardPhase> for crate::CardView {
    fn from(phase: CardPhase) -> Self {
        match phase {
            CardPhase::Empty => crate::CardView::Empty,
            CardPhase::Loading => crate::CardView::Loading,
            CardPhase::Hidden => crate::CardView::Hidden,
            CardPhase::Revealed => crate::CardView::Revealed,
        }
    }
}

/// Sets the set selector entries and the selected name.
pub fn set_set_selector(ui: &crate::AppWindow, names: Vec<String>, selected: Option<&str>) {
    let view_state = ui.global::<crate::ViewState>();
    let names: Vec<slint::SharedString> = names.into_iter().map(Into::into).collect();
    view_state.set_set_names(slint::ModelRc::new(slint::VecModel::from(names)));
    view_state.set_selected_set(selected.unwrap_or_default().into());
}

/// Sets the card phase and image at once.
///
/// Groups: card-phase, card-image
pub fn set_card_view(ui: &crate::AppWindow, phase: CardPhase, image: slint::Image) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_card_image(image);
    view_state.set_card_phase(phase.into());
}

/// Sets only the card phase, keeping the displayed image.
pub fn set_card_phase(ui: &crate::AppWindow, phase: CardPhase) {
    ui.global::<crate::ViewState>().set_card_phase(phase.into());
}

/// Sets the "card i of n" progress.
///
/// Groups: card-position, card-total
pub fn set_progress(ui: &crate::AppWindow, (position, total): (usize, usize)) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_card_position(position as i32);
    view_state.set_card_total(total as i32);
}

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}
