use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::catalog::{self, Catalog};
use crate::config::DEFAULT_CATALOG_FILE;
use crate::error::AppError;
use crate::services::{CardService, SessionService};
use crate::state::AppState;
use log::{info, warn};

/// First non-flag argument, taken as the catalog file or directory.
fn catalog_path_from_args(args: impl IntoIterator<Item = OsString>) -> Option<PathBuf> {
    args.into_iter().skip(1).find_map(|arg| {
        if arg.to_string_lossy().starts_with('-') {
            None
        } else {
            Some(PathBuf::from(arg))
        }
    })
}

/// The explicit path, else the default catalog file in `working_dir` if present.
fn resolve_catalog_path(from_args: Option<PathBuf>, working_dir: &Path) -> Option<PathBuf> {
    from_args.or_else(|| {
        let default = working_dir.join(DEFAULT_CATALOG_FILE);
        default.exists().then_some(default)
    })
}

/// Loads and installs the process-wide catalog.
///
/// On failure an empty catalog is installed and the error returned so the UI
/// can show it.
pub fn install_catalog() -> (&'static Catalog, Option<AppError>) {
    let path = resolve_catalog_path(
        catalog_path_from_args(std::env::args_os()),
        Path::new("."),
    );

    let (catalog, error) = match path {
        Some(path) => match Catalog::load(&path) {
            Ok(catalog) => {
                if catalog.is_empty() {
                    warn!("Card catalog {} has no sets", path.display());
                }
                (catalog, None)
            }
            Err(e) => (Catalog::empty(), Some(e)),
        },
        None => {
            info!("No card catalog given and no {} found", DEFAULT_CATALOG_FILE);
            (Catalog::empty(), None)
        }
    };

    (catalog::install(catalog), error)
}

/// Fills the set selector and shows the first card of the first set.
pub fn configure_startup(
    app: &crate::AppWindow,
    app_state: &AppState,
    catalog: &'static Catalog,
    catalog_error: Option<AppError>,
) {
    if let Some(e) = catalog_error {
        crate::ui::set_error_with_prefix(app, "Failed to load card catalog", e.to_string());
    }

    let session = SessionService::new(app_state.session.clone(), catalog);
    let cards = CardService::new(app_state.card.clone());

    let key = session.select_first_set();
    crate::ui::set_set_selector(app, session.set_names(), session.selected_set().as_deref());
    crate::ui::card_display::show_card(app, key, &session, &cards, &app_state.image_cache);
}
