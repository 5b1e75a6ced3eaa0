use dioxus::prelude::*;
use tracing::{debug, warn};

use portfolio::theme::Theme;

use crate::common::storage::{get_local_storage, set_local_storage};

const THEME_KEY: &str = "theme";

fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

// stored choice first, then the system setting
pub fn initial_theme(prefix: &str) -> Theme {
    let stored = get_local_storage::<Theme>(prefix, THEME_KEY).unwrap_or(None);

    Theme::resolve(stored, system_prefers_dark())
}

// mirror the theme onto <html> so the scrollbars and the page background follow it
fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        if let Err(err) = root.set_attribute("data-theme", theme.class()) {
            warn!("failed to apply theme: {err:?}");
        }
    }
}

// the theme is page-wide state, owned by the root component and read through context
pub fn use_theme_provider(prefix: &str) -> Signal<Theme> {
    let theme = use_signal(|| initial_theme(prefix));
    use_context_provider(|| theme);

    use_effect(move || apply_theme(theme()));

    theme
}

pub fn use_theme() -> Signal<Theme> {
    use_context::<Signal<Theme>>()
}

pub fn toggle_theme(mut theme: Signal<Theme>, prefix: &str) {
    let next = theme().toggle();
    debug!(?next, "toggling theme");

    theme.set(next);
    set_local_storage(prefix, THEME_KEY, next);
}
