use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

const SCROLL_KEY: &str = "poetica_scroll";

/// Scroll offset saved on unload, tied to the page it was taken on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredScroll {
    pub path: String,
    pub y: f64,
}

impl StoredScroll {
    /// Offset to restore for `path`; a stored entry for another page is ignored.
    pub fn offset_for(&self, path: &str) -> Option<f64> {
        (self.path == path && self.y.is_finite() && self.y >= 0.0).then_some(self.y)
    }
}

/// Attempts to get the browser's sessionStorage.
///
/// Returns `None` outside a browser or when storage is disabled.
fn get_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

fn load() -> Option<StoredScroll> {
    let json = get_storage()?.get_item(SCROLL_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(stored) => Some(stored),
        Err(e) => {
            log::warn!("ignoring stored scroll position: {}", e);
            None
        }
    }
}

fn save() {
    let (Some(window), Some(storage), Some(path)) = (web_sys::window(), get_storage(), current_path())
    else {
        return;
    };
    let stored = StoredScroll {
        path,
        y: window.scroll_y().unwrap_or(0.0),
    };
    match serde_json::to_string(&stored) {
        Ok(json) => {
            if storage.set_item(SCROLL_KEY, &json).is_err() {
                log::warn!("could not save scroll position to sessionStorage");
            }
        }
        Err(e) => log::warn!("failed to serialize scroll position: {}", e),
    }
}

/// Set up scroll restoration; call once on app init.
pub fn setup_scroll_restoration() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        if history
            .set_scroll_restoration(web_sys::ScrollRestoration::Manual)
            .is_err()
        {
            log::warn!("could not switch scroll restoration to manual");
        }
    }

    let closure = Closure::<dyn Fn()>::new(save);
    if window
        .add_event_listener_with_callback("beforeunload", closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("could not listen for beforeunload");
    }
    // Lives as long as the page.
    closure.forget();
}

/// Restore the saved offset if it was taken on the current page.
pub fn restore_scroll_position() {
    let (Some(window), Some(stored), Some(path)) = (web_sys::window(), load(), current_path())
    else {
        return;
    };
    if let Some(y) = stored.offset_for(&path) {
        log::debug!("restoring scroll offset {} on {}", y, path);
        window.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Restore the scroll position after `delay_ms`, once the first render has laid out.
pub fn restore_scroll_after_delay(delay_ms: i32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(restore_scroll_position);
    if window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms,
        )
        .is_err()
    {
        log::warn!("could not schedule scroll restoration");
    }
    closure.forget();
}
