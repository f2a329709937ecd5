//! Scroll-driven plumbing: pinned-region registry, snap math, the browser
//! driver that wires them to window events, and scroll restoration.

mod driver;
mod observers;
mod registry;
pub mod restoration;
mod snap;


pub use driver::ScrollDriver;
pub use observers::{active_observers, ObserverGuard, WindowListener};
pub use registry::{PinRegistry, PinnedRegion, RegionId};
pub use snap::{snap_duration, PinnedRange, SnapAnimation, SnapRanges};

/// Current vertical scroll offset and viewport height, if a window is available.
pub fn viewport() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let scroll_y = window.scroll_y().ok()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((scroll_y, height))
}

/// Largest reachable scroll offset of the document.
pub fn max_scroll() -> Option<f64> {
    let window = web_sys::window()?;
    let root = window.document()?.document_element()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((root.scroll_height() as f64 - height).max(0.0))
}

/// Smooth-scroll the element with `id` into view. Returns `false` when it is not mounted.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::debug!("no element #{} to scroll to", id);
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
