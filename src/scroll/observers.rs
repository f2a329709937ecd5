use std::cell::Cell;
use wasm_bindgen::prelude::*;

thread_local! {
    static ACTIVE_OBSERVERS: Cell<usize> = const { Cell::new(0) };
}

/// Number of scroll observers (window listeners and pinned regions) currently alive.
pub fn active_observers() -> usize {
    ACTIVE_OBSERVERS.with(Cell::get)
}

/// Counts one live observer for as long as it is held.
#[derive(Debug)]
pub struct ObserverGuard(());

impl ObserverGuard {
    pub fn new() -> Self {
        ACTIVE_OBSERVERS.with(|count| count.set(count.get() + 1));
        ObserverGuard(())
    }
}

impl Default for ObserverGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        ACTIVE_OBSERVERS.with(|count| count.set(count.get().saturating_sub(1)));
    }
}

/// A passive listener on `window`, removed when dropped.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn Fn()>,
    _guard: ObserverGuard,
}

impl WindowListener {
    /// Returns `None` outside a browser or if the listener cannot be attached.
    pub fn passive(event: &'static str, handler: impl Fn() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn Fn()>::new(handler);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("could not listen for {}: {:?}", event, err);
            return None;
        }
        Some(WindowListener {
            event,
            closure,
            _guard: ObserverGuard::new(),
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
