use leptos::leptos_dom::helpers::AnimationFrameRequestHandle;
use leptos::request_animation_frame_with_handle;
use std::cell::Cell;
use std::rc::Rc;

/// Drives a time-based animation from `requestAnimationFrame`.
///
/// `on_tick` receives elapsed seconds, capped at the duration; the last call
/// always reports exactly `duration_s`. Dropping the clock cancels the pending
/// frame.
pub struct FrameClock {
    state: Rc<ClockState>,
}

struct ClockState {
    started_at_ms: f64,
    duration_s: f64,
    on_tick: Box<dyn Fn(f64)>,
    frame: Cell<Option<AnimationFrameRequestHandle>>,
    stopped: Cell<bool>,
}

impl FrameClock {
    pub fn start(duration_s: f64, on_tick: impl Fn(f64) + 'static) -> Self {
        let state = Rc::new(ClockState {
            started_at_ms: js_sys::Date::now(),
            duration_s: duration_s.max(0.0),
            on_tick: Box::new(on_tick),
            frame: Cell::new(None),
            stopped: Cell::new(false),
        });
        schedule(&state);
        FrameClock { state }
    }

    pub fn is_running(&self) -> bool {
        !self.state.stopped.get() && self.state.frame.get().is_some()
    }
}

fn schedule(state: &Rc<ClockState>) {
    let next = Rc::clone(state);
    match request_animation_frame_with_handle(move || tick(next)) {
        Ok(handle) => state.frame.set(Some(handle)),
        Err(err) => {
            log::warn!("could not request animation frame: {:?}", err);
            // Jump to the end state rather than leaving the element mid-way.
            (state.on_tick)(state.duration_s);
        }
    }
}

fn tick(state: Rc<ClockState>) {
    state.frame.set(None);
    if state.stopped.get() {
        return;
    }
    let elapsed = (js_sys::Date::now() - state.started_at_ms) / 1000.0;
    (state.on_tick)(elapsed.min(state.duration_s));
    if elapsed < state.duration_s {
        schedule(&state);
    }
}

impl Drop for FrameClock {
    fn drop(&mut self) {
        self.state.stopped.set(true);
        if let Some(handle) = self.state.frame.take() {
            handle.cancel();
        }
    }
}
