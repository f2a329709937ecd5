use super::{
    max_scroll, viewport, ObserverGuard, PinRegistry, SnapAnimation, SnapRanges, WindowListener,
};
use crate::config::SnapConfig;
use crate::motion::FrameClock;
use leptos::leptos_dom::helpers::{AnimationFrameRequestHandle, TimeoutHandle};
use leptos::{request_animation_frame_with_handle, set_timeout_with_handle};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

/// Snaps closer than this many pixels are skipped.
const MIN_SNAP_DISTANCE_PX: f64 = 1.0;

/// Connects a [`PinRegistry`] to the window: pushes scroll progress to every
/// pinned section, re-measures on resize and, once the registry is ready,
/// snaps to the nearest pinned section after scrolling goes idle.
///
/// Every listener, timer and animation frame is released on drop.
pub struct ScrollDriver {
    state: Rc<DriverState>,
    _listeners: Vec<WindowListener>,
}

struct DriverState {
    registry: PinRegistry,
    config: SnapConfig,
    snap_enabled: Cell<bool>,
    idle: Cell<Option<TimeoutHandle>>,
    ready_frame: Cell<Option<AnimationFrameRequestHandle>>,
    snap: RefCell<Option<FrameClock>>,
    _guard: ObserverGuard,
}

impl ScrollDriver {
    pub fn attach(registry: PinRegistry, config: SnapConfig) -> Option<Self> {
        web_sys::window()?;
        let mut driver = Self::detached(registry, config);
        driver.install_on_ready();

        let on_scroll = Rc::downgrade(&driver.state);
        let on_resize = Rc::downgrade(&driver.state);
        let on_input = Rc::downgrade(&driver.state);
        let on_touch = Rc::downgrade(&driver.state);
        driver._listeners = [
            WindowListener::passive("scroll", move || with_state(&on_scroll, DriverState::scrolled)),
            WindowListener::passive("resize", move || with_state(&on_resize, DriverState::resized)),
            WindowListener::passive("wheel", move || with_state(&on_input, DriverState::cancel_snap)),
            WindowListener::passive("touchstart", move || {
                with_state(&on_touch, DriverState::cancel_snap)
            }),
        ]
        .into_iter()
        .flatten()
        .collect();

        // Sections mounted before the first scroll event still need a position.
        driver.state.dispatch_current();
        Some(driver)
    }

    /// A driver with no window listeners and no readiness hook yet.
    pub(super) fn detached(registry: PinRegistry, config: SnapConfig) -> Self {
        let state = Rc::new(DriverState {
            registry,
            config,
            snap_enabled: Cell::new(false),
            idle: Cell::new(None),
            ready_frame: Cell::new(None),
            snap: RefCell::new(None),
            _guard: ObserverGuard::new(),
        });
        ScrollDriver {
            state,
            _listeners: Vec::new(),
        }
    }

    /// The registry keeps only a weak handle, so it never outlives the driver's state.
    fn install_on_ready(&self) {
        let on_ready = Rc::downgrade(&self.state);
        self.state
            .registry
            .on_ready(move || with_state(&on_ready, DriverState::install_snap));
    }

    pub fn is_snap_installed(&self) -> bool {
        self.state.snap_enabled.get()
    }
}

fn with_state(weak: &Weak<DriverState>, f: impl FnOnce(&Rc<DriverState>)) {
    if let Some(state) = weak.upgrade() {
        f(&state);
    }
}

impl DriverState {
    fn dispatch_current(&self) {
        if let Some((scroll_y, _)) = viewport() {
            self.registry.dispatch(scroll_y);
        }
    }

    fn is_snapping(&self) -> bool {
        self.snap
            .borrow()
            .as_ref()
            .is_some_and(FrameClock::is_running)
    }

    fn scrolled(self: &Rc<Self>) {
        self.dispatch_current();
        if !self.snap_enabled.get() || self.is_snapping() {
            return;
        }
        if let Some(handle) = self.idle.take() {
            handle.clear();
        }
        let weak = Rc::downgrade(self);
        match set_timeout_with_handle(
            move || with_state(&weak, DriverState::idle),
            Duration::from_millis(self.config.idle_ms),
        ) {
            Ok(handle) => self.idle.set(Some(handle)),
            Err(err) => log::warn!("could not schedule snap check: {:?}", err),
        }
    }

    fn resized(self: &Rc<Self>) {
        if self.awaiting_snap() {
            self.enable_snap();
        } else {
            self.registry.remeasure();
            self.dispatch_current();
        }
    }

    /// Ready, no install frame pending, yet nothing was measurable to snap to.
    fn awaiting_snap(&self) -> bool {
        !self.snap_enabled.get() && self.registry.is_ready() && self.ready_frame.get().is_none()
    }

    fn idle(self: &Rc<Self>) {
        self.idle.set(None);
        self.try_snap();
    }

    /// Runs once, after every expected section registered. Resizes retry
    /// [`Self::enable_snap`] while snapping is still off.
    fn install_snap(self: &Rc<Self>) {
        // Wait one frame so the sections' spacers are laid out before measuring.
        let weak = Rc::downgrade(self);
        match request_animation_frame_with_handle(move || {
            with_state(&weak, |state| {
                state.ready_frame.set(None);
                state.enable_snap();
            })
        }) {
            Ok(handle) => self.ready_frame.set(Some(handle)),
            Err(err) => {
                log::warn!("could not request animation frame: {:?}", err);
                self.enable_snap();
            }
        }
    }

    fn enable_snap(&self) {
        self.enable_snap_within(max_scroll());
        self.dispatch_current();
    }

    fn enable_snap_within(&self, max_scroll: Option<f64>) -> bool {
        self.registry.remeasure();
        let regions = self.registry.regions();
        match max_scroll.and_then(|max| SnapRanges::from_regions(&regions, max, self.config.epsilon)) {
            Some(ranges) => {
                log::debug!("snap installed over {} pinned ranges", ranges.ranges().len());
                self.snap_enabled.set(true);
            }
            None => log::debug!("nothing to snap to; snapping stays off"),
        }
        self.snap_enabled.get()
    }

    fn try_snap(self: &Rc<Self>) {
        let (Some((scroll_y, viewport_height)), Some(max)) = (viewport(), max_scroll()) else {
            return;
        };
        let regions = self.registry.regions();
        let Some(ranges) = SnapRanges::from_regions(&regions, max, self.config.epsilon) else {
            return;
        };
        let Some(target) = ranges.target(scroll_y / max) else {
            return;
        };
        let target_px = target * max;
        if (target_px - scroll_y).abs() < MIN_SNAP_DISTANCE_PX {
            return;
        }

        let animation = SnapAnimation::new(scroll_y, target_px, viewport_height, &self.config);
        log::debug!(
            "snapping {:.0}px -> {:.0}px over {:.2}s",
            animation.from_px,
            animation.to_px,
            animation.duration_s
        );
        let clock = FrameClock::start(animation.duration_s, move |elapsed| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, animation.position_at(elapsed));
            }
        });
        *self.snap.borrow_mut() = Some(clock);
    }

    fn cancel_snap(self: &Rc<Self>) {
        if self.snap.borrow_mut().take().is_some() {
            log::debug!("snap cancelled by user input");
        }
    }

    fn release(&self) {
        if let Some(handle) = self.idle.take() {
            handle.clear();
        }
        if let Some(handle) = self.ready_frame.take() {
            handle.cancel();
        }
        self.snap.borrow_mut().take();
        self.snap_enabled.set(false);
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        self.state.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::{active_observers, PinnedRegion};

    #[test]
    fn test_dropped_driver_releases_its_observer() {
        let baseline = active_observers();
        let registry = PinRegistry::expecting(2);
        let first = registry.register(|| Some(PinnedRegion::new(0.0, 1000.0)), |_| {});
        let driver = ScrollDriver::detached(registry.clone(), SnapConfig::default());
        driver.install_on_ready();
        assert_eq!(active_observers(), baseline + 2);

        drop(driver);
        assert_eq!(
            active_observers(),
            baseline + 1,
            "A pending readiness callback should not keep the driver alive"
        );

        // Readiness after teardown has no driver left to install snapping on.
        let second = registry.register(|| Some(PinnedRegion::new(3000.0, 1000.0)), |_| {});
        assert!(registry.is_ready());
        registry.unregister(first);
        registry.unregister(second);
        assert_eq!(active_observers(), baseline);
    }

    #[test]
    fn test_snap_enables_once_regions_are_measurable() {
        let registry = PinRegistry::expecting(1);
        let layout: Rc<Cell<Option<PinnedRegion>>> = Rc::new(Cell::new(None));
        let measured = Rc::clone(&layout);
        let id = registry.register(move || measured.get(), |_| {});
        let driver = ScrollDriver::detached(registry.clone(), SnapConfig::default());
        let state = &driver.state;

        assert!(state.awaiting_snap());
        assert!(!state.enable_snap_within(Some(0.0)), "No scroll room should leave snapping off");
        assert!(!state.enable_snap_within(Some(5000.0)), "No measured region should leave snapping off");
        assert!(state.awaiting_snap(), "A later resize should retry");

        layout.set(Some(PinnedRegion::new(500.0, 1200.0)));
        assert!(state.enable_snap_within(Some(5000.0)));
        assert!(driver.is_snap_installed());
        assert!(!state.awaiting_snap());

        drop(driver);
        registry.unregister(id);
    }

    #[test]
    fn test_not_ready_registry_does_not_retry_snap() {
        let registry = PinRegistry::expecting(2);
        let driver = ScrollDriver::detached(registry, SnapConfig::default());
        assert!(!driver.state.awaiting_snap());
    }
}
