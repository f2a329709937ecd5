use super::ObserverGuard;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

pub type RegionId = u64;

/// Scroll offsets, in pixels, between which a section stays pinned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedRegion {
    pub start: f64,
    pub end: f64,
}

impl PinnedRegion {
    pub fn new(start: f64, distance: f64) -> Self {
        PinnedRegion {
            start,
            end: start + distance.max(0.0),
        }
    }

    /// Normalized progress through the region for a given scroll offset.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return if scroll_y >= self.start { 1.0 } else { 0.0 };
        }
        ((scroll_y - self.start) / span).clamp(0.0, 1.0)
    }
}

type Measure = Box<dyn Fn() -> Option<PinnedRegion>>;
type ProgressFn = Rc<dyn Fn(f64)>;

struct Entry {
    region: Option<PinnedRegion>,
    measure: Measure,
    on_progress: ProgressFn,
    _guard: ObserverGuard,
}

struct Inner {
    next_id: RegionId,
    entries: BTreeMap<RegionId, Entry>,
    pending: usize,
    ready: bool,
    on_ready: Vec<Box<dyn FnOnce()>>,
}

/// Registry of the pinned sections on one landing page.
///
/// The page declares how many pinned sections it will mount; each
/// registration counts one down, and when the count reaches zero the
/// readiness callbacks run exactly once. Sections unregister on unmount.
#[derive(Clone)]
pub struct PinRegistry {
    inner: Rc<RefCell<Inner>>,
}

impl PinRegistry {
    pub fn expecting(sections: usize) -> Self {
        PinRegistry {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 1,
                entries: BTreeMap::new(),
                pending: sections,
                ready: sections == 0,
                on_ready: Vec::new(),
            })),
        }
    }

    /// Run `callback` once every expected section has registered, or now if
    /// that already happened.
    pub fn on_ready(&self, callback: impl FnOnce() + 'static) {
        let run_now = {
            let mut inner = self.inner.borrow_mut();
            if !inner.ready {
                inner.on_ready.push(Box::new(callback));
                return;
            }
            callback
        };
        run_now();
    }

    pub fn is_ready(&self) -> bool {
        self.inner.borrow().ready
    }

    /// Register a pinned section.
    ///
    /// `measure` reports the section's current region, or `None` when its
    /// element is not mounted; such sections still count towards readiness but
    /// are ignored for progress and snapping.
    pub fn register(
        &self,
        measure: impl Fn() -> Option<PinnedRegion> + 'static,
        on_progress: impl Fn(f64) + 'static,
    ) -> RegionId {
        let region = measure();
        let (id, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.insert(
                id,
                Entry {
                    region,
                    measure: Box::new(measure),
                    on_progress: Rc::new(on_progress),
                    _guard: ObserverGuard::new(),
                },
            );
            inner.pending = inner.pending.saturating_sub(1);
            let callbacks = if inner.pending == 0 && !inner.ready {
                inner.ready = true;
                std::mem::take(&mut inner.on_ready)
            } else {
                Vec::new()
            };
            (id, callbacks)
        };
        log::debug!("registered pinned region {} ({:?})", id, region);
        for callback in callbacks {
            callback();
        }
        id
    }

    pub fn unregister(&self, id: RegionId) {
        if self.inner.borrow_mut().entries.remove(&id).is_some() {
            log::debug!("unregistered pinned region {}", id);
        }
    }

    /// Re-read every region from the layout.
    pub fn remeasure(&self) {
        let mut inner = self.inner.borrow_mut();
        for entry in inner.entries.values_mut() {
            entry.region = (entry.measure)();
        }
    }

    /// Measured regions, ordered by start offset.
    pub fn regions(&self) -> Vec<PinnedRegion> {
        let mut regions: Vec<PinnedRegion> = self
            .inner
            .borrow()
            .entries
            .values()
            .filter_map(|entry| entry.region)
            .collect();
        regions.sort_by(|a, b| a.start.total_cmp(&b.start));
        regions
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Push the progress for `scroll_y` to every measured section.
    pub fn dispatch(&self, scroll_y: f64) {
        let updates: Vec<(ProgressFn, f64)> = self
            .inner
            .borrow()
            .entries
            .values()
            .filter_map(|entry| {
                entry
                    .region
                    .map(|region| (Rc::clone(&entry.on_progress), region.progress(scroll_y)))
            })
            .collect();
        for (on_progress, progress) in updates {
            on_progress(progress);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fixed(start: f64, distance: f64) -> impl Fn() -> Option<PinnedRegion> {
        move || Some(PinnedRegion::new(start, distance))
    }

    #[test]
    fn test_region_progress() {
        let region = PinnedRegion::new(1000.0, 1300.0);
        assert_eq!(region.progress(0.0), 0.0);
        assert_eq!(region.progress(1000.0), 0.0);
        assert!((region.progress(1650.0) - 0.5).abs() < 1e-12);
        assert_eq!(region.progress(2300.0), 1.0);
        assert_eq!(region.progress(9000.0), 1.0);
    }

    #[test]
    fn test_zero_length_region() {
        let region = PinnedRegion::new(500.0, 0.0);
        assert_eq!(region.progress(499.0), 0.0);
        assert_eq!(region.progress(500.0), 1.0);
    }

    #[test]
    fn test_ready_fires_once_after_last_registration() {
        let registry = PinRegistry::expecting(3);
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        registry.on_ready(move || counter.set(counter.get() + 1));

        registry.register(fixed(0.0, 100.0), |_| {});
        registry.register(fixed(200.0, 100.0), |_| {});
        assert_eq!(fired.get(), 0);
        assert!(!registry.is_ready());

        registry.register(fixed(400.0, 100.0), |_| {});
        assert_eq!(fired.get(), 1);
        assert!(registry.is_ready());

        // Extra registrations (e.g. a remounted section) do not re-fire.
        registry.register(fixed(600.0, 100.0), |_| {});
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_on_ready_after_ready_runs_immediately() {
        let registry = PinRegistry::expecting(1);
        registry.register(fixed(0.0, 10.0), |_| {});
        let fired = Rc::new(Cell::new(false));
        let flag = Rc::clone(&fired);
        registry.on_ready(move || flag.set(true));
        assert!(fired.get());
    }

    #[test]
    fn test_ready_callback_can_read_registry() {
        let registry = PinRegistry::expecting(2);
        let seen = Rc::new(Cell::new(0));
        let (reader, out) = (registry.clone(), Rc::clone(&seen));
        registry.on_ready(move || out.set(reader.regions().len()));
        registry.register(fixed(0.0, 10.0), |_| {});
        registry.register(fixed(50.0, 10.0), |_| {});
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn test_regions_sorted_and_unmeasured_skipped() {
        let registry = PinRegistry::expecting(3);
        registry.register(fixed(500.0, 10.0), |_| {});
        registry.register(|| None, |_| {});
        registry.register(fixed(100.0, 10.0), |_| {});
        let starts: Vec<f64> = registry.regions().iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![100.0, 500.0]);
        assert!(registry.is_ready());
    }

    #[test]
    fn test_dispatch_reports_progress_per_region() {
        let registry = PinRegistry::expecting(2);
        let first = Rc::new(Cell::new(-1.0));
        let second = Rc::new(Cell::new(-1.0));
        let (a, b) = (Rc::clone(&first), Rc::clone(&second));
        registry.register(fixed(0.0, 100.0), move |p| a.set(p));
        registry.register(fixed(100.0, 100.0), move |p| b.set(p));

        registry.dispatch(50.0);
        assert_eq!(first.get(), 0.5);
        assert_eq!(second.get(), 0.0);

        registry.dispatch(175.0);
        assert_eq!(first.get(), 1.0);
        assert_eq!(second.get(), 0.75);
    }

    #[test]
    fn test_unregister_stops_dispatch() {
        let registry = PinRegistry::expecting(1);
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let id = registry.register(fixed(0.0, 100.0), move |_| c.set(c.get() + 1));
        registry.dispatch(10.0);
        registry.unregister(id);
        registry.dispatch(20.0);
        assert_eq!(calls.get(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remeasure_picks_up_layout_changes() {
        let registry = PinRegistry::expecting(1);
        let offset = Rc::new(Cell::new(100.0));
        let source = Rc::clone(&offset);
        registry.register(move || Some(PinnedRegion::new(source.get(), 50.0)), |_| {});
        assert_eq!(registry.regions()[0].start, 100.0);
        offset.set(300.0);
        assert_eq!(registry.regions()[0].start, 100.0);
        registry.remeasure();
        assert_eq!(registry.regions()[0].start, 300.0);
    }
}
