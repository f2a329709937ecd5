use crate::motion::{Phase, Timeline};
use crate::scroll::{viewport, PinRegistry, PinnedRegion, RegionId};
use leptos::*;

/// A landing section that holds the screen for `distance` viewport heights
/// of extra scrolling.
///
/// Renders a tall spacer with a sticky, viewport-sized stage inside. The
/// section registers its region with the [`PinRegistry`] in context and
/// writes its normalized scroll progress to `progress`; children derive their
/// styles from that signal. Outside a registry the stage simply stays at
/// progress 0.
#[component]
pub fn PinnedSection(
    /// Element id for in-page navigation.
    #[prop(optional, into)]
    anchor: Option<String>,
    #[prop(optional)] class: &'static str,
    distance: f64,
    z_index: usize,
    progress: RwSignal<f64>,
    children: Children,
) -> impl IntoView {
    let spacer = create_node_ref::<html::Section>();

    if let Some(registry) = use_context::<PinRegistry>() {
        let measure = move || {
            let element = spacer.get_untracked()?;
            let (scroll_y, viewport_height) = viewport()?;
            let top = element.get_bounding_client_rect().top() + scroll_y;
            let pinned = (element.offset_height() as f64 - viewport_height).max(0.0);
            Some(PinnedRegion::new(top, pinned))
        };
        let registration = PinnedRegistration::new(registry, measure, progress);
        on_cleanup(move || drop(registration));
    }

    let height = format!(
        "height: {:.0}vh; z-index: {};",
        (1.0 + distance.max(0.0)) * 100.0,
        z_index
    );

    view! {
        <section id=anchor class=format!("pinned-spacer {}", class) style=height node_ref=spacer>
            <div class="pinned-stage" data-phase=move || Phase::of(progress.get()).as_str()>
                {children()}
            </div>
        </section>
    }
}

/// A section's place in the [`PinRegistry`]; unregisters on drop.
pub(crate) struct PinnedRegistration {
    registry: PinRegistry,
    id: RegionId,
}

impl PinnedRegistration {
    pub(crate) fn new(
        registry: PinRegistry,
        measure: impl Fn() -> Option<PinnedRegion> + 'static,
        progress: RwSignal<f64>,
    ) -> Self {
        let id = registry.register(measure, move |p| progress.set(p));
        PinnedRegistration { registry, id }
    }
}

impl Drop for PinnedRegistration {
    fn drop(&mut self) {
        self.registry.unregister(self.id);
    }
}

/// Style getter for elements driven by a scrubbed timeline.
pub fn scrubbed<K: Copy + PartialEq + 'static>(
    timeline: StoredValue<Timeline<K>>,
    progress: RwSignal<f64>,
) -> impl Fn(K) -> String + Copy {
    move |target| timeline.with_value(|tl| tl.state_at(target, progress.get()).to_style())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::active_observers;

    #[test]
    fn test_registration_forwards_progress_until_dropped() {
        let runtime = create_runtime();
        let baseline = active_observers();
        let registry = PinRegistry::expecting(1);
        let progress = create_rw_signal(0.0);

        let registration =
            PinnedRegistration::new(registry.clone(), || Some(PinnedRegion::new(100.0, 200.0)), progress);
        assert!(registry.is_ready());
        assert_eq!(active_observers(), baseline + 1);

        registry.dispatch(200.0);
        assert_eq!(progress.get_untracked(), 0.5);

        drop(registration);
        assert!(registry.is_empty(), "Dropping the registration should unregister the region");
        assert_eq!(active_observers(), baseline);

        registry.dispatch(300.0);
        assert_eq!(progress.get_untracked(), 0.5, "Progress should stop updating after unregistering");
        runtime.dispose();
    }
}
