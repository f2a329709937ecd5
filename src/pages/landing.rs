use crate::components::{Calendar, CourseOverview, Hero, Instructor, ModuleSection, Navigation};
use crate::config::SnapConfig;
use crate::content::{module_count, modules};
use crate::scroll::{PinRegistry, ScrollDriver};
use leptos::*;

/// Hero and overview, plus one pinned section per module.
pub fn pinned_section_count() -> usize {
    2 + module_count()
}

fn module_z_index(index: usize) -> usize {
    30 + index * 10
}

#[component]
pub fn LandingPage() -> impl IntoView {
    // Scoped to this page: a remount starts a fresh registry and driver.
    let registry = PinRegistry::expecting(pinned_section_count());
    provide_context(registry.clone());

    let driver = ScrollDriver::attach(registry, SnapConfig::default());
    if driver.is_none() {
        log::warn!("no window; scroll snapping disabled");
    }
    on_cleanup(move || drop(driver));

    view! {
        <div class="landing">
            <div class="grain-overlay"></div>
            <Navigation/>
            <main>
                <Hero/>
                <CourseOverview/>
                <div id="modulos">
                    {modules()
                        .iter()
                        .enumerate()
                        .map(|(i, module)| view! { <ModuleSection module=module z_index=module_z_index(i)/> })
                        .collect_view()}
                </div>
                <Calendar/>
                <Instructor/>
            </main>
        </div>
    }
}
