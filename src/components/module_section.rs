use super::pinned_section::{scrubbed, PinnedSection};
use crate::config::{asset, MODULE_PIN_DISTANCE};
use crate::content::Module;
use crate::motion::{Ease, Length, Span, Timeline, VisualState};
use crate::routes::module_href;
use leptos::*;
use leptos_router::A;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulePart {
    Background,
    Badge,
    Headline,
    Body,
    Link,
}

pub fn module_timeline() -> Timeline<ModulePart> {
    let enter = |at: f64| Span::at(at).lasting(0.16).ease(Ease::Power2Out);
    let exit = Span::at(0.7).lasting(0.3).ease(Ease::Power2In);
    let out = |state: VisualState| (VisualState::REST, state);

    let exits = [
        (ModulePart::Badge, out(VisualState::REST.with_x(Length::vw(10.0)).with_opacity(0.0))),
        (ModulePart::Headline, out(VisualState::REST.with_x(Length::vw(-14.0)).with_opacity(0.0))),
        (ModulePart::Body, out(VisualState::REST.with_y(Length::vh(6.0)).with_opacity(0.0))),
        (ModulePart::Link, out(VisualState::REST.with_y(Length::vh(4.0)).with_opacity(0.0))),
        (ModulePart::Background, out(VisualState::REST.with_scale(1.05).with_opacity(0.0))),
    ];

    let entered = Timeline::new()
        .from_to(
            ModulePart::Background,
            VisualState::REST.with_scale(1.08).with_opacity(0.7),
            VisualState::REST,
            Span::at(0.0).lasting(0.3),
        )
        .from_to(
            ModulePart::Badge,
            VisualState::REST.with_x(Length::vw(20.0)).with_opacity(0.0),
            VisualState::REST,
            enter(0.0),
        )
        .from_to(
            ModulePart::Headline,
            VisualState::REST.with_x(Length::vw(-55.0)).with_opacity(0.0),
            VisualState::REST,
            enter(0.06),
        )
        .from_to(
            ModulePart::Body,
            VisualState::REST.with_y(Length::vh(10.0)).with_opacity(0.0),
            VisualState::REST,
            enter(0.1),
        )
        .from_to(
            ModulePart::Link,
            VisualState::REST.with_y(Length::vh(5.0)).with_opacity(0.0),
            VisualState::REST,
            enter(0.14),
        );

    exits
        .into_iter()
        .fold(entered, |tl, (part, (from, to))| tl.from_to(part, from, to, exit))
}

/// Anchor id of a module's landing section.
pub fn module_anchor(id: u32) -> String {
    format!("modulo-{}", id)
}

#[component]
pub fn ModuleSection(module: &'static Module, z_index: usize) -> impl IntoView {
    let progress = create_rw_signal(0.0);
    let timeline = store_value(module_timeline());
    let style = scrubbed(timeline, progress);

    view! {
        <PinnedSection
            anchor=module_anchor(module.id)
            class="module-section"
            distance=MODULE_PIN_DISTANCE
            z_index=z_index
            progress=progress
        >
            <div class="section-bg" style=move || style(ModulePart::Background)>
                <img src=asset(module.image) alt=module.title/>
                <div class="section-bg-overlay"></div>
            </div>

            <div class="module-section-content">
                <span class="badge" style=move || style(ModulePart::Badge)>{module.badge}</span>
                <h2 style=move || style(ModulePart::Headline)>{module.title}</h2>
                <p style=move || style(ModulePart::Body)>{module.description}</p>
                <div class="module-section-link" style=move || style(ModulePart::Link)>
                    <A href=module_href(module.id)>"Ver módulo →"</A>
                </div>
            </div>
        </PinnedSection>
    }
}
