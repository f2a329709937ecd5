use super::pinned_section::{scrubbed, PinnedSection};
use crate::config::{asset, OVERVIEW_PIN_DISTANCE};
use crate::content::COURSE_FEATURES;
use crate::motion::{Ease, Length, Span, Timeline, VisualState};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewPart {
    Background,
    Headline,
    Body,
    Card,
    CardTitle,
    Bullet(usize),
}

pub fn overview_timeline(bullets: usize) -> Timeline<OverviewPart> {
    let enter = |at: f64, duration: f64| Span::at(at).lasting(duration).ease(Ease::Power2Out);
    let exit = Span::at(0.7).lasting(0.3).ease(Ease::Power2In);
    let bullet_parts: Vec<OverviewPart> = (0..bullets).map(OverviewPart::Bullet).collect();
    let rise = VisualState::REST.with_y(Length::px(18.0)).with_opacity(0.0);

    Timeline::new()
        // entrance
        .from_to(
            OverviewPart::Background,
            VisualState::REST.with_scale(1.1).with_opacity(0.6),
            VisualState::REST,
            Span::at(0.0).lasting(0.3),
        )
        .from_to(
            OverviewPart::Headline,
            VisualState::REST.with_x(Length::vw(-50.0)).with_opacity(0.0),
            VisualState::REST,
            enter(0.0, 0.22),
        )
        .from_to(
            OverviewPart::Body,
            VisualState::REST.with_y(Length::vh(10.0)).with_opacity(0.0),
            VisualState::REST,
            enter(0.08, 0.22),
        )
        .from_to(
            OverviewPart::Card,
            VisualState::REST.with_x(Length::vw(60.0)).with_opacity(0.0),
            VisualState::REST,
            enter(0.1, 0.2),
        )
        .from_to(OverviewPart::CardTitle, rise, VisualState::REST, enter(0.14, 0.16))
        .from_to_each(&bullet_parts, rise, VisualState::REST, enter(0.16, 0.08).stagger(0.02))
        // exit
        .from_to(
            OverviewPart::Headline,
            VisualState::REST,
            VisualState::REST.with_x(Length::vw(-12.0)).with_opacity(0.0),
            exit,
        )
        .from_to(
            OverviewPart::Body,
            VisualState::REST,
            VisualState::REST.with_y(Length::vh(6.0)).with_opacity(0.0),
            exit,
        )
        .from_to(
            OverviewPart::Card,
            VisualState::REST,
            VisualState::REST.with_x(Length::vw(18.0)).with_opacity(0.0),
            exit,
        )
        .from_to(
            OverviewPart::Background,
            VisualState::REST,
            VisualState::REST.with_scale(1.05).with_opacity(0.0),
            exit,
        )
}

#[component]
pub fn CourseOverview() -> impl IntoView {
    let progress = create_rw_signal(0.0);
    let timeline = store_value(overview_timeline(COURSE_FEATURES.len()));
    let style = scrubbed(timeline, progress);

    view! {
        <PinnedSection anchor="curso" class="overview" distance=OVERVIEW_PIN_DISTANCE z_index=20 progress=progress>
            <div class="section-bg" style=move || style(OverviewPart::Background)>
                <img src=asset("/images/overview_bg.jpg") alt="Artista dibujando"/>
                <div class="section-bg-overlay"></div>
            </div>

            <div class="overview-content">
                <div class="overview-text">
                    <h2 style=move || style(OverviewPart::Headline)>
                        "Ocho módulos."<br/>"Un encuentro por semana."
                    </h2>
                    <p style=move || style(OverviewPart::Body)>
                        "Cada módulo combina teoría, práctica guiada y tiempo de decantación. \
                         Los encuentros son virtuales, en vivo, con espacio para preguntas y \
                         revisión de ejercicios."
                    </p>
                </div>

                <div class="overview-card" style=move || style(OverviewPart::Card)>
                    <div class="accent-line"></div>
                    <h3 style=move || style(OverviewPart::CardTitle)>"Estructura del curso"</h3>
                    <ul>
                        {COURSE_FEATURES
                            .iter()
                            .enumerate()
                            .map(|(i, feature)| view! {
                                <li style=move || style(OverviewPart::Bullet(i))>
                                    <span class="glyph">{feature.glyph}</span>
                                    <span>{feature.text}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </PinnedSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(bullets: usize) -> Vec<OverviewPart> {
        let mut parts = vec![
            OverviewPart::Background,
            OverviewPart::Headline,
            OverviewPart::Body,
            OverviewPart::Card,
            OverviewPart::CardTitle,
        ];
        parts.extend((0..bullets).map(OverviewPart::Bullet));
        parts
    }

    #[test]
    fn test_entrance_completes_by_settle() {
        let timeline = overview_timeline(4);
        for part in parts(4) {
            assert_eq!(
                timeline.state_at(part, 0.3),
                VisualState::REST,
                "{:?} should be at rest when the settle phase starts",
                part
            );
            assert_eq!(timeline.state_at(part, 0.5), VisualState::REST);
        }
    }

    #[test]
    fn test_scrub_forward_then_back_restores_pre_entrance() {
        let timeline = overview_timeline(4);
        let initial = timeline.snapshot(0.0);
        let mut p = 0.0;
        while p <= 1.0 {
            let _ = timeline.snapshot(p);
            p += 0.05;
        }
        let _ = timeline.snapshot(1.0);
        assert_eq!(timeline.snapshot(0.0), initial);
        assert_eq!(timeline.state_at(OverviewPart::Headline, 0.0).opacity, 0.0);
        assert_eq!(timeline.state_at(OverviewPart::Background, 0.0).scale, 1.1);
    }

    #[test]
    fn test_bullets_are_staggered() {
        let timeline = overview_timeline(4);
        let first = timeline.state_at(OverviewPart::Bullet(0), 0.19).opacity;
        let last = timeline.state_at(OverviewPart::Bullet(3), 0.19).opacity;
        assert!(first > last, "Bullet 0 ({}) should lead bullet 3 ({})", first, last);
    }

    #[test]
    fn test_exit_ends_hidden() {
        let timeline = overview_timeline(4);
        for part in [
            OverviewPart::Background,
            OverviewPart::Headline,
            OverviewPart::Body,
            OverviewPart::Card,
        ] {
            assert_eq!(timeline.state_at(part, 1.0).opacity, 0.0, "{:?}", part);
        }
    }
}
