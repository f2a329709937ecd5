use super::pinned_section::PinnedSection;
use crate::config::{asset, HERO_PIN_DISTANCE};
use crate::content::{COURSE_TAGLINE, COURSE_TITLE};
use crate::motion::{Ease, FrameClock, Length, Span, Timeline, VisualState};
use crate::scroll::scroll_to_anchor;
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPart {
    Background,
    TitleLine(usize),
    Subhead,
    Cta,
    ScrollLabel,
}

const TITLE_LINES: [HeroPart; 2] = [HeroPart::TitleLine(0), HeroPart::TitleLine(1)];

/// One-shot mount intro, in seconds.
pub fn intro_timeline() -> Timeline<HeroPart> {
    let out = |at: f64, duration: f64| Span::at(at).lasting(duration).ease(Ease::Power2Out);
    Timeline::new()
        .from_to(
            HeroPart::Background,
            VisualState::REST.with_opacity(0.0).with_scale(1.08),
            VisualState::REST,
            out(0.0, 1.1),
        )
        .from_to_each(
            &TITLE_LINES,
            VisualState::REST.with_y(Length::px(40.0)).with_opacity(0.0),
            VisualState::REST,
            out(0.5, 0.9).stagger(0.12),
        )
        .from_to(
            HeroPart::Subhead,
            VisualState::REST.with_y(Length::px(24.0)).with_opacity(0.0),
            VisualState::REST,
            out(1.12, 0.7),
        )
        .from_to(
            HeroPart::Cta,
            VisualState::REST.with_y(Length::px(18.0)).with_opacity(0.0),
            VisualState::REST,
            out(1.52, 0.6),
        )
        .from_to(
            HeroPart::ScrollLabel,
            VisualState::REST.with_opacity(0.0),
            VisualState::REST,
            out(1.92, 0.5),
        )
}

/// Scroll exit, in normalized pinned progress. There is no scroll entrance:
/// every part rests until the exit phase.
pub fn exit_timeline() -> Timeline<HeroPart> {
    let exit = Span::at(0.7).lasting(0.3).ease(Ease::Power2In);
    Timeline::new()
        .from_to_each(
            &TITLE_LINES,
            VisualState::REST,
            VisualState::REST.with_x(Length::vw(-18.0)).with_opacity(0.0),
            exit,
        )
        .from_to_each(
            &[HeroPart::Subhead, HeroPart::Cta],
            VisualState::REST,
            VisualState::REST.with_y(Length::vh(10.0)).with_opacity(0.0),
            exit,
        )
        .from_to(
            HeroPart::Background,
            VisualState::REST,
            VisualState::REST.with_scale(1.06),
            exit.ease(Ease::Linear),
        )
        .from_to(
            HeroPart::ScrollLabel,
            VisualState::REST,
            VisualState::REST.with_opacity(0.0),
            Span::at(0.75).lasting(0.25),
        )
}

/// Intro state composed with the scroll exit.
pub fn hero_state(
    intro: &Timeline<HeroPart>,
    exit: &Timeline<HeroPart>,
    part: HeroPart,
    intro_time: f64,
    progress: f64,
) -> VisualState {
    intro
        .state_at(part, intro_time)
        .compose(exit.state_at(part, progress))
}

#[component]
pub fn Hero() -> impl IntoView {
    let progress = create_rw_signal(0.0);
    let intro_time = create_rw_signal(0.0);
    let timelines = store_value((intro_timeline(), exit_timeline()));

    let intro_duration = timelines.with_value(|(intro, _)| intro.duration());
    let clock = FrameClock::start(intro_duration, move |t| intro_time.set(t));
    on_cleanup(move || drop(clock));

    let style = move |part: HeroPart| {
        timelines.with_value(|(intro, exit)| {
            hero_state(intro, exit, part, intro_time.get(), progress.get()).to_style()
        })
    };

    view! {
        <PinnedSection anchor="hero" class="hero" distance=HERO_PIN_DISTANCE z_index=10 progress=progress>
            <div class="section-bg" style=move || style(HeroPart::Background)>
                <img src=asset("/images/hero_bg.jpg") alt="Taller de artista"/>
                <div class="section-bg-overlay"></div>
            </div>

            <div class="hero-content">
                <div class="hero-title">
                    <h1 style=move || style(HeroPart::TitleLine(0))>"Poética"</h1>
                    <h1 style=move || style(HeroPart::TitleLine(1))>"de la mirada"</h1>
                </div>
                <p class="hero-subhead" style=move || style(HeroPart::Subhead)>{COURSE_TAGLINE}</p>
                <button
                    class="btn-primary"
                    style=move || style(HeroPart::Cta)
                    on:click=move |_| {
                        scroll_to_anchor("curso");
                    }
                    aria-label=format!("Ver el programa de {}", COURSE_TITLE)
                >
                    "Ver el programa"
                </button>
            </div>

            <div class="scroll-label" style=move || style(HeroPart::ScrollLabel)>
                <span>"Scroll"</span>
                <span class="scroll-chevron">"↓"</span>
            </div>
        </PinnedSection>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARTS: [HeroPart; 6] = [
        HeroPart::Background,
        HeroPart::TitleLine(0),
        HeroPart::TitleLine(1),
        HeroPart::Subhead,
        HeroPart::Cta,
        HeroPart::ScrollLabel,
    ];

    #[test]
    fn test_intro_starts_hidden_and_ends_at_rest() {
        let intro = intro_timeline();
        for part in PARTS {
            assert_eq!(intro.state_at(part, 0.0).opacity, 0.0, "{:?} should start hidden", part);
            assert_eq!(
                intro.state_at(part, intro.duration()),
                VisualState::REST,
                "{:?} should end at rest",
                part
            );
        }
        assert!((intro.duration() - 2.42).abs() < 1e-9);
    }

    #[test]
    fn test_exit_holds_until_exit_phase() {
        let exit = exit_timeline();
        for part in PARTS {
            for progress in [0.0, 0.3, 0.5, 0.7] {
                assert_eq!(exit.state_at(part, progress), VisualState::REST);
            }
        }
        assert_eq!(exit.state_at(HeroPart::Cta, 1.0).opacity, 0.0);
        assert_eq!(exit.state_at(HeroPart::Background, 1.0).scale, 1.06);
    }

    #[test]
    fn test_intro_and_exit_compose() {
        let (intro, exit) = (intro_timeline(), exit_timeline());
        let settled = intro.duration();
        let title = hero_state(&intro, &exit, HeroPart::TitleLine(0), settled, 1.0);
        assert_eq!(title, exit.state_at(HeroPart::TitleLine(0), 1.0));

        // Exiting mid-intro multiplies the two fades.
        let bg = hero_state(&intro, &exit, HeroPart::Background, 0.0, 1.0);
        assert_eq!(bg.opacity, 0.0);
        assert!((bg.scale - 1.08 * 1.06).abs() < 1e-9);
    }

    #[test]
    fn test_scrolling_back_restores_settled_hero() {
        let (intro, exit) = (intro_timeline(), exit_timeline());
        let settled = intro.duration();
        for part in PARTS {
            let before = hero_state(&intro, &exit, part, settled, 0.0);
            let _ = hero_state(&intro, &exit, part, settled, 1.0);
            assert_eq!(hero_state(&intro, &exit, part, settled, 0.0), before);
            assert_eq!(before, VisualState::REST);
        }
    }
}
