use super::reveal::use_reveal;
use crate::content::{SCHEDULE, SCHEDULE_STATS, START_DATE};
use crate::motion::{Length, Reveal, VisualState};
use crate::scroll::scroll_to_anchor;
use leptos::*;

const HEADER: Reveal = Reveal::new(VisualState::REST.with_y(Length::px(24.0)).with_opacity(0.0), 0.8, 0.8);
const STATS: Reveal =
    Reveal::new(VisualState::REST.with_y(Length::px(20.0)).with_opacity(0.0), 0.6, 0.85).stagger(0.1);
const ROWS: Reveal =
    Reveal::new(VisualState::REST.with_x(Length::vw(-4.0)).with_opacity(0.0), 0.5, 0.85).stagger(0.08);
const CTA: Reveal = Reveal::new(VisualState::REST.with_y(Length::px(16.0)).with_opacity(0.0), 0.6, 0.9);

#[component]
pub fn Calendar() -> impl IntoView {
    let header = create_node_ref::<html::Div>();
    let stats = create_node_ref::<html::Div>();
    let rows = create_node_ref::<html::Div>();
    let cta = create_node_ref::<html::Div>();

    let header_shown = use_reveal(header, HEADER);
    let stats_shown = use_reveal(stats, STATS);
    let rows_shown = use_reveal(rows, ROWS);
    let cta_shown = use_reveal(cta, CTA);

    view! {
        <section id="calendario" class="calendar">
            <div class="calendar-inner">
                <div node_ref=header class="calendar-header" style=move || HEADER.style(header_shown.get(), 0)>
                    <span class="eyebrow">"Cronograma 2026"</span>
                    <h2>"Encuentros y calendario"</h2>
                    <p>
                        "Una sesión por semana, con tiempo para practicar entre encuentros. \
                         Cada módulo incluye un encuentro virtual en vivo y una semana de decantación."
                    </p>
                </div>

                <div node_ref=stats class="stats-grid">
                    {SCHEDULE_STATS
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| view! {
                            <div class="stat-item" style=move || STATS.style(stats_shown.get(), i)>
                                <span class="glyph">{stat.glyph}</span>
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div node_ref=rows class="schedule">
                    <div class="schedule-head">
                        <span>"Semana"</span>
                        <span>"Fecha"</span>
                        <span>"Actividad"</span>
                        <span>"Módulo"</span>
                    </div>
                    {SCHEDULE
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| view! {
                            <div class="calendar-row" style=move || ROWS.style(rows_shown.get(), i)>
                                <span class="week">{entry.week}</span>
                                <span class="date">{entry.date}</span>
                                <span class=entry.kind().css_class()>{entry.activity}</span>
                                <span class="module-ref">{entry.module.unwrap_or("—")}</span>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div node_ref=cta class="calendar-cta" style=move || CTA.style(cta_shown.get(), 0)>
                    <button
                        class="btn-primary"
                        on:click=move |_| {
                            scroll_to_anchor("inscripcion");
                        }
                    >
                        "Reservar mi lugar"
                    </button>
                    <div class="calendar-cta-note">
                        <span>"Cupos limitados a x participantes."</span>
                        <span class="muted">{format!("Se abona al inscribirse • Inicio: {}", START_DATE)}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
