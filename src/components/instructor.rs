use super::reveal::use_reveal;
use crate::config::asset;
use crate::content::{CONTACT_EMAIL, COURSE_TITLE, ENROLLMENT_FORM_URL, INSTRUCTOR};
use crate::motion::{Length, Reveal, VisualState};
use leptos::*;

const PORTRAIT: Reveal = Reveal::new(
    VisualState::REST
        .with_x(Length::vw(-8.0))
        .with_opacity(0.0)
        .with_scale(0.98),
    0.9,
    0.8,
);
const CONTENT: Reveal = Reveal::new(VisualState::REST.with_x(Length::vw(8.0)).with_opacity(0.0), 0.9, 0.8);
const CTA: Reveal = Reveal::new(VisualState::REST.with_y(Length::px(12.0)).with_opacity(0.0), 0.6, 0.85);

/// Enrollment call to action, instructor bio and the page footer.
#[component]
pub fn Instructor() -> impl IntoView {
    let portrait = create_node_ref::<html::Div>();
    let content = create_node_ref::<html::Div>();
    let cta = create_node_ref::<html::Div>();

    let portrait_shown = use_reveal(portrait, PORTRAIT);
    let content_shown = use_reveal(content, CONTENT);
    let cta_shown = use_reveal(cta, CTA);

    view! {
        <section id="inscripcion" class="instructor">
            <div class="instructor-grid">
                <div node_ref=portrait class="portrait" style=move || PORTRAIT.style(portrait_shown.get(), 0)>
                    <div class="portrait-frame"></div>
                    <img src=asset(INSTRUCTOR.portrait) alt=INSTRUCTOR.name/>
                </div>

                <div node_ref=content class="instructor-content" style=move || CONTENT.style(content_shown.get(), 0)>
                    <h2>"Inscribite hoy"</h2>
                    <p>
                        "Este es un grupo reducido. Si querés priorizar tu práctica y recibir \
                         acompañamiento directo, reservá tu lugar ahora."
                    </p>

                    <div node_ref=cta class="enroll-actions" style=move || CTA.style(cta_shown.get(), 0)>
                        <a
                            class="btn-primary"
                            href=ENROLLMENT_FORM_URL
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "Completar el formulario ↗"
                        </a>
                    </div>

                    <a class="contact-link" href=format!("mailto:{}", CONTACT_EMAIL)>
                        {format!("✉ ¿Preguntas? Escribinos a {}", CONTACT_EMAIL)}
                    </a>

                    <div class="divider"></div>

                    <div class="instructor-bio">
                        <span class="eyebrow">"Autor del curso"</span>
                        <h3>{INSTRUCTOR.name}</h3>
                        <p>{INSTRUCTOR.bio}</p>
                        <div class="socials">
                            {INSTRUCTOR
                                .socials
                                .iter()
                                .map(|social| view! { <a href=social.href>{social.label}</a> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>

            <footer class="site-footer">
                <span class="wordmark">{COURSE_TITLE}</span>
                <span class="muted">"© 2026 Todos los derechos reservados"</span>
            </footer>
        </section>
    }
}
