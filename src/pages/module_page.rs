use crate::config::asset;
use crate::content::{
    modules, neighbours, progress_percent, ContentBlock, Module, Neighbours, NextStep,
    ResourceKind, SidebarStatus, COURSE_TITLE,
};
use crate::motion::{Ease, FrameClock, Length, Span, Timeline, VisualState};
use crate::routes::{home_href, module_href, resolve_module, ModuleIdError, MODULE_ID_PARAM};
use leptos::*;
use leptos_router::{use_params_map, A};

/// Number of blocks that fade in when a module page opens.
const ENTRANCE_BLOCKS: usize = 7;

/// Content blocks rise and fade in one after another, in seconds.
pub fn entrance_timeline(blocks: usize) -> Timeline<usize> {
    let indices: Vec<usize> = (0..blocks).collect();
    Timeline::new().from_to_each(
        &indices,
        VisualState::REST.with_y(Length::px(30.0)).with_opacity(0.0),
        VisualState::REST,
        Span::at(0.0).lasting(0.6).stagger(0.1).ease(Ease::Power2Out),
    )
}

pub fn resource_glyph(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Pdf => "📄",
        ResourceKind::Book => "📖",
        ResourceKind::Other(_) => "⬇",
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
pub fn ModulePage() -> impl IntoView {
    let params = use_params_map();
    let resolved = create_memo(move |_| {
        params.with(|p| resolve_module(p.get(MODULE_ID_PARAM).map(String::as_str).unwrap_or("")))
    });

    // Runs on every module change.
    create_effect(move |_| {
        if resolved.with(Result::is_ok) {
            scroll_to_top();
        }
    });

    move || match resolved.get() {
        Ok(module) => view! { <ModuleDetail module=module/> }.into_view(),
        Err(error) => {
            log::debug!("module route did not resolve: {}", error);
            view! { <ModuleNotFound error=error/> }.into_view()
        }
    }
}

#[component]
fn ModuleNotFound(error: ModuleIdError) -> impl IntoView {
    view! {
        <main class="container not-found">
            <header>
                <h1>"Módulo no encontrado"</h1>
                <p class="tagline">{error.to_string()}</p>
            </header>
            <nav class="back-nav">
                <A href=home_href()>"← Volver al inicio"</A>
            </nav>
        </main>
    }
}

#[component]
fn ModuleDetail(module: &'static Module) -> impl IntoView {
    let sidebar_open = create_rw_signal(false);
    // Page-local toggle; the sidebar's completed badges never read it.
    let marked_complete = create_rw_signal(false);

    let entrance_time = create_rw_signal(0.0);
    let entrance = store_value(entrance_timeline(ENTRANCE_BLOCKS));
    let clock = FrameClock::start(entrance.with_value(Timeline::duration), move |t| {
        entrance_time.set(t)
    });
    on_cleanup(move || drop(clock));
    let enter = move |block: usize| {
        entrance.with_value(|tl| tl.state_at(block, entrance_time.get()).to_style())
    };

    let progress = progress_percent(module.id, modules().len());
    let Neighbours { previous, next } = neighbours(module.id);

    let toggle_complete = move |_| marked_complete.update(|done| *done = !*done);

    view! {
        <div class="module-page">
            <button
                class="sidebar-toggle"
                aria-label="Mostrar módulos"
                on:click=move |_| sidebar_open.update(|open| *open = !*open)
            >
                {move || if sidebar_open.get() { "✕" } else { "☰" }}
            </button>

            <aside class=move || if sidebar_open.get() { "sidebar open" } else { "sidebar" }>
                <div class="sidebar-head">
                    <A href=home_href() class="wordmark">{COURSE_TITLE}</A>
                    <p class="eyebrow">"Módulos del curso"</p>
                </div>

                <div class="progress">
                    <div class="progress-label">
                        <span>"Progreso"</span>
                        <span class="accent">{format!("{}%", progress)}</span>
                    </div>
                    <div class="progress-track">
                        <div class="progress-fill" style=format!("width: {}%;", progress)></div>
                    </div>
                </div>

                <nav class="sidebar-modules">
                    {modules()
                        .iter()
                        .map(|m| {
                            let status = SidebarStatus::of(m.id, module.id);
                            let active = m.id == module.id;
                            let class = match (active, status) {
                                (true, _) => "sidebar-link active",
                                (false, SidebarStatus::Locked) => "sidebar-link locked",
                                _ => "sidebar-link",
                            };
                            // Following a link closes the mobile sidebar.
                            view! {
                                <div on:click=move |_| sidebar_open.set(false)>
                                    <A href=module_href(m.id) class=class>
                                        <span class="status">{status.glyph(active)}</span>
                                        <span class="sidebar-link-text">
                                            <span class="eyebrow">{format!("Módulo {}", m.id)}</span>
                                            <span>{m.title}</span>
                                        </span>
                                    </A>
                                </div>
                            }
                        })
                        .collect_view()}
                </nav>

                <div class="student">
                    <span class="avatar">"👤"</span>
                    <div>
                        <p>"Estudiante"</p>
                        <p class="muted">"en curso"</p>
                    </div>
                </div>
            </aside>

            <Show when=move || sidebar_open.get()>
                <div class="sidebar-overlay" on:click=move |_| sidebar_open.set(false)></div>
            </Show>

            <main class="module-main">
                <header class="module-header">
                    <nav class="breadcrumb">
                        <A href=home_href()>"Curso"</A>
                        <span>"›"</span>
                        <A href=home_href()>"Módulos"</A>
                        <span>"›"</span>
                        <span class="accent">{format!("Módulo {}", module.id)}</span>
                    </nav>
                    <div class="module-title-row">
                        <div>
                            <h1>{module.title}</h1>
                            <div class="module-meta">
                                <span>{format!("◷ {}", module.duration)}</span>
                                <span class="eyebrow accent">{module.badge}</span>
                            </div>
                        </div>
                        <button
                            class=move || if marked_complete.get() { "mark-complete done" } else { "mark-complete" }
                            on:click=toggle_complete
                        >
                            {move || if marked_complete.get() { "✓ Completado" } else { "○ Marcar completado" }}
                        </button>
                    </div>
                </header>

                <div class="module-body">
                    <div class="module-hero" style=move || enter(0)>
                        <img src=asset(module.image) alt=module.title/>
                    </div>

                    <section style=move || enter(1)>
                        <h2>"Introducción"</h2>
                        <p class="lead">{module.description}</p>
                    </section>

                    <section style=move || enter(2)>
                        <h2>"Objetivos de aprendizaje"</h2>
                        <ol class="objectives">
                            {module
                                .objectives
                                .iter()
                                .enumerate()
                                .map(|(i, objective)| view! {
                                    <li>
                                        <span class="objective-number">{i + 1}</span>
                                        <span>{*objective}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ol>
                    </section>

                    <section style=move || enter(3)>
                        <h2>"Contenido del módulo"</h2>
                        <div class="content-blocks">
                            {module.content.iter().map(content_block).collect_view()}
                        </div>
                    </section>

                    <section class="exercise" style=move || enter(4)>
                        <div class="exercise-head">
                            <span class="glyph">"⬆"</span>
                            <div>
                                <h2>"Ejercicio práctico"</h2>
                                <span class="eyebrow">{format!("Entrega: {}", module.exercise.deadline)}</span>
                            </div>
                        </div>
                        <h3>{module.exercise.title}</h3>
                        <p>{module.exercise.description}</p>
                        <button class="btn-primary">"⬆ Subir trabajo"</button>
                    </section>

                    <section style=move || enter(5)>
                        <h2>"Recursos y referencias"</h2>
                        <div class="resources">
                            {module
                                .resources
                                .iter()
                                .map(|resource| view! {
                                    <a class="resource" href="#">
                                        <span class="glyph">{resource_glyph(resource.kind)}</span>
                                        <span class="resource-text">
                                            <span>{resource.title}</span>
                                            <span class="eyebrow">{resource.kind.tag()}</span>
                                        </span>
                                        <span class="glyph">"↗"</span>
                                    </a>
                                })
                                .collect_view()}
                        </div>
                    </section>

                    <footer class="module-footer" style=move || enter(6)>
                        {match previous {
                            Some(prev) => view! {
                                <A href=module_href(prev.id) class="footer-link">
                                    <span class="eyebrow">"‹ Anterior"</span>
                                    <span>{prev.title}</span>
                                </A>
                            }
                            .into_view(),
                            None => view! { <div></div> }.into_view(),
                        }}
                        {match next {
                            NextStep::Module(following) => view! {
                                <A href=module_href(following.id) class="footer-link primary">
                                    <span class="eyebrow">"Siguiente ›"</span>
                                    <span>{following.title}</span>
                                </A>
                            }
                            .into_view(),
                            NextStep::Home => view! {
                                <A href=home_href() class="footer-link primary">
                                    <span class="eyebrow">"Finalizar ›"</span>
                                    <span>"Volver al inicio"</span>
                                </A>
                            }
                            .into_view(),
                        }}
                    </footer>
                </div>
            </main>
        </div>
    }
}

fn content_block(block: &ContentBlock) -> View {
    match *block {
        ContentBlock::Text { title, body } => view! {
            <div class="text-block">
                <h3>{title}</h3>
                <div class="body">{body}</div>
            </div>
        }
        .into_view(),
        ContentBlock::Quote { quote, author } => view! {
            <blockquote>
                <p>{format!("“{}”", quote)}</p>
                <cite>{format!("— {}", author)}</cite>
            </blockquote>
        }
        .into_view(),
    }
}
