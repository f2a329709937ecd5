use super::module_section::module_anchor;
use crate::config::NAV_REVEAL_FRACTION;
use crate::content::{modules, COURSE_TITLE};
use crate::scroll::{scroll_to_anchor, viewport, WindowListener};
use leptos::*;

const NAV_ITEMS: [(&str, &str); 3] = [
    ("curso", "Curso"),
    ("calendario", "Calendario"),
    ("inscripcion", "Inscripción"),
];
const MODULES_TARGET: &str = "modulos";

pub fn nav_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * NAV_REVEAL_FRACTION
}

/// Fixed wordmark plus the in-page nav that fades in after the hero.
///
/// The highlighted item is the last one clicked, not the section in view.
#[component]
pub fn Navigation() -> impl IntoView {
    let (visible, set_visible) = create_signal(false);
    let last_clicked = create_rw_signal(None::<&'static str>);
    let dropdown_open = create_rw_signal(false);

    let update_visibility = move || {
        if let Some((scroll_y, height)) = viewport() {
            let now = nav_visible(scroll_y, height);
            if visible.get_untracked() != now {
                set_visible.set(now);
            }
        }
    };
    update_visibility();
    let listener = WindowListener::passive("scroll", update_visibility);
    on_cleanup(move || drop(listener));

    let go_to = move |target: &'static str| {
        if scroll_to_anchor(target) {
            last_clicked.set(Some(target));
        }
    };
    let item_class = move |target: &'static str| {
        if last_clicked.get() == Some(target) {
            "nav-item active"
        } else {
            "nav-item"
        }
    };

    view! {
        <div class=move || if visible.get() { "wordmark dimmed" } else { "wordmark" }>
            {COURSE_TITLE}
        </div>

        <nav class=move || if visible.get() { "site-nav visible" } else { "site-nav" }>
            <ul>
                {NAV_ITEMS
                    .iter()
                    .map(|&(target, label)| view! {
                        <li>
                            <button class=move || item_class(target) on:click=move |_| go_to(target)>
                                {label}
                            </button>
                        </li>
                    })
                    .collect_view()}
                <li class="nav-dropdown">
                    <button
                        class=move || item_class(MODULES_TARGET)
                        aria-expanded=move || dropdown_open.get().to_string()
                        on:click=move |_| dropdown_open.update(|open| *open = !*open)
                    >
                        "Módulos"
                    </button>
                    <Show when=move || dropdown_open.get()>
                        <div class="dropdown-menu">
                            {modules()
                                .iter()
                                .map(|module| {
                                    let id = module.id;
                                    view! {
                                        <button on:click=move |_| {
                                            if scroll_to_anchor(&module_anchor(id)) {
                                                last_clicked.set(Some(MODULES_TARGET));
                                            }
                                            dropdown_open.set(false);
                                        }>
                                            {module.title}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </li>
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_visibility_threshold() {
        assert!(!nav_visible(0.0, 1000.0));
        assert!(!nav_visible(500.0, 1000.0));
        assert!(nav_visible(501.0, 1000.0));
    }
}
