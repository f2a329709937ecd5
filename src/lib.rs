pub mod components;
pub mod config;
pub mod content;
pub mod logging;
pub mod motion;
pub mod pages;
pub mod routes;
pub mod scroll;

use config::BASE_PATH;
use leptos::*;
use leptos_router::*;
use pages::{LandingPage, ModulePage, NotFoundPage};
use routes::{FALLBACK_PATH, HOME_PATH, MODULE_PATH};
use scroll::restoration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

/// Reloads on back/forward navigation: Leptos 0.6 `<Routes>` does not always
/// re-render on `popstate`, so the app restarts at the new URL instead.
fn reload_on_history_navigation() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let reload = Closure::<dyn Fn()>::new(|| {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                log::warn!("reload after history navigation failed: {:?}", err);
            }
        }
    });
    if let Err(err) =
        window.add_event_listener_with_callback("popstate", reload.as_ref().unchecked_ref())
    {
        log::warn!("could not listen for popstate: {:?}", err);
    }
    // Lives as long as the app.
    reload.forget();
}

/// Routes wrapped in an error boundary with a reload button.
#[component]
fn Root() -> impl IntoView {
    view! {
        <ErrorBoundary fallback=|errors| view! {
            <main class="container">
                <div class="error-container">
                    <h2>"Algo salió mal"</h2>
                    <p>"La página encontró un error. Probá recargarla."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect_view()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>"Recargar"</button>
                </div>
            </main>
        }>
            <RootInner/>
        </ErrorBoundary>
    }
}

#[component]
fn RootInner() -> impl IntoView {
    view! {
        <Router>
            <Routes base=BASE_PATH.to_string()>
                <Route path=HOME_PATH view=LandingPage/>
                <Route path=MODULE_PATH view=ModulePage/>
                <Route path=FALLBACK_PATH view=NotFoundPage/>
            </Routes>
        </Router>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    restoration::setup_scroll_restoration();
    reload_on_history_navigation();
    mount_to_body(Root);
    // Content must be laid out before the saved offset is reachable.
    restoration::restore_scroll_after_delay(50);
}
