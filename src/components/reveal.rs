use crate::motion::Reveal;
use crate::scroll::{viewport, WindowListener};
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether the element behind `target` has crossed the reveal threshold.
///
/// Checks once after the element mounts and again on every scroll; the
/// listener and the pending frame are released with the owning component.
pub fn use_reveal(target: NodeRef<html::Div>, reveal: Reveal) -> ReadSignal<bool> {
    let (revealed, set_revealed) = create_signal(false);

    let check = move || {
        let Some(element) = target.get_untracked() else {
            return;
        };
        let Some((_, viewport_height)) = viewport() else {
            return;
        };
        let top = element.get_bounding_client_rect().top();
        let triggered = reveal.is_triggered(top, viewport_height);
        if revealed.get_untracked() != triggered {
            set_revealed.set(triggered);
        }
    };

    let listener = WindowListener::passive("scroll", check);
    let first_frame = Rc::new(Cell::new(None));
    let pending = Rc::clone(&first_frame);
    target.on_load(move |_| match request_animation_frame_with_handle(check) {
        Ok(handle) => pending.set(Some(handle)),
        Err(err) => log::warn!("could not request animation frame: {:?}", err),
    });

    on_cleanup(move || {
        if let Some(handle) = first_frame.take() {
            handle.cancel();
        }
        drop(listener);
    });

    revealed
}
