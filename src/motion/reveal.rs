use super::{Ease, VisualState};

/// A one-shot entrance that plays when an element scrolls into view and
/// reverses when it scrolls back out.
///
/// Played with CSS transitions, so only the two end states are computed here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub hidden: VisualState,
    pub duration_s: f64,
    pub ease: Ease,
    /// Delay between consecutive items of a revealed group.
    pub stagger_s: f64,
    /// Fraction of viewport height the element's top must rise above.
    pub threshold: f64,
}

impl Reveal {
    pub const fn new(hidden: VisualState, duration_s: f64, threshold: f64) -> Self {
        Reveal {
            hidden,
            duration_s,
            ease: Ease::Power2Out,
            stagger_s: 0.0,
            threshold,
        }
    }

    pub const fn stagger(self, stagger_s: f64) -> Self {
        Reveal { stagger_s, ..self }
    }

    /// Whether an element whose top is at `element_top` (viewport coordinates)
    /// should be revealed.
    pub fn is_triggered(&self, element_top: f64, viewport_height: f64) -> bool {
        element_top <= viewport_height * self.threshold
    }

    /// Inline style for item `index` of the group.
    pub fn style(&self, revealed: bool, index: usize) -> String {
        let state = if revealed { VisualState::REST } else { self.hidden };
        format!(
            "{} transition: opacity {d:.2}s {e}, transform {d:.2}s {e}; transition-delay: {delay:.2}s;",
            state.to_style(),
            d = self.duration_s,
            e = self.ease.css(),
            delay = self.stagger_s * index as f64,
        )
    }
}
