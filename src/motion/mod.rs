//! Animation primitives: easing, visual states, timelines and reveals.
//!
//! Everything except [`FrameClock`] is pure and runs natively in tests.

mod clock;
mod ease;
mod reveal;
mod timeline;
mod visual;

pub use clock::FrameClock;
pub use ease::Ease;
pub use reveal::Reveal;
pub use timeline::{Span, Timeline};
pub use visual::{Length, VisualState};

/// End of the entrance phase of a pinned section, in normalized progress.
pub const ENTRANCE_END: f64 = 0.3;
/// Start of the exit phase of a pinned section, in normalized progress.
pub const EXIT_START: f64 = 0.7;

/// The three phases of a pinned section's scrubbed timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entrance,
    Settle,
    Exit,
}

impl Phase {
    pub fn of(progress: f64) -> Self {
        if progress < ENTRANCE_END {
            Phase::Entrance
        } else if progress < EXIT_START {
            Phase::Settle
        } else {
            Phase::Exit
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Entrance => "entrance",
            Phase::Settle => "settle",
            Phase::Exit => "exit",
        }
    }
}
