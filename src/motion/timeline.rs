use super::{Ease, VisualState};

/// Where a tween sits on its timeline.
///
/// Units are whatever the timeline is driven by: normalized scroll progress
/// for pinned sections, seconds for mount intros.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub at: f64,
    pub duration: f64,
    pub ease: Ease,
    /// Offset between consecutive targets when one span covers several.
    pub stagger: f64,
}

impl Span {
    pub const fn at(at: f64) -> Self {
        Span {
            at,
            duration: 0.0,
            ease: Ease::Linear,
            stagger: 0.0,
        }
    }

    pub const fn lasting(self, duration: f64) -> Self {
        Span { duration, ..self }
    }

    pub const fn ease(self, ease: Ease) -> Self {
        Span { ease, ..self }
    }

    pub const fn stagger(self, stagger: f64) -> Self {
        Span { stagger, ..self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween<K> {
    target: K,
    from: VisualState,
    to: VisualState,
    start: f64,
    duration: f64,
    ease: Ease,
}

impl<K> Tween<K> {
    fn end(&self) -> f64 {
        self.start + self.duration
    }

    fn sample(&self, time: f64) -> VisualState {
        if self.duration <= 0.0 {
            return if time >= self.start { self.to } else { self.from };
        }
        let local = (time - self.start) / self.duration;
        if local <= 0.0 {
            self.from
        } else if local >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, self.ease.apply(local))
        }
    }
}

/// A set of from/to tweens over named targets.
///
/// Sampling is a pure function of time: the state of a target at `t` depends
/// only on `t`, never on which direction the timeline was last moved. This is
/// what makes scrubbed sections replay symmetrically when scrolling back.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<K> {
    tweens: Vec<Tween<K>>,
}

impl<K: Copy + PartialEq> Default for Timeline<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq> Timeline<K> {
    pub fn new() -> Self {
        Timeline { tweens: Vec::new() }
    }

    /// Animate one target from `from` to `to` over `span`.
    pub fn from_to(mut self, target: K, from: VisualState, to: VisualState, span: Span) -> Self {
        self.push(target, from, to, span.at, span);
        self
    }

    /// Animate several targets, the i-th one starting `i * span.stagger` later.
    pub fn from_to_each(
        mut self,
        targets: &[K],
        from: VisualState,
        to: VisualState,
        span: Span,
    ) -> Self {
        for (i, target) in targets.iter().enumerate() {
            self.push(*target, from, to, span.at + span.stagger * i as f64, span);
        }
        self
    }

    fn push(&mut self, target: K, from: VisualState, to: VisualState, start: f64, span: Span) {
        self.tweens.push(Tween {
            target,
            from,
            to,
            start,
            duration: span.duration.max(0.0),
            ease: span.ease,
        });
    }

    /// Time at which the last tween finishes.
    pub fn duration(&self) -> f64 {
        self.tweens.iter().map(Tween::end).fold(0.0, f64::max)
    }

    /// Distinct targets in insertion order.
    pub fn targets(&self) -> Vec<K> {
        let mut seen = Vec::new();
        for tween in &self.tweens {
            if !seen.contains(&tween.target) {
                seen.push(tween.target);
            }
        }
        seen
    }

    /// State of `target` at `time`.
    ///
    /// The most recently started tween on the target wins. Before its first
    /// tween a target shows that tween's `from` state; a target with no tweens
    /// is at rest.
    pub fn state_at(&self, target: K, time: f64) -> VisualState {
        let mut first: Option<&Tween<K>> = None;
        let mut current: Option<&Tween<K>> = None;
        for tween in self.tweens.iter().filter(|t| t.target == target) {
            if first.map_or(true, |f| tween.start < f.start) {
                first = Some(tween);
            }
            if tween.start <= time && current.map_or(true, |c| tween.start >= c.start) {
                current = Some(tween);
            }
        }
        match (current, first) {
            (Some(tween), _) => tween.sample(time),
            (None, Some(tween)) => tween.from,
            (None, None) => VisualState::REST,
        }
    }

    /// States of every target at `time`.
    pub fn snapshot(&self, time: f64) -> Vec<(K, VisualState)> {
        self.targets()
            .into_iter()
            .map(|target| (target, self.state_at(target, time)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Length;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Part {
        Badge,
        Headline,
        Line(usize),
        Untouched,
    }

    fn hidden_left() -> VisualState {
        VisualState::REST.with_x(Length::vw(-55.0)).with_opacity(0.0)
    }

    fn sample_timeline() -> Timeline<Part> {
        Timeline::new()
            .from_to(
                Part::Badge,
                VisualState::REST.with_x(Length::vw(20.0)).with_opacity(0.0),
                VisualState::REST,
                Span::at(0.0).lasting(0.24).ease(Ease::Power2Out),
            )
            .from_to(
                Part::Headline,
                hidden_left(),
                VisualState::REST,
                Span::at(0.06).lasting(0.24).ease(Ease::Power2Out),
            )
            .from_to(
                Part::Headline,
                VisualState::REST,
                VisualState::REST.with_x(Length::vw(-14.0)).with_opacity(0.0),
                Span::at(0.7).lasting(0.3).ease(Ease::Power2In),
            )
    }

    #[test]
    fn test_before_first_tween_shows_from_state() {
        let tl = sample_timeline();
        assert_eq!(tl.state_at(Part::Headline, 0.0), hidden_left());
        assert_eq!(tl.state_at(Part::Headline, 0.05), hidden_left());
    }

    #[test]
    fn test_settle_phase_is_static() {
        let tl = sample_timeline();
        let a = tl.snapshot(0.31);
        let b = tl.snapshot(0.5);
        let c = tl.snapshot(0.69);
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(tl.state_at(Part::Headline, 0.5), VisualState::REST);
    }

    #[test]
    fn test_exit_reaches_final_state() {
        let tl = sample_timeline();
        let end = tl.state_at(Part::Headline, 1.0);
        assert_eq!(end.opacity, 0.0);
        assert_eq!(end.x, Length::vw(-14.0));
    }

    #[test]
    fn test_untargeted_element_stays_at_rest() {
        let tl = sample_timeline();
        assert_eq!(tl.state_at(Part::Untouched, 0.5), VisualState::REST);
    }

    #[test]
    fn test_scrubbing_back_restores_initial_state() {
        let tl = sample_timeline();
        let initial = tl.snapshot(0.0);
        // Forward in small steps, then back again.
        for i in 0..=100 {
            let _ = tl.snapshot(i as f64 / 100.0);
        }
        for i in (0..=100).rev() {
            let _ = tl.snapshot(i as f64 / 100.0);
        }
        assert_eq!(tl.snapshot(0.0), initial);
    }

    #[test]
    fn test_same_progress_gives_same_state_in_both_directions() {
        let tl = sample_timeline();
        for i in 0..=20 {
            let p = i as f64 / 20.0;
            let forward = tl.snapshot(p);
            let _ = tl.snapshot(1.0);
            let backward = tl.snapshot(p);
            assert_eq!(forward, backward, "Mismatch at progress {}", p);
        }
    }

    #[test]
    fn test_stagger_offsets_each_target() {
        let tl = Timeline::new().from_to_each(
            &[Part::Line(0), Part::Line(1), Part::Line(2)],
            VisualState::REST.with_opacity(0.0),
            VisualState::REST,
            Span::at(1.0).lasting(1.0).stagger(0.5),
        );
        assert!((tl.duration() - 3.0).abs() < 1e-12);
        // At t = 1.5 the first line is halfway, the second just started, the third not yet.
        assert!((tl.state_at(Part::Line(0), 1.5).opacity - 0.5).abs() < 1e-12);
        assert_eq!(tl.state_at(Part::Line(1), 1.5).opacity, 0.0);
        assert_eq!(tl.state_at(Part::Line(2), 1.5).opacity, 0.0);
        assert_eq!(tl.targets().len(), 3);
    }

    #[test]
    fn test_zero_duration_tween_jumps() {
        let tl = Timeline::new().from_to(
            Part::Badge,
            VisualState::REST.with_opacity(0.0),
            VisualState::REST,
            Span::at(0.5),
        );
        assert_eq!(tl.state_at(Part::Badge, 0.49).opacity, 0.0);
        assert_eq!(tl.state_at(Part::Badge, 0.5).opacity, 1.0);
    }

    #[test]
    fn test_empty_timeline() {
        let tl: Timeline<Part> = Timeline::new();
        assert_eq!(tl.duration(), 0.0);
        assert!(tl.snapshot(0.5).is_empty());
    }
}
