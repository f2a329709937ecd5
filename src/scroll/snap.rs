use super::PinnedRegion;
use crate::config::SnapConfig;
use crate::motion::Ease;

/// A pinned region expressed as fractions of the maximum scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinnedRange {
    pub start: f64,
    pub end: f64,
}

impl PinnedRange {
    pub fn center(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    fn contains(&self, fraction: f64, epsilon: f64) -> bool {
        fraction >= self.start - epsilon && fraction <= self.end + epsilon
    }
}

/// Snap targets for one landing page layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapRanges {
    ranges: Vec<PinnedRange>,
    epsilon: f64,
}

impl SnapRanges {
    /// Convert measured regions to fractions of `max_scroll`.
    ///
    /// Returns `None` when there is nothing to snap to: no regions, or a page
    /// that does not scroll.
    pub fn from_regions(regions: &[PinnedRegion], max_scroll: f64, epsilon: f64) -> Option<Self> {
        if regions.is_empty() || max_scroll <= 0.0 {
            return None;
        }
        let ranges = regions
            .iter()
            .map(|region| PinnedRange {
                start: region.start / max_scroll,
                end: region.end / max_scroll,
            })
            .collect();
        Some(SnapRanges::new(ranges, epsilon))
    }

    pub fn new(ranges: Vec<PinnedRange>, epsilon: f64) -> Self {
        SnapRanges { ranges, epsilon }
    }

    pub fn ranges(&self) -> &[PinnedRange] {
        &self.ranges
    }

    /// Fraction to settle on from `fraction`, or `None` when it lies outside
    /// every range (widened by epsilon).
    ///
    /// Among all ranges, the one whose center is nearest wins; ties go to the
    /// earlier range.
    pub fn target(&self, fraction: f64) -> Option<f64> {
        if !self
            .ranges
            .iter()
            .any(|range| range.contains(fraction, self.epsilon))
        {
            return None;
        }
        self.ranges
            .iter()
            .map(PinnedRange::center)
            .fold(None, |best: Option<f64>, center| match best {
                Some(b) if (b - fraction).abs() <= (center - fraction).abs() => Some(b),
                _ => Some(center),
            })
    }
}

/// Snap duration for travelling `distance_px`, proportional to the distance in
/// viewport heights and clamped to the configured bounds.
pub fn snap_duration(distance_px: f64, viewport_height: f64, config: &SnapConfig) -> f64 {
    let viewports = if viewport_height > 0.0 {
        distance_px.abs() / viewport_height
    } else {
        0.0
    };
    (viewports * config.seconds_per_viewport).clamp(config.min_duration_s, config.max_duration_s)
}

/// One eased scroll from `from_px` to `to_px`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapAnimation {
    pub from_px: f64,
    pub to_px: f64,
    pub duration_s: f64,
    pub ease: Ease,
}

impl SnapAnimation {
    pub fn new(from_px: f64, to_px: f64, viewport_height: f64, config: &SnapConfig) -> Self {
        SnapAnimation {
            from_px,
            to_px,
            duration_s: snap_duration(to_px - from_px, viewport_height, config),
            ease: config.ease,
        }
    }

    pub fn position_at(&self, elapsed_s: f64) -> f64 {
        let t = if self.duration_s > 0.0 {
            elapsed_s / self.duration_s
        } else {
            1.0
        };
        self.from_px + (self.to_px - self.from_px) * self.ease.apply(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_ranges() -> SnapRanges {
        SnapRanges::new(
            vec![
                PinnedRange { start: 0.10, end: 0.22 },
                PinnedRange { start: 0.40, end: 0.55 },
            ],
            0.02,
        )
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_snaps_to_nearest_center() {
        let target = two_ranges().target(0.20).unwrap();
        assert!(close(target, 0.16), "Expected 0.16, got {}", target);
        let target = two_ranges().target(0.50).unwrap();
        assert!(close(target, 0.475), "Expected 0.475, got {}", target);
    }

    #[test]
    fn test_no_snap_outside_ranges() {
        assert_eq!(two_ranges().target(0.70), None);
        assert_eq!(two_ranges().target(0.30), None);
        assert_eq!(two_ranges().target(0.0), None);
    }

    #[test]
    fn test_epsilon_widens_ranges() {
        let ranges = two_ranges();
        assert!(ranges.target(0.235).is_some());
        assert!(ranges.target(0.085).is_some());
        assert_eq!(ranges.target(0.245), None);
        assert_eq!(ranges.target(0.075), None);
    }

    #[test]
    fn test_nearest_center_may_belong_to_another_range() {
        // Inside the first (wide) range but closer to the second's center.
        let ranges = SnapRanges::new(
            vec![
                PinnedRange { start: 0.0, end: 0.6 },
                PinnedRange { start: 0.55, end: 0.65 },
            ],
            0.02,
        );
        assert!(close(ranges.target(0.58).unwrap(), 0.60));
    }

    #[test]
    fn test_from_regions_uses_max_scroll() {
        let regions = [PinnedRegion::new(1000.0, 1200.0), PinnedRegion::new(4000.0, 1500.0)];
        let ranges = SnapRanges::from_regions(&regions, 10000.0, 0.02).unwrap();
        assert_eq!(
            ranges.ranges(),
            &[
                PinnedRange { start: 0.10, end: 0.22 },
                PinnedRange { start: 0.40, end: 0.55 },
            ]
        );
    }

    #[test]
    fn test_from_regions_degenerate_inputs() {
        assert_eq!(SnapRanges::from_regions(&[], 5000.0, 0.02), None);
        let regions = [PinnedRegion::new(0.0, 100.0)];
        assert_eq!(SnapRanges::from_regions(&regions, 0.0, 0.02), None);
        assert_eq!(SnapRanges::from_regions(&regions, -10.0, 0.02), None);
    }

    #[test]
    fn test_duration_is_clamped() {
        let config = SnapConfig::default();
        assert_eq!(snap_duration(1.0, 1000.0, &config), config.min_duration_s);
        assert_eq!(snap_duration(50_000.0, 1000.0, &config), config.max_duration_s);
        let mid = snap_duration(500.0, 1000.0, &config);
        assert!(close(mid, 0.25), "Expected 0.25, got {}", mid);
        assert_eq!(snap_duration(-50_000.0, 1000.0, &config), config.max_duration_s);
        assert_eq!(snap_duration(300.0, 0.0, &config), config.min_duration_s);
    }

    #[test]
    fn test_animation_endpoints() {
        let anim = SnapAnimation::new(1000.0, 1400.0, 1000.0, &SnapConfig::default());
        assert_eq!(anim.position_at(0.0), 1000.0);
        assert_eq!(anim.position_at(anim.duration_s), 1400.0);
        assert_eq!(anim.position_at(10.0), 1400.0);
        let half = anim.position_at(anim.duration_s / 2.0);
        assert!(half > 1200.0, "Power2 out should be past halfway at t=0.5: {}", half);
    }
}
