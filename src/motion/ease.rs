/// Easing curves used by timelines and CSS transitions.
///
/// `Power2*` follow the usual animation-library naming: power2 is a cubic curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power2In,
    Power2Out,
}

impl Ease {
    /// Map linear progress `t` in [0, 1] to eased progress.
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power2In => t * t * t,
            Ease::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }

    /// Equivalent CSS `transition-timing-function`.
    pub fn css(&self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::Power2In => "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 3] = [Ease::Linear, Ease::Power2In, Ease::Power2Out];

    #[test]
    fn test_endpoints_are_exact() {
        for ease in ALL {
            assert_eq!(ease.apply(0.0), 0.0, "{:?} at 0", ease);
            assert_eq!(ease.apply(1.0), 1.0, "{:?} at 1", ease);
        }
    }

    #[test]
    fn test_input_is_clamped() {
        for ease in ALL {
            assert_eq!(ease.apply(-0.5), 0.0);
            assert_eq!(ease.apply(1.5), 1.0);
        }
    }

    #[test]
    fn test_monotonic() {
        for ease in ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = ease.apply(i as f64 / 100.0);
                assert!(v >= prev, "{:?} decreased at step {}", ease, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_in_and_out_are_mirrored() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let sum = Ease::Power2In.apply(t) + Ease::Power2Out.apply(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_out_leads_in_at_midpoint() {
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power2In.apply(0.5) < 0.5);
        assert!((Ease::Linear.apply(0.5) - 0.5).abs() < 1e-12);
    }
}
