/// A CSS length made of pixel, viewport-width and viewport-height parts.
///
/// Keeping the parts separate lets a value interpolate between e.g. `-55vw`
/// and `0px` without knowing the viewport size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length {
    pub px: f64,
    pub vw: f64,
    pub vh: f64,
}

impl Length {
    pub const ZERO: Length = Length { px: 0.0, vw: 0.0, vh: 0.0 };

    pub const fn px(px: f64) -> Self {
        Length { px, vw: 0.0, vh: 0.0 }
    }

    pub const fn vw(vw: f64) -> Self {
        Length { px: 0.0, vw, vh: 0.0 }
    }

    pub const fn vh(vh: f64) -> Self {
        Length { px: 0.0, vw: 0.0, vh }
    }

    pub fn lerp(self, to: Length, t: f64) -> Length {
        Length {
            px: lerp(self.px, to.px, t),
            vw: lerp(self.vw, to.vw, t),
            vh: lerp(self.vh, to.vh, t),
        }
    }

    pub fn add(self, other: Length) -> Length {
        Length {
            px: self.px + other.px,
            vw: self.vw + other.vw,
            vh: self.vh + other.vh,
        }
    }

    pub fn to_css(&self) -> String {
        let terms: Vec<String> = [(self.px, "px"), (self.vw, "vw"), (self.vh, "vh")]
            .iter()
            .filter(|(v, _)| v.abs() > 1e-6)
            .map(|(v, unit)| format!("{:.3}{}", v, unit))
            .collect();
        match terms.len() {
            0 => "0px".to_string(),
            1 => terms[0].clone(),
            _ => format!("calc({})", terms.join(" + ")),
        }
    }
}

/// Everything an animated element can vary: offset, opacity and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub x: Length,
    pub y: Length,
    pub opacity: f64,
    pub scale: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

impl VisualState {
    /// In place, fully opaque, unscaled.
    pub const REST: VisualState = VisualState {
        x: Length::ZERO,
        y: Length::ZERO,
        opacity: 1.0,
        scale: 1.0,
    };

    pub const fn with_x(self, x: Length) -> Self {
        VisualState { x, ..self }
    }

    pub const fn with_y(self, y: Length) -> Self {
        VisualState { y, ..self }
    }

    pub const fn with_opacity(self, opacity: f64) -> Self {
        VisualState { opacity, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        VisualState { scale, ..self }
    }

    pub fn lerp(self, to: VisualState, t: f64) -> VisualState {
        VisualState {
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            opacity: lerp(self.opacity, to.opacity, t),
            scale: lerp(self.scale, to.scale, t),
        }
    }

    /// Layer two independent animations on the same element.
    ///
    /// Offsets add, opacity and scale multiply, so `REST` is the identity.
    pub fn compose(self, other: VisualState) -> VisualState {
        VisualState {
            x: self.x.add(other.x),
            y: self.y.add(other.y),
            opacity: self.opacity * other.opacity,
            scale: self.scale * other.scale,
        }
    }

    /// Inline style declarations for this state.
    pub fn to_style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translate3d({}, {}, 0) scale({:.4});",
            self.opacity.clamp(0.0, 1.0),
            self.x.to_css(),
            self.y.to_css(),
            self.scale
        )
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
