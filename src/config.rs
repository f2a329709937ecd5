//! Build-time site settings and animation tuning.

use crate::motion::Ease;

/// Sub-path the site is deployed under, without a trailing slash.
///
/// Override at build time with `POETICA_BASE_PATH=/otra-ruta trunk build`.
/// Keep `public_url` in `Trunk.toml` in sync.
pub const BASE_PATH: &str = match option_env!("POETICA_BASE_PATH") {
    Some(path) => path,
    None => "/poetica-de-la-mirada",
};

/// Prefix a root-relative asset path (e.g. `/images/hero_bg.jpg`) with the base path.
pub fn asset(path: &str) -> String {
    format!("{}{}", BASE_PATH.trim_end_matches('/'), path)
}

/// Extra scroll distance, as a fraction of viewport height, each pinned
/// section holds the screen for.
pub const HERO_PIN_DISTANCE: f64 = 1.3;
pub const OVERVIEW_PIN_DISTANCE: f64 = 1.3;
pub const MODULE_PIN_DISTANCE: f64 = 1.2;

/// The nav bar appears once the page is scrolled past this fraction of the viewport.
pub const NAV_REVEAL_FRACTION: f64 = 0.5;

/// Tuning for the snap coordinator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    /// Tolerance around each pinned range, in fractions of total scroll.
    pub epsilon: f64,
    pub min_duration_s: f64,
    pub max_duration_s: f64,
    /// Snap duration per viewport-height of travel, before clamping.
    pub seconds_per_viewport: f64,
    /// Quiet period after the last scroll event before a snap is attempted.
    pub idle_ms: u64,
    pub ease: Ease,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.02,
            min_duration_s: 0.15,
            max_duration_s: 0.35,
            seconds_per_viewport: 0.5,
            idle_ms: 150,
            ease: Ease::Power2Out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_has_no_trailing_slash() {
        assert!(BASE_PATH.starts_with('/'));
        assert!(!BASE_PATH.ends_with('/') || BASE_PATH == "/");
    }

    #[test]
    fn test_asset_joins_with_single_slash() {
        let url = asset("/images/hero_bg.jpg");
        assert!(url.ends_with("/images/hero_bg.jpg"));
        assert!(!url.contains("//"));
    }

    #[test]
    fn test_snap_defaults_are_consistent() {
        let config = SnapConfig::default();
        assert!(config.min_duration_s < config.max_duration_s);
        assert!(config.epsilon > 0.0 && config.epsilon < 0.1);
    }
}
