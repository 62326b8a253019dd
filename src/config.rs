//! Tunable thresholds and durations for the carousel.
//!
//! Defaults match the behaviour of the hand-written site script. A page can
//! override any subset through a JSON `data-carousel-config` attribute on the
//! mount root.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid carousel config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("jitter threshold {jitter_px}px must be below swipe threshold {swipe_commit_px}px")]
    JitterAboveSwipe { jitter_px: f64, swipe_commit_px: f64 },
    #[error("max_zoom must be greater than 1 (got {0})")]
    MaxZoom(f64),
    #[error("double_tap_zoom {value} must lie in (1, {max_zoom}]")]
    DoubleTapZoom { value: f64, max_zoom: f64 },
    #[error("`{field}` {value} must lie in {range}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        range: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Movement below this many px still counts as a tap.
    pub jitter_px: f64,
    /// Horizontal travel needed to commit a swipe.
    pub swipe_commit_px: f64,
    /// Window for the second tap of a double-tap, inclusive.
    pub double_tap_ms: f64,
    pub max_zoom: f64,
    pub double_tap_zoom: f64,
    pub settle_ms: u32,
    pub fade_ms: u32,
    pub fade_opacity: f64,
    pub narrow_breakpoint_px: f64,
    /// Scale applied to the side cards on narrow viewports.
    pub side_scale: f64,
    pub resize_debounce_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            jitter_px: 5.0,
            swipe_commit_px: 50.0,
            double_tap_ms: 300.0,
            max_zoom: 4.0,
            double_tap_zoom: 2.0,
            settle_ms: 180,
            fade_ms: 150,
            fade_opacity: 0.5,
            narrow_breakpoint_px: 1024.0,
            side_scale: 0.85,
            resize_debounce_ms: 100,
        }
    }
}

impl CarouselConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse overrides, falling back to the defaults when they are unusable.
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        match raw.map(Self::from_json) {
            Some(Ok(config)) => config,
            Some(Err(err)) => {
                log::warn!("ignoring carousel config: {err}");
                Self::default()
            }
            None => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("jitter_px", self.jitter_px),
            ("swipe_commit_px", self.swipe_commit_px),
            ("double_tap_ms", self.double_tap_ms),
            ("settle_ms", self.settle_ms as f64),
            ("fade_ms", self.fade_ms as f64),
            ("narrow_breakpoint_px", self.narrow_breakpoint_px),
            ("resize_debounce_ms", self.resize_debounce_ms as f64),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if self.jitter_px >= self.swipe_commit_px {
            return Err(ConfigError::JitterAboveSwipe {
                jitter_px: self.jitter_px,
                swipe_commit_px: self.swipe_commit_px,
            });
        }
        if !(self.max_zoom > 1.0) {
            return Err(ConfigError::MaxZoom(self.max_zoom));
        }
        if !(self.double_tap_zoom > 1.0 && self.double_tap_zoom <= self.max_zoom) {
            return Err(ConfigError::DoubleTapZoom {
                value: self.double_tap_zoom,
                max_zoom: self.max_zoom,
            });
        }
        if !(self.side_scale > 0.0 && self.side_scale <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "side_scale",
                value: self.side_scale,
                range: "(0, 1]",
            });
        }
        if !(0.0..=1.0).contains(&self.fade_opacity) {
            return Err(ConfigError::OutOfRange {
                field: "fade_opacity",
                value: self.fade_opacity,
                range: "[0, 1]",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(CarouselConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = CarouselConfig::from_json(r#"{ "swipe_commit_px": 80 }"#).unwrap();
        assert_eq!(config.swipe_commit_px, 80.0);
        assert_eq!(config.jitter_px, 5.0);
        assert_eq!(config.settle_ms, 180);
    }

    #[test]
    fn jitter_must_stay_below_swipe_threshold() {
        let err = CarouselConfig::from_json(r#"{ "jitter_px": 60 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::JitterAboveSwipe { .. }));
    }

    #[test]
    fn double_tap_zoom_is_bounded_by_max_zoom() {
        let err = CarouselConfig::from_json(r#"{ "max_zoom": 3, "double_tap_zoom": 3.5 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::DoubleTapZoom { .. }));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let err = CarouselConfig::from_json(r#"{ "settle_ms": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NotPositive {
                field: "settle_ms",
                ..
            }
        ));
    }

    #[test]
    fn broken_json_falls_back_to_defaults() {
        let config = CarouselConfig::from_json_or_default(Some("{ not json"));
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(
            CarouselConfig::from_json_or_default(None),
            CarouselConfig::default()
        );
    }
}
