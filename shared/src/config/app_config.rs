//! Application configuration for Cadastro
//!
//! Only presentation settings live here. Submitted form data is never
//! persisted.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// User interface configuration
    pub ui: UiConfig,
}

/// User interface configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Window width in logical pixels (desktop only)
    pub window_width: Option<u32>,

    /// Window height in logical pixels (desktop only)
    pub window_height: Option<u32>,

    /// Base font size
    pub font_size: f32,

    /// Width of the fully opened navigation drawer
    pub drawer_width: f32,

    /// Duration of a full drawer open/close sweep in milliseconds (0 = instant)
    pub drawer_animation_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: Some(420),
            window_height: Some(760),
            font_size: 14.0,
            drawer_width: 280.0,
            drawer_animation_ms: 250,
        }
    }
}

impl AppConfig {
    /// Same configuration with out-of-range values replaced by defaults
    pub fn sanitized(self) -> Self {
        Self {
            ui: self.ui.sanitized(),
        }
    }
}

impl UiConfig {
    /// Replace values the UI cannot use with their defaults
    ///
    /// Sizes must be finite and positive. A zero window dimension counts as
    /// unset.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };

        Self {
            window_width: self.window_width.filter(|w| *w > 0),
            window_height: self.window_height.filter(|h| *h > 0),
            font_size: positive(self.font_size, defaults.font_size),
            drawer_width: positive(self.drawer_width, defaults.drawer_width),
            drawer_animation_ms: self.drawer_animation_ms,
        }
    }

    /// Drawer animation duration
    pub fn drawer_animation(&self) -> Duration {
        Duration::from_millis(self.drawer_animation_ms)
    }

    /// Window size, falling back to the defaults for unset dimensions
    pub fn window_size(&self) -> (u32, u32) {
        let defaults = Self::default();
        (
            self.window_width.or(defaults.window_width).unwrap_or(420),
            self.window_height.or(defaults.window_height).unwrap_or(760),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ui_config() {
        let config = UiConfig::default();
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.drawer_width, 280.0);
        assert_eq!(config.drawer_animation(), Duration::from_millis(250));
        assert_eq!(config.window_size(), (420, 760));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: AppConfig = serde_yaml::from_str("ui:\n  drawer_width: 320.0\n").unwrap();
        assert_eq!(config.ui.drawer_width, 320.0);
        assert_eq!(config.ui.font_size, 14.0);
        assert_eq!(config.ui.drawer_animation_ms, 250);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_window_size_with_unset_dimension() {
        let config = UiConfig {
            window_width: None,
            window_height: Some(900),
            ..UiConfig::default()
        };
        assert_eq!(config.window_size(), (420, 900));
    }

    #[test]
    fn test_sanitized_replaces_unusable_sizes() {
        let config = UiConfig {
            window_width: Some(0),
            window_height: Some(0),
            font_size: f32::NAN,
            drawer_width: -40.0,
            drawer_animation_ms: 0,
        }
        .sanitized();

        assert_eq!(config.window_width, None);
        assert_eq!(config.window_height, None);
        assert_eq!(config.window_size(), (420, 760));
        assert_eq!(config.font_size, 14.0);
        assert_eq!(config.drawer_width, 280.0);
        assert_eq!(config.drawer_animation_ms, 0);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let config = UiConfig {
            window_width: Some(800),
            window_height: None,
            font_size: 18.0,
            drawer_width: 320.0,
            drawer_animation_ms: 100,
        };
        assert_eq!(config.clone().sanitized(), config);

        let infinite = UiConfig {
            font_size: f32::INFINITY,
            ..UiConfig::default()
        };
        assert_eq!(infinite.sanitized().font_size, 14.0);
    }
}
