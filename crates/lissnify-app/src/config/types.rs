//! Configuration types for Lissnify Deck
//!
//! Defines:
//! - `Settings` - Contents of `.lissnify/config.toml`
//! - `CarouselOverrides` - Optional per-carousel fields as written in the file
//! - `CarouselSettings` - Fully resolved per-carousel settings

use std::collections::BTreeMap;
use std::time::Duration;

use lissnify_core::{Breakpoint, BreakpointTable, CarouselId, StepPolicy};
use serde::{Deserialize, Serialize};

/// Shortest auto-advance period accepted from config
pub const MIN_PERIOD_MS: u64 = 500;

/// Application settings (.lissnify/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    /// Per-carousel overrides keyed by `CarouselId::config_key()`
    #[serde(default)]
    pub carousels: BTreeMap<String, CarouselOverrides>,
}

impl Settings {
    /// Resolve the effective settings for one carousel
    pub fn carousel(&self, id: CarouselId) -> CarouselSettings {
        let defaults = CarouselSettings::defaults_for(id);
        match self.carousels.get(id.config_key()) {
            Some(overrides) => defaults.with_overrides(overrides),
            None => defaults,
        }
    }

    /// Keys under `[carousels]` that don't name a known carousel
    pub fn unknown_carousel_keys(&self) -> Vec<&str> {
        self.carousels
            .keys()
            .map(String::as_str)
            .filter(|key| !CarouselId::ALL.iter().any(|id| id.config_key() == *key))
            .collect()
    }
}

/// REST backend settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Backend origin, e.g. `https://api.lissnify.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_env: default_token_env(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_token_env() -> String {
    "LISSNIFY_TOKEN".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_status_bar: bool,

    /// Idle poll interval of the event loop; timers are checked at this rate
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_status_bar: true,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    50
}

/// Per-carousel fields as written in config. Absent fields keep the carousel's defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CarouselOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stepping: Option<StepPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_on_interaction: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Vec<Breakpoint>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<usize>,
}

/// Effective settings for one carousel
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSettings {
    pub period: Duration,
    pub stepping: StepPolicy,
    pub autoplay: bool,
    pub pause_on_interaction: bool,
    pub breakpoints: BreakpointTable,
}

impl CarouselSettings {
    /// Built-in defaults, tuned per section of the home page
    pub fn defaults_for(id: CarouselId) -> Self {
        match id {
            CarouselId::Categories => Self {
                period: Duration::from_millis(4_000),
                stepping: StepPolicy::Item,
                autoplay: true,
                pause_on_interaction: false,
                breakpoints: BreakpointTable::new(
                    vec![
                        Breakpoint::new(60, 1),
                        Breakpoint::new(90, 2),
                        Breakpoint::new(120, 3),
                    ],
                    4,
                ),
            },
            CarouselId::Testimonials => Self {
                period: Duration::from_millis(4_500),
                stepping: StepPolicy::Item,
                autoplay: true,
                pause_on_interaction: false,
                breakpoints: BreakpointTable::new(
                    vec![Breakpoint::new(70, 1), Breakpoint::new(110, 2)],
                    3,
                ),
            },
            CarouselId::Steps => Self {
                period: Duration::from_millis(4_000),
                stepping: StepPolicy::Page,
                autoplay: true,
                pause_on_interaction: true,
                breakpoints: BreakpointTable::new(
                    vec![Breakpoint::new(80, 1), Breakpoint::new(110, 2)],
                    3,
                ),
            },
            CarouselId::Listeners => Self {
                period: Duration::from_millis(4_000),
                stepping: StepPolicy::Item,
                autoplay: true,
                pause_on_interaction: false,
                breakpoints: BreakpointTable::new(
                    vec![Breakpoint::new(60, 1), Breakpoint::new(100, 2)],
                    3,
                ),
            },
        }
    }

    /// Apply the fields present in `overrides`
    pub fn with_overrides(mut self, overrides: &CarouselOverrides) -> Self {
        if let Some(ms) = overrides.period_ms {
            self.period = Duration::from_millis(ms.max(MIN_PERIOD_MS));
        }
        if let Some(stepping) = overrides.stepping {
            self.stepping = stepping;
        }
        if let Some(autoplay) = overrides.autoplay {
            self.autoplay = autoplay;
        }
        if let Some(pause) = overrides.pause_on_interaction {
            self.pause_on_interaction = pause;
        }
        if overrides.breakpoints.is_some() || overrides.fallback.is_some() {
            let breakpoints = overrides
                .breakpoints
                .clone()
                .unwrap_or_else(|| self.breakpoints.breakpoints().to_vec());
            let fallback = overrides
                .fallback
                .unwrap_or_else(|| self.breakpoints.fallback());
            self.breakpoints = BreakpointTable::new(breakpoints, fallback);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:8000");
        assert_eq!(settings.api.token_env, "LISSNIFY_TOKEN");
        assert_eq!(settings.ui.tick_rate_ms, 50);
        assert!(settings.ui.show_status_bar);
        assert!(settings.carousels.is_empty());
    }

    #[test]
    fn test_carousel_defaults_without_overrides() {
        let settings = Settings::default();
        let categories = settings.carousel(CarouselId::Categories);
        assert_eq!(categories.period, Duration::from_millis(4_000));
        assert_eq!(categories.stepping, StepPolicy::Item);
        assert_eq!(categories.breakpoints.items_per_view(200), 4);

        let testimonials = settings.carousel(CarouselId::Testimonials);
        assert_eq!(testimonials.period, Duration::from_millis(4_500));
        assert_eq!(testimonials.stepping, StepPolicy::Item);

        assert!(settings.carousel(CarouselId::Steps).pause_on_interaction);
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [carousels.categories]
            period_ms = 3000
            "#,
        )
        .unwrap();
        let categories = settings.carousel(CarouselId::Categories);
        assert_eq!(categories.period, Duration::from_millis(3_000));
        assert_eq!(categories.stepping, StepPolicy::Item);
        assert_eq!(categories.breakpoints.items_per_view(70), 2);
    }

    #[test]
    fn test_period_is_clamped_to_minimum() {
        let overrides = CarouselOverrides {
            period_ms: Some(10),
            ..Default::default()
        };
        let s = CarouselSettings::defaults_for(CarouselId::Steps).with_overrides(&overrides);
        assert_eq!(s.period, Duration::from_millis(MIN_PERIOD_MS));
    }

    #[test]
    fn test_fallback_only_override_keeps_breakpoints() {
        let overrides = CarouselOverrides {
            fallback: Some(5),
            ..Default::default()
        };
        let s = CarouselSettings::defaults_for(CarouselId::Categories).with_overrides(&overrides);
        assert_eq!(s.breakpoints.items_per_view(50), 1);
        assert_eq!(s.breakpoints.items_per_view(500), 5);
    }

    #[test]
    fn test_full_carousel_table() {
        let settings: Settings = toml::from_str(
            r#"
            [api]
            base_url = "https://api.example.com"

            [carousels.listeners]
            stepping = "page"
            autoplay = false
            breakpoints = [{ below = 50, items = 1 }]
            fallback = 2
            "#,
        )
        .unwrap();
        assert_eq!(settings.api.base_url, "https://api.example.com");
        assert_eq!(settings.api.timeout_ms, 10_000);

        let listeners = settings.carousel(CarouselId::Listeners);
        assert_eq!(listeners.stepping, StepPolicy::Page);
        assert!(!listeners.autoplay);
        assert_eq!(listeners.breakpoints.items_per_view(40), 1);
        assert_eq!(listeners.breakpoints.items_per_view(90), 2);
    }

    #[test]
    fn test_unknown_carousel_keys() {
        let settings: Settings = toml::from_str(
            r#"
            [carousels.steps]
            autoplay = false
            [carousels.blogs]
            autoplay = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.unknown_carousel_keys(), vec!["blogs"]);
    }
}
