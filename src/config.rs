use serde::Deserialize;

use crate::telemetry::{LogLevel, DEFAULT_LOG_LEVEL};

pub const DEFAULT_TYPING_TEXT: &str =
    "Frontend Developer | Building futuristic apps with clean code and creative design";
pub const DEFAULT_TYPING_SPEED_MS: u32 = 100;
pub const DEFAULT_PARTICLE_COUNT: usize = 50;
pub const DEFAULT_SKILL_THRESHOLD: f64 = 0.5;
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const DEFAULT_NAVBAR_THRESHOLD: f64 = 100.0;
pub const DEFAULT_CURSOR_MIN_WIDTH: f64 = 768.0;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;

const TYPING_SPEED_MS_BOUNDS: (u32, u32) = (10, 2_000);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 500);
const THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const NAVBAR_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const CURSOR_MIN_WIDTH_BOUNDS: (f64, f64) = (0.0, 10_000.0);
const RESIZE_DEBOUNCE_MS_BOUNDS: (u32, u32) = (0, 5_000);

/// Attribute on the mount element holding a JSON object of overrides.
pub const CONFIG_JSON_ATTRIBUTE: &str = "data-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub typing_text: String,
    pub typing_speed_ms: u32,
    pub particle_count: usize,
    pub skill_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub navbar_threshold: f64,
    pub cursor_min_width: f64,
    pub resize_debounce_ms: u32,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            typing_text: DEFAULT_TYPING_TEXT.to_string(),
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            particle_count: DEFAULT_PARTICLE_COUNT,
            skill_threshold: DEFAULT_SKILL_THRESHOLD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_string(),
            navbar_threshold: DEFAULT_NAVBAR_THRESHOLD,
            cursor_min_width: DEFAULT_CURSOR_MIN_WIDTH,
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Self>(raw).map(Self::clamped)
    }

    /// Applies `data-*` attribute overrides on top of `self`. Values that do not
    /// parse or fall outside their bounds keep the current setting.
    pub fn with_attributes<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            typing_text: parse_non_empty_string(&lookup, "data-typing-text")
                .unwrap_or(self.typing_text),
            typing_speed_ms: parse_u32_with_bounds(
                &lookup,
                "data-typing-speed-ms",
                self.typing_speed_ms,
                TYPING_SPEED_MS_BOUNDS,
            ),
            particle_count: parse_usize_with_bounds(
                &lookup,
                "data-particle-count",
                self.particle_count,
                PARTICLE_COUNT_BOUNDS,
            ),
            skill_threshold: parse_f64_with_bounds(
                &lookup,
                "data-skill-threshold",
                self.skill_threshold,
                THRESHOLD_BOUNDS,
            ),
            reveal_threshold: parse_f64_with_bounds(
                &lookup,
                "data-reveal-threshold",
                self.reveal_threshold,
                THRESHOLD_BOUNDS,
            ),
            reveal_root_margin: parse_non_empty_string(&lookup, "data-reveal-root-margin")
                .filter(|value| is_valid_root_margin(value))
                .unwrap_or(self.reveal_root_margin),
            navbar_threshold: parse_f64_with_bounds(
                &lookup,
                "data-navbar-threshold",
                self.navbar_threshold,
                NAVBAR_THRESHOLD_BOUNDS,
            ),
            cursor_min_width: parse_f64_with_bounds(
                &lookup,
                "data-cursor-min-width",
                self.cursor_min_width,
                CURSOR_MIN_WIDTH_BOUNDS,
            ),
            resize_debounce_ms: parse_u32_with_bounds(
                &lookup,
                "data-resize-debounce-ms",
                self.resize_debounce_ms,
                RESIZE_DEBOUNCE_MS_BOUNDS,
            ),
            log_level: parse_non_empty_string(&lookup, "data-log-level")
                .and_then(|value| LogLevel::parse(&value))
                .unwrap_or(self.log_level),
        }
    }

    fn clamped(self) -> Self {
        let defaults = Self::default();
        let typing_text = match self.typing_text.trim() {
            "" => defaults.typing_text,
            text => text.to_string(),
        };
        let reveal_root_margin = match self.reveal_root_margin.trim() {
            margin if is_valid_root_margin(margin) => margin.to_string(),
            _ => defaults.reveal_root_margin,
        };

        Self {
            typing_text,
            reveal_root_margin,
            typing_speed_ms: within_or(self.typing_speed_ms, TYPING_SPEED_MS_BOUNDS, defaults.typing_speed_ms),
            particle_count: within_or(self.particle_count, PARTICLE_COUNT_BOUNDS, defaults.particle_count),
            skill_threshold: within_or(self.skill_threshold, THRESHOLD_BOUNDS, defaults.skill_threshold),
            reveal_threshold: within_or(self.reveal_threshold, THRESHOLD_BOUNDS, defaults.reveal_threshold),
            navbar_threshold: within_or(self.navbar_threshold, NAVBAR_THRESHOLD_BOUNDS, defaults.navbar_threshold),
            cursor_min_width: within_or(self.cursor_min_width, CURSOR_MIN_WIDTH_BOUNDS, defaults.cursor_min_width),
            resize_debounce_ms: within_or(
                self.resize_debounce_ms,
                RESIZE_DEBOUNCE_MS_BOUNDS,
                defaults.resize_debounce_ms,
            ),
            ..self
        }
    }
}

/// Accepts what `IntersectionObserver` takes as `rootMargin`: one to four
/// offsets, each in `px` or `%`.
pub fn is_valid_root_margin(value: &str) -> bool {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    (1..=4).contains(&tokens.len()) && tokens.iter().all(|token| is_margin_offset(token))
}

fn is_margin_offset(token: &str) -> bool {
    token
        .strip_suffix("px")
        .or_else(|| token.strip_suffix('%'))
        .and_then(|number| number.parse::<f64>().ok())
        .is_some_and(f64::is_finite)
}

fn within_or<T: PartialOrd>(value: T, bounds: (T, T), default: T) -> T {
    if value >= bounds.0 && value <= bounds.1 {
        value
    } else {
        default
    }
}

fn parse_non_empty_string<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u32_with_bounds<F>(lookup: &F, name: &str, default: u32, bounds: (u32, u32)) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds<F>(lookup: &F, name: &str, default: usize, bounds: (usize, usize)) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attributes(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_page_constants() {
        let config = PageConfig::default();

        assert_eq!(config.typing_speed_ms, 100);
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.skill_threshold, 0.5);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.navbar_threshold, 100.0);
        assert_eq!(config.cursor_min_width, 768.0);
        assert_eq!(config.resize_debounce_ms, 250);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn attribute_overrides_apply_within_bounds() {
        let config = PageConfig::default().with_attributes(attributes(&[
            ("data-typing-speed-ms", " 80 "),
            ("data-particle-count", "12"),
            ("data-log-level", "debug"),
            ("data-typing-text", "Systems Engineer"),
        ]));

        assert_eq!(config.typing_speed_ms, 80);
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.typing_text, "Systems Engineer");
    }

    #[test]
    fn out_of_bounds_or_garbage_attributes_fall_back() {
        let config = PageConfig::default().with_attributes(attributes(&[
            ("data-typing-speed-ms", "1"),
            ("data-particle-count", "many"),
            ("data-skill-threshold", "1.5"),
            ("data-typing-text", "   "),
            ("data-log-level", "loud"),
        ]));

        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn json_overrides_fill_missing_keys_with_defaults() {
        let config = PageConfig::from_json(r#"{ "particle_count": 5, "log_level": "warn" }"#)
            .expect("valid config json");

        assert_eq!(config.particle_count, 5);
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.typing_text, DEFAULT_TYPING_TEXT);
    }

    #[test]
    fn json_values_outside_bounds_are_reset() {
        let config = PageConfig::from_json(r#"{ "reveal_threshold": 4.0, "typing_speed_ms": 5 }"#)
            .expect("valid config json");

        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.typing_speed_ms, DEFAULT_TYPING_SPEED_MS);
    }

    #[test]
    fn root_margin_attribute_must_be_px_or_percent_offsets() {
        let bogus = PageConfig::default()
            .with_attributes(attributes(&[("data-reveal-root-margin", "bogus")]));
        assert_eq!(bogus.reveal_root_margin, DEFAULT_REVEAL_ROOT_MARGIN);

        let unitless = PageConfig::default()
            .with_attributes(attributes(&[("data-reveal-root-margin", "0 0 -50 0")]));
        assert_eq!(unitless.reveal_root_margin, DEFAULT_REVEAL_ROOT_MARGIN);

        let custom = PageConfig::default()
            .with_attributes(attributes(&[("data-reveal-root-margin", " 10% -20px ")]));
        assert_eq!(custom.reveal_root_margin, "10% -20px");
    }

    #[test]
    fn root_margin_token_rules() {
        assert!(is_valid_root_margin("0px"));
        assert!(is_valid_root_margin("0px 0px -50px 0px"));
        assert!(is_valid_root_margin("-12.5% 4px"));
        assert!(!is_valid_root_margin(""));
        assert!(!is_valid_root_margin("1px 1px 1px 1px 1px"));
        assert!(!is_valid_root_margin("10em"));
        assert!(!is_valid_root_margin("px"));
        assert!(!is_valid_root_margin("NaNpx"));
    }

    #[test]
    fn json_strings_follow_the_attribute_rules() {
        let config = PageConfig::from_json(
            r#"{ "typing_text": "  ", "reveal_root_margin": "bogus", "particle_count": 3 }"#,
        )
        .expect("valid config json");

        assert_eq!(config.typing_text, DEFAULT_TYPING_TEXT);
        assert_eq!(config.reveal_root_margin, DEFAULT_REVEAL_ROOT_MARGIN);
        assert_eq!(config.particle_count, 3);

        let empty_margin = PageConfig::from_json(r#"{ "reveal_root_margin": "" }"#)
            .expect("valid config json");
        assert_eq!(empty_margin.reveal_root_margin, DEFAULT_REVEAL_ROOT_MARGIN);

        let trimmed = PageConfig::from_json(r#"{ "typing_text": " Systems Engineer " }"#)
            .expect("valid config json");
        assert_eq!(trimmed.typing_text, "Systems Engineer");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(PageConfig::from_json("{ particle_count: ").is_err());
    }
}
