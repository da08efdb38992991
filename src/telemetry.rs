//! Structured console logging.
//!
//! Every event is a single JSON object `{"ts", "level", "event", ...fields}`.
//! Events below the configured minimum level are dropped before they are built.

use serde::Deserialize;
use serde_json::{Map, Number, Value};
use std::cell::Cell;
use std::cmp::Ordering;

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

thread_local! {
    static MIN_LEVEL: Cell<LogLevel> = const { Cell::new(DEFAULT_LOG_LEVEL) };
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
                LogLevel::Warn => 2,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" => Some(Self::Warn),
            _ => None,
        }
    }
}

pub fn set_min_level(level: LogLevel) {
    MIN_LEVEL.with(|cell| cell.set(level));
}

pub fn min_level() -> LogLevel {
    MIN_LEVEL.with(Cell::get)
}

pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    if let Some(payload) = build_event(min_level(), level, event, fields, now_unix_seconds()) {
        emit(level, &payload.to_string());
    }
}

fn build_event(
    threshold: LogLevel,
    level: LogLevel,
    event: &str,
    fields: Value,
    ts: u64,
) -> Option<Value> {
    if level < threshold {
        return None;
    }

    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(Value::Object(payload))
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    match level {
        LogLevel::Warn => gloo::console::warn!(line),
        LogLevel::Debug | LogLevel::Info => gloo::console::log!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_seconds() -> u64 {
    (js_sys::Date::now() / 1_000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_seconds() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn events_below_threshold_are_dropped() {
        let built = build_event(LogLevel::Info, LogLevel::Debug, "typing.tick", json!({}), 1);
        assert!(built.is_none());
    }

    #[test]
    fn event_payload_merges_fields_after_envelope() {
        let built = build_event(
            LogLevel::Info,
            LogLevel::Warn,
            "dom.missing_element",
            json!({ "selector": "#particles" }),
            1_700_000_000,
        )
        .expect("warn passes an info threshold");

        assert_eq!(
            built,
            json!({
                "ts": 1_700_000_000u64,
                "level": "warn",
                "event": "dom.missing_element",
                "selector": "#particles",
            })
        );
    }

    #[test]
    fn log_level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("warn"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Info && LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn min_level_is_adjustable() {
        set_min_level(LogLevel::Warn);
        assert_eq!(min_level(), LogLevel::Warn);
        set_min_level(DEFAULT_LOG_LEVEL);
    }
}
