//! Event records and their lenient decoding from stored JSON.
//!
//! The host application owns the event list and writes it as a JSON array of
//! `{id, name, days, date}` objects. Decoding is done once, field by field:
//!
//! - `id` must be usable as an integer, otherwise the record is skipped
//!   (a record without an id can never be bound or linked to)
//! - `days` falls back to `0`
//! - `name` and `date` fall back to the empty string
//!
//! Integer fields accept JSON integers, floats (truncated toward zero) and
//! numeric strings. String fields accept strings and stringify other scalars.
//! Anything that is not a JSON array decodes to an empty list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Identifier of an event inside the stored list.
pub type EventId = i64;

/// Identifier of one placed display surface.
pub type SurfaceId = i64;

/// One countdown event as produced by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    /// Days relative to today: 0 is today, positive is future, negative is past.
    pub days: i64,
    /// Display date, pre-formatted upstream.
    pub date: String,
}

impl Event {
    pub fn new(id: EventId, name: impl Into<String>, days: i64, date: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            days,
            date: date.into(),
        }
    }
}

/// Placeholder name shown when the host never wrote a primary event.
pub const DEFAULT_NAME: &str = "倒数日";

/// Label shown with the placeholder (the host's "days remain" text).
pub const DEFAULT_LABEL: &str = "还有";

/// Fallback fields maintained by the host for its current primary event.
///
/// Unlike [`Event`], the label is supplied by the host as display text and is
/// rendered as-is. Missing fields deserialize to the built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalDefaults {
    pub id: EventId,
    pub name: String,
    pub days: i64,
    pub date: String,
    pub label: String,
}

impl Default for GlobalDefaults {
    fn default() -> Self {
        Self {
            id: 0,
            name: DEFAULT_NAME.to_string(),
            days: 0,
            date: String::new(),
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

/// Decode a serialized event list.
///
/// Never fails: unparseable input yields an empty list.
///
/// ```
/// use countdown_engine::decode_events;
///
/// let events = decode_events(r#"[{"id":1,"name":"Birthday","days":5,"date":"2025-06-01"}]"#);
/// assert_eq!(events[0].name, "Birthday");
/// assert!(decode_events("not json").is_empty());
/// ```
pub fn decode_events(raw: &str) -> Vec<Event> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => decode_events_value(&value),
        Err(e) => {
            tracing::debug!("event list is not valid JSON, treating as empty: {e}");
            Vec::new()
        }
    }
}

/// Decode an already-parsed event list. Non-array values yield an empty list.
pub fn decode_events_value(value: &Value) -> Vec<Event> {
    let Some(items) = value.as_array() else {
        tracing::debug!("event list is not a JSON array, treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let decoded = item.as_object().and_then(decode_event);
            if decoded.is_none() {
                tracing::debug!("skipping event record without a usable id: {item}");
            }
            decoded
        })
        .collect()
}

fn decode_event(obj: &Map<String, Value>) -> Option<Event> {
    let id = obj.get("id").and_then(coerce_int)?;
    Some(Event {
        id,
        name: obj.get("name").and_then(coerce_string).unwrap_or_default(),
        days: obj.get("days").and_then(coerce_int).unwrap_or(0),
        date: obj.get("date").and_then(coerce_string).unwrap_or_default(),
    })
}

/// Read an integer out of a loosely-typed JSON value.
pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(int_from_f64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(int_from_f64))
        }
        _ => None,
    }
}

/// Read display text out of a loosely-typed JSON value.
pub(crate) fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Truncate a float toward zero, rejecting NaN, infinities and anything
/// outside the `i64` range.
pub fn int_from_f64(f: f64) -> Option<i64> {
    // `as` saturates, so reject values that would clamp.
    if f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_int_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_int(&json!(7)), Some(7));
        assert_eq!(coerce_int(&json!(-3.9)), Some(-3));
        assert_eq!(coerce_int(&json!(" 42 ")), Some(42));
        assert_eq!(coerce_int(&json!("2.5")), Some(2));
        assert_eq!(coerce_int(&json!("soon")), None);
        assert_eq!(coerce_int(&json!(null)), None);
        assert_eq!(coerce_int(&json!(1e300)), None);
    }

    #[test]
    fn int_from_f64_rejects_unrepresentable_values() {
        assert_eq!(int_from_f64(2_147_483_648.0), Some(2_147_483_648));
        assert_eq!(int_from_f64(-7.8), Some(-7));
        assert_eq!(int_from_f64(f64::NAN), None);
        assert_eq!(int_from_f64(f64::INFINITY), None);
        assert_eq!(int_from_f64(9.3e18), None);
    }

    #[test]
    fn coerce_string_stringifies_scalars_only() {
        assert_eq!(coerce_string(&json!("x")), Some("x".to_string()));
        assert_eq!(coerce_string(&json!(12)), Some("12".to_string()));
        assert_eq!(coerce_string(&json!(true)), Some("true".to_string()));
        assert_eq!(coerce_string(&json!([1])), None);
        assert_eq!(coerce_string(&json!(null)), None);
    }
}
