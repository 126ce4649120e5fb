//! Read-only view of the host's shared key-value store.
//!
//! The host application publishes its primary event and the full event list
//! under a fixed set of keys. The resolver never reads the store directly; it
//! is handed a [`SharedData`] provider at call time.

use serde_json::{Map, Value};

use crate::event::{coerce_int, coerce_string, decode_events, decode_events_value};
use crate::event::{Event, GlobalDefaults};

pub const KEY_EVENT_NAME: &str = "event_name";
pub const KEY_EVENT_DAYS: &str = "event_days";
pub const KEY_EVENT_DATE: &str = "event_date";
pub const KEY_EVENT_LABEL: &str = "event_label";
pub const KEY_EVENT_ID: &str = "event_id";
pub const KEY_ALL_EVENTS: &str = "all_events";

/// Source of the event list and Global Defaults for one resolution.
pub trait SharedData {
    /// The decoded event list, in stored order. Empty when unavailable.
    fn events(&self) -> Vec<Event>;

    /// The host's primary-event fields, with built-in values for missing keys.
    fn defaults(&self) -> GlobalDefaults;
}

/// A decoded copy of the shared store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedSnapshot {
    pub defaults: GlobalDefaults,
    pub events: Vec<Event>,
}

impl SharedSnapshot {
    pub fn new(defaults: GlobalDefaults, events: Vec<Event>) -> Self {
        Self { defaults, events }
    }

    /// Decode a store dump. Never fails: anything unreadable falls back to
    /// built-in defaults and an empty event list.
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::debug!("shared store is not valid JSON, using built-in defaults: {e}");
                Self::default()
            }
        }
    }

    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            tracing::debug!("shared store is not a JSON object, using built-in defaults");
            return Self::default();
        };
        Self {
            defaults: decode_defaults(obj),
            events: decode_all_events(obj.get(KEY_ALL_EVENTS)),
        }
    }
}

impl SharedData for SharedSnapshot {
    fn events(&self) -> Vec<Event> {
        self.events.clone()
    }

    fn defaults(&self) -> GlobalDefaults {
        self.defaults.clone()
    }
}

fn decode_defaults(obj: &Map<String, Value>) -> GlobalDefaults {
    let builtin = GlobalDefaults::default();
    let text = |key: &str| obj.get(key).and_then(coerce_string);
    let int = |key: &str| obj.get(key).and_then(coerce_int);

    GlobalDefaults {
        id: int(KEY_EVENT_ID).unwrap_or(builtin.id),
        name: text(KEY_EVENT_NAME).unwrap_or(builtin.name),
        days: int(KEY_EVENT_DAYS).unwrap_or(builtin.days),
        date: text(KEY_EVENT_DATE).unwrap_or(builtin.date),
        label: text(KEY_EVENT_LABEL).unwrap_or(builtin.label),
    }
}

// The host stores the list as a JSON string; an inline array is accepted too.
fn decode_all_events(value: Option<&Value>) -> Vec<Event> {
    match value {
        Some(Value::String(raw)) => decode_events(raw),
        Some(other) => decode_events_value(other),
        None => Vec::new(),
    }
}
