//! Render Model: the render-ready output of the resolver.

use serde::{Deserialize, Serialize};

use crate::event::EventId;
use crate::label::{Label, Vocabulary};

/// Default deep-link scheme.
pub const DEFAULT_SCHEME: &str = "app";

/// The label carried by a [`RenderModel`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RenderLabel {
    /// Derived from the selected event's day count.
    Policy(Label),
    /// Supplied by the host with the Global Defaults and passed through as-is.
    Supplied(String),
}

impl RenderLabel {
    /// The token for policy labels, or the supplied text.
    pub fn as_str(&self) -> &str {
        match self {
            RenderLabel::Policy(label) => label.as_str(),
            RenderLabel::Supplied(text) => text,
        }
    }

    /// Display text in the given vocabulary. Supplied text is never translated.
    pub fn text<'a>(&'a self, vocab: &'a Vocabulary) -> &'a str {
        match self {
            RenderLabel::Policy(label) => vocab.label_text(*label),
            RenderLabel::Supplied(text) => text,
        }
    }
}

/// Everything a view needs to draw one surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    pub display_name: String,
    /// Absolute value of the selected record's day count.
    pub display_days: u64,
    /// False only when the day count is zero.
    pub show_unit: bool,
    pub label: RenderLabel,
    pub date: String,
    pub target_event_id: EventId,
}

impl RenderModel {
    /// Activation URI for the surface, e.g. `app://event/3`.
    pub fn deep_link(&self, scheme: &str) -> String {
        deep_link(scheme, self.target_event_id)
    }

    /// Map the model onto display text for one language.
    pub fn localized(&self, vocab: &Vocabulary) -> LocalizedView {
        LocalizedView {
            name: self.display_name.clone(),
            days: self.display_days.to_string(),
            unit: if self.show_unit {
                vocab.unit.clone()
            } else {
                String::new()
            },
            date: self.date.clone(),
            label: self.label.text(vocab).to_string(),
        }
    }
}

/// The text fields of a surface, one per visual element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedView {
    pub name: String,
    pub days: String,
    pub unit: String,
    pub date: String,
    pub label: String,
}

/// Build `{scheme}://event/{id}`.
pub fn deep_link(scheme: &str, event_id: EventId) -> String {
    format!("{scheme}://event/{event_id}")
}
