//! Label Policy and localized display vocabulary.
//!
//! The policy maps the sign of an event's day count to one of three tokens.
//! A [`Vocabulary`] turns those tokens into display text for one language.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label Policy token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// The event is today.
    Today,
    /// N days remain until the event.
    Remaining,
    /// N days have passed since the event.
    Elapsed,
}

impl Label {
    /// Apply the Label Policy to a signed day count.
    pub fn for_days(days: i64) -> Self {
        match days {
            0 => Label::Today,
            d if d > 0 => Label::Remaining,
            _ => Label::Elapsed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Today => "today",
            Label::Remaining => "remaining",
            Label::Elapsed => "elapsed",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display strings for one language.
///
/// Suffix templates use `{n}` as the placeholder for the absolute day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub today: String,
    pub remaining: String,
    pub elapsed: String,
    /// Unit shown next to the day count when it is non-zero.
    pub unit: String,
    pub suffix_today: String,
    pub suffix_remaining: String,
    pub suffix_elapsed: String,
}

impl Vocabulary {
    /// Simplified Chinese, the default vocabulary.
    pub fn chinese() -> Self {
        Self {
            today: "就是今天".to_string(),
            remaining: "还有".to_string(),
            elapsed: "已经".to_string(),
            unit: "天".to_string(),
            suffix_today: "今天".to_string(),
            suffix_remaining: "还有{n}天".to_string(),
            suffix_elapsed: "已过{n}天".to_string(),
        }
    }

    pub fn english() -> Self {
        Self {
            today: "Today".to_string(),
            remaining: "Days left".to_string(),
            elapsed: "Days since".to_string(),
            unit: "days".to_string(),
            suffix_today: "today".to_string(),
            suffix_remaining: "{n} days left".to_string(),
            suffix_elapsed: "{n} days ago".to_string(),
        }
    }

    /// Look up a built-in vocabulary by locale tag (`zh`, `zh-CN`, `en`, ...).
    pub fn for_locale(tag: &str) -> Option<Self> {
        let lang = tag.split(['-', '_']).next().unwrap_or_default();
        match lang.to_ascii_lowercase().as_str() {
            "zh" => Some(Self::chinese()),
            "en" => Some(Self::english()),
            _ => None,
        }
    }

    pub fn label_text(&self, label: Label) -> &str {
        match label {
            Label::Today => &self.today,
            Label::Remaining => &self.remaining,
            Label::Elapsed => &self.elapsed,
        }
    }

    /// Suffix for a choice-list entry, e.g. `还有5天` or `3 days ago`.
    pub fn suffix(&self, days: i64) -> String {
        let template = match Label::for_days(days) {
            Label::Today => &self.suffix_today,
            Label::Remaining => &self.suffix_remaining,
            Label::Elapsed => &self.suffix_elapsed,
        };
        template.replace("{n}", &days.unsigned_abs().to_string())
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::chinese()
    }
}
