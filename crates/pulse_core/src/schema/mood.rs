use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single mood observation. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
	pub emoji: String,
	pub label: String,
	pub timestamp: DateTime<Utc>,
}

impl MoodEntry {
	pub fn new(emoji: impl Into<String>, label: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
		Self {
			emoji: emoji.into(),
			label: label.into(),
			timestamp,
		}
	}

	pub fn now(emoji: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(emoji, label, Utc::now())
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodOption {
	pub emoji: &'static str,
	pub label: &'static str,
}

/// The fixed mood catalog offered at check-in time.
pub const MOOD_OPTIONS: [MoodOption; 6] = [
	MoodOption { emoji: "😊", label: "Happy" },
	MoodOption { emoji: "🔥", label: "Fired Up" },
	MoodOption { emoji: "😐", label: "Neutral" },
	MoodOption { emoji: "🤔", label: "Thinking" },
	MoodOption { emoji: "😴", label: "Tired" },
	MoodOption { emoji: "😤", label: "Stressed" },
];

/// Labels counted toward ship confidence.
pub const POSITIVE_LABELS: [&str; 2] = ["Happy", "Fired Up"];

pub fn mood_option(label: &str) -> Option<MoodOption> {
	MOOD_OPTIONS.into_iter().find(|option| option.label.eq_ignore_ascii_case(label.trim()))
}
