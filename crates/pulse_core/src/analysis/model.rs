use serde::{Deserialize, Serialize};

/// Count of one mood label across the roster's current moods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTally {
	pub label: String,
	pub emoji: String,
	pub count: usize,
}

/// A member whose current mood label appears exactly once in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodOutlier {
	pub name: String,
	pub label: String,
	pub emoji: String,
}

/// A run of >= 2 consecutive equal labels within one member's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodStreak {
	pub name: String,
	pub label: String,
	pub length: usize,
}

/// Derived, ephemeral roster snapshot. Recomputed on every call, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAnalysis {
	pub dominant_mood: MoodTally,
	pub outliers: Vec<MoodOutlier>,
	pub streaks: Vec<MoodStreak>,
	pub ship_confidence: u8,
	pub total: usize,
}
