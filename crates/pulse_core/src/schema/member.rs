use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::mood::MoodEntry;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
	Active,
	Away,
	Offline,
}

impl FromStr for MemberStatus {
	type Err = ValidationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"active" => Ok(MemberStatus::Active),
			"away" => Ok(MemberStatus::Away),
			"offline" => Ok(MemberStatus::Offline),
			_ => Err(ValidationError::invalid_status(s)),
		}
	}
}

impl fmt::Display for MemberStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let s = match self {
			MemberStatus::Active => "active",
			MemberStatus::Away => "away",
			MemberStatus::Offline => "offline",
		};
		f.write_str(s)
	}
}

/// A roster entry. `current_mood` is always present; `mood_history` is
/// most-recent-first and may be empty. The two are tracked independently,
/// so analysis never assumes `current_mood` equals `mood_history[0]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
	pub id: String,
	pub name: String,
	pub role: String,
	pub status: MemberStatus,
	pub avatar_url: Option<String>,
	pub current_mood: MoodEntry,
	pub mood_history: Vec<MoodEntry>,
}

impl TeamMember {
	/// First whitespace-separated token of the display name, used by
	/// narrative outlier and streak lines.
	pub fn first_name(&self) -> &str {
		self.name.split_whitespace().next().unwrap_or(&self.name)
	}
}
