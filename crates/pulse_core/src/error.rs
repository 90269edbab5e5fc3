use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Member ID must not be empty")]
	EmptyMemberId,

	#[error("Member ID must contain only alphanumeric characters, hyphens, and underscores: {id}")]
	InvalidMemberId { id: String },

	#[error("Member ID must be 100 characters or fewer: {id}")]
	MemberIdTooLong { id: String },

	#[error("Mood emoji must not be empty")]
	EmptyMoodEmoji,

	#[error("Mood emoji must be 10 characters or fewer: {emoji}")]
	MoodEmojiTooLong { emoji: String },

	#[error("Mood label must not be empty")]
	EmptyMoodLabel,

	#[error("Mood label must be 50 characters or fewer: {label}")]
	MoodLabelTooLong { label: String },

	#[error("Status must be one of: active, away, offline, got: {status}")]
	InvalidStatus { status: String },
}

impl ValidationError {
	pub fn invalid_member_id(id: &str) -> Self {
		ValidationError::InvalidMemberId { id: id.to_string() }
	}

	pub fn member_id_too_long(id: &str) -> Self {
		ValidationError::MemberIdTooLong { id: id.to_string() }
	}

	pub fn mood_emoji_too_long(emoji: &str) -> Self {
		ValidationError::MoodEmojiTooLong { emoji: emoji.to_string() }
	}

	pub fn mood_label_too_long(label: &str) -> Self {
		ValidationError::MoodLabelTooLong { label: label.to_string() }
	}

	pub fn invalid_status(status: &str) -> Self {
		ValidationError::InvalidStatus { status: status.to_string() }
	}
}
