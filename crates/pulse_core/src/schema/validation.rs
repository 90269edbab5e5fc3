use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

static MEMBER_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("member id pattern is valid"));

const MAX_MEMBER_ID_CHARS: usize = 100;
const MAX_MOOD_EMOJI_CHARS: usize = 10;
const MAX_MOOD_LABEL_CHARS: usize = 50;

pub fn validate_member_id(member_id: &str) -> Result<String, ValidationError> {
	let stripped = member_id.trim();
	if stripped.is_empty() {
		return Err(ValidationError::EmptyMemberId);
	}
	if !MEMBER_ID_RE.is_match(stripped) {
		return Err(ValidationError::invalid_member_id(stripped));
	}
	if stripped.chars().count() > MAX_MEMBER_ID_CHARS {
		return Err(ValidationError::member_id_too_long(stripped));
	}
	Ok(stripped.to_string())
}

pub fn validate_mood_emoji(emoji: &str) -> Result<String, ValidationError> {
	let stripped = emoji.trim();
	if stripped.is_empty() {
		return Err(ValidationError::EmptyMoodEmoji);
	}
	if stripped.chars().count() > MAX_MOOD_EMOJI_CHARS {
		return Err(ValidationError::mood_emoji_too_long(stripped));
	}
	Ok(stripped.to_string())
}

pub fn validate_mood_label(label: &str) -> Result<String, ValidationError> {
	let stripped = label.trim();
	if stripped.is_empty() {
		return Err(ValidationError::EmptyMoodLabel);
	}
	if stripped.chars().count() > MAX_MOOD_LABEL_CHARS {
		return Err(ValidationError::mood_label_too_long(stripped));
	}
	Ok(stripped.to_string())
}
