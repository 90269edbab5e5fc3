use pulse_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
	#[error("Team member '{id}' not found")]
	MemberNotFound { id: String },

	#[error("Validation error: {0}")]
	Validation(#[from] ValidationError),
}

impl RosterError {
	pub fn member_not_found(id: &str) -> Self {
		RosterError::MemberNotFound { id: id.to_string() }
	}
}
