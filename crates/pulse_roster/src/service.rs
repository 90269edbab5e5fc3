use pulse_core::{validate_member_id, validate_mood_emoji, validate_mood_label, MoodEntry, TeamMember};

use crate::error::RosterError;
use crate::repository::TeamRepository;
use crate::seed::seed_roster;

/// Roster supplier: validates inputs, then delegates to the repository.
pub struct TeamService {
	repo: TeamRepository,
}

impl TeamService {
	pub fn new(repo: TeamRepository) -> Self {
		Self { repo }
	}

	pub fn with_seed_roster() -> Self {
		Self::new(TeamRepository::new(seed_roster()))
	}

	pub fn get_all_members(&self) -> &[TeamMember] {
		self.repo.get_all()
	}

	pub fn get_member(&self, member_id: &str) -> Result<Option<&TeamMember>, RosterError> {
		let id = validate_member_id(member_id)?;
		Ok(self.repo.get_by_id(&id))
	}

	pub fn submit_mood(&mut self, member_id: &str, emoji: &str, label: &str) -> Result<MoodEntry, RosterError> {
		let id = validate_member_id(member_id)?;
		let emoji = validate_mood_emoji(emoji)?;
		let label = validate_mood_label(label)?;

		if self.repo.get_by_id(&id).is_none() {
			return Err(RosterError::member_not_found(&id));
		}

		let entry = MoodEntry::now(emoji, label);
		tracing::info!(member_id = %id, label = %entry.label, "mood check-in recorded");

		self.repo.add_mood_entry(&id, entry).ok_or_else(|| RosterError::member_not_found(&id))
	}

	pub fn member_count(&self) -> usize {
		self.repo.count()
	}
}
