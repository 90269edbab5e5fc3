use pulse_core::{MoodEntry, TeamMember};

/// In-memory roster store. Members keep their insertion order, which is
/// the iteration order the analyzer's tie-breaks depend on.
#[derive(Debug, Clone)]
pub struct TeamRepository {
	members: Vec<TeamMember>,
}

impl TeamRepository {
	pub fn new(members: Vec<TeamMember>) -> Self {
		Self { members }
	}

	pub fn get_all(&self) -> &[TeamMember] {
		&self.members
	}

	pub fn get_by_id(&self, member_id: &str) -> Option<&TeamMember> {
		self.members.iter().find(|member| member.id == member_id)
	}

	/// Records a check-in: the entry becomes the member's current mood and
	/// is prepended to the history (most-recent-first). Returns the
	/// recorded entry, or None when the member does not exist.
	pub fn add_mood_entry(&mut self, member_id: &str, entry: MoodEntry) -> Option<MoodEntry> {
		let member = self.members.iter_mut().find(|member| member.id == member_id)?;
		member.mood_history.insert(0, entry.clone());
		member.current_mood = entry.clone();
		Some(entry)
	}

	pub fn count(&self) -> usize {
		self.members.len()
	}
}
