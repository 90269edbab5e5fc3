use super::analyzer::tally_current_moods;
use super::model::MoodTally;
use crate::schema::TeamMember;

/// Current-mood tallies ordered by descending count. The sort is stable,
/// so equal counts keep first-seen roster order.
pub fn mood_distribution(members: &[TeamMember]) -> Vec<MoodTally> {
	let mut segments = tally_current_moods(members);
	segments.sort_by(|a, b| b.count.cmp(&a.count));
	segments
}
