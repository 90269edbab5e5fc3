pub mod templates;

pub use templates::TEMPLATE_COUNT;

use crate::analysis::analyze;
use crate::schema::TeamMember;

/// Returned by `generate` before any analysis when the roster is empty.
pub const EMPTY_ROSTER_MESSAGE: &str = "No team members to analyze. Add some people first!";

/// Renders one narrative summary for the roster. `variation` selects the
/// template modulo the fixed template count; it has no other meaning.
pub fn generate(members: &[TeamMember], variation: usize) -> String {
	if members.is_empty() {
		return EMPTY_ROSTER_MESSAGE.to_string();
	}

	let analysis = analyze(members);
	let template = templates::TEMPLATES[variation % templates::TEMPLATES.len()];
	template(&analysis)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::schema::{MemberStatus, MoodEntry};

	fn member(name: &str, mood: (&str, &str), history: &[(&str, &str)]) -> TeamMember {
		TeamMember {
			id: name.to_lowercase(),
			name: name.to_string(),
			role: "Developer".to_string(),
			status: MemberStatus::Active,
			avatar_url: None,
			current_mood: MoodEntry::now(mood.0, mood.1),
			mood_history: history.iter().map(|(e, l)| MoodEntry::now(*e, *l)).collect(),
		}
	}

	#[test]
	fn test_empty_roster_returns_sentinel_for_every_variation() {
		for variation in 0..12 {
			assert_eq!(generate(&[], variation), EMPTY_ROSTER_MESSAGE);
		}
	}

	#[test]
	fn test_non_empty_roster_never_returns_sentinel() {
		let roster = vec![member("Ana Lima", ("😊", "Happy"), &[])];
		for variation in 0..12 {
			assert_ne!(generate(&roster, variation), EMPTY_ROSTER_MESSAGE);
		}
	}

	#[test]
	fn test_variation_is_periodic_in_template_count() {
		let roster = vec![
			member("Sarah Chen", ("😊", "Happy"), &[("😊", "Happy"), ("😊", "Happy"), ("😴", "Tired")]),
			member("Tom Rivera", ("😴", "Tired"), &[]),
		];
		for variation in 0..TEMPLATE_COUNT {
			assert_eq!(generate(&roster, variation), generate(&roster, variation + TEMPLATE_COUNT));
		}
	}

	#[test]
	fn test_variations_select_distinct_templates() {
		let roster = vec![member("Ana Lima", ("😊", "Happy"), &[])];
		let summaries: Vec<String> = (0..TEMPLATE_COUNT).map(|v| generate(&roster, v)).collect();
		for i in 0..summaries.len() {
			for j in (i + 1)..summaries.len() {
				assert_ne!(summaries[i], summaries[j], "templates {} and {} rendered identically", i, j);
			}
		}
	}

	#[test]
	fn test_end_to_end_two_member_roster() {
		let roster = vec![
			member("Sarah Chen", ("😊", "Happy"), &[("😊", "Happy"), ("😊", "Happy"), ("😴", "Tired")]),
			member("Marcus Johnson", ("😊", "Happy"), &[]),
		];
		let summary = generate(&roster, 0);
		assert!(summary.contains("2 souls reporting for duty"));
		assert!(summary.contains("Dominant mood across the unit: 😊 Happy (2/2)."));
		assert!(summary.contains("Sarah has been happy for 2 check-ins straight"));
		assert!(!summary.contains("Outlier report"));
		assert!(summary.contains("Ship confidence rating: 99%."));
	}
}
