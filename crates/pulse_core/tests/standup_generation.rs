// End-to-end checks: roster -> analyze -> generate, plus the session
// lifecycle driving regeneration the way a presentation layer would.

use chrono::Utc;
use pulse_core::{analyze, generate, MemberStatus, MoodEntry, StandupSession, TeamMember, EMPTY_ROSTER_MESSAGE, TEMPLATE_COUNT};

fn entry(emoji: &str, label: &str) -> MoodEntry {
	MoodEntry::new(emoji, label, Utc::now())
}

fn member(id: &str, name: &str, role: &str, mood: (&str, &str), history: &[(&str, &str)]) -> TeamMember {
	TeamMember {
		id: id.to_string(),
		name: name.to_string(),
		role: role.to_string(),
		status: MemberStatus::Active,
		avatar_url: None,
		current_mood: entry(mood.0, mood.1),
		mood_history: history.iter().map(|(e, l)| entry(e, l)).collect(),
	}
}

fn demo_roster() -> Vec<TeamMember> {
	vec![
		member(
			"1",
			"Sarah Chen",
			"Engineering Lead",
			("😊", "Happy"),
			&[("😊", "Happy"), ("🔥", "Fired Up"), ("😊", "Happy"), ("🤔", "Thinking")],
		),
		member(
			"2",
			"Marcus Johnson",
			"Senior Developer",
			("🔥", "Fired Up"),
			&[("🔥", "Fired Up"), ("🔥", "Fired Up"), ("😊", "Happy")],
		),
		member("3", "Priya Patel", "UX Designer", ("😊", "Happy"), &[("😊", "Happy"), ("🤔", "Thinking")]),
		member("4", "Tom Rivera", "QA Engineer", ("😴", "Tired"), &[("😴", "Tired"), ("😐", "Neutral")]),
	]
}

#[test]
fn analysis_of_demo_roster() {
	let roster = demo_roster();
	let analysis = analyze(&roster);

	assert_eq!(analysis.total, 4);
	assert_eq!(analysis.dominant_mood.label, "Happy");
	assert_eq!(analysis.dominant_mood.count, 2);

	// Fired Up and Tired each appear once across current moods.
	let outlier_names: Vec<&str> = analysis.outliers.iter().map(|o| o.name.as_str()).collect();
	assert_eq!(outlier_names, vec!["Marcus", "Tom"]);

	// Marcus carries the only qualifying streak, and it is first in scan
	// order, so templates narrate it.
	assert_eq!(analysis.streaks.len(), 1);
	assert_eq!(analysis.streaks[0].name, "Marcus");
	assert_eq!(analysis.streaks[0].length, 2);

	// 3 of 4 positive -> 75, inside the clamp band.
	assert_eq!(analysis.ship_confidence, 75);
}

#[test]
fn analysis_serializes_for_consumers() {
	let analysis = analyze(&demo_roster());
	let value = serde_json::to_value(&analysis).unwrap();

	assert_eq!(value["total"], 4);
	assert_eq!(value["dominant_mood"]["label"], "Happy");
	assert_eq!(value["ship_confidence"], 75);
	assert!(value["outliers"].as_array().is_some_and(|a| a.len() == 2));
}

#[test]
fn every_variation_renders_the_same_analysis() {
	let roster = demo_roster();
	for variation in 0..TEMPLATE_COUNT {
		let summary = generate(&roster, variation);
		assert_ne!(summary, EMPTY_ROSTER_MESSAGE);
		assert!(summary.contains("75%"), "variation {} lost the confidence figure: {}", variation, summary);
		assert!(
			summary.contains("Marcus has been fired up for 2 check-ins straight"),
			"variation {} lost the streak sentence: {}",
			variation,
			summary
		);
		assert!(
			summary.contains("Tom is feeling tired 😴"),
			"variation {} lost the outlier sentence: {}",
			variation,
			summary
		);
	}
}

#[test]
fn session_drives_regeneration_through_the_selector() {
	let roster = demo_roster();
	let mut session = StandupSession::new();

	let (ticket, variation) = session.begin();
	let first = generate(&roster, variation);
	assert!(session.complete(ticket, first.clone()));
	assert_eq!(session.summary(), Some(first.as_str()));

	// Five regenerations wrap back to the starting template.
	let mut last = String::new();
	for _ in 0..TEMPLATE_COUNT {
		let (ticket, variation) = session.regenerate();
		last = generate(&roster, variation);
		assert!(session.complete(ticket, last.clone()));
	}
	assert_eq!(last, first, "variation {} should select template 0 again", session.variation());
}

#[test]
fn rapid_regenerates_keep_only_the_newest_result() {
	let roster = demo_roster();
	let mut session = StandupSession::new();

	let (first_ticket, first_variation) = session.begin();
	let (second_ticket, second_variation) = session.regenerate();

	// The older request finishes after being superseded and is dropped.
	assert!(session.complete(second_ticket, generate(&roster, second_variation)));
	assert!(!session.complete(first_ticket, generate(&roster, first_variation)));

	assert_eq!(session.summary(), Some(generate(&roster, second_variation).as_str()));
}
