use super::model::{MoodAnalysis, MoodOutlier, MoodStreak, MoodTally};
use crate::schema::{TeamMember, POSITIVE_LABELS};

const UNKNOWN_MOOD_LABEL: &str = "Unknown";
const UNKNOWN_MOOD_EMOJI: &str = "😶";

const MIN_SHIP_CONFIDENCE: i64 = 10;
const MAX_SHIP_CONFIDENCE: i64 = 99;

/// Analyzes a roster snapshot. Deterministic and total: identical input
/// always yields identical output, and no input fails.
///
/// An empty roster yields `total = 0`, a zero-count `Unknown` dominant
/// tally, and a ship confidence of 0. Callers rendering narratives are
/// expected to short-circuit the empty roster before reaching this point;
/// the zero return keeps the function defined either way.
pub fn analyze(members: &[TeamMember]) -> MoodAnalysis {
	let counts = tally_current_moods(members);

	// Strict `>` keeps the first-seen label on ties; insertion order of
	// the tally is roster iteration order.
	let mut dominant_mood = MoodTally {
		label: UNKNOWN_MOOD_LABEL.to_string(),
		emoji: UNKNOWN_MOOD_EMOJI.to_string(),
		count: 0,
	};
	for tally in &counts {
		if tally.count > dominant_mood.count {
			dominant_mood = tally.clone();
		}
	}

	let mut outliers = Vec::new();
	for member in members {
		let mood_count = counts.iter().find(|tally| tally.label == member.current_mood.label).map_or(0, |tally| tally.count);
		if mood_count == 1 {
			outliers.push(MoodOutlier {
				name: member.first_name().to_string(),
				label: member.current_mood.label.clone(),
				emoji: member.current_mood.emoji.clone(),
			});
		}
	}

	let mut streaks = Vec::new();
	for member in members {
		collect_streaks(member, &mut streaks);
	}

	let positive_count = members.iter().filter(|member| POSITIVE_LABELS.contains(&member.current_mood.label.as_str())).count();

	MoodAnalysis {
		dominant_mood,
		outliers,
		streaks,
		ship_confidence: ship_confidence(positive_count, members.len()),
		total: members.len(),
	}
}

/// Insertion-ordered tally of current mood labels. A `Vec` scanned
/// linearly, never an unordered map: first-seen order carries the
/// dominant-mood tie-break.
pub(crate) fn tally_current_moods(members: &[TeamMember]) -> Vec<MoodTally> {
	let mut counts: Vec<MoodTally> = Vec::new();
	for member in members {
		match counts.iter_mut().find(|tally| tally.label == member.current_mood.label) {
			Some(tally) => tally.count += 1,
			None => counts.push(MoodTally {
				label: member.current_mood.label.clone(),
				emoji: member.current_mood.emoji.clone(),
				count: 1,
			}),
		}
	}
	counts
}

/// Scans one member's history left to right, emitting each maximal run of
/// length >= 2 as it ends and flushing the trailing run. Histories of
/// length 0 or 1 emit nothing.
fn collect_streaks(member: &TeamMember, streaks: &mut Vec<MoodStreak>) {
	let history = &member.mood_history;
	if history.len() < 2 {
		return;
	}

	let mut run_label = history[0].label.as_str();
	let mut run_length = 1usize;

	for entry in &history[1..] {
		if entry.label == run_label {
			run_length += 1;
		} else {
			if run_length >= 2 {
				streaks.push(MoodStreak {
					name: member.first_name().to_string(),
					label: run_label.to_string(),
					length: run_length,
				});
			}
			run_label = entry.label.as_str();
			run_length = 1;
		}
	}

	if run_length >= 2 {
		streaks.push(MoodStreak {
			name: member.first_name().to_string(),
			label: run_label.to_string(),
			length: run_length,
		});
	}
}

fn ship_confidence(positive_count: usize, total: usize) -> u8 {
	if total == 0 {
		return 0;
	}
	let raw = ((positive_count as f64 / total as f64) * 100.0).round() as i64;
	raw.clamp(MIN_SHIP_CONFIDENCE, MAX_SHIP_CONFIDENCE) as u8
}
