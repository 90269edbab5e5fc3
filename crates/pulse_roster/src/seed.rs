use chrono::{DateTime, Duration, TimeZone, Utc};
use pulse_core::{MemberStatus, MoodEntry, TeamMember};

// Check-ins are offset from a fixed anchor so streak and distribution
// fixtures stay stable across runs.
fn anchor() -> DateTime<Utc> {
	Utc.with_ymd_and_hms(2026, 2, 26, 10, 0, 0).unwrap()
}

fn mood(emoji: &str, label: &str, minutes_ago: i64) -> MoodEntry {
	MoodEntry::new(emoji, label, anchor() - Duration::minutes(minutes_ago))
}

fn member(id: &str, name: &str, role: &str, status: MemberStatus, history: Vec<MoodEntry>) -> TeamMember {
	let current_mood = history[0].clone();
	TeamMember {
		id: id.to_string(),
		name: name.to_string(),
		role: role.to_string(),
		status,
		avatar_url: None,
		current_mood,
		mood_history: history,
	}
}

/// The demo roster: eight members with staggered check-in histories.
pub fn seed_roster() -> Vec<TeamMember> {
	vec![
		member(
			"1",
			"Sarah Chen",
			"Engineering Lead",
			MemberStatus::Active,
			vec![
				mood("😊", "Happy", 60),
				mood("🔥", "Fired Up", 300),
				mood("😊", "Happy", 1440),
				mood("🤔", "Thinking", 2880),
				mood("😊", "Happy", 4320),
				mood("😐", "Neutral", 5760),
			],
		),
		member(
			"2",
			"Marcus Johnson",
			"Senior Developer",
			MemberStatus::Active,
			vec![
				mood("🔥", "Fired Up", 75),
				mood("🔥", "Fired Up", 480),
				mood("😊", "Happy", 1560),
				mood("🤔", "Thinking", 3000),
				mood("😴", "Tired", 4440),
				mood("😊", "Happy", 6000),
				mood("🔥", "Fired Up", 7200),
			],
		),
		member(
			"3",
			"Priya Patel",
			"UX Designer",
			MemberStatus::Active,
			vec![
				mood("😊", "Happy", 45),
				mood("🤔", "Thinking", 360),
				mood("😊", "Happy", 1500),
				mood("😊", "Happy", 2940),
				mood("🔥", "Fired Up", 4380),
				mood("😐", "Neutral", 5820),
			],
		),
		member(
			"4",
			"David Kim",
			"Backend Developer",
			MemberStatus::Away,
			vec![
				mood("😐", "Neutral", 150),
				mood("😴", "Tired", 600),
				mood("😐", "Neutral", 1680),
				mood("😊", "Happy", 3120),
				mood("🤔", "Thinking", 4560),
			],
		),
		member(
			"5",
			"Aisha Mohammed",
			"Product Manager",
			MemberStatus::Active,
			vec![
				mood("😊", "Happy", 30),
				mood("🔥", "Fired Up", 240),
				mood("😊", "Happy", 1440),
				mood("🔥", "Fired Up", 2880),
				mood("😊", "Happy", 4320),
				mood("😤", "Stressed", 5760),
				mood("😊", "Happy", 7200),
			],
		),
		member(
			"6",
			"Tom Rivera",
			"QA Engineer",
			MemberStatus::Active,
			vec![
				mood("😴", "Tired", 120),
				mood("😐", "Neutral", 540),
				mood("😴", "Tired", 1620),
				mood("😊", "Happy", 3060),
				mood("😐", "Neutral", 4500),
			],
		),
		member(
			"7",
			"Elena Volkov",
			"DevOps Engineer",
			MemberStatus::Away,
			vec![
				mood("🤔", "Thinking", 195),
				mood("😊", "Happy", 720),
				mood("🤔", "Thinking", 1800),
				mood("🔥", "Fired Up", 3240),
				mood("😊", "Happy", 4680),
				mood("😐", "Neutral", 6120),
			],
		),
		member(
			"8",
			"James O'Brien",
			"Data Analyst",
			MemberStatus::Offline,
			vec![
				mood("🔥", "Fired Up", 1020),
				mood("😊", "Happy", 1800),
				mood("😐", "Neutral", 3240),
				mood("🤔", "Thinking", 4680),
				mood("😊", "Happy", 6120),
			],
		),
	]
}
