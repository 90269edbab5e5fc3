use crate::analysis::{MoodAnalysis, MoodOutlier, MoodStreak};

pub(crate) type Template = fn(&MoodAnalysis) -> String;

pub const TEMPLATE_COUNT: usize = 5;

/// Fixed template set, selected by `variation % TEMPLATE_COUNT`. Templates
/// differ only in tone; all render the same analysis fields.
pub(crate) const TEMPLATES: [Template; TEMPLATE_COUNT] = [morning_briefing, weather_report, sports_commentary, captains_log, startup_standup];

fn outlier_line(outliers: &[MoodOutlier]) -> Option<String> {
	if outliers.is_empty() {
		return None;
	}
	let joined = outliers
		.iter()
		.map(|o| format!("{} is feeling {} {}", o.name, o.label.to_lowercase(), o.emoji))
		.collect::<Vec<_>>()
		.join(", ");
	Some(joined)
}

// Only the first streak in scan order is ever narrated.
fn streak_line(streaks: &[MoodStreak]) -> Option<String> {
	let streak = streaks.first()?;
	Some(format!("{} has been {} for {} check-ins straight", streak.name, streak.label.to_lowercase(), streak.length))
}

// Template 0: Military briefing
fn morning_briefing(a: &MoodAnalysis) -> String {
	let mut text = format!("MORNING BRIEFING — {} souls reporting for duty.\n\n", a.total);
	text.push_str(&format!(
		"Dominant mood across the unit: {} {} ({}/{}).\n\n",
		a.dominant_mood.emoji, a.dominant_mood.label, a.dominant_mood.count, a.total
	));
	if let Some(ol) = outlier_line(&a.outliers) {
		text.push_str(&format!("Outlier report: {}. Keep an eye on them.\n\n", ol));
	}
	if let Some(sl) = streak_line(&a.streaks) {
		text.push_str(&format!("Intel shows {}. Noted.\n\n", sl));
	}
	text.push_str(&format!("Ship confidence rating: {}%. The mission continues.", a.ship_confidence));
	text
}

// Template 1: Weather forecast
fn weather_report(a: &MoodAnalysis) -> String {
	let mut text = "TODAY'S MOOD FORECAST ☁️\n\n".to_string();
	text.push_str(&format!(
		"Current conditions: mostly {} {} with {} out of {} reporting similar skies.\n\n",
		a.dominant_mood.label.to_lowercase(),
		a.dominant_mood.emoji,
		a.dominant_mood.count,
		a.total
	));
	if let Some(ol) = outlier_line(&a.outliers) {
		text.push_str(&format!("Scattered anomalies detected — {}. Pack accordingly.\n\n", ol));
	}
	if let Some(sl) = streak_line(&a.streaks) {
		text.push_str(&format!("Extended forecast: {}. No change expected.\n\n", sl));
	}
	text.push_str(&format!("Chance of shipping: {}%.", a.ship_confidence));
	text
}

// Template 2: Sports commentary
fn sports_commentary(a: &MoodAnalysis) -> String {
	let mut text = "AND WE'RE LIVE! 🎙️\n\n".to_string();
	text.push_str(&format!(
		"The team is coming in {} {} today — {} of {} players in sync.\n\n",
		a.dominant_mood.label.to_lowercase(),
		a.dominant_mood.emoji,
		a.dominant_mood.count,
		a.total
	));
	if let Some(ol) = outlier_line(&a.outliers) {
		text.push_str(&format!("But wait — {}. Could be a wildcard play!\n\n", ol));
	}
	if let Some(sl) = streak_line(&a.streaks) {
		text.push_str(&format!("Streak alert: {}. Consistency is key, folks.\n\n", sl));
	}
	text.push_str(&format!("Ship-o-meter reads {}%. Game on.", a.ship_confidence));
	text
}

// Template 3: Ship captain's log
fn captains_log(a: &MoodAnalysis) -> String {
	let mut text = "CAPTAIN'S LOG ⚓\n\n".to_string();
	text.push_str(&format!(
		"Crew morale check: {} of {} hands reporting {} {}. Steady as she goes.\n\n",
		a.dominant_mood.count,
		a.total,
		a.dominant_mood.label.to_lowercase(),
		a.dominant_mood.emoji
	));
	if let Some(ol) = outlier_line(&a.outliers) {
		text.push_str(&format!("From the crow's nest: {}. Keep them above deck.\n\n", ol));
	}
	if let Some(sl) = streak_line(&a.streaks) {
		text.push_str(&format!("Ship's log notes: {}. A sailor of habit.\n\n", sl));
	}
	text.push_str(&format!("Probability of making port on time: {}%.", a.ship_confidence));
	text
}

// Template 4: Startup standup
fn startup_standup(a: &MoodAnalysis) -> String {
	let mut text = "STANDUP SYNC 🚀\n\n".to_string();
	text.push_str(&format!(
		"Vibes check: the team is {} {} — {}/{} aligned. We love alignment.\n\n",
		a.dominant_mood.label.to_lowercase(),
		a.dominant_mood.emoji,
		a.dominant_mood.count,
		a.total
	));
	if let Some(ol) = outlier_line(&a.outliers) {
		text.push_str(&format!("Meanwhile, {}. Let's unblock them over coffee.\n\n", ol));
	}
	if let Some(sl) = streak_line(&a.streaks) {
		text.push_str(&format!("Fun fact: {}. That's called personal branding.\n\n", sl));
	}
	text.push_str(&format!("Ship confidence: {}%. Investors would be proud.", a.ship_confidence));
	text
}
