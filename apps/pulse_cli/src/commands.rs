use anyhow::{anyhow, Result};
use pulse_core::{analyze, mood_distribution, mood_option, TeamMember};
use pulse_roster::TeamService;

use crate::standup::run_standup;

pub fn roster(service: &TeamService) {
	let members = service.get_all_members();

	println!("TEAM ROSTER ({} members)", members.len());
	for member in members {
		println!(
			"  {:<3} {:<16} {:<18} {:<8} {} {}",
			member.id,
			member.name,
			member.role,
			member.status,
			member.current_mood.emoji,
			member.current_mood.label
		);
	}

	println!();
	print_distribution(members);
}

pub fn analyze_roster(service: &TeamService, json: bool) -> Result<()> {
	let analysis = analyze(service.get_all_members());

	if json {
		println!("{}", serde_json::to_string_pretty(&analysis)?);
		return Ok(());
	}

	println!(
		"Dominant mood: {} {} ({}/{})",
		analysis.dominant_mood.emoji, analysis.dominant_mood.label, analysis.dominant_mood.count, analysis.total
	);
	for outlier in &analysis.outliers {
		println!("Outlier: {} is feeling {} {}", outlier.name, outlier.label.to_lowercase(), outlier.emoji);
	}
	for streak in &analysis.streaks {
		println!("Streak: {} x{} ({})", streak.label, streak.length, streak.name);
	}
	println!("Ship confidence: {}%", analysis.ship_confidence);
	Ok(())
}

pub async fn standup(service: &TeamService, variation: usize, regenerate: usize, delay_ms: u64) -> Result<()> {
	println!("Generating standup...");

	let (session, _applied) = run_standup(service.get_all_members(), variation, regenerate, delay_ms).await?;
	let summary = session.summary().ok_or_else(|| anyhow!("generation finished without a summary"))?;

	println!();
	println!("{}", summary);
	Ok(())
}

pub fn checkin(service: &mut TeamService, member_id: &str, label: &str) -> Result<()> {
	let option = mood_option(label).ok_or_else(|| anyhow!("unknown mood label '{}'; expected one of the fixed catalog options", label))?;

	let entry = service.submit_mood(member_id, option.emoji, option.label)?;
	println!("Mood updated! Member {} is feeling {} {}", member_id, entry.label.to_lowercase(), entry.emoji);

	println!();
	print_distribution(service.get_all_members());
	Ok(())
}

fn print_distribution(members: &[TeamMember]) {
	println!("MOOD DISTRIBUTION");
	for segment in mood_distribution(members) {
		println!("  {} {:<10} {:>2}", segment.emoji, segment.label, segment.count);
	}
}
