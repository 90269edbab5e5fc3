use anyhow::Result;
use pulse_core::{generate, StandupSession, TeamMember};
use tokio::task::JoinSet;
use tokio::time::{sleep, Duration};

/// Drives the session through one generation plus `regenerations` extra
/// requests issued up front, each completing after the simulated latency.
/// Requests issued later supersede earlier ones, so exactly one completion
/// lands regardless of finish order. Returns the settled session and the
/// number of completions that were applied.
pub async fn run_standup(members: &[TeamMember], start_variation: usize, regenerations: usize, delay_ms: u64) -> Result<(StandupSession, usize)> {
	let mut session = StandupSession::with_variation(start_variation);

	let mut requests = vec![session.begin()];
	for _ in 0..regenerations {
		requests.push(session.regenerate());
	}

	let mut tasks = JoinSet::new();
	for (ticket, variation) in requests {
		let roster = members.to_vec();
		tasks.spawn(async move {
			sleep(Duration::from_millis(delay_ms)).await;
			(ticket, generate(&roster, variation))
		});
	}

	let mut applied = 0;
	while let Some(finished) = tasks.join_next().await {
		let (ticket, summary) = finished?;
		if session.complete(ticket, summary) {
			applied += 1;
			tracing::debug!(ticket, "summary applied");
		} else {
			tracing::debug!(ticket, "superseded result dropped");
		}
	}

	Ok((session, applied))
}
