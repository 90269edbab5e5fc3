mod commands;
mod config;
mod standup;

use anyhow::Result;
use clap::Parser;
use pulse_roster::TeamService;

use crate::config::{Command, Config};

#[tokio::main]
async fn main() -> Result<()> {
	let config = Config::parse();
	init_tracing(&config);

	let mut service = TeamService::with_seed_roster();
	tracing::debug!(members = service.member_count(), "roster loaded");

	match config.command {
		Command::Roster => commands::roster(&service),
		Command::Analyze { json } => commands::analyze_roster(&service, json)?,
		Command::Standup {
			variation,
			regenerate,
			delay_ms,
		} => commands::standup(&service, variation, regenerate, delay_ms).await?,
		Command::Checkin { member_id, label } => commands::checkin(&mut service, &member_id, &label)?,
	}

	Ok(())
}

fn init_tracing(config: &Config) {
	use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, layer::SubscriberExt, util::SubscriberInitExt, Layer};

	let filter = config
		.rust_log
		.as_deref()
		.and_then(|directives| EnvFilter::try_new(directives).ok())
		.unwrap_or_else(|| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(tracing_subscriber::fmt::layer().with_filter(filter))
		})
		.init();
}
