use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Team Pulse mood dashboard", long_about = None)]
pub struct Config {
	/// Use JSON formatting for tracing
	#[arg(long, env = "LOG_JSON", default_value = "false")]
	pub log_json: bool,

	/// Log level
	#[arg(long, env = "RUST_LOG")]
	pub rust_log: Option<String>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// List the roster with the current mood distribution
	Roster,

	/// Print the raw mood analysis
	Analyze {
		/// Emit JSON instead of plain text
		#[arg(long)]
		json: bool,
	},

	/// Generate an AI standup summary
	Standup {
		/// Narrative variation to start from
		#[arg(long, default_value = "0")]
		variation: usize,

		/// Extra regenerations issued before the first one completes
		#[arg(long, default_value = "0")]
		regenerate: usize,

		/// Simulated generation latency in milliseconds
		#[arg(long, default_value = "1500")]
		delay_ms: u64,
	},

	/// Record a mood check-in for a member
	Checkin {
		/// Member id from the roster
		member_id: String,

		/// Mood label, one of the fixed catalog options
		label: String,
	},
}
