pub mod analysis;
pub mod error;
pub mod narrative;
pub mod schema;
pub mod session;

pub use analysis::{analyze, mood_distribution, MoodAnalysis, MoodOutlier, MoodStreak, MoodTally};
pub use error::ValidationError;
pub use narrative::{generate, EMPTY_ROSTER_MESSAGE, TEMPLATE_COUNT};
pub use schema::{mood_option, validate_member_id, validate_mood_emoji, validate_mood_label, MemberStatus, MoodEntry, MoodOption, TeamMember, MOOD_OPTIONS, POSITIVE_LABELS};
pub use session::{SessionPhase, StandupSession, Ticket};
