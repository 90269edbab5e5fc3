pub mod member;
pub mod mood;
pub mod validation;

pub use member::{MemberStatus, TeamMember};
pub use mood::{mood_option, MoodEntry, MoodOption, MOOD_OPTIONS, POSITIVE_LABELS};
pub use validation::{validate_member_id, validate_mood_emoji, validate_mood_label};
