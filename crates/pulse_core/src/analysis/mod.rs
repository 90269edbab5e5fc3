pub mod analyzer;
pub mod distribution;
pub mod model;

// Re-export commonly used types
pub use analyzer::analyze;
pub use distribution::mood_distribution;
pub use model::{MoodAnalysis, MoodOutlier, MoodStreak, MoodTally};
