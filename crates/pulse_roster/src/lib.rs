pub mod error;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::RosterError;
pub use repository::TeamRepository;
pub use seed::seed_roster;
pub use service::TeamService;
