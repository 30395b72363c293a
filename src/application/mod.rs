//! Application layer - Use cases and orchestration

pub mod breathing_session;
pub mod init;
pub mod manage_config;
pub mod manage_records;
pub mod view_calendar;

pub use breathing_session::BreathingSessionDriver;
pub use manage_config::ConfigService;
pub use manage_records::RecordService;
pub use view_calendar::CalendarService;
