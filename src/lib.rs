//! zenith - Terminal personal wellbeing client
//!
//! A command-line wellbeing application that keeps emotion-tagged journal
//! records, renders a per-month emotion calendar, and runs guided breathing
//! sessions.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ZenithError;
