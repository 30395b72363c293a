//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_emotion_list, format_month_grid, format_record_list, format_session_line,
    format_tip_list,
};
