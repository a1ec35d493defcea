//! Shared output formatting helpers for commands

pub mod messages;
pub mod status;

pub use messages::{outcome_cell, outcome_message};
pub use status::print_json_status;
