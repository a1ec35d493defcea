//! CLI commands for uninotas

pub mod auth;
pub mod calc;
pub mod compare;
pub mod dispatch;
pub mod format;
pub mod helpers;
pub mod history;
pub mod init;
pub mod remove;
pub mod validate;
