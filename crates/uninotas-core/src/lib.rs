//! Uninotas Core Library
//!
//! Grade engine, score validation, saved records, local identity and the
//! on-disk store behind the `uninotas` CLI.

pub mod config;
pub mod db;
pub mod error;
pub mod format;
pub mod grade;
pub mod history;
pub mod id;
pub mod identity;
pub mod logging;
pub mod record;
pub mod repository;
pub mod stats;
pub mod store;
