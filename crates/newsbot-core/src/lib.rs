//! Core domain + application logic for the news bot.
//!
//! This crate is framework-agnostic. Telegram and the news HTTP API live
//! behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod conversation;
pub mod cursor;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod news;

pub use errors::{Error, Result};
