//! Core launcher logic for QuickEscrowBot.
//!
//! This crate is intentionally framework-agnostic. The Telegram adapter lives
//! behind the `BotService` port (trait) implemented in `qeb-telegram`.

pub mod config;
pub mod errors;
pub mod launcher;
pub mod logging;
pub mod ports;
pub mod probe;

pub use errors::{Error, Result};
