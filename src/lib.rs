//! Privilege aware path and socket resolution for the NordVPN daemons.
//!
//! Computes where `nordvpnd` and `nordfileshared` put their sockets, config
//! directories and log files for a given user, falling back to system-wide
//! locations when per-user ones are absent.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Resolution logic (locator, layout, identity lookups, activation)
//! - `models` — Configuration file model
//! - `util` — Filesystem probes, privilege checks, logging setup

pub mod cli;
pub mod constants;
pub mod core;
pub mod error;
pub mod models;
pub mod util;

pub use crate::core::locator::Locator;
pub use crate::error::{ErrorKind, LocateError, Result};
