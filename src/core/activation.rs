//! Socket activation handover (`LISTEN_PID`, `LISTEN_FDS`, `LISTEN_FDNAMES`).
//!
//! When a supervisor pre-binds the listening socket it binds the same path
//! [`crate::core::locator::Locator::service_socket`] computes, so a service
//! takes the inherited descriptor when present and binds that path otherwise.

use crate::constants;
use crate::error::{LocateError, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocketActivation {
    pid: u32,
    /// At most `LISTEN_FDS_MAX`, checked on construction.
    count: i32,
    names: Vec<String>,
}

impl SocketActivation {
    /// Read the activation variables of the current process. `Ok(None)` when
    /// the process was not socket activated.
    pub fn from_env() -> Result<Option<Self>> {
        Self::from_vars(
            env::var(constants::LISTEN_PID).ok().as_deref(),
            env::var(constants::LISTEN_FDS).ok().as_deref(),
            env::var(constants::LISTEN_FDNAMES).ok().as_deref(),
        )
    }

    pub fn from_vars(
        pid: Option<&str>,
        fds: Option<&str>,
        names: Option<&str>,
    ) -> Result<Option<Self>> {
        let (pid, fds) = match (pid, fds) {
            (Some(pid), Some(fds)) => (pid, fds),
            _ => return Ok(None),
        };
        let pid = parse_var(constants::LISTEN_PID, pid)?;
        let count = parse_count(fds)?;
        let names = names
            .filter(|n| !n.is_empty())
            .map(|n| n.split(':').map(str::to_string).collect())
            .unwrap_or_default();
        Ok(Some(Self { pid, count, names }))
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Descriptor names in handover order; may be shorter than `fds()`.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the descriptors were passed to process `pid`.
    pub fn is_for(&self, pid: u32) -> bool {
        self.pid == pid
    }

    pub fn fds(&self) -> Vec<i32> {
        (0..self.count)
            .map(|i| constants::LISTEN_FDS_START + i)
            .collect()
    }

    pub fn fd_named(&self, name: &str) -> Option<i32> {
        let index = self
            .names
            .iter()
            .take(usize::try_from(self.count).unwrap_or(0))
            .position(|n| n == name)?;
        i32::try_from(index)
            .ok()
            .map(|i| constants::LISTEN_FDS_START + i)
    }
}

fn parse_count(value: &str) -> Result<i32> {
    let count = parse_var(constants::LISTEN_FDS, value)?;
    if count > constants::LISTEN_FDS_MAX {
        return Err(LocateError::InvalidInput(format!(
            "{}={} exceeds the limit of {}",
            constants::LISTEN_FDS,
            count,
            constants::LISTEN_FDS_MAX
        )));
    }
    i32::try_from(count).map_err(|_| {
        LocateError::InvalidInput(format!("{}={} out of range", constants::LISTEN_FDS, count))
    })
}

fn parse_var(key: &str, value: &str) -> Result<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| LocateError::InvalidInput(format!("{}={:?} is not a number", key, value)))
}
