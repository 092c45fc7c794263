//! Read-only filesystem probes.

use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a single `stat` on a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Present,
    Missing,
    /// `stat` failed for a reason other than `NotFound` (EACCES, ELOOP, ...).
    Unreadable,
}

pub fn probe(path: &Path) -> Probe {
    match fs::metadata(path) {
        Ok(_) => Probe::Present,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Probe::Missing,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "stat failed");
            Probe::Unreadable
        }
    }
}

/// Whether `path` exists. Any probe error counts as absent.
pub fn exists(path: &Path) -> bool {
    probe(path) == Probe::Present
}
