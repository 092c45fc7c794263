//! Utility modules for filesystem probes, privileges, and logging.

pub mod fs;
pub mod logging;
pub mod privilege;
