//! Identity of the calling process.

/// Real uid of the calling process; the default subject of every per-user
/// lookup in the CLI.
pub fn current_uid() -> u32 {
    nix::unistd::getuid().as_raw()
}
