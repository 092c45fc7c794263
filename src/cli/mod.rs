//! CLI routing and command dispatch.

use crate::core::identity::SystemDirectory;
use crate::core::locator::Locator;
use crate::core::platform::PlatformCapabilities;
use crate::models::config::LocateConfig;
use crate::util::logging;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod doctor;
pub mod paths;
pub mod resolve;

/// Shared context passed to all command handlers.
pub struct CliContext {
    pub locator: Locator,
    pub capabilities: PlatformCapabilities,
}

#[derive(Parser, Debug)]
#[command(
    name = "nordlocate",
    version,
    about = "Resolve NordVPN daemon sockets, config directories and log files"
)]
pub struct Cli {
    /// Locator config file (default: /etc/nordvpn/locate.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log resolution decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        logging::init(self.verbose);

        let config = LocateConfig::resolve(self.config)?;
        let layout = config.layout();
        tracing::debug!(%layout, "layout resolved");

        let ctx = CliContext {
            locator: Locator::new(layout, SystemDirectory),
            capabilities: config.capabilities(),
        };

        match self.command {
            Commands::Socket(args) => resolve::run_socket(&ctx, args),
            Commands::DaemonSocket => resolve::run_daemon_socket(&ctx),
            Commands::ConfigDir(args) => resolve::run_config_dir(&ctx, args),
            Commands::LogPath(args) => resolve::run_log_path(&ctx, args),
            Commands::HistoryPath(args) => resolve::run_history_path(&ctx, args),
            Commands::Gid(args) => resolve::run_gid(&ctx, args),
            Commands::Firewalls => paths::run_firewalls(&ctx),
            Commands::Activation => paths::run_activation(),
            Commands::Paths(args) => paths::run(&ctx, args),
            Commands::Doctor(args) => doctor::run(&ctx, args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Socket a service listens on for a given user
    Socket(resolve::SocketArgs),
    /// System VPN daemon socket
    DaemonSocket,
    /// Per-user nordvpn config directory under a home directory
    ConfigDir(resolve::ConfigDirArgs),
    /// Log file of the file-sharing daemon for a user
    LogPath(resolve::UidArgs),
    /// Transfer history database of the file-sharing daemon for a user
    HistoryPath(resolve::UidArgs),
    /// Numeric id of a system group
    Gid(resolve::GidArgs),
    /// Firewall rule sets supported by this host
    Firewalls,
    /// Show inherited socket activation descriptors
    Activation,
    /// Show every resolved path
    Paths(paths::PathsArgs),
    /// Diagnose the resolved directories and group (safe, read-only)
    Doctor(doctor::DoctorArgs),
}
