//! Centralized constants for permissions, paths, and executable names.

/// Socket activation: pid the passed descriptors are meant for.
pub const LISTEN_PID: &str = "LISTEN_PID";

/// Socket activation: number of passed descriptors.
pub const LISTEN_FDS: &str = "LISTEN_FDS";

/// Socket activation: colon separated descriptor names.
pub const LISTEN_FDNAMES: &str = "LISTEN_FDNAMES";

/// First descriptor number handed over by socket activation.
pub const LISTEN_FDS_START: i32 = 3;

/// Largest `LISTEN_FDS` accepted.
pub const LISTEN_FDS_MAX: u32 = 4096;

/// Socket protocol used by the daemons.
pub const PROTO: &str = "unix";

/// Temporary storage directory.
pub const TEMP_DIR: &str = "/tmp/";

/// System-wide runtime root.
pub const RUN_ROOT: &str = "/run";

/// Runtime root for per-user session directories, relative to [`RUN_ROOT`].
pub const USER_RUN_SUBDIR: &str = "user";

/// VPN daemon name.
pub const DAEMON: &str = "nordvpnd";

/// VPN runtime directory name, relative to [`RUN_ROOT`].
pub const RUN_SUBDIR: &str = "nordvpn";

/// System daemon socket.
pub const DAEMON_SOCKET: &str = "/run/nordvpn/nordvpnd.sock";

/// Logs directory used when systemd does not handle logging.
pub const LOG_DIR: &str = "/var/log/nordvpn/";

/// Group allowed to access the daemon socket.
pub const NORDVPN_GROUP: &str = "nordvpn";

/// File-sharing daemon name.
pub const FILESHARED: &str = "nordfileshared";

/// Per-user config directory, relative to the home directory. Only used where
/// the XDG lookup cannot run, i.e. for another user from a root process.
pub const CONFIG_DIRECTORY: &str = ".config";

/// Application subdirectory under the user config and data directories.
pub const USER_DATA_PATH: &str = "nordvpn";

/// File-sharing transfer history database.
pub const FILESHARE_HISTORY_FILE: &str = "fileshare_history.db";

/// CLI log file, relative to the user data directory.
pub const CLI_LOG_FILE: &str = "nordvpn/cli.log";

/// DNS resolver configuration.
pub const RESOLVCONF_FILE_PATH: &str = "/etc/resolv.conf";

/// Application data root.
pub const APP_DATA_DIR: &str = "/var/lib/nordvpn/";

/// Data files directory name, relative to [`APP_DATA_DIR`].
pub const DAT_FILES_SUBDIR: &str = "data";

/// Backup files directory name, relative to [`APP_DATA_DIR`].
pub const BAK_FILES_SUBDIR: &str = "backup";

/// OpenVPN template file name, relative to the data files directory.
pub const OVPN_TEMPLATE_FILE: &str = "ovpn_template.xslt";

/// Obfuscated OpenVPN template file name, relative to the data files directory.
pub const OVPN_OBFS_TEMPLATE_FILE: &str = "ovpn_xor_template.xslt";

/// Default location of the locator configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/nordvpn/locate.toml";

/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_ENV: &str = "NORDLOCATE_CONFIG";

/// Date format used by the API servers (strftime syntax).
pub const SERVER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// rwx------
pub const PERM_USER_RWX: u32 = 0o700;

/// rw-------
pub const PERM_USER_RW: u32 = 0o600;

/// rw-rw----
pub const PERM_USER_RW_GROUP_RW: u32 = 0o660;

/// rw-r--r--
pub const PERM_USER_RW_GROUP_R_OTHERS_R: u32 = 0o644;

/// rw-rw-r--
pub const PERM_USER_RW_GROUP_RW_OTHERS_R: u32 = 0o664;

/// rw-rw-rw-
pub const PERM_USER_RW_GROUP_RW_OTHERS_RW: u32 = 0o666;

/// rwxr-xr-x
pub const PERM_USER_RWX_GROUP_RX_OTHERS_RX: u32 = 0o755;

pub const CHATTR_EXEC: &str = "chattr";
pub const COLUMN_EXEC: &str = "column";
pub const STTY_EXEC: &str = "stty";
pub const SYSTEMCTL_EXEC: &str = "systemctl";
pub const NETWORKCTL_EXEC: &str = "networkctl";
