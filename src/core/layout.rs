//! Filesystem roots that every resolved path is joined against.

use crate::constants;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// `/run`; holds both system service dirs and `user/<uid>` session dirs.
    pub run_dir: PathBuf,
    pub log_dir: PathBuf,
    pub app_data_dir: PathBuf,
}

impl Layout {
    /// The real host layout.
    pub fn system() -> Self {
        Self {
            run_dir: PathBuf::from(constants::RUN_ROOT),
            log_dir: PathBuf::from(constants::LOG_DIR),
            app_data_dir: PathBuf::from(constants::APP_DATA_DIR),
        }
    }

    /// Mirror the host layout below `root`, e.g. a temporary directory.
    pub fn from_root(root: &Path) -> Self {
        Self {
            run_dir: root.join("run"),
            log_dir: root.join("var/log").join(constants::USER_DATA_PATH),
            app_data_dir: root.join("var/lib").join(constants::USER_DATA_PATH),
        }
    }

    /// `/run/user/<uid>`
    pub fn user_runtime_dir(&self, uid: u32) -> PathBuf {
        self.run_dir
            .join(constants::USER_RUN_SUBDIR)
            .join(uid.to_string())
    }

    /// `/run/<service>/<service>.sock`
    pub fn system_socket(&self, service: &str) -> PathBuf {
        self.run_dir.join(service).join(socket_name(service))
    }

    /// `/run/user/<uid>/<service>/<service>.sock`
    pub fn user_socket(&self, uid: u32, service: &str) -> PathBuf {
        self.user_runtime_dir(uid)
            .join(service)
            .join(socket_name(service))
    }

    /// `/run/nordvpn/`
    pub fn daemon_run_dir(&self) -> PathBuf {
        self.run_dir.join(constants::RUN_SUBDIR)
    }

    pub fn dat_files_dir(&self) -> PathBuf {
        self.app_data_dir.join(constants::DAT_FILES_SUBDIR)
    }

    pub fn bak_files_dir(&self) -> PathBuf {
        self.app_data_dir.join(constants::BAK_FILES_SUBDIR)
    }

    pub fn ovpn_template(&self) -> PathBuf {
        self.dat_files_dir().join(constants::OVPN_TEMPLATE_FILE)
    }

    pub fn ovpn_obfs_template(&self) -> PathBuf {
        self.dat_files_dir().join(constants::OVPN_OBFS_TEMPLATE_FILE)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::system()
    }
}

fn socket_name(service: &str) -> String {
    format!("{}.sock", service)
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "run={} log={} data={}",
            self.run_dir.display(),
            self.log_dir.display(),
            self.app_data_dir.display()
        )
    }
}
