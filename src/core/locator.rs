//! Identity aware resolution of sockets, config directories and log files.
//!
//! Nothing here creates files or directories. Every answer is recomputed from
//! the current user database and filesystem state on each call.

use crate::constants;
use crate::core::identity::{IdentityDirectory, SystemDirectory};
use crate::core::layout::Layout;
use crate::error::{LocateError, Result};
use crate::util::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Locator<D = SystemDirectory> {
    layout: Layout,
    directory: D,
}

impl Locator<SystemDirectory> {
    /// Host layout and the system user database.
    pub fn system() -> Self {
        Self::new(Layout::system(), SystemDirectory)
    }
}

impl<D: IdentityDirectory> Locator<D> {
    pub fn new(layout: Layout, directory: D) -> Self {
        Self { layout, directory }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Socket `service` listens on when started for `uid`.
    ///
    /// Root always gets `/run/<service>/<service>.sock`. Other users get the
    /// socket inside their session runtime directory when one exists, and the
    /// system socket otherwise.
    pub fn service_socket(&self, uid: u32, service: &str) -> PathBuf {
        if uid == 0 {
            return self.layout.system_socket(service);
        }
        // EACCES and friends count as missing, same as ENOENT.
        let runtime = self.layout.user_runtime_dir(uid);
        if fs::exists(&runtime) {
            self.layout.user_socket(uid, service)
        } else {
            tracing::debug!(uid, runtime = %runtime.display(), "no user runtime dir");
            self.layout.system_socket(service)
        }
    }

    pub fn fileshared_socket(&self, uid: u32) -> PathBuf {
        self.service_socket(uid, constants::FILESHARED)
    }

    /// `/run/nordvpn/nordvpnd.sock`
    pub fn daemon_socket(&self) -> PathBuf {
        self.layout
            .daemon_run_dir()
            .join(format!("{}.sock", constants::DAEMON))
    }

    /// Home directory of `uid`. `NotFound` when there is no such user,
    /// `LookupFailure` when the user database cannot be read.
    pub fn user_home(&self, uid: u32) -> Result<PathBuf> {
        Ok(self.directory.lookup_user_by_id(uid)?.home)
    }

    pub fn user_config_dir(&self, home: &Path) -> Result<PathBuf> {
        user_config_dir(home)
    }

    /// Log file for a `nordfileshared` instance running as `uid`.
    ///
    /// Never fails: unknown users and users without a config directory share
    /// the system log directory, one file per uid.
    pub fn fileshared_log_path(&self, uid: &str) -> PathBuf {
        let log_file = format!("{}.log", constants::FILESHARED);
        if uid == "0" {
            return self.layout.log_dir.join(log_file);
        }

        match self.fileshared_config_dir(uid) {
            Ok(config_dir) => config_dir.join(log_file),
            Err(e) => {
                let fallback = self.layout.log_dir.join(format!(
                    "{}-{}.log",
                    constants::FILESHARED,
                    fallback_suffix(uid)
                ));
                tracing::warn!(
                    uid,
                    fallback = %fallback.display(),
                    error = %e,
                    "storing fileshared logs in the system log directory"
                );
                fallback
            }
        }
    }

    /// Transfer history database for `uid`. Unlike the log file this has no
    /// shared fallback.
    pub fn fileshare_history_path(&self, uid: u32) -> Result<PathBuf> {
        let config_dir = self.fileshared_config_dir(&uid.to_string())?;
        Ok(config_dir.join(constants::FILESHARE_HISTORY_FILE))
    }

    /// Numeric id of `name`. Errors propagate unchanged: the result feeds
    /// chown, where a guessed id is a privilege bug.
    pub fn group_id(&self, name: &str) -> Result<u32> {
        Ok(self.directory.lookup_group_by_name(name)?.gid)
    }

    /// Id of the group allowed on the daemon socket.
    pub fn nordvpn_gid(&self) -> Result<u32> {
        self.group_id(constants::NORDVPN_GROUP)
    }

    fn fileshared_config_dir(&self, uid: &str) -> Result<PathBuf> {
        let uid: u32 = uid
            .parse()
            .map_err(|_| LocateError::InvalidInput(format!("uid {:?} is not numeric", uid)))?;
        let user = self.directory.lookup_user_by_id(uid)?;
        user_config_dir(&user.home)
    }
}

/// Filename suffix for the shared fallback log. Anything but a plain decimal
/// uid collapses to one token so the file stays inside the log directory.
fn fallback_suffix(uid: &str) -> &str {
    if !uid.is_empty() && uid.bytes().all(|b| b.is_ascii_digit()) {
        uid
    } else {
        INVALID_UID_SUFFIX
    }
}

const INVALID_UID_SUFFIX: &str = "invalid";

/// `<home>/.config/nordvpn`, if it exists.
///
/// Built by hand instead of through the XDG lookup because a root process
/// resolving another user's directory cannot see that user's environment.
pub fn user_config_dir(home: &Path) -> Result<PathBuf> {
    if home.as_os_str().is_empty() {
        return Err(LocateError::InvalidInput(
            "user does not have a home directory".to_string(),
        ));
    }
    let candidate = home
        .join(constants::CONFIG_DIRECTORY)
        .join(constants::USER_DATA_PATH);
    if fs::exists(&candidate) {
        Ok(candidate)
    } else {
        Err(LocateError::NotFound(format!(
            "{} directory not found in {}",
            constants::CONFIG_DIRECTORY,
            home.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::StaticDirectory;
    use crate::error::ErrorKind;
    use std::fs as stdfs;
    use tempfile::TempDir;

    fn temp_locator(root: &TempDir, directory: StaticDirectory) -> Locator<StaticDirectory> {
        Locator::new(Layout::from_root(root.path()), directory)
    }

    fn make_config_dir(home: &Path) -> PathBuf {
        let dir = home.join(".config/nordvpn");
        stdfs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_root_socket_ignores_runtime_dir() {
        let root = TempDir::new().unwrap();
        let locator = temp_locator(&root, StaticDirectory::new());
        stdfs::create_dir_all(root.path().join("run/user/0")).unwrap();
        assert_eq!(
            locator.fileshared_socket(0),
            root.path().join("run/nordfileshared/nordfileshared.sock")
        );
    }

    #[test]
    fn test_user_socket_requires_runtime_dir() {
        let root = TempDir::new().unwrap();
        let locator = temp_locator(&root, StaticDirectory::new());

        assert_eq!(
            locator.fileshared_socket(1000),
            root.path().join("run/nordfileshared/nordfileshared.sock")
        );

        stdfs::create_dir_all(root.path().join("run/user/1000")).unwrap();
        assert_eq!(
            locator.fileshared_socket(1000),
            root.path()
                .join("run/user/1000/nordfileshared/nordfileshared.sock")
        );
        // other users are unaffected
        assert_eq!(
            locator.fileshared_socket(1001),
            root.path().join("run/nordfileshared/nordfileshared.sock")
        );
    }

    #[test]
    fn test_socket_resolution_creates_nothing() {
        let root = TempDir::new().unwrap();
        let locator = temp_locator(&root, StaticDirectory::new());
        stdfs::create_dir_all(root.path().join("run/user/1000")).unwrap();
        let _ = locator.fileshared_socket(1000);
        let _ = locator.fileshared_socket(0);
        assert!(!root.path().join("run/user/1000/nordfileshared").exists());
        assert!(!root.path().join("run/nordfileshared").exists());
    }

    #[test]
    fn test_runtime_path_that_is_a_file_counts_as_present() {
        let root = TempDir::new().unwrap();
        let locator = temp_locator(&root, StaticDirectory::new());
        stdfs::create_dir_all(root.path().join("run/user")).unwrap();
        stdfs::write(root.path().join("run/user/1000"), b"").unwrap();
        // a regular file still exists, so the per-user shape is used
        assert_eq!(
            locator.fileshared_socket(1000),
            root.path()
                .join("run/user/1000/nordfileshared/nordfileshared.sock")
        );
    }

    #[test]
    fn test_unstatable_runtime_dir_falls_back() {
        let root = TempDir::new().unwrap();
        let locator = temp_locator(&root, StaticDirectory::new());
        // stat("run/user/1000") fails with ENOTDIR, not ENOENT
        stdfs::create_dir_all(root.path().join("run")).unwrap();
        stdfs::write(root.path().join("run/user"), b"").unwrap();
        assert_eq!(
            locator.fileshared_socket(1000),
            root.path().join("run/nordfileshared/nordfileshared.sock")
        );
    }

    #[test]
    fn test_user_home_keeps_error_kind() {
        let locator = Locator::new(
            Layout::system(),
            StaticDirectory::new().with_user(1000, "alice", "/home/alice"),
        );
        assert_eq!(locator.user_home(1000).unwrap(), PathBuf::from("/home/alice"));
        assert_eq!(locator.user_home(1001).unwrap_err().kind(), ErrorKind::NotFound);

        let broken = Locator::new(Layout::system(), StaticDirectory::new().unavailable());
        assert_eq!(
            broken.user_home(1000).unwrap_err().kind(),
            ErrorKind::LookupFailure
        );
    }

    #[test]
    fn test_system_strings() {
        let locator = Locator::new(Layout::system(), StaticDirectory::new());
        assert_eq!(
            locator.fileshared_socket(0),
            PathBuf::from("/run/nordfileshared/nordfileshared.sock")
        );
        assert_eq!(
            locator.daemon_socket(),
            PathBuf::from("/run/nordvpn/nordvpnd.sock")
        );
    }

    #[test]
    fn test_system_locator_daemon_socket() {
        assert_eq!(
            Locator::system().daemon_socket(),
            PathBuf::from(constants::DAEMON_SOCKET)
        );
    }

    #[test]
    fn test_config_dir_empty_home() {
        let err = user_config_dir(Path::new("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_config_dir_present() {
        let home = TempDir::new().unwrap();
        let expected = make_config_dir(home.path());
        assert_eq!(user_config_dir(home.path()).unwrap(), expected);
    }

    #[test]
    fn test_config_dir_missing_is_not_created() {
        let home = TempDir::new().unwrap();
        stdfs::create_dir_all(home.path().join(".config")).unwrap();
        let err = user_config_dir(home.path()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(!home.path().join(".config/nordvpn").exists());
    }

    #[test]
    fn test_log_path_root() {
        let locator = Locator::new(Layout::system(), StaticDirectory::new());
        assert_eq!(
            locator.fileshared_log_path("0"),
            PathBuf::from("/var/log/nordvpn/nordfileshared.log")
        );
    }

    #[test]
    fn test_log_path_unknown_user() {
        let locator = Locator::new(Layout::system(), StaticDirectory::new());
        assert_eq!(
            locator.fileshared_log_path("1234"),
            PathBuf::from("/var/log/nordvpn/nordfileshared-1234.log")
        );
    }

    #[test]
    fn test_log_path_known_user_with_config_dir() {
        let root = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let config_dir = make_config_dir(home.path());
        let locator = temp_locator(
            &root,
            StaticDirectory::new().with_user(1000, "alice", home.path()),
        );
        assert_eq!(
            locator.fileshared_log_path("1000"),
            config_dir.join("nordfileshared.log")
        );
    }

    #[test]
    fn test_log_path_fallbacks_share_one_shape() {
        let root = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let expected = root.path().join("var/log/nordvpn/nordfileshared-1000.log");

        let unknown = temp_locator(&root, StaticDirectory::new());
        let no_config = temp_locator(
            &root,
            StaticDirectory::new().with_user(1000, "alice", home.path()),
        );
        let no_home = temp_locator(
            &root,
            StaticDirectory::new().with_user(1000, "alice", ""),
        );
        let broken = temp_locator(&root, StaticDirectory::new().unavailable());

        assert_eq!(unknown.fileshared_log_path("1000"), expected);
        assert_eq!(no_config.fileshared_log_path("1000"), expected);
        assert_eq!(no_home.fileshared_log_path("1000"), expected);
        assert_eq!(broken.fileshared_log_path("1000"), expected);
    }

    #[test]
    fn test_log_path_non_numeric_uid() {
        let locator = Locator::new(Layout::system(), StaticDirectory::new());
        assert_eq!(
            locator.fileshared_log_path("bob"),
            PathBuf::from("/var/log/nordvpn/nordfileshared-invalid.log")
        );
    }

    #[test]
    fn test_log_path_uid_cannot_escape_log_dir() {
        let locator = Locator::new(Layout::system(), StaticDirectory::new());
        for uid in ["1/../../../../etc/cron.d/x", "../1000", "", "-1", "1000\n"] {
            let path = locator.fileshared_log_path(uid);
            assert_eq!(
                path,
                PathBuf::from("/var/log/nordvpn/nordfileshared-invalid.log"),
                "uid {:?}",
                uid
            );
            assert_eq!(path.parent(), Some(Path::new("/var/log/nordvpn")));
        }
    }

    #[test]
    fn test_history_path() {
        let root = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let locator = temp_locator(
            &root,
            StaticDirectory::new().with_user(1000, "alice", home.path()),
        );
        let err = locator.fileshare_history_path(1000).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let config_dir = make_config_dir(home.path());
        assert_eq!(
            locator.fileshare_history_path(1000).unwrap(),
            config_dir.join("fileshare_history.db")
        );
    }

    #[test]
    fn test_group_id() {
        let locator = Locator::new(
            Layout::system(),
            StaticDirectory::new().with_group(977, "nordvpn"),
        );
        assert_eq!(locator.nordvpn_gid().unwrap(), 977);
        let err = locator.group_id("wheel").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_group_id_lookup_failure_propagates() {
        let locator = Locator::new(Layout::system(), StaticDirectory::new().unavailable());
        let err = locator.nordvpn_gid().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LookupFailure);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let root = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        make_config_dir(home.path());
        stdfs::create_dir_all(root.path().join("run/user/1000")).unwrap();
        let locator = temp_locator(
            &root,
            StaticDirectory::new()
                .with_user(1000, "alice", home.path())
                .with_group(977, "nordvpn"),
        );
        assert_eq!(locator.fileshared_socket(1000), locator.fileshared_socket(1000));
        assert_eq!(
            locator.fileshared_log_path("1000"),
            locator.fileshared_log_path("1000")
        );
        assert_eq!(
            locator.user_config_dir(home.path()).unwrap(),
            locator.user_config_dir(home.path()).unwrap()
        );
        assert_eq!(locator.nordvpn_gid().unwrap(), locator.nordvpn_gid().unwrap());
    }
}
