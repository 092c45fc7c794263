//! Diagnostics for the resolved directories, sockets and group.

use crate::cli::CliContext;
use crate::constants;
use crate::core::identity::IdentityDirectory;
use crate::core::locator::Locator;
use crate::error::ErrorKind;
use crate::util::{fs as probe, privilege};
use anyhow::Result;
use clap::Args;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct DoctorArgs {
    /// User to check per-user locations for (default: caller)
    #[arg(long)]
    pub uid: Option<u32>,

    /// Also check that helper executables are on PATH
    #[arg(long)]
    pub tools: bool,
}

#[derive(Default)]
struct Tally {
    ok: u32,
    warnings: Vec<String>,
    fail: u32,
}

impl Tally {
    fn pass(&mut self, msg: String) {
        println!("  [PASS] {}", msg);
        self.ok += 1;
    }

    fn warn(&mut self, msg: String) {
        println!("  [WARN] {}", msg);
        self.warnings.push(msg);
    }

    fn fail(&mut self, msg: String) {
        println!("  [FAIL] {}", msg);
        self.fail += 1;
    }
}

pub fn run(ctx: &CliContext, args: DoctorArgs) -> Result<()> {
    let locator = &ctx.locator;
    let layout = locator.layout();
    let uid = args.uid.unwrap_or_else(privilege::current_uid);
    let mut t = Tally::default();

    println!("Doctor: uid {} ({})", uid, layout);

    check_dir(&mut t, "log directory", &layout.log_dir);
    check_dir(&mut t, "app data directory", &layout.app_data_dir);
    check_dir(&mut t, "data directory", &layout.dat_files_dir());
    check_dir(&mut t, "backup directory", &layout.bak_files_dir());

    let daemon_socket = locator.daemon_socket();
    if probe::exists(&daemon_socket) {
        t.pass(format!("daemon socket: {}", daemon_socket.display()));
    } else {
        t.warn(format!(
            "daemon socket missing: {} (is nordvpnd running?)",
            daemon_socket.display()
        ));
    }

    match locator.nordvpn_gid() {
        Ok(gid) => t.pass(format!("group {}: gid {}", constants::NORDVPN_GROUP, gid)),
        Err(e) => t.fail(format!("group {}: {}", constants::NORDVPN_GROUP, e)),
    }

    println!(
        "  [INFO] {} socket: {}",
        constants::FILESHARED,
        locator.fileshared_socket(uid).display()
    );

    if uid != 0 {
        check_user(&mut t, locator, uid);
    }
    println!(
        "  [INFO] {} log: {}",
        constants::FILESHARED,
        locator.fileshared_log_path(&uid.to_string()).display()
    );

    println!(
        "  [INFO] firewalls: {}",
        ctx.capabilities
            .supported_firewalls()
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    if args.tools {
        for tool in [
            constants::SYSTEMCTL_EXEC,
            constants::NETWORKCTL_EXEC,
            constants::CHATTR_EXEC,
            constants::COLUMN_EXEC,
            constants::STTY_EXEC,
        ] {
            match find_on_path(tool) {
                Some(path) => t.pass(format!("{}: {}", tool, path.display())),
                None => t.warn(format!("{} not found on PATH", tool)),
            }
        }
    }

    println!();
    println!(
        "Doctor summary: {} pass, {} warn, {} fail",
        t.ok,
        t.warnings.len(),
        t.fail
    );
    if t.fail > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn check_dir(t: &mut Tally, label: &str, path: &Path) {
    match probe::probe(path) {
        probe::Probe::Present => t.pass(format!("{} exists: {}", label, path.display())),
        probe::Probe::Missing => t.warn(format!("{} missing: {}", label, path.display())),
        probe::Probe::Unreadable => {
            t.warn(format!("{} not accessible: {}", label, path.display()))
        }
    }
}

/// Per-user locations: the session runtime directory that picks the socket
/// shape, then the user record and its config directory.
fn check_user<D: IdentityDirectory>(t: &mut Tally, locator: &Locator<D>, uid: u32) {
    check_dir(t, "runtime directory", &locator.layout().user_runtime_dir(uid));

    let home = match locator.user_home(uid) {
        Ok(home) => home,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            t.warn(format!("uid {} has no user record", uid));
            return;
        }
        Err(e) => {
            t.fail(format!("user database: {}", e));
            return;
        }
    };
    match locator.user_config_dir(&home) {
        Ok(dir) => t.pass(format!("config directory: {}", dir.display())),
        Err(e) => t.warn(format!("config directory: {}", e)),
    }
}

fn find_on_path(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH").unwrap_or_default();
    env::split_paths(&path)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable_file(candidate))
}

fn is_executable_file(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && (meta.permissions().mode() & 0o111) != 0,
        Err(_) => false,
    }
}
