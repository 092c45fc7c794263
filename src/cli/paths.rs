//! Listing of every resolved location.

use crate::cli::CliContext;
use crate::constants;
use crate::core::activation::SocketActivation;
use crate::util::privilege;
use anyhow::{bail, Context, Result};
use clap::Args;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Table};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PathsArgs {
    /// User to resolve per-user paths for (default: caller)
    #[arg(long)]
    pub uid: Option<u32>,

    /// Output format: table|json
    #[arg(long, default_value = "table")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct PathEntry {
    name: &'static str,
    path: Option<String>,
}

pub fn run(ctx: &CliContext, args: PathsArgs) -> Result<()> {
    if args.format != "table" && args.format != "json" {
        bail!("invalid format: {} (use table|json)", args.format);
    }
    let uid = args.uid.unwrap_or_else(privilege::current_uid);
    let entries = collect(ctx, uid);

    if args.format == "json" {
        let json = serde_json::to_string_pretty(&entries).context("serialize paths")?;
        println!("{}", json);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Path").add_attribute(Attribute::Bold),
    ]);
    for entry in &entries {
        table.add_row(vec![
            entry.name.to_string(),
            entry.path.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("Paths for uid {}:", uid);
    println!("{}", table);
    Ok(())
}

fn collect(ctx: &CliContext, uid: u32) -> Vec<PathEntry> {
    let locator = &ctx.locator;
    let layout = locator.layout();
    let config_dir = locator
        .user_home(uid)
        .and_then(|home| locator.user_config_dir(&home))
        .ok();
    let history = config_dir
        .as_ref()
        .map(|dir| dir.join(constants::FILESHARE_HISTORY_FILE));

    vec![
        entry("daemon_socket", Some(locator.daemon_socket())),
        entry("fileshared_socket", Some(locator.fileshared_socket(uid))),
        entry(
            "fileshared_log",
            Some(locator.fileshared_log_path(&uid.to_string())),
        ),
        entry("config_dir", config_dir),
        entry("fileshare_history", history),
        entry("log_dir", Some(layout.log_dir.clone())),
        entry("app_data_dir", Some(layout.app_data_dir.clone())),
        entry("dat_files_dir", Some(layout.dat_files_dir())),
        entry("bak_files_dir", Some(layout.bak_files_dir())),
        entry("ovpn_template", Some(layout.ovpn_template())),
        entry("ovpn_obfs_template", Some(layout.ovpn_obfs_template())),
        entry("resolv_conf", Some(constants::RESOLVCONF_FILE_PATH.into())),
        entry("temp_dir", Some(constants::TEMP_DIR.into())),
    ]
}

fn entry(name: &'static str, path: Option<PathBuf>) -> PathEntry {
    PathEntry {
        name,
        path: path.map(|p| p.display().to_string()),
    }
}

pub fn run_firewalls(ctx: &CliContext) -> Result<()> {
    for firewall in ctx.capabilities.supported_firewalls() {
        println!("{}", firewall);
    }
    Ok(())
}

pub fn run_activation() -> Result<()> {
    let activation = SocketActivation::from_env().context("read socket activation environment")?;
    let Some(activation) = activation else {
        println!("not socket activated");
        return Ok(());
    };

    let pid = std::process::id();
    if !activation.is_for(pid) {
        println!(
            "descriptors were passed to pid {}, not this process ({})",
            activation.pid(),
            pid
        );
        return Ok(());
    }
    for (i, fd) in activation.fds().into_iter().enumerate() {
        let name = activation.names().get(i).map(String::as_str).unwrap_or("-");
        println!("{}\t{}\t{}", fd, constants::PROTO, name);
    }
    Ok(())
}
