use crate::cli::CliContext;
use crate::constants;
use crate::util::privilege;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct SocketArgs {
    /// User the service runs for (default: caller)
    #[arg(long)]
    pub uid: Option<u32>,

    /// Service name; also names the socket directory and file
    #[arg(long, default_value = constants::FILESHARED)]
    pub service: String,
}

#[derive(Args, Debug)]
pub struct ConfigDirArgs {
    /// Home directory to look under
    #[arg(long, value_name = "PATH")]
    pub home: PathBuf,
}

#[derive(Args, Debug)]
pub struct UidArgs {
    /// User id (default: caller)
    #[arg(long)]
    pub uid: Option<String>,
}

#[derive(Args, Debug)]
pub struct GidArgs {
    /// Group name
    #[arg(long, default_value = constants::NORDVPN_GROUP)]
    pub group: String,
}

pub fn run_socket(ctx: &CliContext, args: SocketArgs) -> Result<()> {
    let uid = args.uid.unwrap_or_else(privilege::current_uid);
    let socket = ctx.locator.service_socket(uid, &args.service);
    println!("{}", socket.display());
    Ok(())
}

pub fn run_daemon_socket(ctx: &CliContext) -> Result<()> {
    println!("{}", ctx.locator.daemon_socket().display());
    Ok(())
}

pub fn run_config_dir(ctx: &CliContext, args: ConfigDirArgs) -> Result<()> {
    let dir = ctx
        .locator
        .user_config_dir(&args.home)
        .with_context(|| format!("resolve config directory for {}", args.home.display()))?;
    println!("{}", dir.display());
    Ok(())
}

pub fn run_log_path(ctx: &CliContext, args: UidArgs) -> Result<()> {
    let uid = args
        .uid
        .unwrap_or_else(|| privilege::current_uid().to_string());
    println!("{}", ctx.locator.fileshared_log_path(&uid).display());
    Ok(())
}

pub fn run_history_path(ctx: &CliContext, args: UidArgs) -> Result<()> {
    let uid = match args.uid {
        Some(uid) => uid
            .parse::<u32>()
            .with_context(|| format!("invalid uid {:?}", uid))?,
        None => privilege::current_uid(),
    };
    let path = ctx
        .locator
        .fileshare_history_path(uid)
        .with_context(|| format!("resolve history database for uid {}", uid))?;
    println!("{}", path.display());
    Ok(())
}

pub fn run_gid(ctx: &CliContext, args: GidArgs) -> Result<()> {
    let gid = ctx
        .locator
        .group_id(&args.group)
        .with_context(|| format!("resolve group {}", args.group))?;
    println!("{}", gid);
    Ok(())
}
