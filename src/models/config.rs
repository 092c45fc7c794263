//! Locator configuration file model (`locate.toml`).

use crate::constants;
use crate::core::layout::Layout;
use crate::core::platform::PlatformCapabilities;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocateConfig {
    #[serde(default)]
    pub platform: PlatformSection,
    #[serde(default)]
    pub layout: LayoutSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformSection {
    #[serde(default = "default_true")]
    pub ipv4: bool,
    #[serde(default = "default_true")]
    pub ipv6: bool,
}

impl Default for PlatformSection {
    fn default() -> Self {
        Self {
            ipv4: true,
            ipv6: true,
        }
    }
}

/// Overrides for the host roots. Unset fields keep the system value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutSection {
    #[serde(default)]
    pub run_dir: Option<PathBuf>,
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    #[serde(default)]
    pub app_data_dir: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl LocateConfig {
    /// Pick the config file from the CLI arg, then `NORDLOCATE_CONFIG`, then
    /// the default path. Only the default path may be missing.
    pub fn resolve(path_arg: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path_arg {
            return Self::load(&path);
        }
        if let Ok(path) = env::var(constants::CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        let default = Path::new(constants::DEFAULT_CONFIG_PATH);
        if !default.exists() {
            return Ok(Self::default());
        }
        Self::load(default)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn capabilities(&self) -> PlatformCapabilities {
        PlatformCapabilities {
            ipv4: self.platform.ipv4,
            ipv6: self.platform.ipv6,
        }
    }

    pub fn layout(&self) -> Layout {
        let system = Layout::system();
        Layout {
            run_dir: self.layout.run_dir.clone().unwrap_or(system.run_dir),
            log_dir: self.layout.log_dir.clone().unwrap_or(system.log_dir),
            app_data_dir: self
                .layout
                .app_data_dir
                .clone()
                .unwrap_or(system.app_data_dir),
        }
    }
}
