//! Network-layer protocol families the host can filter.

use serde::Serialize;

/// Set once at startup from configuration and passed by reference afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    pub ipv4: bool,
    pub ipv6: bool,
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self {
            ipv4: true,
            ipv6: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Firewall {
    Iptables,
    Ip6tables,
}

impl Firewall {
    pub fn as_str(&self) -> &'static str {
        match self {
            Firewall::Iptables => "iptables",
            Firewall::Ip6tables => "ip6tables",
        }
    }
}

impl std::fmt::Display for Firewall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PlatformCapabilities {
    /// Rule sets to emit, IPv4 first.
    pub fn supported_firewalls(&self) -> Vec<Firewall> {
        let mut out = Vec::with_capacity(2);
        if self.ipv4 {
            out.push(Firewall::Iptables);
        }
        if self.ipv6 {
            out.push(Firewall::Ip6tables);
        }
        out
    }
}
