//! `[serve]` section configuration.
//!
//! HTTP server settings.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"     # Network interface (127.0.0.1 = localhost only)
//! port = 29384                # HTTP port number
//! clacks = ["Ashlynn"]        # Names carried in the X-Clacks-Overhead header
//! ```
//!
//! Use `interface = "0.0.0.0"` to make the server accessible from LAN.

use std::net::{IpAddr, Ipv4Addr};

use serde::{Deserialize, Serialize};

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    /// - `127.0.0.1` (default): localhost only
    /// - `0.0.0.0`: all interfaces (LAN accessible)
    pub interface: IpAddr,

    /// HTTP port number.
    pub port: u16,

    /// Names remembered in the `X-Clacks-Overhead` response header.
    pub clacks: Vec<String>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            port: 29384,
            clacks: vec!["Ashlynn".into()],
        }
    }
}

impl ServeConfig {
    /// Header value in `GNU name, name` form, `None` when no names are set.
    pub fn clacks_header(&self) -> Option<String> {
        let names: Vec<&str> = self
            .clacks
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect();
        if names.is_empty() {
            return None;
        }
        Some(format!("GNU {}", names.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    use crate::config::test_parse_config;

    use super::*;

    #[test]
    fn test_serve_config() {
        let config = test_parse_config("[serve]\ninterface = \"0.0.0.0\"\nport = 8080");

        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
        );
        assert_eq!(config.serve.port, 8080);
    }

    #[test]
    fn test_serve_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(
            config.serve.interface,
            IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1))
        );
        assert_eq!(config.serve.port, 29384);
        assert_eq!(config.serve.clacks, vec!["Ashlynn".to_string()]);
    }

    #[test]
    fn test_serve_config_interface_variants() {
        // IPv6 localhost
        let config = test_parse_config("[serve]\ninterface = \"::1\"");
        assert_eq!(
            config.serve.interface,
            IpAddr::V6(Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))
        );
    }

    #[test]
    fn test_clacks_header() {
        let serve = ServeConfig::default();
        assert_eq!(serve.clacks_header().as_deref(), Some("GNU Ashlynn"));

        let serve = ServeConfig {
            clacks: vec!["Terry Pratchett".into(), "Ashlynn".into()],
            ..ServeConfig::default()
        };
        assert_eq!(
            serve.clacks_header().as_deref(),
            Some("GNU Terry Pratchett, Ashlynn")
        );

        let serve = ServeConfig {
            clacks: vec![],
            ..ServeConfig::default()
        };
        assert_eq!(serve.clacks_header(), None);

        let serve = ServeConfig {
            clacks: vec!["  ".into()],
            ..ServeConfig::default()
        };
        assert_eq!(serve.clacks_header(), None);
    }
}
