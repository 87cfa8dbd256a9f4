//! `[serve]` section configuration.
//!
//! Development server settings, passed through verbatim to the rendering
//! framework. sidra never binds a socket itself.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! port = 4321        # HTTP port number
//! host = true        # true = all interfaces, or a hostname string
//! ```
//!
//! Use `host = "0.0.0.0"` (or any hostname) to bind a specific interface;
//! `host = false` keeps the server on localhost.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Development server settings.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "serve")]
pub struct ServeConfig {
    /// HTTP port number.
    #[config(inline_doc)]
    pub port: u16,

    /// Host exposure: `false` = localhost only, `true` = all interfaces,
    /// or a hostname string to bind a specific interface.
    pub host: HostAddr,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: 4321,
            host: HostAddr::Flag(false),
        }
    }
}

impl ServeConfig {
    /// Validate server settings.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let HostAddr::Name(name) = &self.host
            && name.is_empty()
        {
            diag.error_with_hint(
                Self::FIELDS.host,
                "hostname must not be empty",
                "use true/false or a hostname like \"0.0.0.0\"",
            );
        }
    }
}

// ============================================================================
// Host Address
// ============================================================================

/// Host exposure flag: a boolean or an explicit hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostAddr {
    /// `true` exposes on all interfaces, `false` stays on localhost.
    Flag(bool),
    /// Bind a specific hostname or address.
    Name(String),
}

impl HostAddr {
    /// Whether the server is exposed beyond localhost.
    pub fn is_exposed(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Name(name) => !name.is_empty() && name != "localhost" && name != "127.0.0.1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_serve_config() {
        let config = test_parse_config("[serve]\nport = 4321\nhost = true");

        assert_eq!(config.serve.port, 4321);
        assert_eq!(config.serve.host, HostAddr::Flag(true));
        assert!(config.serve.host.is_exposed());
    }

    #[test]
    fn test_serve_config_defaults() {
        let config = test_parse_config("");

        assert_eq!(config.serve.port, 4321);
        assert_eq!(config.serve.host, HostAddr::Flag(false));
        assert!(!config.serve.host.is_exposed());
    }

    #[test]
    fn test_serve_config_hostname() {
        let config = test_parse_config("[serve]\nhost = \"0.0.0.0\"");
        assert_eq!(config.serve.host, HostAddr::Name("0.0.0.0".into()));
        assert!(config.serve.host.is_exposed());

        let config = test_parse_config("[serve]\nhost = \"localhost\"");
        assert!(!config.serve.host.is_exposed());
    }

    #[test]
    fn test_serve_config_port_range() {
        // Test minimum port
        let config = test_parse_config("[serve]\nport = 1");
        assert_eq!(config.serve.port, 1);

        // Test maximum port
        let config = test_parse_config("[serve]\nport = 65535");
        assert_eq!(config.serve.port, 65535);
    }

    #[test]
    fn test_serve_config_negative_port_rejected() {
        // Out-of-range literals fail at parse time, naming the field
        let err = toml::from_str::<crate::config::SiteConfig>("[serve]\nport = -1").unwrap_err();
        assert!(err.to_string().contains("port"));

        let err = toml::from_str::<crate::config::SiteConfig>("[serve]\nport = 70000").unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn test_serve_config_partial_override() {
        let config = test_parse_config("[serve]\nport = 3000");

        // port is overridden
        assert_eq!(config.serve.port, 3000);
        // host uses default
        assert_eq!(config.serve.host, HostAddr::Flag(false));
    }

    #[test]
    fn test_empty_hostname_rejected() {
        let config = test_parse_config("[serve]\nhost = \"\"");
        let mut diag = crate::config::ConfigDiagnostics::new();
        config.serve.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "serve.host");
    }
}
