//! HTTP server configuration.

use serde::{Deserialize, Serialize};

fn default_host() -> String {
    String::from("127.0.0.1")
}

const fn default_port() -> u16 {
    8787
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8787");
    }
}
