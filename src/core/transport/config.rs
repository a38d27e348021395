//! Where the skill server listens.
//!
//! Selected by `MCP_TRANSPORT` (`stdio`, `tcp`, `http`). Only transports
//! compiled in through cargo features can be selected; anything else falls
//! back to the first compiled one.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Spawned by the host, one session on stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One session per accepted socket.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// Stateless JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Route that accepts JSON-RPC posts.
    pub rpc_path: String,

    /// Answer cross-origin requests from any origin.
    pub enable_cors: bool,
}

#[cfg(any(feature = "tcp", feature = "http"))]
const LOCALHOST: &str = "127.0.0.1";

#[cfg(feature = "tcp")]
impl TcpConfig {
    pub const DEFAULT_PORT: u16 = 3000;

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: LOCALHOST.to_string(),
            port: Self::DEFAULT_PORT,
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    pub const DEFAULT_PORT: u16 = 8080;
    pub const DEFAULT_RPC_PATH: &'static str = "/mcp";

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: LOCALHOST.to_string(),
            port: Self::DEFAULT_PORT,
            rpc_path: Self::DEFAULT_RPC_PATH.to_string(),
            enable_cors: true,
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        {
            Self::Tcp(TcpConfig::default())
        }

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
        {
            compile_error!("enable at least one of the stdio, tcp or http features");
        }
    }
}

/// Parse a port, keeping `default` when the value is absent or not a port.
#[cfg(any(feature = "tcp", feature = "http"))]
fn port_or(value: Option<String>, default: u16) -> u16 {
    value.and_then(|p| p.parse().ok()).unwrap_or(default)
}

/// `false`, `0`, `off` and `no` switch a flag off; any other value keeps it on.
#[cfg(feature = "http")]
fn is_enabled(value: &str) -> bool {
    !matches!(value.to_lowercase().as_str(), "false" | "0" | "off" | "no")
}

impl TransportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from `MCP_TRANSPORT` and the matching `MCP_TCP_*` or
    /// `MCP_HTTP_*` keys, reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let kind = lookup("MCP_TRANSPORT").unwrap_or_default().to_lowercase();

        match kind.as_str() {
            #[cfg(feature = "tcp")]
            "tcp" => Self::Tcp(TcpConfig {
                host: lookup("MCP_TCP_HOST").unwrap_or_else(|| LOCALHOST.to_string()),
                port: port_or(lookup("MCP_TCP_PORT"), TcpConfig::DEFAULT_PORT),
            }),
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig {
                host: lookup("MCP_HTTP_HOST").unwrap_or_else(|| LOCALHOST.to_string()),
                port: port_or(lookup("MCP_HTTP_PORT"), HttpConfig::DEFAULT_PORT),
                rpc_path: lookup("MCP_HTTP_PATH")
                    .unwrap_or_else(|| HttpConfig::DEFAULT_RPC_PATH.to_string()),
                enable_cors: lookup("MCP_HTTP_CORS").is_none_or(|v| is_enabled(&v)),
            }),
            _ => Self::default(),
        }
    }

    /// Where clients reach the server, for the startup log.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "stdin/stdout".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("tcp://{}", cfg.address()),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("http://{}{}", cfg.address(), cfg.rpc_path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_unset_or_unknown_transport_is_stdio() {
        for pairs in [&[][..], &[("MCP_TRANSPORT", "carrier-pigeon")][..]] {
            let config = TransportConfig::from_lookup(lookup_from(pairs));
            assert!(matches!(config, TransportConfig::Stdio));
            assert_eq!(config.description(), "stdin/stdout");
        }
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_from_lookup() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            ("MCP_TRANSPORT", "TCP"),
            ("MCP_TCP_HOST", "0.0.0.0"),
            ("MCP_TCP_PORT", "4000"),
        ]));
        let TransportConfig::Tcp(tcp) = &config else {
            panic!("expected tcp, got {:?}", config);
        };
        assert_eq!(tcp.address(), "0.0.0.0:4000");
        assert_eq!(config.description(), "tcp://0.0.0.0:4000");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_from_lookup() {
        let config = TransportConfig::from_lookup(lookup_from(&[
            ("MCP_TRANSPORT", "http"),
            ("MCP_HTTP_PORT", "not-a-port"),
            ("MCP_HTTP_PATH", "/rpc"),
            ("MCP_HTTP_CORS", "off"),
        ]));
        let TransportConfig::Http(http) = &config else {
            panic!("expected http, got {:?}", config);
        };
        assert_eq!(http.port, HttpConfig::DEFAULT_PORT);
        assert!(!http.enable_cors);
        assert_eq!(config.description(), "http://127.0.0.1:8080/rpc");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_cors_flag_values() {
        assert!(is_enabled("true"));
        assert!(is_enabled("1"));
        assert!(!is_enabled("False"));
        assert!(!is_enabled("0"));
    }
}
