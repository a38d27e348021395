//! Configuration management for the MCP server.
//!
//! All filesystem locations the server touches are supplied here at process
//! start. Values come from defaults, overridden by environment variables
//! (optionally loaded from a `.env` file).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Skills tree and catalog locations.
    pub skills: SkillsConfig,

    /// Relational store used by the user tools.
    pub storage: StorageConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Where skill artifacts live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsConfig {
    /// Directory holding one sub-directory per skill.
    pub root: PathBuf,

    /// Catalog document listing every skill with its description.
    pub catalog_path: PathBuf,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the SQLite database file.
    pub database_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(".claude/skills"),
            catalog_path: PathBuf::from("AGENTS.md"),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("test.db"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "skill-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            skills: SkillsConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_SKILLS_ROOT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(root) = std::env::var("MCP_SKILLS_ROOT") {
            config.skills.root = PathBuf::from(root);
            info!("Skills root set to {:?}", config.skills.root);
        } else {
            warn!(
                "MCP_SKILLS_ROOT not set - using {:?} relative to the working directory",
                config.skills.root
            );
        }

        if let Ok(catalog) = std::env::var("MCP_CATALOG_PATH") {
            config.skills.catalog_path = PathBuf::from(catalog);
        }

        if let Ok(database) = std::env::var("MCP_DATABASE_PATH") {
            config.storage.database_path = PathBuf::from(database);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_paths_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SKILLS_ROOT", "/srv/skills");
            std::env::set_var("MCP_CATALOG_PATH", "/srv/AGENTS.md");
            std::env::set_var("MCP_DATABASE_PATH", "/srv/users.db");
        }
        let config = Config::from_env();
        assert_eq!(config.skills.root, PathBuf::from("/srv/skills"));
        assert_eq!(config.skills.catalog_path, PathBuf::from("/srv/AGENTS.md"));
        assert_eq!(config.storage.database_path, PathBuf::from("/srv/users.db"));
        unsafe {
            std::env::remove_var("MCP_SKILLS_ROOT");
            std::env::remove_var("MCP_CATALOG_PATH");
            std::env::remove_var("MCP_DATABASE_PATH");
        }
    }

    #[test]
    fn test_paths_default_fallback() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_SKILLS_ROOT");
            std::env::remove_var("MCP_CATALOG_PATH");
            std::env::remove_var("MCP_DATABASE_PATH");
        }
        let config = Config::from_env();
        assert_eq!(config.skills.root, PathBuf::from(".claude/skills"));
        assert_eq!(config.skills.catalog_path, PathBuf::from("AGENTS.md"));
        assert_eq!(config.storage.database_path, PathBuf::from("test.db"));
    }

    #[test]
    fn test_config_default_server() {
        let config = Config::default();
        assert_eq!(config.server.name, "skill-mcp-server");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
    }
}
