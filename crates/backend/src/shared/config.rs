use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PaginationConfig {
    /// Page size used for `limit=0`
    pub default_limit: u64,
    /// Largest page a client may request
    pub max_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: contracts::shared::list::DEFAULT_LIMIT,
            max_limit: 100,
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/travel_erp.db"

[server]
host = "127.0.0.1"
port = 3000

[pagination]
default_limit = 10
max_limit = 100
"#;

impl Config {
    /// Embedded defaults with the database at `path` (used by tests)
    pub fn with_database_path(path: impl Into<String>) -> anyhow::Result<Self> {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
        config.database.path = path.into();
        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Get the database file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_database_path(config: &Config) -> PathBuf {
    let db_path = Path::new(&config.database.path);

    if db_path.is_absolute() {
        return db_path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(db_path);
        }
    }

    PathBuf::from(&config.database.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/travel_erp.db");
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.pagination.max_limit, 100);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[database]\npath = \"/tmp/x.db\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.pagination.default_limit, 10);
        assert_eq!(get_database_path(&config), PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[database]\npath = \"a.db\"\n[server]\nport = 8080\n").unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
