//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file path
    pub database: Option<PathBuf>,

    /// Address for the web server to listen on
    pub bind: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jot/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jot")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `database` setting
    /// 3. `jot.db` in the current working directory
    pub fn database_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.database.clone())
            .unwrap_or_else(|| PathBuf::from("jot.db"))
    }

    /// Resolve the listen address, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--bind` argument
    /// 2. Config file `bind` setting
    /// 3. `127.0.0.1:8080`
    pub fn bind_addr(&self, cli_bind: Option<&str>) -> String {
        cli_bind
            .map(|s| s.to_string())
            .or_else(|| self.bind.clone())
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_database() {
        let config = Config::default();
        assert!(config.database.is_none());
        assert!(config.bind.is_none());
    }

    #[test]
    fn database_path_prefers_cli_arg() {
        let config = Config {
            database: Some(PathBuf::from("/config/jot.db")),
            bind: None,
        };
        let cli_db = PathBuf::from("/cli/jot.db");
        assert_eq!(
            config.database_path(Some(&cli_db)),
            PathBuf::from("/cli/jot.db")
        );
    }

    #[test]
    fn database_path_falls_back_to_config() {
        let config = Config {
            database: Some(PathBuf::from("/config/jot.db")),
            bind: None,
        };
        assert_eq!(config.database_path(None), PathBuf::from("/config/jot.db"));
    }

    #[test]
    fn database_path_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.database_path(None), PathBuf::from("jot.db"));
    }

    #[test]
    fn bind_addr_prefers_cli_arg() {
        let config = Config {
            database: None,
            bind: Some("0.0.0.0:9000".to_string()),
        };
        assert_eq!(config.bind_addr(Some("127.0.0.1:3000")), "127.0.0.1:3000");
    }

    #[test]
    fn bind_addr_falls_back_to_config() {
        let config = Config {
            database: None,
            bind: Some("0.0.0.0:9000".to_string()),
        };
        assert_eq!(config.bind_addr(None), "0.0.0.0:9000");
    }

    #[test]
    fn bind_addr_falls_back_to_default() {
        let config = Config::default();
        assert_eq!(config.bind_addr(None), "127.0.0.1:8080");
    }

    #[test]
    fn parses_toml_contents() {
        let config: Config = toml::from_str(
            r#"
            database = "/srv/jot/jot.db"
            bind = "0.0.0.0:8080"
            "#,
        )
        .unwrap();
        assert_eq!(config.database, Some(PathBuf::from("/srv/jot/jot.db")));
        assert_eq!(config.bind, Some("0.0.0.0:8080".to_string()));
    }

    #[test]
    fn config_path_is_in_config_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("jot/config.toml"));
    }
}
