use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_session_ttl")]
    pub ttl_seconds: i64,
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default)]
    pub console: bool,
}

/// A demo account provisioned at startup. Roles default to empty; password
/// may be omitted entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountConfig {
    pub username: String,
    pub password: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_seconds: default_session_ttl(),
            cleanup_interval: default_cleanup_interval(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: false,
        }
    }
}

// Default value functions
fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_cookie_name() -> String {
    "portal_session".to_string()
}

fn default_session_ttl() -> i64 {
    3600 // 1 hour
}

fn default_cleanup_interval() -> u64 {
    300 // 5 minutes
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.bind_address.is_empty() {
            bail!("bind_address must not be empty");
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        if self.session.cookie_name.is_empty() {
            bail!("session cookie_name must not be empty");
        }

        if self.session.ttl_seconds <= 0 {
            bail!("session ttl_seconds must be greater than 0");
        }

        if self.session.cleanup_interval == 0 {
            bail!("session cleanup_interval must be greater than 0");
        }

        if self.session.ttl_seconds <= self.session.cleanup_interval as i64 {
            bail!(
                "session ttl_seconds ({}) must be greater than cleanup_interval ({})",
                self.session.ttl_seconds,
                self.session.cleanup_interval
            );
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        let mut seen = HashSet::new();
        for account in &self.accounts {
            if account.username.is_empty() {
                bail!("Account usernames must not be empty");
            }

            if !seen.insert(account.username.as_str()) {
                bail!("Duplicate account username: {}", account.username);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write config");
        file
    }

    fn load(content: &str) -> Result<Config> {
        let file = write_config(content);
        Config::from_file(&file.path().to_path_buf())
    }

    #[test]
    fn test_minimal_config_with_defaults() {
        let config = load(
            r#"
            [server]
            port = 8080
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert!(config.server.num_threads > 0);
        assert_eq!(config.session.cookie_name, "portal_session");
        assert_eq!(config.session.ttl_seconds, 3600);
        assert_eq!(config.session.cleanup_interval, 300);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "json");
        assert!(config.accounts.is_empty());
    }

    #[test]
    fn test_config_with_accounts() {
        let config = load(
            r#"
            [server]
            port = 8080

            [[accounts]]
            username = "john_admin"
            password = "test"
            roles = ["ROLE_ADMIN"]

            [[accounts]]
            username = "newcomer"
            "#,
        )
        .expect("Failed to load config");

        assert_eq!(config.accounts.len(), 2);
        assert_eq!(config.accounts[0].username, "john_admin");
        assert_eq!(config.accounts[0].password.as_deref(), Some("test"));
        assert_eq!(config.accounts[0].roles, vec!["ROLE_ADMIN".to_string()]);
        assert_eq!(config.accounts[1].password, None);
        assert!(config.accounts[1].roles.is_empty());
    }

    #[test]
    fn test_port_zero_rejected() {
        let result = load(
            r#"
            [server]
            port = 0
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_ttl_must_exceed_cleanup_interval() {
        let result = load(
            r#"
            [server]
            port = 8080

            [session]
            ttl_seconds = 60
            cleanup_interval = 60
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        let result = load(
            r#"
            [server]
            port = 8080

            [logging]
            level = "verbose"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let result = load(
            r#"
            [server]
            port = 8080

            [[accounts]]
            username = "jane"

            [[accounts]]
            username = "jane"
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = Config::from_file(&PathBuf::from("/nonexistent/config.toml"));
        assert!(result.is_err());
    }
}
