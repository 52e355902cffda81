//! Configuration management for the OCM CLI

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use ocm_client::Connection;

use crate::error::{CliError, ConfigError};

/// Configuration structure for the OCM CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the API server (e.g. https://api.openshift.com)
    pub url: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Maximum number of idle connections kept per host
    pub max_connections: usize,

    /// Delay between attempts of `subscription wait`
    pub poll_interval_seconds: u64,

    /// Optional bearer token sent in the Authorization header
    pub auth_token: Option<String>,

    /// Optional user to impersonate on every request
    pub impersonate_user: Option<String>,

    /// Extra headers added to every request
    pub headers: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: ocm_client::connection::DEFAULT_URL.to_string(),
            timeout_seconds: 30,
            max_connections: 100,
            poll_interval_seconds: 5,
            auth_token: None,
            impersonate_user: None,
            headers: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub async fn load() -> Result<Self, CliError> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path).await
    }

    /// Load configuration from `path`, creating it with defaults if missing
    pub async fn load_from(config_path: &Path) -> Result<Self, CliError> {
        if !config_path.exists() {
            Self::create_default_config(config_path).await?;
        }

        let config_content = tokio::fs::read_to_string(config_path).await?;
        let config: Config =
            serde_yaml::from_str(&config_content).map_err(ConfigError::InvalidFormat)?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CliError> {
        let url = Url::parse(&self.url).map_err(|e| ConfigError::InvalidUrl(e.to_string()))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::InvalidUrl(format!(
                "unsupported scheme '{}'; expected http or https",
                url.scheme()
            ))
            .into());
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_seconds",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_connections",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        if self.poll_interval_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_seconds",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Replace the server URL, as done by the global `--url` flag
    pub fn with_url(mut self, url: Option<String>) -> Result<Self, CliError> {
        if let Some(url) = url {
            self.url = url;
            self.validate()?;
        }
        Ok(self)
    }

    /// Delay between poll attempts
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    /// Build a connection to the configured server
    pub fn connection(&self) -> Result<Connection, CliError> {
        let mut builder = Connection::builder()
            .url(self.url.clone())
            .timeout(Duration::from_secs(self.timeout_seconds))
            .max_connections(self.max_connections)
            .user_agent(format!("ocm-cli/{}", env!("CARGO_PKG_VERSION")));

        if let Some(token) = &self.auth_token {
            builder = builder.default_header("Authorization", format!("Bearer {}", token));
        }
        if let Some(user) = &self.impersonate_user {
            builder = builder.default_header(ocm_client::request::IMPERSONATE_USER_HEADER, user);
        }
        for (name, value) in &self.headers {
            builder = builder.default_header(name, value);
        }

        Ok(builder.build()?)
    }

    /// Get the configuration file path
    pub fn get_config_path() -> Result<PathBuf, CliError> {
        Ok(Self::get_config_dir()?.join("config.yaml"))
    }

    /// Get the configuration directory path
    pub fn get_config_dir() -> Result<PathBuf, CliError> {
        let home_dir = dirs::home_dir().ok_or_else(|| CliError::Generic {
            message: "Could not find home directory".to_string(),
        })?;

        Ok(home_dir.join(".ocm").join("cli"))
    }

    /// Create the default configuration file at `config_path`
    async fn create_default_config(config_path: &Path) -> Result<(), CliError> {
        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                tokio::fs::create_dir_all(config_dir)
                    .await
                    .map_err(ConfigError::DirectoryCreation)?;
            }
        }

        let config_content = Self::generate_config_template(&Config::default())?;
        tokio::fs::write(config_path, config_content).await?;

        tracing::info!(path = %config_path.display(), "created default configuration");

        Ok(())
    }

    /// Generate a configuration template with comments
    fn generate_config_template(config: &Config) -> Result<String, CliError> {
        let yaml_content = serde_yaml::to_string(config).map_err(ConfigError::InvalidFormat)?;

        Ok(format!(
            r#"# OCM CLI Configuration File
# Settings for the accounts management command-line interface
# WARNING: auth_token is a credential, keep this file private

{}
"#,
            yaml_content
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let config = Config::load_from(&path).await.unwrap();
        assert!(path.exists());
        assert_eq!(config.url, "https://api.openshift.com");
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.poll_interval(), Duration::from_secs(5));

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# OCM CLI Configuration File"));
    }

    #[tokio::test]
    async fn test_partial_file_uses_defaults_for_the_rest() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(
            &path,
            "url: http://localhost:8000\nheaders:\n  X-Trace: abc\n",
        )
        .unwrap();

        let config = Config::load_from(&path).await.unwrap();
        assert_eq!(config.url, "http://localhost:8000");
        assert_eq!(config.max_connections, 100);
        assert_eq!(config.headers.get("X-Trace").map(String::as_str), Some("abc"));
    }

    #[tokio::test]
    async fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        std::fs::write(&path, "url: ftp://example.com\n").unwrap();
        assert_matches!(
            Config::load_from(&path).await,
            Err(CliError::Config(ConfigError::InvalidUrl(_)))
        );

        std::fs::write(&path, "poll_interval_seconds: 0\n").unwrap();
        assert_matches!(
            Config::load_from(&path).await,
            Err(CliError::Config(ConfigError::InvalidValue {
                field: "poll_interval_seconds",
                ..
            }))
        );

        std::fs::write(&path, "timeout_seconds: [1, 2]\n").unwrap();
        assert_matches!(
            Config::load_from(&path).await,
            Err(CliError::Config(ConfigError::InvalidFormat(_)))
        );
    }

    #[test]
    fn test_url_override() {
        let config = Config::default()
            .with_url(Some("http://127.0.0.1:9000".to_string()))
            .unwrap();
        assert_eq!(config.url, "http://127.0.0.1:9000");

        assert!(Config::default().with_url(Some("nope".to_string())).is_err());
        assert_eq!(Config::default().with_url(None).unwrap().url, Config::default().url);
    }

    #[test]
    fn test_connection_uses_configured_url() {
        let config = Config {
            url: "http://127.0.0.1:9000".to_string(),
            auth_token: Some("secret".to_string()),
            ..Config::default()
        };
        let connection = config.connection().unwrap();
        assert_eq!(connection.url().as_str(), "http://127.0.0.1:9000/");
    }
}
