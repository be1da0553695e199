//! Appliance Sim configuration management

use crate::access::AccessSettings;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main simulator configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Listener configuration
    pub server: ServerConfig,

    /// Initial access toggle values
    pub access: AccessSettings,
}

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on (0 picks a free port)
    pub port: u16,

    /// Allowed CORS origins (empty allows any)
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8989,
            cors_origins: Vec::new(),
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the listener cannot use
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::Config("server.host must not be empty".to_string()));
        }
        Ok(())
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SimulatorConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8989);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.access, AccessSettings::default());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: SimulatorConfig = toml::from_str(
            r#"
            [server]
            port = 9000

            [access.ssh]
            enabled = true
            "#,
        )
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert!(config.access.ssh.enabled);
        assert!(!config.access.dcui.enabled);
        assert_eq!(config.access.shell.timeout, 0);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = SimulatorConfig::default();
        config.access.shell.enabled = true;
        config.access.shell.timeout = 300;

        let rendered = config.to_toml().unwrap();
        let parsed: SimulatorConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.access, config.access);
        assert_eq!(parsed.server.port, config.server.port);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nhost = \"0.0.0.0\"\n\n[access.shell]\nenabled = true\ntimeout = 60"
        )
        .unwrap();

        let config = SimulatorConfig::load(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.access.shell.enabled);
        assert_eq!(config.access.shell.timeout, 60);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SimulatorConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();
        let err = SimulatorConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_empty_host_rejected() {
        let mut config = SimulatorConfig::default();
        config.server.host = " ".to_string();
        assert!(config.validate().is_err());
    }
}
