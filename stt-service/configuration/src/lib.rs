use std::path::PathBuf;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

pub use config::ConfigError;

mod logging;

pub use logging::setup_logging;

pub type AppConfig = SttConfig;

const CONFIG_PREFIX: &str = "STT_SERVICE";
const CONFIG_PATH_VAR: &str = "STT_SERVICE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/stt-service";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SttConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub staging: StagingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_speech_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    /// Upper bound for one recognition, staging excluded.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StagingConfig {
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            endpoint: default_speech_endpoint(),
            api_key: None,
            access_token: None,
            timeout_secs: default_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Loads `config/stt-service.{toml,...}` (or the file named by
/// `STT_SERVICE_CONFIG`) and then `STT_SERVICE__*` environment variables,
/// e.g. `STT_SERVICE__SERVICE__SPEECH__API_KEY`.
pub fn load_config() -> Result<SttConfig, ConfigError> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_config_from(&path)
}

pub fn load_config_from(path: &str) -> Result<SttConfig, ConfigError> {
    Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(CONFIG_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    32 * 1024 * 1024
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_speech_endpoint() -> String {
    "https://speech.googleapis.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_request_timeout_secs() -> u64 {
    25
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_are_deterministic() {
        let cfg = SttConfig::default();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.max_upload_bytes, 32 * 1024 * 1024);
        assert_eq!(cfg.logging.format, LogFormat::Text);
        assert_eq!(cfg.service.speech.endpoint, "https://speech.googleapis.com");
        assert_eq!(cfg.service.speech.timeout(), Duration::from_secs(30));
        assert!(cfg.service.speech.api_key.is_none());
        assert!(cfg.service.staging.directory.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = load_config_from("/nonexistent/stt-service").expect("defaults load");
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.service.speech.request_timeout(), Duration::from_secs(25));
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("stt-service.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9090

[logging]
format = "json"

[service.speech]
endpoint = "http://localhost:4010"
api_key = "test-key"
timeout_secs = 5

[service.staging]
directory = "/var/tmp/stt"
"#,
        )
        .expect("config written");

        let cfg = load_config_from(path.to_str().expect("utf-8 path")).expect("config loads");

        assert_eq!(cfg.server.port, 9090);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.service.speech.endpoint, "http://localhost:4010");
        assert_eq!(cfg.service.speech.api_key.as_deref(), Some("test-key"));
        assert_eq!(cfg.service.speech.timeout(), Duration::from_secs(5));
        assert_eq!(
            cfg.service.staging.directory,
            Some(PathBuf::from("/var/tmp/stt"))
        );
    }
}
