use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::template::UnboundPolicy;

const ENV_PREFIX: &str = "APP";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub rendering: RenderingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub origins: Vec<String>,
    /// Maximum request body size in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderingConfig {
    /// Locale used for month names when a request does not name one
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Policy for placeholders without a binding
    #[serde(default)]
    pub unbound: UnboundPolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_body_limit() -> usize {
    256 * 1024 // 256 KiB
}

fn default_locale() -> String {
    "en_US".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", 8080)?
            .set_default("rendering.locale", default_locale())?
            .set_default("rendering.unbound", "pass_through")?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", "text")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(environment());

        builder.build()?.try_deserialize()
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Environment overrides: `APP_SERVER__PORT`, `APP_SERVER__BODY_LIMIT`,
/// `APP_RENDERING__LOCALE`, `APP_LOGGING__LEVEL`, ...
///
/// Sections and fields are split on a double underscore so field names keep
/// their single underscores.
fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("server.origins")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            origins: vec![],
            body_limit: default_body_limit(),
        }
    }
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            unbound: UnboundPolicy::default(),
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
