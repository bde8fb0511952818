use config::{Config, ConfigError, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::validation::rules::is_valid_email;

const DEFAULT_CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub delivery: DeliveryConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Settings for the outbound email provider.
///
/// `api_key` is optional: without it the service still starts, but the
/// contact endpoint answers 503 instead of relaying.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub api_key: Option<String>,
    pub api_url: String,
    pub from_address: String,
    pub recipient: String,
    pub subject_tag: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_any_origin: bool,
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            delivery: DeliveryConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: "https://api.resend.com".to_string(),
            from_address: "onboarding@resend.dev".to_string(),
            recipient: "kartiksuryawanshi55@gmail.com".to_string(),
            subject_tag: "[Portfolio]".to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: true,
            allowed_origins: Vec::new(),
        }
    }
}

impl DeliveryConfig {
    /// The credential, if one was supplied. Blank values count as missing.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.credential().is_some()
    }
}

impl AppConfig {
    /// Loads defaults, then `config.toml` if present, then the process
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        let file = path.exists().then_some(path);
        let env: Map<String, String> = std::env::vars().collect();

        Self::load_from(file, env)
    }

    /// Layered load with an explicit file and environment snapshot.
    ///
    /// Precedence, lowest first: defaults, the bare `RESEND_API_KEY` and
    /// `PORT` variables, the file, then `APP__SECTION__KEY` variables.
    pub fn load_from(file: Option<&Path>, env: Map<String, String>) -> Result<Self, ConfigError> {
        let legacy = Config::builder()
            .set_override_option("delivery.api_key", env.get("RESEND_API_KEY").cloned())?
            .set_override_option("server.port", env.get("PORT").cloned())?
            .build()?;

        let mut builder = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(legacy);

        if let Some(path) = file {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(Some(env)),
        );

        let config = builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("Server port cannot be 0".to_string()));
        }

        if self.delivery.api_url.trim().is_empty() {
            return Err(ConfigError::Message(
                "Delivery API URL cannot be empty".to_string(),
            ));
        }

        if !is_valid_email(&self.delivery.recipient) {
            return Err(ConfigError::Message(format!(
                "Delivery recipient '{}' is not a valid email address",
                self.delivery.recipient
            )));
        }

        if !is_valid_email(&self.delivery.from_address) {
            return Err(ConfigError::Message(format!(
                "Delivery from address '{}' is not a valid email address",
                self.delivery.from_address
            )));
        }

        if !self.cors.allow_any_origin && self.cors.allowed_origins.is_empty() {
            tracing::warn!("CORS allows no origins - browsers will block cross-origin submissions");
        }

        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
