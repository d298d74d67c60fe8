use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub tracking: TrackingConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// PIX gateway credentials and endpoint
#[derive(Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub secret_key: String,
    pub timeout: Duration,
}

/// Attribution service settings; `enabled` is the feature toggle
#[derive(Clone)]
pub struct TrackingConfig {
    pub enabled: bool,
    pub api_url: String,
    pub api_token: Option<String>,
    pub platform: String,
    pub is_test: bool,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub max_entries: u64,
    pub ttl: Duration,
}

impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("secret_key", &mask_secret(&self.secret_key))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl std::fmt::Debug for TrackingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackingConfig")
            .field("enabled", &self.enabled)
            .field("api_url", &self.api_url)
            .field("api_token", &self.api_token.as_deref().map(mask_secret))
            .field("platform", &self.platform)
            .field("is_test", &self.is_test)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Keep only the first characters of a credential for log output
pub fn mask_secret(secret: &str) -> String {
    let prefix: String = secret.chars().take(8).collect();
    format!("{}...", prefix)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (environment, test fixtures)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = Duration::from_secs(parse_or(&lookup, "HTTP_TIMEOUT_SECS", 30u64)?);

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT '{}' (expected 'pretty' or 'json')",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                env: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_format,
            },
            server: ServerConfig::from_lookup(&lookup)?,
            gateway: GatewayConfig {
                base_url: lookup("GATEWAY_BASE_URL")
                    .unwrap_or_else(|| "https://app.ghostspaysv1.com/api/v1".to_string()),
                secret_key: lookup("GATEWAY_SECRET_KEY").ok_or_else(|| {
                    AppError::Configuration("GATEWAY_SECRET_KEY not set".to_string())
                })?,
                timeout,
            },
            tracking: TrackingConfig {
                enabled: parse_or(&lookup, "TRACKING_ENABLED", false)?,
                api_url: lookup("TRACKING_API_URL").unwrap_or_else(|| {
                    "https://api.utmify.com.br/api-credentials/orders".to_string()
                }),
                api_token: lookup("TRACKING_API_TOKEN").filter(|t| !t.is_empty()),
                platform: lookup("TRACKING_PLATFORM").unwrap_or_else(|| "GhostsPay".to_string()),
                is_test: parse_or(&lookup, "TRACKING_IS_TEST", false)?,
                timeout,
            },
            store: StoreConfig {
                max_entries: parse_or(&lookup, "ORDER_STORE_MAX_ENTRIES", 10_000u64)?,
                ttl: Duration::from_secs(parse_or(&lookup, "ORDER_STORE_TTL_SECS", 86_400u64)?),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.gateway.secret_key.trim().is_empty() {
            return Err(AppError::Configuration(
                "GATEWAY_SECRET_KEY must not be empty".to_string(),
            ));
        }

        if self.gateway.timeout.is_zero() {
            return Err(AppError::Configuration(
                "HTTP timeout must be greater than 0".to_string(),
            ));
        }

        if self.tracking.enabled && self.tracking.api_token.is_none() {
            return Err(AppError::Configuration(
                "TRACKING_API_TOKEN is required when TRACKING_ENABLED=true".to_string(),
            ));
        }

        if self.store.max_entries == 0 || self.store.ttl.is_zero() {
            return Err(AppError::Configuration(
                "Order store capacity and TTL must be greater than 0".to_string(),
            ));
        }

        self.server.validate()
    }
}

pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        None => Ok(default),
    }
}
