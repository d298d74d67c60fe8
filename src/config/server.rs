use crate::core::{AppError, Result};

use super::parse_or;

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path prefix shared by the storefront API routes
    pub base_path: String,
}

impl ServerConfig {
    pub fn new(host: String, port: u16, base_path: String) -> Self {
        Self {
            host,
            port,
            base_path,
        }
    }

    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self::new(
            lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            parse_or(lookup, "PORT", 3001u16)?,
            lookup("BASE_PATH").unwrap_or_else(|| "/pagamentoiof2".to_string()),
        ))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.base_path.starts_with('/') || self.base_path.ends_with('/') {
            return Err(AppError::Configuration(format!(
                "BASE_PATH must start with '/' and not end with one, got '{}'",
                self.base_path
            )));
        }
        Ok(())
    }
}
