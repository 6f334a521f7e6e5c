//! Service configuration from environment variables.

use std::net::Ipv4Addr;

/// Errors raised while reading configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {details}")]
    ParseError { key: String, details: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Name used in the greeting of order summaries
    pub studio_name: String,
    /// Messaging number that receives order summaries
    pub whatsapp_number: String,
    pub cors_allow_any_origin: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
            studio_name: "Eran Studio".to_string(),
            whatsapp_number: "265997761194".to_string(),
            cors_allow_any_origin: true,
        }
    }
}

impl Config {
    /// Read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?,
            None => defaults.port,
        };

        let cors_allow_any_origin = match lookup("CORS_ALLOW_ANY_ORIGIN") {
            Some(raw) => parse_bool("CORS_ALLOW_ANY_ORIGIN", &raw)?,
            None => defaults.cors_allow_any_origin,
        };

        let whatsapp_number = lookup("STUDIO_WHATSAPP_NUMBER").unwrap_or(defaults.whatsapp_number);
        if whatsapp_number.is_empty() || !whatsapp_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::ParseError {
                key: "STUDIO_WHATSAPP_NUMBER".to_string(),
                details: "expected digits only, in international format".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            studio_name: lookup("STUDIO_NAME").unwrap_or(defaults.studio_name),
            whatsapp_number,
            cors_allow_any_origin,
        })
    }

    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::ParseError {
            key: key.to_string(),
            details: format!("'{}' is not a boolean", other),
        }),
    }
}
