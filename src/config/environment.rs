//! Configuración de variables de entorno
//!
//! Se lee una sola vez al arrancar. `from_lookup` recibe la función de
//! búsqueda para poder probar la carga sin tocar el entorno real.

use std::env;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::Level;

use super::database::DatabaseConfig;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub log_level: Level,
    pub cors_origins: Vec<String>,
    pub database: DatabaseConfig,
}

impl EnvironmentConfig {
    /// Cargar desde las variables del proceso
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let defaults = DatabaseConfig::new(database_url);
        let database = DatabaseConfig {
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), defaults.max_connections)?,
            min_connections: parse_or("DATABASE_MIN_CONNECTIONS", get("DATABASE_MIN_CONNECTIONS"), defaults.min_connections)?,
            connect_timeout: Duration::from_secs(parse_or(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                get("DATABASE_CONNECT_TIMEOUT_SECS"),
                defaults.connect_timeout.as_secs(),
            )?),
            ..defaults
        };

        Ok(Self {
            environment: get("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", get("PORT"), 3000)?,
            log_level: parse_or("LOG_LEVEL", get("LOG_LEVEL"), Level::INFO)?,
            cors_origins: get("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            database,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la dirección de escucha
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(var: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
