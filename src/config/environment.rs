//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl EnvironmentConfig {
    /// Cargar la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            request_timeout: Duration::from_secs(parse_var(
                "REQUEST_TIMEOUT_SECS",
                defaults.request_timeout.as_secs(),
            )?),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Leer una variable numérica, usando el valor por defecto si no existe
pub(crate) fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid number, got '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert!(!config.is_production());
        assert_eq!(config.server_url(), "0.0.0.0:8000");
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://localhost:3000, https://fleet.example.com,,");
        assert_eq!(origins, vec!["http://localhost:3000", "https://fleet.example.com"]);
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_parse_var_default_and_error() {
        let port: u16 = parse_var("VEHICLE_REGISTRY_TEST_UNSET_PORT", 9000).unwrap();
        assert_eq!(port, 9000);

        env::set_var("VEHICLE_REGISTRY_TEST_BAD_PORT", "not-a-port");
        let result: Result<u16> = parse_var("VEHICLE_REGISTRY_TEST_BAD_PORT", 9000);
        assert!(result.is_err());

        env::set_var("VEHICLE_REGISTRY_TEST_GOOD_PORT", " 8081 ");
        let port: u16 = parse_var("VEHICLE_REGISTRY_TEST_GOOD_PORT", 9000).unwrap();
        assert_eq!(port, 8081);
    }
}
