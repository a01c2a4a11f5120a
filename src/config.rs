//! Server configuration, loaded from the environment (and `.env`).

use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("invalid MODO_GERACAO value: {0} (expected 'tolerante' or 'estrito')")]
    InvalidModo(String),
}

/// What a per-document failure does to the rest of the batch.
///
/// The office normally wants every document it can get even when one
/// template is missing, so `Tolerante` skips and keeps going; `Estrito`
/// aborts on the first failure for whoever prefers all-or-nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModoLote {
    #[default]
    Tolerante,
    Estrito,
}

impl ModoLote {
    fn parse(valor: &str) -> Result<Self, ConfigError> {
        match valor.trim().to_lowercase().as_str() {
            "tolerante" => Ok(Self::Tolerante),
            "estrito" => Ok(Self::Estrito),
            _ => Err(ConfigError::InvalidModo(valor.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the templates tree.
    pub templates_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub modo: ModoLote,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let templates_dir = env::var("TEMPLATES_DIR")
            .unwrap_or_else(|_| "./templates/modelos".to_string())
            .into();
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(valor) => valor
                .parse()
                .map_err(|_| ConfigError::InvalidPort(valor.clone()))?,
            Err(_) => 8080,
        };
        let modo = match env::var("MODO_GERACAO") {
            Ok(valor) => ModoLote::parse(&valor)?,
            Err(_) => ModoLote::Tolerante,
        };

        Ok(Self {
            templates_dir,
            host,
            port,
            modo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modo() {
        assert_eq!(ModoLote::parse("tolerante").unwrap(), ModoLote::Tolerante);
        assert_eq!(ModoLote::parse("Estrito").unwrap(), ModoLote::Estrito);
        assert!(ModoLote::parse("rigoroso").is_err());
    }
}
