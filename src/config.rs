use std::net::{IpAddr, Ipv4Addr};
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_connections: u32,
}

impl Config {
    /// Reads settings from the process environment. Call after `dotenvy::dotenv()`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        // Unparseable values fall back to defaults rather than aborting startup
        let host = lookup("HOST")
            .and_then(|h| h.parse().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST));
        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|m| m.parse().ok())
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Ok(Self { database_url, host, port, max_connections })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn database_url_is_required() {
        let vars = HashMap::new();
        assert_eq!(Config::from_lookup(lookup(vars)), Err(ConfigError::MissingDatabaseUrl));
    }

    #[test]
    fn defaults_apply_when_optional_vars_are_missing_or_invalid() {
        let vars = HashMap::from([("DATABASE_URL", "postgres://localhost/catalog"), ("PORT", "abc")]);
        let config = Config::from_lookup(lookup(vars)).unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn explicit_values_win() {
        let vars = HashMap::from([
            ("DATABASE_URL", "postgres://db/catalog"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
        ]);
        let config = Config::from_lookup(lookup(vars)).unwrap();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 8080);
        assert_eq!(config.max_connections, 20);
    }
}
