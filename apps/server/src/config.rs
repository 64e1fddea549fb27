use std::{net::SocketAddr, time::Duration};

use anyhow::Context;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Locale used for ancestors that lack a translation in the requested one.
    pub default_locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: "./db/storefront.db".to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            default_locale: "en_US".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("SF_LISTEN_ADDR") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("Invalid SF_LISTEN_ADDR '{}'", value))?,
            Err(_) => defaults.listen_addr,
        };
        let db_path = std::env::var("SF_DB_PATH").unwrap_or(defaults.db_path);
        let cors_allow = std::env::var("SF_CORS_ALLOW_ORIGINS")
            .map(|v| parse_list(&v))
            .unwrap_or(defaults.cors_allow);
        let request_timeout = std::env::var("SF_REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.request_timeout);
        let default_locale = std::env::var("SF_DEFAULT_LOCALE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_locale);

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout,
            default_locale,
        })
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
