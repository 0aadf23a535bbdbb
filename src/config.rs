use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::{info, warn};

use crate::session::DEFAULT_TTL_MINUTES;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Public contact details shown on the landing page.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub instagram: String,
    pub address: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Sri Sai Financial Services".to_string(),
            phone: "+91 8660871116".to_string(),
            email: "srisai.financialservices@gmail.com".to_string(),
            instagram: "srisai_financial_services".to_string(),
            address: "Main Road, Bangalore, Karnataka".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    /// Idle minutes before an admin session is dropped.
    pub session_ttl_minutes: i64,
    pub site: SiteInfo,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let site = SiteInfo::default();
        Ok(Self {
            port: try_load("PORT", "8080")?,
            backend_url: load_string("BACKEND_URL", "http://localhost:5000")
                .trim_end_matches('/')
                .to_string(),
            session_ttl_minutes: load_session_ttl()?,
            site: SiteInfo {
                name: load_string("SITE_NAME", &site.name),
                phone: load_string("CONTACT_PHONE", &site.phone),
                email: load_string("CONTACT_EMAIL", &site.email),
                instagram: load_string("CONTACT_INSTAGRAM", &site.instagram),
                address: load_string("CONTACT_ADDRESS", &site.address),
            },
        })
    }

    /// Config pointing at an explicit backend, with every other value defaulted.
    pub fn with_backend(backend_url: impl Into<String>) -> Self {
        Self {
            port: 8080,
            backend_url: backend_url.into().trim_end_matches('/').to_string(),
            session_ttl_minutes: DEFAULT_TTL_MINUTES,
            site: SiteInfo::default(),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn load_string(key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    })
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = load_string(key, default);
    raw.parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}

const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

fn load_session_ttl() -> Result<i64, ConfigError> {
    let minutes: i64 = try_load("SESSION_TTL_MINUTES", &DEFAULT_TTL_MINUTES.to_string())?;
    if (1..=MAX_TTL_MINUTES).contains(&minutes) {
        Ok(minutes)
    } else {
        Err(ConfigError::Invalid {
            key: "SESSION_TTL_MINUTES",
            value: minutes.to_string(),
            reason: format!("must be between 1 and {MAX_TTL_MINUTES}"),
        })
    }
}
