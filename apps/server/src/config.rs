use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::Context;
use dailycap_core::notifications::MailConfig;

use crate::auth::{decode_secret_key, AuthConfig};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub auth: AuthConfig,
    pub mail: MailConfig,
    pub mail_timeout: Duration,
}

impl Config {
    /// Reads `DC_*` variables, loading a `.env` file first when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let listen_addr = parse(&var("DC_LISTEN_ADDR", "0.0.0.0:8080"), "DC_LISTEN_ADDR")?;
        let db_path = var("DC_DB_PATH", "./db/dailycap.db");
        let cors_allow = var("DC_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = parse(&var("DC_REQUEST_TIMEOUT_MS", "30000"), "DC_REQUEST_TIMEOUT_MS")?;

        let secret = lookup("DC_SECRET_KEY").context("DC_SECRET_KEY must be set")?;
        let jwt_secret = decode_secret_key(&secret).context("Invalid DC_SECRET_KEY")?;
        let ttl_secs: u64 = parse(&var("DC_TOKEN_TTL_SECS", "86400"), "DC_TOKEN_TTL_SECS")?;

        let mail = MailConfig {
            host: var("DC_MAIL_SERVER", ""),
            port: parse(&var("DC_MAIL_PORT", "587"), "DC_MAIL_PORT")?,
            use_tls: parse_flag(&var("DC_MAIL_USE_TLS", "true"), "DC_MAIL_USE_TLS")?,
            username: var("DC_MAIL_USERNAME", ""),
            password: var("DC_MAIL_PASSWORD", ""),
            sender: var("DC_SENDER_EMAIL", ""),
        };
        let mail_timeout_ms: u64 = parse(&var("DC_MAIL_TIMEOUT_MS", "5000"), "DC_MAIL_TIMEOUT_MS")?;

        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            auth: AuthConfig {
                jwt_secret,
                access_token_ttl: Duration::from_secs(ttl_secs),
            },
            mail,
            mail_timeout: Duration::from_millis(mail_timeout_ms),
        })
    }
}

fn parse<T>(raw: &str, key: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid {key}: '{raw}'"))
}

fn parse_flag(raw: &str, key: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("Invalid {key}: '{raw}'"),
    }
}
