//! Application configuration loaded from environment variables.

use anyhow::Context;

/// Port used when `PORT` is unset.
const DEFAULT_PORT: u16 = 8080;

/// Pool size used when `DATABASE_MAX_CONNECTIONS` is unset.
const DEFAULT_MAX_CONNECTIONS: u32 = 20;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (e.g., "0.0.0.0:8080").
    pub bind_addr: String,

    /// PostgreSQL connection string.
    pub database_url: String,

    /// Upper bound on pooled database connections.
    pub max_connections: u32,

    /// Site name shown in page titles and the header.
    pub site_name: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`: PostgreSQL connection string
    ///
    /// Optional:
    /// - `PORT`: TCP port to listen on (default: 8080)
    /// - `DATABASE_MAX_CONNECTIONS`: Pool size (default: 20)
    /// - `SITE_NAME`: Site name (default: "Scenes of Shakespeare")
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) if !raw.is_empty() => raw
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {raw}"))?,
            _ => DEFAULT_PORT,
        };
        let bind_addr = format!("0.0.0.0:{port}");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .context("DATABASE_URL env var not set")?;

        let max_connections = match std::env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) if !raw.is_empty() => raw.parse::<u32>().with_context(|| {
                format!("DATABASE_MAX_CONNECTIONS is not a valid count: {raw}")
            })?,
            _ => DEFAULT_MAX_CONNECTIONS,
        };

        let site_name =
            std::env::var("SITE_NAME").unwrap_or_else(|_| "Scenes of Shakespeare".to_string());

        tracing::info!(
            bind_addr = %bind_addr,
            max_connections,
            site_name = %site_name,
            "configuration loaded"
        );

        Ok(Self {
            bind_addr,
            database_url,
            max_connections,
            site_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize config tests that manipulate env vars.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "PORT",
        "DATABASE_URL",
        "DATABASE_MAX_CONNECTIONS",
        "SITE_NAME",
    ];

    /// Run `f` with only `vars` set among the config keys.
    fn with_env_vars<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_MUTEX.lock().unwrap();

        let saved: Vec<_> = ENV_KEYS
            .iter()
            .map(|k| (*k, std::env::var(k).ok()))
            .collect();

        // SAFETY: Serialized by mutex; only test code touches these vars.
        unsafe {
            for k in ENV_KEYS {
                std::env::remove_var(k);
            }
            for (k, v) in vars {
                std::env::set_var(k, v);
            }
        }

        f();

        // SAFETY: Restoring original env state.
        unsafe {
            for (k, v) in &saved {
                match v {
                    Some(val) => std::env::set_var(k, val),
                    None => std::env::remove_var(k),
                }
            }
        }
    }

    #[test]
    fn config_defaults() {
        with_env_vars(&[("DATABASE_URL", "postgres://localhost/shakespeare")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            assert_eq!(config.database_url, "postgres://localhost/shakespeare");
            assert_eq!(config.max_connections, 20);
            assert_eq!(config.site_name, "Scenes of Shakespeare");
        });
    }

    #[test]
    fn config_custom_values() {
        with_env_vars(
            &[
                ("PORT", "9090"),
                ("DATABASE_URL", "postgres://db/plays"),
                ("DATABASE_MAX_CONNECTIONS", "4"),
                ("SITE_NAME", "The Globe"),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.bind_addr, "0.0.0.0:9090");
                assert_eq!(config.database_url, "postgres://db/plays");
                assert_eq!(config.max_connections, 4);
                assert_eq!(config.site_name, "The Globe");
            },
        );
    }

    #[test]
    fn config_missing_database_url_fails() {
        with_env_vars(&[], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[test]
    fn config_empty_database_url_fails() {
        with_env_vars(&[("DATABASE_URL", "")], || {
            assert!(Config::from_env().is_err());
        });
    }

    #[test]
    fn config_empty_port_uses_default() {
        with_env_vars(&[("PORT", ""), ("DATABASE_URL", "postgres://x")], || {
            let config = Config::from_env().unwrap();
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
        });
    }

    #[test]
    fn config_invalid_port_fails() {
        with_env_vars(&[("PORT", "eighty"), ("DATABASE_URL", "postgres://x")], || {
            let err = Config::from_env().unwrap_err();
            assert!(err.to_string().contains("PORT"));
        });
    }

    #[test]
    fn config_port_out_of_range_fails() {
        with_env_vars(&[("PORT", "70000"), ("DATABASE_URL", "postgres://x")], || {
            assert!(Config::from_env().is_err());
        });
    }
}
