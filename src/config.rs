// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup into an [`AppConfig`].
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `DATA_DIR` | Directory holding the queue database | `/data` |
//! | `WALLET_KEYS_DIR` | Directory of backend wallet PEM keys | `$DATA_DIR/wallets` |
//! | `CHAIN_RPC_URLS` | `chain=url` pairs, comma separated | built-in endpoints |
//! | `CONTRACT_CACHE_CAPACITY` | Token contract cache size | `256` |
//! | `CONTRACT_CACHE_TTL_SECS` | Token contract cache TTL | `300` |
//! | `TLS_CERT_PATH` | PEM certificate chain; enables HTTPS with `TLS_KEY_PATH` | unset |
//! | `TLS_KEY_PATH` | PEM private key for HTTPS | unset |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the data directory path.
///
/// The queue database (`queue.redb`) lives here.
///
/// # Default
/// `/data`
pub const DATA_DIR_ENV: &str = "DATA_DIR";
pub const WALLET_KEYS_DIR_ENV: &str = "WALLET_KEYS_DIR";
pub const CHAIN_RPC_URLS_ENV: &str = "CHAIN_RPC_URLS";
pub const CONTRACT_CACHE_CAPACITY_ENV: &str = "CONTRACT_CACHE_CAPACITY";
pub const CONTRACT_CACHE_TTL_ENV: &str = "CONTRACT_CACHE_TTL_SECS";
pub const TLS_CERT_PATH_ENV: &str = "TLS_CERT_PATH";
pub const TLS_KEY_PATH_ENV: &str = "TLS_KEY_PATH";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_DIR: &str = "/data";
pub const DEFAULT_CONTRACT_CACHE_CAPACITY: usize = 256;
pub const DEFAULT_CONTRACT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Default `RUST_LOG` filter.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// File name of the queue database inside `DATA_DIR`.
pub const QUEUE_DB_FILE: &str = "queue.redb";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("{0} and {1} must be set together")]
    Incomplete(&'static str, &'static str),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Certificate and key for HTTPS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// Fully parsed runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub data_dir: PathBuf,
    pub wallet_keys_dir: PathBuf,
    /// `(chain alias or id, rpc url)` overrides, applied in order
    pub rpc_overrides: Vec<(String, String)>,
    pub contract_cache_capacity: usize,
    pub contract_cache_ttl: Duration,
    pub tls: Option<TlsPaths>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = get(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().map_err(|e| invalid(PORT_ENV, e))?,
            None => DEFAULT_PORT,
        };
        let bind_addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|e| invalid(HOST_ENV, e))?;

        let data_dir = PathBuf::from(get(DATA_DIR_ENV).unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()));
        let wallet_keys_dir = get(WALLET_KEYS_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("wallets"));

        let rpc_overrides = match get(CHAIN_RPC_URLS_ENV) {
            Some(raw) => parse_rpc_overrides(&raw)?,
            None => Vec::new(),
        };

        let contract_cache_capacity = match get(CONTRACT_CACHE_CAPACITY_ENV) {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| invalid(CONTRACT_CACHE_CAPACITY_ENV, e))?,
            None => DEFAULT_CONTRACT_CACHE_CAPACITY,
        };
        let contract_cache_ttl = match get(CONTRACT_CACHE_TTL_ENV) {
            Some(raw) => Duration::from_secs(
                raw.parse::<u64>()
                    .map_err(|e| invalid(CONTRACT_CACHE_TTL_ENV, e))?,
            ),
            None => DEFAULT_CONTRACT_CACHE_TTL,
        };

        let tls = match (get(TLS_CERT_PATH_ENV), get(TLS_KEY_PATH_ENV)) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: cert.into(),
                key: key.into(),
            }),
            (None, None) => None,
            _ => return Err(ConfigError::Incomplete(TLS_CERT_PATH_ENV, TLS_KEY_PATH_ENV)),
        };

        let log_format = match get(LOG_FORMAT_ENV).as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(invalid(LOG_FORMAT_ENV, format!("unknown format `{other}`"))),
        };

        Ok(Self {
            bind_addr,
            data_dir,
            wallet_keys_dir,
            rpc_overrides,
            contract_cache_capacity,
            contract_cache_ttl,
            tls,
            log_format,
        })
    }

    /// Path of the queue database.
    pub fn queue_db_path(&self) -> PathBuf {
        self.data_dir.join(QUEUE_DB_FILE)
    }
}

fn invalid(var: &'static str, reason: impl ToString) -> ConfigError {
    ConfigError::Invalid {
        var,
        reason: reason.to_string(),
    }
}

/// Parse `fuji=http://a,1=http://b` into pairs.
fn parse_rpc_overrides(raw: &str) -> Result<Vec<(String, String)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((chain, url)) if !chain.trim().is_empty() && !url.trim().is_empty() => {
                url::Url::parse(url.trim()).map_err(|e| invalid(CHAIN_RPC_URLS_ENV, e))?;
                Ok((chain.trim().to_string(), url.trim().to_string()))
            }
            _ => Err(invalid(CHAIN_RPC_URLS_ENV, format!("expected chain=url, got `{pair}`"))),
        })
        .collect()
}
