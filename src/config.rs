// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup and never changes afterwards.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `RADIX_NETWORK` | `mainnet` or `stokenet` | `stokenet` |
//! | `RADIX_GATEWAY_URL` | Gateway base URL override | Network default |
//! | `GATEWAY_TIMEOUT_SECS` | Gateway request timeout | `15` |
//! | `WALLET_ACCOUNT_INDEX` | Account index used for signing | `0` |
//! | `WALLET_SIGNING_KEY_PEM` | PEM bundle, one key per account index | Required unless path set |
//! | `WALLET_SIGNING_KEY_PATH` | File holding the PEM bundle | Optional |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{fs, time::Duration};

use crate::blockchain::{GatewayConfig, Network};

pub const RADIX_NETWORK_ENV: &str = "RADIX_NETWORK";
pub const RADIX_GATEWAY_URL_ENV: &str = "RADIX_GATEWAY_URL";
pub const GATEWAY_TIMEOUT_SECS_ENV: &str = "GATEWAY_TIMEOUT_SECS";
pub const WALLET_ACCOUNT_INDEX_ENV: &str = "WALLET_ACCOUNT_INDEX";

/// Environment variable holding the signing keys inline.
///
/// Literal `\n` sequences are accepted so the bundle fits on one line.
pub const WALLET_SIGNING_KEY_PEM_ENV: &str = "WALLET_SIGNING_KEY_PEM";
pub const WALLET_SIGNING_KEY_PATH_ENV: &str = "WALLET_SIGNING_KEY_PATH";

pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration: {0}")]
    Missing(String),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("Failed to read {path}: {reason}")]
    Unreadable { path: String, reason: String },
}

/// Everything the service needs to start.
#[derive(Clone)]
pub struct AppConfig {
    pub network: Network,
    pub gateway: GatewayConfig,
    pub account_index: u32,
    /// PEM bundle with one private key per account index
    pub signing_key_pem: String,
    pub host: String,
    pub port: u16,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("network", &self.network)
            .field("gateway", &self.gateway)
            .field("account_index", &self.account_index)
            .field("signing_key_pem", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_optional)
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let network = match lookup(RADIX_NETWORK_ENV) {
            Some(raw) => Network::from_name(&raw).map_err(|reason| ConfigError::Invalid {
                name: RADIX_NETWORK_ENV,
                reason,
            })?,
            None => Network::Stokenet,
        };

        let timeout_secs = parse_or(&lookup, GATEWAY_TIMEOUT_SECS_ENV, 15u64)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                name: GATEWAY_TIMEOUT_SECS_ENV,
                reason: "must be greater than zero".to_string(),
            });
        }

        let gateway = GatewayConfig {
            base_url: lookup(RADIX_GATEWAY_URL_ENV),
            timeout: Duration::from_secs(timeout_secs),
        };

        Ok(Self {
            network,
            gateway,
            account_index: parse_or(&lookup, WALLET_ACCOUNT_INDEX_ENV, 0u32)?,
            signing_key_pem: load_signing_key_pem(&lookup)?,
            host: lookup(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(&lookup, PORT_ENV, DEFAULT_PORT)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: format!("`{raw}`: {e}"),
        }),
        None => Ok(default),
    }
}

fn load_signing_key_pem(lookup: &impl Fn(&str) -> Option<String>) -> Result<String, ConfigError> {
    if let Some(pem) = lookup(WALLET_SIGNING_KEY_PEM_ENV) {
        return Ok(pem.replace("\\n", "\n"));
    }

    let path = lookup(WALLET_SIGNING_KEY_PATH_ENV).ok_or_else(|| {
        ConfigError::Missing(format!(
            "{WALLET_SIGNING_KEY_PEM_ENV} or {WALLET_SIGNING_KEY_PATH_ENV}"
        ))
    })?;
    let pem = fs::read_to_string(&path).map_err(|e| ConfigError::Unreadable {
        path: path.clone(),
        reason: e.to_string(),
    })?;
    let trimmed = pem.trim().to_string();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid {
            name: WALLET_SIGNING_KEY_PATH_ENV,
            reason: format!("{path} is empty"),
        });
    }
    Ok(trimmed)
}

/// Read an environment variable, treating blank values as unset.
pub fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
