// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! [`CircleConfig`] value handed to the bootstrap sequence. Configuration is
//! loaded once at startup and passed explicitly into constructors, so several
//! providers with different credentials can coexist in one process.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `CIRCLE_API_KEY` | Circle API key sent as bearer token | Required |
//! | `CIRCLE_ENTITY_SECRET` | Hex-encoded 32-byte entity secret | Required |
//! | `CIRCLE_API_BASE_URL` | Circle Web3 Services base URL | `https://api.circle.com/v1/w3s` |
//! | `CIRCLE_BLOCKCHAINS` | Comma-separated Circle chain identifiers | `ETH-SEPOLIA,MATIC-AMOY` |
//! | `CIRCLE_WALLET_SET_NAME` | Name given to the bootstrap wallet set | `EIP-1193 Provider Wallet Set` |
//! | `CIRCLE_HTTP_TIMEOUT_SECS` | Per-request HTTP timeout in seconds | `15` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::fmt;
use std::time::Duration;

/// Environment variable holding the Circle API key.
pub const API_KEY_ENV: &str = "CIRCLE_API_KEY";

/// Environment variable holding the hex-encoded entity secret.
///
/// The secret never leaves the process in clear text; it is encrypted under
/// Circle's public key before every mutating request.
pub const ENTITY_SECRET_ENV: &str = "CIRCLE_ENTITY_SECRET";

/// Environment variable overriding the API base URL.
pub const API_BASE_URL_ENV: &str = "CIRCLE_API_BASE_URL";

/// Environment variable listing the chains to create wallets on.
pub const BLOCKCHAINS_ENV: &str = "CIRCLE_BLOCKCHAINS";

/// Environment variable naming the wallet set created at bootstrap.
pub const WALLET_SET_NAME_ENV: &str = "CIRCLE_WALLET_SET_NAME";

/// Environment variable for the per-request HTTP timeout.
pub const HTTP_TIMEOUT_ENV: &str = "CIRCLE_HTTP_TIMEOUT_SECS";

/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

pub const DEFAULT_API_BASE_URL: &str = "https://api.circle.com/v1/w3s";
pub const DEFAULT_BLOCKCHAINS: &str = "ETH-SEPOLIA,MATIC-AMOY";
pub const DEFAULT_WALLET_SET_NAME: &str = "EIP-1193 Provider Wallet Set";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(15);

/// Length of a Circle entity secret in bytes.
pub const ENTITY_SECRET_LEN: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration missing: {0}")]
    Missing(&'static str),

    #[error("invalid entity secret: {0}")]
    InvalidEntitySecret(String),

    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Circle API key.
///
/// `Debug` is redacted so the key cannot leak through logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Raw entity secret bytes, decoded from hex at load time.
#[derive(Clone, PartialEq, Eq)]
pub struct EntitySecret(Vec<u8>);

impl EntitySecret {
    /// Decode a hex-encoded entity secret (an optional `0x` prefix is accepted).
    pub fn from_hex(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
        let bytes = alloy::hex::decode(hex)
            .map_err(|e| ConfigError::InvalidEntitySecret(format!("not valid hex: {e}")))?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, ConfigError> {
        if bytes.len() != ENTITY_SECRET_LEN {
            return Err(ConfigError::InvalidEntitySecret(format!(
                "expected {ENTITY_SECRET_LEN} bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for EntitySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EntitySecret(<redacted>)")
    }
}

/// Everything the bootstrap sequence needs to build a provider.
#[derive(Debug, Clone)]
pub struct CircleConfig {
    pub api_key: ApiKey,
    pub entity_secret: EntitySecret,
    pub base_url: String,
    /// Circle chain identifiers (e.g. `ETH-SEPOLIA`), in request order.
    pub blockchains: Vec<String>,
    pub wallet_set_name: String,
    pub http_timeout: Duration,
}

impl CircleConfig {
    /// Build a configuration with defaults for everything but the credentials.
    pub fn new(api_key: ApiKey, entity_secret: EntitySecret) -> Self {
        Self {
            api_key,
            entity_secret,
            base_url: DEFAULT_API_BASE_URL.to_string(),
            blockchains: parse_blockchains(DEFAULT_BLOCKCHAINS),
            wallet_set_name: DEFAULT_WALLET_SET_NAME.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_ENV).ok_or(ConfigError::Missing(API_KEY_ENV))?;
        let entity_secret = get(ENTITY_SECRET_ENV).ok_or(ConfigError::Missing(ENTITY_SECRET_ENV))?;
        let entity_secret = EntitySecret::from_hex(&entity_secret)?;

        let base_url = get(API_BASE_URL_ENV).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| ConfigError::Invalid {
            name: API_BASE_URL_ENV,
            reason: e.to_string(),
        })?;

        let blockchains =
            parse_blockchains(&get(BLOCKCHAINS_ENV).unwrap_or_else(|| DEFAULT_BLOCKCHAINS.to_string()));
        if blockchains.is_empty() {
            return Err(ConfigError::Invalid {
                name: BLOCKCHAINS_ENV,
                reason: "no chain identifiers given".to_string(),
            });
        }

        let wallet_set_name =
            get(WALLET_SET_NAME_ENV).unwrap_or_else(|| DEFAULT_WALLET_SET_NAME.to_string());

        let http_timeout = match get(HTTP_TIMEOUT_ENV) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|e| ConfigError::Invalid {
                    name: HTTP_TIMEOUT_ENV,
                    reason: format!("{e}"),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: HTTP_TIMEOUT_ENV,
                        reason: "timeout must be at least one second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_HTTP_TIMEOUT,
        };

        Ok(Self {
            api_key: ApiKey::new(api_key),
            entity_secret,
            base_url,
            blockchains,
            wallet_set_name,
            http_timeout,
        })
    }
}

/// Split a comma-separated chain list, dropping blanks.
fn parse_blockchains(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
