// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Circle Web3 Services HTTP client.
//!
//! One authenticated client per API key. Every call is a single round trip;
//! the client keeps no state beyond its base URL and the bearer header, so
//! whatever a response yields is the caller's to store.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::types::*;
use crate::config::{ApiKey, CircleConfig, DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT};

const PUBLIC_KEY_PATH: &str = "/config/entity/publicKey";
const WALLET_SETS_PATH: &str = "/developer/walletSets";
const WALLETS_PATH: &str = "/developer/wallets";
const CONTRACT_QUERY_PATH: &str = "/contracts/query";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Circle client configuration invalid: {0}")]
    InvalidApiKey(String),

    #[error("Circle request failed: {0}")]
    Http(String),

    #[error("Circle API error {code} ({status}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    #[error("Circle request returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Circle response was invalid: {0}")]
    InvalidResponse(String),

    #[error("wallet set ID is not defined")]
    MissingWalletSetId,
}

impl ServiceError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::Api { status, .. } | ServiceError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Authenticated Circle API client.
#[derive(Debug, Clone)]
pub struct CircleClient {
    base_url: String,
    http: Client,
}

impl CircleClient {
    /// Create a client for the production API with the default timeout.
    pub fn new(api_key: &ApiKey) -> Result<Self, ServiceError> {
        Self::with_base_url(api_key, DEFAULT_API_BASE_URL, DEFAULT_HTTP_TIMEOUT)
    }

    pub fn from_config(config: &CircleConfig) -> Result<Self, ServiceError> {
        Self::with_base_url(&config.api_key, &config.base_url, config.http_timeout)
    }

    /// Create a client against an arbitrary base URL.
    pub fn with_base_url(
        api_key: &ApiKey,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", api_key.expose()))
            .map_err(|e| ServiceError::InvalidApiKey(format!("API key is not a valid header: {e}")))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ServiceError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the entity public key used to encrypt the entity secret.
    pub async fn fetch_public_key(&self) -> Result<String, ServiceError> {
        let response: ApiResponse<PublicKeyData> = self.get_json(PUBLIC_KEY_PATH).await?;
        if response.data.public_key.trim().is_empty() {
            return Err(ServiceError::InvalidResponse(
                "public key in response was empty".to_string(),
            ));
        }
        Ok(response.data.public_key)
    }

    /// Create a developer-controlled wallet set.
    pub async fn create_wallet_set(
        &self,
        request: &CreateWalletSetRequest,
    ) -> Result<WalletSet, ServiceError> {
        let response: ApiResponse<WalletSetData> =
            self.post_json(WALLET_SETS_PATH, request).await?;
        if response.data.wallet_set.id.trim().is_empty() {
            return Err(ServiceError::InvalidResponse(
                "wallet set id in response was empty".to_string(),
            ));
        }
        Ok(response.data.wallet_set)
    }

    /// Create wallets in an existing wallet set.
    ///
    /// An empty wallet set ID is rejected before any request is sent.
    pub async fn create_wallets(
        &self,
        request: &CreateWalletsRequest,
    ) -> Result<Vec<Wallet>, ServiceError> {
        if request.wallet_set_id.trim().is_empty() {
            return Err(ServiceError::MissingWalletSetId);
        }
        let response: ApiResponse<WalletsData> = self.post_json(WALLETS_PATH, request).await?;
        Ok(response.data.wallets)
    }

    /// Execute a read-only contract call and return the raw ABI-encoded output.
    pub async fn query_contract_state(
        &self,
        request: &ContractQueryRequest,
    ) -> Result<String, ServiceError> {
        let response: ApiResponse<ContractQueryData> =
            self.post_json(CONTRACT_QUERY_PATH, request).await?;
        Ok(response.data.output_data)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        debug!(path, "Circle GET");
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| {
                warn!(path, error = %e, "Circle GET failed");
                ServiceError::Http(format!("GET {path} failed: {e}"))
            })?;

        read_json("GET", path, response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ServiceError> {
        debug!(path, "Circle POST");
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(path, error = %e, "Circle POST failed");
                ServiceError::Http(format!("POST {path} failed: {e}"))
            })?;

        read_json("POST", path, response).await
    }
}

async fn read_json<T: DeserializeOwned>(
    method: &'static str,
    path: &str,
    response: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        warn!(method, path, status = status.as_u16(), "Circle request rejected");
        return Err(status_error(status, body));
    }

    response.json().await.map_err(|e| {
        warn!(method, path, error = %e, "Circle response did not decode");
        ServiceError::InvalidResponse(format!("{method} {path} invalid JSON: {e}"))
    })
}

/// Prefer Circle's `{code, message}` error envelope over the raw body.
fn status_error(status: StatusCode, body: String) -> ServiceError {
    match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(error) => ServiceError::Api {
            status: status.as_u16(),
            code: error.code,
            message: error.message,
        },
        Err(_) => ServiceError::Status {
            status: status.as_u16(),
            body,
        },
    }
}
