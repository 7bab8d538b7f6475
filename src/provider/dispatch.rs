// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! EIP-1193 method dispatch.
//!
//! The allow-list is closed: a method not listed in [`SUPPORTED_METHODS`]
//! fails with [`ProviderError::UnsupportedMethod`], whatever the provider's
//! state.

use async_trait::async_trait;
use serde_json::Value;

use super::CircleProvider;
use crate::eth::{Eip1193Provider, RequestArguments};
use crate::error::ProviderError;

/// Methods recognised by [`CircleProvider::dispatch`].
pub const SUPPORTED_METHODS: &[&str] = &[
    "eth_accounts",
    "eth_requestAccounts",
    "eth_chainId",
    "eth_blockNumber",
    "eth_sendTransaction",
];

impl CircleProvider {
    /// Dispatch one EIP-1193 request.
    ///
    /// - `eth_accounts` / `eth_requestAccounts`: recorded addresses
    /// - `eth_chainId`: hex chain ID of the default network
    /// - `eth_blockNumber`: recognised, but chain state is not served
    /// - `eth_sendTransaction`: recognised, but signing stays with Circle
    pub fn dispatch(&self, method: &str, _params: &[Value]) -> Result<Value, ProviderError> {
        match method {
            "eth_accounts" | "eth_requestAccounts" => Ok(Value::Array(
                self.accounts()
                    .into_iter()
                    .map(|address| Value::String(address.to_string()))
                    .collect(),
            )),
            "eth_chainId" => {
                let chain = self.default_network().ok_or(ProviderError::NoDefaultNetwork)?;
                Ok(Value::String(format!("{:#x}", chain.chain_id)))
            }
            "eth_blockNumber" => Err(ProviderError::NotImplemented("eth_blockNumber")),
            "eth_sendTransaction" => Err(ProviderError::SigningUnsupported("eth_sendTransaction")),
            other => {
                tracing::debug!(method = other, "Rejected unsupported method");
                Err(ProviderError::UnsupportedMethod(other.to_string()))
            }
        }
    }
}

#[async_trait]
impl Eip1193Provider for CircleProvider {
    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderError> {
        self.dispatch(&args.method, &args.params)
    }
}
