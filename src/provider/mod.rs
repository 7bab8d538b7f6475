// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Circle Provider
//!
//! [`CircleProvider`] exposes Circle's developer-controlled wallets through
//! the generic provider contracts in [`crate::eth`].
//!
//! ## Lifecycle
//!
//! 1. Constructed with a [`CircleClient`] and the entity secret
//! 2. Bootstrapped (see [`crate::bootstrap`]): public key, wallet set and
//!    wallets are fetched/created and stored through the `&mut self` methods
//! 3. Shared read-only (typically behind an `Arc`) with signers and tooling
//!
//! ## Supported surface
//!
//! - `dispatch` / EIP-1193 `request` over a closed method allow-list
//! - Address lookup per network and account listing
//! - Signer acquisition
//!
//! Everything else on [`crate::eth::EthProvider`] fails with
//! [`ProviderError::NotImplemented`].

mod address_map;
mod dispatch;
mod unsupported;

use std::sync::Arc;

use alloy::primitives::Address;
use serde_json::Value;
use tracing::info;

use crate::blockchain::{chains, ChainInfo};
use crate::circle::{
    encrypt_entity_secret, CircleClient, ContractQueryRequest, CreateWalletSetRequest,
    CreateWalletsRequest, ServiceError, Wallet, WalletSet,
};
use crate::config::EntitySecret;
use crate::error::ProviderError;
use crate::signer::CircleSigner;

pub use address_map::AddressMap;
pub use dispatch::SUPPORTED_METHODS;

/// Provider adapter over the Circle Web3 Services API.
#[derive(Debug)]
pub struct CircleProvider {
    client: CircleClient,
    entity_secret: EntitySecret,
    public_key: Option<String>,
    wallet_set_id: Option<String>,
    addresses: AddressMap,
    default_network: Option<&'static ChainInfo>,
}

impl CircleProvider {
    pub fn new(client: CircleClient, entity_secret: EntitySecret) -> Self {
        Self {
            client,
            entity_secret,
            public_key: None,
            wallet_set_id: None,
            addresses: AddressMap::new(),
            default_network: None,
        }
    }

    /// Network used by [`Self::signer`] and `eth_chainId`.
    pub fn with_default_network(mut self, chain: &'static ChainInfo) -> Self {
        self.default_network = Some(chain);
        self
    }

    pub fn client(&self) -> &CircleClient {
        &self.client
    }

    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    pub fn wallet_set_id(&self) -> Option<&str> {
        self.wallet_set_id.as_deref()
    }

    pub fn default_network(&self) -> Option<&'static ChainInfo> {
        self.default_network
    }

    pub fn addresses(&self) -> &AddressMap {
        &self.addresses
    }

    /// Fetch the entity public key from Circle. Does not cache it.
    pub async fn fetch_public_key(&self) -> Result<String, ProviderError> {
        Ok(self.client.fetch_public_key().await?)
    }

    pub fn set_public_key(&mut self, public_key: impl Into<String>) -> Result<(), ProviderError> {
        let public_key = public_key.into();
        if public_key.trim().is_empty() {
            return Err(ProviderError::EmptyValue("public key"));
        }
        self.public_key = Some(public_key);
        Ok(())
    }

    pub fn set_wallet_set_id(&mut self, wallet_set_id: impl Into<String>) -> Result<(), ProviderError> {
        let wallet_set_id = wallet_set_id.into();
        if wallet_set_id.trim().is_empty() {
            return Err(ProviderError::EmptyValue("wallet set ID"));
        }
        self.wallet_set_id = Some(wallet_set_id);
        Ok(())
    }

    /// Encrypt the entity secret under the cached public key.
    ///
    /// Called once per mutating request; never falls back to clear text.
    pub fn entity_secret_ciphertext(&self) -> Result<String, ProviderError> {
        let public_key = self.public_key.as_deref().ok_or(ProviderError::MissingPublicKey)?;
        Ok(encrypt_entity_secret(public_key, &self.entity_secret)?)
    }

    /// Create a wallet set. The returned ID is not stored; see
    /// [`Self::set_wallet_set_id`].
    pub async fn create_wallet_set(&self, name: &str) -> Result<WalletSet, ProviderError> {
        let request = CreateWalletSetRequest::new(self.entity_secret_ciphertext()?, name);
        let wallet_set = self.client.create_wallet_set(&request).await?;
        info!(
            wallet_set_id = %wallet_set.id,
            idempotency_key = %request.idempotency_key,
            "Created wallet set"
        );
        Ok(wallet_set)
    }

    /// Create `count` smart contract wallets per Circle chain identifier in
    /// the stored wallet set. The wallets are not recorded; see
    /// [`Self::record_wallets`].
    pub async fn create_wallets(
        &self,
        blockchains: &[String],
        count: u32,
    ) -> Result<Vec<Wallet>, ProviderError> {
        let wallet_set_id = self
            .wallet_set_id
            .as_deref()
            .ok_or(ServiceError::MissingWalletSetId)?;
        let request = CreateWalletsRequest::new(
            wallet_set_id,
            blockchains.to_vec(),
            count,
            self.entity_secret_ciphertext()?,
        );
        let wallets = self.client.create_wallets(&request).await?;
        info!(
            wallet_set_id,
            count = wallets.len(),
            idempotency_key = %request.idempotency_key,
            "Created wallets"
        );
        Ok(wallets)
    }

    /// Record wallets into the address map.
    ///
    /// Fails without modifying the map if any wallet's chain or address
    /// cannot be translated, or if the batch holds two wallets for one
    /// network.
    pub fn record_wallets(&mut self, wallets: &[Wallet]) -> Result<(), ProviderError> {
        self.addresses.record(wallets)
    }

    /// Address of the wallet recorded for a generic network name.
    pub fn address_for(&self, network: &str) -> Result<Address, ProviderError> {
        self.addresses
            .get(network)
            .ok_or_else(|| ProviderError::AddressNotFound(network.to_string()))
    }

    /// All recorded addresses, ordered by network name.
    pub fn accounts(&self) -> Vec<Address> {
        self.addresses.addresses().collect()
    }

    /// Read-only contract call on a generic network, returning the raw
    /// ABI-encoded output.
    pub async fn query_contract(
        &self,
        network: &str,
        contract: Address,
        function_signature: Option<&str>,
        parameters: Option<Vec<Value>>,
    ) -> Result<String, ProviderError> {
        let blockchain = chains::to_blockchain(network)?;
        let mut request = ContractQueryRequest::new(contract.to_string(), blockchain);
        if let Some(signature) = function_signature {
            request = request.with_function(signature);
        }
        if let Some(parameters) = parameters {
            request = request.with_parameters(parameters);
        }
        Ok(self.client.query_contract_state(&request).await?)
    }

    /// New signer for the default network.
    ///
    /// Every call yields an independent signer; signers only read the
    /// provider's address map.
    pub fn signer(self: &Arc<Self>) -> Result<CircleSigner, ProviderError> {
        CircleSigner::new(Arc::clone(self))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{ApiKey, DEFAULT_HTTP_TIMEOUT};
    use chrono::Utc;

    /// Provider pointed at an address nothing listens on.
    pub(crate) fn offline_provider() -> CircleProvider {
        let client = CircleClient::with_base_url(
            &ApiKey::new("TEST_API_KEY"),
            "http://127.0.0.1:9",
            DEFAULT_HTTP_TIMEOUT,
        )
        .unwrap();
        let secret = EntitySecret::from_bytes(vec![7u8; 32]).unwrap();
        CircleProvider::new(client, secret)
    }

    pub(crate) fn wallet(blockchain: &str, address: &str) -> Wallet {
        Wallet {
            id: format!("wallet-{blockchain}"),
            address: address.to_string(),
            blockchain: blockchain.to_string(),
            create_date: Utc::now(),
            update_date: Utc::now(),
            state: Some("LIVE".to_string()),
            wallet_set_id: Some("ws-1".to_string()),
            custody_type: Some("DEVELOPER".to_string()),
            account_type: None,
        }
    }

    /// Provider with Sepolia and Amoy wallets recorded, Sepolia as default.
    pub(crate) fn bootstrapped_provider() -> CircleProvider {
        let mut provider =
            offline_provider().with_default_network(chains::by_network("sepolia").unwrap());
        provider
            .record_wallets(&[
                wallet("ETH-SEPOLIA", "0x1111111111111111111111111111111111111111"),
                wallet("MATIC-AMOY", "0x2222222222222222222222222222222222222222"),
            ])
            .unwrap();
        provider
    }

    #[test]
    fn setters_reject_empty_values() {
        let mut provider = offline_provider();
        assert!(matches!(
            provider.set_public_key("  "),
            Err(ProviderError::EmptyValue("public key"))
        ));
        assert!(matches!(
            provider.set_wallet_set_id(""),
            Err(ProviderError::EmptyValue("wallet set ID"))
        ));
        assert!(provider.public_key().is_none());
        assert!(provider.wallet_set_id().is_none());

        provider.set_wallet_set_id("ws-1").unwrap();
        assert_eq!(provider.wallet_set_id(), Some("ws-1"));
    }

    #[test]
    fn encryption_requires_a_cached_public_key() {
        let provider = offline_provider();
        assert!(matches!(
            provider.entity_secret_ciphertext(),
            Err(ProviderError::MissingPublicKey)
        ));
    }

    #[tokio::test]
    async fn wallet_set_creation_without_key_sends_nothing() {
        let provider = offline_provider();
        let err = provider.create_wallet_set("set").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingPublicKey));
    }

    #[tokio::test]
    async fn wallet_creation_without_wallet_set_fails_first() {
        let provider = offline_provider();
        let err = provider
            .create_wallets(&["ETH-SEPOLIA".to_string()], 1)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Service(ServiceError::MissingWalletSetId)));
        assert_eq!(err.to_string(), "wallet set ID is not defined");
    }

    #[test]
    fn address_lookup_is_total_over_recorded_networks_only() {
        let provider = bootstrapped_provider();
        assert!(provider.address_for("sepolia").is_ok());
        assert!(provider.address_for("amoy").is_ok());

        for missing in ["mainnet", "Fuji", "not-a-network"] {
            let err = provider.address_for(missing).unwrap_err();
            assert!(matches!(err, ProviderError::AddressNotFound(ref n) if n == missing));
            assert_eq!(err.to_string(), format!("address not found for network {missing}"));
        }
    }

    #[test]
    fn address_lookup_matches_signer_network_resolution() {
        let provider = bootstrapped_provider();
        let expected = provider.address_for("sepolia").unwrap();
        assert_eq!(provider.address_for("Sepolia").unwrap(), expected);
        assert_eq!(provider.address_for("  AMOY ").unwrap(), provider.address_for("amoy").unwrap());

        let signer = CircleSigner::for_network(Arc::new(provider), "Sepolia").unwrap();
        assert_eq!(signer.address(), expected);
    }

    #[test]
    fn accounts_are_ordered_by_network() {
        let provider = bootstrapped_provider();
        let accounts: Vec<String> = provider.accounts().iter().map(|a| a.to_string()).collect();
        assert_eq!(
            accounts,
            vec![
                "0x2222222222222222222222222222222222222222",
                "0x1111111111111111111111111111111111111111",
            ]
        );
    }

    #[tokio::test]
    async fn contract_query_rejects_unknown_networks_locally() {
        let provider = offline_provider();
        let err = provider
            .query_contract("goerli", Address::ZERO, None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Chain(_)));
    }
}
