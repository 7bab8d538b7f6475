// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Provider bootstrap.
//!
//! Brings a fresh [`CircleProvider`] to a usable state:
//!
//! 1. Fetch the entity public key and cache it
//! 2. Create a wallet set (secret encrypted under the cached key)
//! 3. Create one smart contract wallet per requested chain
//! 4. Record the wallet addresses per network
//!
//! Steps run strictly in order and each awaits a single round trip. Any
//! failure aborts the sequence; nothing is retried. Every run creates a new
//! wallet set because every request carries a fresh idempotency key.

use tracing::info;

use crate::blockchain::{chains, ChainError};
use crate::circle::{CircleClient, ServiceError};
use crate::config::{CircleConfig, EntitySecret};
use crate::error::ProviderError;
use crate::provider::CircleProvider;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("no blockchains requested")]
    NoBlockchains,

    #[error(transparent)]
    UnknownBlockchain(#[from] ChainError),

    #[error("failed to build Circle client: {0}")]
    Client(#[source] ServiceError),

    #[error("failed to fetch public key: {0}")]
    PublicKey(#[source] ProviderError),

    #[error("failed to create wallet set: {0}")]
    WalletSet(#[source] ProviderError),

    #[error("failed to create wallet: {0}")]
    Wallets(#[source] ProviderError),

    /// Circle answered without a wallet for some requested chains.
    #[error("failed to create wallet for {}", .0.join(", "))]
    MissingWallets(Vec<String>),

    #[error("failed to record wallets: {0}")]
    RecordWallets(#[source] ProviderError),
}

/// What the bootstrap creates: one wallet per chain in a new wallet set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub wallet_set_name: String,
    /// Circle chain identifiers; the first one becomes the default network.
    pub blockchains: Vec<String>,
}

impl BootstrapOptions {
    pub fn new(wallet_set_name: impl Into<String>, blockchains: Vec<String>) -> Self {
        Self {
            wallet_set_name: wallet_set_name.into(),
            blockchains,
        }
    }

    pub fn from_config(config: &CircleConfig) -> Self {
        Self::new(config.wallet_set_name.clone(), config.blockchains.clone())
    }
}

/// Build a client from `config` and bootstrap a provider with it.
pub async fn initialize(config: &CircleConfig) -> Result<CircleProvider, BootstrapError> {
    let client = CircleClient::from_config(config).map_err(BootstrapError::Client)?;
    initialize_with_client(
        client,
        config.entity_secret.clone(),
        &BootstrapOptions::from_config(config),
    )
    .await
}

/// Bootstrap a provider over an existing client.
pub async fn initialize_with_client(
    client: CircleClient,
    entity_secret: EntitySecret,
    options: &BootstrapOptions,
) -> Result<CircleProvider, BootstrapError> {
    // Chains are checked before the first request so a typo cannot leave an
    // orphaned wallet set behind.
    let first = options.blockchains.first().ok_or(BootstrapError::NoBlockchains)?;
    let default_network = chains::by_blockchain(first)?;
    for blockchain in &options.blockchains[1..] {
        chains::by_blockchain(blockchain)?;
    }

    info!(
        base_url = client.base_url(),
        blockchains = ?options.blockchains,
        "Bootstrapping Circle provider"
    );

    let mut provider = CircleProvider::new(client, entity_secret).with_default_network(default_network);

    let public_key = provider
        .fetch_public_key()
        .await
        .map_err(BootstrapError::PublicKey)?;
    provider
        .set_public_key(public_key)
        .map_err(BootstrapError::PublicKey)?;
    info!("Fetched entity public key");

    let wallet_set = provider
        .create_wallet_set(&options.wallet_set_name)
        .await
        .map_err(BootstrapError::WalletSet)?;
    provider
        .set_wallet_set_id(wallet_set.id)
        .map_err(BootstrapError::WalletSet)?;

    let wallets = provider
        .create_wallets(&options.blockchains, 1)
        .await
        .map_err(BootstrapError::Wallets)?;
    provider
        .record_wallets(&wallets)
        .map_err(BootstrapError::RecordWallets)?;

    let missing: Vec<String> = options
        .blockchains
        .iter()
        .filter(|blockchain| {
            chains::to_network(blockchain)
                .map(|network| !provider.addresses().contains(network))
                .unwrap_or(true)
        })
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(BootstrapError::MissingWallets(missing));
    }

    info!(
        wallet_set_id = provider.wallet_set_id().unwrap_or_default(),
        networks = ?provider.addresses().networks().collect::<Vec<_>>(),
        default_network = default_network.network,
        "Circle provider ready"
    );
    Ok(provider)
}
