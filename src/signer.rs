// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signer bound to one Circle wallet.
//!
//! Signing authority stays with Circle: the private keys never leave its
//! custody, so every signing operation fails with
//! [`ProviderError::SigningUnsupported`]. That failure is permanent and
//! independent of provider state; callers must not retry it. The signer is
//! still useful wherever tooling only needs the account address.

use std::sync::Arc;

use alloy::eips::BlockId;
use alloy::primitives::{Address, Bytes, ChainId, Signature, B256};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::{Signer, UnsupportedSignerOperation};
use async_trait::async_trait;
use serde_json::Value;

use crate::blockchain::{chains, ChainInfo};
use crate::error::ProviderError;
use crate::eth::EthSigner;
use crate::provider::CircleProvider;

#[derive(Debug, Clone)]
pub struct CircleSigner {
    provider: Arc<CircleProvider>,
    chain: &'static ChainInfo,
    address: Address,
    chain_id: Option<ChainId>,
}

impl CircleSigner {
    /// Signer for the provider's default network.
    pub fn new(provider: Arc<CircleProvider>) -> Result<Self, ProviderError> {
        let chain = provider
            .default_network()
            .ok_or(ProviderError::NoDefaultNetwork)?;
        Self::bind(provider, chain)
    }

    /// Signer for an explicit network name (`sepolia`, `amoy`, ...).
    pub fn for_network(
        provider: Arc<CircleProvider>,
        network: &str,
    ) -> Result<Self, ProviderError> {
        let chain = chains::by_network(network)?;
        Self::bind(provider, chain)
    }

    fn bind(provider: Arc<CircleProvider>, chain: &'static ChainInfo) -> Result<Self, ProviderError> {
        let address = provider.address_for(chain.network)?;
        Ok(Self {
            provider,
            chain,
            address,
            chain_id: Some(chain.chain_id),
        })
    }

    /// Rebind to another provider, resolving the address for the same
    /// network again.
    pub fn connect(&self, provider: Arc<CircleProvider>) -> Result<Self, ProviderError> {
        Self::bind(provider, self.chain)
    }

    /// Address captured at construction.
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn network(&self) -> &'static str {
        self.chain.network
    }

    pub fn chain(&self) -> &'static ChainInfo {
        self.chain
    }

    pub fn provider(&self) -> &Arc<CircleProvider> {
        &self.provider
    }
}

#[async_trait]
impl EthSigner for CircleSigner {
    async fn get_address(&self) -> Result<Address, ProviderError> {
        Ok(self.address)
    }

    async fn sign_message(&self, _message: &[u8]) -> Result<Signature, ProviderError> {
        Err(ProviderError::SigningUnsupported("sign_message"))
    }

    async fn sign_transaction(&self, _tx: TransactionRequest) -> Result<Bytes, ProviderError> {
        Err(ProviderError::SigningUnsupported("sign_transaction"))
    }

    async fn sign_typed_data(&self, _typed_data: &Value) -> Result<Signature, ProviderError> {
        Err(ProviderError::SigningUnsupported("sign_typed_data"))
    }

    async fn get_nonce(&self, _block: Option<BlockId>) -> Result<u64, ProviderError> {
        Err(ProviderError::SigningUnsupported("get_nonce"))
    }

    async fn populate_call(
        &self,
        _tx: TransactionRequest,
    ) -> Result<TransactionRequest, ProviderError> {
        Err(ProviderError::SigningUnsupported("populate_call"))
    }

    async fn populate_transaction(
        &self,
        _tx: TransactionRequest,
    ) -> Result<TransactionRequest, ProviderError> {
        Err(ProviderError::SigningUnsupported("populate_transaction"))
    }

    async fn estimate_gas(&self, _tx: TransactionRequest) -> Result<u64, ProviderError> {
        Err(ProviderError::SigningUnsupported("estimate_gas"))
    }

    async fn call(&self, _tx: TransactionRequest) -> Result<Bytes, ProviderError> {
        Err(ProviderError::SigningUnsupported("call"))
    }

    async fn resolve_name(&self, _name: &str) -> Result<Option<Address>, ProviderError> {
        Err(ProviderError::SigningUnsupported("resolve_name"))
    }

    async fn send_transaction(&self, _tx: TransactionRequest) -> Result<B256, ProviderError> {
        Err(ProviderError::SigningUnsupported("send_transaction"))
    }
}

#[async_trait]
impl Signer for CircleSigner {
    async fn sign_hash(&self, _hash: &B256) -> alloy::signers::Result<Signature> {
        Err(alloy::signers::Error::UnsupportedOperation(
            UnsupportedSignerOperation::SignHash,
        ))
    }

    async fn sign_message(&self, _message: &[u8]) -> alloy::signers::Result<Signature> {
        Err(alloy::signers::Error::UnsupportedOperation(
            UnsupportedSignerOperation::SignMessage,
        ))
    }

    fn address(&self) -> Address {
        self.address
    }

    fn chain_id(&self) -> Option<ChainId> {
        self.chain_id
    }

    fn set_chain_id(&mut self, chain_id: Option<ChainId>) {
        self.chain_id = chain_id;
    }
}
