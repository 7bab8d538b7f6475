// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signer capability contract.

use alloy::eips::BlockId;
use alloy::primitives::{Address, Bytes, Signature, B256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use serde_json::Value;

use crate::error::ProviderError;

/// The ethers-style signer surface.
///
/// Besides signing proper this covers the convenience operations a signer
/// exposes on top of its provider (nonce lookup, transaction population,
/// sending).
#[async_trait]
pub trait EthSigner: Send + Sync {
    async fn get_address(&self) -> Result<Address, ProviderError>;

    async fn sign_message(&self, message: &[u8]) -> Result<Signature, ProviderError>;

    /// Sign a transaction and return its raw encoding.
    async fn sign_transaction(&self, tx: TransactionRequest) -> Result<Bytes, ProviderError>;

    /// Sign an EIP-712 payload given as its JSON typed-data document.
    async fn sign_typed_data(&self, typed_data: &Value) -> Result<Signature, ProviderError>;

    async fn get_nonce(&self, block: Option<BlockId>) -> Result<u64, ProviderError>;

    async fn populate_call(&self, tx: TransactionRequest)
        -> Result<TransactionRequest, ProviderError>;

    async fn populate_transaction(
        &self,
        tx: TransactionRequest,
    ) -> Result<TransactionRequest, ProviderError>;

    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, ProviderError>;

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, ProviderError>;

    async fn resolve_name(&self, name: &str) -> Result<Option<Address>, ProviderError>;

    /// Sign and broadcast, returning the transaction hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256, ProviderError>;
}
