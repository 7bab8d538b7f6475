// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Provider capability contracts.

use std::sync::Arc;
use std::time::Duration;

use alloy::eips::{BlockId, BlockNumberOrTag};
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::rpc::types::{Block, Filter, Log, Transaction, TransactionReceipt, TransactionRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ProviderError;

/// Arguments of an EIP-1193 `request` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestArguments {
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

impl RequestArguments {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            params: Vec::new(),
        }
    }

    pub fn with_params(mut self, params: Vec<Value>) -> Self {
        self.params = params;
        self
    }
}

/// Network a provider is connected to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Network {
    pub name: String,
    pub chain_id: u64,
}

/// Current fee market data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeData {
    pub gas_price: Option<u128>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
}

/// Event listener callback.
pub type Listener = Arc<dyn Fn(&[Value]) + Send + Sync>;

/// The EIP-1193 method-dispatch surface.
#[async_trait]
pub trait Eip1193Provider: Send + Sync {
    async fn request(&self, args: RequestArguments) -> Result<Value, ProviderError>;
}

/// The full provider surface expected by wallet-agnostic tooling.
///
/// Mirrors the ethers provider interface: chain queries, transaction
/// lookups, broadcasting and event subscription.
#[async_trait]
pub trait EthProvider: Send + Sync {
    async fn get_network(&self) -> Result<Network, ProviderError>;

    async fn get_block_number(&self) -> Result<u64, ProviderError>;

    async fn get_fee_data(&self) -> Result<FeeData, ProviderError>;

    async fn get_balance(&self, address: Address, block: Option<BlockId>)
        -> Result<U256, ProviderError>;

    async fn get_transaction_count(
        &self,
        address: Address,
        block: Option<BlockId>,
    ) -> Result<u64, ProviderError>;

    async fn get_code(&self, address: Address, block: Option<BlockId>)
        -> Result<Bytes, ProviderError>;

    async fn get_storage(
        &self,
        address: Address,
        slot: U256,
        block: Option<BlockId>,
    ) -> Result<B256, ProviderError>;

    async fn estimate_gas(&self, tx: TransactionRequest) -> Result<u64, ProviderError>;

    async fn call(&self, tx: TransactionRequest) -> Result<Bytes, ProviderError>;

    async fn broadcast_transaction(&self, signed_tx: Bytes) -> Result<B256, ProviderError>;

    async fn get_block(&self, block: BlockId) -> Result<Option<Block>, ProviderError>;

    async fn get_transaction(&self, hash: B256) -> Result<Option<Transaction>, ProviderError>;

    async fn get_transaction_receipt(
        &self,
        hash: B256,
    ) -> Result<Option<TransactionReceipt>, ProviderError>;

    async fn get_transaction_result(&self, hash: B256) -> Result<Option<Bytes>, ProviderError>;

    async fn get_logs(&self, filter: Filter) -> Result<Vec<Log>, ProviderError>;

    async fn resolve_name(&self, name: &str) -> Result<Option<Address>, ProviderError>;

    async fn lookup_address(&self, address: Address) -> Result<Option<String>, ProviderError>;

    async fn wait_for_transaction(
        &self,
        hash: B256,
        confirmations: u64,
        timeout: Option<Duration>,
    ) -> Result<Option<TransactionReceipt>, ProviderError>;

    async fn wait_for_block(&self, block: Option<BlockNumberOrTag>) -> Result<Block, ProviderError>;

    fn on(&self, event: &str, listener: Listener) -> Result<(), ProviderError>;

    fn once(&self, event: &str, listener: Listener) -> Result<(), ProviderError>;

    fn emit(&self, event: &str, args: &[Value]) -> Result<bool, ProviderError>;

    fn listener_count(&self, event: Option<&str>) -> Result<usize, ProviderError>;

    fn listeners(&self, event: Option<&str>) -> Result<Vec<Listener>, ProviderError>;

    fn off(&self, event: &str, listener: Option<Listener>) -> Result<(), ProviderError>;

    fn remove_all_listeners(&self, event: Option<&str>) -> Result<(), ProviderError>;

    fn add_listener(&self, event: &str, listener: Listener) -> Result<(), ProviderError>;

    fn remove_listener(&self, event: &str, listener: Listener) -> Result<(), ProviderError>;

    fn destroy(&self) -> Result<(), ProviderError>;
}
