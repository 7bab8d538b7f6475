// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The parts of [`EthProvider`] a custodial backend cannot serve.
//!
//! Circle exposes no node access, so chain state, broadcasting and event
//! subscription are unavailable. Each method fails unconditionally with
//! [`ProviderError::NotImplemented`] naming itself; none of them returns a
//! placeholder value.

use std::time::Duration;

use alloy::eips::{BlockId, BlockNumberOrTag};
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::rpc::types::{Block, Filter, Log, Transaction, TransactionReceipt, TransactionRequest};
use async_trait::async_trait;
use serde_json::Value;

use super::CircleProvider;
use crate::eth::{EthProvider, FeeData, Listener, Network};
use crate::error::ProviderError;

#[async_trait]
impl EthProvider for CircleProvider {
    async fn get_network(&self) -> Result<Network, ProviderError> {
        Err(ProviderError::NotImplemented("get_network"))
    }

    async fn get_block_number(&self) -> Result<u64, ProviderError> {
        Err(ProviderError::NotImplemented("get_block_number"))
    }

    async fn get_fee_data(&self) -> Result<FeeData, ProviderError> {
        Err(ProviderError::NotImplemented("get_fee_data"))
    }

    async fn get_balance(
        &self,
        _address: Address,
        _block: Option<BlockId>,
    ) -> Result<U256, ProviderError> {
        Err(ProviderError::NotImplemented("get_balance"))
    }

    async fn get_transaction_count(
        &self,
        _address: Address,
        _block: Option<BlockId>,
    ) -> Result<u64, ProviderError> {
        Err(ProviderError::NotImplemented("get_transaction_count"))
    }

    async fn get_code(
        &self,
        _address: Address,
        _block: Option<BlockId>,
    ) -> Result<Bytes, ProviderError> {
        Err(ProviderError::NotImplemented("get_code"))
    }

    async fn get_storage(
        &self,
        _address: Address,
        _slot: U256,
        _block: Option<BlockId>,
    ) -> Result<B256, ProviderError> {
        Err(ProviderError::NotImplemented("get_storage"))
    }

    async fn estimate_gas(&self, _tx: TransactionRequest) -> Result<u64, ProviderError> {
        Err(ProviderError::NotImplemented("estimate_gas"))
    }

    async fn call(&self, _tx: TransactionRequest) -> Result<Bytes, ProviderError> {
        Err(ProviderError::NotImplemented("call"))
    }

    async fn broadcast_transaction(&self, _signed_tx: Bytes) -> Result<B256, ProviderError> {
        Err(ProviderError::NotImplemented("broadcast_transaction"))
    }

    async fn get_block(&self, _block: BlockId) -> Result<Option<Block>, ProviderError> {
        Err(ProviderError::NotImplemented("get_block"))
    }

    async fn get_transaction(&self, _hash: B256) -> Result<Option<Transaction>, ProviderError> {
        Err(ProviderError::NotImplemented("get_transaction"))
    }

    async fn get_transaction_receipt(
        &self,
        _hash: B256,
    ) -> Result<Option<TransactionReceipt>, ProviderError> {
        Err(ProviderError::NotImplemented("get_transaction_receipt"))
    }

    async fn get_transaction_result(&self, _hash: B256) -> Result<Option<Bytes>, ProviderError> {
        Err(ProviderError::NotImplemented("get_transaction_result"))
    }

    async fn get_logs(&self, _filter: Filter) -> Result<Vec<Log>, ProviderError> {
        Err(ProviderError::NotImplemented("get_logs"))
    }

    async fn resolve_name(&self, _name: &str) -> Result<Option<Address>, ProviderError> {
        Err(ProviderError::NotImplemented("resolve_name"))
    }

    async fn lookup_address(&self, _address: Address) -> Result<Option<String>, ProviderError> {
        Err(ProviderError::NotImplemented("lookup_address"))
    }

    async fn wait_for_transaction(
        &self,
        _hash: B256,
        _confirmations: u64,
        _timeout: Option<Duration>,
    ) -> Result<Option<TransactionReceipt>, ProviderError> {
        Err(ProviderError::NotImplemented("wait_for_transaction"))
    }

    async fn wait_for_block(&self, _block: Option<BlockNumberOrTag>) -> Result<Block, ProviderError> {
        Err(ProviderError::NotImplemented("wait_for_block"))
    }

    fn on(&self, _event: &str, _listener: Listener) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("on"))
    }

    fn once(&self, _event: &str, _listener: Listener) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("once"))
    }

    fn emit(&self, _event: &str, _args: &[Value]) -> Result<bool, ProviderError> {
        Err(ProviderError::NotImplemented("emit"))
    }

    fn listener_count(&self, _event: Option<&str>) -> Result<usize, ProviderError> {
        Err(ProviderError::NotImplemented("listener_count"))
    }

    fn listeners(&self, _event: Option<&str>) -> Result<Vec<Listener>, ProviderError> {
        Err(ProviderError::NotImplemented("listeners"))
    }

    fn off(&self, _event: &str, _listener: Option<Listener>) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("off"))
    }

    fn remove_all_listeners(&self, _event: Option<&str>) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("remove_all_listeners"))
    }

    fn add_listener(&self, _event: &str, _listener: Listener) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("add_listener"))
    }

    fn remove_listener(&self, _event: &str, _listener: Listener) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("remove_listener"))
    }

    fn destroy(&self) -> Result<(), ProviderError> {
        Err(ProviderError::NotImplemented("destroy"))
    }
}
