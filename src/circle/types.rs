// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Circle Web3 Services request and response types.
//!
//! Request bodies are built through constructors that draw a fresh
//! idempotency key, so one request value corresponds to one logical
//! operation. Re-sending the same value re-sends the same key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Standard `{ "data": ... }` envelope around every successful response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: i64,
    pub message: String,
}

/// Wallet account type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AccountType {
    /// Smart contract account
    Sca,
    /// Externally owned account
    Eoa,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyData {
    pub public_key: String,
}

/// A named grouping of custodial wallets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSet {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custody_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSetData {
    pub wallet_set: WalletSet,
}

/// One custodial wallet on one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    /// Hex address as returned by Circle
    pub address: String,
    /// Circle chain identifier (e.g. `ETH-SEPOLIA`)
    pub blockchain: String,
    pub create_date: DateTime<Utc>,
    pub update_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_set_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custody_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletsData {
    pub wallets: Vec<Wallet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractQueryData {
    pub output_data: String,
    #[serde(default)]
    pub output_values: Option<Vec<Value>>,
}

/// Body of `POST /developer/walletSets`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletSetRequest {
    pub entity_secret_ciphertext: String,
    pub idempotency_key: Uuid,
    pub name: String,
}

impl CreateWalletSetRequest {
    pub fn new(entity_secret_ciphertext: String, name: impl Into<String>) -> Self {
        Self {
            entity_secret_ciphertext,
            idempotency_key: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Body of `POST /developer/wallets`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWalletsRequest {
    pub idempotency_key: Uuid,
    pub wallet_set_id: String,
    pub account_type: AccountType,
    pub blockchains: Vec<String>,
    pub count: u32,
    pub entity_secret_ciphertext: String,
}

impl CreateWalletsRequest {
    /// Smart contract account request for `count` wallets per chain.
    pub fn new(
        wallet_set_id: impl Into<String>,
        blockchains: Vec<String>,
        count: u32,
        entity_secret_ciphertext: String,
    ) -> Self {
        Self {
            idempotency_key: Uuid::new_v4(),
            wallet_set_id: wallet_set_id.into(),
            account_type: AccountType::Sca,
            blockchains,
            count,
            entity_secret_ciphertext,
        }
    }
}

/// Body of `POST /contracts/query`.
///
/// Absent ABI fields are left out of the JSON body entirely.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractQueryRequest {
    pub address: String,
    pub blockchain: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abi_function_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abi_parameters: Option<Vec<Value>>,
}

impl ContractQueryRequest {
    pub fn new(address: impl Into<String>, blockchain: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            blockchain: blockchain.into(),
            abi_function_signature: None,
            abi_parameters: None,
        }
    }

    pub fn with_function(mut self, signature: impl Into<String>) -> Self {
        self.abi_function_signature = Some(signature.into());
        self
    }

    pub fn with_parameters(mut self, parameters: Vec<Value>) -> Self {
        self.abi_parameters = Some(parameters);
        self
    }
}
