// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Provider and signer errors.
//!
//! [`ProviderError`] is what every provider and signer operation returns.
//! [`ProviderRpcError`] is its EIP-1193 wire shape (`{code, message}`), for
//! callers that forward errors to JavaScript-style tooling.

use serde::Serialize;

use crate::blockchain::ChainError;
use crate::circle::{EncryptionError, ServiceError};

/// EIP-1193: the provider does not support the requested method.
pub const UNSUPPORTED_METHOD: i64 = 4200;
/// EIP-1193: the provider is not connected to the requested chain.
pub const CHAIN_DISCONNECTED: i64 = 4901;
/// JSON-RPC: invalid method parameters.
pub const INVALID_PARAMS: i64 = -32602;
/// JSON-RPC: internal error.
pub const INTERNAL_ERROR: i64 = -32603;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Encryption was attempted before the entity public key was cached.
    #[error("public key is not available; fetch it before mutating calls")]
    MissingPublicKey,

    #[error("{0} must not be empty")]
    EmptyValue(&'static str),

    #[error(transparent)]
    Encryption(#[from] EncryptionError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Circle returned a chain this adapter cannot translate.
    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("Circle returned an invalid address for {blockchain}: {address}")]
    InvalidWalletAddress { blockchain: String, address: String },

    /// Circle returned more than one wallet for a network in one batch.
    #[error("Circle returned more than one wallet for network {0}")]
    DuplicateWallet(String),

    #[error("address not found for network {0}")]
    AddressNotFound(String),

    #[error("no default network configured")]
    NoDefaultNetwork,

    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    #[error("{0} is not implemented by this provider")]
    NotImplemented(&'static str),

    #[error("signing is not supported by this backend ({0})")]
    SigningUnsupported(&'static str),
}

impl ProviderError {
    /// EIP-1193 / JSON-RPC error code for this error.
    pub fn code(&self) -> i64 {
        match self {
            ProviderError::UnsupportedMethod(_)
            | ProviderError::NotImplemented(_)
            | ProviderError::SigningUnsupported(_) => UNSUPPORTED_METHOD,
            ProviderError::AddressNotFound(_) | ProviderError::NoDefaultNetwork => {
                CHAIN_DISCONNECTED
            }
            ProviderError::EmptyValue(_) => INVALID_PARAMS,
            _ => INTERNAL_ERROR,
        }
    }

    pub fn to_rpc_error(&self) -> ProviderRpcError {
        ProviderRpcError {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// EIP-1193 `ProviderRpcError` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderRpcError {
    pub code: i64,
    pub message: String,
}

impl From<ProviderError> for ProviderRpcError {
    fn from(err: ProviderError) -> Self {
        err.to_rpc_error()
    }
}
