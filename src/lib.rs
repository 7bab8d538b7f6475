// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Circle Provider - EIP-1193 adapter for Circle developer-controlled wallets
//!
//! This crate exposes Circle Web3 Services smart contract wallets through the
//! provider and signer interfaces that wallet-agnostic Ethereum tooling
//! expects. Custody and signing stay with Circle; this side only fetches the
//! entity public key, creates wallets and answers address lookups.
//!
//! ## Modules
//!
//! - `blockchain` - Circle chain identifier ↔ network name translation
//! - `bootstrap` - Key fetch, wallet set and wallet creation sequence
//! - `circle` - Circle REST client, wire types and entity secret encryption
//! - `config` - Environment configuration
//! - `error` - Provider errors and their EIP-1193 codes
//! - `eth` - Generic provider and signer traits
//! - `logging` - Tracing subscriber setup
//! - `provider` - The Circle provider adapter
//! - `signer` - The Circle signer adapter

pub mod blockchain;
pub mod bootstrap;
pub mod circle;
pub mod config;
pub mod error;
pub mod eth;
pub mod logging;
pub mod provider;
pub mod signer;

pub use bootstrap::{initialize, initialize_with_client, BootstrapError, BootstrapOptions};
pub use config::CircleConfig;
pub use error::{ProviderError, ProviderRpcError};
pub use provider::CircleProvider;
pub use signer::CircleSigner;
