// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Circle Web3 Services integration.
//!
//! This module provides:
//! - The authenticated REST client for developer-controlled wallets
//! - Request/response types for the endpoints the provider relies on
//! - RSA-OAEP encryption of the entity secret

pub mod client;
pub mod encryption;
pub mod types;

pub use client::{CircleClient, ServiceError};
pub use encryption::{encrypt_entity_secret, EncryptionError};
pub use types::*;
