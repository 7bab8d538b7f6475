// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain naming for the networks Circle serves.
//!
//! This module provides:
//! - The Circle identifier ↔ network name translation table
//! - EIP-155 chain IDs for `eth_chainId` and signer interop

pub mod chains;

pub use chains::{by_blockchain, by_chain_id, by_network, ChainError, ChainInfo, SUPPORTED_CHAINS};
