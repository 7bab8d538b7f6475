// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Generic Ethereum provider and signer contracts.
//!
//! These traits describe what wallet-agnostic tooling expects from any
//! backend: EIP-1193 `request` dispatch, the ethers-style provider surface
//! and the signer surface. The Circle adapters implement all of them, with
//! real behaviour only where a custodial backend can offer it.

pub mod provider;
pub mod signer;

pub use provider::{Eip1193Provider, EthProvider, FeeData, Listener, Network, RequestArguments};
pub use signer::EthSigner;
