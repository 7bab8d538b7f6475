// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain identifier translation.
//!
//! Circle names chains with its own identifiers (`ETH-SEPOLIA`,
//! `MATIC-AMOY`, ...) while Ethereum tooling uses network names (`sepolia`,
//! `amoy`, ...). Both directions are answered from the single
//! [`SUPPORTED_CHAINS`] table so the two naming schemes cannot drift apart.

/// One row of the translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainInfo {
    /// Circle chain identifier
    pub blockchain: &'static str,
    /// Generic network name used by downstream tooling
    pub network: &'static str,
    /// EIP-155 chain ID
    pub chain_id: u64,
    /// Network name for display
    pub name: &'static str,
}

/// EVM chains on which Circle can create smart contract accounts.
pub const SUPPORTED_CHAINS: &[ChainInfo] = &[
    ChainInfo { blockchain: "ETH", network: "mainnet", chain_id: 1, name: "Ethereum" },
    ChainInfo { blockchain: "ETH-SEPOLIA", network: "sepolia", chain_id: 11_155_111, name: "Ethereum Sepolia" },
    ChainInfo { blockchain: "MATIC", network: "matic", chain_id: 137, name: "Polygon PoS" },
    ChainInfo { blockchain: "MATIC-AMOY", network: "amoy", chain_id: 80_002, name: "Polygon Amoy" },
    ChainInfo { blockchain: "AVAX", network: "avalanche", chain_id: 43_114, name: "Avalanche C-Chain" },
    ChainInfo { blockchain: "AVAX-FUJI", network: "fuji", chain_id: 43_113, name: "Avalanche Fuji Testnet" },
    ChainInfo { blockchain: "ARB", network: "arbitrum", chain_id: 42_161, name: "Arbitrum One" },
    ChainInfo { blockchain: "ARB-SEPOLIA", network: "arbitrum-sepolia", chain_id: 421_614, name: "Arbitrum Sepolia" },
    ChainInfo { blockchain: "BASE", network: "base", chain_id: 8_453, name: "Base" },
    ChainInfo { blockchain: "BASE-SEPOLIA", network: "base-sepolia", chain_id: 84_532, name: "Base Sepolia" },
    ChainInfo { blockchain: "OP", network: "optimism", chain_id: 10, name: "OP Mainnet" },
    ChainInfo { blockchain: "OP-SEPOLIA", network: "optimism-sepolia", chain_id: 11_155_420, name: "OP Sepolia" },
    ChainInfo { blockchain: "UNI", network: "unichain", chain_id: 130, name: "Unichain" },
    ChainInfo { blockchain: "UNI-SEPOLIA", network: "unichain-sepolia", chain_id: 1_301, name: "Unichain Sepolia" },
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("unknown Circle blockchain identifier: {0}")]
    UnknownBlockchain(String),

    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}

/// Look up a chain by its Circle identifier.
pub fn by_blockchain(blockchain: &str) -> Result<&'static ChainInfo, ChainError> {
    let wanted = blockchain.trim();
    SUPPORTED_CHAINS
        .iter()
        .find(|chain| chain.blockchain == wanted)
        .ok_or_else(|| ChainError::UnknownBlockchain(blockchain.to_string()))
}

/// Look up a chain by its generic network name (case-insensitive).
pub fn by_network(network: &str) -> Result<&'static ChainInfo, ChainError> {
    let wanted = network.trim();
    SUPPORTED_CHAINS
        .iter()
        .find(|chain| chain.network.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ChainError::UnknownNetwork(network.to_string()))
}

/// Look up a chain by its EIP-155 chain ID.
pub fn by_chain_id(chain_id: u64) -> Option<&'static ChainInfo> {
    SUPPORTED_CHAINS.iter().find(|chain| chain.chain_id == chain_id)
}

/// Circle identifier → network name.
pub fn to_network(blockchain: &str) -> Result<&'static str, ChainError> {
    by_blockchain(blockchain).map(|chain| chain.network)
}

/// Network name → Circle identifier.
pub fn to_blockchain(network: &str) -> Result<&'static str, ChainError> {
    by_network(network).map(|chain| chain.blockchain)
}
