// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Network → wallet address map.

use std::collections::BTreeMap;
use std::str::FromStr;

use alloy::primitives::Address;

use crate::blockchain::chains;
use crate::circle::Wallet;
use crate::error::ProviderError;

/// Addresses of the custodial wallets, keyed by generic network name.
///
/// Iteration is ordered by network name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressMap {
    entries: BTreeMap<&'static str, Address>,
}

impl AddressMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate and insert a batch of wallets.
    ///
    /// The whole batch is validated first: on an untranslatable chain, an
    /// unparsable address or a second wallet for the same network nothing is
    /// inserted and the error is returned.
    pub fn record(&mut self, wallets: &[Wallet]) -> Result<(), ProviderError> {
        let mut resolved: Vec<(&'static str, Address)> = Vec::with_capacity(wallets.len());
        for wallet in wallets {
            let network = chains::to_network(&wallet.blockchain)?;
            if resolved.iter().any(|(seen, _)| *seen == network) {
                return Err(ProviderError::DuplicateWallet(network.to_string()));
            }
            let address = Address::from_str(wallet.address.trim()).map_err(|_| {
                ProviderError::InvalidWalletAddress {
                    blockchain: wallet.blockchain.clone(),
                    address: wallet.address.clone(),
                }
            })?;
            resolved.push((network, address));
        }

        for (network, address) in resolved {
            if let Some(previous) = self.entries.insert(network, address) {
                if previous != address {
                    tracing::warn!(
                        network,
                        previous = %previous,
                        replacement = %address,
                        "Replacing recorded wallet address"
                    );
                }
            }
        }
        Ok(())
    }

    /// Address for a network name, matched case-insensitively.
    pub fn get(&self, network: &str) -> Option<Address> {
        self.entries.get(canonical(network)?).copied()
    }

    pub fn contains(&self, network: &str) -> bool {
        canonical(network).is_some_and(|key| self.entries.contains_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn networks(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.entries.values().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Address)> + '_ {
        self.entries.iter().map(|(network, address)| (*network, *address))
    }
}

/// Table spelling of a network name, so lookups agree with `chains::by_network`.
fn canonical(network: &str) -> Option<&'static str> {
    chains::by_network(network).ok().map(|chain| chain.network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use chrono::Utc;

    fn wallet(blockchain: &str, address: &str) -> Wallet {
        Wallet {
            id: format!("wallet-{blockchain}"),
            address: address.to_string(),
            blockchain: blockchain.to_string(),
            create_date: Utc::now(),
            update_date: Utc::now(),
            state: None,
            wallet_set_id: None,
            custody_type: None,
            account_type: None,
        }
    }

    #[test]
    fn records_wallets_under_network_names() {
        let mut map = AddressMap::new();
        map.record(&[
            wallet("ETH-SEPOLIA", "0x1111111111111111111111111111111111111111"),
            wallet("MATIC-AMOY", "0x2222222222222222222222222222222222222222"),
        ])
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(
            map.get("sepolia"),
            Some(address!("1111111111111111111111111111111111111111"))
        );
        assert_eq!(
            map.get("amoy"),
            Some(address!("2222222222222222222222222222222222222222"))
        );
        assert_eq!(map.networks().collect::<Vec<_>>(), vec!["amoy", "sepolia"]);
        assert!(map.get("mainnet").is_none());
    }

    #[test]
    fn unknown_chain_leaves_map_untouched() {
        let mut map = AddressMap::new();
        let err = map
            .record(&[
                wallet("ETH-SEPOLIA", "0x1111111111111111111111111111111111111111"),
                wallet("SOL-DEVNET", "9wFFyRfZBsuAha4YcuxcXLKwMxJR43S7fPfQLusDBzvT"),
            ])
            .unwrap_err();

        assert!(matches!(err, ProviderError::Chain(_)));
        assert!(map.is_empty());
    }

    #[test]
    fn malformed_address_is_a_contract_mismatch() {
        let mut map = AddressMap::new();
        let err = map.record(&[wallet("ETH-SEPOLIA", "0xnothex")]).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::InvalidWalletAddress { ref blockchain, .. } if blockchain == "ETH-SEPOLIA"
        ));
        assert!(map.is_empty());
    }

    #[test]
    fn lookups_ignore_case_and_padding() {
        let mut map = AddressMap::new();
        map.record(&[wallet("ETH-SEPOLIA", "0x1111111111111111111111111111111111111111")])
            .unwrap();

        let expected = Some(address!("1111111111111111111111111111111111111111"));
        assert_eq!(map.get("Sepolia"), expected);
        assert_eq!(map.get(" SEPOLIA "), expected);
        assert!(map.contains("sepolia"));
        assert!(map.contains("SePoLiA"));
        assert!(!map.contains("amoy"));
        assert!(!map.contains("not-a-network"));
    }

    #[test]
    fn two_wallets_for_one_network_in_a_batch_are_rejected() {
        let mut map = AddressMap::new();
        let err = map
            .record(&[
                wallet("ETH-SEPOLIA", "0x1111111111111111111111111111111111111111"),
                wallet("ETH-SEPOLIA", "0x3333333333333333333333333333333333333333"),
            ])
            .unwrap_err();

        assert!(matches!(err, ProviderError::DuplicateWallet(ref n) if n == "sepolia"));
        assert!(map.is_empty());
    }

    #[test]
    fn later_batches_replace_earlier_addresses() {
        let mut map = AddressMap::new();
        map.record(&[wallet("ETH-SEPOLIA", "0x1111111111111111111111111111111111111111")])
            .unwrap();
        map.record(&[wallet("ETH-SEPOLIA", "0x3333333333333333333333333333333333333333")])
            .unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("sepolia"),
            Some(address!("3333333333333333333333333333333333333333"))
        );
    }
}
