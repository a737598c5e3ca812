//! SimpleSwap contract suite SDK.
//!
//! # Overview
//!
//! Typed client for a fixed suite of smart contracts: an ERC-20 token, the
//! `SimpleSwapFactory` chequebook factory and the `ERC20SimpleSwap`
//! chequebooks it deploys, a master-copy proxy and a price oracle.
//!
//! Every exported operation follows the same shape: pack the call through
//! the [`abi`] bindings, send it (or `eth_call` it) through an
//! [`alloy::providers::Provider`], unpack the result, and for writes wait
//! for the confirmation receipt and parse the expected log event out of it.
//!
//! Use the [`contracts`] clients for one-shot operations, and [`stream`] to
//! follow factory activity block by block.
//!
//! # Features
//!
//! | Feature | Default | Description |
//! | --- | --- | --- |
//! | `display` | yes | Enables table rendering for aggregate state types. |
//! | `testing` | yes | Enables [`testing`] module. |
//!
//! # Testing
//!
//! [`testing`] module provides a local anvil-backed environment for
//! exercising the provider plumbing without the contract suite deployed.

pub mod abi;
pub mod contracts;
pub mod error;
pub mod events;
pub mod num;
pub mod stream;
#[cfg(feature = "testing")]
pub mod testing;
pub mod types;

use alloy::primitives::{Address, B256, address, b256};

/// Chain the contract suite is deployed on.
#[derive(Clone, Debug)]
pub struct Chain {
    chain_id: u64,
    token: Address,
    factory: Address,
    proxy: Address,
    oracle: Address,
    deployed_at_block: u64,
    factory_code_hash: B256,
}

impl Chain {
    /// The fixed demo deployment of the suite.
    pub fn testnet() -> Self {
        Self {
            chain_id: 2021,
            token: address!("0xd26c3d45a805a5f7809e27bd18949d559e281900"),
            factory: address!("0x5e6802d9e7c8cd43bb7c96524fdd50fe8460b92c"),
            proxy: address!("0x6936a4893e4d83bad993848a21bae606c15480f1"),
            oracle: address!("0xfb6a65af1bb250eaf3f58c420912b0b6ea05ea7a"),
            deployed_at_block: 0,
            // Placeholder for the supported factory build; recompute as
            // keccak-256 of eth_getCode(factory) when onboarding a deployment
            factory_code_hash: b256!(
                "0x7e94ec37a1367adbf0ab9b0cfeb9f82f8a3d0bb1b5fab2c2e72be41dbd2ecb0d"
            ),
        }
    }

    pub fn custom(
        chain_id: u64,
        token: Address,
        factory: Address,
        proxy: Address,
        oracle: Address,
        deployed_at_block: u64,
        factory_code_hash: B256,
    ) -> Self {
        Self { chain_id, token, factory, proxy, oracle, deployed_at_block, factory_code_hash }
    }

    pub fn chain_id(&self) -> u64 { self.chain_id }

    pub fn token(&self) -> Address { self.token }

    pub fn factory(&self) -> Address { self.factory }

    pub fn proxy(&self) -> Address { self.proxy }

    pub fn oracle(&self) -> Address { self.oracle }

    pub fn deployed_at_block(&self) -> u64 { self.deployed_at_block }

    pub fn factory_code_hash(&self) -> B256 { self.factory_code_hash }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_testnet_is_fully_specified() {
        let chain = Chain::testnet();
        assert_ne!(chain.token(), Address::ZERO);
        assert_ne!(chain.factory(), Address::ZERO);
        assert_ne!(chain.proxy(), Address::ZERO);
        assert_ne!(chain.oracle(), Address::ZERO);
        assert_ne!(chain.factory_code_hash(), B256::ZERO);
    }

    #[test]
    fn test_custom_round_trips() {
        let chain = Chain::custom(
            31337,
            address!("0x0000000000000000000000000000000000000001"),
            address!("0x0000000000000000000000000000000000000002"),
            address!("0x0000000000000000000000000000000000000003"),
            address!("0x0000000000000000000000000000000000000004"),
            42,
            B256::ZERO,
        );
        assert_eq!(chain.chain_id(), 31337);
        assert_eq!(chain.factory(), address!("0x0000000000000000000000000000000000000002"));
        assert_eq!(chain.deployed_at_block(), 42);
    }
}
