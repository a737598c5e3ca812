//! Local testing environment backed by an anvil dev node.
//!
//! The contract suite itself is not deployed here (its bytecode is an
//! external deliverable), so the environment is limited to exercising the
//! provider plumbing: connecting, signing, confirmation waiting and the
//! per-block event stream.

use alloy::{
    network::EthereumWallet,
    node_bindings::{Anvil, AnvilInstance},
    primitives::{Address, B256},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};

use crate::Chain;

/// Anvil node with a provider signing as the first dev account.
pub struct TestBackend {
    pub anvil: AnvilInstance,
    pub provider: DynProvider,
}

impl TestBackend {
    /// Spawns a local anvil node. Requires the `anvil` binary on `PATH`.
    pub fn spawn() -> Self {
        let anvil = Anvil::new().spawn();
        let signer: PrivateKeySigner = anvil.keys()[0].clone().into();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(anvil.endpoint_url())
            .erased();
        Self { anvil, provider }
    }

    /// Chain config pointing at this node.
    ///
    /// The suite addresses are unused dev accounts; calls against them
    /// behave like calls against empty contracts.
    pub fn chain(&self) -> Chain {
        Chain::custom(
            self.anvil.chain_id(),
            self.anvil.addresses()[6],
            self.anvil.addresses()[7],
            self.anvil.addresses()[8],
            self.anvil.addresses()[9],
            0,
            B256::ZERO,
        )
    }

    /// Address the provider signs transactions with.
    pub fn sender(&self) -> Address { self.anvil.addresses()[0] }
}
