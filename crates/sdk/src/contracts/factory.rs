use alloy::{
    primitives::{Address, B256, U256, keccak256},
    providers::Provider,
};

use crate::{
    Chain,
    abi::swap::SimpleSwapFactory::{self, SimpleSwapFactoryInstance},
    error::SwapError,
    events,
};

/// Client of the chequebook factory.
#[derive(Clone)]
pub struct Factory<P> {
    instance: SimpleSwapFactoryInstance<P>,
    code_hash: B256,
}

impl<P: Provider> Factory<P> {
    pub fn new(chain: &Chain, provider: P) -> Self {
        Self {
            instance: SimpleSwapFactory::new(chain.factory(), provider),
            code_hash: chain.factory_code_hash(),
        }
    }

    pub fn address(&self) -> Address { *self.instance.address() }

    /// Deploys a new chequebook and returns its address once the deployment
    /// transaction is confirmed.
    ///
    /// The address is parsed from the `SimpleSwapDeployed` event the factory
    /// emits, never derived locally.
    pub async fn deploy(
        &self,
        issuer: Address,
        hard_deposit_timeout: U256,
        salt: B256,
    ) -> Result<Address, SwapError> {
        let receipt = self
            .instance
            .deploySimpleSwap(issuer, hard_deposit_timeout, salt)
            .send()
            .await?
            .get_receipt()
            .await?;
        let event = events::find_single_event::<SimpleSwapFactory::SimpleSwapDeployed>(
            &receipt,
            self.address(),
        )?;
        Ok(event.contractAddress)
    }

    /// Checks that the code deployed at the factory address matches the
    /// supported factory deployment, comparing full code hashes.
    pub async fn verify_bytecode(&self) -> Result<(), SwapError> {
        let code = self
            .instance
            .provider()
            .get_code_at(self.address())
            .await?;
        if keccak256(&code) != self.code_hash {
            return Err(SwapError::InvalidFactory);
        }
        Ok(())
    }

    /// Checks that the chequebook was deployed by this factory.
    pub async fn verify_chequebook(&self, chequebook: Address) -> Result<(), SwapError> {
        if !self.instance.deployedContracts(chequebook).call().await? {
            return Err(SwapError::NotDeployedByFactory);
        }
        Ok(())
    }

    /// Token the factory's chequebooks operate on.
    pub async fn token(&self) -> Result<Address, SwapError> {
        Ok(self.instance.ERC20Address().call().await?)
    }
}
