use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionReceipt,
};

use crate::{
    Chain,
    abi::oracle::PriceOracle::{self, PriceOracleInstance},
    error::SwapError,
    events,
};

/// Client of the suite's price oracle.
#[derive(Clone)]
pub struct Oracle<P> {
    instance: PriceOracleInstance<P>,
}

impl<P: Provider> Oracle<P> {
    pub fn new(chain: &Chain, provider: P) -> Self {
        Self { instance: PriceOracle::new(chain.oracle(), provider) }
    }

    pub fn address(&self) -> Address { *self.instance.address() }

    pub async fn owner(&self) -> Result<Address, SwapError> {
        Ok(self.instance.owner().call().await?)
    }

    pub async fn price(&self) -> Result<U256, SwapError> {
        Ok(self.instance.price().call().await?)
    }

    /// Updates the quoted price, waiting for the confirmation receipt and
    /// the `PriceUpdated` event. Only the oracle owner may call this.
    pub async fn update_price(&self, price: U256) -> Result<TransactionReceipt, SwapError> {
        let receipt = self
            .instance
            .updatePrice(price)
            .send()
            .await?
            .get_receipt()
            .await?;
        events::find_single_event::<PriceOracle::PriceUpdated>(&receipt, self.address())?;
        Ok(receipt)
    }

    /// Fetches an aggregate snapshot of the oracle state.
    pub async fn state(&self) -> Result<OracleState, SwapError> {
        Ok(OracleState {
            address: self.address(),
            owner: self.owner().await?,
            price: self.price().await?,
        })
    }
}

/// Point-in-time view of the oracle.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "display", derive(tabled::Tabled))]
pub struct OracleState {
    pub address: Address,
    pub owner: Address,
    pub price: U256,
}
