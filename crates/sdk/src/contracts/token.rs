use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionReceipt,
};
use fastnum::UD128;

use crate::{
    Chain,
    abi::token::ERC20::{self, ERC20Instance},
    error::SwapError,
    events, num,
};

/// Client of the suite's ERC-20 token.
#[derive(Clone)]
pub struct Token<P> {
    instance: ERC20Instance<P>,
}

impl<P: Provider> Token<P> {
    pub fn new(chain: &Chain, provider: P) -> Self {
        Self { instance: ERC20::new(chain.token(), provider) }
    }

    /// Client of an ERC-20 token at an explicit address, e.g. the one the
    /// factory reports via [`crate::contracts::Factory::token`].
    pub fn at(token: Address, provider: P) -> Self {
        Self { instance: ERC20::new(token, provider) }
    }

    pub fn address(&self) -> Address { *self.instance.address() }

    pub async fn balance_of(&self, holder: Address) -> Result<U256, SwapError> {
        Ok(self.instance.balanceOf(holder).call().await?)
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256, SwapError> {
        Ok(self.instance.allowance(owner, spender).call().await?)
    }

    pub async fn total_supply(&self) -> Result<U256, SwapError> {
        Ok(self.instance.totalSupply().call().await?)
    }

    pub async fn name(&self) -> Result<String, SwapError> {
        Ok(self.instance.name().call().await?)
    }

    pub async fn symbol(&self) -> Result<String, SwapError> {
        Ok(self.instance.symbol().call().await?)
    }

    pub async fn decimals(&self) -> Result<u8, SwapError> {
        Ok(self.instance.decimals().call().await?)
    }

    /// Converter normalizing raw amounts by the token's decimals.
    pub async fn converter(&self) -> Result<num::Converter, SwapError> {
        Ok(num::Converter::new(self.decimals().await?))
    }

    /// Transfers `value` raw token units, waiting for the confirmation
    /// receipt and the `Transfer` event.
    pub async fn transfer(
        &self,
        to: Address,
        value: U256,
    ) -> Result<TransactionReceipt, SwapError> {
        let receipt = self
            .instance
            .transfer(to, value)
            .send()
            .await?
            .get_receipt()
            .await?;
        events::find_single_event::<ERC20::Transfer>(&receipt, self.address())?;
        Ok(receipt)
    }

    /// Approves `spender` for `value` raw token units, waiting for the
    /// confirmation receipt and the `Approval` event.
    pub async fn approve(
        &self,
        spender: Address,
        value: U256,
    ) -> Result<TransactionReceipt, SwapError> {
        let receipt = self
            .instance
            .approve(spender, value)
            .send()
            .await?
            .get_receipt()
            .await?;
        events::find_single_event::<ERC20::Approval>(&receipt, self.address())?;
        Ok(receipt)
    }

    /// Fetches token metadata together with the holder's normalized balance.
    pub async fn info(&self, holder: Address) -> Result<TokenInfo, SwapError> {
        let converter = self.converter().await?;
        Ok(TokenInfo {
            address: self.address(),
            name: self.name().await?,
            symbol: self.symbol().await?,
            decimals: converter.decimals(),
            total_supply: converter.from_unsigned(self.total_supply().await?)?,
            balance: converter.from_unsigned(self.balance_of(holder).await?)?,
        })
    }
}

/// Token metadata together with a holder's balance.
#[derive(Clone, derive_more::Debug)]
#[cfg_attr(feature = "display", derive(tabled::Tabled))]
pub struct TokenInfo {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    #[debug("{total_supply}")]
    pub total_supply: UD128,
    #[debug("{balance}")]
    pub balance: UD128,
}
