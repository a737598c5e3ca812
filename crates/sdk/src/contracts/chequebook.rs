use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionReceipt,
};
use chrono::{DateTime, Utc};

use crate::{
    abi::swap::ERC20SimpleSwap::{self, ERC20SimpleSwapInstance},
    error::SwapError,
    events,
};

/// Client of a single deployed chequebook.
///
/// Chequebooks are deployed at arbitrary addresses, so unlike the other
/// clients this one is constructed from an explicit address rather than
/// from [`crate::Chain`]. Use [`crate::contracts::Factory::verify_chequebook`]
/// to check provenance first.
#[derive(Clone)]
pub struct Chequebook<P> {
    instance: ERC20SimpleSwapInstance<P>,
}

impl<P: Provider> Chequebook<P> {
    pub fn at(chequebook: Address, provider: P) -> Self {
        Self { instance: ERC20SimpleSwap::new(chequebook, provider) }
    }

    pub fn address(&self) -> Address { *self.instance.address() }

    pub async fn issuer(&self) -> Result<Address, SwapError> {
        Ok(self.instance.issuer().call().await?)
    }

    /// Raw token units held by the chequebook.
    pub async fn balance(&self) -> Result<U256, SwapError> {
        Ok(self.instance.balance().call().await?)
    }

    /// Unix timestamp the issuer becomes able to withdraw at.
    pub async fn withdraw_time(&self) -> Result<U256, SwapError> {
        Ok(self.instance.withdrawTime().call().await?)
    }

    /// Announces an upcoming withdrawal, starting the hard deposit timeout.
    pub async fn pre_withdraw(&self) -> Result<TransactionReceipt, SwapError> {
        let receipt = self
            .instance
            .preWithdraw()
            .send()
            .await?
            .get_receipt()
            .await?;
        if !receipt.status() {
            return Err(SwapError::TransactionReverted(receipt.transaction_hash));
        }
        Ok(receipt)
    }

    /// Withdraws `amount` raw token units to the issuer, waiting for the
    /// confirmation receipt and the `Withdraw` event.
    pub async fn withdraw(&self, amount: U256) -> Result<TransactionReceipt, SwapError> {
        let receipt = self
            .instance
            .withdraw(amount)
            .send()
            .await?
            .get_receipt()
            .await?;
        events::find_single_event::<ERC20SimpleSwap::Withdraw>(&receipt, self.address())?;
        Ok(receipt)
    }

    /// Fetches an aggregate snapshot of the chequebook state.
    pub async fn state(&self) -> Result<ChequebookState, SwapError> {
        Ok(ChequebookState {
            address: self.address(),
            issuer: self.issuer().await?,
            balance: self.balance().await?,
            withdraw_time: self.withdraw_time().await?,
        })
    }
}

/// Point-in-time view of a chequebook.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "display", derive(tabled::Tabled))]
pub struct ChequebookState {
    pub address: Address,
    pub issuer: Address,
    pub balance: U256,
    pub withdraw_time: U256,
}

impl ChequebookState {
    /// Withdraw time as UTC timestamp, if within representable range.
    pub fn withdraw_time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::try_from(self.withdraw_time).ok()?, 0)
    }
}

#[cfg(feature = "display")]
impl std::fmt::Display for ChequebookState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use colored::Colorize;

        write!(
            f,
            "{} (issuer {})\n    Balance: {} | Withdraw time: {}",
            format!("Chequebook {}", self.address).blue(),
            self.issuer,
            self.balance.to_string().green(),
            match self.withdraw_time_utc() {
                Some(time) if !self.withdraw_time.is_zero() => time.to_string().yellow(),
                _ => "not announced".dimmed(),
            },
        )
    }
}
