use alloy::{
    primitives::{Address, B256, U256},
    providers::Provider,
};
use anyhow::Context;
use colored::Colorize;
use simpleswap_sdk::{
    Chain,
    contracts::{Chequebook, Factory},
};

pub(crate) async fn render<P: Provider + Clone>(
    chain: &Chain,
    provider: P,
    issuer: Address,
    hard_deposit_timeout: u64,
    salt: B256,
) -> anyhow::Result<()> {
    let factory = Factory::new(chain, provider.clone());

    println!(
        "Deploying a chequebook for issuer {} (hard deposit timeout: {}s)...",
        issuer, hard_deposit_timeout
    );
    let deployed = factory
        .deploy(issuer, U256::from(hard_deposit_timeout), salt)
        .await
        .context("deploying chequebook")?;
    println!("{} {}", "Deployed at:".bold().green(), deployed);

    let state = Chequebook::at(deployed, provider)
        .state()
        .await
        .context("querying deployed chequebook")?;
    println!("Issuer: {}", state.issuer);
    println!("Balance: {}", state.balance);

    Ok(())
}
