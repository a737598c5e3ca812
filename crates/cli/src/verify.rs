use alloy::{primitives::Address, providers::Provider};
use anyhow::Context;
use colored::Colorize;
use simpleswap_sdk::{
    Chain,
    contracts::{Chequebook, Factory},
};

pub(crate) async fn render<P: Provider + Clone>(
    chain: &Chain,
    provider: P,
    chequebook: Address,
) -> anyhow::Result<()> {
    let factory = Factory::new(chain, provider.clone());

    factory
        .verify_bytecode()
        .await
        .context("verifying factory bytecode")?;
    println!("Factory {}: {}", factory.address(), "bytecode verified".green());

    factory
        .verify_chequebook(chequebook)
        .await
        .context("verifying chequebook provenance")?;
    let issuer = Chequebook::at(chequebook, provider)
        .issuer()
        .await
        .context("querying chequebook issuer")?;
    println!(
        "Chequebook {}: {} (issuer: {})",
        chequebook,
        "deployed by the factory".green(),
        issuer,
    );

    Ok(())
}
