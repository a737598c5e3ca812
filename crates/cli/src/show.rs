use alloy::{primitives::Address, providers::Provider};
use anyhow::Context;
use simpleswap_sdk::{
    Chain,
    contracts::{Chequebook, Oracle, Proxy, Token},
};
use tabled::{Table, settings::Style};

pub(crate) async fn token<P: Provider + Clone>(
    chain: &Chain,
    provider: P,
    holder: Address,
) -> anyhow::Result<()> {
    let info = Token::new(chain, provider)
        .info(holder)
        .await
        .context("querying token")?;
    println!("{}", Table::new([info]).with(Style::sharp()));
    Ok(())
}

pub(crate) async fn chequebook<P: Provider + Clone>(
    provider: P,
    chequebook: Address,
) -> anyhow::Result<()> {
    let state = Chequebook::at(chequebook, provider)
        .state()
        .await
        .context("querying chequebook")?;
    println!("{}", Table::new([state]).with(Style::sharp()));
    Ok(())
}

pub(crate) async fn oracle<P: Provider + Clone>(chain: &Chain, provider: P) -> anyhow::Result<()> {
    let state = Oracle::new(chain, provider)
        .state()
        .await
        .context("querying oracle")?;
    println!("{}", Table::new([state]).with(Style::sharp()));
    Ok(())
}

pub(crate) async fn proxy<P: Provider + Clone>(chain: &Chain, provider: P) -> anyhow::Result<()> {
    let proxy = Proxy::new(chain, provider);
    let master_copy = proxy.master_copy().await.context("querying proxy")?;
    println!("Proxy {} delegates to master copy {}", proxy.address(), master_copy);
    Ok(())
}
