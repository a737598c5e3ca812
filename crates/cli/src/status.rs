use alloy::{primitives::Address, providers::Provider};
use anyhow::Context;
use colored::Colorize;
use simpleswap_sdk::{
    Chain,
    contracts::{Chequebook, Factory, Oracle, Proxy, Token},
};

/// Runs the full demo sequence against the suite and prints each result.
pub(crate) async fn render<P: Provider + Clone>(
    chain: &Chain,
    provider: P,
    holder: Address,
    chequebook: Address,
) -> anyhow::Result<()> {
    println!("{}\n", format!("{:#^80}", " SimpleSwap Suite Status ").bold().purple());
    println!("{} {}", "Chain ID:".bold(), chain.chain_id());

    let token = Token::new(chain, provider.clone());
    let info = token.info(holder).await.context("querying token")?;
    println!("\n{} {} ({}) at {}", "Token:".bold(), info.name, info.symbol, info.address);
    println!("  Balance of {}: {} {}", holder, info.balance, info.symbol);

    let factory = Factory::new(chain, provider.clone());
    println!("\n{} {}", "Factory:".bold(), factory.address());
    match factory.verify_bytecode().await {
        Ok(()) => println!("  Bytecode: {}", "verified".green()),
        Err(err) => println!("  Bytecode: {} ({})", "not verified".red(), err),
    }
    println!(
        "  Token: {}",
        factory
            .token()
            .await
            .context("querying factory token")?
    );

    println!("\n{} {}", "Chequebook:".bold(), chequebook);
    match factory.verify_chequebook(chequebook).await {
        Ok(()) => {
            println!("  Provenance: {}", "deployed by the factory".green());
            let state = Chequebook::at(chequebook, provider.clone())
                .state()
                .await
                .context("querying chequebook")?;
            let converter = simpleswap_sdk::num::Converter::new(info.decimals);
            let balance = converter
                .from_unsigned(state.balance)
                .context("normalizing chequebook balance")?;
            println!("  Issuer: {}", state.issuer);
            println!("  Balance: {} {}", balance, info.symbol);
            match state.withdraw_time_utc() {
                Some(time) => println!("  Withdraw time: {}", time),
                None => println!("  Withdraw time: not announced"),
            }
        },
        Err(err) => println!("  Provenance: {} ({})", "unknown".red(), err),
    }

    let proxy = Proxy::new(chain, provider.clone());
    println!("\n{} {}", "Proxy:".bold(), proxy.address());
    println!(
        "  Master copy: {}",
        proxy
            .master_copy()
            .await
            .context("querying proxy")?
    );

    let oracle = Oracle::new(chain, provider).state().await.context("querying oracle")?;
    println!("\n{} {}", "Oracle:".bold(), oracle.address);
    println!("  Owner: {}", oracle.owner);
    println!("  Price: {}", oracle.price);

    Ok(())
}
