use alloy::{primitives::Address, providers::Provider};
use anyhow::Context;
use colored::Colorize;
use simpleswap_sdk::contracts::Chequebook;

/// Announces an upcoming withdrawal and reports the resulting withdraw time.
pub(crate) async fn render<P: Provider + Clone>(
    provider: P,
    chequebook: Address,
) -> anyhow::Result<()> {
    let chequebook = Chequebook::at(chequebook, provider);

    let before = chequebook
        .withdraw_time()
        .await
        .context("querying withdraw time")?;
    println!("Withdraw time before: {}", before);

    let receipt = chequebook
        .pre_withdraw()
        .await
        .context("announcing withdrawal")?;
    println!("{} {}", "Confirmed in tx:".bold().green(), receipt.transaction_hash);

    let state = chequebook.state().await.context("querying chequebook")?;
    println!("{}", state);

    Ok(())
}
