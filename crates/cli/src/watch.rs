use std::pin::pin;

use alloy::providers::Provider;
use colored::Colorize;
use futures::StreamExt;
use simpleswap_sdk::{
    Chain, abi::swap::SimpleSwapFactory::SimpleSwapFactoryEvents, stream, types::BlockInstant,
};
use tokio_util::sync::CancellationToken;

pub(crate) async fn render<P: Provider + Clone>(
    chain: &Chain,
    provider: P,
    num_blocks: Option<u64>,
    cancellation_token: CancellationToken,
) -> anyhow::Result<()> {
    let block_num = provider.get_block_number().await?;

    let deployments_stream =
        stream::deployments(chain, provider, BlockInstant::new(block_num, 0), tokio::time::sleep);
    let mut deployments_stream = pin!(deployments_stream);

    let mut blocks_left = num_blocks;

    while let Some(Ok(block)) = deployments_stream.next().await {
        if cancellation_token.is_cancelled() || blocks_left.is_some_and(|count| count == 0) {
            break;
        }

        if !block.events().is_empty() {
            println!(
                "\n{}",
                format!("Block {} - {} deployment(s):", block.instant(), block.events().len())
                    .bold()
                    .purple()
            );
            for event in block.events() {
                match event.event() {
                    SimpleSwapFactoryEvents::SimpleSwapDeployed(deployed) => {
                        println!(
                            "  Chequebook deployed at {} (tx {})",
                            deployed.contractAddress,
                            event.tx_hash(),
                        );
                    },
                }
            }
        }

        if let Some(ref mut count) = blocks_left {
            *count -= 1;
        }
    }

    Ok(())
}
