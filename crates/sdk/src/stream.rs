use std::time::Duration;

use alloy::{
    eips::BlockId, primitives::Address, providers::Provider, rpc::types::Filter,
    sol_types::SolEventInterface,
};
use futures::{Stream, stream};

use crate::{
    Chain, abi::swap::SimpleSwapFactory::SimpleSwapFactoryEvents, error::SwapError, types,
};

pub type FactoryEvent = types::EventContext<SimpleSwapFactoryEvents>;
pub type BlockFactoryEvents = types::BlockEvents<FactoryEvent>;

/// Follows the chequebook factory block by block, yielding the decoded
/// events of each block as one batch.
///
/// Blocks are never skipped: once the cursor passes the chain tip the stream
/// waits, with the provider's poll interval, until the next block exists, so
/// consumers see a gapless sequence starting at `from`. Pair the provider
/// with [`alloy::transports::layers::RetryBackoffLayer`] on flaky endpoints.
pub fn deployments<P, S, SFut>(
    chain: &Chain,
    provider: P,
    from: types::BlockInstant,
    sleep: S,
) -> impl Stream<Item = Result<BlockFactoryEvents, SwapError>>
where
    P: Provider,
    S: Fn(Duration) -> SFut + Copy,
    SFut: Future<Output = ()>,
{
    let factory = chain.factory();
    stream::unfold((provider, from), move |(provider, cursor)| async move {
        loop {
            match block_events(&provider, factory, cursor.block_number()).await {
                Ok(Some(batch)) => {
                    let cursor = batch.instant().next();
                    return Some((Ok(batch), (provider, cursor)));
                },
                // Cursor is past the chain tip
                Ok(None) => sleep(provider.client().poll_interval()).await,
                Err(err) => return Some((Err(err), (provider, cursor))),
            }
        }
    })
}

/// Events the factory emitted in one block, or `None` when the chain has not
/// produced that block yet.
///
/// The header fetch doubles as the existence check: anvil (and some hosted
/// endpoints) answer a log query for a future block with an empty list
/// instead of an error, so an empty `get_logs` response alone proves nothing.
async fn block_events<P: Provider>(
    provider: &P,
    factory: Address,
    block_num: u64,
) -> Result<Option<BlockFactoryEvents>, SwapError> {
    let filter = Filter::new()
        .address(factory)
        .from_block(block_num)
        .to_block(block_num);
    let (block, logs) = futures::try_join!(
        provider.get_block(BlockId::number(block_num)).into_future(),
        provider.get_logs(&filter)
    )?;
    let Some(block) = block else {
        return Ok(None);
    };

    let mut events = Vec::with_capacity(logs.len());
    for log in &logs {
        let decoded = SimpleSwapFactoryEvents::decode_log(&log.inner)?;
        events.push(FactoryEvent::new(
            log.transaction_hash.unwrap_or_default(),
            log.transaction_index.unwrap_or_default(),
            log.log_index.unwrap_or_default(),
            decoded.data,
        ));
    }
    Ok(Some(BlockFactoryEvents::new(
        types::BlockInstant::new(block_num, block.header.timestamp),
        events,
    )))
}

#[cfg(test)]
mod tests {
    use alloy::{
        providers::ProviderBuilder, rpc::client::RpcClient, transports::layers::RetryBackoffLayer,
    };
    use futures::StreamExt;

    use super::*;

    #[tokio::test]
    #[ignore = "requires a reachable suite RPC endpoint"]
    async fn test_yields_gapless_block_sequence() {
        let client = RpcClient::builder()
            .layer(RetryBackoffLayer::new(10, 100, 200))
            .connect("http://18.144.29.246:8110")
            .await
            .unwrap();
        client.set_poll_interval(Duration::from_millis(500));
        let provider = ProviderBuilder::new().connect_client(client);

        let start = provider.get_block_number().await.unwrap() + 1;
        let batches = deployments(
            &Chain::testnet(),
            provider,
            types::BlockInstant::new(start, 0),
            tokio::time::sleep,
        )
        .take(5)
        .collect::<Vec<_>>()
        .await;

        let numbers = batches
            .iter()
            .map(|batch| batch.as_ref().unwrap().instant().block_number())
            .collect::<Vec<_>>();
        assert_eq!(numbers, (start..start + 5).collect::<Vec<_>>());
    }
}
