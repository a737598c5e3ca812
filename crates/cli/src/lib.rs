pub mod args;
mod deploy;
mod show;
mod status;
mod verify;
mod watch;
mod withdraw;

use std::time::Duration;

use alloy::{
    network::EthereumWallet,
    providers::{Provider, ProviderBuilder},
    rpc::client::RpcClient,
    signers::local::PrivateKeySigner,
    transports::layers::{RetryBackoffLayer, ThrottleLayer},
};
use anyhow::Context;
use args::Cli;
use simpleswap_sdk::Chain;
use tokio_util::sync::CancellationToken;

use crate::args::{Commands, ShowCommands};

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let client = if cli.rpc == args::DEFAULT_RPC_PROVIDER || cli.rpc_throttle.is_some() {
        // Apply throttling with default RPC
        RpcClient::builder()
            .layer(ThrottleLayer::new(cli.rpc_throttle.unwrap_or(args::DEFAULT_RPC_THROTTLING)))
            .layer(RetryBackoffLayer::new(10, 100, 200))
            .connect(&cli.rpc)
            .await
            .context("connecting to RPC")?
    } else {
        RpcClient::builder()
            .layer(RetryBackoffLayer::new(10, 100, 200))
            .connect(&cli.rpc)
            .await
            .context("connecting to RPC")?
    };
    client.set_poll_interval(Duration::from_millis(500));

    let signer = cli
        .private_key
        .as_deref()
        .map(str::parse::<PrivateKeySigner>)
        .transpose()
        .context("parsing private key")?;
    let sender = signer.as_ref().map(PrivateKeySigner::address);

    let provider = match signer {
        Some(signer) => ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_client(client)
            .erased(),
        None => ProviderBuilder::new().connect_client(client).erased(),
    };

    let testnet = Chain::testnet();
    let chain = Chain::custom(
        provider.get_chain_id().await.context("querying chain ID")?,
        cli.token.unwrap_or(testnet.token()),
        cli.factory.unwrap_or(testnet.factory()),
        cli.proxy.unwrap_or(testnet.proxy()),
        cli.oracle.unwrap_or(testnet.oracle()),
        testnet.deployed_at_block(),
        testnet.factory_code_hash(),
    );

    let cancellation_signal = CancellationToken::new();
    let cancellation_token = cancellation_signal.child_token();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        cancellation_signal.cancel();
    });

    match &cli.command {
        Commands::Status { chequebook } => {
            status::render(&chain, provider, sender.unwrap_or(args::DEFAULT_HOLDER), *chequebook)
                .await?
        },
        Commands::Deploy { issuer, hard_deposit_timeout, salt } => {
            let sender = sender.context("a private key is required, see `--private-key`")?;
            deploy::render(&chain, provider, issuer.unwrap_or(sender), *hard_deposit_timeout, *salt)
                .await?
        },
        Commands::Verify { chequebook } => verify::render(&chain, provider, *chequebook).await?,
        Commands::PreWithdraw { chequebook } => {
            sender.context("a private key is required, see `--private-key`")?;
            withdraw::render(provider, *chequebook).await?
        },
        Commands::Show { command } => match command {
            ShowCommands::Token { holder } => {
                show::token(
                    &chain,
                    provider,
                    holder.or(sender).unwrap_or(args::DEFAULT_HOLDER),
                )
                .await?
            },
            ShowCommands::Chequebook { chequebook } => {
                show::chequebook(provider, *chequebook).await?
            },
            ShowCommands::Oracle => show::oracle(&chain, provider).await?,
            ShowCommands::Proxy => show::proxy(&chain, provider).await?,
        },
        Commands::Watch => {
            watch::render(&chain, provider, cli.num_blocks, cancellation_token).await?
        },
    }

    Ok(())
}
