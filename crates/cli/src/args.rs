use alloy::primitives::{Address, B256};
use clap::{Parser, Subcommand};

pub(crate) const DEFAULT_RPC_PROVIDER: &str = "http://18.144.29.246:8110";
pub(crate) const DEFAULT_RPC_THROTTLING: u32 = 50;

/// Chequebook deployed for the demo issuer on the default testnet.
pub(crate) const DEFAULT_CHEQUEBOOK: &str = "0xc721594d255aa52b442a67603593673646835759";

/// Demo account holding testnet tokens.
pub(crate) const DEFAULT_HOLDER: Address =
    alloy::primitives::address!("0xa4e7663a031ca1f67eea828e4795653504d38c6e");

#[derive(Parser, Debug)]
#[command(name = "simpleswap-cli", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// RPC endpoint to connect to
    #[arg(long, global = true, default_value_t = DEFAULT_RPC_PROVIDER.to_string())]
    pub rpc: String,

    /// RPC throttling (req/sec) [default: 50 for the default RPC, none
    /// otherwise]
    #[arg(long, global = true)]
    pub rpc_throttle: Option<u32>,

    /// Hex private key to sign transactions with [required for `deploy` and
    /// `pre-withdraw`]
    #[arg(long, global = true, env = "SIMPLESWAP_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,

    /// Token contract address [default: testnet deployment]
    #[arg(long, global = true)]
    pub token: Option<Address>,

    /// Factory contract address [default: testnet deployment]
    #[arg(long, global = true)]
    pub factory: Option<Address>,

    /// Proxy contract address [default: testnet deployment]
    #[arg(long, global = true)]
    pub proxy: Option<Address>,

    /// Oracle contract address [default: testnet deployment]
    #[arg(long, global = true)]
    pub oracle: Option<Address>,

    /// Number of blocks to watch [default: unlimited, until terminated by
    /// (Ctrl+C)]
    #[arg(long, global = true)]
    pub num_blocks: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full demo sequence: token balance, factory and chequebook
    /// verification, proxy master copy, oracle owner and price
    Status {
        /// Chequebook address to verify and inspect
        #[arg(long, default_value = DEFAULT_CHEQUEBOOK)]
        chequebook: Address,
    },
    /// Deploy a new chequebook through the factory
    Deploy {
        /// Chequebook issuer [default: the sender address]
        #[arg(long)]
        issuer: Option<Address>,
        /// Default hard deposit timeout in seconds
        #[arg(long, default_value_t = 86400)]
        hard_deposit_timeout: u64,
        /// Deployment salt
        #[arg(long, default_value_t = B256::ZERO)]
        salt: B256,
    },
    /// Verify the factory bytecode and a chequebook's provenance
    Verify {
        /// Chequebook address to verify
        chequebook: Address,
    },
    /// Announce an upcoming withdrawal from a chequebook
    PreWithdraw {
        /// Chequebook address to pre-withdraw from
        chequebook: Address,
    },
    /// Show live state of a single contract
    Show {
        #[command(subcommand)]
        command: ShowCommands,
    },
    /// Watch factory deployment events
    Watch,
}

#[derive(Subcommand, Debug)]
pub enum ShowCommands {
    /// Show token metadata and a holder's balance
    Token {
        /// Holder to show the balance of [default: the sender address]
        #[arg(long)]
        holder: Option<Address>,
    },
    /// Show chequebook state
    Chequebook {
        chequebook: Address,
    },
    /// Show oracle owner and price
    Oracle,
    /// Show the master copy behind the proxy
    Proxy,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_status_defaults_to_demo_chequebook() {
        let cli = Cli::try_parse_from(["simpleswap-cli", "status"]).unwrap();
        match cli.command {
            Commands::Status { chequebook } => {
                assert_eq!(chequebook, DEFAULT_CHEQUEBOOK.parse::<Address>().unwrap())
            },
            _ => panic!("expected status command"),
        }
        assert_eq!(cli.rpc, DEFAULT_RPC_PROVIDER);
    }

    #[test]
    fn test_deploy_parses_overrides() {
        let cli = Cli::try_parse_from([
            "simpleswap-cli",
            "deploy",
            "--issuer",
            "0xa4e7663a031ca1f67eea828e4795653504d38c6e",
            "--hard-deposit-timeout",
            "3600",
        ])
        .unwrap();
        match cli.command {
            Commands::Deploy { issuer, hard_deposit_timeout, salt } => {
                assert!(issuer.is_some());
                assert_eq!(hard_deposit_timeout, 3600);
                assert_eq!(salt, B256::ZERO);
            },
            _ => panic!("expected deploy command"),
        }
    }
}
