use clap::Parser;

#[tokio::main]
async fn main() {
    if let Err(err) = simpleswap_cli::run(simpleswap_cli::args::Cli::parse()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
