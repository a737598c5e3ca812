use alloy::primitives::TxHash;

/// Errors produced by the SDK.
///
/// Chain-client failures are passed through transparently; the remaining
/// variants cover the suite-specific checks layered on top of them.
#[derive(Debug, thiserror::Error)]
pub enum SwapError {
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),

    #[error(transparent)]
    Transport(#[from] alloy::transports::TransportError),

    #[error(transparent)]
    SolType(#[from] alloy::sol_types::Error),

    #[error(transparent)]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    /// The confirmation receipt reported failure.
    #[error("transaction {0} reverted")]
    TransactionReverted(TxHash),

    /// The expected event was not emitted by the watched contract.
    #[error("event {0} not found in receipt")]
    EventNotFound(&'static str),

    /// Code deployed at the factory address does not match the supported
    /// deployment.
    #[error("factory bytecode does not match the supported deployment")]
    InvalidFactory,

    /// The factory has no record of deploying the chequebook.
    #[error("chequebook was not deployed by the factory")]
    NotDeployedByFactory,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
