use alloy::{
    primitives::Address,
    rpc::types::{Log, TransactionReceipt},
    sol_types::SolEvent,
};

use crate::error::SwapError;

/// Finds and decodes the first event of type `E` emitted by `contract`
/// within the confirmation receipt.
///
/// Fails with [`SwapError::TransactionReverted`] if the receipt reports
/// failure, and with [`SwapError::EventNotFound`] if no matching log exists.
pub fn find_single_event<E: SolEvent>(
    receipt: &TransactionReceipt,
    contract: Address,
) -> Result<E, SwapError> {
    if !receipt.status() {
        return Err(SwapError::TransactionReverted(receipt.transaction_hash));
    }
    decode_first(receipt.inner.logs(), contract)
}

/// Scans logs for the first event of type `E` emitted by `contract`.
///
/// Logs from other emitters and logs whose first topic does not match the
/// event signature are skipped without decoding.
pub fn decode_first<E: SolEvent>(logs: &[Log], contract: Address) -> Result<E, SwapError> {
    for log in logs {
        if log.address() != contract {
            continue;
        }
        if log.topic0() != Some(&E::SIGNATURE_HASH) {
            continue;
        }
        return E::decode_log_data(log.data()).map_err(SwapError::from);
    }
    Err(SwapError::EventNotFound(E::SIGNATURE))
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{U256, address};

    use super::*;
    use crate::abi::{
        swap::{ERC20SimpleSwap, SimpleSwapFactory},
        token::ERC20,
    };

    fn log_from<E: SolEvent>(emitter: Address, event: &E) -> Log {
        Log {
            inner: alloy::primitives::Log { address: emitter, data: event.encode_log_data() },
            ..Default::default()
        }
    }

    #[test]
    fn test_decodes_matching_event() {
        let factory = address!("0x5e6802d9e7c8cd43bb7c96524fdd50fe8460b92c");
        let chequebook = address!("0xc721594d255aa52b442a67603593673646835759");
        let logs = vec![log_from(
            factory,
            &SimpleSwapFactory::SimpleSwapDeployed { contractAddress: chequebook },
        )];

        let event = decode_first::<SimpleSwapFactory::SimpleSwapDeployed>(&logs, factory).unwrap();
        assert_eq!(event.contractAddress, chequebook);
    }

    #[test]
    fn test_skips_foreign_emitters() {
        let factory = address!("0x5e6802d9e7c8cd43bb7c96524fdd50fe8460b92c");
        let imposter = address!("0x00000000000000000000000000000000000000ff");
        let logs = vec![log_from(
            imposter,
            &SimpleSwapFactory::SimpleSwapDeployed { contractAddress: imposter },
        )];

        assert!(matches!(
            decode_first::<SimpleSwapFactory::SimpleSwapDeployed>(&logs, factory),
            Err(SwapError::EventNotFound(_))
        ));
    }

    #[test]
    fn test_skips_other_event_types() {
        let chequebook = address!("0xc721594d255aa52b442a67603593673646835759");
        let holder = address!("0x00000000000000000000000000000000000000aa");
        let logs = vec![log_from(
            chequebook,
            &ERC20::Transfer { from: holder, to: chequebook, value: U256::from(10u8) },
        )];

        assert!(matches!(
            decode_first::<ERC20SimpleSwap::Withdraw>(&logs, chequebook),
            Err(SwapError::EventNotFound(_))
        ));
    }

    #[test]
    fn test_returns_first_of_multiple_matches() {
        let chequebook = address!("0xc721594d255aa52b442a67603593673646835759");
        let logs = vec![
            log_from(chequebook, &ERC20SimpleSwap::Withdraw { amount: U256::from(1u8) }),
            log_from(chequebook, &ERC20SimpleSwap::Withdraw { amount: U256::from(2u8) }),
        ];

        let event = decode_first::<ERC20SimpleSwap::Withdraw>(&logs, chequebook).unwrap();
        assert_eq!(event.amount, U256::from(1u8));
    }
}
