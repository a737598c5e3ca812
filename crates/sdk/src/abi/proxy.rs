alloy::sol! {
    /// Delegating proxy exposing the address of its master copy.
    #[sol(rpc)]
    #[derive(Debug)]
    contract MasterCopyProxy {
        function masterCopy() external view returns (address);
    }
}

#[cfg(test)]
mod tests {
    use alloy::sol_types::SolCall;

    use super::*;

    #[test]
    fn test_master_copy_selector() {
        assert_eq!(MasterCopyProxy::masterCopyCall::SELECTOR, [0xa6, 0x19, 0x48, 0x6e]);
    }
}
