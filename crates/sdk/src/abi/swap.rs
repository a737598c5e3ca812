alloy::sol! {
    /// Factory deploying [`ERC20SimpleSwap`] chequebooks and keeping the
    /// registry of the addresses it deployed to.
    #[sol(rpc)]
    #[derive(Debug)]
    contract SimpleSwapFactory {
        event SimpleSwapDeployed(address contractAddress);

        function deploySimpleSwap(
            address issuer,
            uint256 defaultHardDepositTimeoutDuration,
            bytes32 salt
        ) external returns (address);
        function deployedContracts(address chequebook) external view returns (bool);
        function ERC20Address() external view returns (address);
    }

    /// A single deployed chequebook.
    #[sol(rpc)]
    #[derive(Debug)]
    contract ERC20SimpleSwap {
        event Withdraw(uint256 amount);

        function issuer() external view returns (address);
        function balance() external view returns (uint256);
        function withdrawTime() external view returns (uint256);
        function preWithdraw() external;
        function withdraw(uint256 amount) external;
    }
}

#[cfg(test)]
mod tests {
    use alloy::sol_types::{SolCall, SolEvent};

    use super::*;

    #[test]
    fn test_signatures_match_the_deployed_abi() {
        assert_eq!(
            SimpleSwapFactory::deploySimpleSwapCall::SIGNATURE,
            "deploySimpleSwap(address,uint256,bytes32)"
        );
        assert_eq!(SimpleSwapFactory::deployedContractsCall::SIGNATURE, "deployedContracts(address)");
        assert_eq!(SimpleSwapFactory::ERC20AddressCall::SIGNATURE, "ERC20Address()");
        assert_eq!(SimpleSwapFactory::SimpleSwapDeployed::SIGNATURE, "SimpleSwapDeployed(address)");

        assert_eq!(ERC20SimpleSwap::balanceCall::SELECTOR, [0xb6, 0x9e, 0xf8, 0xa8]);
        assert_eq!(ERC20SimpleSwap::preWithdrawCall::SIGNATURE, "preWithdraw()");
        assert_eq!(ERC20SimpleSwap::withdrawTimeCall::SIGNATURE, "withdrawTime()");
    }
}
