alloy::sol! {
    /// Owner-updated price oracle.
    #[sol(rpc)]
    #[derive(Debug)]
    contract PriceOracle {
        event PriceUpdated(uint256 price);

        function owner() external view returns (address);
        function price() external view returns (uint256);
        function updatePrice(uint256 newPrice) external;
    }
}

#[cfg(test)]
mod tests {
    use alloy::sol_types::SolCall;

    use super::*;

    #[test]
    fn test_well_known_selectors() {
        assert_eq!(PriceOracle::ownerCall::SELECTOR, [0x8d, 0xa5, 0xcb, 0x5b]);
        assert_eq!(PriceOracle::priceCall::SELECTOR, [0xa0, 0x35, 0xb1, 0xfe]);
    }
}
