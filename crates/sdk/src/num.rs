use std::str::FromStr;

use alloy::primitives::U256;
use fastnum::UD128;

use crate::error::SwapError;

/// Converts fixed-point integers used by the contracts to normalized
/// decimals and back, given the number of decimals the contract allocates.
#[derive(Clone, Copy, Debug)]
pub struct Converter {
    decimals: u8,
}

impl Converter {
    pub fn new(decimals: u8) -> Self { Self { decimals } }

    pub fn decimals(&self) -> u8 { self.decimals }

    /// Normalizes a raw fixed-point integer to a decimal.
    ///
    /// Fails with [`SwapError::InvalidArgument`] when the value exceeds the
    /// 128-bit decimal coefficient; `U256` amounts past roughly 39
    /// significant digits are not representable without precision loss.
    pub fn from_unsigned(&self, raw: U256) -> Result<UD128, SwapError> {
        let digits = raw.to_string();
        let scale = self.decimals as usize;
        let normalized = if scale == 0 {
            digits
        } else if digits.len() > scale {
            format!("{}.{}", &digits[..digits.len() - scale], &digits[digits.len() - scale..])
        } else {
            format!("0.{}{}", "0".repeat(scale - digits.len()), digits)
        };
        normalized
            .parse::<UD128>()
            .map_err(|err| SwapError::InvalidArgument(format!("{raw} does not fit a decimal: {err}")))
    }

    /// Denormalizes a decimal back to the raw fixed-point integer.
    ///
    /// Fails with [`SwapError::InvalidArgument`] if the value carries more
    /// fractional digits than the converter allocates, rather than rounding
    /// silently.
    pub fn to_unsigned(&self, value: UD128) -> Result<U256, SwapError> {
        let rendered = value.to_string();
        let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
        let scale = self.decimals as usize;
        if frac_part.len() > scale && frac_part[scale..].bytes().any(|b| b != b'0') {
            return Err(SwapError::InvalidArgument(format!(
                "{value} has more than {scale} fractional digits"
            )));
        }
        let frac = &frac_part[..frac_part.len().min(scale)];
        let raw = format!("{int_part}{frac}{}", "0".repeat(scale - frac.len()));
        U256::from_str(&raw).map_err(|err| SwapError::InvalidArgument(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use fastnum::udec128;

    use super::*;

    #[test]
    fn test_normalizes_token_amounts() {
        let converter = Converter::new(18);
        assert_eq!(
            converter.from_unsigned(U256::from(1_500_000_000_000_000_000u128)).unwrap(),
            udec128!(1.5)
        );
        assert_eq!(
            converter.from_unsigned(U256::from(1u8)).unwrap(),
            udec128!(0.000000000000000001)
        );
        assert_eq!(converter.from_unsigned(U256::ZERO).unwrap(), udec128!(0));
    }

    #[test]
    fn test_zero_decimals_is_identity() {
        let converter = Converter::new(0);
        assert_eq!(converter.from_unsigned(U256::from(100u8)).unwrap(), udec128!(100));
        assert_eq!(converter.to_unsigned(udec128!(100)).unwrap(), U256::from(100u8));
    }

    #[test]
    fn test_rejects_amounts_exceeding_decimal_capacity() {
        let converter = Converter::new(18);
        assert!(matches!(
            converter.from_unsigned(U256::MAX),
            Err(SwapError::InvalidArgument(_))
        ));

        // 40 significant digits, one past the coefficient capacity
        let supply = U256::from_str("1234567890123456789012345678901234567890").unwrap();
        assert!(converter.from_unsigned(supply).is_err());
    }

    #[test]
    fn test_denormalizes_back() {
        let converter = Converter::new(6);
        assert_eq!(converter.to_unsigned(udec128!(1.5)).unwrap(), U256::from(1_500_000u32));
        assert_eq!(converter.to_unsigned(udec128!(0.000001)).unwrap(), U256::from(1u8));
    }

    #[test]
    fn test_rejects_excess_precision() {
        let converter = Converter::new(2);
        assert!(matches!(
            converter.to_unsigned(udec128!(1.001)),
            Err(SwapError::InvalidArgument(_))
        ));
    }
}
