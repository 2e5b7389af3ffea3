//! Price conversion between decimal ether amounts and integer wei
//!
//! Prices are carried as string-encoded integers in the smallest unit
//! (wei) and are never represented as floating point. Parsing accepts
//! a decimal amount with up to 18 fractional digits.

use crate::error::{MarketError, Result};

/// Fractional digits in one ether
const ETHER_DECIMALS: usize = 18;

/// Wei per whole ether (10^18)
const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Parse a decimal ether amount ("0.05", "1", "2.5") into wei.
///
/// The amount must be strictly positive and carry at most 18
/// fractional digits; anything else is a validation error.
pub fn parse_ether(input: &str) -> Result<u128> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MarketError::Validation("price is required".to_string()));
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_price(trimmed));
    }
    if trimmed.contains('.') && (frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit())) {
        return Err(invalid_price(trimmed));
    }
    if frac.len() > ETHER_DECIMALS {
        return Err(MarketError::Validation(format!(
            "price '{trimmed}' has more than {ETHER_DECIMALS} fractional digits"
        )));
    }

    let whole: u128 = whole.parse().map_err(|_| invalid_price(trimmed))?;
    let frac: u128 = if frac.is_empty() {
        0
    } else {
        // Right-pad to 18 digits so "05" means 0.05 ether, not 5 wei.
        format!("{frac:0<ETHER_DECIMALS$}")
            .parse()
            .map_err(|_| invalid_price(trimmed))?
    };

    let wei = whole
        .checked_mul(WEI_PER_ETHER)
        .and_then(|w| w.checked_add(frac))
        .ok_or_else(|| invalid_price(trimmed))?;

    if wei == 0 {
        return Err(MarketError::Validation(
            "price must be greater than zero".to_string(),
        ));
    }

    Ok(wei)
}

/// Render a wei amount as a decimal ether string with trailing zeros
/// trimmed ("50000000000000000" -> "0.05").
pub fn format_ether(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let frac = wei % WEI_PER_ETHER;
    if frac == 0 {
        return whole.to_string();
    }
    let frac = format!("{frac:0>ETHER_DECIMALS$}");
    format!("{whole}.{}", frac.trim_end_matches('0'))
}

fn invalid_price(input: &str) -> MarketError {
    MarketError::Validation(format!("'{input}' is not a valid ether amount"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_fractional_amount() {
        assert_eq!(parse_ether("0.05").unwrap(), 50_000_000_000_000_000);
    }

    #[test]
    fn test_parse_whole_amount() {
        assert_eq!(parse_ether("1").unwrap(), WEI_PER_ETHER);
        assert_eq!(parse_ether("2.5").unwrap(), 2_500_000_000_000_000_000);
    }

    #[test]
    fn test_parse_full_precision() {
        assert_eq!(parse_ether("0.000000000000000001").unwrap(), 1);
    }

    #[test]
    fn test_rejects_zero_and_empty() {
        assert!(parse_ether("0").is_err());
        assert!(parse_ether("0.0").is_err());
        assert!(parse_ether("").is_err());
        assert!(parse_ether("   ").is_err());
    }

    #[test]
    fn test_rejects_malformed_amounts() {
        assert!(parse_ether("-1").is_err());
        assert!(parse_ether("1.").is_err());
        assert!(parse_ether(".5").is_err());
        assert!(parse_ether("1.2.3").is_err());
        assert!(parse_ether("abc").is_err());
        assert!(parse_ether("1e18").is_err());
    }

    #[test]
    fn test_rejects_excess_precision() {
        // 19 fractional digits
        assert!(parse_ether("0.0000000000000000001").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        assert_eq!(format_ether(50_000_000_000_000_000), "0.05");
        assert_eq!(format_ether(WEI_PER_ETHER), "1");
        assert_eq!(format_ether(2_500_000_000_000_000_000), "2.5");
        assert_eq!(format_ether(1), "0.000000000000000001");
    }
}
