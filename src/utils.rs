use anyhow::{anyhow, Result};
use ethers::types::U256;
use ethers::utils::format_units;

use crate::entity::AppError;

/// Parse a backend-provided decimal string into base units.
pub fn parse_base_units(raw: &str) -> Result<U256> {
    U256::from_dec_str(raw).map_err(|_| AppError::InvalidBalance(raw.to_string()).into())
}

/// Smallest display step: `floor(0.001 × 10^decimals)`. Zero for tokens with
/// fewer than three decimals, which means no truncation applies.
fn display_modulus(decimals: u8) -> U256 {
    if decimals < 3 {
        U256::zero()
    } else {
        U256::exp10(usize::from(decimals) - 3)
    }
}

/// Truncate a base-unit balance to three decimal places of display precision,
/// never rounding up. Render-only: the result must never be written back.
pub fn truncate_for_display(balance: U256, decimals: u8) -> U256 {
    let modulus = display_modulus(decimals);
    if modulus.is_zero() {
        balance
    } else {
        balance - balance % modulus
    }
}

/// Human-readable amount for a base-unit balance, truncated to three decimal
/// places. `format_balance(1234567890123456789, 18)` is `"1.234"`.
pub fn format_balance(balance: U256, decimals: u8) -> Result<String> {
    let truncated = truncate_for_display(balance, decimals);
    let formatted = format_units(truncated, u32::from(decimals))
        .map_err(|e| anyhow!("failed to format {} with {} decimals: {}", balance, decimals, e))?;
    Ok(trim_trailing_zeros(&formatted))
}

fn trim_trailing_zeros(formatted: &str) -> String {
    if !formatted.contains('.') {
        return formatted.to_string();
    }
    formatted.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Shortened `0xabcd…ef12` form for display next to full-value copy.
pub fn short_address(address: &str) -> String {
    if address.len() <= 12 {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}
