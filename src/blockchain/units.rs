// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Conversion between human-readable decimal amounts and base units.
//!
//! Parsing is exact: an amount that cannot be represented at the requested
//! precision is rejected instead of rounded. Trailing fractional zeros do not
//! count against the precision (`"1.500000000"` is fine at 6 decimals).

use alloy::primitives::U256;

/// Reasons a decimal amount string cannot be converted to base units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is not a non-negative decimal number")]
    Malformed,

    #[error("too many decimal places (max {max})")]
    TooManyDecimals { max: u8 },

    #[error("amount does not fit in 256 bits")]
    Overflow,
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn pow10(decimals: u8) -> Result<U256, AmountError> {
    U256::from(10u64)
        .checked_pow(U256::from(decimals))
        .ok_or(AmountError::Overflow)
}

/// A syntactically valid decimal amount, not yet tied to any precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalAmount<'a> {
    whole: &'a str,
    // Trailing zeros already trimmed
    fraction: &'a str,
}

/// Check that `amount` is a non-negative decimal number.
///
/// Needs no precision, so callers can reject bad input before looking one up.
pub fn parse_decimal(amount: &str) -> Result<DecimalAmount<'_>, AmountError> {
    let amount = amount.trim();

    let (whole, fraction) = match amount.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (amount, None),
    };

    if !is_digits(whole) {
        return Err(AmountError::Malformed);
    }

    let fraction = match fraction {
        Some(f) if !is_digits(f) => return Err(AmountError::Malformed),
        Some(f) => f.trim_end_matches('0'),
        None => "",
    };

    Ok(DecimalAmount { whole, fraction })
}

impl DecimalAmount<'_> {
    pub fn is_zero(&self) -> bool {
        self.fraction.is_empty() && self.whole.bytes().all(|b| b == b'0')
    }

    /// Scale to base units at `decimals` precision.
    pub fn to_base_units(&self, decimals: u8) -> Result<U256, AmountError> {
        if self.fraction.len() > decimals as usize {
            return Err(AmountError::TooManyDecimals { max: decimals });
        }

        // Zero is representable at any precision, even where 10^decimals is not.
        if self.is_zero() {
            return Ok(U256::ZERO);
        }

        let whole = U256::from_str_radix(self.whole, 10).map_err(|_| AmountError::Overflow)?;

        // Pad with zeros to match decimals
        let padded = format!("{:0<width$}", self.fraction, width = decimals as usize);
        let fraction = if padded.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(&padded, 10).map_err(|_| AmountError::Overflow)?
        };

        whole
            .checked_mul(pow10(decimals)?)
            .and_then(|w| w.checked_add(fraction))
            .ok_or(AmountError::Overflow)
    }
}

/// Parse a human-readable amount to base units.
///
/// # Arguments
/// * `amount` - Amount as a string (e.g., "1.5")
/// * `decimals` - Number of decimals (18 for native assets, 6 for USDC)
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, AmountError> {
    parse_decimal(amount)?.to_base_units(decimals)
}

/// Format base units to a human-readable amount without losing digits.
pub fn format_amount(amount: U256, decimals: u8) -> String {
    if amount.is_zero() {
        return "0".to_string();
    }

    // 10^decimals larger than U256 means every representable amount is a
    // pure fraction.
    let Ok(divisor) = pow10(decimals) else {
        let digits = amount.to_string();
        let padded = format!("{:0>width$}", digits, width = decimals as usize);
        return format!("0.{}", padded.trim_end_matches('0'));
    };

    let whole = amount / divisor;
    let remainder = amount % divisor;

    if remainder.is_zero() {
        whole.to_string()
    } else {
        let decimal_str = format!("{:0>width$}", remainder.to_string(), width = decimals as usize);
        format!("{}.{}", whole, decimal_str.trim_end_matches('0'))
    }
}

/// Encode base units as a fixed-width (32-byte) `0x`-prefixed hex string.
pub fn to_hex_word(amount: U256) -> String {
    alloy::hex::encode_prefixed(amount.to_be_bytes::<32>())
}
