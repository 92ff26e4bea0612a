// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Decimal amount → base-unit conversion for a given currency.

use std::str::FromStr;

use alloy::primitives::{Address, U256};

use super::currency::is_native;
use super::error::TransferError;
use super::providers::TokenResourceProvider;
use crate::blockchain::{format_amount, parse_decimal, ChainId, NetworkConfig, TokenHandle};

/// What an amount is denominated in, as classified during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Denomination {
    Native,
    Token(TokenHandle),
}

/// Exact base-unit amount together with what it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedAmount {
    value: U256,
    source: String,
    precision: u8,
    denomination: Denomination,
}

impl NormalizedAmount {
    /// Amount in base units.
    pub fn value(&self) -> U256 {
        self.value
    }

    /// Decimal string as received.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Precision used for the conversion.
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Native asset, or the token contract resolved for the precision.
    pub fn denomination(&self) -> Denomination {
        self.denomination
    }

    /// Canonical human-readable amount at the same precision.
    pub fn to_display(&self) -> String {
        format_amount(self.value, self.precision)
    }
}

/// What the normalizer needs to know about the request's surroundings.
pub struct NormalizeContext<'a> {
    pub network: &'a NetworkConfig,
    pub tokens: &'a dyn TokenResourceProvider,
    pub wallet_address: &'a str,
}

/// Resolve a token contract for `currency`, mapping every failure to
/// `CurrencyResolution`.
pub async fn resolve_token(
    tokens: &dyn TokenResourceProvider,
    chain_id: ChainId,
    currency: &str,
    wallet_address: &str,
) -> Result<TokenHandle, TransferError> {
    let resolution_error = |reason: String| TransferError::CurrencyResolution {
        currency: currency.to_string(),
        reason,
    };

    let contract = Address::from_str(currency.trim())
        .map_err(|e| resolution_error(format!("not a contract address ({e})")))?;

    tokens
        .token_contract(chain_id, contract, wallet_address)
        .await
        .map_err(|e| resolution_error(e.to_string()))
}

/// Convert `amount` to base units of `currency`.
///
/// The amount's syntax is checked first, so malformed input never costs a
/// contract lookup. Native precision comes from the network configuration;
/// token precision is read from the contract, which may be an RPC round-trip.
pub async fn normalize(
    ctx: &NormalizeContext<'_>,
    amount: &str,
    currency: &str,
) -> Result<NormalizedAmount, TransferError> {
    let invalid = |reason| TransferError::InvalidAmount {
        amount: amount.to_string(),
        reason,
    };

    let decimal = parse_decimal(amount).map_err(invalid)?;

    let (precision, denomination) = if is_native(currency) {
        (ctx.network.native_decimals, Denomination::Native)
    } else {
        let token =
            resolve_token(ctx.tokens, ctx.network.chain_id, currency, ctx.wallet_address).await?;
        (token.precision(), Denomination::Token(token))
    };

    let value = decimal.to_base_units(precision).map_err(invalid)?;

    Ok(NormalizedAmount {
        value,
        source: amount.to_string(),
        precision,
        denomination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::{AmountError, ETHEREUM_MAINNET, NATIVE_TOKEN_ZERO};
    use crate::transfer::testing::{StaticTokens, TOKEN_6};

    async fn run(amount: &str, currency: &str, tokens: &StaticTokens) -> Result<NormalizedAmount, TransferError> {
        let network = NetworkConfig::from(&ETHEREUM_MAINNET);
        let ctx = NormalizeContext {
            network: &network,
            tokens,
            wallet_address: "0x1111111111111111111111111111111111111111",
        };
        normalize(&ctx, amount, currency).await
    }

    #[tokio::test]
    async fn native_uses_chain_precision_without_rpc() {
        let tokens = StaticTokens::default();
        let normalized = run("1.5", NATIVE_TOKEN_ZERO, &tokens).await.unwrap();

        assert_eq!(normalized.value(), U256::from(1_500_000_000_000_000_000u64));
        assert_eq!(normalized.precision(), 18);
        assert_eq!(normalized.source(), "1.5");
        assert_eq!(normalized.denomination(), Denomination::Native);
        assert_eq!(tokens.calls(), 0);
    }

    #[tokio::test]
    async fn token_precision_is_read_from_contract() {
        let tokens = StaticTokens::with_token(TOKEN_6, 6);
        let normalized = run("100", &TOKEN_6.to_string(), &tokens).await.unwrap();

        assert_eq!(normalized.value(), U256::from(100_000_000u64));
        assert_eq!(normalized.to_display(), "100");
        assert_eq!(
            normalized.denomination(),
            Denomination::Token(TokenHandle::new(TOKEN_6, 6))
        );
        assert_eq!(tokens.calls(), 1);
    }

    #[tokio::test]
    async fn display_round_trip_is_lossless() {
        let tokens = StaticTokens::with_token(TOKEN_6, 6);
        for amount in ["0.000001", "1.25", "123456789.5", "0"] {
            let normalized = run(amount, &TOKEN_6.to_string(), &tokens).await.unwrap();
            assert_eq!(normalized.to_display(), amount);
        }
    }

    #[tokio::test]
    async fn excess_precision_is_rejected() {
        let tokens = StaticTokens::with_token(TOKEN_6, 6);
        let err = run("0.0000001", &TOKEN_6.to_string(), &tokens).await.unwrap_err();
        assert!(matches!(
            err,
            TransferError::InvalidAmount {
                reason: AmountError::TooManyDecimals { max: 6 },
                ..
            }
        ));
    }

    #[tokio::test]
    async fn malformed_amount_is_rejected() {
        let tokens = StaticTokens::default();
        let err = run("-3", NATIVE_TOKEN_ZERO, &tokens).await.unwrap_err();
        assert!(matches!(err, TransferError::InvalidAmount { .. }));
    }

    #[tokio::test]
    async fn malformed_token_amount_skips_contract_lookup() {
        for tokens in [StaticTokens::default(), StaticTokens::with_token(TOKEN_6, 6)] {
            let err = run("-5", &TOKEN_6.to_string(), &tokens).await.unwrap_err();
            assert!(matches!(
                err,
                TransferError::InvalidAmount {
                    reason: AmountError::Malformed,
                    ..
                }
            ));
            assert_eq!(tokens.calls(), 0);
        }
    }

    #[tokio::test]
    async fn unknown_or_malformed_contract_fails_resolution() {
        let tokens = StaticTokens::default();

        let err = run("1", &TOKEN_6.to_string(), &tokens).await.unwrap_err();
        assert!(matches!(err, TransferError::CurrencyResolution { .. }));

        let err = run("1", "usdc", &tokens).await.unwrap_err();
        assert!(matches!(err, TransferError::CurrencyResolution { .. }));
    }
}
