// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use alloy::primitives::U256;

use crate::blockchain::{AmountError, ChainId};

/// Why a transfer request was not queued.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("Unknown chain: {0}")]
    ChainResolution(String),

    #[error("Invalid amount `{amount}`: {reason}")]
    InvalidAmount { amount: String, reason: AmountError },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Cannot resolve currency {currency}: {reason}")]
    CurrencyResolution { currency: String, reason: String },

    #[error("No signer available for wallet {wallet} on chain {chain_id}")]
    MissingSignerAddress { wallet: String, chain_id: ChainId },

    #[error("Insufficient balance: have {balance}, need {required}")]
    InsufficientBalance { balance: U256, required: U256 },

    #[error("Balance lookup failed: {0}")]
    BalanceUnavailable(String),

    #[error("Failed to queue transaction: {0}")]
    Submission(String),
}

impl TransferError {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            TransferError::ChainResolution(_) => "INVALID_CHAIN",
            TransferError::InvalidAmount { .. } => "INVALID_AMOUNT",
            TransferError::InvalidAddress(_) => "INVALID_ADDRESS",
            TransferError::CurrencyResolution { .. } => "CURRENCY_RESOLUTION_FAILED",
            TransferError::MissingSignerAddress { .. } => "MISSING_SIGNER",
            TransferError::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            TransferError::BalanceUnavailable(_) => "BALANCE_UNAVAILABLE",
            TransferError::Submission(_) => "SUBMISSION_FAILED",
        }
    }
}
