// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use alloy::primitives::Address;

use super::error::TransferError;
use super::normalize::NormalizedAmount;
use super::providers::BalanceProvider;
use crate::blockchain::ChainId;

/// Reject native transfers the sender cannot cover.
///
/// The balance is a point-in-time snapshot; concurrent transfers from the
/// same wallet can both pass. Ordering per sender is the worker's job.
pub async fn check_affordable(
    balances: &dyn BalanceProvider,
    chain_id: ChainId,
    sender: Address,
    amount: &NormalizedAmount,
) -> Result<(), TransferError> {
    let balance = balances
        .native_balance(chain_id, sender)
        .await
        .map_err(|e| TransferError::BalanceUnavailable(e.to_string()))?;

    if balance < amount.value() {
        return Err(TransferError::InsufficientBalance {
            balance,
            required: amount.value(),
        });
    }

    Ok(())
}
