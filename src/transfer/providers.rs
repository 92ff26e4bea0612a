// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Collaborators the transfer engine depends on.
//!
//! The engine only sees these traits. Production implementations live in
//! `blockchain` (RPC gateway, key store) and `storage` (queue database);
//! tests substitute in-memory doubles.

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use super::submission::{QueueId, SubmissionRecord};
use crate::blockchain::{ChainId, ProviderError, TokenHandle};

/// Resolves the active signing address of a backend wallet.
#[async_trait]
pub trait SignerResolver: Send + Sync {
    /// Returns `None` when the wallet has no active signer on the chain.
    async fn signer_address(&self, chain_id: ChainId, wallet_address: &str) -> Option<Address>;
}

/// Resolves token contracts, possibly from a cache.
#[async_trait]
pub trait TokenResourceProvider: Send + Sync {
    async fn token_contract(
        &self,
        chain_id: ChainId,
        contract: Address,
        wallet_address: &str,
    ) -> Result<TokenHandle, ProviderError>;
}

/// Reads native balances.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    async fn native_balance(&self, chain_id: ChainId, address: Address) -> Result<U256, ProviderError>;
}

/// Durable queue consumed by the broadcast worker.
///
/// `submit` returns only once the record is persisted or has been rejected.
#[async_trait]
pub trait TransactionQueue: Send + Sync {
    async fn submit(&self, record: SubmissionRecord) -> Result<QueueId, SubmissionError>;
}

/// The queue refused or failed to persist a record.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct SubmissionError(pub String);
