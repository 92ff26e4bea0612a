// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory collaborator doubles shared by the transfer and API tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::{address, Address, U256};
use async_trait::async_trait;

use super::providers::{
    BalanceProvider, SignerResolver, SubmissionError, TokenResourceProvider, TransactionQueue,
};
use super::submission::{QueueId, SubmissionRecord};
use crate::blockchain::{ChainId, ProviderError, TokenHandle};

/// Backend wallet that has a signer.
pub const WALLET: Address = address!("1111111111111111111111111111111111111111");

/// Recipient used throughout the tests.
pub const RECIPIENT: Address = address!("2222222222222222222222222222222222222222");

/// Token contract with 6 decimals.
pub const TOKEN_6: Address = address!("5425890298aed601595a70AB815c96711a31Bc65");

#[derive(Default)]
pub struct StaticTokens {
    tokens: HashMap<Address, u8>,
    calls: AtomicUsize,
}

impl StaticTokens {
    pub fn with_token(address: Address, decimals: u8) -> Self {
        let mut tokens = Self::default();
        tokens.tokens.insert(address, decimals);
        tokens
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenResourceProvider for StaticTokens {
    async fn token_contract(
        &self,
        _chain_id: ChainId,
        contract: Address,
        _wallet_address: &str,
    ) -> Result<TokenHandle, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens
            .get(&contract)
            .map(|decimals| TokenHandle::new(contract, *decimals))
            .ok_or_else(|| ProviderError::ContractError("execution reverted".to_string()))
    }
}

pub struct StaticBalances {
    balance: Option<U256>,
    calls: AtomicUsize,
}

impl StaticBalances {
    pub fn new(balance: U256) -> Self {
        Self {
            balance: Some(balance),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            balance: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceProvider for StaticBalances {
    async fn native_balance(&self, _chain_id: ChainId, _address: Address) -> Result<U256, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.balance
            .ok_or_else(|| ProviderError::RpcError("connection refused".to_string()))
    }
}

/// Signer resolver that knows a fixed set of wallets.
pub struct StaticSigners(pub Vec<Address>);

#[async_trait]
impl SignerResolver for StaticSigners {
    async fn signer_address(&self, _chain_id: ChainId, wallet_address: &str) -> Option<Address> {
        let wallet: Address = wallet_address.parse().ok()?;
        self.0.iter().copied().find(|a| *a == wallet)
    }
}

/// Queue that keeps submitted records in memory.
#[derive(Default)]
pub struct RecordingQueue {
    records: Mutex<Vec<SubmissionRecord>>,
    reject: bool,
}

impl RecordingQueue {
    pub fn rejecting() -> Self {
        Self {
            records: Mutex::default(),
            reject: true,
        }
    }

    pub fn submitted(&self) -> Vec<SubmissionRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionQueue for RecordingQueue {
    async fn submit(&self, record: SubmissionRecord) -> Result<QueueId, SubmissionError> {
        if self.reject {
            return Err(SubmissionError("queue is read-only".to_string()));
        }
        let mut records = self.records.lock().unwrap();
        records.push(record);
        Ok(QueueId::new(format!("queue-{}", records.len())))
    }
}
