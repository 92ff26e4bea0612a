// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! LRU cache for resolved token contract handles.
//!
//! Keyed by chain, contract and requesting wallet so that one transfer
//! request can resolve the same contract twice (precision lookup, then call
//! preparation) while only hitting the RPC once.

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use alloy::primitives::Address;
use lru::LruCache;

use super::erc20::TokenHandle;
use super::types::ChainId;

/// Cache key: `(chain, contract, lowercase wallet address)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractKey {
    pub chain_id: ChainId,
    pub contract: Address,
    pub wallet: String,
}

impl ContractKey {
    pub fn new(chain_id: ChainId, contract: Address, wallet: &str) -> Self {
        Self {
            chain_id,
            contract,
            wallet: wallet.to_lowercase(),
        }
    }
}

/// Cached entry: handle + insertion timestamp.
struct CacheEntry {
    handle: TokenHandle,
    inserted_at: Instant,
}

/// In-process LRU cache of token contract handles.
pub struct ContractCache {
    cache: Mutex<LruCache<ContractKey, CacheEntry>>,
    ttl: Duration,
}

impl ContractCache {
    /// Create a new cache with the given capacity and TTL.
    ///
    /// - `capacity`: Max number of contract handles to keep.
    /// - `ttl`: Time-to-live for each cache entry.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN),
            )),
            ttl,
        }
    }

    /// Get a cached handle. Returns `None` if not cached or expired.
    pub fn get(&self, key: &ContractKey) -> Option<TokenHandle> {
        let mut cache = self.cache.lock().ok()?;
        if let Some(entry) = cache.get(key) {
            if entry.inserted_at.elapsed() < self.ttl {
                return Some(entry.handle);
            }
            // Expired, drop it
            cache.pop(key);
        }
        None
    }

    /// Store a handle.
    pub fn put(&self, key: ContractKey, handle: TokenHandle) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(
                key,
                CacheEntry {
                    handle,
                    inserted_at: Instant::now(),
                },
            );
        }
    }
}
