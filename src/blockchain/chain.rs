// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Chain registry: resolves the `{chain}` path segment to a network.
//!
//! Accepted forms, all case-insensitive:
//! - a registered alias (`"fuji"`, `"ethereum"`)
//! - a bare numeric chain id (`"43113"`)
//! - a CAIP-2 identifier (`"eip155:43113"`)
//!
//! The registry is an explicit value built once at startup and shared by
//! the transfer engine and the EVM gateway.

use super::types::{ChainId, NetworkConfig, BUILTIN_NETWORKS};

/// Errors raised while resolving or configuring chains.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("Unknown chain: {0}")]
    Unknown(String),
}

/// Parses a CAIP-2 identifier into an EIP-155 chain ID.
fn parse_caip2(caip: &str) -> Option<ChainId> {
    caip.strip_prefix("eip155:").and_then(|s| s.parse().ok())
}

/// Set of networks this deployment can transact on.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    networks: Vec<NetworkConfig>,
}

impl ChainRegistry {
    /// Registry containing the given networks.
    pub fn new(networks: Vec<NetworkConfig>) -> Self {
        Self { networks }
    }

    /// Registry of all built-in networks with their default RPC endpoints.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_NETWORKS.iter().map(NetworkConfig::from).collect())
    }

    /// Replace the RPC endpoint of the chain identified by `chain`.
    pub fn set_rpc_url(&mut self, chain: &str, rpc_url: impl Into<String>) -> Result<(), ChainError> {
        let chain_id = self.resolve(chain)?.chain_id;
        if let Some(network) = self.networks.iter_mut().find(|n| n.chain_id == chain_id) {
            network.rpc_url = rpc_url.into();
        }
        Ok(())
    }

    /// Resolve an alias, numeric id or CAIP-2 id to a registered network.
    pub fn resolve(&self, chain: &str) -> Result<&NetworkConfig, ChainError> {
        let needle = chain.trim().to_ascii_lowercase();

        let by_id = parse_caip2(&needle).or_else(|| needle.parse::<ChainId>().ok());
        let found = match by_id {
            Some(chain_id) => self.get(chain_id),
            None => self
                .networks
                .iter()
                .find(|n| n.aliases.iter().any(|alias| *alias == needle)),
        };

        found.ok_or_else(|| ChainError::Unknown(chain.to_string()))
    }

    /// Look up a network by numeric chain id.
    pub fn get(&self, chain_id: ChainId) -> Option<&NetworkConfig> {
        self.networks.iter().find(|n| n.chain_id == chain_id)
    }

    /// All registered networks.
    pub fn networks(&self) -> &[NetworkConfig] {
        &self.networks
    }
}
