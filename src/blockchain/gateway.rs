// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Multi-chain RPC gateway.
//!
//! Owns one [`EvmClient`] per registered chain plus the token contract
//! cache, and serves balance and token lookups to the transfer engine.

use std::collections::HashMap;

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use super::chain::ChainRegistry;
use super::client::{EvmClient, ProviderError};
use super::contract_cache::{ContractCache, ContractKey};
use super::erc20::TokenHandle;
use super::types::ChainId;
use crate::transfer::{BalanceProvider, TokenResourceProvider};

pub struct EvmGateway {
    clients: HashMap<ChainId, EvmClient>,
    contracts: ContractCache,
}

impl EvmGateway {
    /// Build a client for every chain in the registry.
    pub fn from_registry(registry: &ChainRegistry, contracts: ContractCache) -> Result<Self, ProviderError> {
        let clients = registry
            .networks()
            .iter()
            .map(|network| Ok((network.chain_id, EvmClient::new(network)?)))
            .collect::<Result<HashMap<_, _>, ProviderError>>()?;

        Ok(Self { clients, contracts })
    }

    fn client(&self, chain_id: ChainId) -> Result<&EvmClient, ProviderError> {
        self.clients
            .get(&chain_id)
            .ok_or(ProviderError::UnsupportedChain(chain_id))
    }
}

#[async_trait]
impl BalanceProvider for EvmGateway {
    async fn native_balance(&self, chain_id: ChainId, address: Address) -> Result<U256, ProviderError> {
        self.client(chain_id)?.native_balance(address).await
    }
}

#[async_trait]
impl TokenResourceProvider for EvmGateway {
    async fn token_contract(
        &self,
        chain_id: ChainId,
        contract: Address,
        wallet_address: &str,
    ) -> Result<TokenHandle, ProviderError> {
        let key = ContractKey::new(chain_id, contract, wallet_address);
        if let Some(handle) = self.contracts.get(&key) {
            tracing::debug!(chain_id, %contract, "Token contract cache hit");
            return Ok(handle);
        }

        let handle = self.client(chain_id)?.token(contract).await?;
        self.contracts.put(key, handle);
        Ok(handle)
    }
}
