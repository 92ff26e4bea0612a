// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Read-only EVM client for a single chain.

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{
        fillers::{BlobGasFiller, ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller},
        Identity, Provider, ProviderBuilder, RootProvider,
    },
};

use super::erc20::{Erc20Contract, TokenHandle};
use super::types::{ChainId, NetworkConfig};

/// HTTP provider type (with the default fillers).
type HttpProvider = FillProvider<
    JoinFill<
        Identity,
        JoinFill<GasFiller, JoinFill<BlobGasFiller, JoinFill<NonceFiller, ChainIdFiller>>>,
    >,
    RootProvider<Ethereum>,
>;

/// EVM JSON-RPC client.
pub struct EvmClient {
    provider: HttpProvider,
}

impl EvmClient {
    /// Create a new client for the specified network.
    ///
    /// No request is made until the first call.
    pub fn new(network: &NetworkConfig) -> Result<Self, ProviderError> {
        let url: url::Url = network
            .rpc_url
            .parse()
            .map_err(|e: url::ParseError| ProviderError::InvalidRpcUrl(e.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self { provider })
    }

    /// Get the native balance for an address, in base units.
    pub async fn native_balance(&self, address: Address) -> Result<U256, ProviderError> {
        self.provider
            .get_balance(address)
            .await
            .map_err(|e| ProviderError::RpcError(e.to_string()))
    }

    /// Read an ERC-20 contract's metadata.
    pub async fn token(&self, contract: Address) -> Result<TokenHandle, ProviderError> {
        Erc20Contract::new(&self.provider, contract).handle().await
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProviderError {
    #[error("Invalid RPC URL: {0}")]
    InvalidRpcUrl(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Chain {0} is not configured")]
    UnsupportedChain(ChainId),

    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Contract error: {0}")]
    ContractError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::types::AVAX_FUJI;

    #[test]
    fn rejects_invalid_rpc_url() {
        let mut network = NetworkConfig::from(&AVAX_FUJI);
        network.rpc_url = "not a url".to_string();
        assert!(matches!(
            EvmClient::new(&network),
            Err(ProviderError::InvalidRpcUrl(_))
        ));
    }

    #[tokio::test]
    async fn builds_client_without_network_access() {
        assert!(EvmClient::new(&NetworkConfig::from(&AVAX_FUJI)).is_ok());
    }
}
