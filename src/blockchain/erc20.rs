// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! ERC-20 token contract interactions.

use alloy::{
    primitives::{Address, Bytes},
    providers::Provider,
    sol,
    sol_types::SolCall,
};

use super::client::ProviderError;
use super::units::parse_amount;

// Define the ERC-20 interface using alloy's sol! macro
sol! {
    #[sol(rpc)]
    interface IERC20 {
        function decimals() external view returns (uint8);
        function transfer(address to, uint256 amount) external returns (bool);
    }
}

/// ERC-20 contract wrapper bound to an RPC provider.
pub struct Erc20Contract<P> {
    contract: IERC20::IERC20Instance<P>,
    address: Address,
}

impl<P: Provider + Clone> Erc20Contract<P> {
    /// Create a new ERC-20 contract instance.
    pub fn new(provider: &P, address: Address) -> Self {
        let contract = IERC20::new(address, provider.clone());
        Self { contract, address }
    }

    /// Get the token decimals.
    pub async fn decimals(&self) -> Result<u8, ProviderError> {
        self.contract
            .decimals()
            .call()
            .await
            .map_err(|e| ProviderError::ContractError(e.to_string()))
    }

    /// Read the metadata needed to build transfers into a [`TokenHandle`].
    pub async fn handle(&self) -> Result<TokenHandle, ProviderError> {
        let decimals = self.decimals().await?;
        Ok(TokenHandle::new(self.address, decimals))
    }
}

/// Resolved token contract: address plus the precision it declared.
///
/// Building calls from a handle is pure encoding; no RPC is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenHandle {
    address: Address,
    decimals: u8,
}

impl TokenHandle {
    pub fn new(address: Address, decimals: u8) -> Self {
        Self { address, decimals }
    }

    /// Contract address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Decimal precision declared by the contract.
    pub fn precision(&self) -> u8 {
        self.decimals
    }

    /// ABI-encode `transfer(to, amount)` for a human-readable amount.
    pub fn prepare_transfer_call(&self, to: Address, display_amount: &str) -> Result<Bytes, ProviderError> {
        let amount = parse_amount(display_amount, self.decimals)
            .map_err(|e| ProviderError::InvalidAmount(e.to_string()))?;

        let call = IERC20::transferCall { to, amount };
        Ok(Bytes::from(call.abi_encode()))
    }
}
