// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration module for EVM chains.
//!
//! This module provides functionality for:
//! - Resolving chain aliases against the configured chain registry
//! - Querying native balances and ERC-20 token metadata
//! - Encoding ERC-20 transfer calls
//! - Holding backend wallet keys and signing messages

pub mod chain;
pub mod client;
pub mod contract_cache;
pub mod erc20;
pub mod gateway;
pub mod signing;
pub mod types;
pub mod units;

pub use chain::{ChainError, ChainRegistry};
pub use client::{EvmClient, ProviderError};
pub use contract_cache::{ContractCache, ContractKey};
pub use erc20::{IERC20::transferCall as Erc20TransferCall, TokenHandle};
pub use gateway::EvmGateway;
pub use signing::{KeyStore, KeyStoreError};
pub use types::*;
pub use units::{format_amount, parse_amount, parse_decimal, to_hex_word, AmountError, DecimalAmount};
