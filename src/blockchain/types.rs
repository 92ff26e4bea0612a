// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain types and constants.

/// An EIP-155 chain ID (e.g., 1 for Ethereum, 43114 for Avalanche).
pub type ChainId = u64;

/// Decimal precision of the native asset on every built-in EVM network.
pub const EVM_NATIVE_DECIMALS: u8 = 18;

/// Currency identifier reserved for the native asset (the zero address).
pub const NATIVE_TOKEN_ZERO: &str = "0x0000000000000000000000000000000000000000";

/// Conventional `0xEeee...` placeholder that also denotes the native asset.
pub const NATIVE_TOKEN_PLACEHOLDER: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// EVM network configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: String,
    /// Chain ID
    pub chain_id: ChainId,
    /// RPC endpoint URL
    pub rpc_url: String,
    /// Native asset symbol (e.g., "ETH", "AVAX")
    pub native_symbol: String,
    /// Decimal precision of the native asset
    pub native_decimals: u8,
    /// Lowercase aliases accepted in the `{chain}` path segment
    pub aliases: Vec<String>,
}

/// Static description of a network that ships with the service.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinNetwork {
    pub name: &'static str,
    pub chain_id: ChainId,
    pub rpc_url: &'static str,
    pub native_symbol: &'static str,
    pub aliases: &'static [&'static str],
}

impl From<&BuiltinNetwork> for NetworkConfig {
    fn from(network: &BuiltinNetwork) -> Self {
        Self {
            name: network.name.to_string(),
            chain_id: network.chain_id,
            rpc_url: network.rpc_url.to_string(),
            native_symbol: network.native_symbol.to_string(),
            native_decimals: EVM_NATIVE_DECIMALS,
            aliases: network.aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Ethereum Mainnet configuration.
pub const ETHEREUM_MAINNET: BuiltinNetwork = BuiltinNetwork {
    name: "Ethereum",
    chain_id: 1,
    rpc_url: "https://ethereum-rpc.publicnode.com",
    native_symbol: "ETH",
    aliases: &["ethereum", "eth", "mainnet"],
};

/// Ethereum Sepolia testnet configuration.
pub const ETHEREUM_SEPOLIA: BuiltinNetwork = BuiltinNetwork {
    name: "Sepolia",
    chain_id: 11_155_111,
    rpc_url: "https://ethereum-sepolia-rpc.publicnode.com",
    native_symbol: "ETH",
    aliases: &["sepolia"],
};

/// Polygon PoS configuration.
pub const POLYGON_MAINNET: BuiltinNetwork = BuiltinNetwork {
    name: "Polygon",
    chain_id: 137,
    rpc_url: "https://polygon-rpc.com",
    native_symbol: "POL",
    aliases: &["polygon", "matic"],
};

/// Base configuration.
pub const BASE_MAINNET: BuiltinNetwork = BuiltinNetwork {
    name: "Base",
    chain_id: 8453,
    rpc_url: "https://mainnet.base.org",
    native_symbol: "ETH",
    aliases: &["base"],
};

/// Avalanche C-Chain Mainnet configuration.
pub const AVAX_MAINNET: BuiltinNetwork = BuiltinNetwork {
    name: "Avalanche C-Chain",
    chain_id: 43114,
    rpc_url: "https://api.avax.network/ext/bc/C/rpc",
    native_symbol: "AVAX",
    aliases: &["avalanche", "avalanche-c-chain", "avax"],
};

/// Avalanche Fuji Testnet configuration.
pub const AVAX_FUJI: BuiltinNetwork = BuiltinNetwork {
    name: "Avalanche Fuji Testnet",
    chain_id: 43113,
    rpc_url: "https://api.avax-test.network/ext/bc/C/rpc",
    native_symbol: "AVAX",
    aliases: &["fuji", "avalanche-fuji"],
};

/// Every network the service knows about out of the box.
pub const BUILTIN_NETWORKS: &[BuiltinNetwork] = &[
    ETHEREUM_MAINNET,
    ETHEREUM_SEPOLIA,
    POLYGON_MAINNET,
    BASE_MAINNET,
    AVAX_MAINNET,
    AVAX_FUJI,
];
