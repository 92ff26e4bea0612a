// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Backend wallet key store.
//!
//! Backend wallet keys are stored as PEM files (SEC1 or PKCS#8) in a single
//! directory. Each key is loaded once at startup and indexed by the address
//! it controls; the key material never leaves this module.

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use alloy::{
    primitives::{Address, Signature},
    signers::{local::PrivateKeySigner, SignerSync},
};
use async_trait::async_trait;
use k256::SecretKey;

use super::types::ChainId;
use crate::transfer::SignerResolver;

/// Errors raised by the key store.
#[derive(Debug, thiserror::Error)]
pub enum KeyStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("No backend wallet with address {0}")]
    UnknownWallet(String),

    #[error("Signing failed: {0}")]
    Signing(String),
}

/// Parse a private key from PEM format to hex string.
///
/// # Arguments
/// * `pem_bytes` - The PEM-encoded private key bytes
///
/// # Returns
/// * `Ok(String)` - Hex-encoded private key (64 characters, no 0x prefix)
/// * `Err(KeyStoreError)` - If PEM parsing fails
pub fn pem_to_hex(pem_bytes: &[u8]) -> Result<String, KeyStoreError> {
    let pem_str = std::str::from_utf8(pem_bytes)
        .map_err(|e| KeyStoreError::InvalidPrivateKey(format!("Invalid UTF-8: {}", e)))?;

    let pem = pem::parse(pem_str)
        .map_err(|e| KeyStoreError::InvalidPrivateKey(format!("Invalid PEM: {}", e)))?;

    let secret_key = SecretKey::from_sec1_der(pem.contents())
        .or_else(|_| parse_pkcs8_to_secret_key(pem.contents()))
        .map_err(|e| KeyStoreError::InvalidPrivateKey(format!("Invalid key format: {}", e)))?;

    Ok(alloy::hex::encode(secret_key.to_bytes()))
}

/// Parse PKCS#8 DER to extract the secret key.
fn parse_pkcs8_to_secret_key(der: &[u8]) -> Result<SecretKey, String> {
    use k256::pkcs8::DecodePrivateKey;
    SecretKey::from_pkcs8_der(der).map_err(|e| e.to_string())
}

/// Create a signer from PEM-encoded private key.
pub fn signer_from_pem(pem_bytes: &[u8]) -> Result<PrivateKeySigner, KeyStoreError> {
    let hex_key = pem_to_hex(pem_bytes)?;
    let key_bytes = alloy::hex::decode(hex_key)
        .map_err(|e| KeyStoreError::InvalidPrivateKey(e.to_string()))?;

    PrivateKeySigner::from_slice(&key_bytes)
        .map_err(|e| KeyStoreError::InvalidPrivateKey(e.to_string()))
}

/// Backend wallet signers indexed by address.
#[derive(Default)]
pub struct KeyStore {
    signers: HashMap<Address, PrivateKeySigner>,
}

impl KeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `*.pem` file in `dir`.
    ///
    /// A missing directory yields an empty store; an unreadable key fails
    /// the whole load.
    pub fn load_dir(dir: &Path) -> Result<Self, KeyStoreError> {
        let mut store = Self::new();
        if !dir.exists() {
            tracing::warn!(dir = %dir.display(), "Wallet key directory does not exist");
            return Ok(store);
        }

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("pem") {
                continue;
            }
            let signer = signer_from_pem(&std::fs::read(&path)?)?;
            tracing::info!(address = %signer.address(), "Loaded backend wallet key");
            store.insert(signer);
        }

        Ok(store)
    }

    /// Register a signer under the address it controls.
    pub fn insert(&mut self, signer: PrivateKeySigner) -> Address {
        let address = signer.address();
        self.signers.insert(address, signer);
        address
    }

    pub fn len(&self) -> usize {
        self.signers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }

    fn signer(&self, wallet_address: &str) -> Result<&PrivateKeySigner, KeyStoreError> {
        Address::from_str(wallet_address)
            .ok()
            .and_then(|address| self.signers.get(&address))
            .ok_or_else(|| KeyStoreError::UnknownWallet(wallet_address.to_string()))
    }

    /// Sign `message` with EIP-191 personal-sign.
    pub fn sign_message(&self, wallet_address: &str, message: &[u8]) -> Result<Signature, KeyStoreError> {
        self.signer(wallet_address)?
            .sign_message_sync(message)
            .map_err(|e| KeyStoreError::Signing(e.to_string()))
    }
}

#[async_trait]
impl SignerResolver for KeyStore {
    async fn signer_address(&self, _chain_id: ChainId, wallet_address: &str) -> Option<Address> {
        // Local keys sign on every chain.
        self.signer(wallet_address).ok().map(|signer| signer.address())
    }
}
