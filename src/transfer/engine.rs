// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer decision engine.
//!
//! Turns a transfer request into exactly one queue entry:
//!
//! ```text
//! resolve chain → normalize amount (classifies the currency)
//!   native: signer → balance check → RawValueTransfer   (extension "none")
//!   token:  contract from normalization → display amount → encoded call
//!                                  → ContractCallTransfer (extension "erc20")
//! → submit → queue id
//! ```
//!
//! Every step before `submit` is side-effect free, so a failure anywhere
//! leaves nothing behind. Nothing is retried or cached here.

use std::str::FromStr;
use std::sync::Arc;

use alloy::primitives::Address;

use super::affordability::check_affordable;
use super::error::TransferError;
use super::normalize::{normalize, Denomination, NormalizeContext, NormalizedAmount};
use super::providers::{BalanceProvider, SignerResolver, TokenResourceProvider, TransactionQueue};
use super::submission::{QueueId, SubmissionRecord};
use crate::blockchain::{to_hex_word, ChainRegistry, NetworkConfig, TokenHandle};

/// A transfer as received from the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Chain alias, numeric id or CAIP-2 id
    pub chain: String,
    /// Backend wallet sending the funds
    pub wallet_address: String,
    /// Recipient
    pub to: String,
    /// Token contract, or a native sentinel
    pub currency_address: String,
    /// Human-readable decimal amount
    pub amount: String,
    /// Ask the worker to simulate instead of broadcasting (token path)
    pub simulate: bool,
}

pub struct TransferEngine {
    chains: Arc<ChainRegistry>,
    signers: Arc<dyn SignerResolver>,
    balances: Arc<dyn BalanceProvider>,
    tokens: Arc<dyn TokenResourceProvider>,
    queue: Arc<dyn TransactionQueue>,
}

impl TransferEngine {
    pub fn new(
        chains: Arc<ChainRegistry>,
        signers: Arc<dyn SignerResolver>,
        balances: Arc<dyn BalanceProvider>,
        tokens: Arc<dyn TokenResourceProvider>,
        queue: Arc<dyn TransactionQueue>,
    ) -> Self {
        Self {
            chains,
            signers,
            balances,
            tokens,
            queue,
        }
    }

    /// Validate `request` and queue it. Returns the queue id.
    pub async fn decide(&self, request: &TransferRequest) -> Result<QueueId, TransferError> {
        let network = self
            .chains
            .resolve(&request.chain)
            .map_err(|_| TransferError::ChainResolution(request.chain.clone()))?;

        let ctx = NormalizeContext {
            network,
            tokens: self.tokens.as_ref(),
            wallet_address: &request.wallet_address,
        };
        let amount = normalize(&ctx, &request.amount, &request.currency_address).await?;

        let record = match amount.denomination() {
            Denomination::Native => self.native_transfer(network, request, &amount).await?,
            Denomination::Token(token) => token_transfer(network, request, &amount, token)?,
        };

        let extension = record.extension();
        let queue_id = self
            .queue
            .submit(record)
            .await
            .map_err(|e| TransferError::Submission(e.to_string()))?;

        tracing::info!(
            chain_id = network.chain_id,
            wallet = %request.wallet_address,
            %extension,
            queue_id = %queue_id,
            "Transfer queued"
        );

        Ok(queue_id)
    }

    async fn native_transfer(
        &self,
        network: &NetworkConfig,
        request: &TransferRequest,
        amount: &NormalizedAmount,
    ) -> Result<SubmissionRecord, TransferError> {
        let from = self
            .signers
            .signer_address(network.chain_id, &request.wallet_address)
            .await
            .ok_or_else(|| TransferError::MissingSignerAddress {
                wallet: request.wallet_address.clone(),
                chain_id: network.chain_id,
            })?;

        check_affordable(self.balances.as_ref(), network.chain_id, from, amount).await?;

        let to = parse_address(&request.to, "to")?;

        Ok(SubmissionRecord::RawValueTransfer {
            chain_id: network.chain_id,
            from_address: from.to_checksum(None),
            to_address: to.to_checksum(None),
            value: to_hex_word(amount.value()),
            data: "0x".to_string(),
        })
    }
}

/// Build the ERC-20 call for a token the normalizer already resolved.
fn token_transfer(
    network: &NetworkConfig,
    request: &TransferRequest,
    amount: &NormalizedAmount,
    token: TokenHandle,
) -> Result<SubmissionRecord, TransferError> {
    let from = parse_address(&request.wallet_address, "wallet")?;
    let to = parse_address(&request.to, "to")?;

    // The call preparer takes a display amount; it must come back out at
    // exactly the precision it went in with.
    let display = amount.to_display();
    let encoded_call = token
        .prepare_transfer_call(to, &display)
        .map_err(|e| TransferError::CurrencyResolution {
            currency: request.currency_address.clone(),
            reason: e.to_string(),
        })?;

    Ok(SubmissionRecord::ContractCallTransfer {
        chain_id: network.chain_id,
        from_address: from.to_checksum(None),
        contract_address: token.address().to_checksum(None),
        encoded_call: alloy::hex::encode_prefixed(&encoded_call),
        simulate_only: request.simulate,
    })
}

fn parse_address(value: &str, field: &str) -> Result<Address, TransferError> {
    Address::from_str(value.trim())
        .map_err(|e| TransferError::InvalidAddress(format!("Invalid {field} address `{value}`: {e}")))
}
