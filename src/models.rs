// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies for the REST API. All types derive
//! `ToSchema` for the OpenAPI document; field names are camelCase on the
//! wire.
//!
//! ## Model Categories
//!
//! - **Transfers**: queueing native and ERC-20 transfers
//! - **Signing**: EIP-191 message signatures from backend wallets
//! - **Status**: queue entry lookup

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::blockchain::NATIVE_TOKEN_ZERO;
use crate::storage::QueuedTransaction;

/// Header naming the backend wallet that acts on a request.
pub const BACKEND_WALLET_HEADER: &str = "x-backend-wallet-address";

// =============================================================================
// Transfer Models
// =============================================================================

fn native_currency() -> String {
    NATIVE_TOKEN_ZERO.to_string()
}

/// Body of `POST /backend-wallet/{chain}/transfer`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequestBody {
    /// Recipient address.
    #[schema(example = "0x3ecdbf3b911d0e9052b64850693888b008e83373")]
    pub to: String,
    /// ERC-20 contract, or a native-token sentinel. Defaults to the zero address.
    #[serde(default = "native_currency")]
    #[schema(example = "0x0000000000000000000000000000000000000000")]
    pub currency_address: String,
    /// Human-readable decimal amount, e.g. `"0.25"`.
    #[schema(example = "0.00001")]
    pub amount: String,
}

/// Query string of the transfer endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct TransferQuery {
    /// Queue the token transfer for simulation only.
    #[serde(default)]
    pub simulate_tx: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QueueIdResult {
    /// Identifier of the queued transaction.
    pub queue_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TransferResponse {
    pub result: QueueIdResult,
}

// =============================================================================
// Signing Models
// =============================================================================

/// Body of `POST /backend-wallet/sign-message`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignMessageRequest {
    /// Text to sign, or 0x-prefixed hex bytes when `isBytes` is set.
    pub message: String,
    /// Interpret `message` as hex-encoded bytes.
    #[serde(default)]
    pub is_bytes: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SignMessageResponse {
    /// 65-byte signature, 0x-prefixed hex.
    pub result: String,
}

// =============================================================================
// Status Models
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct TransactionStatusResponse {
    pub result: QueuedTransaction,
}
