// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Backend wallet API endpoints.
//!
//! Every request names the acting wallet in the `x-backend-wallet-address`
//! header. Transfers are validated and queued; nothing is broadcast here.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    Json,
};

use crate::{
    error::{ApiError, ErrorBody},
    models::{
        QueueIdResult, SignMessageRequest, SignMessageResponse, TransferQuery,
        TransferRequestBody, TransferResponse, BACKEND_WALLET_HEADER,
    },
    state::AppState,
    transfer::TransferRequest,
};

/// Read the acting wallet from the request headers.
fn backend_wallet(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(BACKEND_WALLET_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            ApiError::bad_request(format!("Missing {BACKEND_WALLET_HEADER} header"))
                .with_code("MISSING_WALLET_HEADER")
        })
}

/// Queue a native or ERC-20 transfer from a backend wallet.
///
/// The amount is a human-readable decimal. A zero-address (or `0xEeee…`)
/// `currencyAddress` selects the chain's native asset; anything else is
/// treated as an ERC-20 contract.
#[utoipa::path(
    post,
    path = "/backend-wallet/{chain}/transfer",
    tag = "Backend Wallet",
    params(
        ("chain" = String, Path, description = "Chain alias, numeric id or eip155:<id>"),
        ("x-backend-wallet-address" = String, Header, description = "Sending backend wallet"),
        TransferQuery
    ),
    request_body = TransferRequestBody,
    responses(
        (status = 200, description = "Transfer queued", body = TransferResponse),
        (status = 400, description = "Invalid chain, amount, address or signer", body = ErrorBody),
        (status = 422, description = "Unresolvable currency or insufficient balance", body = ErrorBody),
        (status = 503, description = "Balance lookup failed", body = ErrorBody),
        (status = 500, description = "Queue rejected the transfer", body = ErrorBody)
    )
)]
pub async fn transfer(
    State(state): State<AppState>,
    Path(chain): Path<String>,
    Query(query): Query<TransferQuery>,
    headers: HeaderMap,
    Json(body): Json<TransferRequestBody>,
) -> Result<Json<TransferResponse>, ApiError> {
    let request = TransferRequest {
        chain,
        wallet_address: backend_wallet(&headers)?,
        to: body.to,
        currency_address: body.currency_address,
        amount: body.amount,
        simulate: query.simulate_tx,
    };

    let queue_id = state.engine.decide(&request).await.map_err(|e| {
        tracing::warn!(
            chain = %request.chain,
            wallet = %request.wallet_address,
            code = e.code(),
            error = %e,
            "Transfer rejected"
        );
        ApiError::from(e)
    })?;

    Ok(Json(TransferResponse {
        result: QueueIdResult {
            queue_id: queue_id.into(),
        },
    }))
}

/// Sign a message with a backend wallet (EIP-191 personal-sign).
#[utoipa::path(
    post,
    path = "/backend-wallet/sign-message",
    tag = "Backend Wallet",
    params(
        ("x-backend-wallet-address" = String, Header, description = "Signing backend wallet")
    ),
    request_body = SignMessageRequest,
    responses(
        (status = 200, description = "Message signed", body = SignMessageResponse),
        (status = 400, description = "Missing header or malformed hex message", body = ErrorBody),
        (status = 404, description = "Unknown backend wallet", body = ErrorBody)
    )
)]
pub async fn sign_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<SignMessageRequest>,
) -> Result<Json<SignMessageResponse>, ApiError> {
    let wallet = backend_wallet(&headers)?;

    let message = if request.is_bytes {
        decode_hex_message(&request.message)?
    } else {
        request.message.into_bytes()
    };

    let signature = state.keys.sign_message(&wallet, &message)?;

    Ok(Json(SignMessageResponse {
        result: alloy::hex::encode_prefixed(signature.as_bytes()),
    }))
}

fn decode_hex_message(message: &str) -> Result<Vec<u8>, ApiError> {
    let invalid = |reason: String| {
        ApiError::bad_request(format!("Invalid hex message: {reason}")).with_code("INVALID_MESSAGE")
    };
    let hex = message
        .strip_prefix("0x")
        .ok_or_else(|| invalid("missing 0x prefix".to_string()))?;
    alloy::hex::decode(hex).map_err(|e| invalid(e.to_string()))
}
