// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::blockchain::KeyStoreError;
use crate::storage::QueueDbError;
use crate::transfer::TransferError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: Option<&'static str>,
    pub message: String,
}

/// JSON body returned for every failed request.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: &'static str) -> Self {
        self.code = Some(code);
        self
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}

impl From<TransferError> for ApiError {
    fn from(err: TransferError) -> Self {
        let code = err.code();
        let status = match &err {
            TransferError::ChainResolution(_)
            | TransferError::InvalidAmount { .. }
            | TransferError::InvalidAddress(_)
            | TransferError::MissingSignerAddress { .. } => StatusCode::BAD_REQUEST,
            TransferError::CurrencyResolution { .. }
            | TransferError::InsufficientBalance { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            TransferError::BalanceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            TransferError::Submission(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string()).with_code(code)
    }
}

impl From<KeyStoreError> for ApiError {
    fn from(err: KeyStoreError) -> Self {
        if let KeyStoreError::UnknownWallet(wallet) = err {
            return Self::not_found(format!("No backend wallet with address {wallet}"))
                .with_code("WALLET_NOT_FOUND");
        }
        tracing::error!(error = %err, "Message signing failed");
        Self::internal("Failed to sign message").with_code("SIGNING_FAILED")
    }
}

impl From<QueueDbError> for ApiError {
    fn from(err: QueueDbError) -> Self {
        tracing::error!(error = %err, "Queue database error");
        Self::internal("Queue database error").with_code("STORAGE_ERROR")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: self.message,
            code: self.code,
        });
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::AmountError;
    use alloy::primitives::U256;
    use axum::body::to_bytes;

    #[test]
    fn constructors_set_status_and_message() {
        let nf = ApiError::not_found("missing");
        assert_eq!(nf.status, StatusCode::NOT_FOUND);
        assert_eq!(nf.message, "missing");
        assert_eq!(nf.code, None);

        let bad = ApiError::bad_request("bad");
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.message, "bad");

        let unp = ApiError::unprocessable("oops");
        assert_eq!(unp.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(unp.message, "oops");

        let down = ApiError::service_unavailable("rpc down");
        assert_eq!(down.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn into_response_returns_json_body() {
        let response = ApiError::bad_request("bad data").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"bad data"}"#);
    }

    #[tokio::test]
    async fn coded_errors_include_code() {
        let response = ApiError::bad_request("nope")
            .with_code("INVALID_AMOUNT")
            .into_response();

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body_bytes.to_vec()).unwrap();
        assert_eq!(body, r#"{"error":"nope","code":"INVALID_AMOUNT"}"#);
    }

    #[test]
    fn transfer_errors_map_to_statuses() {
        let cases = [
            (
                TransferError::ChainResolution("nope".into()),
                StatusCode::BAD_REQUEST,
                "INVALID_CHAIN",
            ),
            (
                TransferError::InvalidAmount {
                    amount: "abc".into(),
                    reason: AmountError::Malformed,
                },
                StatusCode::BAD_REQUEST,
                "INVALID_AMOUNT",
            ),
            (
                TransferError::InvalidAddress("0x12".into()),
                StatusCode::BAD_REQUEST,
                "INVALID_ADDRESS",
            ),
            (
                TransferError::CurrencyResolution {
                    currency: "0xabc".into(),
                    reason: "reverted".into(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
                "CURRENCY_RESOLUTION_FAILED",
            ),
            (
                TransferError::MissingSignerAddress {
                    wallet: "0x11".into(),
                    chain_id: 1,
                },
                StatusCode::BAD_REQUEST,
                "MISSING_SIGNER",
            ),
            (
                TransferError::InsufficientBalance {
                    balance: U256::from(1u8),
                    required: U256::from(2u8),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_BALANCE",
            ),
            (
                TransferError::BalanceUnavailable("timeout".into()),
                StatusCode::SERVICE_UNAVAILABLE,
                "BALANCE_UNAVAILABLE",
            ),
            (
                TransferError::Submission("disk full".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "SUBMISSION_FAILED",
            ),
        ];

        for (err, status, code) in cases {
            let api: ApiError = err.into();
            assert_eq!(api.status, status);
            assert_eq!(api.code, Some(code));
        }
    }

    #[test]
    fn unknown_wallet_is_not_found() {
        let api: ApiError = KeyStoreError::UnknownWallet("0xabc".into()).into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.code, Some("WALLET_NOT_FOUND"));
    }
}
