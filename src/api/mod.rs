// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ErrorBody,
    models::{
        QueueIdResult, SignMessageRequest, SignMessageResponse, TransactionStatusResponse,
        TransferRequestBody, TransferResponse,
    },
    state::AppState,
    storage::{QueueStatus, QueuedTransaction},
    transfer::{Extension, QueueId},
};

pub mod backend_wallet;
pub mod health;
pub mod transaction;

#[cfg(test)]
pub(crate) mod testing;

pub fn router(state: AppState) -> Router {
    let routes = Router::new()
        .route(
            "/backend-wallet/{chain}/transfer",
            post(backend_wallet::transfer),
        )
        .route(
            "/backend-wallet/sign-message",
            post(backend_wallet::sign_message),
        )
        .route(
            "/transaction/status/{queue_id}",
            get(transaction::transaction_status),
        )
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        .with_state(state);

    Router::new()
        .merge(routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        backend_wallet::transfer,
        backend_wallet::sign_message,
        transaction::transaction_status,
        health::health,
        health::liveness,
        health::readiness
    ),
    components(
        schemas(
            TransferRequestBody,
            TransferResponse,
            QueueIdResult,
            SignMessageRequest,
            SignMessageResponse,
            TransactionStatusResponse,
            QueuedTransaction,
            QueueStatus,
            QueueId,
            Extension,
            ErrorBody,
            health::ReadyResponse,
            health::HealthChecks,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Backend Wallet", description = "Transfers and message signing from backend wallets"),
        (name = "Transaction", description = "Queued transaction status"),
        (name = "Health", description = "Liveness and readiness probes")
    )
)]
struct ApiDoc;
