// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Queue status lookup.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{ApiError, ErrorBody},
    models::TransactionStatusResponse,
    state::AppState,
};

/// Get a queued transaction by its queue id.
#[utoipa::path(
    get,
    path = "/transaction/status/{queue_id}",
    tag = "Transaction",
    params(
        ("queue_id" = String, Path, description = "Queue id returned by the transfer endpoint")
    ),
    responses(
        (status = 200, description = "Queue entry", body = TransactionStatusResponse),
        (status = 404, description = "Unknown queue id", body = ErrorBody)
    )
)]
pub async fn transaction_status(
    State(state): State<AppState>,
    Path(queue_id): Path<String>,
) -> Result<Json<TransactionStatusResponse>, ApiError> {
    let entry = state.queue.lookup(queue_id.clone()).await?.ok_or_else(|| {
        ApiError::not_found(format!("Queue id {queue_id} not found")).with_code("QUEUE_ID_NOT_FOUND")
    })?;

    Ok(Json(TransactionStatusResponse { result: entry }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::api::testing::{get, post_json, send, test_app};

    #[tokio::test]
    async fn returns_queued_entry() {
        let t = test_app();
        let (_, queued) = send(
            &t.app,
            post_json(
                "/backend-wallet/avalanche/transfer",
                Some(t.wallet),
                json!({ "to": "0x2222222222222222222222222222222222222222", "amount": "0.25" }),
            ),
        )
        .await;
        let queue_id = queued["result"]["queueId"].as_str().unwrap();

        let (status, body) = send(&t.app, get(&format!("/transaction/status/{queue_id}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["queueId"], queue_id);
        assert_eq!(body["result"]["status"], "queued");
        assert_eq!(body["result"]["extension"], "none");
        assert_eq!(body["result"]["record"]["chainId"], 43114);
    }

    #[tokio::test]
    async fn unknown_queue_id_is_not_found() {
        let t = test_app();
        let (status, body) = send(&t.app, get("/transaction/status/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "QUEUE_ID_NOT_FOUND");
    }
}
