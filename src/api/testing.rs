// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Router fixtures for handler tests.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::signers::local::PrivateKeySigner;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tempfile::TempDir;
use tower::ServiceExt;

use crate::blockchain::{ChainRegistry, KeyStore};
use crate::storage::QueueDatabase;
use crate::transfer::testing::{StaticBalances, StaticTokens, TOKEN_6};
use crate::transfer::TransferEngine;
use crate::{api::router, state::AppState};

pub const ETH: u64 = 1_000_000_000_000_000_000;

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub wallet: Address,
    _dir: TempDir,
}

/// Router over a real key store and queue database; chain reads are stubbed
/// with a 2 ETH balance and one 6-decimal token.
pub fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let queue = QueueDatabase::open(&dir.path().join("queue.redb")).unwrap();

    let mut keys = KeyStore::new();
    let wallet = keys.insert(PrivateKeySigner::from_slice(&[0x11; 32]).unwrap());
    let keys = Arc::new(keys);

    let chains = Arc::new(ChainRegistry::builtin());
    let engine = TransferEngine::new(
        chains.clone(),
        keys.clone(),
        Arc::new(StaticBalances::new(U256::from(2 * ETH))),
        Arc::new(StaticTokens::with_token(TOKEN_6, 6)),
        Arc::new(queue.clone()),
    );

    let state = AppState::new(chains, keys, queue, engine);
    TestApp {
        app: router(state.clone()),
        state,
        wallet,
        _dir: dir,
    }
}

/// Send one request and decode the JSON response body.
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn post_json(uri: &str, wallet: Option<Address>, body: serde_json::Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(wallet) = wallet {
        builder = builder.header(crate::models::BACKEND_WALLET_HEADER, wallet.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
