// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::blockchain::{ChainRegistry, KeyStore};
use crate::storage::QueueDatabase;
use crate::transfer::TransferEngine;

#[derive(Clone)]
pub struct AppState {
    pub chains: Arc<ChainRegistry>,
    pub keys: Arc<KeyStore>,
    pub queue: QueueDatabase,
    pub engine: Arc<TransferEngine>,
}

impl AppState {
    pub fn new(
        chains: Arc<ChainRegistry>,
        keys: Arc<KeyStore>,
        queue: QueueDatabase,
        engine: TransferEngine,
    ) -> Self {
        Self {
            chains,
            keys,
            queue,
            engine: Arc::new(engine),
        }
    }
}
