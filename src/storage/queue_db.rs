// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Embedded transaction queue backed by redb (pure Rust, ACID).
//!
//! ## Table Layout
//!
//! - `queued_transactions`: queue_id → serialized QueuedTransaction
//!
//! A record is committed before `submit` returns; the broadcast worker
//! reads the same database and advances `status`.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::transfer::{Extension, QueueId, SubmissionError, SubmissionRecord, TransactionQueue};

// =============================================================================
// Table Definitions
// =============================================================================

/// Primary table: queue_id → serialized QueuedTransaction (JSON bytes).
const QUEUED_TRANSACTIONS: TableDefinition<&str, &[u8]> =
    TableDefinition::new("queued_transactions");

// =============================================================================
// Error Type
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum QueueDbError {
    #[error("redb database error: {0}")]
    RedbDatabase(#[from] redb::DatabaseError),

    #[error("redb transaction error: {0}")]
    RedbTransaction(#[from] redb::TransactionError),

    #[error("redb table error: {0}")]
    RedbTable(#[from] redb::TableError),

    #[error("redb storage error: {0}")]
    RedbStorage(#[from] redb::StorageError),

    #[error("redb commit error: {0}")]
    RedbCommit(#[from] redb::CommitError),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

pub type QueueDbResult<T> = Result<T, QueueDbError>;

// =============================================================================
// Records
// =============================================================================

/// Lifecycle of a queue entry. Only `Queued` is written by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QueueStatus {
    /// Accepted, waiting for the worker
    Queued,
    /// Broadcast by the worker
    Sent,
    /// Included in a block
    Mined,
    /// Worker gave up on it
    Errored,
}

/// Stored queue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueuedTransaction {
    pub queue_id: QueueId,
    pub status: QueueStatus,
    pub extension: Extension,
    #[schema(value_type = Object)]
    pub record: SubmissionRecord,
    pub queued_at: DateTime<Utc>,
}

impl QueuedTransaction {
    /// Wrap a record in a fresh `queued` entry with a new id.
    pub fn new(record: SubmissionRecord) -> Self {
        Self {
            queue_id: QueueId::new(Uuid::new_v4().to_string()),
            status: QueueStatus::Queued,
            extension: record.extension(),
            record,
            queued_at: Utc::now(),
        }
    }
}

// =============================================================================
// QueueDatabase
// =============================================================================

/// Durable queue of pending submissions.
#[derive(Clone)]
pub struct QueueDatabase {
    db: Arc<Database>,
}

impl QueueDatabase {
    /// Open (or create) the database at the given path.
    pub fn open(path: &Path) -> QueueDbResult<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let db = Database::create(path)?;

        // Pre-create the table so later read transactions don't fail
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(QUEUED_TRANSACTIONS)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Insert an entry and commit.
    pub fn insert(&self, entry: &QueuedTransaction) -> QueueDbResult<()> {
        let json = serde_json::to_vec(entry)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(QUEUED_TRANSACTIONS)?;
            table.insert(entry.queue_id.as_str(), json.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Look up a single entry by queue id.
    pub fn get(&self, queue_id: &str) -> QueueDbResult<Option<QueuedTransaction>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(QUEUED_TRANSACTIONS)?;
        match table.get(queue_id)? {
            Some(value) => Ok(Some(serde_json::from_slice(value.value())?)),
            None => Ok(None),
        }
    }

    /// [`get`](Self::get) on the blocking pool, for use from request handlers.
    pub async fn lookup(&self, queue_id: String) -> QueueDbResult<Option<QueuedTransaction>> {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.get(&queue_id)).await?
    }

    /// Whether the database answers a read transaction.
    pub fn is_healthy(&self) -> bool {
        match self.db.begin_read() {
            Ok(txn) => txn.open_table(QUEUED_TRANSACTIONS).is_ok(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl TransactionQueue for QueueDatabase {
    async fn submit(&self, record: SubmissionRecord) -> Result<QueueId, SubmissionError> {
        let entry = QueuedTransaction::new(record);
        let queue_id = entry.queue_id.clone();

        // redb commits fsync; keep them off the async workers.
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.insert(&entry))
            .await
            .map_err(QueueDbError::from)
            .and_then(|inserted| inserted)
            .map_err(|e| SubmissionError(e.to_string()))?;

        Ok(queue_id)
    }
}
