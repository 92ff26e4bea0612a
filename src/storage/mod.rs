// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Queue Storage
//!
//! Durable storage for submissions waiting on the broadcast worker.
//!
//! ## Storage Layout
//!
//! ```text
//! $DATA_DIR/
//!   queue.redb        # Queued transactions (redb)
//!   wallets/
//!     {name}.pem      # Backend wallet keys (see blockchain::signing)
//! ```

pub mod queue_db;

pub use queue_db::{QueueDatabase, QueueDbError, QueueStatus, QueuedTransaction};
