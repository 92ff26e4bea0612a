// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfer request normalization and submission decisions.
//!
//! This module provides:
//! - Currency classification (native asset vs. token contract)
//! - Exact conversion of decimal amounts to base units
//! - The native-path affordability check
//! - The decision engine that builds and queues one submission per request

pub mod affordability;
pub mod currency;
pub mod engine;
pub mod error;
pub mod normalize;
pub mod providers;
pub mod submission;

#[cfg(test)]
pub(crate) mod testing;

pub use currency::is_native;
pub use engine::{TransferEngine, TransferRequest};
pub use error::TransferError;
pub use normalize::{Denomination, NormalizedAmount};
pub use providers::{
    BalanceProvider, SignerResolver, SubmissionError, TokenResourceProvider, TransactionQueue,
};
pub use submission::{Extension, QueueId, SubmissionRecord};
