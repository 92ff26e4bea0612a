// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Relational Backend Wallet - Transfer Queueing Service
//!
//! This crate accepts transfer requests for service-controlled wallets on
//! EVM chains, validates them against live chain state, and queues exactly
//! one submission per request for an external broadcast worker.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - Chain registry, RPC gateway, ERC-20 encoding, key store
//! - `transfer` - Amount normalization and the transfer decision engine
//! - `storage` - Durable transaction queue (redb)

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod storage;
pub mod transfer;
