// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Radix Wallet - Account balances and transaction submission
//!
//! This crate wraps a Radix ledger gateway behind a small wallet API:
//! aggregated token balances for one account, and a build, sign and
//! finalize pipeline that returns the ledger transaction identifier.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `blockchain` - Gateway JSON-RPC client, envelopes and signing
//! - `config` - Environment configuration
//! - `wallet` - Balance aggregation and transaction orchestration

pub mod api;
pub mod blockchain;
pub mod config;
pub mod error;
pub mod state;
pub mod wallet;

#[cfg(test)]
mod test_support;
