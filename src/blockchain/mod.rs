// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Blockchain integration module for the Radix ledger.
//!
//! This module provides:
//! - The `LedgerClient` and `Signer` capabilities the wallet is built on
//! - Envelope decoding for in-band gateway errors
//! - A JSON-RPC gateway client and a local secp256k1 signer

pub mod actions;
pub mod client;
pub mod envelope;
pub mod ledger;
pub mod signing;
pub mod types;

pub use actions::Action;
pub use client::{GatewayClient, GatewayConfig, LedgerClientError};
pub use envelope::{Envelope, EnvelopeError, RemoteErrorPayload};
pub use ledger::{BuildTransactionRequest, FinalizeTransactionRequest, LedgerClient};
pub use signing::{LocalSigner, Signer, SignerError};
pub use types::*;
