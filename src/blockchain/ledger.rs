// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! The ledger capability consumed by the wallet.

use async_trait::async_trait;

use super::actions::Action;
use super::client::LedgerClientError;
use super::envelope::Envelope;
use super::types::{BalancesResult, BuildResult, FinalizeResult, Network};

/// Inputs to the build step.
#[derive(Debug, Clone, Copy)]
pub struct BuildTransactionRequest<'a> {
    pub actions: &'a [Action],
    pub fee_payer: &'a str,
    pub message: Option<&'a str>,
    /// Forwarded to the gateway as a hint; never acted on locally.
    pub encrypt_message: bool,
}

/// Inputs to the finalize step.
#[derive(Debug, Clone, Copy)]
pub struct FinalizeTransactionRequest<'a> {
    pub blob: &'a str,
    pub signature_der: &'a str,
    pub public_key: &'a str,
    pub immediate_submit: bool,
}

/// Remote ledger operations.
///
/// Every operation returns the decoded envelope; an in-band error is a
/// successful call that yields [`Envelope::Failure`]. `Err` is reserved for
/// transport failures.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// The network this client is connected to.
    fn network(&self) -> Network;

    async fn get_balances(
        &self,
        address: &str,
    ) -> Result<Envelope<BalancesResult>, LedgerClientError>;

    async fn build_transaction(
        &self,
        request: BuildTransactionRequest<'_>,
    ) -> Result<Envelope<BuildResult>, LedgerClientError>;

    async fn finalize_transaction(
        &self,
        request: FinalizeTransactionRequest<'_>,
    ) -> Result<Envelope<FinalizeResult>, LedgerClientError>;
}
