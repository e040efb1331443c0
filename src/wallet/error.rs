// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet errors.

use std::fmt;

use crate::blockchain::{LedgerClientError, RemoteErrorPayload, SignerError};

/// The remote step a wallet error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Balances,
    Build,
    Finalize,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Balances => f.write_str("balances"),
            Phase::Build => f.write_str("build"),
            Phase::Finalize => f.write_str("finalize"),
        }
    }
}

/// Errors surfaced by [`Wallet`](super::Wallet) operations.
///
/// Nothing is retried; a caller that retries a submission must start again
/// from the build step.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The gateway answered with an `error` envelope.
    #[error("Ledger rejected the {phase} request: {payload}")]
    Remote {
        phase: Phase,
        payload: RemoteErrorPayload,
    },

    /// A success envelope lacked a field the wallet needs.
    #[error("Malformed {phase} response: {reason}")]
    MalformedResponse { phase: Phase, reason: String },

    #[error(transparent)]
    Ledger(#[from] LedgerClientError),

    #[error(transparent)]
    Signer(#[from] SignerError),
}

impl WalletError {
    pub(crate) fn malformed(phase: Phase, reason: impl Into<String>) -> Self {
        WalletError::MalformedResponse {
            phase,
            reason: reason.into(),
        }
    }

    /// The phase for remote and malformed-response errors.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            WalletError::Remote { phase, .. } | WalletError::MalformedResponse { phase, .. } => {
                Some(*phase)
            }
            WalletError::Ledger(_) | WalletError::Signer(_) => None,
        }
    }
}
