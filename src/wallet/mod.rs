// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wallet
//!
//! Binds a [`LedgerClient`] and a [`Signer`] to one account index and exposes
//! the two things a caller wants from a wallet: balances and transaction
//! submission.
//!
//! ## Submission lifecycle
//!
//! 1. **Build**: the gateway assembles an unsigned blob and the digest to sign.
//! 2. **Sign**: the signer signs that digest verbatim; it is never recomputed.
//! 3. **Finalize**: the signed blob is submitted immediately.
//!
//! Every remote answer goes through [`expect_success`] before any field is
//! read. The wallet holds no mutable state, so one instance can serve
//! concurrent callers.

use std::sync::Arc;

use tracing::warn;

use crate::blockchain::{Envelope, LedgerClient, Signer};

mod balances;
mod error;
mod transactions;

pub use error::{Phase, WalletError};
pub use transactions::{extract_tx_id, TxIdSource};

/// A wallet for a single account index.
#[derive(Clone)]
pub struct Wallet {
    ledger: Arc<dyn LedgerClient>,
    signer: Arc<dyn Signer>,
    account_index: u32,
}

impl Wallet {
    pub fn new(ledger: Arc<dyn LedgerClient>, signer: Arc<dyn Signer>, account_index: u32) -> Self {
        Self {
            ledger,
            signer,
            account_index,
        }
    }

    pub fn ledger(&self) -> &dyn LedgerClient {
        self.ledger.as_ref()
    }

    pub fn account_index(&self) -> u32 {
        self.account_index
    }

    /// The account address on the ledger client's network.
    ///
    /// Derived on every call; nothing is cached.
    pub fn address(&self) -> Result<String, WalletError> {
        let mainnet = self.ledger.network().is_mainnet();
        Ok(self.signer.address(self.account_index, mainnet)?)
    }

    pub fn public_key(&self) -> Result<String, WalletError> {
        Ok(self.signer.public_key(self.account_index)?)
    }
}

/// Unwrap a success envelope, tagging anything else with `phase`.
///
/// An error envelope becomes [`WalletError::Remote`]; a result of the wrong
/// shape becomes [`WalletError::MalformedResponse`].
pub(crate) fn expect_success<T>(envelope: Envelope<T>, phase: Phase) -> Result<T, WalletError> {
    match envelope {
        Envelope::Success(result) => Ok(result),
        Envelope::Failure(payload) => {
            warn!(
                phase = %phase,
                code = ?payload.code(),
                error = %payload,
                "Ledger returned an error"
            );
            Err(WalletError::Remote { phase, payload })
        }
        Envelope::Malformed(reason) => {
            warn!(phase = %phase, reason = %reason, "Ledger returned a malformed result");
            Err(WalletError::MalformedResponse { phase, reason })
        }
    }
}
