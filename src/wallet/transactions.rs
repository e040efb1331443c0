// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Build, sign and finalize orchestration.

use tracing::{debug, info};

use super::{expect_success, Phase, Wallet, WalletError};
use crate::blockchain::{
    Action, BuildResult, BuildTransactionRequest, FinalizeResult, FinalizeTransactionRequest,
};

/// Where in a finalize result the transaction identifier was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxIdSource {
    /// `result.txID`
    TopLevel,
    /// `result.transaction.txID`
    NestedTransaction,
}

type TxIdStrategy = fn(&FinalizeResult) -> Option<&str>;

/// Tried in order; the first strategy yielding an identifier wins.
const TX_ID_STRATEGIES: [(TxIdSource, TxIdStrategy); 2] = [
    (TxIdSource::TopLevel, top_level_tx_id),
    (TxIdSource::NestedTransaction, nested_tx_id),
];

fn top_level_tx_id(result: &FinalizeResult) -> Option<&str> {
    result.tx_id.as_deref().filter(|id| !id.is_empty())
}

fn nested_tx_id(result: &FinalizeResult) -> Option<&str> {
    result
        .transaction
        .as_ref()?
        .tx_id
        .as_deref()
        .filter(|id| !id.is_empty())
}

/// Find the transaction identifier in either known finalize shape.
pub fn extract_tx_id(result: &FinalizeResult) -> Option<(TxIdSource, &str)> {
    TX_ID_STRATEGIES
        .iter()
        .find_map(|(source, strategy)| strategy(result).map(|tx_id| (*source, tx_id)))
}

/// Pull the blob and the digest to sign out of a build result.
fn unsigned_parts(result: BuildResult) -> Result<(String, String), WalletError> {
    if let Some(fee) = &result.fee {
        debug!(fee = %fee, "Gateway quoted transaction fee");
    }

    let transaction = result
        .transaction
        .ok_or_else(|| WalletError::malformed(Phase::Build, "missing `transaction`"))?;
    let blob = transaction
        .blob
        .ok_or_else(|| WalletError::malformed(Phase::Build, "missing `transaction.blob`"))?;
    let digest = transaction.hash_of_blob_to_sign.ok_or_else(|| {
        WalletError::malformed(Phase::Build, "missing `transaction.hashOfBlobToSign`")
    })?;

    Ok((blob, digest))
}

impl Wallet {
    /// Build, sign and submit a transaction, returning its identifier.
    ///
    /// The three steps run strictly in order and any failure aborts the
    /// whole call. `encrypt_message` is passed to the gateway untouched.
    ///
    /// # Arguments
    /// * `actions` - Actions in execution order, forwarded verbatim
    /// * `fee_payer` - Address paying the transaction fee
    /// * `message` - Optional message attached to the transaction
    /// * `encrypt_message` - Hint asking the gateway to encrypt `message`
    ///
    /// # Returns
    /// * `Ok(String)` - The ledger transaction identifier
    /// * `Err(WalletError::Remote)` - If build or finalize was rejected; the phase says which
    /// * `Err(WalletError::MalformedResponse)` - If a success result lacked a needed field
    /// * `Err(WalletError::Ledger)` / `Err(WalletError::Signer)` - Passed through untouched
    pub async fn submit(
        &self,
        actions: &[Action],
        fee_payer: &str,
        message: Option<&str>,
        encrypt_message: bool,
    ) -> Result<String, WalletError> {
        info!(
            actions = actions.len(),
            fee_payer = %fee_payer,
            has_message = message.is_some(),
            "Building transaction"
        );

        let envelope = self
            .ledger
            .build_transaction(BuildTransactionRequest {
                actions,
                fee_payer,
                message,
                encrypt_message,
            })
            .await?;
        let (blob, digest) = unsigned_parts(expect_success(envelope, Phase::Build)?)?;

        let signature = self.signer.sign(&digest, self.account_index)?;
        let public_key = self.signer.public_key(self.account_index)?;

        debug!(
            account_index = self.account_index,
            digest = %digest,
            "Signed transaction digest"
        );

        let envelope = self
            .ledger
            .finalize_transaction(FinalizeTransactionRequest {
                blob: &blob,
                signature_der: &signature,
                public_key: &public_key,
                immediate_submit: true,
            })
            .await?;
        let finalized = expect_success(envelope, Phase::Finalize)?;

        let (source, tx_id) = extract_tx_id(&finalized).ok_or_else(|| {
            WalletError::malformed(
                Phase::Finalize,
                "no `txID` at the top level or under `transaction`",
            )
        })?;

        info!(tx_id = %tx_id, source = ?source, "Transaction finalized");
        Ok(tx_id.to_string())
    }
}
