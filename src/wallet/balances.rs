// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Balance aggregation.

use std::collections::HashMap;

use tracing::debug;

use super::{expect_success, Phase, Wallet, WalletError};
use crate::blockchain::BalancesResult;

impl Wallet {
    /// All token balances of this account, keyed by RRI.
    ///
    /// Balances are fetched fresh on every call.
    ///
    /// # Returns
    /// * `Ok(HashMap)` - Amount per RRI in the smallest denomination
    /// * `Err(WalletError::Remote)` - If the gateway answered with an error
    /// * `Err(WalletError::MalformedResponse)` - If the list or an amount is unusable
    /// * `Err(WalletError::Ledger)` - If the gateway could not be reached
    pub async fn get_balances(&self) -> Result<HashMap<String, u128>, WalletError> {
        let address = self.address()?;
        let envelope = self.ledger.get_balances(&address).await?;
        let result = expect_success(envelope, Phase::Balances)?;
        let balances = balance_map(result)?;

        debug!(address = %address, tokens = balances.len(), "Fetched balances");
        Ok(balances)
    }

    /// Balance of a single token; zero when the account never held it.
    ///
    /// # Arguments
    /// * `rri` - Resource identifier of the token
    pub async fn get_balance_of(&self, rri: &str) -> Result<u128, WalletError> {
        Ok(self.get_balances().await?.get(rri).copied().unwrap_or(0))
    }
}

/// Reshape the gateway's balance list into a map. A repeated RRI keeps the
/// last amount.
fn balance_map(result: BalancesResult) -> Result<HashMap<String, u128>, WalletError> {
    let entries = result
        .token_balances
        .ok_or_else(|| WalletError::malformed(Phase::Balances, "missing `tokenBalances`"))?;

    entries
        .into_iter()
        .map(|entry| {
            let amount = entry.amount.to_u128().ok_or_else(|| {
                WalletError::malformed(
                    Phase::Balances,
                    format!("amount `{}` for {} is not an integer", entry.amount, entry.rri),
                )
            })?;
            Ok((entry.rri, amount))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::blockchain::Network;
    use crate::test_support::{RecordingSigner, ScriptedLedger};

    fn wallet_with_balances(body: serde_json::Value) -> (Wallet, Arc<ScriptedLedger>) {
        let ledger = Arc::new(ScriptedLedger::new(Network::Stokenet).with_balances(body));
        let wallet = Wallet::new(ledger.clone(), Arc::new(RecordingSigner::new("sig000")), 0);
        (wallet, ledger)
    }

    #[tokio::test]
    async fn maps_every_entry_by_rri() {
        let (wallet, ledger) = wallet_with_balances(json!({
            "result": {
                "owner": "tdx-account-0",
                "tokenBalances": [
                    { "rri": "xrd_tr1qyf0x76s", "amount": "1000000000000000000000" },
                    { "rri": "foo_tr1qd", "amount": "5" },
                    { "rri": "bar_tr1qx", "amount": 7 }
                ]
            }
        }));

        let balances = wallet.get_balances().await.unwrap();
        assert_eq!(balances.len(), 3);
        assert_eq!(balances["xrd_tr1qyf0x76s"], 1_000_000_000_000_000_000_000);
        assert_eq!(balances["foo_tr1qd"], 5);
        assert_eq!(balances["bar_tr1qx"], 7);
        assert_eq!(ledger.balance_queries(), vec!["tdx-account-0".to_string()]);
    }

    #[tokio::test]
    async fn result_does_not_depend_on_entry_order() {
        let forward = json!({ "result": { "tokenBalances": [
            { "rri": "a", "amount": "1" }, { "rri": "b", "amount": "2" }
        ] } });
        let backward = json!({ "result": { "tokenBalances": [
            { "rri": "b", "amount": "2" }, { "rri": "a", "amount": "1" }
        ] } });

        let (first, _) = wallet_with_balances(forward);
        let (second, _) = wallet_with_balances(backward);
        assert_eq!(
            first.get_balances().await.unwrap(),
            second.get_balances().await.unwrap()
        );
    }

    #[tokio::test]
    async fn absent_token_has_zero_balance() {
        let (wallet, _) = wallet_with_balances(json!({ "result": { "tokenBalances": [
            { "rri": "xrd_tr1", "amount": "42" }
        ] } }));

        assert_eq!(wallet.get_balance_of("xrd_tr1").await.unwrap(), 42);
        assert_eq!(wallet.get_balance_of("never_held_tr1").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_balance_list_is_an_empty_map() {
        let (wallet, _) = wallet_with_balances(json!({ "result": { "tokenBalances": [] } }));
        assert!(wallet.get_balances().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn error_envelope_is_a_remote_error() {
        let (wallet, _) = wallet_with_balances(json!({
            "error": { "code": -32602, "message": "invalid address" }
        }));

        let err = wallet.get_balance_of("xrd_tr1").await.unwrap_err();
        match err {
            WalletError::Remote { phase, payload } => {
                assert_eq!(phase, Phase::Balances);
                assert_eq!(payload.message(), Some("invalid address"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn missing_list_or_bad_amount_is_malformed() {
        let (wallet, _) = wallet_with_balances(json!({ "result": { "owner": "x" } }));
        assert!(matches!(
            wallet.get_balances().await,
            Err(WalletError::MalformedResponse { phase: Phase::Balances, .. })
        ));

        let (wallet, _) = wallet_with_balances(json!({ "result": { "tokenBalances": [
            { "rri": "xrd_tr1", "amount": "12.5" }
        ] } }));
        assert!(matches!(
            wallet.get_balances().await,
            Err(WalletError::MalformedResponse { phase: Phase::Balances, .. })
        ));
    }

    #[tokio::test]
    async fn negative_or_fractional_amounts_are_malformed() {
        for amount in [json!(-1), json!(2.5), json!("-1"), json!("1e3"), json!(null)] {
            let (wallet, _) = wallet_with_balances(json!({ "result": { "tokenBalances": [
                { "rri": "xrd_tr1", "amount": amount.clone() }
            ] } }));

            let err = wallet.get_balances().await.unwrap_err();
            assert!(
                matches!(
                    err,
                    WalletError::MalformedResponse {
                        phase: Phase::Balances,
                        ..
                    }
                ),
                "{amount}: {err:?}"
            );
        }
    }

    #[tokio::test]
    async fn numeric_amount_past_u64_is_kept_exactly() {
        let body: serde_json::Value = serde_json::from_str(
            r#"{ "result": { "tokenBalances": [
                { "rri": "xrd_tr1", "amount": 100000000000000000000000 }
            ] } }"#,
        )
        .unwrap();
        let (wallet, _) = wallet_with_balances(body);

        assert_eq!(
            wallet.get_balance_of("xrd_tr1").await.unwrap(),
            100_000_000_000_000_000_000_000
        );
    }

    #[tokio::test]
    async fn mistyped_balance_list_is_malformed() {
        let (wallet, _) =
            wallet_with_balances(json!({ "result": { "tokenBalances": "none" } }));
        assert!(matches!(
            wallet.get_balances().await,
            Err(WalletError::MalformedResponse { phase: Phase::Balances, .. })
        ));
    }

    #[test]
    fn duplicate_rri_keeps_last_amount() {
        let result: BalancesResult = serde_json::from_value(json!({ "tokenBalances": [
            { "rri": "a", "amount": "1" }, { "rri": "a", "amount": "9" }
        ] }))
        .unwrap();
        let map = balance_map(result).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["a"], 9);
    }
}
