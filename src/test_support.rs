// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process ledger and signer doubles for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::blockchain::{
    Action, BalancesResult, BuildResult, BuildTransactionRequest, Envelope, FinalizeResult,
    FinalizeTransactionRequest, LedgerClient, LedgerClientError, Network, Signer, SignerError,
};

#[derive(Debug, Clone)]
pub struct RecordedBuild {
    pub actions: Vec<Action>,
    pub fee_payer: String,
    pub message: Option<String>,
    pub encrypt_message: bool,
}

#[derive(Debug, Clone)]
pub struct RecordedFinalize {
    pub blob: String,
    pub signature_der: String,
    pub public_key: String,
    pub immediate_submit: bool,
}

/// Ledger answering every call with a fixed JSON-RPC body.
pub struct ScriptedLedger {
    network: Network,
    balances: Value,
    build: Value,
    finalize: Value,
    unreachable: bool,
    calls: Mutex<Vec<&'static str>>,
    balance_queries: Mutex<Vec<String>>,
    builds: Mutex<Vec<RecordedBuild>>,
    finalizations: Mutex<Vec<RecordedFinalize>>,
}

impl ScriptedLedger {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            balances: json!({ "result": { "tokenBalances": [] } }),
            build: json!({
                "result": { "transaction": { "blob": "ab12", "hashOfBlobToSign": "deadbeef" } }
            }),
            finalize: json!({ "result": { "txID": "TX1" } }),
            unreachable: false,
            calls: Mutex::new(Vec::new()),
            balance_queries: Mutex::new(Vec::new()),
            builds: Mutex::new(Vec::new()),
            finalizations: Mutex::new(Vec::new()),
        }
    }

    pub fn with_balances(mut self, body: Value) -> Self {
        self.balances = body;
        self
    }

    pub fn with_build(mut self, body: Value) -> Self {
        self.build = body;
        self
    }

    pub fn with_finalize(mut self, body: Value) -> Self {
        self.finalize = body;
        self
    }

    /// Fail every call at the transport level.
    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn balance_queries(&self) -> Vec<String> {
        self.balance_queries.lock().unwrap().clone()
    }

    pub fn builds(&self) -> Vec<RecordedBuild> {
        self.builds.lock().unwrap().clone()
    }

    pub fn finalizations(&self) -> Vec<RecordedFinalize> {
        self.finalizations.lock().unwrap().clone()
    }

    fn answer<T: serde::de::DeserializeOwned>(
        &self,
        call: &'static str,
        body: &Value,
    ) -> Result<Envelope<T>, LedgerClientError> {
        self.calls.lock().unwrap().push(call);
        if self.unreachable {
            return Err(LedgerClientError::Transport(format!(
                "{call}: connection refused"
            )));
        }
        Envelope::from_value(body.clone())
            .map_err(|e| LedgerClientError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl LedgerClient for ScriptedLedger {
    fn network(&self) -> Network {
        self.network
    }

    async fn get_balances(
        &self,
        address: &str,
    ) -> Result<Envelope<BalancesResult>, LedgerClientError> {
        self.balance_queries.lock().unwrap().push(address.to_string());
        self.answer("balances", &self.balances)
    }

    async fn build_transaction(
        &self,
        request: BuildTransactionRequest<'_>,
    ) -> Result<Envelope<BuildResult>, LedgerClientError> {
        self.builds.lock().unwrap().push(RecordedBuild {
            actions: request.actions.to_vec(),
            fee_payer: request.fee_payer.to_string(),
            message: request.message.map(str::to_string),
            encrypt_message: request.encrypt_message,
        });
        self.answer("build", &self.build)
    }

    async fn finalize_transaction(
        &self,
        request: FinalizeTransactionRequest<'_>,
    ) -> Result<Envelope<FinalizeResult>, LedgerClientError> {
        self.finalizations.lock().unwrap().push(RecordedFinalize {
            blob: request.blob.to_string(),
            signature_der: request.signature_der.to_string(),
            public_key: request.public_key.to_string(),
            immediate_submit: request.immediate_submit,
        });
        self.answer("finalize", &self.finalize)
    }
}

/// Signer returning a fixed signature and recording what it was asked to sign.
pub struct RecordingSigner {
    signature: String,
    sign_calls: Mutex<Vec<(String, u32)>>,
}

impl RecordingSigner {
    pub fn new(signature: &str) -> Self {
        Self {
            signature: signature.to_string(),
            sign_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn sign_calls(&self) -> Vec<(String, u32)> {
        self.sign_calls.lock().unwrap().clone()
    }
}

impl Signer for RecordingSigner {
    fn sign(&self, digest_hex: &str, index: u32) -> Result<String, SignerError> {
        self.sign_calls
            .lock()
            .unwrap()
            .push((digest_hex.to_string(), index));
        Ok(self.signature.clone())
    }

    fn public_key(&self, index: u32) -> Result<String, SignerError> {
        Ok(format!("pubkey-{index}"))
    }

    fn address(&self, index: u32, mainnet: bool) -> Result<String, SignerError> {
        let prefix = if mainnet { "rdx" } else { "tdx" };
        Ok(format!("{prefix}-account-{index}"))
    }
}
