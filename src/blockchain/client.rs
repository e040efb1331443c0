// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Radix JSON-RPC gateway client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, warn};
use uuid::Uuid;

use super::envelope::Envelope;
use super::ledger::{BuildTransactionRequest, FinalizeTransactionRequest, LedgerClient};
use super::types::*;

const ARCHIVE_ENDPOINT: &str = "archive";
const CONSTRUCTION_ENDPOINT: &str = "construction";

const METHOD_GET_BALANCES: &str = "account.get_balances";
const METHOD_BUILD_TRANSACTION: &str = "construction.build_transaction";
const METHOD_FINALIZE_TRANSACTION: &str = "construction.finalize_transaction";

/// Default HTTP request timeout.
pub const DEFAULT_GATEWAY_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection settings for [`GatewayClient`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Overrides the network's default gateway URL
    pub base_url: Option<String>,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: DEFAULT_GATEWAY_TIMEOUT,
        }
    }
}

/// JSON-RPC client for a Radix gateway node.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    network: Network,
    base_url: String,
    http: Client,
}

impl GatewayClient {
    /// Create a new client for the specified network.
    ///
    /// # Arguments
    /// * `network` - Selects the default gateway URL and the address prefix
    /// * `config` - Optional gateway URL override and request timeout
    ///
    /// # Returns
    /// * `Ok(GatewayClient)` - Ready to issue JSON-RPC calls
    /// * `Err(LedgerClientError::InvalidGatewayUrl)` - If the URL does not parse or is not http(s)
    pub fn new(network: Network, config: GatewayConfig) -> Result<Self, LedgerClientError> {
        let base_url = config
            .base_url
            .unwrap_or_else(|| network.config().gateway_url.to_string());

        let url: url::Url = base_url.parse().map_err(|e: url::ParseError| {
            LedgerClientError::InvalidGatewayUrl(format!("{base_url}: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LedgerClientError::InvalidGatewayUrl(format!(
                "{base_url}: unsupported scheme `{}`",
                url.scheme()
            )));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LedgerClientError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            network,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Create a client for Radix mainnet.
    pub fn mainnet() -> Result<Self, LedgerClientError> {
        Self::new(Network::Mainnet, GatewayConfig::default())
    }

    /// Create a client for Radix Stokenet.
    pub fn stokenet() -> Result<Self, LedgerClientError> {
        Self::new(Network::Stokenet, GatewayConfig::default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        method: &str,
        params: Value,
    ) -> Result<Envelope<T>, LedgerClientError> {
        let request_id = Uuid::new_v4().to_string();
        let payload = json!({
            "jsonrpc": "2.0",
            "id": request_id,
            "method": method,
            "params": params,
        });

        debug!(method, request_id = %request_id, "Gateway request");

        let response = self
            .http
            .post(format!("{}/{}", self.base_url, endpoint))
            .json(&payload)
            .send()
            .await
            .map_err(|e| LedgerClientError::Transport(format!("{method} failed: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            LedgerClientError::Transport(format!("{method} body could not be read: {e}"))
        })?;

        // An error envelope is authoritative even on a non-2xx status, so the
        // body is decoded before the status is looked at.
        let value: Value = match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(_) if !status.is_success() => {
                return Err(LedgerClientError::Transport(format!(
                    "{method} returned {status}: {body}"
                )));
            }
            Err(e) => {
                return Err(LedgerClientError::InvalidResponse(format!(
                    "{method} invalid JSON: {e}"
                )));
            }
        };

        let envelope = Envelope::from_value(value).map_err(|e| {
            if status.is_success() {
                LedgerClientError::InvalidResponse(format!("{method}: {e}"))
            } else {
                LedgerClientError::Transport(format!("{method} returned {status}: {e}"))
            }
        })?;

        match &envelope {
            Envelope::Success(_) => {}
            Envelope::Failure(payload) => warn!(
                method,
                request_id = %request_id,
                http_status = %status,
                code = ?payload.code(),
                error = %payload,
                "Gateway returned an error envelope"
            ),
            // Without a usable result, a failure status means the request
            // never reached the gateway's JSON-RPC handler.
            Envelope::Malformed(reason) if !status.is_success() => {
                return Err(LedgerClientError::Transport(format!(
                    "{method} returned {status}: {reason}"
                )));
            }
            Envelope::Malformed(reason) => warn!(
                method,
                request_id = %request_id,
                reason = %reason,
                "Gateway result did not match the expected shape"
            ),
        }

        Ok(envelope)
    }
}

#[async_trait]
impl LedgerClient for GatewayClient {
    fn network(&self) -> Network {
        self.network
    }

    async fn get_balances(
        &self,
        address: &str,
    ) -> Result<Envelope<BalancesResult>, LedgerClientError> {
        self.call(
            ARCHIVE_ENDPOINT,
            METHOD_GET_BALANCES,
            json!({ "address": address }),
        )
        .await
    }

    async fn build_transaction(
        &self,
        request: BuildTransactionRequest<'_>,
    ) -> Result<Envelope<BuildResult>, LedgerClientError> {
        self.call(
            CONSTRUCTION_ENDPOINT,
            METHOD_BUILD_TRANSACTION,
            build_params(&request),
        )
        .await
    }

    async fn finalize_transaction(
        &self,
        request: FinalizeTransactionRequest<'_>,
    ) -> Result<Envelope<FinalizeResult>, LedgerClientError> {
        self.call(
            CONSTRUCTION_ENDPOINT,
            METHOD_FINALIZE_TRANSACTION,
            finalize_params(&request),
        )
        .await
    }
}

fn build_params(request: &BuildTransactionRequest<'_>) -> Value {
    let mut params = json!({
        "actions": request.actions,
        "feePayer": request.fee_payer,
        "disableResourceAllocationAndDestroy": true,
    });
    if let Some(message) = request.message {
        params["message"] = Value::String(message.to_string());
    }
    if request.encrypt_message {
        params["encryptMessage"] = Value::Bool(true);
    }
    params
}

fn finalize_params(request: &FinalizeTransactionRequest<'_>) -> Value {
    json!({
        "blob": request.blob,
        "signatureDER": request.signature_der,
        "publicKeyOfSigner": request.public_key,
        "immediateSubmit": request.immediate_submit,
    })
}

/// Errors raised below the envelope: the gateway could not be reached or
/// answered with something that is not a JSON-RPC response.
#[derive(Debug, thiserror::Error)]
pub enum LedgerClientError {
    #[error("Invalid gateway URL: {0}")]
    InvalidGatewayUrl(String),

    #[error("Gateway transport error: {0}")]
    Transport(String),

    #[error("Gateway response was invalid: {0}")]
    InvalidResponse(String),
}
