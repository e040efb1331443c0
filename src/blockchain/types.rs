// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Ledger types and constants.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Radix network configuration.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network name for display
    pub name: &'static str,
    /// JSON-RPC gateway base URL
    pub gateway_url: &'static str,
    /// Bech32 human-readable prefix for account addresses
    pub address_hrp: &'static str,
    /// Block explorer URL
    pub explorer_url: &'static str,
}

/// Radix mainnet configuration.
pub const RADIX_MAINNET: NetworkConfig = NetworkConfig {
    name: "Radix Mainnet",
    gateway_url: "https://mainnet.radixdlt.com",
    address_hrp: "rdx",
    explorer_url: "https://explorer.radixdlt.com",
};

/// Radix Stokenet (public test network) configuration.
pub const RADIX_STOKENET: NetworkConfig = NetworkConfig {
    name: "Radix Stokenet",
    gateway_url: "https://stokenet.radixdlt.com",
    address_hrp: "tdx",
    explorer_url: "https://stokenet-explorer.radixdlt.com",
};

/// The network a gateway client talks to.
///
/// Address derivation only distinguishes mainnet from everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Stokenet,
}

impl Network {
    pub fn is_mainnet(self) -> bool {
        matches!(self, Network::Mainnet)
    }

    pub fn config(self) -> &'static NetworkConfig {
        match self {
            Network::Mainnet => &RADIX_MAINNET,
            Network::Stokenet => &RADIX_STOKENET,
        }
    }

    /// Parse a network name as found in configuration.
    pub fn from_name(raw: &str) -> Result<Self, String> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "stokenet" => Ok(Network::Stokenet),
            other => Err(format!(
                "Unknown network `{other}` (expected `mainnet` or `stokenet`)"
            )),
        }
    }

    /// Explorer link for a finalized transaction.
    pub fn explorer_tx_url(self, tx_id: &str) -> String {
        format!(
            "{}/#/transactions/{}",
            self.config().explorer_url.trim_end_matches('/'),
            tx_id
        )
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Stokenet => f.write_str("stokenet"),
        }
    }
}

/// Success payload of `account.get_balances`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalancesResult {
    /// Address the balances belong to
    pub owner: Option<String>,
    /// Per-token balances; absent on a malformed response
    pub token_balances: Option<Vec<TokenBalanceEntry>>,
}

/// A single token balance as reported by the gateway.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenBalanceEntry {
    /// Resource identifier of the token
    pub rri: String,
    /// Amount in the smallest denomination
    pub amount: RawAmount,
}

/// An amount exactly as the gateway sent it.
///
/// Gateways report amounts as decimal strings; some versions use JSON
/// numbers. Numbers keep their original digits (`arbitrary_precision`), so
/// values past `u64` survive intact. Validation happens in [`Self::to_u128`]
/// so a bad amount is reported by the wallet, not by serde.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawAmount(Value);

impl RawAmount {
    /// Parse into an integer amount, rejecting signs, decimals, exponents,
    /// blanks and non-numeric JSON.
    pub fn to_u128(&self) -> Option<u128> {
        let digits = match &self.0 {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }
}

impl From<Value> for RawAmount {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for RawAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}

/// Success payload of `construction.build_transaction`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BuildResult {
    pub transaction: Option<UnsignedTransaction>,
    /// Fee quoted by the gateway, informational only
    pub fee: Option<String>,
}

/// The unsigned artifact returned by the build step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedTransaction {
    pub blob: Option<String>,
    pub hash_of_blob_to_sign: Option<String>,
}

/// Success payload of `construction.finalize_transaction`.
///
/// Gateway versions disagree on where the identifier lives, so both shapes
/// are captured.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinalizeResult {
    #[serde(rename = "txID")]
    pub tx_id: Option<String>,
    pub transaction: Option<FinalizedTransaction>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FinalizedTransaction {
    #[serde(rename = "txID")]
    pub tx_id: Option<String>,
}
