// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction actions.
//!
//! Actions are forwarded to the gateway's build step verbatim. The wallet
//! never inspects them, so they are kept as opaque JSON with a few
//! constructors for the common Olympia action types.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

/// An opaque ledger-state mutation (transfer, stake, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct Action(Value);

impl Action {
    /// Wrap an action the caller already encoded.
    pub fn raw(value: Value) -> Self {
        Self(value)
    }

    /// Move `amount` of token `rri` from one account to another.
    pub fn token_transfer(from: &str, to: &str, amount: u128, rri: &str) -> Self {
        Self(json!({
            "type": "TokenTransfer",
            "from": from,
            "to": to,
            "amount": amount.to_string(),
            "rri": rri,
        }))
    }

    /// Stake native tokens to a validator.
    pub fn stake_tokens(from: &str, validator: &str, amount: u128) -> Self {
        Self(json!({
            "type": "StakeTokens",
            "from": from,
            "validator": validator,
            "amount": amount.to_string(),
        }))
    }

    /// Unstake native tokens from a validator.
    pub fn unstake_tokens(from: &str, validator: &str, amount: u128) -> Self {
        Self(json!({
            "type": "UnstakeTokens",
            "from": from,
            "validator": validator,
            "amount": amount.to_string(),
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
