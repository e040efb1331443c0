// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token balance query endpoints.

use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::ApiError, state::AppState};

/// All balances of the wallet's account.
#[derive(Debug, Serialize, ToSchema)]
pub struct BalancesResponse {
    /// Account address
    pub address: String,
    /// Amount per token RRI, in the smallest denomination, as decimal strings
    pub balances: BTreeMap<String, String>,
}

/// Balance of one token.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenBalanceResponse {
    /// Token resource identifier
    pub rri: String,
    /// Amount in the smallest denomination; `"0"` when never held
    pub amount: String,
}

/// Get every token balance of the wallet.
#[utoipa::path(
    get,
    path = "/v1/balances",
    tag = "Balances",
    responses(
        (status = 200, description = "Balances retrieved successfully", body = BalancesResponse),
        (status = 502, description = "Ledger rejected the request", body = crate::error::ErrorBody),
        (status = 503, description = "Ledger gateway unavailable", body = crate::error::ErrorBody)
    )
)]
pub async fn get_balances(
    State(state): State<AppState>,
) -> Result<Json<BalancesResponse>, ApiError> {
    let address = state.wallet.address()?;
    let balances = state
        .wallet
        .get_balances()
        .await?
        .into_iter()
        .map(|(rri, amount)| (rri, amount.to_string()))
        .collect();

    Ok(Json(BalancesResponse { address, balances }))
}

/// Get the balance of a single token.
#[utoipa::path(
    get,
    path = "/v1/balances/{rri}",
    tag = "Balances",
    params(
        ("rri" = String, Path, description = "Token resource identifier")
    ),
    responses(
        (status = 200, description = "Balance retrieved successfully", body = TokenBalanceResponse),
        (status = 502, description = "Ledger rejected the request", body = crate::error::ErrorBody),
        (status = 503, description = "Ledger gateway unavailable", body = crate::error::ErrorBody)
    )
)]
pub async fn get_token_balance(
    State(state): State<AppState>,
    Path(rri): Path<String>,
) -> Result<Json<TokenBalanceResponse>, ApiError> {
    if rri.trim().is_empty() {
        return Err(ApiError::bad_request("Token RRI must not be empty"));
    }

    let amount = state.wallet.get_balance_of(&rri).await?;
    Ok(Json(TokenBalanceResponse {
        rri,
        amount: amount.to_string(),
    }))
}
