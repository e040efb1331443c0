// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transaction submission endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::{blockchain::Action, error::ApiError, state::AppState};

/// Request to build, sign and submit a transaction.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitTransactionRequest {
    /// Actions in execution order, passed to the gateway unchanged
    pub actions: Vec<Action>,
    /// Address paying the fee; defaults to the wallet's own address
    #[serde(default)]
    pub fee_payer: Option<String>,
    /// Optional message attached to the transaction
    #[serde(default)]
    pub message: Option<String>,
    /// Ask the gateway to encrypt the message for the recipient
    #[serde(default)]
    pub encrypt_message: bool,
}

/// A finalized transaction.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitTransactionResponse {
    /// Ledger transaction identifier
    pub tx_id: String,
    /// Explorer link for the transaction
    pub explorer_url: String,
}

/// Build, sign and submit a transaction for the wallet's account.
#[utoipa::path(
    post,
    path = "/v1/transactions",
    tag = "Transactions",
    request_body = SubmitTransactionRequest,
    responses(
        (status = 200, description = "Transaction finalized", body = SubmitTransactionResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorBody),
        (status = 502, description = "Ledger rejected the transaction", body = crate::error::ErrorBody),
        (status = 503, description = "Ledger gateway unavailable", body = crate::error::ErrorBody)
    )
)]
pub async fn submit_transaction(
    State(state): State<AppState>,
    Json(request): Json<SubmitTransactionRequest>,
) -> Result<Json<SubmitTransactionResponse>, ApiError> {
    if request.actions.is_empty() {
        return Err(ApiError::bad_request("At least one action is required"));
    }

    let wallet = &state.wallet;
    let fee_payer = match request.fee_payer {
        Some(fee_payer) if !fee_payer.trim().is_empty() => fee_payer,
        _ => wallet.address()?,
    };

    let tx_id = wallet
        .submit(
            &request.actions,
            &fee_payer,
            request.message.as_deref(),
            request.encrypt_message,
        )
        .await?;

    info!(tx_id = %tx_id, "Transaction submitted via API");

    Ok(Json(SubmitTransactionResponse {
        explorer_url: wallet.ledger().network().explorer_tx_url(&tx_id),
        tx_id,
    }))
}
