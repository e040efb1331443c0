// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Wallet identity endpoint.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{blockchain::Network, error::ApiError, state::AppState};

/// The account this service signs for.
#[derive(Debug, Serialize, ToSchema)]
pub struct WalletInfoResponse {
    /// Account address on the configured network
    pub address: String,
    /// Compressed public key (hex)
    pub public_key: String,
    /// Network the gateway client is connected to
    pub network: Network,
    /// Account index used for signing
    pub account_index: u32,
}

#[utoipa::path(
    get,
    path = "/v1/wallet",
    tag = "Wallet",
    responses(
        (status = 200, description = "Wallet identity", body = WalletInfoResponse),
        (status = 500, description = "Signer unavailable", body = crate::error::ErrorBody)
    )
)]
pub async fn get_wallet_info(
    State(state): State<AppState>,
) -> Result<Json<WalletInfoResponse>, ApiError> {
    let wallet = &state.wallet;
    Ok(Json(WalletInfoResponse {
        address: wallet.address()?,
        public_key: wallet.public_key()?,
        network: wallet.ledger().network(),
        account_index: wallet.account_index(),
    }))
}
