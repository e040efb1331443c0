// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{blockchain::Network, error::ErrorBody, state::AppState};

pub mod balance;
pub mod health;
pub mod transactions;
pub mod wallet;

use balance::{BalancesResponse, TokenBalanceResponse};
use health::HealthResponse;
use transactions::{SubmitTransactionRequest, SubmitTransactionResponse};
use wallet::WalletInfoResponse;

pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/wallet", get(wallet::get_wallet_info))
        .route("/balances", get(balance::get_balances))
        .route("/balances/{rri}", get(balance::get_token_balance))
        .route("/transactions", post(transactions::submit_transaction))
        .with_state(state);

    Router::new()
        .route("/health", get(health::liveness))
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::liveness,
        wallet::get_wallet_info,
        balance::get_balances,
        balance::get_token_balance,
        transactions::submit_transaction
    ),
    components(
        schemas(
            HealthResponse,
            WalletInfoResponse,
            BalancesResponse,
            TokenBalanceResponse,
            SubmitTransactionRequest,
            SubmitTransactionResponse,
            Network,
            ErrorBody
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Wallet", description = "Wallet identity"),
        (name = "Balances", description = "Token balances"),
        (name = "Transactions", description = "Build, sign and submit transactions")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::test_support::{RecordingSigner, ScriptedLedger};
    use crate::wallet::Wallet;

    fn app(ledger: ScriptedLedger) -> Router {
        router(AppState::new(Wallet::new(
            Arc::new(ledger),
            Arc::new(RecordingSigner::new("sig000")),
            0,
        )))
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_route_is_mounted() {
        let response = app(ScriptedLedger::new(Network::Stokenet))
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn single_balance_route_reads_path() {
        let ledger = ScriptedLedger::new(Network::Stokenet).with_balances(json!({
            "result": { "tokenBalances": [{ "rri": "xrd_tr1qyf0x76s", "amount": "12" }] }
        }));

        let response = app(ledger)
            .oneshot(
                Request::get("/v1/balances/xrd_tr1qyf0x76s")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "rri": "xrd_tr1qyf0x76s", "amount": "12" })
        );
    }

    #[tokio::test]
    async fn submit_route_returns_tx_id() {
        let ledger = ScriptedLedger::new(Network::Mainnet)
            .with_finalize(json!({ "result": { "transaction": { "txID": "TX2" } } }));

        let request = Request::post("/v1/transactions")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "actions": [{ "type": "StakeTokens" }], "message": "hi" }).to_string(),
            ))
            .unwrap();

        let response = app(ledger).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["tx_id"], "TX2");
    }

    #[tokio::test]
    async fn finalize_rejection_surfaces_as_json_error() {
        let ledger = ScriptedLedger::new(Network::Stokenet)
            .with_finalize(json!({ "error": { "message": "substate conflict" } }));

        let request = Request::post("/v1/transactions")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "actions": [{ "type": "StakeTokens" }] }).to_string()))
            .unwrap();

        let response = app(ledger).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        assert_eq!(
            body["error"],
            "Ledger rejected the finalize request: substate conflict"
        );
    }

    #[tokio::test]
    async fn null_finalize_result_is_bad_gateway() {
        let ledger =
            ScriptedLedger::new(Network::Stokenet).with_finalize(json!({ "result": null }));

        let request = Request::post("/v1/transactions")
            .header("content-type", "application/json")
            .body(Body::from(json!({ "actions": [{ "type": "StakeTokens" }] }).to_string()))
            .unwrap();

        let response = app(ledger).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = json_body(response).await;
        let message = body["error"].as_str().unwrap();
        assert!(message.starts_with("Malformed finalize response"), "{message}");
    }

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/health",
            "/v1/wallet",
            "/v1/balances",
            "/v1/balances/{rri}",
            "/v1/transactions",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
