// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::{error::Error, sync::Arc};

use radix_wallet::{
    api::router,
    blockchain::{GatewayClient, LocalSigner},
    config::{env_optional, AppConfig, DEFAULT_LOG_FILTER, LOG_FORMAT_ENV},
    state::AppState,
    wallet::Wallet,
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = AppConfig::from_env()?;
    info!(?config, "Loaded configuration");

    let ledger = GatewayClient::new(config.network, config.gateway.clone())?;
    let signer = LocalSigner::from_pem_bundle(config.signing_key_pem.as_bytes())?;
    if config.account_index as usize >= signer.account_count() {
        warn!(
            account_index = config.account_index,
            keys = signer.account_count(),
            "Configured account index has no signing key; signing will fail"
        );
    }

    let gateway_url = ledger.base_url().to_string();
    let wallet = Wallet::new(Arc::new(ledger), Arc::new(signer), config.account_index);
    info!(
        network = %config.network,
        address = %wallet.address()?,
        gateway = %gateway_url,
        "Wallet ready"
    );

    let app = router(AppState::new(wallet));

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    info!("Radix wallet server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match env_optional(LOG_FORMAT_ENV).as_deref() {
        Some("json") => fmt()
            .with_env_filter(filter)
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .init(),
        _ => fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
