// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use crate::wallet::Wallet;

/// Shared handler state.
///
/// The wallet is immutable, so no lock is needed around it.
#[derive(Clone)]
pub struct AppState {
    pub wallet: Arc<Wallet>,
}

impl AppState {
    pub fn new(wallet: Wallet) -> Self {
        Self {
            wallet: Arc::new(wallet),
        }
    }
}
