// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::CookieConfig;
use crate::providers::stripe::StripeClient;
use crate::store::InMemoryStore;

/// Authentication configuration shared with the extractors.
#[derive(Clone)]
pub struct AuthConfig {
    /// Server-held HS256 signing secret.
    pub secret: String,
    /// Session cookie policy for the deployment environment.
    pub cookie: CookieConfig,
}

impl AuthConfig {
    pub fn new(secret: impl Into<String>, cookie: CookieConfig) -> Self {
        Self {
            secret: secret.into(),
            cookie,
        }
    }
}

impl Default for AuthConfig {
    /// Development-only defaults. Production loads the secret from the
    /// environment in `main`.
    fn default() -> Self {
        Self::new("insecure-dev-secret", CookieConfig::default())
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub auth: AuthConfig,
    /// Payment provider client; `None` when no Stripe key is configured,
    /// in which case payment-intent requests fail with a server error.
    pub payments: Option<Arc<StripeClient>>,
}

impl AppState {
    pub fn new(store: InMemoryStore, auth: AuthConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            auth,
            payments: None,
        }
    }

    pub fn with_payments(mut self, client: StripeClient) -> Self {
        self.payments = Some(Arc::new(client));
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InMemoryStore::new(), AuthConfig::default())
    }
}
