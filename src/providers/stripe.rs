// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Stripe integration for payment-intent issuance.
//!
//! The core's only responsibility here is unit conversion and forwarding:
//! the amount arrives in major currency units, goes out in minor units, and
//! card validation/fraud checks are entirely Stripe's problem.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

const DEFAULT_API_BASE_URL: &str = "https://api.stripe.com";
const DEFAULT_CURRENCY: &str = "usd";
const PAYMENT_METHOD_CARD: &str = "card";

#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("Stripe configuration missing: {0}")]
    MissingConfig(String),

    #[error("invalid charge amount: {0}")]
    InvalidAmount(f64),

    #[error("Stripe request failed: {0}")]
    Request(String),

    #[error("Stripe response was invalid: {0}")]
    InvalidResponse(String),
}

/// An authorized-but-not-yet-captured charge handle.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone)]
pub struct StripeClient {
    api_base_url: String,
    secret_key: String,
    currency: String,
    http: Client,
}

impl StripeClient {
    pub fn is_configured() -> bool {
        env_optional("STRIPE_SECRET_KEY").is_some()
    }

    pub fn from_env() -> Result<Self, StripeError> {
        let api_base_url = env_or_default("STRIPE_API_BASE_URL", DEFAULT_API_BASE_URL);
        let secret_key = env_required("STRIPE_SECRET_KEY")?;
        let currency = env_or_default("STRIPE_CURRENCY", DEFAULT_CURRENCY).to_ascii_lowercase();

        let http = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| StripeError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_base_url,
            secret_key,
            currency,
            http,
        })
    }

    /// Request a payment authorization for an amount in major currency units.
    pub async fn create_intent(&self, amount_major: f64) -> Result<PaymentIntent, StripeError> {
        let amount_minor = to_minor_units(amount_major)?;
        let idempotency_key = Uuid::new_v4().to_string();

        info!(
            amount_minor,
            currency = %self.currency,
            "Stripe create_intent: requesting authorization"
        );

        let amount = amount_minor.to_string();
        let form: [(&str, &str); 3] = [
            ("amount", amount.as_str()),
            ("currency", self.currency.as_str()),
            ("payment_method_types[]", PAYMENT_METHOD_CARD),
        ];

        let response = self
            .http
            .post(format!(
                "{}/v1/payment_intents",
                self.api_base_url.trim_end_matches('/')
            ))
            .bearer_auth(&self.secret_key)
            .header("Idempotency-Key", idempotency_key)
            .form(&form)
            .send()
            .await
            .map_err(|e| StripeError::Request(format!("POST /v1/payment_intents failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(StripeError::Request(format!(
                "POST /v1/payment_intents returned {status}: {body}"
            )));
        }

        let payload: Value = response.json().await.map_err(|e| {
            StripeError::InvalidResponse(format!("POST /v1/payment_intents invalid JSON: {e}"))
        })?;

        parse_intent(&payload)
    }
}

/// Convert a major-unit amount to the provider's minor-unit representation.
///
/// Rejects non-positive and non-finite amounts before any request is made.
pub fn to_minor_units(amount_major: f64) -> Result<i64, StripeError> {
    if !amount_major.is_finite() || amount_major <= 0.0 {
        return Err(StripeError::InvalidAmount(amount_major));
    }
    Ok((amount_major * 100.0).round() as i64)
}

fn parse_intent(payload: &Value) -> Result<PaymentIntent, StripeError> {
    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| StripeError::InvalidResponse("missing intent id in response".to_string()))?
        .to_string();

    let client_secret = payload
        .get("client_secret")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            StripeError::InvalidResponse("missing client_secret in response".to_string())
        })?
        .to_string();

    Ok(PaymentIntent { id, client_secret })
}

fn env_required(name: &str) -> Result<String, StripeError> {
    env_optional(name).ok_or_else(|| StripeError::MissingConfig(name.to_string()))
}

fn env_optional(name: &str) -> Option<String> {
    match std::env::var(name) {
        Ok(value) => {
            let trimmed = value.trim().to_string();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            }
        }
        Err(_) => None,
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
