// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Payment-intent endpoint.

use axum::{extract::State, Json};
use tracing::error;

use crate::{
    error::ApiError,
    models::{PaymentIntentRequest, PaymentIntentResponse},
    providers::stripe::StripeError,
    state::AppState,
};

/// Create a payment authorization for a price in major currency units.
///
/// Converts to minor units and forwards to Stripe; the returned client
/// secret is handed to the frontend payment widget. Provider rejections
/// surface as a generic server error.
#[utoipa::path(
    post,
    path = "/paymentIntent",
    request_body = PaymentIntentRequest,
    tag = "Payments",
    responses(
        (status = 200, body = PaymentIntentResponse),
        (status = 400, description = "Non-positive amount"),
        (status = 500, description = "Payment provider unavailable or rejected the request"),
    )
)]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<PaymentIntentRequest>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let Some(client) = state.payments.as_ref() else {
        error!("payment intent requested but no Stripe client is configured");
        return Err(ApiError::internal("Payment provider is not configured"));
    };

    let intent = client.create_intent(request.price).await.map_err(|e| {
        if let StripeError::InvalidAmount(amount) = e {
            return ApiError::bad_request(format!("invalid charge amount: {amount}"));
        }
        error!(error = %e, "payment intent creation failed");
        ApiError::internal("Failed to create payment intent")
    })?;

    Ok(Json(PaymentIntentResponse {
        client_secret: intent.client_secret,
    }))
}
