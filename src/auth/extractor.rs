// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Axum extractors for authenticated callers.
//!
//! Use the `Auth` extractor in handlers to require a session:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is SessionUser
//! }
//! ```
//!
//! `AdminOnly` additionally consults the profile store: the caller's stored
//! role must be exactly `admin`. The token alone never grants admin rights,
//! so a role revocation takes effect on the next request.

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{cookie, token, AuthError, SessionUser};
use crate::auth::Role;
use crate::state::AppState;

/// Extractor for authenticated callers.
///
/// Reads the `token` cookie and verifies the credential. Missing cookie and
/// failed verification both reject with a 401-class [`AuthError`] before
/// the handler runs.
pub struct Auth(pub SessionUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A previous extractor on the same request may already have paid
        // for verification.
        if let Some(user) = parts.extensions.get::<SessionUser>().cloned() {
            return Ok(Auth(user));
        }

        let raw = cookie::extract_token(&parts.headers).ok_or(AuthError::MissingToken)?;
        let user = token::verify_token(&raw, &state.auth.secret)?;

        parts.extensions.insert(user.clone());
        Ok(Auth(user))
    }
}

/// Extractor that requires the caller's *stored* role to be admin.
///
/// Fails with 403 when the caller has no stored profile or the stored role
/// is anything other than `admin`.
pub struct AdminOnly(pub SessionUser);

impl FromRequestParts<AppState> for AdminOnly {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Auth(user) = Auth::from_request_parts(parts, state).await?;

        let store = state.store.read().await;
        match store.get_profile(&user.email) {
            Some(profile) if profile.role == Role::Admin => Ok(AdminOnly(user)),
            _ => Err(AuthError::NotAdmin),
        }
    }
}
