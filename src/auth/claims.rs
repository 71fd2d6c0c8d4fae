// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! JWT claims and session identity representation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims embedded in a StayVista session credential.
///
/// The token is the sole source of truth for identity between requests;
/// there is no server-side session store. Role and verification status are
/// deliberately NOT claims — they are read from the profile store when an
/// operation needs them, so an admin revocation takes effect immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity email (unique key into the profile store).
    pub email: String,

    /// Issued at timestamp (Unix seconds).
    pub iat: i64,

    /// Expiration timestamp (Unix seconds).
    pub exp: i64,
}

/// Authenticated identity extracted from a verified session credential.
///
/// This is the primary type used throughout the application to represent
/// the caller of a request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct SessionUser {
    /// Identity email from the verified credential.
    pub email: String,

    /// Token expiration (Unix timestamp, kept for logging/middleware).
    #[serde(skip)]
    pub expires_at: i64,
}

impl SessionUser {
    /// Build the request identity from verified claims.
    pub fn from_claims(claims: SessionClaims) -> Self {
        Self {
            email: claims.email,
            expires_at: claims.exp,
        }
    }
}
