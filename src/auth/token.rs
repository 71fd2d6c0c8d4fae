// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Session credential issuance and verification.
//!
//! Credentials are HS256 JWTs signed with the server-held secret
//! (`ACCESS_TOKEN_SECRET`). They carry the identity email plus issuance and
//! expiry timestamps, and stay valid for a fixed 365-day window.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::{AuthError, SessionClaims, SessionUser};

/// Fixed credential validity window.
const TOKEN_VALIDITY_DAYS: i64 = 365;

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// Sign a session credential for the given identity email.
pub fn issue_token(email: &str, secret: &str) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = SessionClaims {
        email: email.to_string(),
        iat: now,
        exp: now + TOKEN_VALIDITY_DAYS * 24 * 60 * 60,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::InternalError(e.to_string()))
}

/// Verify a session credential and extract the caller identity.
///
/// Fails with a 401-class error when the signature does not check out or
/// the credential has expired (with 60s leeway).
pub fn verify_token(token: &str, secret: &str) -> Result<SessionUser, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = CLOCK_SKEW_LEEWAY;
    validation.validate_aud = false;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
        _ => AuthError::MalformedToken,
    })?;

    Ok(SessionUser::from_claims(token_data.claims))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn encode_claims(claims: &SessionClaims, secret: &str) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn issued_token_round_trips() {
        let token = issue_token("guest@x.com", SECRET).unwrap();
        let user = verify_token(&token, SECRET).unwrap();
        assert_eq!(user.email, "guest@x.com");
        assert!(user.expires_at > Utc::now().timestamp());
    }

    #[test]
    fn wrong_secret_fails_signature_check() {
        let token = issue_token("guest@x.com", SECRET).unwrap();
        let err = verify_token(&token, "other-secret").unwrap_err();
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            email: "guest@x.com".to_string(),
            iat: now - 1000,
            // Outside the 60s leeway window.
            exp: now - 300,
        };
        let token = encode_claims(&claims, SECRET);

        let err = verify_token(&token, SECRET).unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn garbage_token_is_malformed() {
        let err = verify_token("not.a.jwt", SECRET).unwrap_err();
        assert!(matches!(err, AuthError::MalformedToken));
    }
}
