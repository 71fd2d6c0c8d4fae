// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Session credential endpoints.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use tracing::{debug, error};

use crate::{
    auth::token::issue_token,
    error::ApiError,
    models::{IssueTokenRequest, SuccessResponse},
    state::AppState,
};

/// Issue a session credential for the supplied identity payload.
///
/// The credential is set as an httpOnly `token` cookie; the response body
/// only acknowledges success.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = IssueTokenRequest,
    tag = "Session",
    responses(
        (status = 200, description = "Credential issued and cookie set", body = SuccessResponse),
        (status = 400, description = "Missing identity email"),
    )
)]
pub async fn issue_session(
    State(state): State<AppState>,
    Json(request): Json<IssueTokenRequest>,
) -> Result<(HeaderMap, Json<SuccessResponse>), ApiError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(ApiError::bad_request("email is required"));
    }

    let token = issue_token(email, &state.auth.secret).map_err(|e| {
        error!(error = %e, "failed to sign session credential");
        ApiError::internal("Failed to issue session credential")
    })?;

    debug!(email, "issued session credential");

    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, state.auth.cookie.set_cookie_header(&token));
    Ok((headers, Json(SuccessResponse { success: true })))
}

/// Clear the session credential.
#[utoipa::path(
    get,
    path = "/logout",
    tag = "Session",
    responses((status = 200, description = "Cookie cleared", body = SuccessResponse))
)]
pub async fn logout(State(state): State<AppState>) -> (HeaderMap, Json<SuccessResponse>) {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::SET_COOKIE,
        state.auth.cookie.delete_cookie_header(),
    );
    (headers, Json(SuccessResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::verify_token;

    #[tokio::test]
    async fn issue_session_sets_verifiable_cookie() {
        let state = AppState::default();
        let (headers, Json(body)) = issue_session(
            State(state.clone()),
            Json(IssueTokenRequest {
                email: "guest@x.com".into(),
            }),
        )
        .await
        .expect("issuance succeeds");

        assert!(body.success);

        let cookie = headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .expect("Set-Cookie present");
        assert!(cookie.contains("HttpOnly"));

        let token = cookie
            .strip_prefix("token=")
            .and_then(|rest| rest.split(';').next())
            .expect("cookie carries the token");
        let user = verify_token(token, &state.auth.secret).unwrap();
        assert_eq!(user.email, "guest@x.com");
    }

    #[tokio::test]
    async fn issue_session_rejects_blank_email() {
        let state = AppState::default();
        let err = issue_session(
            State(state),
            Json(IssueTokenRequest { email: "  ".into() }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn logout_expires_cookie() {
        let state = AppState::default();
        let (headers, Json(body)) = logout(State(state)).await;
        assert!(body.success);

        let cookie = headers
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
