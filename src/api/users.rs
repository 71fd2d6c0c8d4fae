// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Profile endpoints: idempotent upsert, admin role grant, and reads.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;

use crate::{
    auth::{AdminOnly, Auth},
    error::ApiError,
    models::{ProfilePatch, SetRoleRequest, StoredProfile, UpsertProfileResponse},
    state::AppState,
};

/// Idempotent create-or-update of a user profile.
///
/// New identities get a record with a fresh timestamp; a pending host
/// request is resolved by a status-only update; anything else is a no-op
/// that returns the stored record.
#[utoipa::path(
    put,
    path = "/users/{email}",
    params(("email" = String, Path, description = "Identity email")),
    request_body = ProfilePatch,
    tag = "Users",
    responses((status = 200, body = UpsertProfileResponse))
)]
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<UpsertProfileResponse>, ApiError> {
    let mut store = state.store.write().await;
    let (outcome, profile) = store.upsert_profile(&email, patch);
    Ok(Json(UpsertProfileResponse { outcome, profile }))
}

/// Grant a role to a user and mark the profile `Verified`.
///
/// Admin-gated: the caller's *stored* role must be `admin`.
#[utoipa::path(
    put,
    path = "/userHost/{email}",
    params(("email" = String, Path, description = "Target identity email")),
    request_body = SetRoleRequest,
    tag = "Users",
    responses(
        (status = 200, body = StoredProfile),
        (status = 401, description = "Missing or invalid session credential"),
        (status = 403, description = "Caller is not an admin"),
    )
)]
pub async fn grant_role(
    AdminOnly(admin): AdminOnly,
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(request): Json<SetRoleRequest>,
) -> Result<Json<StoredProfile>, ApiError> {
    let mut store = state.store.write().await;
    let profile = store.set_role(&email, request.role);
    info!(granted_by = %admin.email, target = %email, role = %request.role, "role granted");
    Ok(Json(profile))
}

/// Fetch a stored profile, used by clients to determine UI capability.
#[utoipa::path(
    get,
    path = "/getUserRole/{email}",
    params(("email" = String, Path, description = "Identity email")),
    tag = "Users",
    responses(
        (status = 200, body = StoredProfile),
        (status = 404, description = "No profile for this email"),
    )
)]
pub async fn get_user_role(
    Auth(_user): Auth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<StoredProfile>, ApiError> {
    let store = state.store.read().await;
    store
        .get_profile(&email)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User not found"))
}

/// List all stored profiles.
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses((status = 200, body = [StoredProfile]))
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<StoredProfile>> {
    let store = state.store.read().await;
    Json(store.list_profiles())
}

/// Unconditional profile merge with a fresh timestamp, upserting.
#[utoipa::path(
    put,
    path = "/updateUser/{email}",
    params(("email" = String, Path, description = "Identity email")),
    request_body = ProfilePatch,
    tag = "Users",
    responses((status = 200, body = StoredProfile))
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(patch): Json<ProfilePatch>,
) -> Json<StoredProfile> {
    let mut store = state.store.write().await;
    Json(store.update_profile(&email, patch))
}
