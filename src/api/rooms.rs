// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Room listing endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateRoomRequest, Room, RoomId, SetBookedRequest, SuccessResponse},
    state::AppState,
};

/// List all room listings.
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "Rooms",
    responses((status = 200, body = [Room]))
)]
pub async fn list_rooms(State(state): State<AppState>) -> Json<Vec<Room>> {
    let store = state.store.read().await;
    Json(store.list_rooms())
}

/// Fetch one room by id.
///
/// A malformed id is reported the same way as an absent room.
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    params(("id" = String, Path, description = "Room identifier")),
    tag = "Rooms",
    responses(
        (status = 200, body = Room),
        (status = 404, description = "Malformed or unknown room id"),
    )
)]
pub async fn get_room(
    Auth(_user): Auth,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Room>, ApiError> {
    let room_id = RoomId::parse(&id).ok_or_else(|| ApiError::not_found("Room not found"))?;

    let store = state.store.read().await;
    store
        .get_room(&room_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Room not found"))
}

/// List rooms owned by a host.
#[utoipa::path(
    get,
    path = "/hostRooms/{email}",
    params(("email" = String, Path, description = "Host identity email")),
    tag = "Rooms",
    responses((status = 200, body = [Room]))
)]
pub async fn host_rooms(
    Auth(_user): Auth,
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Json<Vec<Room>> {
    let store = state.store.read().await;
    Json(store.list_rooms_by_host(&email))
}

/// Create a room listing.
///
/// The submitted host email must match the authenticated caller.
#[utoipa::path(
    post,
    path = "/saveRooms",
    request_body = CreateRoomRequest,
    tag = "Rooms",
    responses(
        (status = 201, body = Room),
        (status = 401, description = "Missing or invalid session credential"),
        (status = 403, description = "Host email does not match the caller"),
    )
)]
pub async fn create_room(
    Auth(user): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    if request.host.email != user.email {
        return Err(ApiError::forbidden(
            "Room host must match the authenticated caller",
        ));
    }

    let mut store = state.store.write().await;
    let room = store.create_room(request);
    info!(room_id = %room.id, host = %room.host.email, "room created");
    Ok((StatusCode::CREATED, Json(room)))
}

/// Set a room's booked flag directly.
///
/// Unconditional write used for cancellations and manual overrides; booking
/// acceptance goes through `POST /bookings`.
#[utoipa::path(
    patch,
    path = "/updatedStatus/{id}",
    params(("id" = String, Path, description = "Room identifier")),
    request_body = SetBookedRequest,
    tag = "Rooms",
    responses(
        (status = 200, body = SuccessResponse),
        (status = 404, description = "Malformed or unknown room id"),
    )
)]
pub async fn update_booked_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetBookedRequest>,
) -> Result<Json<SuccessResponse>, ApiError> {
    let room_id = RoomId::parse(&id).ok_or_else(|| ApiError::not_found("Room not found"))?;

    let mut store = state.store.write().await;
    store.set_booked_status(&room_id, request.status)?;
    Ok(Json(SuccessResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::SessionUser;
    use crate::models::PartyRef;

    fn session(email: &str) -> SessionUser {
        SessionUser {
            email: email.to_string(),
            expires_at: 0,
        }
    }

    fn room_request(host_email: &str) -> CreateRoomRequest {
        CreateRoomRequest {
            host: PartyRef::new(host_email),
            price: 150.0,
            location: "Faro".into(),
            details: serde_json::Map::new(),
        }
    }

    #[tokio::test]
    async fn create_room_then_host_listing_includes_it() {
        let state = AppState::default();
        let (status, Json(room)) = create_room(
            Auth(session("h@x.com")),
            State(state.clone()),
            Json(room_request("h@x.com")),
        )
        .await
        .expect("room creation succeeds");

        assert_eq!(status, StatusCode::CREATED);
        assert!(!room.booked);

        let Json(rooms) = host_rooms(
            Auth(session("h@x.com")),
            State(state),
            Path("h@x.com".into()),
        )
        .await;
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, room.id);
    }

    #[tokio::test]
    async fn create_room_rejects_host_mismatch() {
        let state = AppState::default();
        let err = create_room(
            Auth(session("imposter@x.com")),
            State(state.clone()),
            Json(room_request("h@x.com")),
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::FORBIDDEN);
        assert!(state.store.read().await.list_rooms().is_empty());
    }

    #[tokio::test]
    async fn get_room_handles_malformed_and_unknown_ids() {
        let state = AppState::default();

        let err = get_room(
            Auth(session("g@x.com")),
            State(state.clone()),
            Path("definitely-not-a-uuid".into()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = get_room(
            Auth(session("g@x.com")),
            State(state),
            Path(RoomId::generate().to_string()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_booked_status_flips_flag() {
        let state = AppState::default();
        let room = {
            let mut store = state.store.write().await;
            store.create_room(room_request("h@x.com"))
        };

        let Json(ack) = update_booked_status(
            State(state.clone()),
            Path(room.id.to_string()),
            Json(SetBookedRequest { status: true }),
        )
        .await
        .unwrap();
        assert!(ack.success);

        let stored = state.store.read().await.get_room(&room.id).unwrap();
        assert!(stored.booked);
    }

    #[tokio::test]
    async fn list_rooms_is_public_and_complete() {
        let state = AppState::default();
        {
            let mut store = state.store.write().await;
            store.create_room(room_request("a@x.com"));
            store.create_room(room_request("b@x.com"));
        }

        let Json(rooms) = list_rooms(State(state)).await;
        assert_eq!(rooms.len(), 2);
    }
}
