// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Booking ledger endpoints.
//!
//! Booking acceptance is a single conditional transition under the store's
//! write lock: the room must still be available, the flag flips, and the
//! ledger entry is appended. The loser of a race gets 409.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;

use crate::{
    error::ApiError,
    models::{Booking, BookingListResponse, CreateBookingRequest},
    state::AppState,
};

#[derive(Deserialize, IntoParams)]
pub struct BookingQuery {
    /// Identity email to filter by; the response explains itself when absent.
    pub email: Option<String>,
}

/// Book a room and record the ledger entry.
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingRequest,
    tag = "Bookings",
    responses(
        (status = 201, body = Booking),
        (status = 404, description = "Unknown room"),
        (status = 409, description = "Room is already booked"),
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let mut store = state.store.write().await;
    let booking = store.book_room(request)?;
    info!(
        booking_id = %booking.id,
        room_id = %booking.room_id,
        guest = %booking.guest.email,
        "booking recorded"
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

/// List bookings made by a guest.
#[utoipa::path(
    get,
    path = "/bookings",
    params(BookingQuery),
    tag = "Bookings",
    responses((status = 200, body = BookingListResponse))
)]
pub async fn guest_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingQuery>,
) -> Json<BookingListResponse> {
    let Some(email) = params.email.filter(|e| !e.trim().is_empty()) else {
        return Json(BookingListResponse {
            bookings: Vec::new(),
            message: Some("no guest email provided".to_string()),
        });
    };

    let store = state.store.read().await;
    Json(BookingListResponse {
        bookings: store.list_bookings_by_guest(&email),
        message: None,
    })
}

/// List bookings received by a host.
#[utoipa::path(
    get,
    path = "/bookings/host",
    params(BookingQuery),
    tag = "Bookings",
    responses((status = 200, body = BookingListResponse))
)]
pub async fn host_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingQuery>,
) -> Json<BookingListResponse> {
    let Some(email) = params.email.filter(|e| !e.trim().is_empty()) else {
        return Json(BookingListResponse {
            bookings: Vec::new(),
            message: Some("no host email provided".to_string()),
        });
    };

    let store = state.store.read().await;
    Json(BookingListResponse {
        bookings: store.list_bookings_by_host(&email),
        message: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateRoomRequest, PartyRef, RoomId};

    async fn seeded_room(state: &AppState, host_email: &str) -> RoomId {
        let mut store = state.store.write().await;
        store
            .create_room(CreateRoomRequest {
                host: PartyRef::new(host_email),
                price: 90.0,
                location: "Braga".into(),
                details: serde_json::Map::new(),
            })
            .id
    }

    fn booking_request(room_id: RoomId, guest_email: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            room_id,
            guest: PartyRef::new(guest_email),
            price: 90.0,
            status: None,
        }
    }

    #[tokio::test]
    async fn booking_succeeds_then_second_attempt_conflicts() {
        let state = AppState::default();
        let room_id = seeded_room(&state, "h@x.com").await;

        let (status, Json(booking)) = create_booking(
            State(state.clone()),
            Json(booking_request(room_id.clone(), "first@x.com")),
        )
        .await
        .expect("first booking succeeds");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(booking.host.email, "h@x.com");

        let err = create_booking(
            State(state.clone()),
            Json(booking_request(room_id, "second@x.com")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::CONFLICT);

        let Json(listed) = host_bookings(
            State(state),
            Query(BookingQuery {
                email: Some("h@x.com".into()),
            }),
        )
        .await;
        assert_eq!(listed.bookings.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_bookings_accept_exactly_one() {
        let state = AppState::default();
        let room_id = seeded_room(&state, "h@x.com").await;

        let first = tokio::spawn({
            let state = state.clone();
            let request = booking_request(room_id.clone(), "alpha@x.com");
            async move { create_booking(State(state), Json(request)).await }
        });
        let second = tokio::spawn({
            let state = state.clone();
            let request = booking_request(room_id.clone(), "beta@x.com");
            async move { create_booking(State(state), Json(request)).await }
        });

        let results = [first.await.unwrap(), second.await.unwrap()];
        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1);

        let loser = results
            .iter()
            .find_map(|r| r.as_ref().err())
            .expect("one attempt conflicts");
        assert_eq!(loser.status, StatusCode::CONFLICT);

        let store = state.store.read().await;
        assert!(store.get_room(&room_id).unwrap().booked);
        assert_eq!(store.list_bookings_by_host("h@x.com").len(), 1);
    }

    #[tokio::test]
    async fn booking_unknown_room_is_not_found() {
        let state = AppState::default();
        let err = create_booking(
            State(state),
            Json(booking_request(RoomId::generate(), "g@x.com")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn missing_email_yields_explanatory_empty_response() {
        let state = AppState::default();

        let Json(guest) = guest_bookings(
            State(state.clone()),
            Query(BookingQuery { email: None }),
        )
        .await;
        assert!(guest.bookings.is_empty());
        assert!(guest.message.is_some());

        let Json(host) = host_bookings(
            State(state),
            Query(BookingQuery {
                email: Some("   ".into()),
            }),
        )
        .await;
        assert!(host.bookings.is_empty());
        assert!(host.message.is_some());
    }

    #[tokio::test]
    async fn guest_listing_filters_by_email() {
        let state = AppState::default();
        let room_a = seeded_room(&state, "hostA@x.com").await;
        let room_b = seeded_room(&state, "hostB@x.com").await;

        create_booking(
            State(state.clone()),
            Json(booking_request(room_a, "g@x.com")),
        )
        .await
        .unwrap();
        create_booking(
            State(state.clone()),
            Json(booking_request(room_b, "other@x.com")),
        )
        .await
        .unwrap();

        let Json(listed) = guest_bookings(
            State(state),
            Query(BookingQuery {
                email: Some("g@x.com".into()),
            }),
        )
        .await;
        assert_eq!(listed.bookings.len(), 1);
        assert_eq!(listed.bookings[0].guest.email, "g@x.com");
    }
}
