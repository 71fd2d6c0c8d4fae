// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        Booking, BookingListResponse, CreateBookingRequest, CreateRoomRequest, IssueTokenRequest,
        PartyRef, PaymentIntentRequest, PaymentIntentResponse, ProfilePatch, Room, RoomId,
        SetBookedRequest, SetRoleRequest, StoredProfile, SuccessResponse, UpsertProfileResponse,
    },
    state::AppState,
};

pub mod bookings;
pub mod payments;
pub mod rooms;
pub mod session;
pub mod users;

/// Build the application router.
///
/// The route table mirrors the established client contract, so several
/// paths keep their historical camelCase names.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/jwt", post(session::issue_session))
        .route("/logout", get(session::logout))
        .route("/users", get(users::list_users))
        .route("/users/{email}", put(users::upsert_user))
        .route("/userHost/{email}", put(users::grant_role))
        .route("/getUserRole/{email}", get(users::get_user_role))
        .route("/updateUser/{email}", put(users::update_user))
        .route("/rooms", get(rooms::list_rooms))
        .route("/rooms/{id}", get(rooms::get_room))
        .route("/hostRooms/{email}", get(rooms::host_rooms))
        .route("/saveRooms", post(rooms::create_room))
        .route("/updatedStatus/{id}", patch(rooms::update_booked_status))
        .route(
            "/bookings",
            get(bookings::guest_bookings).post(bookings::create_booking),
        )
        .route("/bookings/host", get(bookings::host_bookings))
        .route("/paymentIntent", post(payments::create_payment_intent))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        session::issue_session,
        session::logout,
        users::upsert_user,
        users::grant_role,
        users::get_user_role,
        users::list_users,
        users::update_user,
        rooms::list_rooms,
        rooms::get_room,
        rooms::host_rooms,
        rooms::create_room,
        rooms::update_booked_status,
        bookings::create_booking,
        bookings::guest_bookings,
        bookings::host_bookings,
        payments::create_payment_intent
    ),
    components(
        schemas(
            RoomId,
            PartyRef,
            Room,
            Booking,
            StoredProfile,
            ProfilePatch,
            UpsertProfileResponse,
            SetRoleRequest,
            CreateRoomRequest,
            SetBookedRequest,
            CreateBookingRequest,
            BookingListResponse,
            PaymentIntentRequest,
            PaymentIntentResponse,
            IssueTokenRequest,
            SuccessResponse
        )
    ),
    tags(
        (name = "Session", description = "Session credential issuance"),
        (name = "Users", description = "Profile upsert and role management"),
        (name = "Rooms", description = "Room listings and availability"),
        (name = "Bookings", description = "Booking ledger"),
        (name = "Payments", description = "Payment authorization")
    )
)]
struct ApiDoc;
