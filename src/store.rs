// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! In-memory store for profiles, rooms, and the booking ledger.
//!
//! The store is handed to handlers through `AppState` behind a tokio
//! `RwLock`, so every `&mut self` method here runs under the single write
//! lock and is atomic with respect to concurrent requests. That is what
//! makes [`InMemoryStore::book_room`] a safe check-then-act transition.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::auth::Role;
use crate::error::ApiError;
use crate::models::{
    Booking, CreateBookingRequest, CreateRoomRequest, ProfilePatch, Room, RoomId, StoredProfile,
    UpsertOutcome, VerificationStatus,
};

/// Default booking state for freshly accepted bookings.
const DEFAULT_BOOKING_STATUS: &str = "reserved";

#[derive(Default)]
pub struct InMemoryStore {
    profiles: HashMap<String, StoredProfile>,
    rooms: HashMap<RoomId, Room>,
    bookings: HashMap<String, Booking>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Profiles
    // =========================================================================

    pub fn get_profile(&self, email: &str) -> Option<StoredProfile> {
        self.profiles.get(email).cloned()
    }

    pub fn list_profiles(&self) -> Vec<StoredProfile> {
        self.profiles.values().cloned().collect()
    }

    /// Create-or-update a profile, keyed by email.
    ///
    /// Three branches:
    /// 1. no record: create one from the patch and stamp the current time;
    /// 2. record pending a host request (`status == Requested`): apply the
    ///    patch's status only, leaving role and display fields alone;
    /// 3. record with any other status: return it unchanged. Repeat calls
    ///    for a stable identity are no-ops.
    pub fn upsert_profile(
        &mut self,
        email: &str,
        patch: ProfilePatch,
    ) -> (UpsertOutcome, StoredProfile) {
        match self.profiles.get_mut(email) {
            None => {
                let profile = StoredProfile {
                    email: email.to_string(),
                    role: patch.role.unwrap_or_default(),
                    status: patch.status,
                    name: patch.name,
                    image: patch.image,
                    timestamp: Utc::now(),
                };
                self.profiles.insert(email.to_string(), profile.clone());
                (UpsertOutcome::Created, profile)
            }
            Some(existing) if existing.status == Some(VerificationStatus::Requested) => {
                if let Some(status) = patch.status {
                    existing.status = Some(status);
                    existing.timestamp = Utc::now();
                }
                (UpsertOutcome::StatusUpdated, existing.clone())
            }
            Some(existing) => (UpsertOutcome::Unchanged, existing.clone()),
        }
    }

    /// Unconditional profile merge with a fresh timestamp, upserting.
    pub fn update_profile(&mut self, email: &str, patch: ProfilePatch) -> StoredProfile {
        let profile = self
            .profiles
            .entry(email.to_string())
            .or_insert_with(|| StoredProfile {
                email: email.to_string(),
                role: Role::default(),
                status: None,
                name: None,
                image: None,
                timestamp: Utc::now(),
            });

        if let Some(role) = patch.role {
            profile.role = role;
        }
        if let Some(status) = patch.status {
            profile.status = Some(status);
        }
        if let Some(name) = patch.name {
            profile.name = Some(name);
        }
        if let Some(image) = patch.image {
            profile.image = Some(image);
        }
        profile.timestamp = Utc::now();

        profile.clone()
    }

    /// Admin-gated role grant. Sets the role and forces `status = Verified`,
    /// creating the record when the target has no profile yet.
    pub fn set_role(&mut self, email: &str, role: Role) -> StoredProfile {
        let profile = self
            .profiles
            .entry(email.to_string())
            .or_insert_with(|| StoredProfile {
                email: email.to_string(),
                role,
                status: None,
                name: None,
                image: None,
                timestamp: Utc::now(),
            });

        profile.role = role;
        profile.status = Some(VerificationStatus::Verified);
        profile.timestamp = Utc::now();

        profile.clone()
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    pub fn list_rooms(&self) -> Vec<Room> {
        self.rooms.values().cloned().collect()
    }

    pub fn get_room(&self, room_id: &RoomId) -> Option<Room> {
        self.rooms.get(room_id).cloned()
    }

    pub fn list_rooms_by_host(&self, host_email: &str) -> Vec<Room> {
        self.rooms
            .values()
            .filter(|room| room.host.email == host_email)
            .cloned()
            .collect()
    }

    /// Create a room listing. New rooms always start available.
    pub fn create_room(&mut self, request: CreateRoomRequest) -> Room {
        let id = RoomId::generate();
        let room = Room {
            id: id.clone(),
            host: request.host,
            booked: false,
            price: request.price,
            location: request.location,
            details: request.details,
        };
        self.rooms.insert(id, room.clone());
        room
    }

    /// Unconditional write of the booked flag.
    ///
    /// Used for cancellations and manual overrides. Booking acceptance must
    /// go through [`InMemoryStore::book_room`] instead.
    pub fn set_booked_status(&mut self, room_id: &RoomId, booked: bool) -> Result<(), ApiError> {
        match self.rooms.get_mut(room_id) {
            Some(room) => {
                room.booked = booked;
                Ok(())
            }
            None => Err(ApiError::not_found("Room not found")),
        }
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    /// Accept a booking as a single conditional transition.
    ///
    /// Verifies the room exists and is available, flips the flag, and
    /// appends the ledger entry. The loser of a race between two booking
    /// attempts observes `booked == true` and gets a conflict; the ledger
    /// never records a silent duplicate.
    pub fn book_room(&mut self, request: CreateBookingRequest) -> Result<Booking, ApiError> {
        let room = self
            .rooms
            .get_mut(&request.room_id)
            .ok_or_else(|| ApiError::not_found("Room not found"))?;

        if room.booked {
            return Err(ApiError::conflict("Room is already booked"));
        }
        room.booked = true;

        let booking = Booking {
            id: Uuid::new_v4().to_string(),
            guest: request.guest,
            host: room.host.clone(),
            room_id: request.room_id,
            status: request
                .status
                .unwrap_or_else(|| DEFAULT_BOOKING_STATUS.to_string()),
            price: request.price,
            created_at: Utc::now(),
        };
        self.bookings.insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    pub fn list_bookings_by_guest(&self, guest_email: &str) -> Vec<Booking> {
        self.bookings
            .values()
            .filter(|booking| booking.guest.email == guest_email)
            .cloned()
            .collect()
    }

    pub fn list_bookings_by_host(&self, host_email: &str) -> Vec<Booking> {
        self.bookings
            .values()
            .filter(|booking| booking.host.email == host_email)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartyRef;
    use axum::http::StatusCode;

    fn room_request(host_email: &str) -> CreateRoomRequest {
        CreateRoomRequest {
            host: PartyRef::new(host_email),
            price: 100.0,
            location: "Porto".into(),
            details: serde_json::Map::new(),
        }
    }

    fn booking_request(room_id: RoomId, guest_email: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            room_id,
            guest: PartyRef::new(guest_email),
            price: 100.0,
            status: None,
        }
    }

    #[test]
    fn upsert_creates_then_is_idempotent() {
        let mut store = InMemoryStore::new();
        let patch = ProfilePatch {
            role: Some(Role::Guest),
            name: Some("Ada".into()),
            ..Default::default()
        };

        let (outcome, created) = store.upsert_profile("a@x.com", patch.clone());
        assert_eq!(outcome, UpsertOutcome::Created);
        assert_eq!(created.role, Role::Guest);
        assert_eq!(created.name.as_deref(), Some("Ada"));

        let (outcome, repeat) = store.upsert_profile("a@x.com", patch);
        assert_eq!(outcome, UpsertOutcome::Unchanged);
        assert_eq!(repeat, created);
    }

    #[test]
    fn upsert_resolves_pending_host_request_status_only() {
        let mut store = InMemoryStore::new();
        store.upsert_profile(
            "b@x.com",
            ProfilePatch {
                status: Some(VerificationStatus::Requested),
                name: Some("Bea".into()),
                ..Default::default()
            },
        );

        let (outcome, updated) = store.upsert_profile(
            "b@x.com",
            ProfilePatch {
                status: Some(VerificationStatus::Verified),
                // Must not leak into the stored record in this branch.
                name: Some("Mallory".into()),
                role: Some(Role::Admin),
                ..Default::default()
            },
        );

        assert_eq!(outcome, UpsertOutcome::StatusUpdated);
        assert_eq!(updated.status, Some(VerificationStatus::Verified));
        assert_eq!(updated.name.as_deref(), Some("Bea"));
        assert_eq!(updated.role, Role::Guest);
    }

    #[test]
    fn upsert_without_status_leaves_pending_request_alone() {
        let mut store = InMemoryStore::new();
        store.upsert_profile(
            "c@x.com",
            ProfilePatch {
                status: Some(VerificationStatus::Requested),
                ..Default::default()
            },
        );

        let (outcome, profile) = store.upsert_profile("c@x.com", ProfilePatch::default());
        assert_eq!(outcome, UpsertOutcome::StatusUpdated);
        assert_eq!(profile.status, Some(VerificationStatus::Requested));
    }

    #[test]
    fn set_role_forces_verified_and_upserts() {
        let mut store = InMemoryStore::new();

        // No profile yet: the grant creates one.
        let granted = store.set_role("new@x.com", Role::Host);
        assert_eq!(granted.role, Role::Host);
        assert_eq!(granted.status, Some(VerificationStatus::Verified));

        // Existing profile: role and status both move.
        store.upsert_profile(
            "old@x.com",
            ProfilePatch {
                status: Some(VerificationStatus::Requested),
                ..Default::default()
            },
        );
        let granted = store.set_role("old@x.com", Role::Admin);
        assert_eq!(granted.role, Role::Admin);
        assert_eq!(granted.status, Some(VerificationStatus::Verified));
    }

    #[test]
    fn update_profile_merges_and_restamps() {
        let mut store = InMemoryStore::new();
        let first = store.update_profile(
            "d@x.com",
            ProfilePatch {
                name: Some("Dee".into()),
                ..Default::default()
            },
        );
        assert_eq!(first.role, Role::Guest);

        let second = store.update_profile(
            "d@x.com",
            ProfilePatch {
                image: Some("https://img.example/d.png".into()),
                ..Default::default()
            },
        );
        assert_eq!(second.name.as_deref(), Some("Dee"));
        assert_eq!(second.image.as_deref(), Some("https://img.example/d.png"));
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn rooms_filter_by_host() {
        let mut store = InMemoryStore::new();
        let mine = store.create_room(room_request("h@x.com"));
        store.create_room(room_request("other@x.com"));

        let rooms = store.list_rooms_by_host("h@x.com");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, mine.id);
        assert!(!rooms[0].booked);

        assert_eq!(store.list_rooms().len(), 2);
    }

    #[test]
    fn get_room_returns_none_for_unknown_id() {
        let store = InMemoryStore::new();
        assert!(store.get_room(&RoomId::generate()).is_none());
    }

    #[test]
    fn set_booked_status_is_unconditional_but_checks_existence() {
        let mut store = InMemoryStore::new();
        let room = store.create_room(room_request("h@x.com"));

        store.set_booked_status(&room.id, true).unwrap();
        assert!(store.get_room(&room.id).unwrap().booked);

        // Flipping back works regardless of prior state.
        store.set_booked_status(&room.id, false).unwrap();
        assert!(!store.get_room(&room.id).unwrap().booked);

        let err = store
            .set_booked_status(&RoomId::generate(), true)
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn book_room_flips_flag_and_records_booking() {
        let mut store = InMemoryStore::new();
        let room = store.create_room(room_request("h@x.com"));

        let booking = store
            .book_room(booking_request(room.id.clone(), "g@x.com"))
            .unwrap();
        assert_eq!(booking.room_id, room.id);
        assert_eq!(booking.host.email, "h@x.com");
        assert_eq!(booking.status, "reserved");
        assert!(store.get_room(&room.id).unwrap().booked);
    }

    #[test]
    fn second_booking_attempt_conflicts() {
        let mut store = InMemoryStore::new();
        let room = store.create_room(room_request("h@x.com"));

        store
            .book_room(booking_request(room.id.clone(), "first@x.com"))
            .unwrap();
        let err = store
            .book_room(booking_request(room.id.clone(), "second@x.com"))
            .unwrap_err();

        assert_eq!(err.status, StatusCode::CONFLICT);
        // Exactly one ledger entry survives.
        assert_eq!(store.list_bookings_by_host("h@x.com").len(), 1);
        assert!(store.list_bookings_by_guest("second@x.com").is_empty());
    }

    #[test]
    fn book_room_unknown_room_is_not_found() {
        let mut store = InMemoryStore::new();
        let err = store
            .book_room(booking_request(RoomId::generate(), "g@x.com"))
            .unwrap_err();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn bookings_filter_by_guest_and_host() {
        let mut store = InMemoryStore::new();
        let room_a = store.create_room(room_request("hostA@x.com"));
        let room_b = store.create_room(room_request("hostB@x.com"));

        store
            .book_room(booking_request(room_a.id.clone(), "g@x.com"))
            .unwrap();
        store
            .book_room(booking_request(room_b.id.clone(), "g@x.com"))
            .unwrap();

        assert_eq!(store.list_bookings_by_guest("g@x.com").len(), 2);
        assert_eq!(store.list_bookings_by_host("hostA@x.com").len(), 1);
        assert!(store.list_bookings_by_host("nobody@x.com").is_empty());
    }
}
