// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`, `Deserialize`, and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## Room Id Type
//!
//! The [`RoomId`] newtype wraps the UUID identifier assigned to a room
//! listing at creation time. It provides type safety and clear semantics.
//!
//! ## Model Categories
//!
//! - **Profiles**: stored user identity, role, and verification status
//! - **Rooms**: room listings with a booked/available flag
//! - **Bookings**: ledger entries linking guest, host, and room

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Role;

// =============================================================================
// Room Id Type
// =============================================================================

/// UUID-backed room identifier.
///
/// Provides type safety for room references throughout the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(pub String);

impl RoomId {
    /// Generate a fresh room id.
    pub fn generate() -> Self {
        RoomId(Uuid::new_v4().to_string())
    }

    /// Parse a room id from its string form.
    ///
    /// Returns `None` when the value is not a well-formed UUID, so callers
    /// can report a malformed id the same way as an absent room.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw).ok().map(|id| RoomId(id.to_string()))
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RoomId {
    fn from(value: String) -> Self {
        RoomId(value)
    }
}

impl From<&str> for RoomId {
    fn from(value: &str) -> Self {
        RoomId(value.to_string())
    }
}

impl From<RoomId> for String {
    fn from(value: RoomId) -> Self {
        value.0
    }
}

// =============================================================================
// Identity References
// =============================================================================

/// Reference to a platform identity embedded in rooms and bookings.
///
/// Carries the unique email plus optional display fields so listings can be
/// rendered without a second profile lookup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PartyRef {
    /// Unique identity key.
    pub email: String,
    /// Display name, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image URL, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PartyRef {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            image: None,
        }
    }
}

// =============================================================================
// Profile Models
// =============================================================================

/// Host-verification status of a stored profile.
///
/// A guest asking to become a host moves to `Requested`; an admin granting
/// the role resolves it to `Verified`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub enum VerificationStatus {
    Requested,
    Verified,
}

/// Stored user identity record, keyed by email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct StoredProfile {
    /// Unique identity key.
    pub email: String,
    /// Platform role.
    pub role: Role,
    /// Host-verification status; absent until a request or grant happens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VerificationStatus>,
    /// Display name, if supplied at upsert time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image URL, if supplied at upsert time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Last record-update time.
    pub timestamp: DateTime<Utc>,
}

/// Fields a caller may supply when upserting a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VerificationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// What an upsert did to the stored record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// No record existed; one was created.
    Created,
    /// A pending host request was resolved by a status-only update.
    StatusUpdated,
    /// The record already existed with a settled status; nothing changed.
    Unchanged,
}

/// Response for profile upserts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpsertProfileResponse {
    pub outcome: UpsertOutcome,
    pub profile: StoredProfile,
}

/// Request body for the admin role grant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetRoleRequest {
    /// Role to assign; the grant also forces status to `Verified`.
    pub role: Role,
}

// =============================================================================
// Room Models
// =============================================================================

/// A room listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Owning host.
    pub host: PartyRef,
    /// Whether the latest committed booking decision holds this room.
    pub booked: bool,
    /// Nightly price in major currency units.
    pub price: f64,
    /// Human-readable location.
    pub location: String,
    /// Descriptive fields (amenities, photos, ...) the core does not inspect.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Request to create a room listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateRoomRequest {
    /// Owning host; the email must match the authenticated caller.
    pub host: PartyRef,
    /// Nightly price in major currency units.
    pub price: f64,
    /// Human-readable location.
    pub location: String,
    /// Opaque descriptive fields, stored as-is.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Request to set a room's booked flag directly.
///
/// This is the unconditional write used for cancellations and manual
/// overrides; booking acceptance goes through the conditional transition
/// on `POST /bookings` instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetBookedRequest {
    /// New value for the booked flag.
    pub status: bool,
}

// =============================================================================
// Booking Models
// =============================================================================

/// A booking ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Booking {
    /// Unique booking identifier.
    pub id: String,
    /// The guest who booked.
    pub guest: PartyRef,
    /// The host who owns the room, copied from the room at booking time.
    pub host: PartyRef,
    /// The booked room.
    pub room_id: RoomId,
    /// Free-text booking state (e.g. "reserved").
    pub status: String,
    /// Total price for the stay, in major currency units.
    pub price: f64,
    /// When the booking was recorded.
    pub created_at: DateTime<Utc>,
}

/// Request to book a room.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateBookingRequest {
    /// The room to book.
    pub room_id: RoomId,
    /// The booking guest.
    pub guest: PartyRef,
    /// Total price for the stay.
    pub price: f64,
    /// Initial booking state; defaults to "reserved".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Booking list response.
///
/// A missing email filter yields an empty list plus an explanatory message
/// rather than an error, matching the established client contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Payment Models
// =============================================================================

/// Request to create a payment authorization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntentRequest {
    /// Charge amount in major currency units (e.g. 25.00 USD).
    pub price: f64,
}

/// Payment authorization handle returned to the client.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntentResponse {
    /// Client secret the frontend hands to the payment widget.
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

// =============================================================================
// Session Models
// =============================================================================

/// Identity payload presented when requesting a session credential.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IssueTokenRequest {
    /// Identity email to embed in the credential.
    pub email: String,
}

/// Generic success acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}
