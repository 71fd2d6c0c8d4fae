// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! StayVista Server - Booking Platform Access & Resource Coordinator
//!
//! This crate provides the access-control and resource-state core of the
//! StayVista short-term-rental platform: session authentication, role-gated
//! authorization, and mediated state transitions over user profiles, room
//! availability, and the booking ledger, plus payment-intent issuance.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Session authentication and role authorization (HS256 JWT)
//! - `store` - Shared in-memory store for profiles, rooms, and bookings
//! - `providers` - External service clients (Stripe)

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod state;
pub mod store;
