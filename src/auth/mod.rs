// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! # Authentication Module
//!
//! Session authentication and role authorization for the StayVista API.
//!
//! ## Auth Flow
//!
//! 1. Frontend posts the identity payload to `POST /jwt`
//! 2. Server signs an HS256 credential and sets it as an httpOnly `token`
//!    cookie
//! 3. On each privileged request the server:
//!    - extracts the `token` cookie
//!    - verifies signature and expiry (60s clock-skew leeway)
//!    - extracts the identity email for downstream use
//! 4. Admin-gated operations additionally look up the caller's *stored*
//!    profile and require role `admin`
//!
//! ## Security
//!
//! - The token is the sole source of truth for identity between requests;
//!   there is no server-side session store
//! - Role is never trusted from the token; it is read from the profile
//!   store at authorization time
//! - Fixed 365-day validity window, matching the cookie max-age

pub mod claims;
pub mod cookie;
pub mod error;
pub mod extractor;
pub mod roles;
pub mod token;

pub use claims::{SessionClaims, SessionUser};
pub use cookie::CookieConfig;
pub use error::AuthError;
pub use extractor::{AdminOnly, Auth};
pub use roles::Role;
