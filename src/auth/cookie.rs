// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! Session cookie transport.
//!
//! The credential travels in an httpOnly cookie named `token`. Production
//! deployments sit behind HTTPS on a different origin than the frontend, so
//! they need `Secure; SameSite=None`; local development uses
//! `SameSite=Strict` without `Secure`.

use axum::http::{header, HeaderMap, HeaderValue};

/// Cookie name carrying the session credential.
pub const TOKEN_COOKIE: &str = "token";

/// Cookie lifetime, matching the token validity window.
const COOKIE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// SameSite policy for the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        }
    }
}

/// Session cookie configuration, derived from the deployment environment.
#[derive(Debug, Clone, Copy)]
pub struct CookieConfig {
    pub secure: bool,
    pub same_site: SameSite,
}

impl CookieConfig {
    /// Cookie policy for the given deployment environment.
    pub fn for_environment(production: bool) -> Self {
        if production {
            Self {
                secure: true,
                same_site: SameSite::None,
            }
        } else {
            Self {
                secure: false,
                same_site: SameSite::Strict,
            }
        }
    }

    /// Build the `Set-Cookie` value that installs a session credential.
    pub fn build_set_cookie(&self, token: &str) -> String {
        let mut cookie = format!("{TOKEN_COOKIE}={token}; HttpOnly");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str("; Path=/");
        cookie.push_str(&format!("; Max-Age={COOKIE_MAX_AGE_SECS}"));
        cookie
    }

    /// Build the `Set-Cookie` value that clears the session credential.
    pub fn build_delete_cookie(&self) -> String {
        let mut cookie = format!("{TOKEN_COOKIE}=; HttpOnly");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str("; Path=/; Max-Age=0");
        cookie
    }

    /// `Set-Cookie` header value installing a session credential.
    pub fn set_cookie_header(&self, token: &str) -> HeaderValue {
        HeaderValue::from_str(&self.build_set_cookie(token))
            .unwrap_or_else(|_| HeaderValue::from_static(""))
    }

    /// `Set-Cookie` header value clearing the session credential.
    pub fn delete_cookie_header(&self) -> HeaderValue {
        HeaderValue::from_str(&self.build_delete_cookie())
            .unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self::for_environment(false)
    }
}

/// Extract the session token from a request's `Cookie` header.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            if key == TOKEN_COOKIE {
                Some(value.to_string())
            } else {
                None
            }
        })
}
