// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 StayVista

//! # Runtime Configuration Constants
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! at startup.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8000` |
//! | `ACCESS_TOKEN_SECRET` | HS256 signing secret for session credentials | Required for production |
//! | `APP_ENV` | Deployment environment (`production` hardens cookies) | `development` |
//! | `CORS_ORIGINS` | Comma-separated origins allowed to call the API | permissive (dev only) |
//! | `STRIPE_SECRET_KEY` | Stripe API secret key | Payments disabled when absent |
//! | `STRIPE_API_BASE_URL` | Stripe API base URL override | `https://api.stripe.com` |
//! | `STRIPE_CURRENCY` | Charge currency | `usd` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

/// Environment variable name for the session-credential signing secret.
pub const ACCESS_TOKEN_SECRET_ENV: &str = "ACCESS_TOKEN_SECRET";

/// Environment variable name for the deployment environment.
///
/// When set to `production`, session cookies are issued with
/// `Secure; SameSite=None` for cross-origin frontends.
pub const APP_ENV: &str = "APP_ENV";

/// Environment variable name for the comma-separated CORS allow-list.
pub const CORS_ORIGINS_ENV: &str = "CORS_ORIGINS";

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
