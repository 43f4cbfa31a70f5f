// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP layer for the portal client
//!
//! Provides the shared transport with mutual-TLS identity, the persistent
//! cookie jar, and the authenticated GET/POST/PUT primitives.

mod client;
mod cookie;
mod response;

pub use client::HttpClient;
pub use cookie::{Cookie, CookieJar};
pub use response::Response;

/// Cookie the portal issues for CSRF protection
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Request header the portal expects the token echoed in
pub const XSRF_HEADER: &str = "x-xsrf-token";
