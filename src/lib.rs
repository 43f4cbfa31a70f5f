// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # ccportal - SAP Commerce Cloud portal client
//!
//! Client for the CCv2 portal API behind SAP's SSO. Handles the part that is
//! actually hard: establishing an authenticated session. The portal fronts a
//! federated login flow of chained redirect/form pages; this crate walks that
//! chain, keeps the resulting cookies in a file-backed jar so later runs skip
//! the login entirely, and echoes the portal's XSRF token on mutating calls.
//!
//! ## Features
//!
//! - Session bootstrap: fixed-depth SSO form chain with relative-URL chaining
//! - Mutual TLS: client-certificate identity on every request
//! - Persistent cookie jar: survives process restarts, saved on demand
//! - XSRF propagation: `XSRF-TOKEN` cookie echoed as `x-xsrf-token` header
//! - Typed endpoints: builds, deployments, initial passwords, customer properties
//!
//! ## Example
//!
//! ```rust,no_run
//! use ccportal::{Session, SessionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let cert = std::fs::read("client.crt")?;
//!     let key = std::fs::read("client.key")?;
//!
//!     let config = SessionConfig::new("mytenant")
//!         .identity_pem(&cert, &key)
//!         .cookie_file("portal-cookies.json");
//!
//!     let session = Session::connect(config).await?;
//!
//!     for build in session.builds().await? {
//!         println!("{} {} ({})", build.code, build.name, build.status);
//!     }
//!
//!     session.save_cookies()?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

// Re-exports for convenience

// Session and configuration
pub use config::SessionConfig;
pub use session::{Session, UrlChain};

// Form extraction
pub use session::{extract_hidden_form, HiddenForm};

// Errors
pub use error::{Error, Result};

// HTTP
pub use http::{Cookie, CookieJar, HttpClient, Response};

// Endpoint types
pub use api::{
    BuildMeta, BuildPage, BuildRequest, BuildResponse, DeploymentMeta, DeploymentPage,
    DeploymentRequest, DeploymentResponse, InitialPasswords, Properties,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
