// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session configuration
//!
//! The portal root URL is injected here rather than living in a global, so
//! independent configurations (production portal, test doubles) can coexist
//! in one process.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Default portal root
pub const DEFAULT_PORTAL_URL: &str = "https://portal.commerce.ondemand.com/";

/// Response header the portal sets when the SSO login chain must run
pub const DEFAULT_LOGIN_MARKER: &str = "com.sap.cloud.security.login";

/// Default user agent string
pub const DEFAULT_USER_AGENT: &str = concat!("ccportal/", env!("CARGO_PKG_VERSION"));

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Portal root URL; all API paths and login step 1 resolve against it
    pub portal_url: Url,
    /// Tenant subscription code
    pub subscription: String,
    /// Client certificate and private key, PEM, for mutual TLS.
    /// Required against the real portal; omitted for plain-HTTP test servers.
    pub identity_pem: Option<Vec<u8>>,
    /// Path of the persisted cookie file
    pub cookie_file: PathBuf,
    /// Name of the login-marker response header
    pub login_marker: String,
    /// User agent string
    pub user_agent: String,
    /// Per-request timeout. None means a hung portal call blocks indefinitely.
    pub timeout: Option<Duration>,
}

impl SessionConfig {
    /// Create a config for the given subscription against the default portal
    pub fn new(subscription: impl Into<String>) -> Self {
        Self {
            portal_url: Url::parse(DEFAULT_PORTAL_URL).expect("default portal URL is valid"),
            subscription: subscription.into(),
            identity_pem: None,
            cookie_file: PathBuf::from("portal-cookies.json"),
            login_marker: DEFAULT_LOGIN_MARKER.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }

    /// Set the portal root URL
    pub fn portal_url(mut self, url: Url) -> Self {
        self.portal_url = url;
        self
    }

    /// Set the mutual-TLS identity from separate certificate and key PEM blocks
    pub fn identity_pem(mut self, cert_pem: &[u8], key_pem: &[u8]) -> Self {
        let mut pem = Vec::with_capacity(cert_pem.len() + key_pem.len() + 1);
        pem.extend_from_slice(cert_pem);
        if !cert_pem.ends_with(b"\n") {
            pem.push(b'\n');
        }
        pem.extend_from_slice(key_pem);
        self.identity_pem = Some(pem);
        self
    }

    /// Set the cookie file path
    pub fn cookie_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookie_file = path.into();
        self
    }

    /// Set the login-marker header name
    pub fn login_marker(mut self, header: impl Into<String>) -> Self {
        self.login_marker = header.into();
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
