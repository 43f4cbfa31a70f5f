// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session bootstrap
//!
//! Probes the portal root once; if the login-marker header is present, runs
//! the SSO form chain. The federated flow is a fixed-depth sequence (login
//! page, identity provider, assertion, return to portal), so the depth is
//! hard-coded rather than looping until authenticated.

use tracing::{debug, info};

use super::form::extract_hidden_form;
use super::resolver::UrlChain;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::http::HttpClient;

/// Number of chained form submissions in the portal's SSO flow
const LOGIN_CHAIN_DEPTH: usize = 4;

/// Run the bootstrap sequence. Returns once the session is authenticated.
///
/// No verification probe is issued after the final step; the portal's chain
/// has a fixed depth and the next API call surfaces any residual failure.
pub(crate) async fn run(http: &HttpClient, config: &SessionConfig) -> Result<()> {
    let mut chain = UrlChain::new(config.portal_url.clone());

    let probe = http.get(config.portal_url.clone()).await?;
    // Only a marker header with a non-empty value demands a login.
    let login_required = probe
        .header(&config.login_marker)
        .is_some_and(|v| !v.is_empty());
    if !login_required {
        debug!("persisted cookies still valid, skipping login chain");
        return Ok(());
    }

    info!("session expired, logging in");
    let mut body = probe.text_lossy();
    for step in 1..=LOGIN_CHAIN_DEPTH {
        let form = extract_hidden_form(&body)?;
        let action = chain.resolve(&form.action)?;
        debug!(step, action = %action, fields = form.fields.len(), "submitting login form");
        let resp = http.post_form(action, &form.fields).await?;
        body = resp.text_lossy();
    }

    Ok(())
}
