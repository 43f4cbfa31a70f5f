// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Authenticated request layer
//!
//! Thin wrapper over one shared reqwest transport: mutual-TLS identity, the
//! session's persistent cookie jar, and the uniform 2xx-or-fail contract.
//! JSON verbs echo the portal's `XSRF-TOKEN` cookie back as a request header.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::redirect::Policy;
use reqwest::{Client, Identity, Method};
use serde::Serialize;
use tracing::{debug, error};
use url::Url;

use super::cookie::CookieJar;
use super::response::Response;
use super::{XSRF_COOKIE, XSRF_HEADER};
use crate::config::SessionConfig;
use crate::error::{Error, Result};

/// Maximum redirect hops the transport follows within one call
const MAX_REDIRECTS: usize = 10;

/// HTTP client bound to one session identity and cookie jar
#[derive(Clone)]
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    jar: Arc<CookieJar>,
}

impl HttpClient {
    /// Build the transport from the session configuration.
    ///
    /// A malformed identity PEM is fatal here; nothing downstream can work
    /// without the client certificate.
    pub fn new(config: &SessionConfig, jar: Arc<CookieJar>) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .cookie_provider(Arc::clone(&jar));

        if let Some(ref pem) = config.identity_pem {
            builder = builder.identity(Identity::from_pem(pem)?);
        }

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            jar,
        })
    }

    /// The session's cookie jar
    pub fn jar(&self) -> &Arc<CookieJar> {
        &self.jar
    }

    /// Execute a GET request
    pub async fn get(&self, url: Url) -> Result<Response> {
        debug!(%url, "GET");
        let resp = self.client.get(url.clone()).send().await?;
        self.checked(Method::GET, url, resp).await
    }

    /// Submit a URL-encoded form POST (login chain steps)
    pub async fn post_form(&self, url: Url, fields: &HashMap<String, String>) -> Result<Response> {
        debug!(%url, fields = fields.len(), "POST form");
        let resp = self.client.post(url.clone()).form(fields).send().await?;
        self.checked(Method::POST, url, resp).await
    }

    /// POST a JSON payload
    pub async fn post_json<T: Serialize>(&self, url: Url, payload: &T) -> Result<Response> {
        self.send_json(Method::POST, url, payload).await
    }

    /// PUT a JSON payload
    pub async fn put_json<T: Serialize>(&self, url: Url, payload: &T) -> Result<Response> {
        self.send_json(Method::PUT, url, payload).await
    }

    async fn send_json<T: Serialize>(
        &self,
        method: Method,
        url: Url,
        payload: &T,
    ) -> Result<Response> {
        debug!(%url, method = %method, "JSON request");
        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .json(payload);

        // The portal requires the XSRF-TOKEN cookie echoed on mutating calls.
        if let Some(token) = self.jar.get(&url, XSRF_COOKIE) {
            request = request.header(XSRF_HEADER, token);
        }

        let resp = request.send().await?;
        self.checked(method, url, resp).await
    }

    /// Read the whole body and enforce the 2xx contract. On any other status
    /// the body is dumped to the diagnostic stream and carried in the error.
    async fn checked(
        &self,
        method: Method,
        url: Url,
        resp: reqwest::Response,
    ) -> Result<Response> {
        let status = resp.status();
        let headers = resp.headers().clone();
        let final_url = resp.url().clone();
        let body = resp.bytes().await?;

        let response = Response::new(status, headers, body, final_url);
        if !response.is_success() {
            let body = response.text_lossy();
            error!(
                %url,
                status = status.as_u16(),
                "expected HTTP 2xx status:\n{}", body
            );
            return Err(Error::status(
                method.as_str(),
                url.as_str(),
                status.as_u16(),
                body,
            ));
        }

        Ok(response)
    }
}
