// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Portal session
//!
//! A [`Session`] owns the mutual-TLS transport, the persistent cookie jar and
//! the tenant subscription. Construction runs the bootstrap sequence once;
//! afterwards the session exposes the authenticated request primitives for
//! the lifetime of the process.

mod bootstrap;
mod form;
mod resolver;

pub use form::{extract_hidden_form, HiddenForm};
pub use resolver::UrlChain;

use std::sync::Arc;

use serde::Serialize;
use url::Url;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::http::{CookieJar, HttpClient, Response};

/// An authenticated portal session
#[derive(Debug)]
pub struct Session {
    http: HttpClient,
    jar: Arc<CookieJar>,
    config: SessionConfig,
}

impl Session {
    /// Connect to the portal: load the persisted cookie jar, build the
    /// transport and run the login bootstrap.
    ///
    /// Fails on a malformed identity PEM, an unreadable cookie file, any
    /// non-2xx response in the bootstrap sequence, or an ambiguous login page.
    pub async fn connect(config: SessionConfig) -> Result<Self> {
        let jar = Arc::new(CookieJar::load(&config.cookie_file)?);
        let http = HttpClient::new(&config, Arc::clone(&jar))?;

        bootstrap::run(&http, &config).await?;

        Ok(Self { http, jar, config })
    }

    /// Flush the cookie jar to disk so the next run can reuse the session
    pub fn save_cookies(&self) -> Result<()> {
        self.jar.save(&self.config.cookie_file)
    }

    /// The session's cookie jar
    pub fn cookie_jar(&self) -> &CookieJar {
        &self.jar
    }

    /// The tenant subscription code
    pub fn subscription(&self) -> &str {
        &self.config.subscription
    }

    /// The session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Authenticated GET
    pub async fn get(&self, url: Url) -> Result<Response> {
        self.http.get(url).await
    }

    /// Authenticated POST with a JSON payload
    pub async fn post_json<T: Serialize>(&self, url: Url, payload: &T) -> Result<Response> {
        self.http.post_json(url, payload).await
    }

    /// Authenticated PUT with a JSON payload
    pub async fn put_json<T: Serialize>(&self, url: Url, payload: &T) -> Result<Response> {
        self.http.put_json(url, payload).await
    }

    /// Resolve an API path against the configured portal root
    pub(crate) fn api_url(&self, path: &str) -> Result<Url> {
        Ok(self.config.portal_url.join(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOGIN_MARKER;
    use crate::error::Error;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> SessionConfig {
        let dir = tempfile::tempdir().unwrap();
        SessionConfig::new("test")
            .portal_url(Url::parse(&server.uri()).unwrap())
            .cookie_file(dir.into_path().join("cookies.json"))
    }

    fn login_page(action: &str, name: &str, value: &str) -> String {
        format!(
            r#"<html><body><form action="{action}" method="post">
                <input type="hidden" name="{name}" value="{value}">
            </form></body></html>"#
        )
    }

    #[tokio::test]
    async fn test_connect_skips_login_when_marker_absent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>portal</html>"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        Session::connect(config_for(&server)).await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_treats_empty_marker_value_as_authenticated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header(DEFAULT_LOGIN_MARKER, "")
                    .set_body_string("<html>portal</html>"),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        Session::connect(config_for(&server)).await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_runs_four_chained_posts() {
        let server = MockServer::start().await;

        // Probe: marker present, first form posts to an absolute path.
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header(DEFAULT_LOGIN_MARKER, "required")
                    .set_body_string(login_page("/auth/step1", "s1", "a")),
            )
            .expect(1)
            .mount(&server)
            .await;

        // Step 1: relative action "step2" must resolve against /auth/step1.
        Mock::given(method("POST"))
            .and(path("/auth/step1"))
            .and(body_string_contains("s1=a"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(login_page("step2", "s2", "b")),
            )
            .expect(1)
            .mount(&server)
            .await;

        // Step 2: "../sso/assert" climbs out of /auth/.
        Mock::given(method("POST"))
            .and(path("/auth/step2"))
            .and(body_string_contains("s2=b"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(login_page("../sso/assert", "s3", "c")),
            )
            .expect(1)
            .mount(&server)
            .await;

        // Step 3: absolute action back to the portal.
        let complete = format!("{}/complete", server.uri());
        Mock::given(method("POST"))
            .and(path("/sso/assert"))
            .and(body_string_contains("s3=c"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(login_page(&complete, "s4", "d")),
            )
            .expect(1)
            .mount(&server)
            .await;

        // Step 4: final hop, plain page.
        Mock::given(method("POST"))
            .and(path("/complete"))
            .and(body_string_contains("s4=d"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>welcome</html>"))
            .expect(1)
            .mount(&server)
            .await;

        Session::connect(config_for(&server)).await.unwrap();
    }

    #[tokio::test]
    async fn test_connect_aborts_on_non_2xx_probe() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("down for maintenance"))
            .mount(&server)
            .await;

        let err = Session::connect(config_for(&server)).await.unwrap_err();
        assert_eq!(err.status_code(), Some(503));
        assert!(err.to_string().contains("down for maintenance"));
    }

    #[tokio::test]
    async fn test_connect_aborts_on_ambiguous_login_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header(DEFAULT_LOGIN_MARKER, "required")
                    .set_body_string("<form action='/a'></form><form action='/b'></form>"),
            )
            .mount(&server)
            .await;

        let err = Session::connect(config_for(&server)).await.unwrap_err();
        assert!(matches!(err, Error::AmbiguousDocument(_)));
    }

    #[tokio::test]
    async fn test_saved_cookies_skip_login_in_fresh_session() {
        let dir = tempfile::tempdir().unwrap();
        let cookie_file = dir.path().join("cookies.json");

        // First run: the portal hands out a session cookie, no login needed.
        let first = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=abc; Path=/"),
            )
            .mount(&first)
            .await;

        let config = SessionConfig::new("test")
            .portal_url(Url::parse(&first.uri()).unwrap())
            .cookie_file(&cookie_file);
        let session = Session::connect(config).await.unwrap();
        session.save_cookies().unwrap();
        drop(session);

        // Fresh process, same file: the probe must present the cookie and the
        // portal answers without the marker, so no POST is ever issued.
        let second = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("cookie", "session=abc"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&second)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&second)
            .await;

        let config = SessionConfig::new("test")
            .portal_url(Url::parse(&second.uri()).unwrap())
            .cookie_file(&cookie_file);
        Session::connect(config).await.unwrap();
    }

    #[tokio::test]
    async fn test_xsrf_cookie_from_bootstrap_reaches_mutating_calls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "XSRF-TOKEN=tok123; Path=/"),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/x"))
            .and(header("x-xsrf-token", "tok123"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let session = Session::connect(config_for(&server)).await.unwrap();
        let url = session.api_url("/v2/x").unwrap();
        session
            .post_json(url, &serde_json::json!({"k": "v"}))
            .await
            .unwrap();

        // Jar state observable through the session as well.
        let root = Url::parse(&server.uri()).unwrap();
        assert_eq!(
            session.cookie_jar().get(&root, "XSRF-TOKEN"),
            Some("tok123".to_string())
        );
    }
}
