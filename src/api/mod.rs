// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Endpoint façade over the authenticated request layer
//!
//! Nothing here carries protocol state: each operation formats a tenant-scoped
//! URL against the portal root, calls the session's GET/POST/PUT primitives
//! and decodes the JSON shape of that resource.

mod types;

pub use types::{
    BuildMeta, BuildPage, BuildRequest, BuildResponse, DeploymentMeta, DeploymentPage,
    DeploymentRequest, DeploymentResponse, InitialPasswords, Properties,
};

use std::io::{Cursor, Read};

use bytes::Bytes;
use zip::ZipArchive;

use crate::error::Result;
use crate::session::Session;

fn builds_path(subscription: &str) -> String {
    format!("/v2/subscriptions/{subscription}/builds/")
}

fn build_logs_path(subscription: &str, code: &str) -> String {
    format!("/v2/subscriptions/{subscription}/builds/{code}/logs/")
}

fn deployments_path(subscription: &str) -> String {
    format!("/v2/subscriptions/{subscription}/deployments/")
}

fn passwords_path(subscription: &str, environment: &str) -> String {
    format!(
        "/v1/subscriptions/{subscription}/environments/{environment}\
         /serviceconfiguration/hcs_admin/property/initialpassword"
    )
}

fn properties_path(subscription: &str, environment: &str, aspect: &str) -> String {
    format!(
        "/v1/subscriptions/{subscription}/environments/{environment}\
         /serviceconfiguration/{aspect}/property/customer-properties"
    )
}

impl Session {
    /// List the 20 most recent builds, newest first
    pub async fn builds(&self) -> Result<Vec<BuildMeta>> {
        let path = format!(
            "{}?$top=20&$skip=0&$count=true&$orderby=buildStartTimestamp%20desc",
            builds_path(self.subscription())
        );
        let resp = self.get(self.api_url(&path)?).await?;
        let page: BuildPage = resp.json()?;
        Ok(page.value)
    }

    /// Get one build by code
    pub async fn build(&self, code: &str) -> Result<BuildMeta> {
        let path = format!("{}{code}", builds_path(self.subscription()));
        self.get(self.api_url(&path)?).await?.json()
    }

    /// Create a build from a branch
    pub async fn create_build(&self, name: &str, branch: &str) -> Result<BuildResponse> {
        let url = self.api_url(&builds_path(self.subscription()))?;
        let build = BuildRequest::new(self.subscription(), name, branch);
        self.post_json(url, &build).await?.json()
    }

    /// Fetch the logs of a build. The portal delivers a zip archive holding a
    /// single log file; the archive is unpacked in memory and the contents of
    /// its first entry returned.
    pub async fn build_logs(&self, code: &str) -> Result<Bytes> {
        let url = self.api_url(&build_logs_path(self.subscription(), code))?;
        let resp = self.get(url).await?;

        let mut archive = ZipArchive::new(Cursor::new(resp.body.as_ref()))?;
        let mut log = archive.by_index(0)?;
        let mut contents = Vec::with_capacity(log.size() as usize);
        log.read_to_end(&mut contents)?;
        Ok(Bytes::from(contents))
    }

    /// Schedule a deployment of a release to an environment
    pub async fn create_deployment(
        &self,
        environment: &str,
        migration_mode: &str,
        deployment_mode: &str,
        release: &str,
    ) -> Result<DeploymentResponse> {
        let url = self.api_url(&deployments_path(self.subscription()))?;
        let deployment =
            DeploymentRequest::new(environment, migration_mode, deployment_mode, release);
        self.post_json(url, &deployment).await?.json()
    }

    /// List recent deployments of an environment, newest first
    pub async fn deployments(&self, environment: &str) -> Result<DeploymentPage> {
        self.deployments_page(environment, 12).await
    }

    /// Get the currently running deployment of an environment, if any
    pub async fn running_deployments(&self, environment: &str) -> Result<DeploymentPage> {
        self.deployments_page(environment, 1).await
    }

    async fn deployments_page(&self, environment: &str, top: usize) -> Result<DeploymentPage> {
        let path = format!(
            "{}?environmentCode={environment}&$top={top}&$skip=0&$count=true\
             &$orderby=scheduledTimestamp%20desc",
            deployments_path(self.subscription())
        );
        self.get(self.api_url(&path)?).await?.json()
    }

    /// Get the initial admin passwords of an environment
    pub async fn initial_passwords(&self, environment: &str) -> Result<InitialPasswords> {
        let url = self.api_url(&passwords_path(self.subscription(), environment))?;
        self.get(url).await?.json()
    }

    /// Get the customer properties of a configuration aspect
    pub async fn customer_properties(&self, environment: &str, aspect: &str) -> Result<Properties> {
        let url = self.api_url(&properties_path(self.subscription(), environment, aspect))?;
        self.get(url).await?.json()
    }

    /// Replace the customer properties of a configuration aspect
    pub async fn set_customer_properties(
        &self,
        environment: &str,
        aspect: &str,
        value: &str,
    ) -> Result<Properties> {
        let url = self.api_url(&properties_path(self.subscription(), environment, aspect))?;
        let update = Properties::new("customer-properties", value);
        self.put_json(url, &update).await?.json()
    }
}
