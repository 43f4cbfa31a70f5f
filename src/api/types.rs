// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! JSON shapes of the portal's build, deployment and property resources

use serde::{Deserialize, Serialize};

/// Metadata of one build
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildMeta {
    pub code: String,
    pub name: String,
    pub branch: String,
    pub status: String,
    pub build_version: String,
    pub build_start_timestamp: Option<String>,
    pub build_end_timestamp: Option<String>,
}

/// One page of the builds listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildPage {
    pub count: Option<i64>,
    pub value: Vec<BuildMeta>,
}

/// Payload for creating a build
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildRequest {
    pub subscription_code: String,
    pub name: String,
    pub branch: String,
}

impl BuildRequest {
    /// Create a build request for a subscription
    pub fn new(
        subscription: impl Into<String>,
        name: impl Into<String>,
        branch: impl Into<String>,
    ) -> Self {
        Self {
            subscription_code: subscription.into(),
            name: name.into(),
            branch: branch.into(),
        }
    }
}

/// Response to a build creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildResponse {
    pub code: String,
}

/// Payload for scheduling a deployment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRequest {
    pub environment_code: String,
    pub migration_mode: String,
    pub deployment_mode: String,
    pub release_id: String,
}

impl DeploymentRequest {
    /// Create a deployment request
    pub fn new(
        environment: impl Into<String>,
        migration_mode: impl Into<String>,
        deployment_mode: impl Into<String>,
        release: impl Into<String>,
    ) -> Self {
        Self {
            environment_code: environment.into(),
            migration_mode: migration_mode.into(),
            deployment_mode: deployment_mode.into(),
            release_id: release.into(),
        }
    }
}

/// Response to a deployment creation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentResponse {
    pub code: String,
}

/// Metadata of one deployment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentMeta {
    pub code: String,
    pub environment_code: String,
    pub release_id: String,
    pub status: String,
    pub scheduled_timestamp: Option<String>,
}

/// One page of the deployments listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeploymentPage {
    pub count: Option<i64>,
    pub value: Vec<DeploymentMeta>,
}

/// Initial admin passwords of an environment, exposed as a service
/// configuration property
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InitialPasswords {
    pub key: String,
    pub value: String,
}

/// A customer-properties configuration value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Properties {
    pub key: String,
    pub value: String,
}

impl Properties {
    /// Create a property payload
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
