// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Chained relative-URL resolution
//!
//! Each page in the SSO flow posts to an action relative to that page's own
//! address, which the caller does not otherwise retain. The chain object keeps
//! the moving base: resolving a reference also makes the result the base for
//! the next resolution.

use url::Url;

use crate::error::Result;

/// Stateful URL resolver for one login sequence.
///
/// Create a fresh chain per sequence; state must not leak across sessions.
#[derive(Debug, Clone)]
pub struct UrlChain {
    base: Url,
}

impl UrlChain {
    /// Create a chain starting at the given base URL
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// Resolve a reference (absolute or relative) against the current base,
    /// and make the result the new base.
    pub fn resolve(&mut self, reference: &str) -> Result<Url> {
        let resolved = self.base.join(reference)?;
        self.base = resolved.clone();
        Ok(resolved)
    }

    /// The current base URL
    pub fn base(&self) -> &Url {
        &self.base
    }
}
