// SPDX-License-Identifier: MIT
//! Remote configuration fetch.
//!
//! One GET, no retries, no cache. Anything that goes wrong — connect error,
//! timeout, non-success status, unparseable body — yields `None`, and callers
//! treat `None` exactly like "maintenance disabled". A broken config must
//! never block the site, so failures are logged at debug level and swallowed.

use std::time::Duration;

use tracing::debug;

use crate::basepath::BasePath;
use crate::config::SiteConfig;

/// Site-relative location of the configuration document.
pub const CONFIG_PATH: &str = "/config.json";

const FETCH_TIMEOUT_SECS: u64 = 5;

/// HTTP client wrapper for the single config request.
pub struct ConfigFetcher {
    client: reqwest::Client,
}

impl Default for ConfigFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigFetcher {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Fetch `config.json` from the site the base path was resolved for.
    pub async fn fetch(&self, base: &BasePath) -> Option<SiteConfig> {
        let url = format!("{}{}", base.origin(), base.build_url(CONFIG_PATH));

        let response = match self
            .client
            .get(&url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                debug!(url = %url, err = %e, "config fetch failed — treating as no maintenance");
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(url = %url, status = %response.status(), "config fetch non-success — treating as no maintenance");
            return None;
        }

        match response.json::<SiteConfig>().await {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                debug!(url = %url, err = %e, "config body unparseable — treating as no maintenance");
                None
            }
        }
    }
}

/// Read a local configuration document with the same fail-open contract as
/// the network fetch.
pub fn read_config_file(path: &std::path::Path) -> Option<SiteConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            debug!(path = %path.display(), err = %e, "config file unreadable — treating as no maintenance");
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            debug!(path = %path.display(), err = %e, "config file unparseable — treating as no maintenance");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        assert!(read_config_file(std::path::Path::new("/nonexistent/config.json")).is_none());
    }

    #[test]
    fn unparseable_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(read_config_file(&path).is_none());
    }

    #[test]
    fn valid_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"maintenance":{"enabled":true}}"#).unwrap();
        let cfg = read_config_file(&path).expect("should parse");
        assert!(cfg.maintenance.enabled);
    }
}
