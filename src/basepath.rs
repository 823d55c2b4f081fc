// SPDX-License-Identifier: MIT
//! Site base-path resolution.
//!
//! Static sites on pages-style hosting live under a repository prefix
//! (`https://user.github.io/repo/...`). [`BasePath`] detects that prefix from
//! the current location — or takes an explicit override — and exposes the two
//! capabilities every other component consumes: [`BasePath::build_url`] and
//! [`BasePath::normalized_path`]. Both always return a best-effort string;
//! there are no error conditions here.

/// Hostname suffix that signals pages-style subpath hosting.
const PAGES_HOST_SUFFIX: &str = "github.io";

/// The location of the page the engine is evaluating.
#[derive(Debug, Clone)]
pub struct SiteLocation {
    /// Scheme + host, e.g. `https://user.github.io`. No trailing slash.
    pub origin: String,
    /// Bare hostname, e.g. `user.github.io`.
    pub hostname: String,
    /// Absolute path of the current page, e.g. `/repo/status.html`.
    pub path: String,
}

impl SiteLocation {
    /// Build a location from an origin and a page path.
    ///
    /// The hostname is derived from the origin by stripping the scheme and
    /// any port suffix.
    pub fn new(origin: impl Into<String>, path: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        let without_scheme = origin
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&origin);
        let hostname = without_scheme
            .split(['/', ':'])
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            origin,
            hostname,
            path: path.into(),
        }
    }
}

/// Resolved site base path plus the location it was derived from.
///
/// Constructed once at startup and passed by reference into the config
/// fetcher and the renderer — no ambient globals.
#[derive(Debug, Clone)]
pub struct BasePath {
    /// `""` for root-hosted sites, `"/repo"` for subpath-hosted ones.
    base: String,
    location: SiteLocation,
}

impl BasePath {
    /// Detect the base path for `location`.
    ///
    /// A pages-style hostname with at least one path segment yields that
    /// first segment as the base. An explicit non-empty `override_base`
    /// always wins, with trailing slashes stripped.
    pub fn detect(location: SiteLocation, override_base: Option<&str>) -> Self {
        let mut base = String::new();

        if location.hostname.ends_with(PAGES_HOST_SUFFIX) {
            if let Some(first) = location.path.split('/').find(|s| !s.is_empty()) {
                base = format!("/{first}");
            }
        }

        if let Some(explicit) = override_base.filter(|s| !s.is_empty()) {
            base = explicit.trim_end_matches('/').to_string();
        }

        Self { base, location }
    }

    /// The detected base, `""` or `"/repo"`.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Scheme + host of the site, e.g. `https://user.github.io`.
    pub fn origin(&self) -> &str {
        &self.location.origin
    }

    /// Build an absolute-in-site URL for `path`.
    ///
    /// Empty input yields the site base plus `/`; otherwise the base is
    /// prefixed onto the path, inserting a `/` separator only when the path
    /// lacks a leading one.
    pub fn build_url(&self, path: &str) -> String {
        if path.is_empty() {
            return format!("{}/", self.base);
        }
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }

    /// The current page path with the base prefix stripped.
    ///
    /// A path that does not start with the base is returned unchanged; a
    /// path that strips to nothing becomes `/`.
    pub fn normalized_path(&self) -> String {
        if self.base.is_empty() {
            return self.location.path.clone();
        }
        match self.location.path.strip_prefix(&self.base) {
            Some("") => "/".to_string(),
            Some(rest) => rest.to_string(),
            None => self.location.path.clone(),
        }
    }
}
