// SPDX-License-Identifier: MIT
//! Wire model for the remote `config.json` document.
//!
//! Every field is optional at the wire level — a partial document is a valid
//! document. Defaulting to presentable values happens in [`crate::policy`],
//! not here; this module only has to guarantee that whatever subset the site
//! operator wrote still deserializes.

use serde::Deserialize;

/// Root configuration object fetched from `/config.json`.
///
/// Immutable once fetched for the lifetime of a page evaluation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub maintenance: MaintenanceSection,
}

/// `site` section — identity of the hosting site.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: Option<String>,
}

/// `maintenance` section — the announcement itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MaintenanceSection {
    /// Master switch. Absent means disabled.
    pub enabled: bool,
    /// `"page"` or `"banner"`; anything else falls back to page mode.
    pub mode: Option<String>,
    /// `"info"`, `"warning"`, or `"danger"`; anything else falls back to warning.
    pub severity: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    pub submessage: Option<String>,
    /// Pages exempt from the announcement, matched by exact string equality
    /// against the normalized current path. No prefix or glob matching.
    pub allowed_paths: Vec<String>,
    pub status_page_path: Option<String>,
    pub show_icon: Option<bool>,
    pub show_status_button: Option<bool>,
    pub primary_button: Option<ButtonConfig>,
    pub secondary_button: Option<ButtonConfig>,
    pub window: WindowConfig,
    /// Rotating status lines for the full-page overlay.
    pub updates: Vec<String>,
}

/// An action link in the overlay header.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ButtonConfig {
    pub label: Option<String>,
    pub href: Option<String>,
}

/// `maintenance.window` — the announced maintenance window.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowConfig {
    /// ISO-8601 start timestamp.
    pub start: Option<String>,
    /// ISO-8601 expected-completion timestamp.
    pub eta: Option<String>,
    /// Starting progress percentage, clamped to [0, 100] downstream.
    pub progress: Option<f64>,
}
