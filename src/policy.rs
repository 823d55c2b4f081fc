// SPDX-License-Identifier: MIT
//! Maintenance policy evaluation.
//!
//! [`evaluate`] interprets a fetched [`SiteConfig`] for the current page and
//! produces a [`Decision`]: either skip (nothing to announce here) or a fully
//! defaulted [`MaintenancePolicy`] ready for rendering. Evaluation is pure —
//! no I/O, no clock reads — which is what keeps the whole decision surface
//! unit-testable.
//!
//! Every default is applied independently, so arbitrarily partial
//! configuration documents are valid input. Unknown `mode` or `severity`
//! values fall back to the documented defaults rather than erroring; the
//! announcement layer never has a reason to take the site down.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::{ButtonConfig, SiteConfig};

pub const DEFAULT_SITE_NAME: &str = "SafeStack";
pub const DEFAULT_TITLE: &str = "Under Maintenance";
pub const DEFAULT_MESSAGE: &str = "We’re deploying updates.";
pub const DEFAULT_STATUS_PAGE_PATH: &str = "/status.html";
pub const DEFAULT_PROGRESS: u8 = 65;

/// Rotating status lines used when the document provides none.
pub const DEFAULT_UPDATES: [&str; 4] = [
    "Deploying updates",
    "Running checks",
    "Warming caches",
    "Verifying routes",
];

/// Announcement mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Blocking full-viewport overlay. The default.
    Page,
    /// Non-blocking strip at the top of the page.
    Banner,
}

impl Mode {
    /// Exact match on `"banner"`; absent or anything else means page mode.
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("banner") => Mode::Banner,
            _ => Mode::Page,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Page => write!(f, "page"),
            Mode::Banner => write!(f, "banner"),
        }
    }
}

/// Announcement severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Danger,
}

impl Severity {
    /// Lowercased exact match against the three known names; anything else
    /// falls back to warning.
    fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.to_ascii_lowercase()).as_deref() {
            Some("info") => Severity::Info,
            Some("danger") => Severity::Danger,
            _ => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// An action link shown in the overlay header.
#[derive(Debug, Clone, Serialize)]
pub struct ActionButton {
    pub label: String,
    pub href: String,
}

/// The announced maintenance window.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenanceWindow {
    pub start: Option<DateTime<Utc>>,
    pub eta: Option<DateTime<Utc>>,
    /// Clamped to [0, 100].
    pub progress: u8,
}

/// The resolved, fully defaulted description of what to announce.
#[derive(Debug, Clone, Serialize)]
pub struct MaintenancePolicy {
    pub site_name: String,
    pub mode: Mode,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub submessage: String,
    pub allowed_paths: Vec<String>,
    pub status_page_path: String,
    pub show_icon: bool,
    pub show_status_button: bool,
    pub primary_button: ActionButton,
    pub secondary_button: ActionButton,
    pub window: MaintenanceWindow,
    /// Never empty — falls back to [`DEFAULT_UPDATES`].
    pub updates: Vec<String>,
}

/// Why nothing was announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No configuration document was available (fail-open).
    NoConfig,
    /// `maintenance.enabled` is absent or false.
    Disabled,
    /// The current page is listed in `allowedPaths`.
    PathExempt,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoConfig => write!(f, "no config"),
            SkipReason::Disabled => write!(f, "maintenance disabled"),
            SkipReason::PathExempt => write!(f, "path exempt"),
        }
    }
}

/// Outcome of evaluating a configuration against the current page.
#[derive(Debug, Clone)]
pub enum Decision {
    Skip(SkipReason),
    Announce(MaintenancePolicy),
}

impl Decision {
    pub fn is_skip(&self) -> bool {
        matches!(self, Decision::Skip(_))
    }
}

/// Evaluate `config` for the page at `current_path`.
///
/// `current_path` is expected to be the normalized path (base prefix already
/// stripped) — see [`crate::basepath::BasePath::normalized_path`].
pub fn evaluate(config: Option<&SiteConfig>, current_path: &str) -> Decision {
    let Some(cfg) = config else {
        return Decision::Skip(SkipReason::NoConfig);
    };

    let m = &cfg.maintenance;
    if !m.enabled {
        return Decision::Skip(SkipReason::Disabled);
    }
    if m.allowed_paths.iter().any(|p| p == current_path) {
        return Decision::Skip(SkipReason::PathExempt);
    }

    let status_page_path = m
        .status_page_path
        .clone()
        .unwrap_or_else(|| DEFAULT_STATUS_PAGE_PATH.to_string());

    let progress = m
        .window
        .progress
        .unwrap_or(f64::from(DEFAULT_PROGRESS))
        .clamp(0.0, 100.0)
        .round() as u8;

    let updates = if m.updates.is_empty() {
        DEFAULT_UPDATES.iter().map(|s| s.to_string()).collect()
    } else {
        m.updates.clone()
    };

    Decision::Announce(MaintenancePolicy {
        site_name: cfg
            .site
            .name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_NAME.to_string()),
        mode: Mode::parse(m.mode.as_deref()),
        severity: Severity::parse(m.severity.as_deref()),
        title: m
            .title
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        message: m
            .message
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string()),
        submessage: m.submessage.clone().unwrap_or_default(),
        allowed_paths: m.allowed_paths.clone(),
        show_icon: m.show_icon.unwrap_or(true),
        show_status_button: m.show_status_button.unwrap_or(true),
        primary_button: button_or(
            m.primary_button.as_ref(),
            "View Status",
            &status_page_path,
        ),
        secondary_button: button_or(m.secondary_button.as_ref(), "Back to Home", "/index.html"),
        window: MaintenanceWindow {
            start: parse_timestamp(m.window.start.as_deref()),
            eta: parse_timestamp(m.window.eta.as_deref()),
            progress,
        },
        updates,
        status_page_path,
    })
}

/// Apply per-field defaults to a button: label and href fall back
/// independently, so `{"label": "Hold on"}` still gets the default link.
fn button_or(raw: Option<&ButtonConfig>, default_label: &str, default_href: &str) -> ActionButton {
    let label = raw
        .and_then(|b| b.label.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default_label.to_string());
    let href = raw
        .and_then(|b| b.href.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default_href.to_string());
    ActionButton { label, href }
}

/// Parse an optional ISO-8601 timestamp; unparseable input counts as absent.
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> SiteConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn no_config_skips() {
        assert!(matches!(
            evaluate(None, "/index.html"),
            Decision::Skip(SkipReason::NoConfig)
        ));
    }

    #[test]
    fn disabled_or_absent_maintenance_skips() {
        let disabled = config(r#"{"maintenance":{"enabled":false}}"#);
        assert!(matches!(
            evaluate(Some(&disabled), "/index.html"),
            Decision::Skip(SkipReason::Disabled)
        ));

        let absent = config("{}");
        assert!(matches!(
            evaluate(Some(&absent), "/index.html"),
            Decision::Skip(SkipReason::Disabled)
        ));
    }

    #[test]
    fn exact_allowed_path_skips() {
        let cfg = config(
            r#"{"maintenance":{"enabled":true,"allowedPaths":["/status.html"]}}"#,
        );
        assert!(matches!(
            evaluate(Some(&cfg), "/status.html"),
            Decision::Skip(SkipReason::PathExempt)
        ));
        // No prefix matching — a sub-path is not exempt.
        assert!(!evaluate(Some(&cfg), "/status.html.bak").is_skip());
    }

    #[test]
    fn minimal_config_gets_every_default() {
        let cfg = config(r#"{"maintenance":{"enabled":true}}"#);
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };

        assert_eq!(policy.site_name, DEFAULT_SITE_NAME);
        assert_eq!(policy.mode, Mode::Page);
        assert_eq!(policy.severity, Severity::Warning);
        assert_eq!(policy.title, DEFAULT_TITLE);
        assert_eq!(policy.message, DEFAULT_MESSAGE);
        assert_eq!(policy.submessage, "");
        assert_eq!(policy.status_page_path, DEFAULT_STATUS_PAGE_PATH);
        assert!(policy.show_icon);
        assert!(policy.show_status_button);
        assert_eq!(policy.primary_button.label, "View Status");
        assert_eq!(policy.primary_button.href, DEFAULT_STATUS_PAGE_PATH);
        assert_eq!(policy.secondary_button.label, "Back to Home");
        assert_eq!(policy.secondary_button.href, "/index.html");
        assert_eq!(policy.window.progress, DEFAULT_PROGRESS);
        assert!(policy.window.start.is_none());
        assert!(policy.window.eta.is_none());
        assert_eq!(policy.updates, DEFAULT_UPDATES);
    }

    #[test]
    fn primary_button_defaults_follow_status_page_path() {
        let cfg = config(
            r#"{"maintenance":{"enabled":true,"statusPagePath":"/uptime.html"}}"#,
        );
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };
        assert_eq!(policy.primary_button.href, "/uptime.html");
    }

    #[test]
    fn button_fields_default_independently() {
        let cfg = config(
            r#"{"maintenance":{"enabled":true,"primaryButton":{"label":"Hold on"}}}"#,
        );
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };
        assert_eq!(policy.primary_button.label, "Hold on");
        assert_eq!(policy.primary_button.href, DEFAULT_STATUS_PAGE_PATH);
    }

    #[test]
    fn severity_is_lowercased_before_lookup() {
        let cfg = config(r#"{"maintenance":{"enabled":true,"severity":"DANGER"}}"#);
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };
        assert_eq!(policy.severity, Severity::Danger);
    }

    #[test]
    fn unknown_severity_and_mode_fall_back() {
        let cfg = config(
            r#"{"maintenance":{"enabled":true,"severity":"meltdown","mode":"popup"}}"#,
        );
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };
        assert_eq!(policy.severity, Severity::Warning);
        assert_eq!(policy.mode, Mode::Page);
    }

    #[test]
    fn mode_match_is_exact() {
        // The lookup is not case-folded — "Banner" is not banner mode.
        let cfg = config(r#"{"maintenance":{"enabled":true,"mode":"Banner"}}"#);
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };
        assert_eq!(policy.mode, Mode::Page);
    }

    #[test]
    fn progress_is_clamped() {
        for (raw, want) in [(-20.0, 0), (0.0, 0), (65.4, 65), (150.0, 100)] {
            let cfg = config(&format!(
                r#"{{"maintenance":{{"enabled":true,"window":{{"progress":{raw}}}}}}}"#
            ));
            let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
                panic!("expected Announce");
            };
            assert_eq!(policy.window.progress, want, "progress {raw}");
        }
    }

    #[test]
    fn empty_updates_fall_back_to_defaults() {
        let cfg = config(r#"{"maintenance":{"enabled":true,"updates":[]}}"#);
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };
        assert_eq!(policy.updates, DEFAULT_UPDATES);
    }

    #[test]
    fn bad_timestamps_count_as_absent() {
        let cfg = config(
            r#"{"maintenance":{"enabled":true,"window":{"eta":"soonish","start":""}}}"#,
        );
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };
        assert!(policy.window.eta.is_none());
        assert!(policy.window.start.is_none());
    }

    #[test]
    fn valid_timestamps_parse_to_utc() {
        let cfg = config(
            r#"{"maintenance":{"enabled":true,"window":{"eta":"2026-08-06T12:30:00+02:00"}}}"#,
        );
        let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
            panic!("expected Announce");
        };
        let eta = policy.window.eta.unwrap();
        assert_eq!(eta.to_rfc3339(), "2026-08-06T10:30:00+00:00");
    }
}
