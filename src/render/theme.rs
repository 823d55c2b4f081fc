// SPDX-License-Identifier: MIT
//! Per-severity presentation.

use crate::policy::Severity;

/// Presentation values for one severity level.
#[derive(Debug, Clone, Copy)]
pub struct SeverityTheme {
    /// CSS class suffix, e.g. `sn-warning`.
    pub css_class: &'static str,
    /// Badge text shown next to the title.
    pub badge: &'static str,
    pub icon: &'static str,
    pub background: &'static str,
    pub border: &'static str,
}

const INFO: SeverityTheme = SeverityTheme {
    css_class: "sn-info",
    badge: "Info",
    icon: "ℹ️",
    background: "rgba(56,189,248,0.12)",
    border: "rgba(56,189,248,0.22)",
};

const WARNING: SeverityTheme = SeverityTheme {
    css_class: "sn-warning",
    badge: "Maintenance",
    icon: "⚠️",
    background: "rgba(245,158,11,0.12)",
    border: "rgba(245,158,11,0.22)",
};

const DANGER: SeverityTheme = SeverityTheme {
    css_class: "sn-danger",
    badge: "Incident",
    icon: "🛑",
    background: "rgba(239,68,68,0.12)",
    border: "rgba(239,68,68,0.22)",
};

impl SeverityTheme {
    pub fn for_severity(severity: Severity) -> &'static SeverityTheme {
        match severity {
            Severity::Info => &INFO,
            Severity::Warning => &WARNING,
            Severity::Danger => &DANGER,
        }
    }
}
