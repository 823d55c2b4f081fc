// SPDX-License-Identifier: MIT
//! Announcement rendering.
//!
//! [`render`] dispatches on the resolved [`Mode`] — one self-contained view
//! builder per variant — and mounts the result into a fresh [`Document`].
//! The page variant additionally locks page scrolling for its lifetime.

pub mod dom;

mod banner;
mod overlay;
mod theme;

pub use dom::{escape_html, Document, Element};
pub use theme::SeverityTheme;

use crate::basepath::BasePath;
use crate::policy::{MaintenancePolicy, Mode};

/// Stable element ids back-referenced by the live updater.
pub mod ids {
    pub const OVERLAY: &str = "sn-overlay";
    pub const ROTATING_LINE: &str = "sn-rot";
    pub const ETA: &str = "sn-eta";
    pub const LAST_UPDATED: &str = "sn-last-updated";
    pub const PERCENT: &str = "sn-pct";
    pub const BAR: &str = "sn-bar";
}

/// Render `policy` into a freshly mounted [`Document`].
pub fn render(policy: &MaintenancePolicy, base: &BasePath) -> Document {
    let mut doc = Document::new();
    match policy.mode {
        Mode::Banner => {
            doc.prepend(banner::build(policy, base));
        }
        Mode::Page => {
            doc.append(overlay::build(policy, base));
            doc.lock_scroll();
        }
    }
    doc
}

/// Wrap a mounted document in a standalone HTML page.
///
/// Used by the CLI `render`/`watch` output; in-page embeddings consume
/// [`Document::to_html`] fragments directly.
pub fn to_page(doc: &Document, title: &str) -> String {
    let body_style = if doc.scroll_locked() {
        r#" style="overflow:hidden""#
    } else {
        ""
    };
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLESHEET}</style>\n</head>\n<body{}>\n{}</body>\n</html>\n",
        escape_html(title),
        body_style,
        doc.to_html()
    )
}

/// Compact default stylesheet for the standalone page output.
const STYLESHEET: &str = r#"
body {
  margin: 0;
  font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
  background: #070a12;
  color: #e6edf3;
}
.sn-banner { position: sticky; top: 0; z-index: 9999; width: 100%; }
.sn-banner-inner {
  max-width: 1020px; margin: 0 auto; padding: 0.65rem 1rem;
  display: flex; gap: 0.65rem; align-items: center; justify-content: space-between;
}
.sn-banner-content { display: flex; gap: 0.6rem; align-items: center; }
.sn-banner-link {
  padding: 0.35rem 0.65rem; border-radius: 999px; color: inherit;
  text-decoration: none; font-weight: 800; white-space: nowrap;
  border: 1px solid rgba(148,163,184,0.3); background: rgba(255,255,255,0.04);
}
.sn-overlay {
  position: fixed; inset: 0; z-index: 99999;
  display: grid; place-items: center; padding: 1.25rem;
}
.sn-card {
  width: min(760px, calc(100% - 1rem)); border-radius: 22px; padding: 1.6rem;
  border: 1px solid rgba(148,163,184,0.16); background: rgba(255,255,255,0.035);
}
.sn-header { display: flex; align-items: flex-start; justify-content: space-between; gap: 1rem; }
.sn-identity { display: flex; gap: 0.95rem; align-items: flex-start; }
.sn-icon {
  width: 48px; height: 48px; display: grid; place-items: center;
  border-radius: 16px; font-size: 1.15rem; border: 1px solid rgba(148,163,184,0.3);
}
.sn-site-name { opacity: 0.82; font-weight: 900; }
.sn-title { font-size: 1.7rem; margin: 0.25rem 0 0; }
.sn-badge {
  margin-top: 0.55rem; display: inline-flex; padding: 0.2rem 0.65rem;
  border-radius: 999px; font-size: 0.86rem; font-weight: 850;
  border: 1px solid rgba(148,163,184,0.3);
}
.sn-actions { display: flex; gap: 0.65rem; flex-wrap: wrap; justify-content: flex-end; }
.sn-button {
  display: inline-flex; padding: 0.72rem 0.95rem; border-radius: 12px;
  border: 1px solid rgba(148,163,184,0.16); background: rgba(255,255,255,0.04);
  color: inherit; text-decoration: none; font-weight: 850; white-space: nowrap;
}
.sn-button-primary { border-color: rgba(56,189,248,0.28); background: rgba(56,189,248,0.10); }
.sn-message { margin-top: 1.05rem; font-size: 1.02rem; }
.sn-submessage { margin-top: 0.35rem; opacity: 0.62; font-size: 0.95rem; }
.sn-progress-section {
  margin-top: 1.15rem; border-top: 1px solid rgba(148,163,184,0.10); padding-top: 1rem;
}
.sn-progress-header {
  display: flex; align-items: center; justify-content: space-between;
  gap: 0.8rem; flex-wrap: wrap;
}
.sn-progress-heading { font-weight: 900; }
.sn-progress-meta { opacity: 0.62; font-size: 0.92rem; }
.sn-bar-track {
  margin-top: 0.65rem; height: 12px; border-radius: 999px; overflow: hidden;
  border: 1px solid rgba(148,163,184,0.14); background: rgba(255,255,255,0.03);
}
.sn-bar {
  height: 100%; border-radius: 999px; transition: width 600ms ease;
  background: linear-gradient(90deg, rgba(56,189,248,0.85), rgba(34,197,94,0.65));
}
.sn-chips { margin-top: 0.85rem; display: flex; gap: 0.65rem; flex-wrap: wrap; }
.sn-chip {
  display: inline-flex; gap: 0.35rem; padding: 0.22rem 0.55rem;
  border-radius: 999px; font-weight: 750;
  border: 1px solid rgba(148,163,184,0.16); background: rgba(255,255,255,0.03);
}
.sn-live {
  margin-top: 0.9rem; padding: 0.85rem 0.95rem; border-radius: 16px;
  border: 1px solid rgba(148,163,184,0.12); background: rgba(255,255,255,0.02);
}
.sn-live-header { display: flex; align-items: center; justify-content: space-between; gap: 0.8rem; font-weight: 850; }
.sn-live-sub { opacity: 0.62; font-size: 0.92rem; font-weight: 400; }
.sn-rotating-line { margin: 0.5rem 0 0; opacity: 0.82; }
.sn-info { background: rgba(56,189,248,0.12); }
.sn-warning { background: rgba(245,158,11,0.12); }
.sn-danger { background: rgba(239,68,68,0.12); }
.sn-overlay.sn-info, .sn-overlay.sn-warning, .sn-overlay.sn-danger { background: #070a12; }
"#;
