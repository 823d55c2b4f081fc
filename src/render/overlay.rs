// SPDX-License-Identifier: MIT
//! Page variant — the blocking full-viewport overlay.
//!
//! Mounts the header (site name, title, severity badge, action links), the
//! message block, and the progress section whose nodes carry the stable ids
//! the live updater writes into.

use crate::basepath::BasePath;
use crate::policy::MaintenancePolicy;
use crate::render::dom::Element;
use crate::render::ids;
use crate::render::theme::SeverityTheme;

/// Build the overlay subtree.
///
/// The caller is responsible for locking page scroll — mounting and the
/// scroll side effect are kept separate so the builder stays pure.
pub fn build(policy: &MaintenancePolicy, base: &BasePath) -> Element {
    let theme = SeverityTheme::for_severity(policy.severity);

    let mut identity = Element::new("div").with_class("sn-identity");
    if policy.show_icon {
        identity = identity.with_child(
            Element::new("div")
                .with_class("sn-icon")
                .with_attr("aria-hidden", "true")
                .with_text(theme.icon),
        );
    }
    identity = identity.with_child(
        Element::new("div")
            .with_child(
                Element::new("div")
                    .with_class("sn-site-name")
                    .with_text(&policy.site_name),
            )
            .with_child(Element::new("h1").with_class("sn-title").with_text(&policy.title))
            .with_child(
                Element::new("div")
                    .with_class("sn-badge")
                    .with_text(theme.badge),
            ),
    );

    let actions = Element::new("div")
        .with_class("sn-actions")
        .with_child(
            Element::new("a")
                .with_class("sn-button")
                .with_class("sn-button-primary")
                .with_attr("href", &base.build_url(&policy.primary_button.href))
                .with_text(&format!("{} →", policy.primary_button.label)),
        )
        .with_child(
            Element::new("a")
                .with_class("sn-button")
                .with_attr("href", &base.build_url(&policy.secondary_button.href))
                .with_text(&policy.secondary_button.label),
        );

    let mut card = Element::new("div").with_class("sn-card").with_child(
        Element::new("div")
            .with_class("sn-header")
            .with_child(identity)
            .with_child(actions),
    );

    card = card.with_child(
        Element::new("p")
            .with_class("sn-message")
            .with_text(&policy.message),
    );
    if !policy.submessage.is_empty() {
        card = card.with_child(
            Element::new("p")
                .with_class("sn-submessage")
                .with_text(&policy.submessage),
        );
    }
    card = card.with_child(progress_section(policy));

    Element::new("div")
        .with_id(ids::OVERLAY)
        .with_class("sn-overlay")
        .with_class(theme.css_class)
        .with_attr("role", "alert")
        .with_child(card)
}

fn progress_section(policy: &MaintenancePolicy) -> Element {
    let progress = policy.window.progress;

    let meta = Element::new("div")
        .with_class("sn-progress-meta")
        .with_child(
            Element::new("span")
                .with_id(ids::LAST_UPDATED)
                .with_text("Last updated: just now"),
        )
        .with_child(Element::new("span").with_class("sn-dot").with_text(" · "))
        .with_child(
            Element::new("span")
                .with_id(ids::ETA)
                .with_text("ETA: calculating…"),
        );

    let track = Element::new("div").with_class("sn-bar-track").with_child(
        Element::new("div")
            .with_id(ids::BAR)
            .with_class("sn-bar")
            .with_attr("style", &format!("width:{progress}%")),
    );

    let mut chips = Element::new("div").with_class("sn-chips").with_child(
        Element::new("span")
            .with_class("sn-chip")
            .with_text("Progress: ")
            .with_child(
                Element::new("strong")
                    .with_id(ids::PERCENT)
                    .with_text(&format!("{progress}%")),
            ),
    );
    if let Some(start) = policy.window.start {
        chips = chips.with_child(
            Element::new("span")
                .with_class("sn-chip")
                .with_text("Started: ")
                .with_child(
                    Element::new("strong")
                        .with_text(&start.format("%Y-%m-%d %H:%M UTC").to_string()),
                ),
        );
    }

    let live = Element::new("div")
        .with_class("sn-live")
        .with_child(
            Element::new("div")
                .with_class("sn-live-header")
                .with_child(Element::new("div").with_text("Live update"))
                .with_child(
                    Element::new("div")
                        .with_class("sn-live-sub")
                        .with_text("Rolling deployment · Health checks"),
                ),
        )
        .with_child(
            Element::new("p")
                .with_id(ids::ROTATING_LINE)
                .with_class("sn-rotating-line")
                .with_text("…"),
        );

    Element::new("div")
        .with_class("sn-progress-section")
        .with_child(
            Element::new("div")
                .with_class("sn-progress-header")
                .with_child(
                    Element::new("div")
                        .with_class("sn-progress-heading")
                        .with_text("Deployment progress"),
                )
                .with_child(meta),
        )
        .with_child(track)
        .with_child(chips)
        .with_child(live)
}
