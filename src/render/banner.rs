// SPDX-License-Identifier: MIT
//! Banner variant — a sticky, non-blocking strip at the top of the page.

use crate::basepath::BasePath;
use crate::policy::MaintenancePolicy;
use crate::render::dom::Element;
use crate::render::theme::SeverityTheme;

/// Build the banner subtree. Never touches page scrollability.
pub fn build(policy: &MaintenancePolicy, base: &BasePath) -> Element {
    let theme = SeverityTheme::for_severity(policy.severity);

    let mut content = Element::new("div").with_class("sn-banner-content");
    if policy.show_icon {
        content = content.with_child(
            Element::new("span")
                .with_attr("aria-hidden", "true")
                .with_text(theme.icon),
        );
    }
    content = content
        .with_child(Element::new("strong").with_text(&policy.title))
        .with_child(
            Element::new("span")
                .with_class("sn-banner-message")
                .with_text(&policy.message),
        );

    let mut inner = Element::new("div")
        .with_class("sn-banner-inner")
        .with_child(content);

    if policy.show_status_button {
        inner = inner.with_child(
            Element::new("a")
                .with_class("sn-banner-link")
                .with_attr("href", &base.build_url(&policy.status_page_path))
                .with_text("Status →"),
        );
    }

    Element::new("div")
        .with_id("sn-banner")
        .with_class("sn-banner")
        .with_class(theme.css_class)
        .with_attr("role", "status")
        .with_child(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basepath::SiteLocation;
    use crate::policy::{evaluate, Decision};

    fn banner_policy(json: &str) -> MaintenancePolicy {
        let cfg = serde_json::from_str(json).unwrap();
        match evaluate(Some(&cfg), "/index.html") {
            Decision::Announce(p) => p,
            other => panic!("expected Announce, got {other:?}"),
        }
    }

    fn root_base() -> BasePath {
        BasePath::detect(SiteLocation::new("https://example.com", "/index.html"), None)
    }

    #[test]
    fn status_link_uses_base_path() {
        let policy = banner_policy(r#"{"maintenance":{"enabled":true,"mode":"banner"}}"#);
        let base = BasePath::detect(
            SiteLocation::new("https://user.github.io", "/repo/index.html"),
            None,
        );
        let el = build(&policy, &base);
        let mut html = String::new();
        el.write_html(&mut html);
        assert!(html.contains(r#"href="/repo/status.html""#));
    }

    #[test]
    fn icon_and_link_can_be_disabled() {
        let policy = banner_policy(
            r#"{"maintenance":{"enabled":true,"mode":"banner","showIcon":false,"showStatusButton":false}}"#,
        );
        let el = build(&policy, &root_base());
        let mut html = String::new();
        el.write_html(&mut html);
        assert!(!html.contains("aria-hidden"));
        assert!(!html.contains("href"));
    }
}
