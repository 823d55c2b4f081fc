//! Integration tests for the live updater.
//!
//! Covers:
//! 1. Label formatting contracts (elapsed + ETA)
//! 2. Progress cap — the bar never completes
//! 3. The composed updater driven through virtual time

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use sitenotice::live::{elapsed_label, eta_label, remaining_label};
use sitenotice::render::ids;
use sitenotice::{evaluate, render, BasePath, Decision, LiveUpdater, SiteConfig, SiteLocation};

fn mounted(json: &str) -> LiveUpdater {
    let cfg: SiteConfig = serde_json::from_str(json).expect("test config should parse");
    let Decision::Announce(policy) = evaluate(Some(&cfg), "/index.html") else {
        panic!("expected Announce");
    };
    let base = BasePath::detect(SiteLocation::new("https://example.com", "/index.html"), None);
    let doc = render(&policy, &base);
    LiveUpdater::mount(&policy, doc, Utc::now()).expect("page mode mounts")
}

// ─── Test 1: label formats ───────────────────────────────────────────────────

#[test]
fn test_elapsed_label_thresholds() {
    assert_eq!(elapsed_label(chrono::Duration::seconds(3)), "just now");
    assert_eq!(elapsed_label(chrono::Duration::seconds(4)), "just now");
    assert_eq!(elapsed_label(chrono::Duration::seconds(5)), "5s ago");
    assert_eq!(elapsed_label(chrono::Duration::seconds(45)), "45s ago");
    assert_eq!(elapsed_label(chrono::Duration::seconds(59)), "59s ago");
    assert_eq!(elapsed_label(chrono::Duration::seconds(60)), "1m ago");
    assert_eq!(elapsed_label(chrono::Duration::seconds(125)), "2m ago");
}

#[test]
fn test_eta_label_thresholds() {
    let now = Utc::now();

    // Configured ETA 30s ahead rounds to the sub-minute label.
    assert_eq!(
        eta_label(Some(now + chrono::Duration::milliseconds(30_000)), now),
        "ETA: < 1 min"
    );
    // ETA already passed.
    assert_eq!(
        eta_label(Some(now - chrono::Duration::milliseconds(5_000)), now),
        "ETA: Soon"
    );
    // No ETA configured at all.
    assert_eq!(eta_label(None, now), "ETA: soon");

    assert_eq!(remaining_label(chrono::Duration::minutes(90)), "90 min");
    assert_eq!(remaining_label(chrono::Duration::seconds(100)), "2 min");
}

// ─── Test 2: progress cap ────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_progress_pinned_at_99_never_moves() {
    let updater = mounted(
        r#"{"maintenance":{"enabled":true,"mode":"page","window":{"progress":99}}}"#,
    );

    let last_pct = Arc::new(Mutex::new(String::new()));
    let sink_pct = Arc::clone(&last_pct);
    let handle = tokio::spawn(updater.run(move |doc| {
        if let Some(pct) = doc.text_of(ids::PERCENT) {
            *sink_pct.lock().unwrap() = pct.to_string();
        }
    }));

    // 10 simulation periods of virtual time; the flip outcome is irrelevant
    // because the cap check comes first.
    tokio::time::sleep(Duration::from_millis(60_500)).await;
    handle.abort();

    assert_eq!(*last_pct.lock().unwrap(), "99%");
}

// ─── Test 3: composed updater through virtual time ───────────────────────────

#[tokio::test(start_paused = true)]
async fn test_updater_rotates_lines_on_schedule() {
    let updater = mounted(
        r#"{"maintenance":{"enabled":true,"mode":"page","updates":["A","B","C"]}}"#,
    );
    assert_eq!(updater.document().text_of(ids::ROTATING_LINE), Some("A"));

    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = Arc::clone(&lines);
    let handle = tokio::spawn(updater.run(move |doc| {
        if let Some(line) = doc.text_of(ids::ROTATING_LINE) {
            sink_lines.lock().unwrap().push(line.to_string());
        }
    }));

    // Two rotation periods: A → B → C.
    tokio::time::sleep(Duration::from_millis(8_100)).await;
    handle.abort();

    let seen = lines.lock().unwrap();
    assert_eq!(seen.first().map(String::as_str), Some("A"), "seed paint first");
    assert!(seen.iter().any(|l| l == "B"), "first rotation missing: {seen:?}");
    assert!(seen.iter().any(|l| l == "C"), "second rotation missing: {seen:?}");
}

#[tokio::test(start_paused = true)]
async fn test_clock_ticks_keep_last_updated_fresh() {
    let updater = mounted(r#"{"maintenance":{"enabled":true,"mode":"page"}}"#);

    let labels = Arc::new(Mutex::new(Vec::new()));
    let sink_labels = Arc::clone(&labels);
    let handle = tokio::spawn(updater.run(move |doc| {
        if let Some(label) = doc.text_of(ids::LAST_UPDATED) {
            sink_labels.lock().unwrap().push(label.to_string());
        }
    }));

    tokio::time::sleep(Duration::from_millis(3_100)).await;
    handle.abort();

    let seen = labels.lock().unwrap();
    // Three clock periods elapsed, each within the rotation window — the
    // label stays in the sub-5s bucket but keeps being rewritten.
    assert!(seen.len() >= 3, "expected several clock ticks, got {}", seen.len());
    assert!(seen.iter().all(|l| l.starts_with("Last updated: ")));
}
