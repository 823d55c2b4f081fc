// SPDX-License-Identifier: MIT
//! Elapsed-time and ETA display ticker.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::render::{ids, Document};

pub const CLOCK_PERIOD: Duration = Duration::from_millis(1000);

/// Refreshes the "last updated" and "ETA" labels once a second.
///
/// Owns only the configured ETA; the rotation timestamp is passed in per
/// tick so the two tickers never share mutable state.
#[derive(Debug)]
pub struct ClockTicker {
    eta: Option<DateTime<Utc>>,
}

impl ClockTicker {
    pub fn new(eta: Option<DateTime<Utc>>) -> Self {
        Self { eta }
    }

    pub fn tick(&mut self, doc: &mut Document, now: DateTime<Utc>, last_advance: DateTime<Utc>) {
        doc.set_text(
            ids::LAST_UPDATED,
            &format!("Last updated: {}", elapsed_label(now - last_advance)),
        );
        doc.set_text(ids::ETA, &eta_label(self.eta, now));
    }
}

/// Human label for time elapsed since the last rotation.
pub fn elapsed_label(elapsed: chrono::Duration) -> String {
    let sec = elapsed.num_seconds();
    if sec < 5 {
        "just now".to_string()
    } else if sec < 60 {
        format!("{sec}s ago")
    } else {
        format!("{}m ago", sec / 60)
    }
}

/// Full ETA label, including the static fallback when no ETA is configured.
pub fn eta_label(eta: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match eta {
        None => "ETA: soon".to_string(),
        Some(eta) => format!("ETA: {}", remaining_label(eta - now)),
    }
}

/// Human label for the time remaining until the ETA.
pub fn remaining_label(remaining: chrono::Duration) -> String {
    let ms = remaining.num_milliseconds();
    if ms <= 0 {
        return "Soon".to_string();
    }
    let min = (ms as f64 / 60_000.0).round() as i64;
    if min <= 1 {
        "< 1 min".to_string()
    } else {
        format!("{min} min")
    }
}
