// SPDX-License-Identifier: MIT
//! Live overlay updates.
//!
//! Only the page variant is live. Three tickers — line rotation, time
//! display, progress simulation — each own a private state slice and a pure
//! `tick` step; [`LiveUpdater`] seeds the initial paint and then drives all
//! three off independent interval timers on one task until it is dropped.
//! No ticker ever stops itself.

pub mod clock;
pub mod progress;
pub mod rotation;

pub use clock::{elapsed_label, eta_label, remaining_label, ClockTicker, CLOCK_PERIOD};
pub use progress::{ProgressTicker, PROGRESS_INCREMENT_PROBABILITY, PROGRESS_PERIOD};
pub use rotation::{RotationTicker, ROTATION_PERIOD};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::policy::{MaintenancePolicy, Mode};
use crate::render::Document;

/// Composes the three tickers over a mounted overlay document.
pub struct LiveUpdater {
    doc: Document,
    rotation: RotationTicker,
    clock: ClockTicker,
    progress: ProgressTicker,
}

impl LiveUpdater {
    /// Take ownership of a mounted page-mode document and seed the initial
    /// paint (first rotating line, elapsed and ETA labels).
    ///
    /// Returns `None` for banner mode — banners are static.
    pub fn mount(policy: &MaintenancePolicy, doc: Document, now: DateTime<Utc>) -> Option<Self> {
        if policy.mode != Mode::Page {
            return None;
        }

        let mut updater = Self {
            doc,
            rotation: RotationTicker::new(policy.updates.clone(), now),
            clock: ClockTicker::new(policy.window.eta),
            progress: ProgressTicker::new(policy.window.progress),
        };
        updater.rotation.tick(&mut updater.doc, now);
        let last_advance = updater.rotation.last_advance();
        updater.clock.tick(&mut updater.doc, now, last_advance);
        Some(updater)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn displayed_progress(&self) -> u8 {
        self.progress.displayed()
    }

    /// Drive the tickers forever, calling `sink` after every mutation.
    ///
    /// The three intervals are unsynchronized and may interleave in any
    /// order; each ticker writes disjoint nodes, so ordering is irrelevant.
    /// There is no stop condition — drop the task to tear everything down.
    pub async fn run(mut self, mut sink: impl FnMut(&Document)) {
        info!(
            lines = self.rotation.line_count(),
            progress = self.progress.displayed(),
            "live updater started"
        );
        sink(&self.doc);

        let start = tokio::time::Instant::now();
        let mut rotation_timer = tokio::time::interval_at(start + ROTATION_PERIOD, ROTATION_PERIOD);
        let mut clock_timer = tokio::time::interval_at(start + CLOCK_PERIOD, CLOCK_PERIOD);
        let mut progress_timer = tokio::time::interval_at(start + PROGRESS_PERIOD, PROGRESS_PERIOD);
        rotation_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        clock_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        progress_timer.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = rotation_timer.tick() => {
                    self.rotation.tick(&mut self.doc, Utc::now());
                    sink(&self.doc);
                }
                _ = clock_timer.tick() => {
                    let last_advance = self.rotation.last_advance();
                    self.clock.tick(&mut self.doc, Utc::now(), last_advance);
                    sink(&self.doc);
                }
                _ = progress_timer.tick() => {
                    self.progress.tick(&mut self.doc);
                    sink(&self.doc);
                }
            }
        }
    }
}
