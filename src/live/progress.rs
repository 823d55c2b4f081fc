// SPDX-License-Identifier: MIT
//! Simulated progress ticker.
//!
//! Purely cosmetic — there is no deployment telemetry behind it. Each tick
//! has a 40% chance of nudging the displayed percentage up by one, and the
//! bar never advances once it reaches 99, so it approaches but never shows
//! completion while the page stays open.

use std::time::Duration;

use crate::render::{ids, Document};

pub const PROGRESS_PERIOD: Duration = Duration::from_millis(6000);
pub const PROGRESS_INCREMENT_PROBABILITY: f64 = 0.4;

/// The displayed value never advances at or beyond this.
const PROGRESS_CAP: u8 = 99;

/// Owns the displayed percentage; writes the label and the bar width.
#[derive(Debug)]
pub struct ProgressTicker {
    displayed: u8,
}

impl ProgressTicker {
    pub fn new(initial: u8) -> Self {
        Self {
            displayed: initial.min(100),
        }
    }

    /// One simulation tick with a live coin flip.
    pub fn tick(&mut self, doc: &mut Document) {
        self.step(doc, rand::random::<f64>() < PROGRESS_INCREMENT_PROBABILITY);
    }

    /// Deterministic step — the coin flip outcome is injected.
    pub fn step(&mut self, doc: &mut Document, increment: bool) {
        if self.displayed >= PROGRESS_CAP || !increment {
            return;
        }
        self.displayed += 1;
        doc.set_text(ids::PERCENT, &format!("{}%", self.displayed));
        doc.set_attr(ids::BAR, "style", &format!("width:{}%", self.displayed));
    }

    pub fn displayed(&self) -> u8 {
        self.displayed
    }
}
