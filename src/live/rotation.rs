// SPDX-License-Identifier: MIT
//! Rotating status-line ticker.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::render::{ids, Document};

pub const ROTATION_PERIOD: Duration = Duration::from_millis(4000);

/// Advances circularly through the configured update lines.
///
/// Owns the line cursor and the advance timestamp; nothing else writes
/// either. The advance timestamp feeds the "last updated" display in
/// [`crate::live::clock::ClockTicker`].
#[derive(Debug)]
pub struct RotationTicker {
    updates: Vec<String>,
    current_line_index: usize,
    last_advance: DateTime<Utc>,
}

impl RotationTicker {
    pub fn new(updates: Vec<String>, now: DateTime<Utc>) -> Self {
        Self {
            updates,
            current_line_index: 0,
            last_advance: now,
        }
    }

    /// Write the current line into the rotating display and advance.
    pub fn tick(&mut self, doc: &mut Document, now: DateTime<Utc>) {
        if self.updates.is_empty() {
            return;
        }
        let line = &self.updates[self.current_line_index % self.updates.len()];
        doc.set_text(ids::ROTATING_LINE, line);
        self.current_line_index += 1;
        self.last_advance = now;
    }

    /// When the line last advanced.
    pub fn last_advance(&self) -> DateTime<Utc> {
        self.last_advance
    }

    pub fn line_count(&self) -> usize {
        self.updates.len()
    }
}
