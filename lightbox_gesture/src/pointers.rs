// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Active-pointer tracking.
//!
//! [`PointerTracker`] keeps the current position of each pressed pointer and
//! the previous sample per pointer, which is enough to estimate release
//! velocity at display-rate event frequency. At most two pointers matter to
//! the viewer; additional pointers are tracked but ignored by the controller.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::controller::PointerId;

/// Latest (and previous) sample for one pressed pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Identity of the pointer, as reported by the input source.
    pub id: PointerId,
    /// Most recent position, in container coordinates.
    pub position: Point,
    /// Timestamp of the most recent position, in monotonic milliseconds.
    pub time_ms: u64,
    prev: Option<(Point, u64)>,
}

impl PointerSample {
    /// Velocity over the last two samples, in pixels per second.
    ///
    /// A pointer with fewer than two samples, or two samples with the same
    /// timestamp, reports zero velocity rather than dividing by zero.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        let Some((prev_pos, prev_ms)) = self.prev else {
            return Vec2::ZERO;
        };
        if self.time_ms <= prev_ms {
            return Vec2::ZERO;
        }
        let dt_s = (self.time_ms - prev_ms) as f64 / 1000.0;
        (self.position - prev_pos) / dt_s
    }
}

/// The set of currently-pressed pointers.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    samples: SmallVec<[PointerSample; 2]>,
}

impl PointerTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer-down. A duplicate down for a live id restarts it.
    pub fn down(&mut self, id: PointerId, position: Point, time_ms: u64) {
        let sample = PointerSample {
            id,
            position,
            time_ms,
            prev: None,
        };
        if let Some(existing) = self.samples.iter_mut().find(|s| s.id == id) {
            *existing = sample;
        } else {
            self.samples.push(sample);
        }
    }

    /// Records a pointer-move; unknown ids are ignored.
    pub fn moved(&mut self, id: PointerId, position: Point, time_ms: u64) {
        if let Some(sample) = self.samples.iter_mut().find(|s| s.id == id) {
            sample.prev = Some((sample.position, sample.time_ms));
            sample.position = position;
            sample.time_ms = time_ms;
        }
    }

    /// Removes a pointer, returning its final sample for velocity checks.
    pub fn lift(&mut self, id: PointerId) -> Option<PointerSample> {
        let idx = self.samples.iter().position(|s| s.id == id)?;
        Some(self.samples.remove(idx))
    }

    /// Drops every tracked pointer (cancellation, session teardown).
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of currently-pressed pointers.
    #[must_use]
    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// The only pressed pointer, if exactly one is down.
    #[must_use]
    pub fn solo(&self) -> Option<&PointerSample> {
        match self.samples.as_slice() {
            [sample] => Some(sample),
            _ => None,
        }
    }

    /// The first two pressed pointers, in press order.
    #[must_use]
    pub fn pair(&self) -> Option<(&PointerSample, &PointerSample)> {
        match self.samples.as_slice() {
            [a, b, ..] => Some((a, b)),
            _ => None,
        }
    }
}
