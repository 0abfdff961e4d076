// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-ticked transform animations.
//!
//! The session never reads a clock. An animation is a pure function of the
//! `now_ms` the host passes to [`sample`](TransformAnimation::sample); hosts
//! drive it from whatever frame callback they have and tests drive it with
//! plain numbers.

use lightbox_transform::Transform;

/// Duration of a directional slide transition between images.
pub const SLIDE_DURATION_MS: u64 = 300;

/// Duration of a release snap-back or double-tap zoom settle.
pub const SNAP_DURATION_MS: u64 = 250;

/// Ease-out cubic. Fast start, gentle landing.
fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// An in-flight interpolation between two transforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformAnimation {
    from: Transform,
    to: Transform,
    start_ms: u64,
    duration_ms: u64,
}

impl TransformAnimation {
    /// Starts an animation at `start_ms`.
    #[must_use]
    pub fn new(from: Transform, to: Transform, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// The transform this animation lands on.
    #[must_use]
    pub fn target(&self) -> Transform {
        self.to
    }

    /// Eased progress in `[0, 1]` at `now_ms`.
    ///
    /// A `now_ms` before the start (a host clock hiccup) samples the start
    /// value rather than extrapolating backwards.
    #[must_use]
    pub fn progress(&self, now_ms: u64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return 1.0;
        }
        ease_out_cubic(elapsed as f64 / self.duration_ms as f64)
    }

    /// The interpolated transform at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> Transform {
        self.from.lerp(self.to, self.progress(now_ms))
    }

    /// Whether the animation has run its full duration at `now_ms`.
    #[must_use]
    pub fn is_finished(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }
}
