// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-image gesture state.
//!
//! One [`GestureState`] value holds everything a gesture in progress has
//! mutated or snapshotted. It is owned by the controller, recreated whenever
//! the viewer opens or the active image changes, and discarded when the
//! viewer closes — nothing persists across images or sessions.

use kurbo::{Point, Vec2};
use lightbox_transform::{PinchBaseline, Transform};

/// Single-pointer gesture-start snapshot.
///
/// Taken on pointer-down (and again when a pinch drops back to one pointer,
/// so the remaining finger continues without a jump).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleStart {
    /// Pointer position at snapshot time, in container coordinates.
    pub point: Point,
    /// Pan offset of the active image at snapshot time.
    pub translate: Vec2,
}

/// Mutable state of the gesture in progress on the active image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureState {
    /// Current pan offset from the centered position, in pixels.
    pub translate: Vec2,
    /// Current uniform scale. Defaults to unit scale.
    pub scale: f64,
    /// `true` between pointer-down and the matching up/cancel.
    pub is_panning: bool,
    /// Two-pointer baseline; `Some` only while a pinch is active.
    pub pinch_start: Option<PinchBaseline>,
    /// Single-pointer baseline; `Some` only while a drag is active.
    pub single_start: Option<SingleStart>,
}

impl GestureState {
    /// Fresh state for a newly-active image: identity transform, no gesture.
    #[must_use]
    pub fn new() -> Self {
        Self {
            translate: Vec2::ZERO,
            scale: 1.0,
            is_panning: false,
            pinch_start: None,
            single_start: None,
        }
    }

    /// The current transform of the active image.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            translate: self.translate,
            scale: self.scale,
        }
    }

    /// Adopts `transform` as the current resting value.
    ///
    /// Used when a host hands an animated mid-flight value back to the
    /// gesture layer (a pointer-down interrupting a snap-back).
    pub fn set_transform(&mut self, transform: Transform) {
        self.translate = transform.translate;
        self.scale = transform.scale;
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::new()
    }
}
