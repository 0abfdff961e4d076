// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::transform::Transform;

/// Gesture-start snapshot for a two-pointer pinch.
///
/// Taken whenever the pointer count transitions to exactly two (including a
/// three-to-two drop), so that each pinch segment scales relative to a stable
/// baseline and lifting or adding a finger never causes a jump.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchBaseline {
    /// Distance between the two pointers at snapshot time.
    pub distance: f64,
    /// Transform of the active image at snapshot time.
    pub transform: Transform,
    /// Pinch midpoint relative to the container center.
    pub focal: Vec2,
}

impl PinchBaseline {
    /// Snapshots a pinch from two pointer positions in container coordinates.
    #[must_use]
    pub fn new(a: Point, b: Point, transform: Transform, container: Size) -> Self {
        let center = Point::new(container.width / 2.0, container.height / 2.0);
        Self {
            distance: (b - a).hypot(),
            transform,
            focal: a.midpoint(b) - center,
        }
    }

    /// Solves the pinch for the current two-pointer distance.
    ///
    /// Returns the transform that scales the baseline by
    /// `current_distance / baseline_distance` (clamped into the legal scale
    /// range) while keeping the pinch focal point visually stationary.
    ///
    /// Returns `None` when the baseline distance is zero — two pointers
    /// registered at the same spot, or a measurement race right at gesture
    /// start. The frame is skipped and the next one retries against a
    /// re-snapshotted baseline.
    ///
    /// ```rust
    /// use kurbo::{Point, Size, Vec2};
    /// use lightbox_transform::{PinchBaseline, Transform};
    ///
    /// let container = Size::new(400.0, 400.0);
    /// // Two fingers 100px apart, centered 50px right of container center.
    /// let baseline = PinchBaseline::new(
    ///     Point::new(200.0, 200.0),
    ///     Point::new(300.0, 200.0),
    ///     Transform::IDENTITY,
    ///     container,
    /// );
    ///
    /// // Spreading to 200px doubles the scale around the focal point.
    /// let solved = baseline.solve(200.0).unwrap();
    /// assert_eq!(solved.scale, 2.0);
    /// assert_eq!(solved.translate, Vec2::new(-50.0, 0.0));
    /// ```
    #[must_use]
    pub fn solve(&self, current_distance: f64) -> Option<Transform> {
        if self.distance == 0.0 {
            return None;
        }
        let ratio = current_distance / self.distance;
        Some(
            self.transform
                .zoom_about(self.focal, self.transform.scale * ratio),
        )
    }
}
