// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Smallest scale a gesture may settle at.
///
/// Pinching below this is allowed in-gesture but the release logic animates
/// back to at least unit scale.
pub const MIN_SCALE: f64 = 0.5;

/// Largest scale a gesture may produce.
pub const MAX_SCALE: f64 = 8.0;

/// Pan + uniform scale applied to the active image.
///
/// The translation is expressed in device pixels relative to the image's
/// centered resting position, so [`Transform::IDENTITY`] always means
/// "centered, unit scale".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Pan offset from the centered position.
    pub translate: Vec2,
    /// Uniform scale factor, kept within `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
}

impl Transform {
    /// Centered, unit-scale transform.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform with the scale clamped into the legal range.
    #[must_use]
    pub fn new(translate: Vec2, scale: f64) -> Self {
        Self {
            translate,
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    /// Returns `true` if this transform is (numerically) the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        (self.scale - 1.0).abs() < 1e-9
            && self.translate.x.abs() < 1e-9
            && self.translate.y.abs() < 1e-9
    }

    /// Rescales toward `new_scale` while keeping `focal` visually stationary.
    ///
    /// `focal` is a point relative to the container center (the same space the
    /// translation lives in). As the scale changes, the image content under
    /// the focal point must not drift, which pins the new translation to
    /// `focal - (focal - translate) * (new_scale / scale)` per axis.
    ///
    /// The requested scale is clamped into `[MIN_SCALE, MAX_SCALE]` before the
    /// translation is derived, so the focal point stays fixed for the scale
    /// actually applied.
    ///
    /// ```rust
    /// use kurbo::Vec2;
    /// use lightbox_transform::Transform;
    ///
    /// // Doubling the scale around a point 50px right of center pulls the
    /// // image 50px left so the pinched content stays put.
    /// let zoomed = Transform::IDENTITY.zoom_about(Vec2::new(50.0, 0.0), 2.0);
    /// assert_eq!(zoomed.scale, 2.0);
    /// assert_eq!(zoomed.translate, Vec2::new(-50.0, 0.0));
    /// ```
    #[must_use]
    pub fn zoom_about(self, focal: Vec2, new_scale: f64) -> Self {
        let new_scale = new_scale.clamp(MIN_SCALE, MAX_SCALE);
        let ratio = new_scale / self.scale;
        Self {
            translate: focal - (focal - self.translate) * ratio,
            scale: new_scale,
        }
    }

    /// Linear interpolation between two transforms.
    ///
    /// Used to sample release animations (snap-back, zoom toggles). `t` is
    /// unclamped; callers pass progress in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            translate: self.translate.lerp(other.translate, t),
            scale: self.scale + (other.scale - self.scale) * t,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
