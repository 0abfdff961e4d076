// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Size, Vec2};

/// Fraction of the overshoot that survives elastic clamping.
///
/// Dragging past a pan bound moves the image only this far per pixel of raw
/// finger movement, which is what signals "you've hit the edge".
pub const RUBBER_BAND_FACTOR: f64 = 0.3;

/// Legal pan range for the active image at a given scale.
///
/// The range is symmetric around the centered position: an image scaled by
/// `s` in a container of width `w` may pan by at most `(w * s - w) / 2`
/// to either side before exposing the backdrop. At `scale <= 1` the image
/// fits the container and there is no legal pan range at all; panning only
/// becomes meaningful once the image is enlarged beyond the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PanBounds {
    /// Most negative legal pan offset per axis.
    pub min: Vec2,
    /// Most positive legal pan offset per axis.
    pub max: Vec2,
}

impl PanBounds {
    /// Computes the pan range for `scale` inside `container`.
    ///
    /// Pure and cheap enough to call on every pointer-move frame, which also
    /// means a container resize is picked up by the very next clamp.
    ///
    /// ```rust
    /// use kurbo::{Size, Vec2};
    /// use lightbox_transform::PanBounds;
    ///
    /// let bounds = PanBounds::for_scale(2.0, Size::new(300.0, 400.0));
    /// assert_eq!(bounds.min, Vec2::new(-150.0, -200.0));
    /// assert_eq!(bounds.max, Vec2::new(150.0, 200.0));
    ///
    /// // At rest zoom there is nowhere to pan.
    /// let none = PanBounds::for_scale(1.0, Size::new(300.0, 400.0));
    /// assert_eq!(none.min, Vec2::ZERO);
    /// assert_eq!(none.max, Vec2::ZERO);
    /// ```
    #[must_use]
    pub fn for_scale(scale: f64, container: Size) -> Self {
        let overflow_x = ((container.width * scale - container.width) / 2.0).max(0.0);
        let overflow_y = ((container.height * scale - container.height) / 2.0).max(0.0);
        Self {
            min: Vec2::new(-overflow_x, -overflow_y),
            max: Vec2::new(overflow_x, overflow_y),
        }
    }

    /// Returns `true` if `translate` lies within the legal range on both axes.
    #[must_use]
    pub fn contains(&self, translate: Vec2) -> bool {
        translate.x >= self.min.x
            && translate.x <= self.max.x
            && translate.y >= self.min.y
            && translate.y <= self.max.y
    }

    /// Hard-clamps `translate` into the legal range.
    ///
    /// This is the resting-state rule: whatever overshoot a gesture produced,
    /// the settled position after release is always inside the bounds.
    #[must_use]
    pub fn clamp(&self, translate: Vec2) -> Vec2 {
        Vec2::new(
            translate.x.clamp(self.min.x, self.max.x),
            translate.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Elastically clamps `translate`, damping any component beyond the range.
    ///
    /// Inside the bounds the value passes through untouched; beyond them the
    /// excess is scaled by [`RUBBER_BAND_FACTOR`], so the image trails the
    /// finger at 30% once the edge is hit.
    #[must_use]
    pub fn rubber_band(&self, translate: Vec2) -> Vec2 {
        Vec2::new(
            rubber_axis(translate.x, self.min.x, self.max.x),
            rubber_axis(translate.y, self.min.y, self.max.y),
        )
    }
}

fn rubber_axis(raw: f64, min: f64, max: f64) -> f64 {
    if raw > max {
        max + (raw - max) * RUBBER_BAND_FACTOR
    } else if raw < min {
        min + (raw - min) * RUBBER_BAND_FACTOR
    } else {
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pan_range_at_or_below_unit_scale() {
        let container = Size::new(300.0, 400.0);
        for scale in [0.5, 0.9, 1.0] {
            let bounds = PanBounds::for_scale(scale, container);
            assert_eq!(bounds.min, Vec2::ZERO, "scale {scale}");
            assert_eq!(bounds.max, Vec2::ZERO, "scale {scale}");
        }
    }

    #[test]
    fn double_scale_overflows_half_container_per_side() {
        let bounds = PanBounds::for_scale(2.0, Size::new(300.0, 400.0));
        assert_eq!(bounds.min, Vec2::new(-150.0, -200.0));
        assert_eq!(bounds.max, Vec2::new(150.0, 200.0));
    }

    #[test]
    fn contains_and_clamp_agree() {
        let bounds = PanBounds::for_scale(2.0, Size::new(300.0, 400.0));

        let inside = Vec2::new(100.0, -150.0);
        assert!(bounds.contains(inside));
        assert_eq!(bounds.clamp(inside), inside);

        let outside = Vec2::new(200.0, -500.0);
        assert!(!bounds.contains(outside));
        assert_eq!(bounds.clamp(outside), Vec2::new(150.0, -200.0));
    }

    #[test]
    fn rubber_band_damps_only_the_excess() {
        let bounds = PanBounds::for_scale(2.0, Size::new(300.0, 400.0));

        // 50px past the +x edge keeps only 30% of the excess.
        let dragged = bounds.rubber_band(Vec2::new(200.0, 0.0));
        assert_eq!(dragged, Vec2::new(165.0, 0.0));

        // Symmetric on the negative side.
        let dragged = bounds.rubber_band(Vec2::new(-200.0, 0.0));
        assert_eq!(dragged, Vec2::new(-165.0, 0.0));

        // In-range values pass through untouched.
        let dragged = bounds.rubber_band(Vec2::new(80.0, -120.0));
        assert_eq!(dragged, Vec2::new(80.0, -120.0));
    }

    #[test]
    fn rubber_band_is_per_axis() {
        let bounds = PanBounds::for_scale(2.0, Size::new(300.0, 400.0));
        let dragged = bounds.rubber_band(Vec2::new(200.0, -100.0));
        assert_eq!(dragged, Vec2::new(165.0, -100.0));
    }

    #[test]
    fn degenerate_container_has_no_range() {
        let bounds = PanBounds::for_scale(4.0, Size::new(0.0, 0.0));
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::ZERO);
    }
}
