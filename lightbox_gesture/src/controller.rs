// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture controller: raw pointer events in, transform decisions out.
//!
//! [`GestureController`] owns all per-gesture mutable state and walks a small
//! state machine:
//!
//! ```text
//! Idle ──down──▶ Panning ──2nd down──▶ Pinching
//!   ▲               │                     │
//!   └──── release ──┴──── last up ────────┘
//! ```
//!
//! Every handled event returns a [`GestureEffect`] telling the host what to
//! do with its render layer: apply a transform directly (per-frame, no
//! animation), animate toward a settle target, or commit a swipe navigation.
//! The controller never calls back into the host, and it never reads a
//! clock — all timing comes from the events.
//!
//! Hosts gate this controller externally while a slide transition is in
//! flight: events simply are not delivered, which is what keeps transition
//! playback and gesture math from ever mutating the same transform.

use kurbo::{Point, Size, Vec2};
use lightbox_transform::{PanBounds, PinchBaseline, Transform};

use crate::double_tap::{DOUBLE_TAP_ZOOM_SCALE, DoubleTapDetector, ZOOM_TOGGLE_RESET_ABOVE};
use crate::pointers::{PointerSample, PointerTracker};
use crate::state::{GestureState, SingleStart};

/// Scales at or below this classify a single-pointer drag as a swipe.
///
/// Slightly above 1.0 so that a pinch that settles a hair over unit scale
/// still page-turns instead of panning a few invisible pixels.
pub const PAN_CLASSIFY_SCALE: f64 = 1.05;

/// Horizontal travel beyond which a released swipe commits a navigation.
pub const SWIPE_DISTANCE_PX: f64 = 50.0;

/// Release speed beyond which a short swipe still commits a navigation.
pub const SWIPE_VELOCITY_PX_PER_S: f64 = 150.0;

/// Identity of a pointer, as reported by the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// What a pointer did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Pointer made contact.
    Down,
    /// Pointer moved while in contact.
    Move,
    /// Pointer lifted normally.
    Up,
    /// The system took the pointer away (OS gesture, window loss).
    Cancel,
}

/// One raw pointer event, in container coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Which pointer.
    pub pointer: PointerId,
    /// What it did.
    pub kind: PointerEventKind,
    /// Where, relative to the container's top-left corner.
    pub position: Point,
    /// When, in monotonic milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// A pointer-down event.
    #[must_use]
    pub fn down(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            pointer,
            kind: PointerEventKind::Down,
            position,
            time_ms,
        }
    }

    /// A pointer-move event.
    #[must_use]
    pub fn moved(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            pointer,
            kind: PointerEventKind::Move,
            position,
            time_ms,
        }
    }

    /// A pointer-up event.
    #[must_use]
    pub fn up(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            pointer,
            kind: PointerEventKind::Up,
            position,
            time_ms,
        }
    }

    /// A pointer-cancel event.
    #[must_use]
    pub fn cancel(pointer: PointerId, position: Point, time_ms: u64) -> Self {
        Self {
            pointer,
            kind: PointerEventKind::Cancel,
            position,
            time_ms,
        }
    }
}

/// Direction of a committed swipe navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    /// Toward the next image.
    Forward,
    /// Toward the previous image.
    Backward,
}

/// What the host should do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEffect {
    /// Nothing visible changed.
    None,
    /// Write this transform to the active visual immediately, bypassing any
    /// animated or reactive update path. Emitted on every in-gesture move
    /// frame.
    Apply(Transform),
    /// Animate the active visual from `from` to `to` (snap-back, reset, or
    /// double-tap zoom toggle). The controller's own state already rests at
    /// `to`.
    Settle {
        /// Transform at the moment of release.
        from: Transform,
        /// Legal resting transform to animate toward.
        to: Transform,
    },
    /// A swipe committed; navigate and rebuild gesture state for the new
    /// image.
    Navigate(NavDirection),
}

/// Macro-state of the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in progress.
    Idle,
    /// Single-pointer drag (swipe or pan, decided per frame by scale).
    Panning,
    /// Two-pointer pinch.
    Pinching,
}

/// Owner of all per-gesture mutable state for the active image.
#[derive(Clone, Debug)]
pub struct GestureController {
    container: Size,
    state: GestureState,
    pointers: PointerTracker,
    taps: DoubleTapDetector,
    phase: GesturePhase,
}

impl GestureController {
    /// Creates an idle controller for a container of the given size.
    #[must_use]
    pub fn new(container: Size) -> Self {
        Self {
            container,
            state: GestureState::new(),
            pointers: PointerTracker::new(),
            taps: DoubleTapDetector::new(),
            phase: GesturePhase::Idle,
        }
    }

    /// Current gesture state (translate, scale, snapshots).
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Current transform of the active image.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.transform()
    }

    /// Current macro-state.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Container size used for bounds and focal-point math.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Updates the container size after a surface resize.
    ///
    /// Bounds are derived from the container on every clamp, so the next
    /// frame already pans against the new size; hosts re-clamp any settled
    /// translate themselves.
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    /// Adopts an externally animated transform as the current value.
    ///
    /// A host interrupting a settle animation with a new pointer-down hands
    /// the mid-flight sample back here before delivering the event, so the
    /// new gesture takes over seamlessly.
    pub fn set_transform(&mut self, transform: Transform) {
        self.state.set_transform(transform);
    }

    /// Discards every bit of gesture state.
    ///
    /// Called when the viewer opens and whenever the active image changes;
    /// the new image always starts centered at unit scale.
    pub fn reset(&mut self) {
        self.state = GestureState::new();
        self.pointers.clear();
        self.taps.reset();
        self.phase = GesturePhase::Idle;
    }

    /// Handles one raw pointer event and returns the resulting effect.
    ///
    /// Events must arrive in order; the controller applies them strictly
    /// sequentially.
    pub fn handle(&mut self, event: PointerEvent) -> GestureEffect {
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event, true),
            PointerEventKind::Cancel => self.on_up(event, false),
        }
    }

    fn on_down(&mut self, event: PointerEvent) -> GestureEffect {
        self.pointers.down(event.pointer, event.position, event.time_ms);
        match self.pointers.count() {
            1 => {
                if self.taps.register_tap(event.time_ms) {
                    return self.toggle_zoom(event.position);
                }
                self.state.single_start = Some(SingleStart {
                    point: event.position,
                    translate: self.state.translate,
                });
                self.state.is_panning = true;
                self.phase = GesturePhase::Panning;
                GestureEffect::None
            }
            2 => {
                // A second finger turns the sequence into a pinch and makes
                // the armed tap ineligible.
                self.taps.reset();
                self.snapshot_pinch();
                self.state.single_start = None;
                self.state.is_panning = true;
                self.phase = GesturePhase::Pinching;
                GestureEffect::None
            }
            // Third and later pointers are tracked but do not re-baseline.
            _ => GestureEffect::None,
        }
    }

    fn on_move(&mut self, event: PointerEvent) -> GestureEffect {
        self.pointers
            .moved(event.pointer, event.position, event.time_ms);
        match self.phase {
            GesturePhase::Idle => GestureEffect::None,
            GesturePhase::Panning => self.move_single(event.position),
            GesturePhase::Pinching => self.move_pinch(),
        }
    }

    fn move_single(&mut self, position: Point) -> GestureEffect {
        let Some(start) = self.state.single_start else {
            return GestureEffect::None;
        };
        let delta = position - start.point;
        if self.state.scale <= PAN_CLASSIFY_SCALE {
            // Swipe candidate: horizontal page-turn feel, vertical movement
            // is dropped entirely.
            self.state.translate = Vec2::new(delta.x, 0.0);
        } else {
            let bounds = PanBounds::for_scale(self.state.scale, self.container);
            self.state.translate = bounds.rubber_band(start.translate + delta);
        }
        GestureEffect::Apply(self.state.transform())
    }

    fn move_pinch(&mut self) -> GestureEffect {
        let Some(baseline) = self.state.pinch_start else {
            return GestureEffect::None;
        };
        let Some((a, b)) = self.pointers.pair() else {
            return GestureEffect::None;
        };
        let distance = (b.position - a.position).hypot();
        match baseline.solve(distance) {
            Some(transform) => {
                self.state.set_transform(transform);
                GestureEffect::Apply(transform)
            }
            None => {
                // Degenerate baseline (both pointers at one spot). Skip the
                // frame and re-baseline so the next move has something to
                // scale against.
                self.snapshot_pinch();
                GestureEffect::None
            }
        }
    }

    fn on_up(&mut self, event: PointerEvent, allow_navigation: bool) -> GestureEffect {
        let Some(lifted) = self.pointers.lift(event.pointer) else {
            return GestureEffect::None;
        };
        match self.phase {
            GesturePhase::Idle => GestureEffect::None,
            GesturePhase::Pinching => match self.pointers.count() {
                0 => self.release(None, allow_navigation),
                1 => {
                    // Falling back from two pointers to one: re-snapshot the
                    // drag baseline from the remaining finger so the image
                    // does not jump.
                    let Some(remaining) = self.pointers.solo().copied() else {
                        return GestureEffect::None;
                    };
                    // Restart the remaining pointer's sample so pinch-era
                    // velocity cannot leak into a later swipe commit.
                    self.pointers
                        .down(remaining.id, remaining.position, event.time_ms);
                    self.state.pinch_start = None;
                    self.state.single_start = Some(SingleStart {
                        point: remaining.position,
                        translate: self.state.translate,
                    });
                    self.phase = GesturePhase::Panning;
                    GestureEffect::None
                }
                _ => {
                    self.snapshot_pinch();
                    GestureEffect::None
                }
            },
            GesturePhase::Panning => {
                if self.pointers.count() == 0 {
                    let release_point = Some((event.position, lifted));
                    self.release(release_point, allow_navigation)
                } else {
                    // An ignored extra pointer lifted; the drag continues.
                    GestureEffect::None
                }
            }
        }
    }

    /// Release logic: swipe commit, swipe reset, snap-back, or scale reset.
    fn release(
        &mut self,
        single: Option<(Point, PointerSample)>,
        allow_navigation: bool,
    ) -> GestureEffect {
        let from = self.state.transform();
        self.state.is_panning = false;
        self.phase = GesturePhase::Idle;

        let swipe = self.state.scale <= PAN_CLASSIFY_SCALE;
        if let (true, Some(start), Some((position, lifted))) =
            (swipe, self.state.single_start, single)
        {
            let dx = position.x - start.point.x;
            let vx = lifted.velocity().x;
            if allow_navigation
                && (dx.abs() > SWIPE_DISTANCE_PX || vx.abs() > SWIPE_VELOCITY_PX_PER_S)
            {
                let direction = if dx != 0.0 {
                    if dx < 0.0 {
                        NavDirection::Forward
                    } else {
                        NavDirection::Backward
                    }
                } else if vx < 0.0 {
                    NavDirection::Forward
                } else {
                    NavDirection::Backward
                };
                self.reset();
                return GestureEffect::Navigate(direction);
            }
        }

        self.state.single_start = None;
        self.state.pinch_start = None;

        let to = if self.state.scale < 1.0 {
            // Pinched below resting zoom: snap the whole transform home.
            Transform::IDENTITY
        } else if swipe {
            // Swipe that did not commit: slide back to center.
            Transform::new(Vec2::ZERO, self.state.scale)
        } else {
            let bounds = PanBounds::for_scale(self.state.scale, self.container);
            Transform::new(bounds.clamp(self.state.translate), self.state.scale)
        };

        // The resting state is legal by construction; the host only animates
        // the visual toward it.
        self.state.set_transform(to);
        if to == from {
            GestureEffect::None
        } else {
            GestureEffect::Settle { from, to }
        }
    }

    fn toggle_zoom(&mut self, tapped: Point) -> GestureEffect {
        let from = self.state.transform();
        let to = if self.state.scale > ZOOM_TOGGLE_RESET_ABOVE {
            Transform::IDENTITY
        } else {
            let center = Vec2::new(self.container.width / 2.0, self.container.height / 2.0);
            let focal = tapped.to_vec2() - center;
            Transform::IDENTITY.zoom_about(focal, DOUBLE_TAP_ZOOM_SCALE)
        };
        self.state.single_start = None;
        self.state.pinch_start = None;
        self.state.is_panning = false;
        self.phase = GesturePhase::Idle;
        self.state.set_transform(to);
        if to == from {
            GestureEffect::None
        } else {
            GestureEffect::Settle { from, to }
        }
    }

    fn snapshot_pinch(&mut self) {
        if let Some((a, b)) = self.pointers.pair() {
            self.state.pinch_start = Some(PinchBaseline::new(
                a.position,
                b.position,
                self.state.transform(),
                self.container,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Size = Size::new(300.0, 400.0);
    const P1: PointerId = PointerId(1);
    const P2: PointerId = PointerId(2);

    fn controller() -> GestureController {
        GestureController::new(CONTAINER)
    }

    /// Pinches pointers 1 and 2 from `start` apart to `end` apart, centered
    /// on the container, and lifts both fingers.
    fn pinch_to(gestures: &mut GestureController, start: f64, end: f64) {
        let cy = CONTAINER.height / 2.0;
        let cx = CONTAINER.width / 2.0;
        gestures.handle(PointerEvent::down(P1, Point::new(cx - start / 2.0, cy), 0));
        gestures.handle(PointerEvent::down(P2, Point::new(cx + start / 2.0, cy), 10));
        gestures.handle(PointerEvent::moved(P1, Point::new(cx - end / 2.0, cy), 50));
        gestures.handle(PointerEvent::moved(P2, Point::new(cx + end / 2.0, cy), 60));
        gestures.handle(PointerEvent::up(P1, Point::new(cx - end / 2.0, cy), 70));
        gestures.handle(PointerEvent::up(P2, Point::new(cx + end / 2.0, cy), 80));
    }

    #[test]
    fn single_down_enters_panning() {
        let mut gestures = controller();
        let effect = gestures.handle(PointerEvent::down(P1, Point::new(100.0, 100.0), 1_000));
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(gestures.phase(), GesturePhase::Panning);
        assert!(gestures.state().is_panning);
        assert!(gestures.state().single_start.is_some());
    }

    #[test]
    fn unzoomed_drag_is_horizontal_only() {
        let mut gestures = controller();
        gestures.handle(PointerEvent::down(P1, Point::new(200.0, 200.0), 0));
        let effect = gestures.handle(PointerEvent::moved(P1, Point::new(160.0, 250.0), 16));
        let GestureEffect::Apply(transform) = effect else {
            panic!("expected an immediate transform");
        };
        // The vertical component is dropped while swipe-classified.
        assert_eq!(transform.translate, Vec2::new(-40.0, 0.0));
        assert_eq!(transform.scale, 1.0);
    }

    #[test]
    fn swipe_commit_by_distance() {
        let mut gestures = controller();
        gestures.handle(PointerEvent::down(P1, Point::new(200.0, 200.0), 0));
        // Slow drag: ~70px over 700ms is 100 px/s, below the velocity gate.
        for (i, t) in [(1, 100_u64), (2, 300), (3, 500), (4, 700)] {
            let x = 200.0 - 17.5 * f64::from(i);
            gestures.handle(PointerEvent::moved(P1, Point::new(x, 200.0), t));
        }
        let effect = gestures.handle(PointerEvent::up(P1, Point::new(130.0, 200.0), 710));
        assert_eq!(effect, GestureEffect::Navigate(NavDirection::Forward));
        // Gesture state was rebuilt for the incoming image.
        assert!(gestures.transform().is_identity());
        assert_eq!(gestures.phase(), GesturePhase::Idle);
    }

    #[test]
    fn swipe_commit_by_velocity() {
        let mut gestures = controller();
        gestures.handle(PointerEvent::down(P1, Point::new(200.0, 200.0), 1_000));
        // Only 20px of travel, but in 100ms: -200 px/s beats the gate.
        gestures.handle(PointerEvent::moved(P1, Point::new(180.0, 200.0), 1_100));
        let effect = gestures.handle(PointerEvent::up(P1, Point::new(180.0, 200.0), 1_100));
        assert_eq!(effect, GestureEffect::Navigate(NavDirection::Forward));
    }

    #[test]
    fn slow_short_swipe_settles_home() {
        let mut gestures = controller();
        gestures.handle(PointerEvent::down(P1, Point::new(200.0, 200.0), 0));
        // 20px over 400ms is -50 px/s: below both gates.
        gestures.handle(PointerEvent::moved(P1, Point::new(190.0, 200.0), 200));
        gestures.handle(PointerEvent::moved(P1, Point::new(180.0, 200.0), 400));
        let effect = gestures.handle(PointerEvent::up(P1, Point::new(180.0, 200.0), 410));
        assert_eq!(
            effect,
            GestureEffect::Settle {
                from: Transform::new(Vec2::new(-20.0, 0.0), 1.0),
                to: Transform::IDENTITY,
            }
        );
        assert!(gestures.transform().is_identity());
    }

    #[test]
    fn rightward_swipe_navigates_backward() {
        let mut gestures = controller();
        gestures.handle(PointerEvent::down(P1, Point::new(100.0, 200.0), 0));
        gestures.handle(PointerEvent::moved(P1, Point::new(170.0, 200.0), 500));
        let effect = gestures.handle(PointerEvent::up(P1, Point::new(170.0, 200.0), 510));
        assert_eq!(effect, GestureEffect::Navigate(NavDirection::Backward));
    }

    #[test]
    fn pinch_spread_scales_and_keeps_focal_fixed() {
        let mut gestures = controller();
        // Two fingers 100px apart around the container center.
        gestures.handle(PointerEvent::down(P1, Point::new(100.0, 200.0), 0));
        gestures.handle(PointerEvent::down(P2, Point::new(200.0, 200.0), 10));
        assert_eq!(gestures.phase(), GesturePhase::Pinching);

        // Spread to 200px.
        gestures.handle(PointerEvent::moved(P1, Point::new(50.0, 200.0), 50));
        let effect = gestures.handle(PointerEvent::moved(P2, Point::new(250.0, 200.0), 60));
        let GestureEffect::Apply(transform) = effect else {
            panic!("expected an immediate transform");
        };
        assert!((transform.scale - 2.0).abs() < 1e-9);
        // Focal point was the container center, so no translation appears.
        assert!(transform.translate.x.abs() < 1e-9);
        assert!(transform.translate.y.abs() < 1e-9);
    }

    #[test]
    fn pinch_ratio_clamps_at_max_scale() {
        let mut gestures = controller();
        gestures.handle(PointerEvent::down(P1, Point::new(145.0, 200.0), 0));
        gestures.handle(PointerEvent::down(P2, Point::new(155.0, 200.0), 10));
        // 10px baseline spread to 200px requests 20x; the solver clamps.
        gestures.handle(PointerEvent::moved(P1, Point::new(50.0, 200.0), 50));
        let effect = gestures.handle(PointerEvent::moved(P2, Point::new(250.0, 200.0), 60));
        let GestureEffect::Apply(transform) = effect else {
            panic!("expected an immediate transform");
        };
        assert_eq!(transform.scale, lightbox_transform::MAX_SCALE);
    }

    #[test]
    fn coincident_pinch_pointers_skip_the_frame() {
        let mut gestures = controller();
        let p = Point::new(150.0, 200.0);
        gestures.handle(PointerEvent::down(P1, p, 0));
        gestures.handle(PointerEvent::down(P2, p, 10));
        // Zero baseline distance: the frame is skipped, nothing is applied.
        let effect = gestures.handle(PointerEvent::moved(P2, Point::new(250.0, 200.0), 50));
        assert_eq!(effect, GestureEffect::None);
        // The re-baselined pinch works on the following frame.
        let effect = gestures.handle(PointerEvent::moved(P2, Point::new(350.0, 200.0), 60));
        assert!(matches!(effect, GestureEffect::Apply(_)));
    }

    #[test]
    fn lifting_one_pinch_finger_falls_back_to_panning() {
        let mut gestures = controller();
        gestures.handle(PointerEvent::down(P1, Point::new(100.0, 200.0), 0));
        gestures.handle(PointerEvent::down(P2, Point::new(200.0, 200.0), 10));
        gestures.handle(PointerEvent::moved(P1, Point::new(50.0, 200.0), 50));
        gestures.handle(PointerEvent::moved(P2, Point::new(250.0, 200.0), 60));

        let effect = gestures.handle(PointerEvent::up(P1, Point::new(50.0, 200.0), 100));
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(gestures.phase(), GesturePhase::Panning);

        // The remaining finger drags from a fresh baseline: no jump.
        let translate_before = gestures.state().translate;
        let effect = gestures.handle(PointerEvent::moved(P2, Point::new(260.0, 200.0), 120));
        let GestureEffect::Apply(transform) = effect else {
            panic!("expected an immediate transform");
        };
        assert!((transform.translate.x - (translate_before.x + 10.0)).abs() < 1e-9);
    }

    #[test]
    fn zoomed_pan_rubber_bands_past_the_edge() {
        let mut gestures = controller();
        pinch_to(&mut gestures, 100.0, 200.0);
        assert!((gestures.state().scale - 2.0).abs() < 1e-9);

        // maxX is 150 at 2x in a 300-wide container; drag to a raw 200.
        gestures.handle(PointerEvent::down(P1, Point::new(50.0, 200.0), 1_000));
        let effect = gestures.handle(PointerEvent::moved(P1, Point::new(250.0, 200.0), 1_500));
        let GestureEffect::Apply(transform) = effect else {
            panic!("expected an immediate transform");
        };
        assert!((transform.translate.x - 165.0).abs() < 1e-9);

        // Release snaps back to the bound.
        let effect = gestures.handle(PointerEvent::up(P1, Point::new(250.0, 200.0), 1_510));
        let GestureEffect::Settle { to, .. } = effect else {
            panic!("expected a settle animation");
        };
        assert!((to.translate.x - 150.0).abs() < 1e-9);
        assert_eq!(gestures.transform(), to);
    }

    #[test]
    fn zoomed_pan_inside_bounds_settles_in_place() {
        let mut gestures = controller();
        pinch_to(&mut gestures, 100.0, 200.0);

        gestures.handle(PointerEvent::down(P1, Point::new(150.0, 200.0), 1_000));
        gestures.handle(PointerEvent::moved(P1, Point::new(190.0, 230.0), 1_400));
        let effect = gestures.handle(PointerEvent::up(P1, Point::new(190.0, 230.0), 1_410));
        // Nothing to animate: the resting position is already legal.
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(gestures.state().translate, Vec2::new(40.0, 30.0));
    }

    #[test]
    fn pinch_below_unit_scale_resets_on_release() {
        let mut gestures = controller();
        pinch_to(&mut gestures, 200.0, 100.0);
        // Both fingers lifted at 0.5x: the release resets to identity.
        assert!(gestures.transform().is_identity());
    }

    #[test]
    fn double_tap_zooms_about_the_tapped_point() {
        let mut gestures = controller();
        let tap = Point::new(200.0, 200.0); // 50px right of center
        gestures.handle(PointerEvent::down(P1, tap, 0));
        gestures.handle(PointerEvent::up(P1, tap, 20));
        let effect = gestures.handle(PointerEvent::down(P1, tap, 150));
        let GestureEffect::Settle { from, to } = effect else {
            panic!("expected a zoom toggle");
        };
        assert_eq!(from, Transform::IDENTITY);
        assert_eq!(to.scale, DOUBLE_TAP_ZOOM_SCALE);
        // focal - focal * 2.5 = -1.5 * focal
        assert_eq!(to.translate, Vec2::new(-75.0, 0.0));
        gestures.handle(PointerEvent::up(P1, tap, 170));
        assert_eq!(gestures.transform(), to);
    }

    #[test]
    fn double_tap_toggle_is_idempotent() {
        let mut gestures = controller();
        let tap = Point::new(120.0, 260.0);
        // First double-tap: zoom in.
        gestures.handle(PointerEvent::down(P1, tap, 0));
        gestures.handle(PointerEvent::up(P1, tap, 20));
        gestures.handle(PointerEvent::down(P1, tap, 120));
        gestures.handle(PointerEvent::up(P1, tap, 140));
        assert_eq!(gestures.state().scale, DOUBLE_TAP_ZOOM_SCALE);

        // Second double-tap at the same point: back to identity.
        gestures.handle(PointerEvent::down(P1, tap, 1_000));
        gestures.handle(PointerEvent::up(P1, tap, 1_020));
        let effect = gestures.handle(PointerEvent::down(P1, tap, 1_120));
        let GestureEffect::Settle { to, .. } = effect else {
            panic!("expected a zoom toggle");
        };
        assert_eq!(to, Transform::IDENTITY);
        gestures.handle(PointerEvent::up(P1, tap, 1_140));
        assert!(gestures.transform().is_identity());
    }

    #[test]
    fn taps_separated_by_more_than_the_window_do_not_toggle() {
        let mut gestures = controller();
        let tap = Point::new(150.0, 200.0);
        gestures.handle(PointerEvent::down(P1, tap, 0));
        gestures.handle(PointerEvent::up(P1, tap, 20));
        let effect = gestures.handle(PointerEvent::down(P1, tap, 400));
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(gestures.phase(), GesturePhase::Panning);
    }

    #[test]
    fn tap_followed_by_pinch_is_not_double_tap_eligible() {
        let mut gestures = controller();
        let tap = Point::new(150.0, 200.0);
        // First tap arms the detector...
        gestures.handle(PointerEvent::down(P1, tap, 0));
        // ...but a second pointer makes this a pinch.
        gestures.handle(PointerEvent::down(P2, Point::new(250.0, 200.0), 50));
        gestures.handle(PointerEvent::up(P1, tap, 100));
        gestures.handle(PointerEvent::up(P2, Point::new(250.0, 200.0), 110));

        // A down inside what would have been the window is a fresh gesture.
        let effect = gestures.handle(PointerEvent::down(P1, tap, 200));
        assert_eq!(effect, GestureEffect::None);
        assert_eq!(gestures.phase(), GesturePhase::Panning);
    }

    #[test]
    fn cancel_never_navigates() {
        let mut gestures = controller();
        gestures.handle(PointerEvent::down(P1, Point::new(200.0, 200.0), 0));
        // Far past the commit distance, fast; an up would navigate.
        gestures.handle(PointerEvent::moved(P1, Point::new(80.0, 200.0), 50));
        let effect = gestures.handle(PointerEvent::cancel(P1, Point::new(80.0, 200.0), 60));
        assert_eq!(
            effect,
            GestureEffect::Settle {
                from: Transform::new(Vec2::new(-120.0, 0.0), 1.0),
                to: Transform::IDENTITY,
            }
        );
        assert_eq!(gestures.phase(), GesturePhase::Idle);
    }

    #[test]
    fn reset_rebuilds_everything() {
        let mut gestures = controller();
        pinch_to(&mut gestures, 100.0, 200.0);
        gestures.handle(PointerEvent::down(P1, Point::new(150.0, 200.0), 1_000));
        gestures.reset();
        assert!(gestures.transform().is_identity());
        assert_eq!(gestures.phase(), GesturePhase::Idle);
        assert!(!gestures.state().is_panning);
    }

    #[test]
    fn resize_is_picked_up_by_the_next_clamp() {
        let mut gestures = controller();
        pinch_to(&mut gestures, 100.0, 200.0);

        // In a 600-wide container the same 2x scale allows 300px of pan.
        gestures.set_container(Size::new(600.0, 400.0));
        gestures.handle(PointerEvent::down(P1, Point::new(100.0, 200.0), 1_000));
        let effect = gestures.handle(PointerEvent::moved(P1, Point::new(380.0, 200.0), 1_500));
        let GestureEffect::Apply(transform) = effect else {
            panic!("expected an immediate transform");
        };
        // 280px raw is inside the new bound; no rubber-banding.
        assert!((transform.translate.x - 280.0).abs() < 1e-9);
    }

    #[test]
    fn move_without_down_is_ignored() {
        let mut gestures = controller();
        let effect = gestures.handle(PointerEvent::moved(P1, Point::new(10.0, 10.0), 5));
        assert_eq!(effect, GestureEffect::None);
        let effect = gestures.handle(PointerEvent::up(P1, Point::new(10.0, 10.0), 10));
        assert_eq!(effect, GestureEffect::None);
    }
}
