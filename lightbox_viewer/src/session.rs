// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewer session: one open lightbox over an ordered image list.
//!
//! [`ViewerSession`] wires the gesture controller, the slide navigator, and
//! the handle registry together and owns the two animations the viewer can
//! play. It is the single entry point hosts talk to: pointer events go in
//! through [`handle_pointer`](ViewerSession::handle_pointer), time goes in
//! through [`tick`](ViewerSession::tick), and transforms come out through
//! the host's [`TransformSink`].
//!
//! Two rules keep the state sound:
//!
//! - While a slide transition is in flight, every pointer event is dropped
//!   before it reaches the gesture controller. The transition is the only
//!   thing allowed to touch the index/transform pair until it settles.
//! - A settle animation (snap-back, zoom toggle) is softer: a new
//!   pointer-down interrupts it and the gesture takes over from the exact
//!   mid-flight value.

use alloc::boxed::Box;

use kurbo::{Size, Vec2};
use lightbox_gesture::{
    GestureController, GestureEffect, GesturePhase, NavDirection, PointerEvent, PointerEventKind,
};
use lightbox_transform::{PanBounds, Transform};

use crate::animate::{SNAP_DURATION_MS, TransformAnimation};
use crate::navigator::SlideNavigator;
use crate::sink::{HandleRegistry, TransformSink, VisualHandle};

/// An open viewer over `image_count` images.
pub struct ViewerSession {
    gestures: GestureController,
    navigator: SlideNavigator,
    registry: HandleRegistry,
    settle: Option<TransformAnimation>,
    on_close: Option<Box<dyn FnOnce()>>,
}

impl ViewerSession {
    /// Opens a session on `image_count` images, starting at `initial_index`.
    ///
    /// An out-of-range initial index is clamped into the valid range. A zero
    /// image count yields a placeholder session: it renders, but all gesture
    /// and navigation machinery is inert.
    #[must_use]
    pub fn open(image_count: usize, initial_index: usize, container: Size) -> Self {
        Self {
            gestures: GestureController::new(container),
            navigator: SlideNavigator::new(image_count, initial_index),
            registry: HandleRegistry::new(),
            settle: None,
            on_close: None,
        }
    }

    /// Registers the callback invoked when the viewer is dismissed.
    pub fn set_on_close(&mut self, on_close: impl FnOnce() + 'static) {
        self.on_close = Some(Box::new(on_close));
    }

    /// The settled active image index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.navigator.active_index()
    }

    /// The index the ambient backdrop should render from.
    ///
    /// The backdrop follows the settled index; it does not track a slide
    /// mid-flight.
    #[must_use]
    pub fn backdrop_index(&self) -> usize {
        self.navigator.active_index()
    }

    /// Whether a slide transition is in flight (the input lock).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.navigator.is_animating()
    }

    /// Whether this session was opened on an empty image list.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.navigator.is_empty()
    }

    /// Current transform of the active image.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.gestures.transform()
    }

    /// Binds `index` to the visual the host currently has mounted for it.
    pub fn bind_visual(&mut self, index: usize, handle: VisualHandle) {
        self.registry.bind(index, handle);
    }

    /// Removes the visual binding for `index`.
    pub fn unbind_visual(&mut self, index: usize) {
        self.registry.unbind(index);
    }

    /// Feeds one pointer event through the gesture controller.
    ///
    /// Silently dropped while a slide transition is in flight or the session
    /// is a placeholder; gesture state and index are guaranteed unchanged in
    /// both cases.
    pub fn handle_pointer<S: TransformSink>(&mut self, event: PointerEvent, sink: &mut S) {
        if self.is_placeholder() || self.navigator.is_animating() {
            return;
        }
        if event.kind == PointerEventKind::Down {
            // A new touch takes over a settle mid-flight, from the exact
            // animated value.
            if let Some(anim) = self.settle.take() {
                self.gestures.set_transform(anim.sample(event.time_ms));
            }
        }
        let before = self.gestures.transform();
        match self.gestures.handle(event) {
            GestureEffect::None => {}
            GestureEffect::Apply(transform) => {
                self.write_active(transform, sink);
            }
            GestureEffect::Settle { from, to } => {
                self.settle = Some(TransformAnimation::new(from, to, event.time_ms, SNAP_DURATION_MS));
            }
            GestureEffect::Navigate(direction) => {
                if self.navigator.navigate(direction, event.time_ms).is_some() {
                    self.settle = None;
                } else {
                    // Nowhere to navigate (single image). The controller has
                    // already reset; glide the dragged image back home.
                    self.settle = Some(TransformAnimation::new(
                        before,
                        Transform::IDENTITY,
                        event.time_ms,
                        SNAP_DURATION_MS,
                    ));
                }
            }
        }
    }

    /// Advances animations to `now_ms`.
    ///
    /// Hosts call this once per frame while
    /// [`needs_ticks`](ViewerSession::needs_ticks) reports true. Settle
    /// animations write the sampled transform to the active visual; a slide
    /// transition that completes here settles the index, rebuilds gesture
    /// state, and writes identity to the freshly resolved visual for the new
    /// index.
    pub fn tick<S: TransformSink>(&mut self, now_ms: u64, sink: &mut S) {
        if let Some(anim) = self.settle {
            self.write_active(anim.sample(now_ms), sink);
            if anim.is_finished(now_ms) {
                self.settle = None;
            }
        }
        if let Some(new_index) = self.navigator.tick(now_ms) {
            self.gestures.reset();
            // Resolve by the new index; the outgoing visual may still be
            // mid-exit and must not receive this write.
            if let Some(handle) = self.registry.resolve(new_index) {
                sink.write_transform(handle, Transform::IDENTITY);
            }
        }
    }

    /// Whether [`tick`](ViewerSession::tick) currently has work to do.
    #[must_use]
    pub fn needs_ticks(&self) -> bool {
        self.settle.is_some() || self.navigator.is_animating()
    }

    /// Programmatic navigation to the next image (wraps at the end).
    ///
    /// Returns whether a slide began. Refused while one is in flight.
    pub fn next(&mut self, now_ms: u64) -> bool {
        self.navigate(NavDirection::Forward, now_ms)
    }

    /// Programmatic navigation to the previous image (wraps at the start).
    pub fn prev(&mut self, now_ms: u64) -> bool {
        self.navigate(NavDirection::Backward, now_ms)
    }

    fn navigate(&mut self, direction: NavDirection, now_ms: u64) -> bool {
        if self.navigator.navigate(direction, now_ms).is_none() {
            return false;
        }
        self.settle = None;
        self.gestures.reset();
        true
    }

    /// Adopts a new container size after a surface resize.
    ///
    /// Bounds derive from the container, so later pans clamp against the new
    /// size automatically; a settled translate that the new bounds no longer
    /// admit is re-clamped and written out immediately.
    pub fn handle_resize<S: TransformSink>(&mut self, container: Size, sink: &mut S) {
        self.gestures.set_container(container);
        if self.gestures.phase() != GesturePhase::Idle || self.settle.is_some() {
            return;
        }
        let transform = self.gestures.transform();
        let bounds = PanBounds::for_scale(transform.scale, container);
        let clamped = bounds.clamp(transform.translate);
        if clamped != transform.translate {
            let transform = Transform::new(clamped, transform.scale);
            self.gestures.set_transform(transform);
            self.write_active(transform, sink);
        }
    }

    /// Dismisses the viewer.
    ///
    /// All state is discarded and in-flight animations are abandoned, not
    /// awaited; the `on_close` callback fires once.
    pub fn close(&mut self) {
        self.settle = None;
        self.navigator.abort();
        self.registry.clear();
        self.gestures.reset();
        if let Some(on_close) = self.on_close.take() {
            on_close();
        }
    }

    /// Snapshot of the current session state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SessionDebugInfo {
        let transform = self.gestures.transform();
        SessionDebugInfo {
            active_index: self.navigator.active_index(),
            image_count: self.navigator.len(),
            is_animating: self.navigator.is_animating(),
            transitioning_to: self.navigator.transition().map(|t| t.to),
            is_settling: self.settle.is_some(),
            phase: self.gestures.phase(),
            scale: transform.scale,
            translate: transform.translate,
            bounds: PanBounds::for_scale(transform.scale, self.gestures.container()),
        }
    }

    fn write_active<S: TransformSink>(&self, transform: Transform, sink: &mut S) {
        if let Some(handle) = self.registry.resolve(self.navigator.active_index()) {
            sink.write_transform(handle, transform);
        }
    }
}

impl core::fmt::Debug for ViewerSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ViewerSession")
            .field("gestures", &self.gestures)
            .field("navigator", &self.navigator)
            .field("registry", &self.registry)
            .field("settle", &self.settle)
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

/// Debug snapshot of a [`ViewerSession`] state.
#[derive(Clone, Copy, Debug)]
pub struct SessionDebugInfo {
    /// Settled active image index.
    pub active_index: usize,
    /// Number of images in the session.
    pub image_count: usize,
    /// Whether a slide transition is in flight.
    pub is_animating: bool,
    /// Target index of the in-flight transition, if any.
    pub transitioning_to: Option<usize>,
    /// Whether a settle animation is in flight.
    pub is_settling: bool,
    /// Macro-state of the gesture controller.
    pub phase: GesturePhase,
    /// Current uniform scale of the active image.
    pub scale: f64,
    /// Current pan offset of the active image.
    pub translate: Vec2,
    /// Legal pan range at the current scale.
    pub bounds: PanBounds,
}
