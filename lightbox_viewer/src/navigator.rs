// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slide navigation between images.
//!
//! The navigator is a two-state machine per the viewer's macro-model:
//! settled on an index, or transitioning toward a neighbor. While a
//! transition plays, `is_animating` is true and the session feeds it no
//! input; the transition is completed by host ticks, never by a clock read.

use lightbox_gesture::NavDirection;

use crate::animate::SLIDE_DURATION_MS;

/// An in-flight directional slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideTransition {
    /// Index the slide started from.
    pub from: usize,
    /// Index the slide lands on.
    pub to: usize,
    /// Which edge the incoming image enters from.
    pub direction: NavDirection,
    /// Start time in host milliseconds.
    pub started_ms: u64,
}

/// Wrap-around navigator over an ordered image list.
#[derive(Clone, Copy, Debug)]
pub struct SlideNavigator {
    active: usize,
    len: usize,
    transition: Option<SlideTransition>,
}

impl SlideNavigator {
    /// Creates a navigator settled on `initial`, clamped into range.
    ///
    /// A zero-length list settles on index 0 and refuses all navigation.
    #[must_use]
    pub fn new(len: usize, initial: usize) -> Self {
        let active = if len == 0 { 0 } else { initial.min(len - 1) };
        Self {
            active,
            len,
            transition: None,
        }
    }

    /// Number of images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the image list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The settled active index.
    ///
    /// Unchanged while a transition is in flight; it moves to the target
    /// index only when the transition completes.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Whether a slide transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn transition(&self) -> Option<&SlideTransition> {
        self.transition.as_ref()
    }

    /// Starts a wrap-around slide toward the neighbor in `direction`.
    ///
    /// Returns the transition that began, or `None` when one is already in
    /// flight or there is nowhere to go (fewer than two images).
    pub fn navigate(&mut self, direction: NavDirection, now_ms: u64) -> Option<SlideTransition> {
        if self.transition.is_some() || self.len < 2 {
            return None;
        }
        let to = match direction {
            NavDirection::Forward => (self.active + 1) % self.len,
            NavDirection::Backward => (self.active + self.len - 1) % self.len,
        };
        let transition = SlideTransition {
            from: self.active,
            to,
            direction,
            started_ms: now_ms,
        };
        self.transition = Some(transition);
        Some(transition)
    }

    /// Abandons an in-flight transition without settling on its target.
    ///
    /// Used when the viewer closes mid-slide; the index stays where it was.
    pub fn abort(&mut self) {
        self.transition = None;
    }

    /// Advances the transition clock.
    ///
    /// When the slide has played out, the navigator settles on the target
    /// index and returns it; the caller resets gesture state for the newly
    /// active image.
    pub fn tick(&mut self, now_ms: u64) -> Option<usize> {
        let transition = self.transition?;
        if now_ms.saturating_sub(transition.started_ms) < SLIDE_DURATION_MS {
            return None;
        }
        self.active = transition.to;
        self.transition = None;
        Some(self.active)
    }
}
