// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition.
//!
//! A small two-state machine over injected monotonic timestamps: the first
//! eligible tap arms the detector, a second tap inside the window fires. No
//! wall clock is read anywhere, so tests drive it with plain numbers.
//!
//! ## Minimal example
//!
//! ```rust
//! use lightbox_gesture::DoubleTapDetector;
//!
//! let mut taps = DoubleTapDetector::new();
//! assert!(!taps.register_tap(1_000));
//! assert!(taps.register_tap(1_200)); // 200ms later: double-tap
//!
//! // The window is consumed; a third tap starts over.
//! assert!(!taps.register_tap(1_350));
//! ```

/// Two taps within this window count as a double-tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Scale a double-tap zooms to when the image is at rest zoom.
pub const DOUBLE_TAP_ZOOM_SCALE: f64 = 2.5;

/// Scales above this reset to identity on double-tap instead of zooming in.
pub const ZOOM_TOGGLE_RESET_ABOVE: f64 = 1.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum TapState {
    #[default]
    Idle,
    AwaitingSecondTap {
        at: u64,
    },
}

/// Recognizes two taps inside [`DOUBLE_TAP_WINDOW_MS`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DoubleTapDetector {
    state: TapState,
}

impl DoubleTapDetector {
    /// Creates an idle detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a single-pointer tap at `now_ms`.
    ///
    /// Returns `true` when this tap completes a double-tap, in which case the
    /// window is consumed and the detector returns to idle. A tap outside the
    /// window (or the first tap ever) arms the detector instead.
    pub fn register_tap(&mut self, now_ms: u64) -> bool {
        match self.state {
            TapState::AwaitingSecondTap { at } if now_ms.saturating_sub(at) < DOUBLE_TAP_WINDOW_MS => {
                self.state = TapState::Idle;
                true
            }
            _ => {
                self.state = TapState::AwaitingSecondTap { at: now_ms };
                false
            }
        }
    }

    /// Forgets any armed tap.
    ///
    /// Called when a tap grows into something else — a second pointer turned
    /// the sequence into a pinch — or when the active image changes.
    pub fn reset(&mut self) {
        self.state = TapState::Idle;
    }

    /// `true` while the first tap is armed and the window could still close.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self.state, TapState::AwaitingSecondTap { .. })
    }
}
