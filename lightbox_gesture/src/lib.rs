// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Gesture: stateful gesture recognition for a full-screen image
//! viewer.
//!
//! This crate turns a raw pointer event stream into zoom/pan/swipe decisions.
//! Each module handles one interaction pattern:
//!
//! - [`state`]: the per-image mutable gesture state (translate, scale, and
//!   the gesture-start snapshots), recreated whenever the active image
//!   changes.
//! - [`pointers`]: active-pointer tracking with per-pointer velocity derived
//!   from the last two samples.
//! - [`double_tap`]: an explicit two-state double-tap recognizer over
//!   injected monotonic timestamps.
//! - [`controller`]: the idle/panning/pinching state machine that owns the
//!   pieces above and emits [`GestureEffect`]s.
//!
//! ## Design Philosophy
//!
//! The recognizers here are:
//!
//! - **Headless**: nothing touches a render layer. The controller returns
//!   effects — apply this transform now, animate toward that one, commit a
//!   navigation — and the host wires them to whatever it draws with.
//! - **Clock-free**: every time-dependent decision (double-tap window, swipe
//!   velocity) uses the millisecond timestamps carried by the events
//!   themselves, so tests never need real delays.
//! - **Single-owner**: all in-progress gesture fields live in one
//!   [`GestureState`] value owned by the controller; there is no shared or
//!   module-level mutable state.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use lightbox_gesture::{GestureController, GestureEffect, PointerEvent, PointerId};
//!
//! let mut gestures = GestureController::new(Size::new(400.0, 800.0));
//!
//! // A short un-zoomed drag to the left...
//! let finger = PointerId(1);
//! gestures.handle(PointerEvent::down(finger, Point::new(200.0, 400.0), 1_000));
//! let effect = gestures.handle(PointerEvent::moved(finger, Point::new(130.0, 400.0), 1_100));
//! assert!(matches!(effect, GestureEffect::Apply(_)));
//!
//! // ...commits a forward navigation on release.
//! let effect = gestures.handle(PointerEvent::up(finger, Point::new(130.0, 400.0), 1_120));
//! assert!(matches!(
//!     effect,
//!     GestureEffect::Navigate(lightbox_gesture::NavDirection::Forward)
//! ));
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

pub mod controller;
pub mod double_tap;
pub mod pointers;
pub mod state;

pub use controller::{
    GestureController, GestureEffect, GesturePhase, NavDirection, PAN_CLASSIFY_SCALE,
    PointerEvent, PointerEventKind, PointerId, SWIPE_DISTANCE_PX, SWIPE_VELOCITY_PX_PER_S,
};
pub use double_tap::{
    DOUBLE_TAP_WINDOW_MS, DOUBLE_TAP_ZOOM_SCALE, DoubleTapDetector, ZOOM_TOGGLE_RESET_ABOVE,
};
pub use state::{GestureState, SingleStart};
