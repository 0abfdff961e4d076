// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Transform: pure transform math for a full-screen image viewer.
//!
//! This crate provides the headless math underneath pinch-zoom and pan
//! gestures:
//! - [`Transform`]: the `{translate, scale}` pair applied to the active image,
//!   with focal-point-preserving zoom.
//! - [`PanBounds`]: the legal pan range for a given scale and container size,
//!   with hard and elastic (rubber-band) clamping.
//! - [`PinchBaseline`]: the two-pointer gesture-start snapshot and the
//!   per-frame pinch solver derived from it.
//!
//! It does **not** track pointers or own any gesture state. Callers are
//! expected to:
//! - Feed pointer positions in container coordinates (origin at the top-left
//!   of the viewing surface).
//! - Interpret translations as offsets from the centered resting position of
//!   the image.
//! - Drive these functions from a gesture recognizer such as
//!   `lightbox_gesture`.
//!
//! ## Coordinate conventions
//!
//! All distances are in device pixels. A [`Transform`] translation is relative
//! to the image's centered position, and focal points are relative to the
//! container center, so the identity transform always means "centered, unit
//! scale" regardless of container size.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use lightbox_transform::{PanBounds, Transform};
//!
//! // A 300x400 container showing an image at 2x.
//! let bounds = PanBounds::for_scale(2.0, Size::new(300.0, 400.0));
//! assert_eq!(bounds.max, Vec2::new(150.0, 200.0));
//!
//! // Dragging past the edge is elastically damped.
//! let dragged = bounds.rubber_band(Vec2::new(200.0, 0.0));
//! assert_eq!(dragged.x, 165.0);
//!
//! // On release the resting position is hard-clamped.
//! let settled = bounds.clamp(dragged);
//! assert_eq!(settled.x, 150.0);
//! # let _ = Transform::IDENTITY;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod pinch;
mod transform;

pub use bounds::{PanBounds, RUBBER_BAND_FACTOR};
pub use pinch::PinchBaseline;
pub use transform::{MAX_SCALE, MIN_SCALE, Transform};
