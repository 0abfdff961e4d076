// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lightbox Viewer: the session layer of a full-screen image viewer.
//!
//! Where [`lightbox_gesture`] decides what a pointer stream means, this crate
//! decides what happens to the viewer as a whole: which image is active, how
//! slides and snap-backs play out, and how per-frame transforms reach
//! whatever the host renders with.
//!
//! - [`session`]: [`ViewerSession`], the single entry point. Pointer events
//!   and ticks go in; transform writes come out through the host's sink.
//! - [`navigator`]: wrap-around slide navigation with the `is_animating`
//!   input lock.
//! - [`sink`]: the [`TransformSink`] write path and the index-to-visual
//!   [`HandleRegistry`].
//! - [`animate`]: host-ticked transform interpolation for settles and
//!   slides.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use lightbox_transform::Transform;
//! use lightbox_viewer::{TransformSink, ViewerSession, VisualHandle};
//!
//! struct Sink;
//! impl TransformSink for Sink {
//!     fn write_transform(&mut self, handle: VisualHandle, transform: Transform) {
//!         // Apply to the host's visual for `handle`.
//!         let _ = (handle, transform);
//!     }
//! }
//!
//! let mut session = ViewerSession::open(5, 2, Size::new(400.0, 800.0));
//! session.bind_visual(2, VisualHandle(100));
//! assert_eq!(session.active_index(), 2);
//!
//! // Programmatic navigation wraps and plays a slide the host ticks.
//! let mut sink = Sink;
//! assert!(session.next(1_000));
//! assert!(session.is_animating());
//! session.tick(2_000, &mut sink);
//! assert_eq!(session.active_index(), 3);
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

pub mod animate;
pub mod navigator;
pub mod session;
pub mod sink;

pub use animate::{SLIDE_DURATION_MS, SNAP_DURATION_MS, TransformAnimation};
pub use navigator::{SlideNavigator, SlideTransition};
pub use session::{SessionDebugInfo, ViewerSession};
pub use sink::{HandleRegistry, TransformSink, VisualHandle};
