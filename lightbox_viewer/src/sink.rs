// Copyright 2025 the Lightbox Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame write path to the host's render layer.
//!
//! Gesture transforms change at input rate, far too often to push through a
//! retained or reactive update cycle. Hosts implement [`TransformSink`] as a
//! direct write to the visual's transform property, and the session calls it
//! synchronously from event handling.
//!
//! A [`HandleRegistry`] maps each logical image index to whatever visual the
//! host currently has mounted for it. During a slide transition the outgoing
//! visual is still on screen, mid-exit; resolving by index on every write is
//! what keeps transforms off detached visuals. The session never holds a
//! [`VisualHandle`] across a transition boundary.

use hashbrown::HashMap;
use lightbox_transform::Transform;

/// Opaque identity of a host-mounted visual.
///
/// The host mints these; the session only stores and echoes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub u64);

/// Receiver for per-frame transform writes.
pub trait TransformSink {
    /// Applies `transform` to the visual `handle` immediately.
    ///
    /// Called at input frequency during a gesture and once per tick during a
    /// settle animation. Implementations must not queue or coalesce.
    fn write_transform(&mut self, handle: VisualHandle, transform: Transform);
}

/// Mapping from logical image index to the currently-mounted visual.
#[derive(Clone, Debug, Default)]
pub struct HandleRegistry {
    handles: HashMap<usize, VisualHandle>,
}

impl HandleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }

    /// Binds `index` to `handle`, replacing any previous binding.
    ///
    /// Hosts call this whenever they mount or remount a visual, including
    /// the fresh visual that enters during a slide transition.
    pub fn bind(&mut self, index: usize, handle: VisualHandle) {
        self.handles.insert(index, handle);
    }

    /// Removes the binding for `index`, if any.
    pub fn unbind(&mut self, index: usize) {
        self.handles.remove(&index);
    }

    /// The visual currently mounted for `index`.
    #[must_use]
    pub fn resolve(&self, index: usize) -> Option<VisualHandle> {
        self.handles.get(&index).copied()
    }

    /// Drops all bindings.
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
