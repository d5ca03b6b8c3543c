// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill View: viewport, per-page layout, and coordinate transforms.
//!
//! An ink canvas shows several pages at once. Each page records samples in its
//! own native device coordinates, and each page is placed on the shared screen
//! by its own [`LayoutEntry`] (origin and scale) followed by one global
//! [`Viewport`] (pan and zoom):
//!
//! ```text
//! screen = (native - origin) * scale * zoom + pan
//! ```
//!
//! This crate provides:
//! - [`Viewport`]: global pan/zoom with zoom limits and anchored zoom.
//! - [`PageLayout`]: the map of per-page entries, with lazy default synthesis,
//!   anchor-preserving [`PageLayout::rescale`], [`PageLayout::reposition`],
//!   and [`PageLayout::reset`].
//! - [`to_screen`] / [`to_native`] / [`page_to_screen`]: the transform itself.
//! - [`LayoutSnapshot`]: the serializable form of a layout.
//!
//! It does **not** render anything or own any strokes.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use quill_page::PageKey;
//! use quill_view::{PageLayout, Viewport, to_screen};
//!
//! let key = PageKey::new(0, 0, 1, 1);
//! let mut layout = PageLayout::new();
//! let mut viewport = Viewport::new();
//! viewport.set_pan(Vec2::new(20.0, 20.0));
//!
//! // The first sample seen on a page becomes its origin.
//! layout.get_or_init(key, Point::new(100.0, 50.0));
//!
//! // Resize the page around a point that must not move on screen.
//! let anchor = Point::new(130.0, 70.0);
//! let before = to_screen(anchor, layout.entry(&key).unwrap(), &viewport);
//! let entry = layout.rescale(key, 2.0, anchor);
//! let after = to_screen(anchor, &entry, &viewport);
//! assert!((before - after).hypot() < 1e-9);
//! ```

mod layout;
mod limits;
mod snapshot;
mod transform;
mod viewport;

pub use layout::{LayoutEntry, PageLayout, ScaleLimits};
pub use limits::InvalidLimits;
pub use snapshot::{LayoutSnapshot, SnapshotEntry, SnapshotError};
pub use transform::{page_to_screen, to_native, to_screen};
pub use viewport::{Viewport, ZoomLimits};
