// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Page: page identity and stroke records for ink canvases.
//!
//! Pen strokes arrive from an import collaborator already merged, de-duplicated
//! and time-ordered. Each stroke carries the raw page identity reported by the
//! pen (section, owner, book, page), which may be incomplete. This crate turns
//! that identity into a [`PageKey`], the single lookup key used by every
//! page-indexed map in the other Quill crates.
//!
//! - [`PageKey`]: canonical `S{section}/O{owner}/B{book}/P{page}` identity.
//! - [`PageInfo`]: the raw, possibly partial, identity attached to a stroke.
//! - [`Stroke`]: an immutable sequence of native-space sample points.
//! - [`PageKeyResolver`]: resolves strokes to keys, falling back to
//!   [`PageKey::FALLBACK`] and logging one warning per offending stroke.
//! - [`PageFilter`]: which pages are currently visible.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use quill_page::{PageInfo, PageKey, PageKeyResolver, Stroke, StrokeId};
//!
//! let mut resolver = PageKeyResolver::new();
//!
//! let info = PageInfo::new(Some(3), Some(27), Some(1), Some(12));
//! let stroke = Stroke::new(StrokeId(1), Some(info), vec![Point::new(1.0, 2.0)]);
//! assert_eq!(resolver.resolve(&stroke).to_string(), "S3/O27/B1/P12");
//!
//! // Strokes without a usable identity land on the fallback page.
//! let orphan = Stroke::new(StrokeId(2), None, vec![Point::new(0.0, 0.0)]);
//! assert_eq!(resolver.resolve(&orphan), PageKey::FALLBACK);
//! assert_eq!(resolver.diagnostic_count(), 1);
//! ```

mod filter;
mod key;
mod resolver;
mod stroke;

pub use filter::PageFilter;
pub use key::{MissingField, PageInfo, PageKey, ParsePageKeyError, canonical_key};
pub use resolver::PageKeyResolver;
pub use stroke::{Stroke, StrokeId};
