// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Canvas: the owned state of a multi-page ink canvas.
//!
//! [`CanvasState`] ties the other Quill crates together behind one command
//! surface:
//!
//! - stroke ingestion and page filtering ([`CanvasState::set_strokes`],
//!   [`CanvasState::set_page_filter`]),
//! - pointer gestures ([`CanvasState::start_pointer`],
//!   [`CanvasState::move_pointer`], [`CanvasState::end_pointer`],
//!   [`CanvasState::cancel_gesture`]) and selection commands
//!   ([`CanvasState::select_all`], [`CanvasState::clear_selection`]),
//! - page layout ([`CanvasState::rescale_page`],
//!   [`CanvasState::reposition_page`], [`CanvasState::reset_layout`]) and its
//!   persistence ([`CanvasState::layout_snapshot`],
//!   [`CanvasState::restore_layout`]),
//! - per-frame read-only snapshots for rendering ([`CanvasState::frame`]).
//!
//! All of it is single-threaded and synchronous: the host's event loop calls
//! one method per input event, in arrival order, and nothing here performs I/O.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use quill_canvas::{CanvasConfig, CanvasState};
//! use quill_gesture::Modifiers;
//! use quill_page::{PageInfo, Stroke, StrokeId};
//!
//! let page = PageInfo::new(None, None, Some(1), Some(1));
//! let mut canvas = CanvasState::new(CanvasConfig::default());
//! canvas.set_strokes(vec![
//!     Stroke::new(StrokeId(1), Some(page), vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]),
//!     Stroke::new(StrokeId(2), Some(page), vec![Point::new(20.0, 20.0), Point::new(30.0, 30.0)]),
//! ]);
//!
//! // Drag a box over both strokes.
//! canvas.start_pointer(Point::new(-5.0, -5.0), Modifiers::NONE);
//! canvas.move_pointer(Point::new(25.0, 25.0));
//! canvas.end_pointer(Point::new(25.0, 25.0));
//! assert_eq!(canvas.selection().indices(), &[0, 1]);
//!
//! // Double the size of the page around its origin: strokes move on screen,
//! // the page origin does not.
//! canvas.rescale_page(canvas.page_of(0).unwrap(), 2.0, None);
//! assert_eq!(canvas.stroke_bounds(1).unwrap().max_x(), 60.0);
//! ```

mod config;
mod document;
mod error;
mod frame;
mod scene;
mod state;

pub use config::CanvasConfig;
pub use error::CanvasError;
pub use frame::FrameSnapshot;
pub use state::CanvasState;
