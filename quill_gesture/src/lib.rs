// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quill Gesture: the pointer gesture state machine for ink selection.
//!
//! This crate turns a stream of pointer and keyboard [`InputEvent`]s into
//! [`SelectionSet`] mutations. It distinguishes:
//!
//! - a **click** on a stroke (select only that stroke) or on empty canvas
//!   (clear the selection),
//! - a **modifier click** on a stroke (toggle that stroke),
//! - a **box select** that starts once the pointer has moved farther than
//!   [`GestureConfig::drag_threshold`] from where it went down, additive when
//!   the toggle modifier was held at pointer-down,
//! - a **pan** while the pan modifier is held,
//! - and **cancellation** via Escape or the pointer leaving the canvas.
//!
//! The machine is a pure transition function, [`step`]. It owns no geometry:
//! hit queries go through the [`GestureScene`] trait, which the host
//! implements over its layout and hit-testing state, and effects the host
//! must perform are returned as an optional [`RenderHint`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quill_gesture::{GestureConfig, GestureScene, GestureState, InputEvent, Modifiers, step};
//! use quill_selection::SelectionSet;
//!
//! /// Two strokes, each covering a square.
//! const SQUARES: [Rect; 2] = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(20.0, 20.0, 30.0, 30.0)];
//!
//! struct Squares;
//!
//! impl GestureScene for Squares {
//!     fn stroke_at(&self, pt: Point) -> Option<usize> {
//!         SQUARES.iter().rposition(|r| r.contains(pt))
//!     }
//!     fn strokes_in(&self, rect: Rect) -> Vec<usize> {
//!         (0..SQUARES.len())
//!             .filter(|&i| {
//!                 let r = SQUARES[i];
//!                 r.x0 <= rect.x1 && r.x1 >= rect.x0 && r.y0 <= rect.y1 && r.y1 >= rect.y0
//!             })
//!             .collect()
//!     }
//!     fn visible_strokes(&self) -> Vec<usize> {
//!         vec![0, 1]
//!     }
//! }
//!
//! let config = GestureConfig::default();
//! let mut selection = SelectionSet::new();
//! let mut state = GestureState::Idle;
//!
//! // Click on the second square.
//! for event in [
//!     InputEvent::PointerDown { pos: Point::new(25.0, 25.0), modifiers: Modifiers::NONE },
//!     InputEvent::PointerUp { pos: Point::new(25.0, 25.0) },
//! ] {
//!     (state, _) = step(state, &mut selection, event, &Squares, &config);
//! }
//! assert_eq!(selection.indices(), &[1]);
//! assert!(state.is_idle());
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`GestureConfig`] and
//!   [`Modifiers`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod drag;
mod machine;
mod state;

pub use machine::{GestureScene, step};
pub use state::{GestureState, RenderHint};

use kurbo::Point;
use quill_selection::SelectionSet;

/// Tunables of the gesture state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GestureConfig {
    /// Distance in screen pixels the pointer must move, strictly, before a
    /// pending press becomes a box select.
    pub drag_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 5.0,
        }
    }
}

/// Modifier keys sampled at pointer-down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    /// Toggle-select modifier (Ctrl/Cmd on most platforms): toggles strokes on
    /// click and makes box selects additive.
    pub toggle: bool,
    /// Pan modifier (Space or middle button on most hosts): drags the viewport.
    pub pan: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        toggle: false,
        pan: false,
    };
    /// Only the toggle modifier held.
    pub const TOGGLE: Self = Self {
        toggle: true,
        pan: false,
    };
    /// Only the pan modifier held.
    pub const PAN: Self = Self {
        toggle: false,
        pan: true,
    };
}

/// One input event, in screen coordinates.
///
/// Events must be fed to [`step`] strictly in arrival order, including every
/// move between a pointer-down and its pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown {
        /// Pointer position.
        pos: Point,
        /// Modifiers held at the time of the press.
        modifiers: Modifiers,
    },
    /// Pointer moved.
    PointerMove {
        /// Pointer position.
        pos: Point,
    },
    /// Primary button released.
    PointerUp {
        /// Pointer position.
        pos: Point,
    },
    /// Pointer left the canvas.
    PointerLeave,
    /// Escape pressed.
    Escape,
    /// "Select all" command.
    SelectAll,
    /// "Clear selection" command.
    ClearSelection,
}

/// Convenience for hosts that keep the state in place.
impl GestureState {
    /// Applies `event` to `self`, returning the render hint.
    pub fn handle<S: GestureScene + ?Sized>(
        &mut self,
        selection: &mut SelectionSet,
        event: InputEvent,
        scene: &S,
        config: &GestureConfig,
    ) -> Option<RenderHint> {
        let (next, hint) = step(*self, selection, event, scene, config);
        *self = next;
        hint
    }
}
