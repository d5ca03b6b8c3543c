// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Vec2};

use crate::drag::DragTracker;

/// Where the gesture state machine is between events.
///
/// Only `Idle` outlives a gesture: every pointer-up, Escape, or pointer-leave
/// returns to it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The pointer is down but has not yet moved past the drag threshold.
    ///
    /// Releasing now is a click.
    PendingBoxSelect {
        /// Press and latest positions.
        drag: DragTracker,
        /// Stroke under the pointer at press time.
        hit: Option<usize>,
        /// Toggle modifier held at press time.
        additive: bool,
    },
    /// A selection box is being dragged out.
    ActiveBoxSelect {
        /// Press and latest positions; their rectangle is the box.
        drag: DragTracker,
        /// Whether the result is unioned into the selection.
        additive: bool,
    },
    /// The viewport is being dragged.
    Panning {
        /// Press and latest positions.
        drag: DragTracker,
    },
}

impl GestureState {
    /// Returns `true` when no gesture is in progress.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The live selection box, normalized, while a box select is active.
    #[must_use]
    pub fn selection_box(&self) -> Option<Rect> {
        match self {
            Self::ActiveBoxSelect { drag, .. } => Some(drag.rect()),
            _ => None,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::PendingBoxSelect { .. } => "pending-box-select",
            Self::ActiveBoxSelect { .. } => "active-box-select",
            Self::Panning { .. } => "panning",
        }
    }
}

/// Effect of one transition that the host should render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderHint {
    /// Draw or move the selection box overlay.
    SelectionBox(Rect),
    /// Remove the selection box overlay. The selection may also have changed.
    SelectionBoxCleared,
    /// The selection changed.
    SelectionChanged,
    /// Pan the viewport by this screen-space delta.
    Pan(Vec2),
}
