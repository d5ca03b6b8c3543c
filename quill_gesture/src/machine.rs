// Copyright 2026 the Quill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};
use quill_selection::SelectionSet;

use crate::drag::DragTracker;
use crate::{GestureConfig, GestureState, InputEvent, Modifiers, RenderHint};

/// Geometry queries the state machine needs from its host.
///
/// All coordinates are screen pixels, and results only ever name strokes that
/// are visible under the host's current page filter.
pub trait GestureScene {
    /// The stroke directly under `pt`, if any.
    fn stroke_at(&self, pt: Point) -> Option<usize>;

    /// Strokes whose bounds intersect `rect` (normalized), ascending.
    fn strokes_in(&self, rect: Rect) -> Vec<usize>;

    /// Every visible stroke, in display order.
    fn visible_strokes(&self) -> Vec<usize>;
}

/// Advances the gesture machine by one event.
///
/// Returns the next state and what, if anything, the host should redraw or
/// apply. `selection` is only mutated by clicks, completed box selects, and
/// the select-all/clear commands; cancelled gestures never touch it.
pub fn step<S: GestureScene + ?Sized>(
    state: GestureState,
    selection: &mut SelectionSet,
    event: InputEvent,
    scene: &S,
    config: &GestureConfig,
) -> (GestureState, Option<RenderHint>) {
    match event {
        InputEvent::PointerDown { pos, modifiers } => {
            pointer_down(state, selection, pos, modifiers, scene)
        }
        InputEvent::PointerMove { pos } => pointer_moved(state, pos, config),
        InputEvent::PointerUp { pos } => pointer_up(state, selection, pos, scene, config),
        InputEvent::PointerLeave | InputEvent::Escape => (GestureState::Idle, cancel_hint(&state)),
        InputEvent::SelectAll => idle_command(state, selection, |sel| {
            sel.replace_with(scene.visible_strokes());
        }),
        InputEvent::ClearSelection => idle_command(state, selection, SelectionSet::clear),
    }
}

fn pointer_down<S: GestureScene + ?Sized>(
    state: GestureState,
    selection: &mut SelectionSet,
    pos: Point,
    modifiers: Modifiers,
    scene: &S,
) -> (GestureState, Option<RenderHint>) {
    // A press while a gesture is live drops that gesture.
    let restart = cancel_hint(&state);
    let drag = DragTracker::new(pos);
    if modifiers.pan {
        return (GestureState::Panning { drag }, restart);
    }

    let hit = scene.stroke_at(pos);
    if let Some(index) = hit
        && modifiers.toggle
    {
        selection.toggle(index);
        return (GestureState::Idle, Some(RenderHint::SelectionChanged));
    }

    let next = GestureState::PendingBoxSelect {
        drag,
        hit,
        additive: modifiers.toggle,
    };
    (next, restart)
}

fn pointer_moved(
    state: GestureState,
    pos: Point,
    config: &GestureConfig,
) -> (GestureState, Option<RenderHint>) {
    match state {
        GestureState::Idle => (state, None),
        GestureState::PendingBoxSelect {
            mut drag,
            hit,
            additive,
        } => {
            drag.update(pos);
            if drag.exceeds(config.drag_threshold) {
                let next = GestureState::ActiveBoxSelect { drag, additive };
                (next, Some(RenderHint::SelectionBox(drag.rect())))
            } else {
                (
                    GestureState::PendingBoxSelect {
                        drag,
                        hit,
                        additive,
                    },
                    None,
                )
            }
        }
        GestureState::ActiveBoxSelect { mut drag, additive } => {
            drag.update(pos);
            (
                GestureState::ActiveBoxSelect { drag, additive },
                Some(RenderHint::SelectionBox(drag.rect())),
            )
        }
        GestureState::Panning { mut drag } => {
            let delta = drag.update(pos);
            (GestureState::Panning { drag }, pan_hint(delta))
        }
    }
}

fn pointer_up<S: GestureScene + ?Sized>(
    state: GestureState,
    selection: &mut SelectionSet,
    pos: Point,
    scene: &S,
    config: &GestureConfig,
) -> (GestureState, Option<RenderHint>) {
    // The release position counts as a final move.
    let (state, moved_hint) = pointer_moved(state, pos, config);
    match state {
        GestureState::Idle => (state, None),
        GestureState::PendingBoxSelect { hit, additive, .. } => {
            let before = selection.revision();
            match hit {
                Some(index) => selection.select_only(index),
                None if !additive => selection.clear(),
                None => {}
            }
            let hint = (selection.revision() != before).then_some(RenderHint::SelectionChanged);
            (GestureState::Idle, hint)
        }
        GestureState::ActiveBoxSelect { drag, additive } => {
            let rect = drag.rect();
            let hits = if rect.is_zero_area() {
                Vec::new()
            } else {
                scene.strokes_in(rect)
            };
            if additive {
                selection.extend_with(hits);
            } else {
                selection.replace_with(hits);
            }
            (GestureState::Idle, Some(RenderHint::SelectionBoxCleared))
        }
        GestureState::Panning { .. } => (GestureState::Idle, moved_hint),
    }
}

fn idle_command(
    state: GestureState,
    selection: &mut SelectionSet,
    command: impl FnOnce(&mut SelectionSet),
) -> (GestureState, Option<RenderHint>) {
    if !state.is_idle() {
        return (state, None);
    }
    let before = selection.revision();
    command(selection);
    let hint = (selection.revision() != before).then_some(RenderHint::SelectionChanged);
    (state, hint)
}

fn cancel_hint(state: &GestureState) -> Option<RenderHint> {
    match state {
        GestureState::ActiveBoxSelect { .. } => Some(RenderHint::SelectionBoxCleared),
        _ => None,
    }
}

fn pan_hint(delta: Vec2) -> Option<RenderHint> {
    (delta != Vec2::ZERO).then_some(RenderHint::Pan(delta))
}
