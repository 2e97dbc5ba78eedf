//! Slider actions, side-effect intents, and transition logic.

use crate::geometry::{
    coordinate_for_step, nearest_item, snap_coordinate, track_offset, Point, StepDomain,
};
use crate::model::{DragTracking, SliderMetrics, SliderState, TrackAnimation, TrackPlacement};

#[derive(Debug, Clone, Copy, PartialEq)]
/// Actions accepted by [`reduce_slider`].
pub enum SliderAction {
    /// Place the track at the initially marked item and reveal it.
    Initialize {
        /// Index of the item marked current in the markup, if any.
        marked_item: Option<usize>,
    },
    /// Programmatically move to a step. Never notifies the step callback.
    SetStep {
        /// Requested step, clamped into the domain.
        step: i64,
    },
    /// Pointer pressed on the track.
    PointerDown,
    /// Pointer moved anywhere in the window.
    PointerMove {
        /// Pointer position in viewport coordinates.
        pointer: Point,
    },
    /// Pointer released anywhere in the window.
    PointerUp,
    /// An item was clicked.
    ClickItem {
        /// Clicked item index.
        index: usize,
    },
    /// The viewport was resized.
    Resize,
    /// Tear the slider down.
    Dispose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Side-effect intents emitted by [`reduce_slider`] for the slider host to execute in order.
pub enum SliderEffect {
    /// Move the track.
    AnimateTrack(TrackPlacement),
    /// Transfer the "current" marker to the item at this index.
    MarkCurrentItem(usize),
    /// Make the track visible.
    RevealTrack,
    /// Report an interactively resolved step to the consumer.
    NotifyStepChange(u32),
    /// Attach or detach the window pointer-move listener.
    DragTracking(DragTracking),
}

/// Applies a [`SliderAction`] to `state` and collects the resulting side effects.
///
/// `metrics` must be measured right before the call; direction is taken from it on every action.
/// A disposed slider ignores every action.
pub fn reduce_slider(
    state: &mut SliderState,
    domain: &StepDomain,
    metrics: &SliderMetrics,
    action: SliderAction,
) -> Vec<SliderEffect> {
    let mut effects = Vec::new();
    if state.disposed {
        return effects;
    }
    state.direction = metrics.direction;

    match action {
        SliderAction::Initialize { marked_item } => {
            let marked_item = marked_item.filter(|index| *index < domain.items());
            if !domain.is_discrete() {
                state.current_item = marked_item;
            }
            let step = domain.step_for_item(marked_item.unwrap_or(0));
            place_at_step(
                state,
                domain,
                metrics,
                step,
                TrackAnimation::Instant,
                &mut effects,
            );
            if !state.revealed {
                state.revealed = true;
                effects.push(SliderEffect::RevealTrack);
            }
        }
        SliderAction::SetStep { step } => {
            let step = domain.clamp(step);
            place_at_step(
                state,
                domain,
                metrics,
                step,
                TrackAnimation::standard(),
                &mut effects,
            );
        }
        SliderAction::PointerDown => {
            if !state.dragging {
                state.dragging = true;
                effects.push(SliderEffect::DragTracking(DragTracking::Acquire));
            }
        }
        SliderAction::PointerUp => {
            if state.dragging {
                state.dragging = false;
                effects.push(SliderEffect::DragTracking(DragTracking::Release));
            }
        }
        SliderAction::PointerMove { pointer } => {
            if state.dragging {
                resolve_pointer(state, domain, metrics, pointer, &mut effects);
            }
        }
        SliderAction::ClickItem { index } => {
            let Some(center) = metrics
                .item_center(index)
                .filter(|_| index < domain.items())
            else {
                return effects;
            };
            let coordinate = metrics.axis_range().clamp(center.along(metrics.direction));
            mark_item(state, index, &mut effects);
            effects.push(SliderEffect::AnimateTrack(placement(
                metrics,
                coordinate,
                TrackAnimation::standard(),
            )));
            let step = domain.step_for_item(index);
            state.current_step = step;
            state.last_resolved = Some(coordinate);
            effects.push(SliderEffect::NotifyStepChange(step));
        }
        SliderAction::Resize => {
            let step = state.current_step;
            place_at_step(
                state,
                domain,
                metrics,
                step,
                TrackAnimation::standard(),
                &mut effects,
            );
        }
        SliderAction::Dispose => {
            if state.dragging {
                state.dragging = false;
                effects.push(SliderEffect::DragTracking(DragTracking::Release));
            }
            state.disposed = true;
        }
    }

    effects
}

fn place_at_step(
    state: &mut SliderState,
    domain: &StepDomain,
    metrics: &SliderMetrics,
    step: u32,
    animation: TrackAnimation,
    effects: &mut Vec<SliderEffect>,
) {
    let range = metrics.axis_range();
    let item_center = domain
        .is_discrete()
        .then(|| metrics.item_center(step as usize))
        .flatten();

    let coordinate = match item_center {
        Some(center) => {
            mark_item(state, step as usize, effects);
            range.clamp(center.along(metrics.direction))
        }
        None => coordinate_for_step(range, *domain, step),
    };

    effects.push(SliderEffect::AnimateTrack(placement(metrics, coordinate, animation)));
    state.current_step = step;
    state.last_resolved = None;
}

fn resolve_pointer(
    state: &mut SliderState,
    domain: &StepDomain,
    metrics: &SliderMetrics,
    pointer: Point,
    effects: &mut Vec<SliderEffect>,
) {
    let direction = metrics.direction;
    let range = metrics.axis_range();

    let (coordinate, step, item) = if domain.is_discrete() {
        let centers = metrics.items.iter().take(domain.items()).map(|r| r.center());
        let Some(index) = nearest_item(pointer, centers) else {
            return;
        };
        let center = metrics.items[index].center();
        (range.clamp(center.along(direction)), index as u32, Some(index))
    } else {
        let (coordinate, step) = snap_coordinate(range, *domain, pointer.along(direction));
        (coordinate, step, None)
    };

    // Only the primary axis decides whether the pointer crossed a step boundary.
    if state.last_resolved == Some(coordinate) {
        return;
    }
    state.last_resolved = Some(coordinate);
    state.current_step = step;

    if let Some(index) = item {
        mark_item(state, index, effects);
    }
    effects.push(SliderEffect::AnimateTrack(placement(
        metrics,
        coordinate,
        TrackAnimation::standard(),
    )));
    effects.push(SliderEffect::NotifyStepChange(step));
}

fn mark_item(state: &mut SliderState, index: usize, effects: &mut Vec<SliderEffect>) {
    if state.current_item != Some(index) {
        state.current_item = Some(index);
        effects.push(SliderEffect::MarkCurrentItem(index));
    }
}

fn placement(metrics: &SliderMetrics, coordinate: f64, animation: TrackAnimation) -> TrackPlacement {
    TrackPlacement {
        direction: metrics.direction,
        offset: track_offset(
            coordinate,
            metrics.container,
            metrics.track,
            metrics.direction,
        ),
        animation,
    }
}
