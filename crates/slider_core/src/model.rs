//! Slider runtime models: measured geometry, mutable state, and track placement intents.

use serde::{Deserialize, Serialize};

use crate::geometry::{AxisRange, Direction, Point, Rect};

/// Duration of every interactive/programmatic track animation.
pub const TRACK_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
/// One geometry snapshot of the slider, taken before each action is reduced.
pub struct SliderMetrics {
    /// Layout axis of the container at measurement time.
    pub direction: Direction,
    /// Container bounding box.
    pub container: Rect,
    /// Track bounding box.
    pub track: Rect,
    /// Item bounding boxes in domain order.
    pub items: Vec<Rect>,
}

impl SliderMetrics {
    /// Primary-axis size of the first item, `0.0` without items.
    pub fn item_extent(&self) -> f64 {
        self.items
            .first()
            .map(|item| item.extent(self.direction))
            .unwrap_or(0.0)
    }

    /// Valid track-center range on the primary axis.
    pub fn axis_range(&self) -> AxisRange {
        AxisRange::new(self.container, self.item_extent(), self.direction)
    }

    /// Center of the item at `index`.
    pub fn item_center(&self, index: usize) -> Option<Point> {
        self.items.get(index).map(Rect::center)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Timing used to move the track.
pub enum TrackAnimation {
    /// Jump without animating (initial placement).
    Instant,
    /// CSS `ease` timing over `duration_ms`.
    Ease {
        /// Animation duration.
        duration_ms: u32,
    },
}

impl TrackAnimation {
    /// The standard 300ms ease used for user and programmatic moves.
    pub const fn standard() -> Self {
        Self::Ease {
            duration_ms: TRACK_ANIMATION_MS,
        }
    }

    /// Duration in milliseconds (`0` for [`TrackAnimation::Instant`]).
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Instant => 0,
            Self::Ease { duration_ms } => duration_ms,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Command to move the track so its center sits at a resolved coordinate.
pub struct TrackPlacement {
    /// Axis the offset applies to; the cross axis is reset to `0`.
    pub direction: Direction,
    /// Offset from the container's leading edge, in pixels.
    pub offset: f64,
    /// How the move is animated.
    pub animation: TrackAnimation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Window-scoped pointer-move listener transitions.
pub enum DragTracking {
    /// A drag started: attach the move listener.
    Acquire,
    /// The drag ended: detach the move listener.
    Release,
}

#[derive(Debug, Clone, PartialEq, Default)]
/// Mutable state owned by one slider instance.
pub struct SliderState {
    /// Current step in `[0, domain.last_step()]`.
    pub current_step: u32,
    /// Item carrying the "current" marker, if any.
    pub current_item: Option<usize>,
    /// Whether a pointer drag is in progress.
    pub dragging: bool,
    /// Last primary-axis coordinate resolved by a drag.
    pub last_resolved: Option<f64>,
    /// Direction seen by the last reduced action.
    pub direction: Direction,
    /// Whether the track has been made visible.
    pub revealed: bool,
    /// Whether the slider was torn down.
    pub disposed: bool,
}
