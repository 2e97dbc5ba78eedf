//! Slider surface contract and the in-memory recording adapter.

use crate::geometry::{Direction, Rect};
use crate::model::{SliderMetrics, TrackPlacement};

/// Rendering surface a [`crate::StepSlider`] reads geometry from and writes visual state to.
///
/// Implementations must measure fresh geometry on every [`SliderSurface::measure`] call; the
/// slider never caches layout between actions.
pub trait SliderSurface {
    /// Reads the current direction and bounding boxes.
    fn measure(&self) -> SliderMetrics;

    /// Moves the track. Later placements supersede in-flight animations.
    fn animate_track(&mut self, placement: TrackPlacement);

    /// Moves the "current" marker to the item at `index`, removing it from every other item.
    fn mark_current_item(&mut self, index: usize);

    /// Makes the (initially hidden) track visible.
    fn reveal_track(&mut self);
}

#[derive(Debug, Clone, Default)]
/// In-memory surface with settable metrics that records every write.
pub struct RecordingSurface {
    /// Metrics returned by [`SliderSurface::measure`].
    pub metrics: SliderMetrics,
    /// Every placement issued, oldest first.
    pub placements: Vec<TrackPlacement>,
    /// Item currently carrying the marker.
    pub current_item: Option<usize>,
    /// Number of marker transfers performed.
    pub marker_moves: usize,
    /// Whether the track was revealed.
    pub revealed: bool,
}

impl RecordingSurface {
    /// Builds a surface over fixed `metrics`.
    pub fn new(metrics: SliderMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// Lays out `items` square items of `item_size` evenly across `container`, first and last
    /// items flush with the container edges, with a track the size of one item.
    pub fn evenly_spaced(
        direction: Direction,
        container: Rect,
        item_size: f64,
        items: usize,
    ) -> Self {
        Self::new(evenly_spaced_metrics(direction, container, item_size, items))
    }

    /// Replaces the measured layout, as a viewport resize would.
    pub fn relayout(&mut self, metrics: SliderMetrics) {
        self.metrics = metrics;
    }

    /// Most recent placement.
    pub fn last_placement(&self) -> Option<TrackPlacement> {
        self.placements.last().copied()
    }
}

impl SliderSurface for RecordingSurface {
    fn measure(&self) -> SliderMetrics {
        self.metrics.clone()
    }

    fn animate_track(&mut self, placement: TrackPlacement) {
        self.placements.push(placement);
    }

    fn mark_current_item(&mut self, index: usize) {
        self.current_item = Some(index);
        self.marker_moves += 1;
    }

    fn reveal_track(&mut self) {
        self.revealed = true;
    }
}

/// Builds metrics for items spread evenly along `direction` inside `container`.
pub fn evenly_spaced_metrics(
    direction: Direction,
    container: Rect,
    item_size: f64,
    items: usize,
) -> SliderMetrics {
    let gap = match items {
        0 | 1 => 0.0,
        n => (container.extent(direction) - item_size) / (n - 1) as f64,
    };
    let item_rects = (0..items)
        .map(|index| {
            let shift = gap * index as f64;
            match direction {
                Direction::Horizontal => {
                    Rect::new(container.left + shift, container.top, item_size, item_size)
                }
                Direction::Vertical => {
                    Rect::new(container.left, container.top + shift, item_size, item_size)
                }
            }
        })
        .collect();

    SliderMetrics {
        direction,
        container,
        track: Rect::new(container.left, container.top, item_size, item_size),
        items: item_rects,
    }
}
