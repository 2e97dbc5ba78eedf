//! Geometry primitives shared by the reducer and slider surfaces.
//!
//! All coordinates are viewport pixels (`f64`), matching what `getBoundingClientRect` reports.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, GeometryError, SliderError};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Viewport-space point.
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Builds a point from `x`/`y`.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate on the slider's primary axis.
    pub fn along(self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.x,
            Direction::Vertical => self.y,
        }
    }

    /// Manhattan (`|dx| + |dy|`) distance to `other`.
    pub fn manhattan_distance(self, other: Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
/// Viewport-space bounding box.
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Builds a rect from its left/top corner and size.
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Visual center of the box.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Leading edge on the primary axis (`left` or `top`).
    pub fn start(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.left,
            Direction::Vertical => self.top,
        }
    }

    /// Trailing edge on the primary axis (`right` or `bottom`).
    pub fn end(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.right(),
            Direction::Vertical => self.bottom(),
        }
    }

    /// Size on the primary axis (`width` or `height`).
    pub fn extent(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Slider orientation, derived from the container's flex layout axis.
pub enum Direction {
    /// Items laid out in a row.
    #[default]
    Horizontal,
    /// Items laid out in a column.
    Vertical,
}

impl Direction {
    /// Maps a computed `flex-direction` value to a slider direction.
    pub fn from_flex_direction(value: &str) -> Self {
        match value.trim() {
            "column" | "column-reverse" => Self::Vertical,
            _ => Self::Horizontal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Bounded integer step domain laid over `items` evenly spaced items.
///
/// With `steps_between == 0` (discrete mode) the steps are the item indices. Otherwise every gap
/// between neighbouring items is split into `steps_between + 1` equal sub-steps.
pub struct StepDomain {
    items: usize,
    steps_between: u32,
}

impl StepDomain {
    /// Validates and builds a step domain.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateDomain`] when sub-steps are requested with fewer than two
    /// items, and [`ConfigurationError::NoItems`] for an empty discrete slider.
    pub fn new(items: usize, steps_between: u32) -> Result<Self, SliderError> {
        if steps_between > 0 && items < 2 {
            return Err(GeometryError::DegenerateDomain {
                items,
                steps_between,
            }
            .into());
        }
        if items == 0 {
            return Err(ConfigurationError::NoItems.into());
        }
        Ok(Self {
            items,
            steps_between,
        })
    }

    /// Number of items the domain was built over.
    pub fn items(&self) -> usize {
        self.items
    }

    /// Sub-steps between neighbouring items.
    pub fn steps_between(&self) -> u32 {
        self.steps_between
    }

    /// Whether steps map 1:1 to items.
    pub fn is_discrete(&self) -> bool {
        self.steps_between == 0
    }

    /// Number of equal pixel intervals between the first and last item centers.
    pub fn subdivisions(&self) -> u32 {
        let gaps = (self.items - 1) as u32;
        gaps.saturating_add(gaps.saturating_mul(self.steps_between))
    }

    /// Total number of valid steps.
    pub fn size(&self) -> u32 {
        self.subdivisions().saturating_add(1)
    }

    /// Largest valid step.
    pub fn last_step(&self) -> u32 {
        self.subdivisions()
    }

    /// Clamps an arbitrary requested step into `[0, last_step]`.
    pub fn clamp(&self, step: i64) -> u32 {
        step.clamp(0, i64::from(self.last_step())) as u32
    }

    /// Step numbering of the item at `index` (`index * steps_between + index`).
    pub fn step_for_item(&self, index: usize) -> u32 {
        (index as u32).saturating_mul(self.steps_between.saturating_add(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
/// Valid primary-axis range for the track center: the container inset by half an item.
pub struct AxisRange {
    /// Smallest valid coordinate.
    pub min: f64,
    /// Largest valid coordinate.
    pub max: f64,
}

impl AxisRange {
    /// Builds the range for `container` holding items of `item_extent` along `direction`.
    ///
    /// A container narrower than one item collapses the range to its midpoint.
    pub fn new(container: Rect, item_extent: f64, direction: Direction) -> Self {
        let half = item_extent / 2.0;
        let min = container.start(direction) + half;
        let max = container.end(direction) - half;
        if max < min {
            let mid = (min + max) / 2.0;
            return Self { min: mid, max: mid };
        }
        Self { min, max }
    }

    /// Distance between `min` and `max`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamps `value` into the range. `NaN` clamps to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Pixel distance covered by one step, `0.0` when the domain has a single step.
pub fn step_pixel_size(range: AxisRange, domain: StepDomain) -> f64 {
    match domain.subdivisions() {
        0 => 0.0,
        subdivisions => range.span() / f64::from(subdivisions),
    }
}

/// Primary-axis coordinate of `step`, clamped into `range`.
pub fn coordinate_for_step(range: AxisRange, domain: StepDomain, step: u32) -> f64 {
    let step_px = step_pixel_size(range, domain);
    range.clamp(range.min + f64::from(step) * step_px)
}

/// Snaps a raw primary-axis pointer coordinate onto the step grid anchored at `range.min`.
///
/// Returns the clamped snapped coordinate and its step.
pub fn snap_coordinate(range: AxisRange, domain: StepDomain, raw: f64) -> (f64, u32) {
    let step_px = step_pixel_size(range, domain);
    if step_px <= 0.0 {
        return (range.min, 0);
    }

    let snapped = range.min + ((raw - range.min) / step_px).round() * step_px;
    let coordinate = range.clamp(snapped);
    let step = domain.clamp(((coordinate - range.min) / step_px).round() as i64);
    (coordinate, step)
}

/// Index of the center closest to `pointer` by Manhattan distance. The first index wins ties.
pub fn nearest_item(pointer: Point, centers: impl IntoIterator<Item = Point>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, center) in centers.into_iter().enumerate() {
        let distance = center.manhattan_distance(pointer);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, distance)),
        }
    }
    best.map(|(index, _)| index)
}

/// Offset of the track inside the container that centers it on `coordinate`.
pub fn track_offset(coordinate: f64, container: Rect, track: Rect, direction: Direction) -> f64 {
    coordinate - container.start(direction) - track.extent(direction) / 2.0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn calc_range() -> (AxisRange, StepDomain) {
        let container = Rect::new(100.0, 40.0, 500.0, 20.0);
        (
            AxisRange::new(container, 20.0, Direction::Horizontal),
            StepDomain::new(5, 9).expect("domain"),
        )
    }

    #[test]
    fn flex_direction_maps_columns_to_vertical() {
        assert_eq!(Direction::from_flex_direction("column"), Direction::Vertical);
        assert_eq!(
            Direction::from_flex_direction(" column-reverse "),
            Direction::Vertical
        );
        assert_eq!(Direction::from_flex_direction("row"), Direction::Horizontal);
        assert_eq!(Direction::from_flex_direction(""), Direction::Horizontal);
    }

    #[test]
    fn domain_sizes_follow_mode() {
        let discrete = StepDomain::new(5, 0).expect("discrete");
        assert!(discrete.is_discrete());
        assert_eq!(discrete.size(), 5);
        assert_eq!(discrete.subdivisions(), 4);

        let continuous = StepDomain::new(5, 9).expect("continuous");
        assert_eq!(continuous.subdivisions(), 40);
        assert_eq!(continuous.size(), 41);
        assert_eq!(continuous.step_for_item(3), 30);
        assert_eq!(continuous.clamp(-4), 0);
        assert_eq!(continuous.clamp(99), 40);

        let single = StepDomain::new(1, 0).expect("single item");
        assert_eq!(single.size(), 1);
    }

    #[test]
    fn degenerate_domains_are_rejected() {
        assert_eq!(
            StepDomain::new(0, 0),
            Err(SliderError::Configuration(ConfigurationError::NoItems))
        );
        assert_eq!(
            StepDomain::new(0, 3),
            Err(SliderError::Geometry(GeometryError::DegenerateDomain {
                items: 0,
                steps_between: 3,
            }))
        );
        assert!(matches!(
            StepDomain::new(1, 1),
            Err(SliderError::Geometry(_))
        ));
    }

    #[test]
    fn step_pixel_size_matches_container_math() {
        let (range, domain) = calc_range();
        assert_eq!(range.min, 110.0);
        assert_eq!(range.max, 590.0);
        assert_eq!(step_pixel_size(range, domain), 12.0);
        assert_eq!(coordinate_for_step(range, domain, 5), 170.0);
        assert_eq!(coordinate_for_step(range, domain, 400), 590.0);
    }

    #[test]
    fn snapping_rounds_to_grid_and_clamps() {
        let (range, domain) = calc_range();
        assert_eq!(snap_coordinate(range, domain, 110.0), (110.0, 0));
        assert_eq!(snap_coordinate(range, domain, 173.0), (170.0, 5));
        assert_eq!(snap_coordinate(range, domain, -2_000.0), (110.0, 0));
        assert_eq!(snap_coordinate(range, domain, 9_000.0), (590.0, 40));
    }

    #[test]
    fn narrow_container_collapses_range_without_nan() {
        let range = AxisRange::new(Rect::new(0.0, 0.0, 10.0, 10.0), 30.0, Direction::Horizontal);
        assert_eq!(range.min, range.max);
        let domain = StepDomain::new(3, 2).expect("domain");
        assert_eq!(step_pixel_size(range, domain), 0.0);
        assert_eq!(snap_coordinate(range, domain, 42.0), (5.0, 0));
    }

    #[test]
    fn nearest_item_prefers_lower_index_on_tie() {
        let centers = [Point::new(10.0, 0.0), Point::new(30.0, 0.0)];
        assert_eq!(nearest_item(Point::new(20.0, 0.0), centers), Some(0));
        assert_eq!(nearest_item(Point::new(21.0, 5.0), centers), Some(1));
        assert_eq!(nearest_item(Point::new(0.0, 0.0), Vec::new()), None);
    }

    #[test]
    fn track_offset_centers_track_on_coordinate() {
        let container = Rect::new(0.0, 100.0, 20.0, 500.0);
        let track = Rect::new(0.0, 100.0, 20.0, 20.0);
        assert_eq!(
            track_offset(250.0, container, track, Direction::Vertical),
            140.0
        );
    }
}
