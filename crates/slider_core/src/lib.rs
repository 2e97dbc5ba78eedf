//! Headless step-slider engine compatible with browser-hosted and test environments.
//!
//! The crate maps a bounded integer step domain onto a one-dimensional screen range and tracks
//! pointer drag state. Geometry is read and the track is moved through the [`SliderSurface`]
//! port, so the same engine drives real DOM elements (`slider_web`) and the in-memory
//! [`RecordingSurface`] used by tests.
//!
//! Layering:
//! - [`geometry`]: points, rects, axis ranges, and the step domain math
//! - [`model`]: measured metrics, mutable slider state, track placement intents
//! - [`reducer`]: the pure action -> effect transition function
//! - [`slider`]: the [`StepSlider`] handle that executes reducer effects against a surface

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod geometry;
pub mod model;
pub mod reducer;
pub mod slider;
pub mod surface;

pub use error::{ConfigurationError, GeometryError, SliderError};
pub use geometry::{
    coordinate_for_step, nearest_item, snap_coordinate, step_pixel_size, track_offset, AxisRange,
    Direction, Point, Rect, StepDomain,
};
pub use model::{
    DragTracking, SliderMetrics, SliderState, TrackAnimation, TrackPlacement, TRACK_ANIMATION_MS,
};
pub use reducer::{reduce_slider, SliderAction, SliderEffect};
pub use slider::{SliderConfig, StepCallback, StepSlider};
pub use surface::{evenly_spaced_metrics, RecordingSurface, SliderSurface};
