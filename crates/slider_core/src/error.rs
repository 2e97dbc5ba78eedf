//! Construction-time slider errors.
//!
//! Interactive operations never fail: out-of-range steps and degenerate layouts are clamped.
//! Only building a slider can be rejected.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// A required part of the slider structure is missing.
pub enum ConfigurationError {
    /// The slider container element was not found.
    #[error("slider container `{selector}` not found")]
    ContainerNotFound {
        /// Selector used for the lookup.
        selector: String,
    },
    /// The track element was not found inside the container.
    #[error("slider track `{selector}` not found")]
    TrackNotFound {
        /// Selector used for the lookup.
        selector: String,
    },
    /// The container holds no items.
    #[error("slider has no items")]
    NoItems,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// The requested step domain cannot be laid out.
pub enum GeometryError {
    /// Sub-steps were requested but there is no gap between items to subdivide.
    #[error("cannot place {steps_between} step(s) between items of a {items}-item slider")]
    DegenerateDomain {
        /// Number of items found.
        items: usize,
        /// Requested sub-steps between neighbouring items.
        steps_between: u32,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned when a slider cannot be constructed.
pub enum SliderError {
    /// Missing structural element.
    #[error("slider configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    /// Degenerate step domain.
    #[error("slider geometry error: {0}")]
    Geometry(#[from] GeometryError),
}
