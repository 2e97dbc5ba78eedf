//! Browser (`wasm32`) host for [`slider_core`] step sliders.
//!
//! This crate binds the headless slider engine to already-rendered DOM markup:
//! - `options`: serde-backed class selectors and mode for one slider
//! - `dom`: [`DomSliderSurface`], the `getBoundingClientRect`/`Element.animate` surface
//! - `listeners`: RAII event-listener registrations
//! - `mount`: element lookup, listener wiring, and the public [`SliderHandle`]

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
pub mod listeners;
pub mod mount;
pub mod options;

pub use dom::{track_keyframe, DomSliderSurface, CURRENT_ITEM_ATTRIBUTE};
pub use listeners::EventListenerGuard;
pub use mount::{mount_slider, MountError, SliderHandle};
pub use options::{class_selector, SliderMountOptions, SliderSelectors};
