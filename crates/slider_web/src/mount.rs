//! Slider mounting and the public [`SliderHandle`].

use std::{cell::RefCell, rc::Rc};

#[cfg(target_arch = "wasm32")]
use slider_core::{ConfigurationError, SliderConfig};
use slider_core::{DragTracking, Point, SliderError, StepCallback, StepSlider};
use thiserror::Error;
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, HtmlElement};
use web_sys::{Event, Window};

use crate::dom::DomSliderSurface;
#[cfg(target_arch = "wasm32")]
use crate::dom::CURRENT_ITEM_ATTRIBUTE;
use crate::listeners::EventListenerGuard;
#[cfg(target_arch = "wasm32")]
use crate::options::class_selector;
use crate::options::SliderMountOptions;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors returned by [`mount_slider`].
pub enum MountError {
    /// Slider markup or step domain is invalid.
    #[error(transparent)]
    Slider(#[from] SliderError),
    /// A browser API call failed.
    #[error("browser error: {0}")]
    Browser(String),
    /// Mounting was attempted outside a wasm32 browser build.
    #[error("slider mounting is only available when compiled for wasm32")]
    Unsupported,
}

/// Shared handle to a mounted slider.
///
/// Clones share the same slider. Dropping the last clone removes every listener, the same as
/// [`SliderHandle::dispose`].
#[derive(Clone)]
pub struct SliderHandle {
    shared: Rc<SliderShared>,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct SliderShared {
    slider: RefCell<StepSlider<DomSliderSurface>>,
    window: Window,
    drag_listener: RefCell<Option<EventListenerGuard>>,
    listeners: RefCell<Vec<EventListenerGuard>>,
}

impl SliderShared {
    /// Runs `f` unless the slider is already borrowed by an outer dispatch (for example a
    /// step callback calling back into the handle).
    fn with_slider<R>(&self, f: impl FnOnce(&mut StepSlider<DomSliderSurface>) -> R) -> Option<R> {
        let mut slider = self.slider.try_borrow_mut().ok()?;
        Some(f(&mut slider))
    }
}

impl SliderHandle {
    /// Animates the track to `step` without notifying the step callback.
    ///
    /// Ignored when called from inside this slider's own step callback.
    pub fn set_step(&self, step: i64) {
        self.shared.with_slider(|slider| slider.set_step(step));
    }

    /// Current step, `None` while the slider is busy dispatching.
    pub fn current_step(&self) -> Option<u32> {
        self.shared
            .slider
            .try_borrow()
            .ok()
            .map(|slider| slider.current_step())
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.shared
            .slider
            .try_borrow()
            .map(|slider| slider.is_dragging())
            .unwrap_or(false)
    }

    /// Removes every listener and freezes the slider.
    ///
    /// Must not be called from inside the slider's own step callback.
    pub fn dispose(&self) {
        let tracking = self.shared.with_slider(|slider| slider.dispose()).flatten();
        apply_drag_tracking(&self.shared, tracking);
        self.shared.drag_listener.borrow_mut().take();
        self.shared.listeners.borrow_mut().clear();
    }
}

impl std::fmt::Debug for SliderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderHandle")
            .field("current_step", &self.current_step())
            .field("dragging", &self.is_dragging())
            .finish()
    }
}

/// Mounts a slider on existing markup described by `options`.
///
/// The container is looked up document-wide, the track and items inside it. The first item
/// carrying `data-current` becomes the initial step.
///
/// # Errors
///
/// Returns [`MountError::Slider`] when the container or track is missing, no items exist, or the
/// step domain is degenerate; [`MountError::Browser`] when listener registration fails.
pub fn mount_slider(
    options: &SliderMountOptions,
    on_step_change: Option<StepCallback>,
) -> Result<SliderHandle, MountError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (options, on_step_change);
        Err(MountError::Unsupported)
    }

    #[cfg(target_arch = "wasm32")]
    {
        mount_in_document(options, on_step_change)
    }
}

#[cfg(target_arch = "wasm32")]
fn mount_in_document(
    options: &SliderMountOptions,
    on_step_change: Option<StepCallback>,
) -> Result<SliderHandle, MountError> {
    let window =
        web_sys::window().ok_or_else(|| MountError::Browser("window unavailable".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| MountError::Browser("document unavailable".to_string()))?;
    let selectors = &options.selectors;

    let container = document
        .query_selector(&class_selector(&selectors.container))
        .ok()
        .flatten()
        .ok_or_else(|| {
            SliderError::from(ConfigurationError::ContainerNotFound {
                selector: selectors.container.clone(),
            })
        })?;
    let track = container
        .query_selector(&class_selector(&selectors.track))
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| {
            SliderError::from(ConfigurationError::TrackNotFound {
                selector: selectors.track.clone(),
            })
        })?;
    let items = query_all(&container, &class_selector(&selectors.item))?;
    let marked_item = items
        .iter()
        .position(|item| item.has_attribute(CURRENT_ITEM_ATTRIBUTE));

    let mut config = SliderConfig::new(items.len())
        .steps_between(options.steps_between)
        .marked_item(marked_item);
    config.on_step_change = on_step_change;
    let surface = DomSliderSurface::new(window.clone(), container, track.clone(), items.clone());
    let slider = StepSlider::new(config, surface)?;

    let shared = Rc::new(SliderShared {
        slider: RefCell::new(slider),
        window: window.clone(),
        drag_listener: RefCell::new(None),
        listeners: RefCell::new(Vec::new()),
    });
    let listeners = wire_listeners(&shared, &window, &track, &items)?;
    *shared.listeners.borrow_mut() = listeners;

    Ok(SliderHandle { shared })
}

#[cfg(target_arch = "wasm32")]
fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, MountError> {
    let nodes = root
        .query_selector_all(selector)
        .map_err(|err| MountError::Browser(format!("invalid selector `{selector}`: {err:?}")))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

#[cfg(target_arch = "wasm32")]
fn wire_listeners(
    shared: &Rc<SliderShared>,
    window: &Window,
    track: &HtmlElement,
    items: &[Element],
) -> Result<Vec<EventListenerGuard>, MountError> {
    let mut listeners = Vec::with_capacity(items.len() + 3);

    let weak = Rc::downgrade(shared);
    listeners.push(EventListenerGuard::attach(
        track.as_ref(),
        "pointerdown",
        move |event: Event| {
            event.prevent_default();
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let tracking = shared.with_slider(|slider| slider.pointer_down()).flatten();
            apply_drag_tracking(&shared, tracking);
        },
    )?);

    let weak = Rc::downgrade(shared);
    listeners.push(EventListenerGuard::attach(
        window.as_ref(),
        "pointerup",
        move |_| {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            let tracking = shared.with_slider(|slider| slider.pointer_up()).flatten();
            apply_drag_tracking(&shared, tracking);
        },
    )?);

    let weak = Rc::downgrade(shared);
    listeners.push(EventListenerGuard::attach(
        window.as_ref(),
        "resize",
        move |_| {
            if let Some(shared) = weak.upgrade() {
                shared.with_slider(|slider| slider.resize());
            }
        },
    )?);

    for (index, item) in items.iter().enumerate() {
        let weak = Rc::downgrade(shared);
        listeners.push(EventListenerGuard::attach(
            item.as_ref(),
            "click",
            move |event: Event| {
                event.prevent_default();
                if let Some(shared) = weak.upgrade() {
                    shared.with_slider(|slider| slider.click_item(index));
                }
            },
        )?);
    }

    Ok(listeners)
}

/// Attaches the window `pointermove` listener on [`DragTracking::Acquire`] and drops it on
/// [`DragTracking::Release`].
fn apply_drag_tracking(shared: &Rc<SliderShared>, tracking: Option<DragTracking>) {
    match tracking {
        Some(DragTracking::Acquire) => {
            let weak = Rc::downgrade(shared);
            let guard = EventListenerGuard::attach(
                shared.window.as_ref(),
                "pointermove",
                move |event: Event| {
                    let Some(shared) = weak.upgrade() else {
                        return;
                    };
                    if let Some(pointer) = pointer_position(&event) {
                        shared.with_slider(|slider| slider.pointer_move(pointer));
                    }
                },
            );
            if let Ok(guard) = guard {
                *shared.drag_listener.borrow_mut() = Some(guard);
            }
        }
        Some(DragTracking::Release) => {
            shared.drag_listener.borrow_mut().take();
        }
        None => {}
    }
}

fn pointer_position(event: &Event) -> Option<Point> {
    event
        .dyn_ref::<web_sys::MouseEvent>()
        .map(|event| Point::new(f64::from(event.client_x()), f64::from(event.client_y())))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::options::SliderSelectors;

    #[test]
    fn mounting_outside_browser_is_unsupported() {
        let options = SliderMountOptions {
            selectors: SliderSelectors {
                container: "level".to_string(),
                track: "level__track".to_string(),
                item: "level__item".to_string(),
            },
            steps_between: 0,
        };

        assert_eq!(
            mount_slider(&options, None).map(|_| ()),
            Err(MountError::Unsupported)
        );
    }

    #[test]
    fn slider_errors_keep_their_message() {
        let err = MountError::from(SliderError::from(slider_core::ConfigurationError::NoItems));
        assert_eq!(err.to_string(), "slider configuration error: slider has no items");
    }
}
