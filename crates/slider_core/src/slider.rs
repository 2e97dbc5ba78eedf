//! [`StepSlider`]: the stateful handle that drives a [`SliderSurface`] through the reducer.

use std::fmt;

use crate::error::SliderError;
use crate::geometry::{Direction, Point, StepDomain};
use crate::model::{DragTracking, SliderState};
use crate::reducer::{reduce_slider, SliderAction, SliderEffect};
use crate::surface::SliderSurface;

/// Consumer callback receiving interactively resolved steps.
pub type StepCallback = Box<dyn FnMut(u32)>;

/// Construction parameters for a [`StepSlider`].
pub struct SliderConfig {
    /// Number of items found in the slider.
    pub item_count: usize,
    /// Sub-steps between neighbouring items (`0` = discrete mode).
    pub steps_between: u32,
    /// Item marked current in the markup, if any.
    pub marked_item: Option<usize>,
    /// Called on drag/click step changes, never on [`StepSlider::set_step`].
    pub on_step_change: Option<StepCallback>,
}

impl SliderConfig {
    /// Discrete-mode config over `item_count` items with no marker and no callback.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            steps_between: 0,
            marked_item: None,
            on_step_change: None,
        }
    }

    /// Sets the sub-steps between neighbouring items.
    pub fn steps_between(mut self, steps_between: u32) -> Self {
        self.steps_between = steps_between;
        self
    }

    /// Sets the initially marked item.
    pub fn marked_item(mut self, marked_item: Option<usize>) -> Self {
        self.marked_item = marked_item;
        self
    }

    /// Sets the step-change callback.
    pub fn on_step_change(mut self, callback: impl FnMut(u32) + 'static) -> Self {
        self.on_step_change = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for SliderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliderConfig")
            .field("item_count", &self.item_count)
            .field("steps_between", &self.steps_between)
            .field("marked_item", &self.marked_item)
            .field("on_step_change", &self.on_step_change.is_some())
            .finish()
    }
}

/// A step slider bound to one surface.
///
/// Every public operation measures the surface, reduces one [`SliderAction`], and executes the
/// resulting effects in order. Drag listener transitions are returned to the caller, which owns
/// the window-scoped listener.
pub struct StepSlider<S> {
    domain: StepDomain,
    state: SliderState,
    surface: S,
    on_step_change: Option<StepCallback>,
}

impl<S: SliderSurface> StepSlider<S> {
    /// Validates `config`, places the track at the marked item without animation, and reveals it.
    ///
    /// # Errors
    ///
    /// Returns a [`SliderError`] when the item count and `steps_between` do not form a valid
    /// step domain.
    pub fn new(config: SliderConfig, surface: S) -> Result<Self, SliderError> {
        let domain = StepDomain::new(config.item_count, config.steps_between)?;
        let mut slider = Self {
            domain,
            state: SliderState::default(),
            surface,
            on_step_change: config.on_step_change,
        };
        slider.dispatch(SliderAction::Initialize {
            marked_item: config.marked_item,
        });
        Ok(slider)
    }

    /// Reduces `action` against freshly measured geometry and executes its effects.
    pub fn dispatch(&mut self, action: SliderAction) -> Option<DragTracking> {
        let metrics = self.surface.measure();
        let effects = reduce_slider(&mut self.state, &self.domain, &metrics, action);

        let mut tracking = None;
        for effect in effects {
            match effect {
                SliderEffect::AnimateTrack(placement) => self.surface.animate_track(placement),
                SliderEffect::MarkCurrentItem(index) => self.surface.mark_current_item(index),
                SliderEffect::RevealTrack => self.surface.reveal_track(),
                SliderEffect::NotifyStepChange(step) => {
                    if let Some(callback) = self.on_step_change.as_mut() {
                        callback(step);
                    }
                }
                SliderEffect::DragTracking(transition) => tracking = Some(transition),
            }
        }
        tracking
    }

    /// Animates the track to `step` (clamped into the domain) without notifying the callback.
    pub fn set_step(&mut self, step: i64) {
        self.dispatch(SliderAction::SetStep { step });
    }

    /// Starts a drag gesture.
    pub fn pointer_down(&mut self) -> Option<DragTracking> {
        self.dispatch(SliderAction::PointerDown)
    }

    /// Resolves a pointer position during a drag.
    pub fn pointer_move(&mut self, pointer: Point) {
        self.dispatch(SliderAction::PointerMove { pointer });
    }

    /// Ends a drag gesture.
    pub fn pointer_up(&mut self) -> Option<DragTracking> {
        self.dispatch(SliderAction::PointerUp)
    }

    /// Selects the item at `index`.
    pub fn click_item(&mut self, index: usize) {
        self.dispatch(SliderAction::ClickItem { index });
    }

    /// Re-reads direction and repositions the track at the current step.
    pub fn resize(&mut self) {
        self.dispatch(SliderAction::Resize);
    }

    /// Tears the slider down; every later call is a no-op.
    pub fn dispose(&mut self) -> Option<DragTracking> {
        self.dispatch(SliderAction::Dispose)
    }

    /// Current step.
    pub fn current_step(&self) -> u32 {
        self.state.current_step
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.dragging
    }

    /// Whether [`StepSlider::dispose`] was called.
    pub fn is_disposed(&self) -> bool {
        self.state.disposed
    }

    /// Direction seen by the last operation.
    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    /// Step domain.
    pub fn domain(&self) -> StepDomain {
        self.domain
    }

    /// Underlying surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the underlying surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

impl<S: fmt::Debug> fmt::Debug for StepSlider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepSlider")
            .field("domain", &self.domain)
            .field("state", &self.state)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::geometry::Rect;
    use crate::surface::RecordingSurface;

    fn surface() -> RecordingSurface {
        RecordingSurface::evenly_spaced(
            Direction::Horizontal,
            Rect::new(0.0, 0.0, 500.0, 20.0),
            20.0,
            5,
        )
    }

    #[test]
    fn construction_places_and_reveals_marked_item() {
        let slider = StepSlider::new(SliderConfig::new(5).marked_item(Some(2)), surface())
            .expect("slider");

        assert_eq!(slider.current_step(), 2);
        assert_eq!(slider.surface().current_item, Some(2));
        assert!(slider.surface().revealed);
        assert_eq!(
            slider.surface().last_placement().map(|p| p.animation.duration_ms()),
            Some(0)
        );
    }

    #[test]
    fn set_step_never_invokes_callback() {
        let reported = Rc::new(RefCell::new(Vec::new()));
        let sink = reported.clone();
        let mut slider = StepSlider::new(
            SliderConfig::new(5).on_step_change(move |step| sink.borrow_mut().push(step)),
            surface(),
        )
        .expect("slider");

        slider.set_step(4);
        slider.resize();

        assert_eq!(slider.current_step(), 4);
        assert!(reported.borrow().is_empty());
    }

    #[test]
    fn invalid_domain_is_reported_before_touching_surface() {
        let result = StepSlider::new(SliderConfig::new(1).steps_between(4), surface());
        assert!(matches!(result, Err(SliderError::Geometry(_))));
    }

    #[test]
    fn config_debug_hides_callback() {
        let config = SliderConfig::new(3).on_step_change(|_| {});
        assert_eq!(
            format!("{config:?}"),
            "SliderConfig { item_count: 3, steps_between: 0, marked_item: None, on_step_change: true }"
        );
    }
}
