//! DOM-backed [`SliderSurface`] implementation.

use js_sys::{Function, Object, Reflect};
use slider_core::{Direction, Rect, SliderMetrics, SliderSurface, TrackPlacement};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement, Window};

/// Attribute marking the current item.
pub const CURRENT_ITEM_ATTRIBUTE: &str = "data-current";

/// Slider surface over live container/track/item elements.
///
/// Geometry is re-read from the DOM on every measurement so layout changes (resize, media
/// queries flipping `flex-direction`) are always picked up.
#[derive(Debug, Clone)]
pub struct DomSliderSurface {
    window: Window,
    container: Element,
    track: HtmlElement,
    items: Vec<Element>,
}

impl DomSliderSurface {
    /// Wraps already-resolved slider elements.
    pub fn new(window: Window, container: Element, track: HtmlElement, items: Vec<Element>) -> Self {
        Self {
            window,
            container,
            track,
            items,
        }
    }

    /// Track element.
    pub fn track(&self) -> &HtmlElement {
        &self.track
    }

    /// Item elements in domain order.
    pub fn items(&self) -> &[Element] {
        &self.items
    }

    fn direction(&self) -> Direction {
        self.window
            .get_computed_style(&self.container)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("flex-direction").ok())
            .map(|value| Direction::from_flex_direction(&value))
            .unwrap_or_default()
    }
}

impl SliderSurface for DomSliderSurface {
    fn measure(&self) -> SliderMetrics {
        SliderMetrics {
            direction: self.direction(),
            container: bounding_rect(&self.container),
            track: bounding_rect(&self.track),
            items: self.items.iter().map(bounding_rect).collect(),
        }
    }

    fn animate_track(&mut self, placement: TrackPlacement) {
        let keyframes = Object::new();
        for (property, value) in track_keyframe(&placement) {
            let _ = Reflect::set(
                &keyframes,
                &JsValue::from_str(property),
                &JsValue::from_str(&value),
            );
        }

        let options = Object::new();
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("duration"),
            &JsValue::from_f64(f64::from(placement.animation.duration_ms())),
        );
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("fill"),
            &JsValue::from_str("forwards"),
        );
        let _ = Reflect::set(
            &options,
            &JsValue::from_str("easing"),
            &JsValue::from_str("ease"),
        );

        let Ok(animate) = Reflect::get(self.track.as_ref(), &JsValue::from_str("animate")) else {
            return;
        };
        let Ok(animate) = animate.dyn_into::<Function>() else {
            return;
        };
        let _ = animate.call2(self.track.as_ref(), &keyframes, &options);
    }

    fn mark_current_item(&mut self, index: usize) {
        for (position, item) in self.items.iter().enumerate() {
            if position == index {
                let _ = item.set_attribute(CURRENT_ITEM_ATTRIBUTE, "");
            } else {
                let _ = item.remove_attribute(CURRENT_ITEM_ATTRIBUTE);
            }
        }
    }

    fn reveal_track(&mut self) {
        let _ = self.track.style().set_property("opacity", "1");
    }
}

/// CSS keyframe properties positioning the track for `placement`.
///
/// The primary axis receives the pixel offset, the cross axis is pinned to `0`.
pub fn track_keyframe(placement: &TrackPlacement) -> [(&'static str, String); 2] {
    let offset = format!("{}px", placement.offset);
    match placement.direction {
        Direction::Horizontal => [("left", offset), ("top", "0".to_string())],
        Direction::Vertical => [("top", offset), ("left", "0".to_string())],
    }
}

fn bounding_rect(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use slider_core::TrackAnimation;

    use super::*;

    #[test]
    fn horizontal_keyframe_moves_left_and_pins_top() {
        let placement = TrackPlacement {
            direction: Direction::Horizontal,
            offset: 60.0,
            animation: TrackAnimation::standard(),
        };
        assert_eq!(
            track_keyframe(&placement),
            [("left", "60px".to_string()), ("top", "0".to_string())]
        );
    }

    #[test]
    fn vertical_keyframe_moves_top_and_pins_left() {
        let placement = TrackPlacement {
            direction: Direction::Vertical,
            offset: 12.5,
            animation: TrackAnimation::Instant,
        };
        assert_eq!(
            track_keyframe(&placement),
            [("top", "12.5px".to_string()), ("left", "0".to_string())]
        );
    }
}
