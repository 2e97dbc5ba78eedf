//! Textarea that mirrors its value onto the wrapper and draws one marker per visible line.

#![cfg_attr(not(all(feature = "csr", target_arch = "wasm32")), allow(dead_code))]

/// `line-height: normal` as a multiple of the font size.
const NORMAL_LINE_HEIGHT: f64 = 1.2;

/// Resolves computed `line-height` and `font-size` values to a pixel line height.
///
/// Accepts pixel values (`"24px"`), unitless multipliers (`"1.5"`) and `normal`.
pub(crate) fn line_height_px(line_height: &str, font_size: &str) -> Option<f64> {
    let line_height = line_height.trim();
    let resolved = if let Some(px) = line_height.strip_suffix("px") {
        px.trim().parse::<f64>().ok()?
    } else {
        let multiplier = if line_height.eq_ignore_ascii_case("normal") {
            NORMAL_LINE_HEIGHT
        } else {
            line_height.parse::<f64>().ok()?
        };
        multiplier * parse_px(font_size)?
    };
    (resolved.is_finite() && resolved > 0.0).then_some(resolved)
}

fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    value.strip_suffix("px").unwrap_or(value).trim().parse().ok()
}

/// Number of line markers for a textarea `offset_height` pixels tall.
pub(crate) fn marker_count(offset_height: f64, line_height_px: Option<f64>) -> usize {
    match line_height_px {
        Some(line_height) if offset_height > 0.0 => (offset_height / line_height).round() as usize,
        _ => 0,
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub(crate) use dom::{init, ExpandableTextarea};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
mod dom {
    use std::rc::Rc;

    use leptos::logging;
    use slider_web::{class_selector, EventListenerGuard};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlTextAreaElement, Window};

    use super::{line_height_px, marker_count};
    use crate::config::TextareaConfig;
    use crate::error::WidgetError;

    const VALUE_ATTRIBUTE: &str = "data-value";

    /// A running textarea. Dropping it removes its listeners.
    pub(crate) struct ExpandableTextarea {
        _listeners: Vec<EventListenerGuard>,
    }

    struct TextareaParts {
        window: Window,
        document: Document,
        wrapper: Element,
        textarea: HtmlTextAreaElement,
        lines: Element,
        marker_text: String,
    }

    impl TextareaParts {
        fn update(&self) {
            if let Err(err) = self
                .wrapper
                .set_attribute(VALUE_ATTRIBUTE, &self.textarea.value())
            {
                logging::warn!("textarea value mirror failed: {err:?}");
            }

            let line_height = self
                .window
                .get_computed_style(&self.textarea)
                .ok()
                .flatten()
                .and_then(|style| {
                    let line_height = style.get_property_value("line-height").ok()?;
                    let font_size = style.get_property_value("font-size").ok()?;
                    line_height_px(&line_height, &font_size)
                });
            let count = marker_count(f64::from(self.textarea.offset_height()), line_height);

            self.lines.set_inner_html("");
            for _ in 0..count {
                let marker = match self.document.create_element("span") {
                    Ok(marker) => marker,
                    Err(err) => {
                        logging::warn!("textarea line marker failed: {err:?}");
                        return;
                    }
                };
                marker.set_text_content(Some(&self.marker_text));
                if let Err(err) = self.lines.append_child(&marker) {
                    logging::warn!("textarea line marker failed: {err:?}");
                    return;
                }
            }
        }
    }

    pub(crate) fn init(config: &TextareaConfig) -> Result<ExpandableTextarea, WidgetError> {
        let window =
            web_sys::window().ok_or_else(|| WidgetError::Browser("window unavailable".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| WidgetError::Browser("document unavailable".to_string()))?;
        let missing = |selector: &str| WidgetError::MissingElement {
            selector: selector.to_string(),
        };

        let wrapper = document
            .query_selector(&class_selector(&config.wrapper))
            .ok()
            .flatten()
            .ok_or_else(|| missing(&config.wrapper))?;
        let textarea = wrapper
            .query_selector("textarea")
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlTextAreaElement>().ok())
            .ok_or_else(|| missing("textarea"))?;
        let lines = wrapper
            .query_selector(&class_selector(&config.lines))
            .ok()
            .flatten()
            .ok_or_else(|| missing(&config.lines))?;

        let parts = Rc::new(TextareaParts {
            window: window.clone(),
            document,
            wrapper,
            textarea: textarea.clone(),
            lines,
            marker_text: config.marker_text.clone(),
        });

        let on_input = Rc::clone(&parts);
        let on_resize = Rc::clone(&parts);
        let listeners = vec![
            EventListenerGuard::attach(textarea.as_ref(), "input", move |_| on_input.update())?,
            EventListenerGuard::attach(window.as_ref(), "resize", move |_| on_resize.update())?,
        ];
        parts.update();

        Ok(ExpandableTextarea {
            _listeners: listeners,
        })
    }
}
