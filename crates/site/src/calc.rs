//! Renovation price calculator driven by an area slider and a text input.

mod quote;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub(crate) use dom::{init, Calculator};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
mod dom {
    use leptos::*;
    use slider_core::StepCallback;
    use slider_web::{class_selector, mount_slider, EventListenerGuard, SliderHandle};
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, Event, HtmlInputElement};

    use super::quote::{
        area_for_step, clamp_area, format_area, format_price, parse_area, quote_price,
        step_for_area,
    };
    use crate::config::CalculatorConfig;
    use crate::error::WidgetError;

    const RATE_FIELD: &str = "rate";
    const CONDITION_FIELD: &str = "condition";

    /// A running calculator. Dropping it removes its listeners and the area slider.
    pub(crate) struct Calculator {
        slider: SliderHandle,
        _listeners: Vec<EventListenerGuard>,
    }

    impl Calculator {
        pub(crate) fn dispose(self) {
            self.slider.dispose();
        }
    }

    pub(crate) fn init(config: &CalculatorConfig) -> Result<Calculator, WidgetError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| WidgetError::Browser("document unavailable".to_string()))?;
        let form = query(&document, &config.form)?;
        let input = query(&document, &config.input)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| WidgetError::MissingElement {
                selector: config.input.clone(),
            })?;
        let price = query(&document, &config.price)?;

        let area = create_rw_signal(parse_area(&input.value()));
        let rate = create_rw_signal(checked_radio(&document, config, RATE_FIELD));
        let condition = create_rw_signal(checked_radio(&document, config, CONDITION_FIELD));

        let quote_config = config.clone();
        let quote = create_memo(move |_| {
            quote_price(&quote_config, &rate.get(), &condition.get(), area.get())
        });
        let price_config = config.clone();
        create_effect(move |_| match quote.get() {
            Ok(value) => price.set_inner_html(&format_price(value, &price_config)),
            Err(err) => logging::warn!("calculator price unavailable: {err}"),
        });

        let callback_config = config.clone();
        let callback_input = input.clone();
        let on_step_change: StepCallback = Box::new(move |step| {
            let value = area_for_step(step, &callback_config);
            callback_input.set_value(&format_area(value, &callback_config));
            area.set(value);
        });
        let slider = mount_slider(&config.slider, Some(on_step_change))?;

        let mut listeners = Vec::with_capacity(3);

        let typing_config = config.clone();
        let typing_slider = slider.clone();
        let typing_input = input.clone();
        listeners.push(EventListenerGuard::attach(
            input.as_ref(),
            "input",
            move |_| {
                let value = parse_area(&typing_input.value());
                typing_slider.set_step(step_for_area(value, &typing_config));
                area.set(value);
            },
        )?);

        let blur_config = config.clone();
        let blur_input = input.clone();
        listeners.push(EventListenerGuard::attach(
            input.as_ref(),
            "blur",
            move |_| {
                let value = clamp_area(parse_area(&blur_input.value()), &blur_config);
                blur_input.set_value(&format_area(value, &blur_config));
                area.set(value);
            },
        )?);

        let radio_config = config.clone();
        listeners.push(EventListenerGuard::attach(
            form.as_ref(),
            "change",
            move |event: Event| {
                let from_radio = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .is_some_and(|target| target.class_list().contains(&radio_config.radio));
                if !from_radio {
                    return;
                }
                rate.set(checked_radio(&document, &radio_config, RATE_FIELD));
                condition.set(checked_radio(&document, &radio_config, CONDITION_FIELD));
            },
        )?);

        Ok(Calculator {
            slider,
            _listeners: listeners,
        })
    }

    fn query(document: &Document, class_name: &str) -> Result<Element, WidgetError> {
        document
            .query_selector(&class_selector(class_name))
            .ok()
            .flatten()
            .ok_or_else(|| WidgetError::MissingElement {
                selector: class_name.to_string(),
            })
    }

    /// Value of the checked radio in group `name`, empty when none is checked.
    fn checked_radio(document: &Document, config: &CalculatorConfig, name: &str) -> String {
        let selector = format!("{}[name=\"{name}\"]:checked", class_selector(&config.radio));
        document
            .query_selector(&selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            .map(|radio| radio.value())
            .unwrap_or_default()
    }
}
