//! Browser entry for the page widgets: the level slider, the price calculator and the
//! expandable textarea.

mod calc;
pub mod config;
mod error;
mod expandable_textarea;
mod level_slider;

pub use config::{CalculatorConfig, TextareaConfig, WidgetsConfig, WidgetsConfigError};
pub use error::WidgetError;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
use std::cell::RefCell;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
use leptos::logging;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
struct MountedWidgets {
    level_slider: Option<slider_web::SliderHandle>,
    calculator: Option<calc::Calculator>,
    _textarea: Option<expandable_textarea::ExpandableTextarea>,
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
impl MountedWidgets {
    fn dispose(self) {
        if let Some(slider) = self.level_slider {
            slider.dispose();
        }
        if let Some(calculator) = self.calculator {
            calculator.dispose();
        }
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
thread_local! {
    static MOUNTED: RefCell<Option<MountedWidgets>> = const { RefCell::new(None) };
}

/// Starts every widget found on the page. A widget whose markup or configuration is broken is
/// logged and skipped; the rest still start. Mounting again replaces the running widgets.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();

    let config = match WidgetsConfig::load() {
        Ok(config) => config,
        Err(err) => {
            logging::error!("{err}");
            return;
        }
    };

    let widgets = MountedWidgets {
        level_slider: started("level slider", level_slider::init(&config.level_slider)),
        calculator: started("calculator", calc::init(&config.calculator)),
        _textarea: started(
            "expandable textarea",
            expandable_textarea::init(&config.expandable_textarea),
        ),
    };

    let previous = MOUNTED.with(|mounted| mounted.borrow_mut().replace(widgets));
    if let Some(previous) = previous {
        previous.dispose();
    }
}

/// Stops every running widget and removes its listeners.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn unmount() {
    let mounted = MOUNTED.with(|mounted| mounted.borrow_mut().take());
    if let Some(mounted) = mounted {
        mounted.dispose();
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn started<T>(name: &str, result: Result<T, WidgetError>) -> Option<T> {
    match result {
        Ok(widget) => {
            logging::log!("{name} mounted");
            Some(widget)
        }
        Err(err) => {
            logging::warn!("{name} skipped: {err}");
            None
        }
    }
}
