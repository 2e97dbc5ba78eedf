use slider_web::MountError;
use thiserror::Error;

use crate::config::WidgetsConfigError;

#[derive(Debug, Error)]
/// Errors raised while starting a page widget.
pub enum WidgetError {
    /// Embedded widget configuration could not be decoded.
    #[error(transparent)]
    Config(#[from] WidgetsConfigError),
    /// A slider could not be mounted.
    #[error(transparent)]
    Slider(#[from] MountError),
    /// Required widget markup is missing.
    #[error("widget element `{selector}` not found")]
    MissingElement {
        /// Class name that matched nothing.
        selector: String,
    },
    /// A browser API call failed.
    #[error("browser error: {0}")]
    Browser(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        let missing = WidgetError::MissingElement {
            selector: "calc__input".to_string(),
        };
        assert_eq!(missing.to_string(), "widget element `calc__input` not found");

        let slider = WidgetError::from(MountError::Unsupported);
        assert_eq!(
            slider.to_string(),
            "slider mounting is only available when compiled for wasm32"
        );
    }
}
