//! Widget configuration embedded from `widgets.toml` at build time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use slider_web::SliderMountOptions;
use thiserror::Error;

include!(concat!(env!("OUT_DIR"), "/widgets_config_generated.rs"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Configuration for every widget on the page.
pub struct WidgetsConfig {
    /// Config schema version validated by the build script.
    pub schema_version: u32,
    /// Decorative level slider.
    pub level_slider: SliderMountOptions,
    /// Price calculator.
    pub calculator: CalculatorConfig,
    /// Auto-expanding textarea.
    pub expandable_textarea: TextareaConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Price calculator markup and pricing tables.
pub struct CalculatorConfig {
    /// Class of the form whose radio changes trigger a recalculation.
    pub form: String,
    /// Class of the area text input.
    pub input: String,
    /// Class of the element rendering the price.
    pub price: String,
    /// Class shared by the rate/condition radio inputs.
    pub radio: String,
    /// Area at slider step 0.
    pub min_area: u32,
    /// Largest area accepted on blur.
    pub max_area: u32,
    /// Unit appended to the area input value.
    pub area_suffix: String,
    /// Currency label appended to the price.
    pub currency_suffix: String,
    /// Area slider mount options.
    pub slider: SliderMountOptions,
    /// Divisor per property condition.
    pub conditions: BTreeMap<String, f64>,
    /// Price per square meter per renovation rate.
    pub rates: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Expandable textarea markup.
pub struct TextareaConfig {
    /// Class of the wrapper holding the textarea and line markers.
    pub wrapper: String,
    /// Class of the line-marker container.
    pub lines: String,
    /// Text of each line marker.
    pub marker_text: String,
}

#[derive(Debug, Error)]
/// Errors raised while decoding widget configuration.
pub enum WidgetsConfigError {
    /// The embedded JSON does not match [`WidgetsConfig`].
    #[error("failed to decode widget config: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WidgetsConfig {
    /// Decodes the configuration embedded at build time.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetsConfigError::Decode`] when the embedded JSON is malformed.
    pub fn load() -> Result<Self, WidgetsConfigError> {
        Self::from_json(WIDGETS_CONFIG_JSON)
    }

    /// Decodes configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetsConfigError::Decode`] when `raw` does not match the schema.
    pub fn from_json(raw: &str) -> Result<Self, WidgetsConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}
