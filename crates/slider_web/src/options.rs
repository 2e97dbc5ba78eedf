//! Mount options for DOM-backed sliders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// CSS class names (without the leading `.`) identifying one slider's markup.
pub struct SliderSelectors {
    /// Class of the slider container, queried document-wide.
    pub container: String,
    /// Class of the track, queried inside the container.
    pub track: String,
    /// Class of the items, queried inside the container in document order.
    pub item: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Everything needed to mount one slider.
pub struct SliderMountOptions {
    /// Markup class names.
    pub selectors: SliderSelectors,
    /// Sub-steps between neighbouring items (`0` = discrete mode).
    #[serde(default)]
    pub steps_between: u32,
}

/// Turns a bare class name into a `querySelector` class selector.
pub fn class_selector(class_name: &str) -> String {
    let trimmed = class_name.trim();
    if trimmed.starts_with('.') {
        trimmed.to_string()
    } else {
        format!(".{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn class_selector_adds_single_dot() {
        assert_eq!(class_selector("calc__slider"), ".calc__slider");
        assert_eq!(class_selector(" .level "), ".level");
    }

    #[test]
    fn steps_between_defaults_to_discrete() {
        let options: SliderMountOptions = serde_json::from_str(
            r#"{"selectors":{"container":"level","track":"level__track","item":"level__item"}}"#,
        )
        .expect("decode options");

        assert_eq!(options.steps_between, 0);
        assert_eq!(options.selectors.track, "level__track");
    }
}
