//! Decorative discrete level slider.

use slider_web::{mount_slider, SliderHandle, SliderMountOptions};

use crate::error::WidgetError;

/// Mounts the level slider. It reports no step changes.
#[cfg_attr(not(all(feature = "csr", target_arch = "wasm32")), allow(dead_code))]
pub(crate) fn init(options: &SliderMountOptions) -> Result<SliderHandle, WidgetError> {
    Ok(mount_slider(options, None)?)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::WidgetsConfig;

    #[test]
    fn host_builds_report_unsupported_mount() {
        let config = WidgetsConfig::load().expect("config");
        let err = init(&config.level_slider).expect_err("no browser");
        assert!(matches!(err, WidgetError::Slider(slider_web::MountError::Unsupported)));
    }
}
