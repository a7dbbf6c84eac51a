// SPDX-License-Identifier: MPL-2.0
//! Fit strategies for placing an image within the canvas.

use crate::geometry::Dimensions;
use serde::{Deserialize, Serialize};

/// Strategy for auto-computing zoom and position from canvas and image sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// The whole image stays visible inside the canvas, aspect ratio kept.
    Contain,
    /// The image covers the entire canvas, aspect ratio kept.
    #[default]
    Cover,
    /// The image is displayed at its native size.
    Original,
}

impl FitMode {
    /// Zoom factor this strategy yields for the given canvas and image sizes.
    ///
    /// `image` must have non-zero dimensions; callers guard before asking.
    #[must_use]
    pub fn zoom_for(self, canvas: Dimensions, image: Dimensions) -> f64 {
        let width_ratio = f64::from(canvas.width) / f64::from(image.width);
        let height_ratio = f64::from(canvas.height) / f64::from(image.height);
        match self {
            FitMode::Contain => width_ratio.min(height_ratio),
            FitMode::Cover => width_ratio.max(height_ratio),
            FitMode::Original => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn contain_picks_the_limiting_axis() {
        let zoom = FitMode::Contain.zoom_for(Dimensions::new(200, 200), Dimensions::new(100, 50));
        assert_abs_diff_eq!(zoom, 2.0);
    }

    #[test]
    fn cover_picks_the_filling_axis() {
        let zoom = FitMode::Cover.zoom_for(Dimensions::new(200, 200), Dimensions::new(100, 50));
        assert_abs_diff_eq!(zoom, 4.0);
    }

    #[test]
    fn original_is_always_native_size() {
        let zoom = FitMode::Original.zoom_for(Dimensions::new(30, 40), Dimensions::new(5000, 100));
        assert_abs_diff_eq!(zoom, 1.0);
    }

    #[test]
    fn default_mode_is_cover() {
        assert_eq!(FitMode::default(), FitMode::Cover);
    }
}
