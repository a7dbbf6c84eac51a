// SPDX-License-Identifier: MPL-2.0
//! Viewport transform state
//!
//! Owns the zoom factor, pan offset, zoom bounds and fit mode, and performs
//! the coordinate math that maps image pixels to canvas pixels. All
//! operations are total: they mutate in place and never block or fail.

use crate::config::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM, DEFAULT_ZOOM_STEP};
use crate::error::{Error, Result};
use crate::geometry::{Dimensions, Offset, Point, Transform};
use crate::state::FitMode;

/// Direction of a discrete zoom event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Maps a raw wheel rotation to a zoom direction.
    ///
    /// Negative rotation (wheel pushed away from the user) zooms in. A zero
    /// delta produces no direction.
    #[must_use]
    pub fn from_scroll(delta: f64) -> Option<Self> {
        if delta < 0.0 {
            Some(Self::In)
        } else if delta > 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }
}

/// The viewport transform: zoom, pan offset, bounds and fit mode.
///
/// A fit recompute is authoritative and may place the zoom outside the
/// configured bounds; wheel steps are then gated against that value (see
/// [`ViewportState::zoom_at`]).
#[derive(Debug, Clone)]
pub struct ViewportState {
    zoom: f64,
    min_zoom: f64,
    max_zoom: f64,
    zoom_step: f64,
    offset: Offset,
    fit_mode: FitMode,
    canvas: Dimensions,
    image: Option<Dimensions>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            zoom_step: DEFAULT_ZOOM_STEP,
            offset: Offset::ZERO,
            fit_mode: FitMode::default(),
            canvas: Dimensions::default(),
            image: None,
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the allowed zoom range.
    ///
    /// The current zoom is left untouched even when it falls outside the new
    /// range; the bounds only gate future wheel steps.
    pub fn set_zoom_bounds(&mut self, min: f64, max: f64) -> Result<()> {
        if !(min > 0.0 && min < max && max.is_finite()) {
            return Err(Error::InvalidConfiguration(format!(
                "zoom bounds must satisfy 0 < min < max, got min={min}, max={max}"
            )));
        }
        self.min_zoom = min;
        self.max_zoom = max;
        Ok(())
    }

    /// Sets the zoom applied per discrete wheel step.
    pub fn set_zoom_step(&mut self, step: f64) -> Result<()> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(Error::InvalidConfiguration(format!(
                "zoom step must be positive, got {step}"
            )));
        }
        self.zoom_step = step;
        Ok(())
    }

    /// Sets the fit strategy. Takes effect on the next fit recompute.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Records the dimensions of a newly bound image.
    ///
    /// Does not recompute the fit; callers decide when to run
    /// [`ViewportState::adjust_fit`].
    pub fn bind_image(&mut self, image: Dimensions) {
        self.image = Some(image);
    }

    /// Stores the new canvas size and re-derives zoom and offset for the
    /// current fit mode.
    pub fn canvas_resized(&mut self, canvas: Dimensions) {
        self.canvas = canvas;
        self.adjust_fit();
    }

    /// Re-derives zoom and offset from the current fit mode, centering the
    /// scaled image in the canvas.
    ///
    /// No-op while no image is bound or while the image or canvas has a zero
    /// dimension.
    pub fn adjust_fit(&mut self) {
        let Some(image) = self.image else {
            return;
        };
        if image.is_empty() || self.canvas.is_empty() {
            return;
        }
        self.zoom = self.fit_mode.zoom_for(self.canvas, image);
        self.offset = centered_offset(self.canvas, image, self.zoom);
    }

    /// Applies one discrete zoom step anchored at `cursor`: the image point
    /// under the cursor before the step is still under it afterwards, to
    /// within one pixel of rounding.
    ///
    /// The bound is checked before the step is added, so a single step may
    /// land past the bound; the next step in the same direction is then
    /// refused. A fit-derived zoom beyond `max_zoom` likewise refuses
    /// zoom-in until brought back under the bound.
    #[allow(clippy::cast_possible_truncation)]
    pub fn zoom_at(&mut self, cursor: Point, direction: ZoomDirection) {
        let old_zoom = self.zoom;

        match direction {
            ZoomDirection::In if self.zoom < self.max_zoom => self.zoom += self.zoom_step,
            ZoomDirection::Out if self.zoom > self.min_zoom => self.zoom -= self.zoom_step,
            _ => {}
        }

        // Cursor position relative to the image, in image coordinates.
        let relative_x = (cursor.x - f64::from(self.offset.x)) / old_zoom;
        let relative_y = (cursor.y - f64::from(self.offset.y)) / old_zoom;

        // Reposition so that image coordinate lands back under the cursor.
        self.offset = Offset::new(
            (cursor.x - relative_x * self.zoom) as i32,
            (cursor.y - relative_y * self.zoom) as i32,
        );
    }

    /// Moves the image origin. Used by the drag gesture; not clamped.
    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        self.offset
    }

    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    #[must_use]
    pub fn canvas(&self) -> Dimensions {
        self.canvas
    }

    #[must_use]
    pub fn image(&self) -> Option<Dimensions> {
        self.image
    }

    /// Current transform for drawing.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            zoom: self.zoom,
            offset: self.offset,
        }
    }

    /// Scaled image size at the current zoom, truncated to whole pixels.
    ///
    /// `None` while no image is bound.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn scaled_size(&self) -> Option<Dimensions> {
        let image = self.image?;
        Some(Dimensions::new(
            (f64::from(image.width) * self.zoom) as u32,
            (f64::from(image.height) * self.zoom) as u32,
        ))
    }
}

/// Offset that centers an image scaled by `zoom` within the canvas.
///
/// The scaled size is truncated to whole pixels before centering, and the
/// division truncates toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn centered_offset(canvas: Dimensions, image: Dimensions, zoom: f64) -> Offset {
    let scaled_width = (f64::from(image.width) * zoom) as i32;
    let scaled_height = (f64::from(image.height) * zoom) as i32;
    Offset::new(
        (canvas.width as i32 - scaled_width) / 2,
        (canvas.height as i32 - scaled_height) / 2,
    )
}
