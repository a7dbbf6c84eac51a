// SPDX-License-Identifier: MPL-2.0
//! Interactive viewer component.
//!
//! Translates host input events into viewport state transitions and produces
//! frames for drawing. The host owns the window and the event loop; this
//! component owns the bound bitmap and the transform.

use crate::config::{Config, DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM};
use crate::error::Result;
use crate::geometry::{Dimensions, Offset, Point, Transform};
use crate::scaler::Quality;
use crate::state::{DragState, FitMode, ViewportState, ZoomDirection};
use image_rs::{DynamicImage, GenericImageView};

/// Viewer component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// The viewport transform.
    viewport: ViewportState,
    /// Pan gesture tracking.
    drag: DragState,
    /// The bound bitmap, if any.
    image: Option<DynamicImage>,
    /// Resampling backend selection.
    quality: Quality,
}

/// Input events forwarded by the host shell.
///
/// Events must be handed over in the order the host receives them: the zoom
/// anchor math reads the offset left by the immediately preceding event.
#[derive(Debug, Clone)]
pub enum Message {
    /// Wheel scrolled with the cursor at a canvas position.
    Wheel {
        cursor: Point,
        direction: ZoomDirection,
    },
    /// Pointer pressed: a pan gesture begins.
    DragStart(Point),
    /// Pointer moved while pressed.
    DragMove(Point),
    /// Pointer released.
    DragEnd,
    /// The canvas was resized.
    CanvasResized(Dimensions),
    /// The fit strategy changed.
    FitModeChanged(FitMode),
}

/// Effects produced by viewer messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The transform changed; the host should redraw.
    TransformChanged,
}

/// A rendered frame: the resampled bitmap and where to blit it.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Bitmap scaled to the current zoom.
    pub bitmap: DynamicImage,
    /// Canvas position of the bitmap's top-left corner.
    pub offset: Offset,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a viewer from configuration, validating every option.
    pub fn with_config(config: &Config) -> Result<Self> {
        let mut state = Self::new();
        let min = config.min_zoom.unwrap_or(DEFAULT_MIN_ZOOM);
        let max = config.max_zoom.unwrap_or(DEFAULT_MAX_ZOOM);
        state.viewport.set_zoom_bounds(min, max)?;
        if let Some(step) = config.zoom_step {
            state.viewport.set_zoom_step(step)?;
        }
        if let Some(mode) = config.fit_mode {
            state.viewport.set_fit_mode(mode);
        }
        if let Some(quality) = config.quality {
            state.quality = quality;
        }
        Ok(state)
    }

    /// Binds a new image and recomputes the fit for it.
    ///
    /// Replaces any previously bound image; the viewport transform is reset
    /// by the fit recompute.
    pub fn bind_image(&mut self, image: DynamicImage) {
        let (width, height) = image.dimensions();
        self.viewport.bind_image(Dimensions::new(width, height));
        self.image = Some(image);
        self.viewport.adjust_fit();
    }

    /// Switches the resampling backend used by [`State::render`].
    pub fn set_quality(&mut self, quality: Quality) {
        self.quality = quality;
    }

    /// Handle a host input event.
    ///
    /// Note: Takes `Message` by value following the usual
    /// `update(message: Message)` pattern; messages are moved into the
    /// handler.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Wheel { cursor, direction } => {
                self.viewport.zoom_at(cursor, direction);
                Effect::TransformChanged
            }
            Message::DragStart(position) => {
                self.drag.start(position, self.viewport.offset());
                Effect::None
            }
            Message::DragMove(position) => {
                if let Some(offset) = self.drag.offset_for(position) {
                    self.viewport.set_offset(offset);
                    Effect::TransformChanged
                } else {
                    Effect::None
                }
            }
            Message::DragEnd => {
                self.drag.stop();
                Effect::None
            }
            Message::CanvasResized(canvas) => {
                self.viewport.canvas_resized(canvas);
                Effect::TransformChanged
            }
            Message::FitModeChanged(mode) => {
                self.viewport.set_fit_mode(mode);
                self.viewport.adjust_fit();
                Effect::TransformChanged
            }
        }
    }

    /// Current transform for drawing.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.viewport.transform()
    }

    /// Read access to the viewport for hosts that need more than the
    /// transform.
    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Mutable access for hosts that drive the viewport directly.
    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    /// Renders the bound image at the current transform.
    ///
    /// Returns `None` while no image is bound. Resampling is O(pixels); hosts
    /// with an interactive event loop decide where to run it.
    #[must_use]
    pub fn render(&self) -> Option<Frame> {
        let image = self.image.as_ref()?;
        let size = self.viewport.scaled_size()?;
        let bitmap = self.quality.scaler().scale(image, size.width, size.height);
        Some(Frame {
            bitmap,
            offset: self.viewport.offset(),
        })
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn quality(&self) -> Quality {
        self.quality
    }
}
