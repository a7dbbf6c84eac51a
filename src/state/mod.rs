// SPDX-License-Identifier: MPL-2.0
//! Viewport state: transform math, drag tracking, and fit strategies.

mod drag;
mod fit;
mod viewport;

pub use drag::{pan_offset, DragState};
pub use fit::FitMode;
pub use viewport::{ViewportState, ZoomDirection};
