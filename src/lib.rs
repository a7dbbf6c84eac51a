// SPDX-License-Identifier: MPL-2.0
//! `image_lens` is an interactive image viewport engine: zoom anchored at
//! the cursor, pan by click-and-drag, and auto-fit an image to a canvas.
//!
//! The crate is GUI-agnostic. A host shell owns the window, decodes the
//! source image, forwards raw pointer and wheel events as
//! [`viewer::Message`]s, and blits the [`viewer::Frame`]s the viewer
//! produces. Pixel resampling is delegated to a [`scaler::Scaler`] backend
//! selected by [`scaler::Quality`].

#![doc(html_root_url = "https://docs.rs/image_lens/0.1.0")]

pub mod config;
pub mod error;
pub mod geometry;
pub mod scaler;
pub mod state;
pub mod viewer;

#[cfg(test)]
mod test_utils;
