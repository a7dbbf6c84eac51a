// SPDX-License-Identifier: MPL-2.0
//! Pixel resampling backends.
//!
//! The viewport decides *what* size to request; a [`Scaler`] decides *how*
//! the pixels get there. Hosts pick a backend through [`Quality`] and never
//! branch on backend identity themselves.

use crate::error::{Error, Result};
use image_rs::{imageops::FilterType, DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};

/// A resampling backend the viewer can delegate to.
pub trait Scaler {
    /// Produces a bitmap of exactly `width` x `height` pixels.
    ///
    /// Requested dimensions are floored at one pixel on each axis.
    fn scale(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage;
}

/// Nearest-neighbour resampling. Cheap, blocky under magnification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestScaler;

impl Scaler for NearestScaler {
    fn scale(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width.max(1), height.max(1), FilterType::Nearest)
    }
}

/// Lanczos3 resampling. Costly, best visual quality.
#[derive(Debug, Clone, Copy, Default)]
pub struct LanczosScaler;

impl Scaler for LanczosScaler {
    fn scale(&self, image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        image.resize_exact(width.max(1), height.max(1), FilterType::Lanczos3)
    }
}

/// Which resampling backend the viewer uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Quality {
    /// Nearest-neighbour: fastest, lowest visual quality.
    #[default]
    Fast,
    /// Lanczos3: slowest, highest visual quality.
    High,
}

impl Quality {
    /// Resolves the backend for this quality level.
    #[must_use]
    pub fn scaler(self) -> &'static dyn Scaler {
        match self {
            Quality::Fast => &NearestScaler,
            Quality::High => &LanczosScaler,
        }
    }

    /// Parses a quality name as it appears in configuration files.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "fast" => Ok(Quality::Fast),
            "high" => Ok(Quality::High),
            other => Err(Error::InvalidConfiguration(format!(
                "unknown quality mode: {other}"
            ))),
        }
    }
}
