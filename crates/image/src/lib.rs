//! Depth image types and colorization for the depth viewer.
//!
//! A [`DepthFrame`] holds raw distance samples as delivered by the camera.
//! The [`Colorizer`] turns it into a [`ColorRaster`] that a window can blit,
//! and the [`Picker`] reads back the distance under the cursor.

pub mod colorize;
pub mod depth;
pub mod error;
pub mod hue;
pub mod pick;
pub mod raster;

pub use colorize::*;
pub use depth::*;
pub use error::FrameError;
pub use hue::*;
pub use pick::*;
pub use raster::*;
