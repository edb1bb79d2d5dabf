//! Depth capture for the depth viewer.
//!
//! A [`DepthSource`] wraps one camera session. [`DepthIn`] owns a source and
//! hands out one [`image::DepthFrame`] per call, rebuilding the session when
//! the camera hiccups.

pub mod depthin;
pub mod error;

pub use depthin::*;
pub use error::VideoError;
