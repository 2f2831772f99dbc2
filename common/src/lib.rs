//! Common utilities for the ball simulation binaries
//!
//! Window and GPU setup plus the canvas camera shared by anything that
//! draws to a wgpu surface.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;
