//! Color model shared between the demo and the renderer.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
