//! Tricolor engine crate.
//!
//! Owns the platform + GPU runtime pieces used by the demo: a single-window
//! `winit` loop, a `wgpu` surface bound to it, input translation, frame
//! timing, and a colored-triangle renderer behind the `DrawSurface` trait.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
