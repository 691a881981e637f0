//! Coordinate and geometry types shared by the demo and the renderer.
//!
//! Canonical CPU space for drawing:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Geometry may be authored in normalized device coordinates (-1..1, +Y up)
//! and mapped to pixels with [`Transform`]. The triangle shader converts
//! pixels back to clip space using a viewport uniform.

mod transform;
mod vec2;
mod viewport;

pub use transform::Transform;
pub use vec2::Vec2;
pub use viewport::Viewport;
