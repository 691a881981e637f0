//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to clip space using a viewport uniform.
//!
//! Application code draws through the [`DrawSurface`] trait; [`FrameSurface`]
//! is the implementation backed by a live swapchain frame.

mod ctx;
mod error;
mod frame_surface;
mod surface;
mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use error::RenderError;
pub use frame_surface::FrameSurface;
pub use surface::{ColoredVertex, DrawSurface};
pub use triangle::TriangleRenderer;
