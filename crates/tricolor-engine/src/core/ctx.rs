use winit::window::Window;

use crate::coords::Viewport;
use crate::device::Gpu;
use crate::render::{FrameSurface, TriangleRenderer};
use crate::time::FrameTime;

/// Window handle plus derived metadata.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size as `(width, height)` in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let logi: winit::dpi::LogicalSize<f64> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        (logi.width as f32, logi.height as f32)
    }

    /// Logical size rounded to whole pixels.
    pub fn logical_size_u32(&self) -> (u32, u32) {
        let (w, h) = self.logical_size();
        (w.round() as u32, h.round() as u32)
    }

    pub fn viewport(&self) -> Viewport {
        let (w, h) = self.logical_size();
        Viewport::new(w, h)
    }
}

/// Context passed to [`App::on_init`](super::App::on_init).
pub struct InitCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a Gpu<'w>,
}

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: WindowCtx<'a>,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Opens a drawing surface for this frame using `renderer` for geometry.
    pub fn surface<'s>(&'s mut self, renderer: &'s mut TriangleRenderer) -> FrameSurface<'s, 'w> {
        let viewport = self.window.viewport();
        FrameSurface::new(self.gpu, self.window.window, renderer, viewport)
    }
}
