use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;

use super::surface::first_invalid_vertex;
use super::{ColoredVertex, DrawSurface, RenderCtx, RenderError, RenderTarget, TriangleRenderer};

/// [`DrawSurface`] backed by the window's swapchain.
///
/// `clear` and `fill_triangle` only record intent; `present` acquires the
/// next surface texture, encodes a clear pass plus the triangle pass, submits
/// and presents. Nothing is acquired if no frame is presented, so a failed
/// submission leaves the swapchain untouched.
pub struct FrameSurface<'a, 'w> {
    gpu: &'a mut Gpu<'w>,
    window: &'a Window,
    renderer: &'a mut TriangleRenderer,
    viewport: Viewport,
    clear: Color,
    triangles: Vec<[ColoredVertex; 3]>,
}

impl<'a, 'w> FrameSurface<'a, 'w> {
    pub(crate) fn new(
        gpu: &'a mut Gpu<'w>,
        window: &'a Window,
        renderer: &'a mut TriangleRenderer,
        viewport: Viewport,
    ) -> Self {
        Self {
            gpu,
            window,
            renderer,
            viewport,
            clear: Color::BLACK,
            triangles: Vec::new(),
        }
    }
}

impl DrawSurface for FrameSurface<'_, '_> {
    fn clear(&mut self, color: Color) {
        self.clear = color;
        self.triangles.clear();
    }

    fn fill_triangle(&mut self, vertices: &[ColoredVertex; 3]) -> Result<(), RenderError> {
        if !self.viewport.is_valid() {
            return Err(RenderError::EmptyViewport);
        }
        if let Some(vertex) = first_invalid_vertex(vertices) {
            return Err(RenderError::InvalidGeometry { vertex });
        }
        self.triangles.push(*vertices);
        Ok(())
    }

    fn present(&mut self) -> Result<(), RenderError> {
        if !self.viewport.is_valid() {
            return Err(RenderError::EmptyViewport);
        }

        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let action = self.gpu.handle_surface_error(&err);
                if action == SurfaceErrorAction::Reconfigured {
                    log::debug!("surface reconfigured after {err}");
                }
                return Err(RenderError::SurfaceAcquire {
                    reason: err.to_string(),
                    action,
                });
            }
        };

        // Clear pass; dropped before the triangle pass borrows the encoder.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tricolor clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.viewport,
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.renderer.render(&rctx, &mut target, &self.triangles);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);
        self.triangles.clear();

        Ok(())
    }
}
