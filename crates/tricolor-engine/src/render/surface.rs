use crate::coords::Vec2;
use crate::paint::Color;

use super::RenderError;

/// A vertex in logical pixel space with a per-vertex color.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColoredVertex {
    pub position: Vec2,
    pub color: Color,
}

impl ColoredVertex {
    #[inline]
    pub const fn new(position: Vec2, color: Color) -> Self {
        Self { position, color }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.color.is_finite()
    }
}

/// Drawing primitives available to a frame.
///
/// Call order per frame: `clear`, any number of `fill_triangle`, `present`.
pub trait DrawSurface {
    /// Sets the color the frame is cleared to before geometry is drawn.
    fn clear(&mut self, color: Color);

    /// Submits one filled triangle with per-vertex colors.
    fn fill_triangle(&mut self, vertices: &[ColoredVertex; 3]) -> Result<(), RenderError>;

    /// Presents the frame.
    fn present(&mut self) -> Result<(), RenderError>;
}

/// Returns the index of the first non-finite vertex, if any.
pub(crate) fn first_invalid_vertex(vertices: &[ColoredVertex; 3]) -> Option<usize> {
    vertices.iter().position(|v| !v.is_finite())
}
