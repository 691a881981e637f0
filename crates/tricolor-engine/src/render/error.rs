use std::fmt;

use crate::device::SurfaceErrorAction;

/// Per-frame rendering failure.
///
/// These are transient by contract: the caller logs them and moves on to the
/// next frame. Initialization failures are reported through `anyhow` instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The swapchain texture could not be acquired.
    SurfaceAcquire {
        reason: String,
        action: SurfaceErrorAction,
    },
    /// A submitted vertex had a non-finite position or color.
    InvalidGeometry { vertex: usize },
    /// The drawable area is zero-sized (e.g. minimized window).
    EmptyViewport,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceAcquire { reason, action } => {
                write!(f, "failed to acquire surface texture ({reason}); {action:?}")
            }
            RenderError::InvalidGeometry { vertex } => {
                write!(f, "vertex {vertex} has a non-finite position or color")
            }
            RenderError::EmptyViewport => f.write_str("viewport has zero area"),
        }
    }
}

impl std::error::Error for RenderError {}
