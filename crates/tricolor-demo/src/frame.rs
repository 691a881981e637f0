use tricolor_engine::paint::Color;
use tricolor_engine::render::{DrawSurface, RenderError};

use crate::state::ApplicationState;

/// What happened to one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Presented,
    /// Nothing was presented; the error has already been logged.
    Skipped(RenderError),
}

/// Clears to black, draws the triangle and presents.
///
/// Failures are logged and reported as [`FrameOutcome::Skipped`]; they never
/// change the loop state.
pub fn render_frame<S: DrawSurface>(app: &ApplicationState, surface: &mut S) -> FrameOutcome {
    surface.clear(Color::BLACK);

    if let Err(e) = surface.fill_triangle(&app.pixel_vertices()) {
        log::error!("failed to render geometry: {e}");
        return FrameOutcome::Skipped(e);
    }

    match surface.present() {
        Ok(()) => FrameOutcome::Presented,
        Err(e) => {
            log::error!("failed to present frame: {e}");
            FrameOutcome::Skipped(e)
        }
    }
}
