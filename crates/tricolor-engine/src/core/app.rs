use std::process::ExitCode;

use super::ctx::{FrameCtx, InitCtx};
use super::event::AppEvent;

/// How the application finished.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ExitStatus {
    /// User-initiated termination (quit request, exit key, window closed).
    Success,
    /// Initialization or runtime failure.
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::SUCCESS,
            ExitStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit(ExitStatus),
}

/// Application contract driven by [`Runtime`](crate::window::Runtime).
///
/// Callbacks run on the event-loop thread, one at a time, in arrival order.
pub trait App {
    /// Called once after the window and GPU surface exist.
    fn on_init(&mut self, ctx: &mut InitCtx<'_, '_>) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }

    /// Called for every translated window event.
    fn on_event(&mut self, event: &AppEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;

    /// Called once before the GPU surface and window are released.
    fn on_exit(&mut self, status: ExitStatus) {
        let _ = status;
    }
}
