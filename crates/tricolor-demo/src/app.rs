use std::time::Instant;

use tricolor_engine::core::{App, AppControl, AppEvent, ExitStatus, FrameCtx, InitCtx};
use tricolor_engine::render::TriangleRenderer;

use crate::config::DemoConfig;
use crate::events::{handle_event, DemoEvent, LoopState};
use crate::frame::{render_frame, FrameOutcome};
use crate::state::ApplicationState;

/// The hello-triangle application.
pub struct TriangleApp {
    config: DemoConfig,
    state: ApplicationState,
    loop_state: LoopState,
    renderer: TriangleRenderer,
}

impl TriangleApp {
    pub fn new(config: DemoConfig) -> Self {
        let state = ApplicationState::new(config.width, config.height, config.fps_log_interval);
        Self {
            config,
            state,
            loop_state: LoopState::Running,
            renderer: TriangleRenderer::new(),
        }
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn loop_state(&self) -> LoopState {
        self.loop_state
    }

    fn control(&self) -> AppControl {
        match self.loop_state {
            LoopState::Running => AppControl::Continue,
            LoopState::Terminating(status) => AppControl::Exit(status),
        }
    }
}

impl App for TriangleApp {
    fn on_init(&mut self, ctx: &mut InitCtx<'_, '_>) -> AppControl {
        log::info!(
            "renderer: {} ({:?})",
            ctx.gpu.adapter_name(),
            ctx.gpu.backend()
        );

        // Scale factor may make the logical size differ from the request.
        let (w, h) = ctx.window.logical_size_u32();
        self.state.resize(w, h);

        log::info!("window size: {w}x{h}");
        log::info!("press {} to exit", self.config.exit_key);
        log::info!("coordinate origin is at the window centre");

        self.state.restart_timing(Instant::now());

        AppControl::Continue
    }

    fn on_event(&mut self, event: &AppEvent) -> AppControl {
        let event = DemoEvent::from_app_event(event);
        let outcome = handle_event(
            &mut self.state,
            self.loop_state,
            self.config.exit_key,
            &event,
        );
        self.loop_state = outcome.state;
        self.control()
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.loop_state.is_running() {
            return self.control();
        }

        let time = ctx.time;
        if let Some(sample) = self.state.record_frame(time) {
            log::info!("FPS: {:.1}, Delta time: {:.3} ms", sample.fps, time.dt_ms());
        }

        let mut surface = ctx.surface(&mut self.renderer);
        if let FrameOutcome::Skipped(e) = render_frame(&self.state, &mut surface) {
            log::debug!("frame {} skipped: {e}", time.frame_index);
        }

        AppControl::Continue
    }

    fn on_exit(&mut self, status: ExitStatus) {
        log::info!("exiting with status {status:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricolor_engine::input::{InputEvent, Key, KeyState, Modifiers};
    use tricolor_engine::paint::Color;
    use tricolor_engine::render::{ColoredVertex, DrawSurface, RenderError};

    struct FailingSurface;

    impl DrawSurface for FailingSurface {
        fn clear(&mut self, _color: Color) {}

        fn fill_triangle(&mut self, _vertices: &[ColoredVertex; 3]) -> Result<(), RenderError> {
            Err(RenderError::InvalidGeometry { vertex: 0 })
        }

        fn present(&mut self) -> Result<(), RenderError> {
            Ok(())
        }
    }

    fn key_down(key: Key) -> AppEvent {
        AppEvent::Input(InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: false,
        })
    }

    #[test]
    fn starts_running_with_configured_size() {
        let app = TriangleApp::new(DemoConfig::default());
        assert_eq!(app.loop_state(), LoopState::Running);
        assert_eq!(app.state().window_size, (800, 600));
    }

    #[test]
    fn exit_key_requests_successful_exit() {
        let mut app = TriangleApp::new(DemoConfig::default());

        assert_eq!(app.on_event(&key_down(Key::A)), AppControl::Continue);
        assert_eq!(
            app.on_event(&key_down(Key::Escape)),
            AppControl::Exit(ExitStatus::Success)
        );
        assert_eq!(app.on_event(&key_down(Key::A)), AppControl::Exit(ExitStatus::Success));
    }

    #[test]
    fn failed_frame_keeps_app_running() {
        let mut app = TriangleApp::new(DemoConfig::default());

        let out = render_frame(app.state(), &mut FailingSurface);

        assert_eq!(out, FrameOutcome::Skipped(RenderError::InvalidGeometry { vertex: 0 }));
        assert_eq!(app.loop_state(), LoopState::Running);
        assert_eq!(app.on_event(&AppEvent::Resized { width: 640, height: 480 }), AppControl::Continue);
    }

    #[test]
    fn resize_event_reaches_state() {
        let mut app = TriangleApp::new(DemoConfig::default());
        app.on_event(&AppEvent::Resized { width: 1024, height: 768 });
        assert_eq!(app.state().window_size, (1024, 768));
    }
}
