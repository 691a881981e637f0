use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, AppEvent, ExitStatus, FrameCtx, InitCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::InputState;
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,

    /// Minimum time between redraws. `None` redraws continuously (paced by
    /// the present mode).
    pub frame_interval: Option<Duration>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tricolor".to_string(),
            initial_size: LogicalSize::new(800.0, 600.0),
            resizable: true,
            frame_interval: None,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs the event loop until the application exits.
    ///
    /// Returns the application's exit status, or an error when the event
    /// loop, window or GPU surface could not be created. In every case the
    /// GPU surface is released before the window, and both before `app`.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<ExitStatus>
    where
        A: App + 'static,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init, app);

        let run_result = event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error");

        // Covers loops that end without a shutdown request (e.g. platform exit).
        state.release(ExitStatus::Success);

        run_result?;
        state.into_outcome()
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RuntimeState<A>
where
    A: App + 'static,
{
    // Declared before `app` so the window (and its GPU surface) drops first.
    window: Option<WindowEntry>,
    app: A,

    config: RuntimeConfig,
    gpu_init: GpuInit,

    status: Option<ExitStatus>,
    init_error: Option<anyhow::Error>,
    released: bool,
    last_redraw: Option<Instant>,
}

impl<A> RuntimeState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            window: None,
            app,
            config,
            gpu_init,
            status: None,
            init_error: None,
            released: false,
            last_redraw: None,
        }
    }

    fn exit_requested(&self) -> bool {
        self.status.is_some()
    }

    /// Creates the window and the GPU surface bound to it as one unit.
    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        WindowEntryTryBuilder {
            input_state: InputState::default(),
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed for window")
            },
        }
        .try_build()
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop, status: ExitStatus) {
        if self.status.is_none() {
            self.status = Some(status);
        }
        self.release(status);
        event_loop.exit();
    }

    /// Notifies the app, then drops the GPU surface and the window.
    fn release(&mut self, status: ExitStatus) {
        if self.released {
            return;
        }
        self.released = true;

        self.app.on_exit(self.status.unwrap_or(status));

        if let Some(entry) = self.window.take() {
            // ouroboros drops `gpu` (the borrower) before `window`.
            drop(entry);
            log::debug!("GPU surface and window released");
        }
    }

    fn into_outcome(mut self) -> Result<ExitStatus> {
        match self.init_error.take() {
            Some(err) => Err(err),
            None => Ok(self.status.unwrap_or(ExitStatus::Success)),
        }
    }

    fn handle_control(&mut self, event_loop: &ActiveEventLoop, control: AppControl) {
        if let AppControl::Exit(status) = control {
            self.request_exit(event_loop, status);
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.last_redraw = Some(Instant::now());

        // Split borrows to avoid `self` capture inside `ouroboros` closures.
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else { return };

        let size: PhysicalSize<u32> = entry.with_gpu(|gpu| gpu.size());
        if size.width == 0 || size.height == 0 {
            // Minimized; nothing to draw into.
            return;
        }

        let control = entry.with_mut(|fields| {
            let time = fields.clock.tick();
            let mut ctx = FrameCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
                time,
            };
            app.on_frame(&mut ctx)
        });

        self.handle_control(event_loop, control);
    }

    /// Maps a raw window event to an `AppEvent`, updating runtime-owned
    /// state (surface size, input tracking) on the way.
    fn translate(entry: &mut WindowEntry, event: &WindowEvent) -> Option<AppEvent> {
        match event {
            WindowEvent::CloseRequested => Some(AppEvent::QuitRequested),

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                Some(logical_resize(entry))
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.with_window(|w| w.inner_size());
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                Some(logical_resize(entry))
            }

            _ => entry.with_mut(|fields| {
                let ev = translate_window_event(fields.window, fields.input_state, event)?;
                fields.input_state.apply_event(&ev);
                Some(AppEvent::Input(ev))
            }),
        }
    }
}

fn logical_resize(entry: &WindowEntry) -> AppEvent {
    let (width, height) = entry.with_window(|w| WindowCtx { window: w }.logical_size_u32());
    AppEvent::Resized { width, height }
}

impl<A> ApplicationHandler for RuntimeState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested() {
            return;
        }

        let mut entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("window creation failed; stopping event loop");
                self.init_error = Some(e);
                self.request_exit(event_loop, ExitStatus::Failure);
                return;
            }
        };

        let control = entry.with(|fields| {
            let mut ctx = InitCtx {
                window: WindowCtx { window: fields.window },
                gpu: fields.gpu,
            };
            self.app.on_init(&mut ctx)
        });

        // First delta measures from here, not from before adapter setup.
        entry.with_clock_mut(|c| c.reset());
        entry.with_window(|w| w.request_redraw());
        self.window = Some(entry);

        self.handle_control(event_loop, control);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested() {
            event_loop.exit();
            return;
        }
        let Some(entry) = self.window.as_ref() else { return };

        match (self.config.frame_interval, self.last_redraw) {
            (Some(interval), Some(last)) if last.elapsed() < interval => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(last + interval));
            }
            _ => {
                event_loop.set_control_flow(ControlFlow::Wait);
                entry.with_window(|w| w.request_redraw());
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested() {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_mut() else { return };
        if entry.with_window(|w| w.id()) != window_id {
            return;
        }

        if matches!(event, WindowEvent::RedrawRequested) {
            self.redraw(event_loop);
            return;
        }

        if let Some(app_event) = Self::translate(entry, &event) {
            let control = self.app.on_event(&app_event);
            self.handle_control(event_loop, control);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release(ExitStatus::Success);
    }
}
