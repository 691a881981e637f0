use std::time::Duration;

use winit::dpi::LogicalSize;

use tricolor_engine::input::Key;
use tricolor_engine::window::RuntimeConfig;

/// Demo settings. Defaults reproduce the classic hello-triangle window.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub width: u32,
    pub height: u32,
    /// Key that ends the program with a success status.
    pub exit_key: Key,
    /// How often FPS is logged.
    pub fps_log_interval: Duration,
    /// Optional cap on redraws per second.
    pub max_fps: Option<u32>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Hello Triangle - normalized coordinates".to_string(),
            width: 800,
            height: 600,
            exit_key: Key::Escape,
            fps_log_interval: Duration::from_secs(1),
            max_fps: None,
        }
    }
}

impl DemoConfig {
    /// Minimum time between redraws implied by `max_fps`.
    pub fn frame_interval(&self) -> Option<Duration> {
        self.max_fps
            .filter(|&fps| fps > 0)
            .map(|fps| Duration::from_secs_f64(1.0 / fps as f64))
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width as f64, self.height as f64),
            resizable: true,
            frame_interval: self.frame_interval(),
        }
    }
}
