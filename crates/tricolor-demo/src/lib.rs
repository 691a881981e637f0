//! Hello-triangle demo.
//!
//! One window, one static triangle authored in normalized device coordinates
//! and mapped to window pixels by a transform recomputed on every resize.

pub mod app;
pub mod config;
pub mod events;
pub mod frame;
pub mod state;

use anyhow::Result;
use tricolor_engine::core::ExitStatus;
use tricolor_engine::device::GpuInit;
use tricolor_engine::window::Runtime;

pub use app::TriangleApp;
pub use config::DemoConfig;

/// Opens the window and runs the demo until the user quits.
///
/// Errors are initialization failures (event loop, window, GPU surface).
pub fn run(config: DemoConfig) -> Result<ExitStatus> {
    let runtime_config = config.runtime_config();
    Runtime::run(runtime_config, GpuInit::default(), TriangleApp::new(config))
}
