//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application. Platform types stay inside the runtime; the application
//! sees `AppEvent`s and per-frame contexts.

mod app;
mod ctx;
mod event;

pub use app::{App, AppControl, ExitStatus};
pub use ctx::{FrameCtx, InitCtx, WindowCtx};
pub use event::AppEvent;
