//! Time subsystem.
//!
//! Frame timing is advisory: it feeds FPS logging and never drives animation.
//! - one `FrameClock` per render loop, `tick()` once per frame for delta time
//! - one `FpsCounter` per render loop, `record()` once per frame for rolling FPS

mod fps;
mod frame_clock;

pub use fps::{FpsCounter, FpsSample};
pub use frame_clock::{FrameClock, FrameTime};
