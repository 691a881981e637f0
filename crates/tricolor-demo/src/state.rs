use std::time::{Duration, Instant};

use tricolor_engine::coords::{Transform, Vec2};
use tricolor_engine::paint::Color;
use tricolor_engine::render::ColoredVertex;
use tricolor_engine::time::{FpsCounter, FpsSample, FrameTime};

/// Triangle corners in normalized device coordinates (Y up).
pub const TRIANGLE_VERTICES: [Vec2; 3] = [
    Vec2::new(0.0, 0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(-0.5, -0.5),
];

/// Per-vertex colors, index-aligned with [`TRIANGLE_VERTICES`].
pub const VERTEX_COLORS: [Color; 3] = [Color::RED, Color::GREEN, Color::BLUE];

/// Advisory frame timing: delta time plus rolling FPS.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    pub fps: FpsCounter,
    /// Most recent frame tick, if any frame has been drawn.
    pub last: Option<FrameTime>,
}

impl FrameTiming {
    pub fn new(fps_interval: Duration) -> Self {
        Self {
            fps: FpsCounter::new(fps_interval),
            last: None,
        }
    }
}

/// Everything the demo knows about the window and the triangle.
#[derive(Debug, Clone)]
pub struct ApplicationState {
    /// Logical pixels.
    pub window_size: (u32, u32),
    /// NDC to pixel space for `window_size`.
    pub transform: Transform,
    pub triangle_vertices: [Vec2; 3],
    pub vertex_colors: [Color; 3],
    pub frame_timing: FrameTiming,
}

impl ApplicationState {
    pub fn new(width: u32, height: u32, fps_interval: Duration) -> Self {
        Self {
            window_size: (width, height),
            transform: Transform::ndc_to_pixels(width, height),
            triangle_vertices: TRIANGLE_VERTICES,
            vertex_colors: VERTEX_COLORS,
            frame_timing: FrameTiming::new(fps_interval),
        }
    }

    /// Stores the new size and recomputes the transform.
    ///
    /// Zero dimensions are stored as-is; the runtime does not redraw while
    /// the drawable area is empty.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
        self.transform = Transform::ndc_to_pixels(width, height);
    }

    /// Converts a top-left-origin pixel position to a centre-origin, Y-up one.
    pub fn relative_to_center(&self, x: f32, y: f32) -> Vec2 {
        let (w, h) = self.window_size;
        Vec2::new(x - w as f32 / 2.0, h as f32 / 2.0 - y)
    }

    /// Triangle corners in pixel space, paired with their colors.
    pub fn pixel_vertices(&self) -> [ColoredVertex; 3] {
        std::array::from_fn(|i| {
            ColoredVertex::new(
                self.transform.apply(self.triangle_vertices[i]),
                self.vertex_colors[i],
            )
        })
    }

    /// Starts FPS measurement at `now`, e.g. once the window can draw.
    pub fn restart_timing(&mut self, now: Instant) {
        self.frame_timing.fps.restart(now);
        self.frame_timing.last = None;
    }

    /// Records a frame tick; returns a sample when an FPS interval completes.
    pub fn record_frame(&mut self, time: FrameTime) -> Option<FpsSample> {
        self.frame_timing.last = Some(time);
        self.frame_timing.fps.record(time.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricolor_engine::time::FrameClock;

    const EPS: f32 = 1e-4;

    fn approx(a: Vec2, x: f32, y: f32) -> bool {
        (a.x - x).abs() < EPS && (a.y - y).abs() < EPS
    }

    fn state(w: u32, h: u32) -> ApplicationState {
        ApplicationState::new(w, h, Duration::from_secs(1))
    }

    #[test]
    fn initial_transform_matches_size() {
        let s = state(800, 600);
        assert!(approx(s.transform.apply(Vec2::zero()), 400.0, 300.0));
    }

    #[test]
    fn resize_updates_size_and_transform() {
        let mut s = state(800, 600);
        s.resize(1024, 768);

        assert_eq!(s.window_size, (1024, 768));
        assert!(approx(s.transform.apply(Vec2::zero()), 512.0, 384.0));
        assert!(approx(s.transform.apply(Vec2::new(1.0, 1.0)), 1024.0, 0.0));
        assert!(approx(s.transform.apply(Vec2::new(-1.0, -1.0)), 0.0, 768.0));
    }

    #[test]
    fn resize_to_same_size_is_bit_identical() {
        let mut s = state(640, 480);
        let before = s.transform.to_cols_array();
        s.resize(640, 480);
        assert_eq!(before.map(f32::to_bits), s.transform.to_cols_array().map(f32::to_bits));
    }

    #[test]
    fn zero_size_is_stored() {
        let mut s = state(800, 600);
        s.resize(0, 0);
        assert_eq!(s.window_size, (0, 0));
    }

    #[test]
    fn relative_position_is_centred_and_y_up() {
        let s = state(800, 600);
        let p = s.relative_to_center(410.0, 295.0);
        assert!(approx(p, 10.0, 5.0));
    }

    #[test]
    fn pixel_vertices_follow_transform() {
        let s = state(800, 600);
        let v = s.pixel_vertices();

        assert!(approx(v[0].position, 400.0, 150.0));
        assert!(approx(v[1].position, 600.0, 450.0));
        assert!(approx(v[2].position, 200.0, 450.0));
        assert_eq!(v[0].color, Color::RED);
        assert_eq!(v[1].color, Color::GREEN);
        assert_eq!(v[2].color, Color::BLUE);
    }

    #[test]
    fn fps_window_starts_at_restart() {
        let mut s = state(800, 600);
        let start = Instant::now() + Duration::from_secs(3);
        s.restart_timing(start);

        let mut clock = FrameClock::new();
        clock.tick_at(start);
        assert!(s.record_frame(clock.tick_at(start + Duration::from_millis(500))).is_none());
        let sample = s
            .record_frame(clock.tick_at(start + Duration::from_secs(1)))
            .expect("interval complete");
        assert_eq!(sample.elapsed, Duration::from_secs(1));
        assert!((sample.fps - 2.0).abs() < 1e-4);
    }

    #[test]
    fn record_frame_keeps_last_tick() {
        let mut s = state(800, 600);
        let mut clock = FrameClock::new();
        let t = clock.tick();
        assert!(s.record_frame(t).is_none());
        assert_eq!(s.frame_timing.last.map(|t| t.frame_index), Some(t.frame_index));
    }
}
