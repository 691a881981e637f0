use tricolor_engine::coords::Vec2;
use tricolor_engine::core::{AppEvent, ExitStatus};
use tricolor_engine::input::{InputEvent, Key, KeyState, MouseButton, MouseButtonState};

use crate::state::ApplicationState;

/// Events the demo reacts to, narrowed from [`AppEvent`].
#[derive(Debug, Clone, PartialEq)]
pub enum DemoEvent {
    Quit,
    WindowResized { width: u32, height: u32 },
    KeyDown(Key),
    /// Position in logical pixels, top-left origin.
    MouseButtonDown { button: MouseButton, x: f32, y: f32 },
    Other,
}

impl DemoEvent {
    pub fn from_app_event(event: &AppEvent) -> Self {
        match event {
            AppEvent::QuitRequested => DemoEvent::Quit,
            AppEvent::Resized { width, height } => DemoEvent::WindowResized {
                width: *width,
                height: *height,
            },
            AppEvent::Input(InputEvent::Key {
                key,
                state: KeyState::Pressed,
                ..
            }) => DemoEvent::KeyDown(*key),
            AppEvent::Input(InputEvent::PointerButton(b))
                if b.state == MouseButtonState::Pressed =>
            {
                DemoEvent::MouseButtonDown {
                    button: b.button,
                    x: b.x,
                    y: b.y,
                }
            }
            AppEvent::Input(_) => DemoEvent::Other,
        }
    }
}

/// Application loop state. `Terminating` is final.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopState {
    Running,
    Terminating(ExitStatus),
}

impl LoopState {
    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

/// Result of handling one event.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EventOutcome {
    pub state: LoopState,
    /// Centre-origin, Y-up position of a mouse press.
    pub click: Option<Vec2>,
}

impl EventOutcome {
    fn stay(state: LoopState) -> Self {
        Self { state, click: None }
    }
}

/// Applies `event` to `app` and returns the next loop state.
pub fn handle_event(
    app: &mut ApplicationState,
    current: LoopState,
    exit_key: Key,
    event: &DemoEvent,
) -> EventOutcome {
    if !current.is_running() {
        return EventOutcome::stay(current);
    }

    match event {
        DemoEvent::Quit => EventOutcome::stay(LoopState::Terminating(ExitStatus::Success)),

        DemoEvent::WindowResized { width, height } => {
            app.resize(*width, *height);
            log::info!("window resized to {width}x{height}");
            EventOutcome::stay(current)
        }

        DemoEvent::KeyDown(key) if *key == exit_key => {
            log::info!("{key} pressed, exiting");
            EventOutcome::stay(LoopState::Terminating(ExitStatus::Success))
        }

        DemoEvent::KeyDown(key) => {
            log::info!("key pressed: {key}");
            EventOutcome::stay(current)
        }

        DemoEvent::MouseButtonDown { button, x, y } => {
            let rel = app.relative_to_center(*x, *y);
            log::info!(
                "{button:?} click at ({x:.0}, {y:.0}), relative to centre ({:.0}, {:.0})",
                rel.x,
                rel.y
            );
            EventOutcome {
                state: current,
                click: Some(rel),
            }
        }

        DemoEvent::Other => EventOutcome::stay(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tricolor_engine::input::{Modifiers, PointerButtonEvent, PointerMoveEvent};

    fn state() -> ApplicationState {
        ApplicationState::new(800, 600, Duration::from_secs(1))
    }

    fn key(key: Key, state: KeyState) -> AppEvent {
        AppEvent::Input(InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            repeat: false,
        })
    }

    fn press(x: f32, y: f32, state: MouseButtonState) -> AppEvent {
        AppEvent::Input(InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        }))
    }

    fn step(app: &mut ApplicationState, ev: &AppEvent) -> EventOutcome {
        handle_event(app, LoopState::Running, Key::Escape, &DemoEvent::from_app_event(ev))
    }

    #[test]
    fn translates_presses_only() {
        assert_eq!(
            DemoEvent::from_app_event(&key(Key::A, KeyState::Pressed)),
            DemoEvent::KeyDown(Key::A)
        );
        assert_eq!(
            DemoEvent::from_app_event(&key(Key::A, KeyState::Released)),
            DemoEvent::Other
        );
        assert_eq!(
            DemoEvent::from_app_event(&press(1.0, 2.0, MouseButtonState::Released)),
            DemoEvent::Other
        );
        assert_eq!(
            DemoEvent::from_app_event(&AppEvent::Input(InputEvent::Focused(true))),
            DemoEvent::Other
        );
    }

    #[test]
    fn resize_updates_state_and_keeps_running() {
        let mut app = state();
        let out = step(&mut app, &AppEvent::Resized { width: 1024, height: 768 });

        assert_eq!(out.state, LoopState::Running);
        assert_eq!(app.window_size, (1024, 768));
        let c = app.transform.apply(Vec2::zero());
        assert!((c.x - 512.0).abs() < 1e-4 && (c.y - 384.0).abs() < 1e-4);
    }

    #[test]
    fn click_reports_centre_relative_position() {
        let mut app = state();
        let out = step(&mut app, &press(410.0, 295.0, MouseButtonState::Pressed));

        assert_eq!(out.state, LoopState::Running);
        let rel = out.click.unwrap();
        assert!((rel.x - 10.0).abs() < 1e-4);
        assert!((rel.y - 5.0).abs() < 1e-4);
    }

    #[test]
    fn quit_and_exit_key_terminate() {
        let mut app = state();
        let done = LoopState::Terminating(ExitStatus::Success);

        assert_eq!(step(&mut app, &AppEvent::QuitRequested).state, done);
        assert_eq!(step(&mut app, &key(Key::Escape, KeyState::Pressed)).state, done);
    }

    #[test]
    fn configured_exit_key_is_honoured() {
        let mut app = state();
        let out = handle_event(&mut app, LoopState::Running, Key::Q, &DemoEvent::KeyDown(Key::Q));
        assert_eq!(out.state, LoopState::Terminating(ExitStatus::Success));

        let out = handle_event(
            &mut app,
            LoopState::Running,
            Key::Q,
            &DemoEvent::KeyDown(Key::Escape),
        );
        assert_eq!(out.state, LoopState::Running);
    }

    #[test]
    fn other_events_keep_running() {
        let mut app = state();
        let events = [
            key(Key::A, KeyState::Pressed),
            key(Key::Escape, KeyState::Released),
            press(0.0, 0.0, MouseButtonState::Pressed),
            AppEvent::Input(InputEvent::PointerMoved(PointerMoveEvent { x: 3.0, y: 4.0 })),
            AppEvent::Input(InputEvent::PointerLeft),
            AppEvent::Resized { width: 0, height: 0 },
        ];

        for ev in &events {
            assert_eq!(step(&mut app, ev).state, LoopState::Running, "{ev:?}");
        }
    }

    #[test]
    fn terminating_ignores_further_events() {
        let mut app = state();
        let done = LoopState::Terminating(ExitStatus::Success);
        let out = handle_event(
            &mut app,
            done,
            Key::Escape,
            &DemoEvent::WindowResized { width: 10, height: 10 },
        );

        assert_eq!(out.state, done);
        assert_eq!(app.window_size, (800, 600));
    }
}
