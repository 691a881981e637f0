use crate::input::InputEvent;

/// Window-level events delivered to [`App::on_event`](super::App::on_event).
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The user asked to close the window.
    QuitRequested,

    /// The drawable area changed. Size is in logical pixels, rounded.
    ///
    /// Also emitted when the scale factor changes, since that changes the
    /// logical size.
    Resized { width: u32, height: u32 },

    /// Keyboard, pointer or focus input.
    Input(InputEvent),
}
