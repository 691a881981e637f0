use super::types::{InputEvent, Modifiers, PointerButtonEvent, PointerMoveEvent};

/// Input context the platform layer needs to build complete events.
///
/// Button events from the platform carry neither coordinates nor modifiers,
/// so the runtime keeps the last pointer position and modifier state here.
#[derive(Debug, Default)]
pub struct InputState {
    /// Current modifier state.
    pub modifiers: Modifiers,

    /// Pointer position in logical pixels; `None` until the pointer enters
    /// the window and again after it leaves.
    pub pointer_pos: Option<(f32, f32)>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = *m;
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                self.pointer_pos = Some((*x, *y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { modifiers, .. } => {
                self.modifiers = *modifiers;
            }

            InputEvent::PointerButton(PointerButtonEvent { x, y, modifiers, .. }) => {
                self.pointer_pos = Some((*x, *y));
                self.modifiers = *modifiers;
            }

            InputEvent::Focused(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyState, MouseButton, MouseButtonState};

    #[test]
    fn pointer_position_follows_moves_and_clears_on_leave() {
        let mut s = InputState::default();
        assert_eq!(s.pointer_pos, None);
        s.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 12.0, y: 34.0 }));
        assert_eq!(s.pointer_pos, Some((12.0, 34.0)));
        s.apply_event(&InputEvent::PointerLeft);
        assert_eq!(s.pointer_pos, None);
    }

    #[test]
    fn button_press_updates_position() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 5.0,
            y: 6.0,
            modifiers: Modifiers::default(),
        }));
        assert_eq!(s.pointer_pos, Some((5.0, 6.0)));
    }

    #[test]
    fn key_events_carry_modifiers_forward() {
        let mut s = InputState::default();
        let shift = Modifiers { shift: true, ..Default::default() };
        s.apply_event(&InputEvent::Key {
            key: Key::A,
            state: KeyState::Pressed,
            modifiers: shift,
            repeat: false,
        });
        assert_eq!(s.modifiers, shift);

        s.apply_event(&InputEvent::ModifiersChanged(Modifiers::default()));
        assert_eq!(s.modifiers, Modifiers::default());
    }
}
