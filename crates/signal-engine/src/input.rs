//! One frame of polled input.
//!
//! The windowing layer fills an [`InputFrame`] each frame and hands it
//! to [`Session::frame`](crate::Session::frame). Mouse coordinates are
//! already in grid-layout space.

use indexmap::IndexSet;

/// Keys the session reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Either control key.
    Control,
    /// Pause toggle.
    Space,
    /// Lower tempo.
    Num1,
    /// Raise tempo.
    Num2,
    /// Copy (with control).
    C,
    /// Log panel toggle.
    L,
    /// Info panel toggle.
    M,
    /// Reset all nodes, or reinitialise with control.
    Q,
    /// Reset hovered node, or load with control.
    R,
    /// Store (with control).
    S,
    /// Paste (with control).
    V,
    /// Cut (with control).
    X,
}

/// Mouse buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Wheel button.
    Middle,
    /// Secondary button.
    Right,
}

/// Discrete input events for a single frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    /// Keys currently held.
    pub keys_down: IndexSet<Key>,
    /// Keys that went down this frame.
    pub keys_pressed: IndexSet<Key>,
    /// Mouse position in grid-layout space.
    pub mouse: (i32, i32),
    /// Buttons that went down this frame.
    pub buttons_pressed: IndexSet<MouseButton>,
    /// Wheel movement this frame; positive is up.
    pub scroll_y: i32,
}

impl InputFrame {
    /// An empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `key` as pressed this frame (and therefore held).
    pub fn press(mut self, key: Key) -> Self {
        self.keys_down.insert(key);
        self.keys_pressed.insert(key);
        self
    }

    /// Mark `key` as held without a fresh press.
    pub fn hold(mut self, key: Key) -> Self {
        self.keys_down.insert(key);
        self
    }

    /// Place the mouse.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.mouse = (x, y);
        self
    }

    /// Mark `button` as pressed this frame.
    pub fn click(mut self, button: MouseButton) -> Self {
        self.buttons_pressed.insert(button);
        self
    }

    /// Add wheel movement.
    pub fn scroll(mut self, delta: i32) -> Self {
        self.scroll_y = self.scroll_y.saturating_add(delta);
        self
    }

    /// Whether control is held.
    pub fn ctrl(&self) -> bool {
        self.keys_down.contains(&Key::Control)
    }

    /// Whether `key` went down this frame.
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Whether `button` went down this frame.
    pub fn clicked(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_implies_down() {
        let f = InputFrame::new().press(Key::Space);
        assert!(f.pressed(Key::Space));
        assert!(f.keys_down.contains(&Key::Space));
        assert!(!f.ctrl());
    }

    #[test]
    fn hold_is_not_a_press() {
        let f = InputFrame::new().hold(Key::Control);
        assert!(f.ctrl());
        assert!(!f.pressed(Key::Control));
    }

    #[test]
    fn builder_accumulates() {
        let f = InputFrame::new()
            .at(5, 6)
            .click(MouseButton::Left)
            .scroll(1)
            .scroll(-3);
        assert_eq!(f.mouse, (5, 6));
        assert!(f.clicked(MouseButton::Left));
        assert!(!f.clicked(MouseButton::Right));
        assert_eq!(f.scroll_y, -2);
    }
}
