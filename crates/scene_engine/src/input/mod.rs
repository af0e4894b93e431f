//! Keyboard state and window events
//!
//! The window system itself is outside this crate. Anything that can
//! produce [`AppEvent`]s implements [`EventSource`]; [`HeadlessEvents`]
//! stands in for a window when running without one.

use std::collections::HashSet;

/// Keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key (camera pitch up)
    W,
    /// A key (camera yaw left)
    A,
    /// S key (camera pitch down)
    S,
    /// D key (camera yaw right)
    D,
    /// Q key
    Q,
    /// E key
    E,
    /// Space bar
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Events delivered by the window layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The user asked to close the window
    WindowCloseRequested,
    /// A key went down
    KeyPressed(KeyCode),
    /// A key went up
    KeyReleased(KeyCode),
    /// Framebuffer size changed
    WindowResized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },
}

/// Set of keys currently held down
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: HashSet<KeyCode>,
}

impl InputState {
    /// No keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as held
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    /// Mark a key as released
    pub fn release(&mut self, key: KeyCode) {
        self.pressed.remove(&key);
    }

    /// Whether a key is held
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Release every key
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    /// Apply a key event; other events are ignored
    pub fn handle_event(&mut self, event: &AppEvent) {
        match *event {
            AppEvent::KeyPressed(key) => self.press(key),
            AppEvent::KeyReleased(key) => self.release(key),
            _ => {}
        }
    }
}

impl FromIterator<KeyCode> for InputState {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self {
            pressed: iter.into_iter().collect(),
        }
    }
}

/// Producer of window events, polled once per frame
pub trait EventSource {
    /// Events that arrived since the last poll
    fn poll_events(&mut self) -> Vec<AppEvent>;
}

/// Event source without a window
///
/// Produces nothing until `frame_limit` polls have happened, then asks to
/// close. With no limit it never closes on its own.
#[derive(Debug, Clone, Default)]
pub struct HeadlessEvents {
    frame_limit: Option<u64>,
    polls: u64,
    queued: Vec<AppEvent>,
}

impl HeadlessEvents {
    /// Close after `frame_limit` frames (`None` runs until the app quits)
    pub fn new(frame_limit: Option<u64>) -> Self {
        Self {
            frame_limit,
            ..Self::default()
        }
    }

    /// Deliver an event on the next poll
    pub fn push(&mut self, event: AppEvent) {
        self.queued.push(event);
    }
}

impl EventSource for HeadlessEvents {
    fn poll_events(&mut self) -> Vec<AppEvent> {
        let mut events = std::mem::take(&mut self.queued);
        self.polls += 1;
        if self.frame_limit.is_some_and(|limit| self.polls > limit) {
            events.push(AppEvent::WindowCloseRequested);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut input = InputState::new();
        input.handle_event(&AppEvent::KeyPressed(KeyCode::Up));
        input.handle_event(&AppEvent::KeyPressed(KeyCode::A));
        input.handle_event(&AppEvent::KeyReleased(KeyCode::A));

        assert!(input.is_pressed(KeyCode::Up));
        assert!(!input.is_pressed(KeyCode::A));

        input.clear();
        assert!(!input.is_pressed(KeyCode::Up));
    }

    #[test]
    fn test_headless_closes_after_limit() {
        let mut events = HeadlessEvents::new(Some(2));
        events.push(AppEvent::KeyPressed(KeyCode::W));

        assert_eq!(events.poll_events(), vec![AppEvent::KeyPressed(KeyCode::W)]);
        assert!(events.poll_events().is_empty());
        assert_eq!(events.poll_events(), vec![AppEvent::WindowCloseRequested]);
    }

    #[test]
    fn test_headless_without_limit_never_closes() {
        let mut events = HeadlessEvents::new(None);
        for _ in 0..1000 {
            assert!(events.poll_events().is_empty());
        }
    }
}
