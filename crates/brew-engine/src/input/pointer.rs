use glam::Vec2;

use super::queue::{InputEvent, InputQueue};

/// Latest known pointer position, folded from queued pointer events.
///
/// Hover-driven games sample this once per tick instead of reacting to
/// individual move events. Position persists across ticks with no movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply this tick's pointer events in queue order.
    pub fn apply(&mut self, input: &InputQueue) {
        for event in input.iter() {
            match *event {
                InputEvent::PointerMove { x, y }
                | InputEvent::PointerDown { x, y }
                | InputEvent::PointerUp { x, y } => {
                    self.position = Some(Vec2::new(x, y));
                }
                InputEvent::PointerLeave => self.position = None,
                _ => {}
            }
        }
    }

    /// Last pointer position, if the pointer has been seen at all.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}
