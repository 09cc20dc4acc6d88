/// Input the host forwards to the engine, in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// The pointer left the canvas; there is no position until the next move.
    PointerLeave,
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
    /// A UI-layer event (buttons, dialogue). `kind` is game-defined;
    /// `a`, `b`, `c` carry its arguments.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// Browser key codes the engine's games share.
pub mod keys {
    pub const ESCAPE: u32 = 27;
    pub const ENTER: u32 = 13;
}

/// Events received since the last frame that ran a tick.
///
/// Only the first tick of a frame sees the queue; the runner clears it once
/// the frame is done.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn key_pressed(&self, key_code: u32) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, InputEvent::KeyDown { key_code: k } if *k == key_code))
    }

    /// Arguments of every pending `Custom` event of `kind`, in arrival order.
    pub fn customs(&self, kind: u32) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.events.iter().filter_map(move |e| match *e {
            InputEvent::Custom { kind: k, a, b, c } if k == kind => Some([a, b, c]),
            _ => None,
        })
    }

    pub fn has_custom(&self, kind: u32) -> bool {
        self.customs(kind).next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(kind: u32, a: f32) -> InputEvent {
        InputEvent::Custom { kind, a, b: 0.0, c: 0.0 }
    }

    #[test]
    fn push_and_clear() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerMove { x: 10.0, y: 20.0 });
        q.push(InputEvent::PointerLeave);
        assert_eq!(q.len(), 2);
        q.clear();
        assert!(q.is_empty());
    }

    #[test]
    fn key_queries_ignore_releases() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyUp { key_code: keys::ESCAPE });
        assert!(!q.key_pressed(keys::ESCAPE));
        q.push(InputEvent::KeyDown { key_code: keys::ESCAPE });
        assert!(q.key_pressed(keys::ESCAPE));
        assert!(!q.key_pressed(keys::ENTER));
    }

    #[test]
    fn customs_filter_by_kind_in_order() {
        let mut q = InputQueue::new();
        q.push(custom(5, 1.0));
        q.push(custom(7, 9.0));
        q.push(custom(5, 2.0));
        let firsts: Vec<f32> = q.customs(5).map(|[a, _, _]| a).collect();
        assert_eq!(firsts, vec![1.0, 2.0]);
        assert!(q.has_custom(7));
        assert!(!q.has_custom(8));
    }
}
