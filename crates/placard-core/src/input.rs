//! Global input events and the coordinator-owned dispatch queue.
//!
//! The host registers its platform listeners once at coordinator start-up
//! and forwards everything through [`EventQueue`] / dispatch; no ambient
//! global state is involved.

use crate::element::ElementId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl held, nothing else.
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// What a global pointer-down landed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// A placed element.
    Element(ElementId),
    /// The empty canvas surface.
    Canvas,
    /// Anywhere outside the canvas.
    Outside,
}

/// Global input events the coordinator subscribes to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    KeyDown {
        key: String,
        modifiers: Modifiers,
    },
    PointerDown {
        position: Point,
        target: PointerTarget,
    },
}

/// Whether the coordinator consumed an event. Hosts use `Handled` to
/// suppress native behavior (e.g. the browser's own select-all).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Ignored,
}

/// FIFO event queue. One event is handled to completion, commits included,
/// before the next is popped; the single-threaded cooperative model has no
/// mid-handler interleaving.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<InputEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = EventQueue::new();
        queue.push(InputEvent::KeyDown {
            key: "Delete".to_string(),
            modifiers: Modifiers::default(),
        });
        queue.push(InputEvent::PointerDown {
            position: Point::ZERO,
            target: PointerTarget::Outside,
        });

        assert_eq!(queue.len(), 2);
        assert!(matches!(
            queue.pop(),
            Some(InputEvent::KeyDown { .. })
        ));
        assert!(matches!(
            queue.pop(),
            Some(InputEvent::PointerDown { .. })
        ));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_ctrl_modifier_helper() {
        let modifiers = Modifiers::ctrl();
        assert!(modifiers.ctrl);
        assert!(!modifiers.shift && !modifiers.alt && !modifiers.meta);
    }
}
