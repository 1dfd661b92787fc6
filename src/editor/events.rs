//! Editor notifications and their subscribers

use log::trace;
use serde::Serialize;

/// Named tool and view modes reported in [`EditorEvent::ModeChanged`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Xray,
    /// Empty-cell placeholders
    Grid,
    Overpaint,
    Fill,
    Paint,
}

/// Something observers may need to react to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    UndoRedoChanged { can_undo: bool, can_redo: bool },
    LayersChanged { can_go_up: bool, can_go_down: bool },
    ModeChanged { mode: ModeKind, value: bool },
    /// Render flags were recomputed
    VisibilityChanged,
}

type Subscriber = Box<dyn FnMut(&EditorEvent)>;

/// Synchronous fan-out of events to registered callbacks
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<Subscriber>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&EditorEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Deliver to every subscriber before returning
    pub fn emit(&mut self, event: EditorEvent) {
        trace!("event {:?}", event);
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
