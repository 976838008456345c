use bevy::prelude::*;
use cursor_input::{DocumentEvent, ElementPath, PointerInput, PointerKind};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub type SharedDomEventQueue = Arc<Mutex<VecDeque<QueuedDomEvent>>>;

/// Events pushed by the host page, drained once per frame.
#[derive(Resource, Clone, Default)]
pub struct HostEventQueue(pub SharedDomEventQueue);

impl HostEventQueue {
    /// Safe to call from any thread. A poisoned queue drops the event.
    pub fn push(&self, event: QueuedDomEvent) {
        match self.0.lock() {
            Ok(mut guard) => guard.push_back(event),
            Err(_) => tracing::warn!("host event queue poisoned, dropping event"),
        }
    }
}

/// Raw document events as the host reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueuedDomEvent {
    PointerMove {
        x: f32,
        y: f32,
        /// Host event time. Moves without one are stamped when pumped.
        #[serde(default)]
        timestamp_ms: Option<f64>,
        #[serde(default)]
        target: ElementPath,
    },
    PointerDown {
        x: f32,
        y: f32,
        #[serde(default)]
        pointer: PointerKind,
        #[serde(default)]
        target: ElementPath,
    },
    PointerUp {
        x: f32,
        y: f32,
        #[serde(default)]
        target: ElementPath,
    },
    MouseEnter,
    MouseLeave,
    VisibilityChange {
        hidden: bool,
    },
    PageHide,
    HashChange,
    PopState,
    RouteChange {
        path: String,
    },
    Teardown,
}

enum Routed {
    Pointer(PointerInput),
    Document(DocumentEvent),
}

impl QueuedDomEvent {
    fn route(self, pumped_at_ms: f64) -> Routed {
        match self {
            Self::PointerMove {
                x,
                y,
                timestamp_ms,
                target,
            } => Routed::Pointer(PointerInput::Move {
                x,
                y,
                timestamp_ms: timestamp_ms.unwrap_or(pumped_at_ms),
                target,
            }),
            Self::PointerDown {
                x,
                y,
                pointer,
                target,
            } => Routed::Pointer(PointerInput::Down {
                x,
                y,
                pointer,
                target,
            }),
            Self::PointerUp { x, y, target } => Routed::Pointer(PointerInput::Up { x, y, target }),
            Self::MouseEnter => Routed::Document(DocumentEvent::MouseEnter),
            Self::MouseLeave => Routed::Document(DocumentEvent::MouseLeave),
            Self::VisibilityChange { hidden: true } => {
                Routed::Document(DocumentEvent::VisibilityHidden)
            }
            Self::VisibilityChange { hidden: false } => {
                Routed::Document(DocumentEvent::VisibilityVisible)
            }
            Self::PageHide => Routed::Document(DocumentEvent::PageHide),
            Self::HashChange => Routed::Document(DocumentEvent::HashChange),
            Self::PopState => Routed::Document(DocumentEvent::PopState),
            Self::RouteChange { path } => Routed::Document(DocumentEvent::RouteChange { path }),
            Self::Teardown => Routed::Document(DocumentEvent::Teardown),
        }
    }
}

pub fn pump_host_events_system(
    queue: Res<HostEventQueue>,
    time: Res<Time>,
    mut pointer_events: MessageWriter<PointerInput>,
    mut document_events: MessageWriter<DocumentEvent>,
) {
    let events: Vec<QueuedDomEvent> = {
        let Ok(mut guard) = queue.0.lock() else {
            return;
        };
        if guard.is_empty() {
            return;
        }
        guard.drain(..).collect()
    };

    let pumped_at_ms = time.elapsed_secs_f64() * 1000.0;
    for event in events {
        match event.route(pumped_at_ms) {
            Routed::Pointer(input) => {
                pointer_events.write(input);
            }
            Routed::Document(doc) => {
                document_events.write(doc);
            }
        }
    }
}
