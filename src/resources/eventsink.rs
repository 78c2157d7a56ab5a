//! Injected observability sink.
//!
//! The core reports what happens during level load and gameplay as
//! structured [`CoreEvent`]s instead of formatted log lines. The sink is
//! chosen by whoever builds the [`Game`](crate::game::Game): [`LogSink`]
//! forwards to the `log` facade, [`RecordingSink`] keeps events in memory
//! for inspection.

use std::fmt;
use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::Resource;
use log::{debug, error, info, warn};

use crate::level::ObjectKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreEvent {
    Spawned { id: u32, kind: ObjectKind },
    UnrecognizedKind { id: u32, kind: String },
    DuplicateId { id: u32 },
    InvalidProperty { id: u32, key: String, value: String },
    LinkResolved { trigger: u32, target: u32 },
    LinkUnresolved { trigger: u32, target: u32 },
    Enter { trigger: u32, other: u32 },
    Rejected { trigger: u32, other: u32 },
    Exit { trigger: u32, other: u32 },
    PushedBack { id: u32, obstacle: u32 },
    Teleported { id: u32, teleport: u32 },
    Pulse { source: u32, target: u32, accepted: bool },
    FloorChanged { id: u32, from: i32, to: i32 },
    LevelCompleted { keystone: u32 },
}

impl fmt::Display for CoreEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreEvent::Spawned { id, kind } => write!(f, "event=spawned id={id} kind={kind}"),
            CoreEvent::UnrecognizedKind { id, kind } => {
                write!(f, "event=unrecognized_kind id={id} kind={kind:?}")
            }
            CoreEvent::DuplicateId { id } => write!(f, "event=duplicate_id id={id}"),
            CoreEvent::InvalidProperty { id, key, value } => {
                write!(f, "event=invalid_property id={id} key={key} value={value:?}")
            }
            CoreEvent::LinkResolved { trigger, target } => {
                write!(f, "event=link_resolved trigger={trigger} target={target}")
            }
            CoreEvent::LinkUnresolved { trigger, target } => {
                write!(f, "event=link_unresolved trigger={trigger} target={target}")
            }
            CoreEvent::Enter { trigger, other } => {
                write!(f, "event=enter trigger={trigger} other={other}")
            }
            CoreEvent::Rejected { trigger, other } => {
                write!(f, "event=rejected trigger={trigger} other={other}")
            }
            CoreEvent::Exit { trigger, other } => {
                write!(f, "event=exit trigger={trigger} other={other}")
            }
            CoreEvent::PushedBack { id, obstacle } => {
                write!(f, "event=pushed_back id={id} obstacle={obstacle}")
            }
            CoreEvent::Teleported { id, teleport } => {
                write!(f, "event=teleported id={id} teleport={teleport}")
            }
            CoreEvent::Pulse {
                source,
                target,
                accepted,
            } => write!(
                f,
                "event=pulse source={source} target={target} accepted={accepted}"
            ),
            CoreEvent::FloorChanged { id, from, to } => {
                write!(f, "event=floor_changed id={id} from={from} to={to}")
            }
            CoreEvent::LevelCompleted { keystone } => {
                write!(f, "event=level_completed keystone={keystone}")
            }
        }
    }
}

/// Receiver of core events.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &CoreEvent);
}

/// Writes every event to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn record(&self, event: &CoreEvent) {
        match event {
            CoreEvent::UnrecognizedKind { .. } => error!("{event}"),
            CoreEvent::DuplicateId { .. } | CoreEvent::InvalidProperty { .. } => warn!("{event}"),
            CoreEvent::LevelCompleted { .. } => info!("{event}"),
            _ => debug!("{event}"),
        }
    }
}

/// Keeps events in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<CoreEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<CoreEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn count(&self, pred: impl Fn(&CoreEvent) -> bool) -> usize {
        self.events
            .lock()
            .map(|e| e.iter().filter(|ev| pred(ev)).count())
            .unwrap_or(0)
    }

    pub fn clear(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.clear();
        }
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &CoreEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// The sink installed in the world.
#[derive(Resource)]
pub struct EventSinkRes(pub Box<dyn EventSink>);

impl EventSinkRes {
    pub fn new(sink: impl EventSink + 'static) -> Self {
        Self(Box::new(sink))
    }

    pub fn record(&self, event: CoreEvent) {
        self.0.record(&event);
    }
}

impl Default for EventSinkRes {
    fn default() -> Self {
        Self::new(LogSink)
    }
}
