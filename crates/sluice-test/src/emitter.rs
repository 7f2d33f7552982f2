//! An [`EventEmitter`] that records everything a component emits.

use std::sync::Arc;

use parking_lot::Mutex;
use sluice_api::{Document, EventEmitter, HttpReply, Message};
use sluice_telemetry::log_event_emitted;

/// One event emitted by a component.
#[derive(Debug)]
pub enum EmittedEvent {
    Data(Message),
    Snapshot(Document),
    Error(anyhow::Error),
    Rebound(String),
    UpdateKeys(Document),
    HttpReply(HttpReply),
}

impl EmittedEvent {
    /// Short name of the event kind, as used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            EmittedEvent::Data(_) => "data",
            EmittedEvent::Snapshot(_) => "snapshot",
            EmittedEvent::Error(_) => "error",
            EmittedEvent::Rebound(_) => "rebound",
            EmittedEvent::UpdateKeys(_) => "updateKeys",
            EmittedEvent::HttpReply(_) => "httpReply",
        }
    }
}

/// Records emitted events in order. Cheap to clone; clones share the
/// same recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingEmitter {
    events: Arc<Mutex<Vec<EmittedEvent>>>,
}

impl RecordingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this emitter as the handle type the runtime passes around.
    pub fn handle(&self) -> Arc<dyn EventEmitter> {
        Arc::new(self.clone())
    }

    fn record(&self, event: EmittedEvent) {
        log_event_emitted!(kind = event.kind(), "component emitted event");
        self.events.lock().push(event);
    }

    /// Removes and returns all recorded events.
    pub fn take(&self) -> Vec<EmittedEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Kinds of all recorded events, in emission order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events.lock().iter().map(EmittedEvent::kind).collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }

    /// Recorded data messages.
    pub fn data(&self) -> Vec<Message> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                EmittedEvent::Data(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    /// Recorded snapshots.
    pub fn snapshots(&self) -> Vec<Document> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                EmittedEvent::Snapshot(s) => Some(s.clone()),
                _ => None,
            })
            .collect()
    }

    /// Recorded errors, rendered with their full cause chain.
    pub fn errors(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                EmittedEvent::Error(err) => Some(format!("{err:#}")),
                _ => None,
            })
            .collect()
    }

    pub fn http_replies(&self) -> Vec<HttpReply> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                EmittedEvent::HttpReply(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }
}

impl EventEmitter for RecordingEmitter {
    fn emit_data(&self, message: Message) {
        self.record(EmittedEvent::Data(message));
    }

    fn emit_snapshot(&self, snapshot: Document) {
        self.record(EmittedEvent::Snapshot(snapshot));
    }

    fn emit_error(&self, error: anyhow::Error) {
        self.record(EmittedEvent::Error(error));
    }

    fn emit_rebound(&self, reason: String) {
        self.record(EmittedEvent::Rebound(reason));
    }

    fn emit_update_keys(&self, keys: Document) {
        self.record(EmittedEvent::UpdateKeys(keys));
    }

    fn emit_http_reply(&self, reply: HttpReply) {
        self.record(EmittedEvent::HttpReply(reply));
    }
}
