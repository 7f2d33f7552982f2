//! Event emitter capability handed to components by the runtime.
//!
//! A component produces all of its output through an emitter: data
//! messages, an updated snapshot, errors, and a few runtime-specific
//! events. The concrete implementation is owned by the runtime.
//!
//! # Usage
//!
//! ```ignore
//! fn execute(&mut self, parameters: &ExecutionParameters) {
//!     let emitter = parameters.event_emitter();
//!     emitter.emit_snapshot(next_snapshot);
//!     emitter.emit_data(message);
//! }
//! ```

use std::fmt::Debug;

use crate::document::Document;
use crate::http_reply::HttpReply;
use crate::message::Message;

/// Trait for emitting events from components.
///
/// Runtimes must implement the data, snapshot and error events. Rebound,
/// key updates and HTTP replies are optional; the defaults log a warning
/// and drop the event.
pub trait EventEmitter: Send + Sync + Debug {
    /// Emits a data message to the next step of the flow.
    fn emit_data(&self, message: Message);

    /// Emits the snapshot to persist for the next execution.
    fn emit_snapshot(&self, snapshot: Document);

    /// Emits an error raised while processing the current message.
    fn emit_error(&self, error: anyhow::Error);

    /// Asks the runtime to redeliver the current message later.
    fn emit_rebound(&self, reason: String) {
        tracing::warn!(reason = %reason, "emitter does not support rebound events");
    }

    /// Emits updated authentication data (e.g. refreshed OAuth tokens).
    fn emit_update_keys(&self, keys: Document) {
        tracing::warn!(
            keys = keys.len(),
            "emitter does not support update-keys events"
        );
    }

    /// Emits an HTTP reply for the request that triggered the flow.
    fn emit_http_reply(&self, reply: HttpReply) {
        tracing::warn!(
            status = reply.status(),
            "emitter does not support http-reply events"
        );
    }
}
