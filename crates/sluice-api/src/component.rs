//! The component contract.
//!
//! A component is a unit of custom business logic executed by the
//! runtime. Each execution receives [`ExecutionParameters`] holding the
//! incoming [`Message`](crate::Message), the component's configuration
//! (API keys, credentials and other user-supplied settings) and its
//! snapshot (state carried from the previous execution, e.g. the id of
//! the last record fetched).
//!
//! A component talks back to the runtime only by emitting events through
//! [`EventEmitter`](crate::EventEmitter).
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use sluice_api::{Component, ExecutionParameters, Message};
//!
//! struct Uppercase;
//!
//! impl Component for Uppercase {
//!     fn execute(&mut self, parameters: &ExecutionParameters) {
//!         let name = parameters
//!             .message()
//!             .body()
//!             .get("name")
//!             .and_then(|v| v.as_str())
//!             .unwrap_or_default()
//!             .to_uppercase();
//!
//!         match Message::builder().body(json!({ "name": name })).build() {
//!             Ok(message) => parameters.event_emitter().emit_data(message),
//!             Err(err) => parameters.event_emitter().emit_error(err.into()),
//!         }
//!     }
//! }
//! ```

use crate::document::{empty_document, Document};
use crate::parameters::ExecutionParameters;

/// Capability set every component implements.
///
/// Only [`execute`](Component::execute) is required. The lifecycle hooks
/// default to doing nothing and returning empty documents.
pub trait Component: Send {
    /// Executes this component with the given parameters.
    ///
    /// All output goes through `parameters.event_emitter()`.
    fn execute(&mut self, parameters: &ExecutionParameters);

    /// Called once when the flow is activated.
    ///
    /// A webhook trigger can subscribe its URL with the target API here and
    /// return the subscription data; the runtime persists it and passes it
    /// to [`shutdown`](Component::shutdown) when the flow stops.
    fn startup(&mut self, _configuration: &Document) -> Document {
        empty_document()
    }

    /// Called once when the flow is deactivated, with the document that
    /// [`startup`](Component::startup) returned.
    fn shutdown(&mut self, _configuration: &Document) -> Document {
        empty_document()
    }

    /// Called before message processing starts: once per scheduled run for
    /// polling flows, once on first execution for real-time flows.
    fn init(&mut self, _configuration: &Document) {}
}
