//! Parameters passed to [`Component::execute`](crate::Component::execute).

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::document::{empty_document, into_document, Document, NotADocument};
use crate::emitter::EventEmitter;
use crate::error::ApiError;
use crate::message::Message;

/// Everything a component needs for one execution: the incoming message,
/// its configuration, its snapshot, and the emitter to report through.
#[derive(Clone)]
pub struct ExecutionParameters {
    message: Message,
    configuration: Document,
    snapshot: Document,
    event_emitter: Arc<dyn EventEmitter>,
}

impl ExecutionParameters {
    /// Starts building parameters for the given message and emitter.
    pub fn builder(
        message: Message,
        event_emitter: Arc<dyn EventEmitter>,
    ) -> ExecutionParametersBuilder {
        ExecutionParametersBuilder::new(message, event_emitter)
    }

    /// The message for the component.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// The component's configuration (API keys, credentials and other
    /// settings collected from the user).
    pub fn configuration(&self) -> &Document {
        &self.configuration
    }

    /// The component's state as persisted by the previous execution.
    pub fn snapshot(&self) -> &Document {
        &self.snapshot
    }

    pub fn event_emitter(&self) -> &Arc<dyn EventEmitter> {
        &self.event_emitter
    }
}

impl fmt::Debug for ExecutionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionParameters")
            .field("message", &self.message)
            .field("configuration", &self.configuration)
            .field("snapshot", &self.snapshot)
            .field("event_emitter", &self.event_emitter)
            .finish()
    }
}

/// Builds [`ExecutionParameters`] instances.
///
/// Configuration and snapshot default to empty documents.
pub struct ExecutionParametersBuilder {
    message: Message,
    event_emitter: Arc<dyn EventEmitter>,
    configuration: Value,
    snapshot: Value,
}

impl ExecutionParametersBuilder {
    pub fn new(message: Message, event_emitter: Arc<dyn EventEmitter>) -> Self {
        Self {
            message,
            event_emitter,
            configuration: Value::Object(empty_document()),
            snapshot: Value::Object(empty_document()),
        }
    }

    /// Creates a builder from parts that may be absent.
    ///
    /// Fails with [`ApiError::InvalidArgument`] if the message or the
    /// emitter is missing, checking the message first.
    pub fn from_parts(
        message: Option<Message>,
        event_emitter: Option<Arc<dyn EventEmitter>>,
    ) -> Result<Self, ApiError> {
        let message = message.ok_or_else(|| ApiError::invalid_argument("Message is required"))?;
        let event_emitter =
            event_emitter.ok_or_else(|| ApiError::invalid_argument("EventEmitter is required"))?;
        Ok(Self::new(message, event_emitter))
    }

    pub fn configuration(mut self, configuration: impl Into<Value>) -> Self {
        self.configuration = configuration.into();
        self
    }

    pub fn snapshot(mut self, snapshot: impl Into<Value>) -> Self {
        self.snapshot = snapshot.into();
        self
    }

    /// Builds the parameters.
    ///
    /// Fails with [`ApiError::InvalidState`] if configuration or snapshot
    /// was replaced by null or by a value that is not an object.
    pub fn build(self) -> Result<ExecutionParameters, ApiError> {
        Ok(ExecutionParameters {
            configuration: state_field("Configuration", self.configuration)?,
            snapshot: state_field("Snapshot", self.snapshot)?,
            message: self.message,
            event_emitter: self.event_emitter,
        })
    }
}

fn state_field(name: &str, value: Value) -> Result<Document, ApiError> {
    into_document(value).map_err(|reason| match reason {
        NotADocument::Null => ApiError::invalid_state(format!("{name} may not be null")),
        NotADocument::WrongType(found) => {
            ApiError::invalid_state(format!("{name} must be a JSON object, got {found}"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug)]
    struct NullEmitter;

    impl EventEmitter for NullEmitter {
        fn emit_data(&self, _message: Message) {}
        fn emit_snapshot(&self, _snapshot: Document) {}
        fn emit_error(&self, _error: anyhow::Error) {}
    }

    fn emitter() -> Arc<dyn EventEmitter> {
        Arc::new(NullEmitter)
    }

    fn message() -> Message {
        Message::builder()
            .body(json!({"hello": "world"}))
            .build()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let message = message();
        let emitter = emitter();
        let params = ExecutionParameters::builder(message.clone(), emitter.clone())
            .build()
            .unwrap();

        assert_eq!(params.message(), &message);
        assert!(params.configuration().is_empty());
        assert!(params.snapshot().is_empty());
        assert!(Arc::ptr_eq(params.event_emitter(), &emitter));
    }

    #[test]
    fn test_configuration_and_snapshot() {
        let params = ExecutionParameters::builder(message(), emitter())
            .configuration(json!({"apiKey": "secret"}))
            .snapshot(json!({"lastId": 42}))
            .build()
            .unwrap();

        assert_eq!(params.configuration()["apiKey"], "secret");
        assert_eq!(params.snapshot()["lastId"], 42);
    }

    #[test]
    fn test_from_parts_requires_message() {
        let err = ExecutionParametersBuilder::from_parts(None, Some(emitter()))
            .err()
            .unwrap();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "invalid argument: Message is required");
    }

    #[test]
    fn test_from_parts_requires_emitter() {
        let err = ExecutionParametersBuilder::from_parts(Some(message()), None)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "invalid argument: EventEmitter is required");

        // message is checked first
        let err = ExecutionParametersBuilder::from_parts(None, None)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "invalid argument: Message is required");
    }

    #[test]
    fn test_from_parts_success() {
        let params = ExecutionParametersBuilder::from_parts(Some(message()), Some(emitter()))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(params.message().body()["hello"], "world");
    }

    #[test]
    fn test_null_configuration_is_invalid_state() {
        let err = ExecutionParameters::builder(message(), emitter())
            .configuration(Value::Null)
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidState(_)));
        assert_eq!(err.to_string(), "invalid state: Configuration may not be null");
    }

    #[test]
    fn test_null_snapshot_is_invalid_state() {
        let err = ExecutionParameters::builder(message(), emitter())
            .snapshot(Value::Null)
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid state: Snapshot may not be null");
    }

    #[test]
    fn test_non_object_snapshot_is_invalid_state() {
        let err = ExecutionParameters::builder(message(), emitter())
            .snapshot(json!(7))
            .build()
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid state: Snapshot must be a JSON object, got number"
        );
    }

    #[test]
    fn test_debug_lists_all_fields() {
        let params = ExecutionParameters::builder(message(), emitter())
            .build()
            .unwrap();
        let rendered = format!("{params:?}");
        assert!(rendered.starts_with("ExecutionParameters"));
        assert!(rendered.contains("configuration"));
        assert!(rendered.contains("NullEmitter"));
    }
}
