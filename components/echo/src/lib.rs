//! Echo component for the Sluice integration runtime.
//!
//! Sends the incoming message back: the body is wrapped under `echo`,
//! attachments are forwarded, and the snapshot is echoed back as the new
//! snapshot. Useful for wiring checks and as a reference implementation.

use serde_json::{json, Value};
use sluice_api::prelude::*;

/// Configuration key holding the label reported on startup.
const CONFIG_LABEL: &str = "label";
/// Configuration key selecting what the echoed body contains.
const CONFIG_MODE: &str = "mode";
/// Configuration key holding an optional access token.
const CONFIG_TOKEN: &str = "token";

const DEFAULT_LABEL: &str = "echo";

/// What the echoed body carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoMode {
    /// Only the incoming body.
    Body,
    /// The incoming body and the component configuration (default).
    Mirror,
}

impl EchoMode {
    fn from_configuration(configuration: &Document) -> Self {
        match configuration.get(CONFIG_MODE).and_then(Value::as_str) {
            Some("echo") => EchoMode::Body,
            _ => EchoMode::Mirror,
        }
    }
}

/// The echo component.
#[derive(Debug, Default)]
pub struct EchoComponent {
    mode: Option<EchoMode>,
}

impl EchoComponent {
    pub fn new() -> Self {
        Self::default()
    }

    fn echo_message(&self, parameters: &ExecutionParameters) -> Result<Message, ApiError> {
        let incoming = parameters.message();
        let mode = self
            .mode
            .unwrap_or_else(|| EchoMode::from_configuration(parameters.configuration()));

        let mut body = Document::new();
        body.insert("echo".into(), Value::Object(incoming.body().clone()));
        if mode == EchoMode::Mirror {
            body.insert(
                "config".into(),
                Value::Object(parameters.configuration().clone()),
            );
        }

        Message::builder()
            .body(body)
            .attachments(incoming.attachments().clone())
            .build()
    }
}

fn label(document: &Document) -> &str {
    document
        .get(CONFIG_LABEL)
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_LABEL)
}

impl Component for EchoComponent {
    fn execute(&mut self, parameters: &ExecutionParameters) {
        let emitter = parameters.event_emitter();

        let mut snapshot = Document::new();
        snapshot.insert("echo".into(), Value::Object(parameters.snapshot().clone()));
        emitter.emit_snapshot(snapshot);

        match self.echo_message(parameters) {
            Ok(message) => {
                tracing::debug!(
                    incoming = %parameters.message().id(),
                    outgoing = %message.id(),
                    "echoing message"
                );
                emitter.emit_data(message);
            }
            Err(err) => emitter.emit_error(err.into()),
        }
    }

    fn startup(&mut self, configuration: &Document) -> Document {
        let mut state = Document::new();
        state.insert("subscribed".into(), Value::Bool(true));
        state.insert("label".into(), json!(label(configuration)));
        state
    }

    fn shutdown(&mut self, configuration: &Document) -> Document {
        let mut result = Document::new();
        result.insert("unsubscribed".into(), json!(label(configuration)));
        result
    }

    fn init(&mut self, configuration: &Document) {
        let mode = EchoMode::from_configuration(configuration);
        tracing::debug!(?mode, "echo component initialized");
        self.mode = Some(mode);
    }
}

impl SelectModelProvider for EchoComponent {
    fn select_model(&self, _configuration: &Document) -> Document {
        let mut model = Document::new();
        model.insert("echo".into(), json!("Echo body"));
        model.insert("mirror".into(), json!("Echo body and configuration"));
        model
    }
}

impl DynamicMetadataProvider for EchoComponent {
    fn meta_model(&self, configuration: &Document) -> Document {
        let mut properties = Document::new();
        properties.insert(
            "echo".into(),
            json!({"type": "object", "title": "Echoed body"}),
        );
        if EchoMode::from_configuration(configuration) == EchoMode::Mirror {
            properties.insert(
                "config".into(),
                json!({"type": "object", "title": "Component configuration"}),
            );
        }

        let mut model = Document::new();
        model.insert(
            "in".into(),
            json!({
                "type": "object",
                "properties": {
                    "label": {"type": "string", "title": "Label", "required": false}
                }
            }),
        );
        model.insert(
            "out".into(),
            json!({"type": "object", "properties": properties}),
        );
        model
    }
}

impl CredentialsVerifier for EchoComponent {
    fn verify(&self, configuration: &Document) -> Result<(), InvalidCredentials> {
        match configuration.get(CONFIG_TOKEN) {
            None => Ok(()),
            Some(Value::String(token)) if !token.trim().is_empty() => Ok(()),
            Some(Value::String(_)) => Err(InvalidCredentials::with_message(
                "token must not be empty",
            )),
            Some(other) => Err(InvalidCredentials::with_cause(
                "token must be a string",
                format!("found {other}"),
            )),
        }
    }
}
