//! Drives a component through its lifecycle the way a runtime would.
//!
//! ```ignore
//! let mut harness = ComponentHarness::new(MyComponent::default())
//!     .with_configuration(json!({"apiKey": "k"}))?;
//!
//! let state = harness.startup();
//! harness.init();
//! let events = harness.execute(Message::builder().build()?)?;
//! harness.shutdown(&state);
//! ```

use serde_json::Value;
use sluice_api::{
    ApiError, Component, CredentialsVerifier, Document, DynamicMetadataProvider,
    ExecutionParameters, InvalidCredentials, Message, SelectModelProvider,
};
use sluice_telemetry::{
    log_component_execute, log_component_init, log_component_shutdown, log_component_startup,
    log_credentials_rejected,
};

use crate::emitter::{EmittedEvent, RecordingEmitter};

/// Holds a component, its configuration, and the snapshot carried between
/// executions.
pub struct ComponentHarness<C> {
    component: C,
    configuration: Document,
    snapshot: Document,
    emitter: RecordingEmitter,
}

impl<C: Component> ComponentHarness<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            configuration: Document::new(),
            snapshot: Document::new(),
            emitter: RecordingEmitter::new(),
        }
    }

    /// Replaces the configuration passed to every hook.
    pub fn with_configuration(mut self, configuration: Value) -> Result<Self, ApiError> {
        self.configuration = match configuration {
            Value::Object(map) => map,
            _ => {
                return Err(ApiError::InvalidArgument(
                    "configuration must be a JSON object".into(),
                ))
            }
        };
        Ok(self)
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn configuration(&self) -> &Document {
        &self.configuration
    }

    /// The snapshot the next execution will receive.
    pub fn snapshot(&self) -> &Document {
        &self.snapshot
    }

    /// Runs the `startup` hook and returns the state to persist.
    pub fn startup(&mut self) -> Document {
        let state = self.component.startup(&self.configuration);
        log_component_startup!(state_keys = state.len(), "component started");
        state
    }

    pub fn init(&mut self) {
        self.component.init(&self.configuration);
        log_component_init!("component initialized");
    }

    /// Runs the `shutdown` hook with the state `startup` returned.
    pub fn shutdown(&mut self, state: &Document) -> Document {
        let result = self.component.shutdown(state);
        log_component_shutdown!(result_keys = result.len(), "component stopped");
        result
    }

    /// Executes the component with the carried snapshot.
    ///
    /// Returns the events emitted during this execution. The last emitted
    /// snapshot, if any, becomes the snapshot for the next execution.
    pub fn execute(&mut self, message: Message) -> Result<Vec<EmittedEvent>, ApiError> {
        let snapshot = self.snapshot.clone();
        self.execute_with_snapshot(message, snapshot)
    }

    /// Executes the component with an explicit snapshot.
    pub fn execute_with_snapshot(
        &mut self,
        message: Message,
        snapshot: Document,
    ) -> Result<Vec<EmittedEvent>, ApiError> {
        let message_id = message.id();
        let parameters = ExecutionParameters::builder(message, self.emitter.handle())
            .configuration(self.configuration.clone())
            .snapshot(snapshot)
            .build()?;

        self.emitter.clear();
        self.component.execute(&parameters);
        let events = self.emitter.take();

        if let Some(next) = events.iter().rev().find_map(|e| match e {
            EmittedEvent::Snapshot(s) => Some(s.clone()),
            _ => None,
        }) {
            self.snapshot = next;
        }

        log_component_execute!(
            message_id = %message_id,
            events = events.len(),
            "component executed"
        );
        Ok(events)
    }
}

impl<C: SelectModelProvider> ComponentHarness<C> {
    pub fn select_model(&self) -> Document {
        self.component.select_model(&self.configuration)
    }
}

impl<C: DynamicMetadataProvider> ComponentHarness<C> {
    pub fn meta_model(&self) -> Document {
        self.component.meta_model(&self.configuration)
    }
}

impl<C: CredentialsVerifier> ComponentHarness<C> {
    /// Verifies the harness configuration, logging rejections.
    pub fn verify_credentials(&self) -> Result<(), InvalidCredentials> {
        self.component
            .verify(&self.configuration)
            .inspect_err(|err| log_credentials_rejected!(error = %err, "credentials rejected"))
    }
}
