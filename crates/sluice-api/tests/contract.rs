//! Boundary contract tests: the properties a runtime relies on when it
//! builds values for a component and reads back what the component emits.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use sluice_api::prelude::*;
use sluice_api::ExecutionParametersBuilder;

#[derive(Debug, Default)]
struct CollectingEmitter {
    data: Mutex<Vec<Message>>,
    snapshots: Mutex<Vec<Document>>,
    errors: Mutex<Vec<String>>,
}

impl EventEmitter for CollectingEmitter {
    fn emit_data(&self, message: Message) {
        self.data.lock().unwrap().push(message);
    }

    fn emit_snapshot(&self, snapshot: Document) {
        self.snapshots.lock().unwrap().push(snapshot);
    }

    fn emit_error(&self, error: anyhow::Error) {
        self.errors.lock().unwrap().push(error.to_string());
    }
}

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn execution_parameters_return_their_inputs() {
    let emitter: Arc<dyn EventEmitter> = Arc::new(CollectingEmitter::default());
    let cases = vec![
        (json!({}), None, None),
        (json!({"a": 1}), Some(json!({"key": "v"})), None),
        (json!({"a": [1, 2]}), None, Some(json!({"cursor": 9}))),
        (
            json!({"nested": {"x": null}}),
            Some(json!({"k": true})),
            Some(json!({"s": "t"})),
        ),
    ];

    for (body, configuration, snapshot) in cases {
        let message = Message::builder().body(body).build().unwrap();
        let mut builder = ExecutionParameters::builder(message.clone(), Arc::clone(&emitter));
        if let Some(c) = configuration.clone() {
            builder = builder.configuration(c);
        }
        if let Some(s) = snapshot.clone() {
            builder = builder.snapshot(s);
        }
        let params = builder.build().unwrap();

        assert_eq!(params.message(), &message);
        assert_eq!(
            params.configuration(),
            &configuration.map(doc).unwrap_or_default()
        );
        assert_eq!(params.snapshot(), &snapshot.map(doc).unwrap_or_default());
        assert!(Arc::ptr_eq(params.event_emitter(), &emitter));
    }
}

#[test]
fn missing_parts_fail_before_a_builder_exists() {
    let emitter: Arc<dyn EventEmitter> = Arc::new(CollectingEmitter::default());

    let no_message = ExecutionParametersBuilder::from_parts(None, Some(emitter));
    assert!(matches!(no_message, Err(ApiError::InvalidArgument(_))));

    let no_emitter =
        ExecutionParametersBuilder::from_parts(Some(Message::builder().build().unwrap()), None);
    assert!(matches!(no_emitter, Err(ApiError::InvalidArgument(_))));
}

#[test]
fn default_messages_are_empty_with_unique_ids() {
    let ids: std::collections::HashSet<_> = (0..100)
        .map(|_| {
            let message = Message::builder().build().unwrap();
            assert!(message.headers().is_empty());
            assert!(message.body().is_empty());
            assert!(message.attachments().is_empty());
            assert!(message.passthrough().is_empty());
            message.id()
        })
        .collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn http_reply_groups_headers_in_call_order() {
    let reply = HttpReply::builder()
        .content("{}")
        .header("x-accept", "foo")
        .header("x-other", "1")
        .header("x-accept", "bar")
        .header("x-other", "2")
        .header("x-accept", "baz")
        .build()
        .unwrap();

    assert_eq!(reply.headers()["x-accept"], vec!["foo", "bar", "baz"]);
    assert_eq!(reply.headers()["x-other"], vec!["1", "2"]);
}

#[test]
fn http_reply_without_content_is_rejected() {
    let err = HttpReply::builder()
        .header("x-accept", "foo")
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid argument: HttpReply content must not be null"
    );
}

#[test]
fn message_document_round_trip() {
    let original = Message::builder()
        .headers(json!({"content-type": "application/json"}))
        .body(json!({"orders": [{"id": 1}, {"id": 2}]}))
        .attachments(json!({"a.txt": {"size": 3}}))
        .passthrough(json!({"trigger": {"body": {"x": 1}}}))
        .build()
        .unwrap();

    let document = original.to_document();
    assert_eq!(document["id"], json!(original.id().to_string()));
    assert_eq!(&doc(document["headers"].clone()), original.headers());
    assert_eq!(&doc(document["body"].clone()), original.body());
    assert_eq!(&doc(document["attachments"].clone()), original.attachments());
    assert_eq!(&doc(document["passthrough"].clone()), original.passthrough());

    let text = serde_json::to_string(&original).unwrap();
    let parsed: Message = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn component_output_flows_through_the_emitter() {
    struct Forward;

    impl Component for Forward {
        fn execute(&mut self, parameters: &ExecutionParameters) {
            let emitter = parameters.event_emitter();
            emitter.emit_snapshot(parameters.snapshot().clone());
            match Message::builder()
                .body(Value::Object(parameters.message().body().clone()))
                .build()
            {
                Ok(message) => emitter.emit_data(message),
                Err(err) => emitter.emit_error(err.into()),
            }
            emitter.emit_error(anyhow::anyhow!("partial failure"));
        }
    }

    let emitter = Arc::new(CollectingEmitter::default());
    let params = ExecutionParameters::builder(
        Message::builder().body(json!({"x": 1})).build().unwrap(),
        emitter.clone(),
    )
    .snapshot(json!({"last": 3}))
    .build()
    .unwrap();

    Forward.execute(&params);

    let data = emitter.data.lock().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0].body()["x"], 1);
    assert_eq!(emitter.snapshots.lock().unwrap()[0]["last"], 3);
    assert_eq!(*emitter.errors.lock().unwrap(), vec!["partial failure"]);
}
