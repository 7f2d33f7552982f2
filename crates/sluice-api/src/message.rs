//! Messages processed by components.
//!
//! A message carries a body (the payload a component consumes), headers,
//! attachments and a passthrough document that intermediate steps forward
//! untouched. All four are [`Document`]s.
//!
//! ```
//! use serde_json::json;
//! use sluice_api::Message;
//!
//! let message = Message::builder()
//!     .body(json!({"orders": [1, 2, 3]}))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(message.body()["orders"], json!([1, 2, 3]));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::document::{empty_document, into_document, Document, NotADocument};
use crate::error::ApiError;

pub const PROPERTY_ID: &str = "id";
pub const PROPERTY_HEADERS: &str = "headers";
pub const PROPERTY_BODY: &str = "body";
pub const PROPERTY_ATTACHMENTS: &str = "attachments";
pub const PROPERTY_PASSTHROUGH: &str = "passthrough";

/// An immutable message exchanged between the runtime and a component.
///
/// Serializes to `{id, headers, body, attachments, passthrough}` with the
/// id in its hyphenated string form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct Message {
    id: Uuid,
    headers: Document,
    body: Document,
    attachments: Document,
    passthrough: Document,
}

impl Message {
    /// Starts building a message with a fresh id and empty documents.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::new()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn headers(&self) -> &Document {
        &self.headers
    }

    pub fn body(&self) -> &Document {
        &self.body
    }

    pub fn attachments(&self) -> &Document {
        &self.attachments
    }

    pub fn passthrough(&self) -> &Document {
        &self.passthrough
    }

    /// Returns this message in its serialized document form.
    pub fn to_document(&self) -> Document {
        let mut doc = empty_document();
        doc.insert(PROPERTY_ID.into(), Value::String(self.id.to_string()));
        doc.insert(PROPERTY_HEADERS.into(), Value::Object(self.headers.clone()));
        doc.insert(PROPERTY_BODY.into(), Value::Object(self.body.clone()));
        doc.insert(
            PROPERTY_ATTACHMENTS.into(),
            Value::Object(self.attachments.clone()),
        );
        doc.insert(
            PROPERTY_PASSTHROUGH.into(),
            Value::Object(self.passthrough.clone()),
        );
        doc
    }

    /// Reads a message back from its serialized document form.
    ///
    /// The id is mandatory. Missing documents default to empty ones;
    /// explicit nulls are rejected the same way [`MessageBuilder::build`]
    /// rejects them.
    pub fn from_document(value: Value) -> Result<Self, ApiError> {
        let mut doc = into_document(value)
            .map_err(|_| ApiError::invalid_argument("Message must be a JSON object"))?;

        let id = match doc.remove(PROPERTY_ID) {
            None | Some(Value::Null) => {
                return Err(ApiError::invalid_argument("Message id must not be null"))
            }
            Some(Value::String(raw)) => Uuid::parse_str(&raw).map_err(|e| {
                ApiError::invalid_argument(format!("Message id must be a UUID: {e}"))
            })?,
            Some(_) => {
                return Err(ApiError::invalid_argument(
                    "Message id must be a UUID string",
                ))
            }
        };

        let mut builder = MessageBuilder::new().id(id);
        if let Some(headers) = doc.remove(PROPERTY_HEADERS) {
            builder = builder.headers(headers);
        }
        if let Some(body) = doc.remove(PROPERTY_BODY) {
            builder = builder.body(body);
        }
        if let Some(attachments) = doc.remove(PROPERTY_ATTACHMENTS) {
            builder = builder.attachments(attachments);
        }
        if let Some(passthrough) = doc.remove(PROPERTY_PASSTHROUGH) {
            builder = builder.passthrough(passthrough);
        }
        builder.build()
    }
}

impl TryFrom<Value> for Message {
    type Error = ApiError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Message::from_document(value)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Value::Object(self.to_document()))
    }
}

/// Builds [`Message`] instances.
///
/// Document setters accept any JSON value so that raw host input can be
/// handed over as-is; [`build`](MessageBuilder::build) rejects anything
/// that is not an object.
#[derive(Debug, Clone)]
pub struct MessageBuilder {
    id: Uuid,
    headers: Value,
    body: Value,
    attachments: Value,
    passthrough: Value,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            headers: Value::Object(empty_document()),
            body: Value::Object(empty_document()),
            attachments: Value::Object(empty_document()),
            passthrough: Value::Object(empty_document()),
        }
    }
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn headers(mut self, headers: impl Into<Value>) -> Self {
        self.headers = headers.into();
        self
    }

    pub fn body(mut self, body: impl Into<Value>) -> Self {
        self.body = body.into();
        self
    }

    pub fn attachments(mut self, attachments: impl Into<Value>) -> Self {
        self.attachments = attachments.into();
        self
    }

    pub fn passthrough(mut self, passthrough: impl Into<Value>) -> Self {
        self.passthrough = passthrough.into();
        self
    }

    /// Builds the message, failing on the first field that is null or
    /// not an object (checked in the order headers, body, attachments,
    /// passthrough).
    pub fn build(self) -> Result<Message, ApiError> {
        Ok(Message {
            id: self.id,
            headers: message_field(PROPERTY_HEADERS, self.headers)?,
            body: message_field(PROPERTY_BODY, self.body)?,
            attachments: message_field(PROPERTY_ATTACHMENTS, self.attachments)?,
            passthrough: message_field(PROPERTY_PASSTHROUGH, self.passthrough)?,
        })
    }
}

fn message_field(name: &str, value: Value) -> Result<Document, ApiError> {
    into_document(value).map_err(|reason| match reason {
        NotADocument::Null => ApiError::invalid_argument(format!("Message {name} must not be null")),
        NotADocument::WrongType(found) => ApiError::invalid_argument(format!(
            "Message {name} must be a JSON object, got {found}"
        )),
    })
}
