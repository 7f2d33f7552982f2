//! Structured documents exchanged at every component boundary.
//!
//! A document is a JSON object whose keys keep insertion order
//! (serde_json is built with `preserve_order`).

use serde_json::{Map, Value};

/// An ordered-key JSON object.
pub type Document = Map<String, Value>;

/// Returns a new, empty document.
pub fn empty_document() -> Document {
    Map::new()
}

/// Why a value could not be taken as a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NotADocument {
    Null,
    WrongType(&'static str),
}

/// Takes ownership of `value` as a document if it is a JSON object.
pub(crate) fn into_document(value: Value) -> Result<Document, NotADocument> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Err(NotADocument::Null),
        other => Err(NotADocument::WrongType(type_name(&other))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_is_accepted() {
        let doc = into_document(json!({"b": 1, "a": 2})).unwrap();
        let keys: Vec<&str> = doc.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_null_and_scalars_are_rejected() {
        assert_eq!(into_document(Value::Null), Err(NotADocument::Null));
        assert_eq!(
            into_document(json!([1, 2])),
            Err(NotADocument::WrongType("array"))
        );
        assert_eq!(
            into_document(json!("text")),
            Err(NotADocument::WrongType("string"))
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(empty_document().is_empty());
    }
}
