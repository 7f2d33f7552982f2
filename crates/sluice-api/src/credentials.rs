//! Credentials verification capability.

use crate::document::Document;
use crate::error::InvalidCredentials;

/// Implemented by components that can check the authentication data in
/// their configuration before a flow is started.
pub trait CredentialsVerifier {
    /// Verifies the credentials in `configuration`.
    ///
    /// Returns [`InvalidCredentials`] if they are rejected.
    fn verify(&self, configuration: &Document) -> Result<(), InvalidCredentials>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::error::Error;

    struct ApiKeyVerifier;

    impl CredentialsVerifier for ApiKeyVerifier {
        fn verify(&self, configuration: &Document) -> Result<(), InvalidCredentials> {
            match configuration.get("apiKey").and_then(|v| v.as_str()) {
                Some(key) if key.starts_with("sk-") => Ok(()),
                Some(key) => Err(InvalidCredentials::with_cause(
                    "api key rejected",
                    format!("unexpected key prefix in '{key}'"),
                )),
                None => Err(InvalidCredentials::new()),
            }
        }
    }

    #[test]
    fn test_valid_credentials() {
        let config = json!({"apiKey": "sk-123"}).as_object().cloned().unwrap();
        assert!(ApiKeyVerifier.verify(&config).is_ok());
    }

    #[test]
    fn test_rejected_credentials_carry_cause() {
        let config = json!({"apiKey": "pk-123"}).as_object().cloned().unwrap();
        let err = ApiKeyVerifier.verify(&config).unwrap_err();
        assert_eq!(err.message(), Some("api key rejected"));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("unexpected key prefix in 'pk-123'".to_string())
        );
    }

    #[test]
    fn test_missing_credentials() {
        let err = ApiKeyVerifier.verify(&Document::new()).unwrap_err();
        assert!(err.message().is_none());
    }
}
