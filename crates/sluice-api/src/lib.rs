//! Component contract for the Sluice integration runtime.
//!
//! Provides the value objects exchanged between the runtime and a
//! component (`Message`, `ExecutionParameters`, `HttpReply`) and the
//! capability traits a component implements (`Component`, the metadata
//! providers, `CredentialsVerifier`) or receives (`EventEmitter`).
//!
//! # Example
//!
//! ```ignore
//! use sluice_api::prelude::*;
//!
//! struct Echo;
//!
//! impl Component for Echo {
//!     fn execute(&mut self, parameters: &ExecutionParameters) {
//!         let message = parameters.message().clone();
//!         parameters.event_emitter().emit_data(message);
//!     }
//! }
//! ```

pub mod component;
pub mod credentials;
pub mod document;
pub mod emitter;
pub mod error;
pub mod http_reply;
pub mod message;
pub mod metadata;
pub mod parameters;

pub use component::Component;
pub use credentials::CredentialsVerifier;
pub use document::{empty_document, Document};
pub use emitter::EventEmitter;
pub use error::{ApiError, InvalidCredentials};
pub use http_reply::{HttpReply, HttpReplyBuilder};
pub use message::{Message, MessageBuilder};
pub use metadata::{DynamicMetadataProvider, SelectModelProvider};
pub use parameters::{ExecutionParameters, ExecutionParametersBuilder};

/// Re-exported so components do not need their own `http` dependency for
/// reply status codes.
pub use http::StatusCode;

pub mod prelude {
    pub use crate::{
        empty_document, ApiError, Component, CredentialsVerifier, Document,
        DynamicMetadataProvider, EventEmitter, ExecutionParameters, HttpReply, InvalidCredentials,
        Message, SelectModelProvider, StatusCode,
    };
}
