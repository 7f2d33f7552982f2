//! HTTP replies produced by components.
//!
//! A component answering a webhook or a request/reply flow builds an
//! [`HttpReply`] and hands it to the runtime, which renders it as the
//! actual HTTP response.

use std::collections::BTreeMap;

use bytes::Bytes;
use http::header::{HeaderName, HeaderValue};
use http::StatusCode;

use crate::error::ApiError;

/// An immutable HTTP reply: body, status and multi-valued headers.
///
/// Header names are kept exactly as supplied. Values for the same name
/// keep the order in which they were added.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    content: Bytes,
    status: StatusCode,
    headers: BTreeMap<String, Vec<String>>,
}

impl HttpReply {
    pub fn builder() -> HttpReplyBuilder {
        HttpReplyBuilder::new()
    }

    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// Numeric status code.
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &BTreeMap<String, Vec<String>> {
        &self.headers
    }

    /// Converts this reply into an [`http::Response`].
    ///
    /// Every value of a multi-valued header is appended in order. Fails
    /// if a header name or value is not valid HTTP.
    pub fn into_response(self) -> Result<http::Response<Bytes>, ApiError> {
        let mut response = http::Response::new(self.content);
        *response.status_mut() = self.status;

        let headers = response.headers_mut();
        for (name, values) in self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ApiError::invalid_argument(format!("invalid header name '{name}': {e}"))
            })?;
            for value in values {
                let header_value = HeaderValue::from_str(&value).map_err(|e| {
                    ApiError::invalid_argument(format!("invalid value for header '{name}': {e}"))
                })?;
                headers.append(header_name.clone(), header_value);
            }
        }

        Ok(response)
    }
}

/// Builds [`HttpReply`] instances. Status defaults to `200 OK`.
#[derive(Debug, Clone)]
pub struct HttpReplyBuilder {
    content: Option<Bytes>,
    status: StatusCode,
    headers: BTreeMap<String, Vec<String>>,
}

impl Default for HttpReplyBuilder {
    fn default() -> Self {
        Self {
            content: None,
            status: StatusCode::OK,
            headers: BTreeMap::new(),
        }
    }
}

impl HttpReplyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reply body.
    pub fn content(mut self, content: impl Into<Bytes>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Appends a value to the header `name`. Repeated calls with the same
    /// name accumulate values instead of replacing them.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    pub fn build(self) -> Result<HttpReply, ApiError> {
        let content = self
            .content
            .ok_or_else(|| ApiError::invalid_argument("HttpReply content must not be null"))?;

        Ok(HttpReply {
            content,
            status: self.status,
            headers: self.headers,
        })
    }
}
