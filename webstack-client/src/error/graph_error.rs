//! Failures of the graph query transport.

use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use thiserror::Error;

use super::{ErrorKind, Message};
use crate::response::ResponseHandle;

/// An error raised while talking to the graph query API.
///
/// Carries the HTTP status code and raw body of the failed response when
/// they are known.
///
/// ## Examples
///
/// ```rust
/// use webstack_client::GraphClientError;
///
/// let err = GraphClientError::new("query failed")
///     .with_status_code(500)
///     .with_content(&b"body"[..]);
///
/// assert_eq!(err.status_code(), Some(500));
/// assert_eq!(err.content(), Some(&b"body"[..]));
/// ```
#[derive(Clone, Default, PartialEq, Error)]
#[error("{kind}: {message}", kind = ErrorKind::Graph)]
pub struct GraphClientError {
    message: Message,
    status_code: Option<u16>,
    content: Option<Bytes>,
    response: Option<ResponseHandle>,
}

impl GraphClientError {
    /// Creates a graph client error with only a message.
    pub fn new(message: impl Into<Message>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the HTTP status code of the failed response.
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Sets the raw body of the failed response.
    pub fn with_content(mut self, content: impl Into<Bytes>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Attaches the response that resulted in the error.
    pub fn with_response(mut self, response: ResponseHandle) -> Self {
        self.response = Some(response);
        self
    }

    /// The error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_str()
    }

    /// The HTTP status code.
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// The raw response body, exactly as received.
    pub fn content(&self) -> Option<&[u8]> {
        self.content.as_deref()
    }

    /// The response body as text, replacing invalid UTF-8.
    pub fn content_text(&self) -> Option<Cow<'_, str>> {
        self.content.as_deref().map(String::from_utf8_lossy)
    }

    /// The response that resulted in the error.
    pub fn response(&self) -> Option<&ResponseHandle> {
        self.response.as_ref()
    }
}

impl fmt::Debug for GraphClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}(message={:?})>", ErrorKind::Graph, self.message)
    }
}
