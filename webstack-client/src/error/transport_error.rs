//! Failures of the HTTP transport itself.

use std::fmt;

use thiserror::Error;

use super::{ErrorKind, Message};
use crate::response::ResponseHandle;

/// An error raised by the HTTP layer rather than reported by the server.
///
/// When the failure came with a response (for example a non-success status
/// without a structured server payload), the response handle is kept so the
/// caller can inspect it.
///
/// ## Examples
///
/// ```rust
/// use webstack_client::{ResponseHandle, TransportError};
///
/// let response = ResponseHandle::new(502_u16);
/// let err = TransportError::new("bad gateway").with_response(response.clone());
///
/// assert_eq!(err.to_string(), "TransportError: bad gateway");
/// assert!(err.response().is_some_and(|r| r.ptr_eq(&response)));
/// ```
#[derive(Clone, Default, PartialEq, Error)]
#[error("{kind}: {message}", kind = ErrorKind::Transport)]
pub struct TransportError {
    message: Message,
    response: Option<ResponseHandle>,
}

impl TransportError {
    /// Creates a transport error without a response.
    pub fn new(message: impl Into<Message>) -> Self {
        Self {
            message: message.into(),
            response: None,
        }
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

    /// The response that resulted in the error.
    pub fn response(&self) -> Option<&ResponseHandle> {
        self.response.as_ref()
    }
}

impl fmt::Debug for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}(message={:?})>", ErrorKind::Transport, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, PartialEq)]
    struct FakeResponse {
        status: u16,
    }

    #[test]
    fn test_default_has_empty_message() {
        let err = TransportError::default();
        assert_eq!(err.message(), Some(""));
        assert!(err.response().is_none());
        assert_eq!(err.to_string(), "TransportError: ");
    }

    #[test]
    fn test_response_identity_is_preserved() {
        let response = Arc::new(FakeResponse { status: 503 });
        let err = TransportError::new("x").with_response(ResponseHandle::from_arc(Arc::clone(&response)));

        let handle = err.response().unwrap();
        assert!(handle.is_same(&response));
        assert_eq!(handle.downcast_ref::<FakeResponse>(), Some(&FakeResponse { status: 503 }));
    }

    #[test]
    fn test_clone_shares_response() {
        let err = TransportError::new("x").with_response(ResponseHandle::new(FakeResponse { status: 500 }));
        let copy = err.clone();
        assert!(copy.response().unwrap().ptr_eq(err.response().unwrap()));
        assert_eq!(copy, err);
    }

    #[test]
    fn test_debug() {
        let err = TransportError::new("reset by peer");
        assert_eq!(format!("{err:?}"), r#"<TransportError(message="reset by peer")>"#);
    }
}
