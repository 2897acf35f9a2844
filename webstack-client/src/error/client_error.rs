//! Top-level client error type.

use std::fmt;

use thiserror::Error;

use super::{ErrorKind, GraphClientError, Message, ServerError, TransportError};
use crate::response::ResponseHandle;

/// Top-level error type for all web stack client operations.
///
/// Each variant corresponds to one [`ErrorKind`]. The tag kinds carry only a
/// message; the structured kinds wrap their own error types, which can also
/// be raised and matched on their own.
///
/// ## Examples
///
/// ```rust
/// use webstack_client::{ClientError, ErrorKind, ServerError};
///
/// fn report(err: &ClientError) -> String {
///     match err {
///         ClientError::Server(e) => format!("server rejected command: {:?}", e.input_command()),
///         ClientError::Timeout { .. } => "timed out".to_string(),
///         other => other.to_string(),
///     }
/// }
///
/// let err = ClientError::uri("missing scheme");
/// assert_eq!(err.kind(), ErrorKind::Uri);
/// assert_eq!(report(&err), "URIError: missing scheme");
///
/// let err: ClientError = ServerError::new("busy").into();
/// assert_eq!(err.to_string(), "API Server Error: busy");
/// ```
#[derive(Clone, PartialEq, Error)]
pub enum ClientError {
    /// Unclassified client failure.
    #[error("{kind}: {message}", kind = ErrorKind::Generic)]
    Generic {
        /// The error message.
        message: Message,
    },

    /// Structured error returned by the server.
    #[error(transparent)]
    Server(#[from] ServerError),

    /// The request did not complete in time.
    #[error("{kind}: {message}", kind = ErrorKind::Timeout)]
    Timeout {
        /// The error message.
        message: Message,
    },

    /// The server rejected the credentials.
    #[error("{kind}: {message}", kind = ErrorKind::Authentication)]
    Authentication {
        /// The error message.
        message: Message,
    },

    /// A URI could not be built or parsed.
    #[error("{kind}: {message}", kind = ErrorKind::Uri)]
    Uri {
        /// The error message.
        message: Message,
    },

    /// The user cancelled the operation.
    #[error("{kind}: {message}", kind = ErrorKind::UserInterrupt)]
    UserInterrupt {
        /// The error message.
        message: Message,
    },

    /// The HTTP call itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The graph query transport failed.
    #[error(transparent)]
    Graph(#[from] GraphClientError),
}

impl ClientError {
    /// Creates an unclassified client error.
    pub fn generic(message: impl Into<Message>) -> Self {
        Self::Generic {
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    pub fn timeout(message: impl Into<Message>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    pub fn authentication(message: impl Into<Message>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a URI error.
    pub fn uri(message: impl Into<Message>) -> Self {
        Self::Uri {
            message: message.into(),
        }
    }

    /// Creates a user interrupt error.
    pub fn user_interrupt(message: impl Into<Message>) -> Self {
        Self::UserInterrupt {
            message: message.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Generic { .. } => ErrorKind::Generic,
            Self::Server(_) => ErrorKind::Server,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Uri { .. } => ErrorKind::Uri,
            Self::UserInterrupt { .. } => ErrorKind::UserInterrupt,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Graph(_) => ErrorKind::Graph,
        }
    }

    /// Returns the error message, or `None` if it is absent.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Generic { message }
            | Self::Timeout { message }
            | Self::Authentication { message }
            | Self::Uri { message }
            | Self::UserInterrupt { message } => message.as_str(),
            Self::Server(e) => e.message(),
            Self::Transport(e) => e.message(),
            Self::Graph(e) => e.message(),
        }
    }

    /// Returns the HTTP status code if this is a graph error that recorded one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Graph(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns the transport response attached to this error, if any.
    pub fn response(&self) -> Option<&ResponseHandle> {
        match self {
            Self::Transport(e) => e.response(),
            Self::Graph(e) => e.response(),
            _ => None,
        }
    }

    /// Returns the server error if this is one.
    pub fn as_server(&self) -> Option<&ServerError> {
        match self {
            Self::Server(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Debug for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { message }
            | Self::Timeout { message }
            | Self::Authentication { message }
            | Self::Uri { message }
            | Self::UserInterrupt { message } => {
                write!(f, "<{}(message={message:?})>", self.kind())
            }
            Self::Server(e) => fmt::Debug::fmt(e, f),
            Self::Transport(e) => fmt::Debug::fmt(e, f),
            Self::Graph(e) => fmt::Debug::fmt(e, f),
        }
    }
}
