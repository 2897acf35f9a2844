//! Classification of client errors.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of a [`ClientError`](super::ClientError).
///
/// Each kind renders as the type name used in display strings, so
/// `ErrorKind::Timeout.to_string()` is `"TimeoutError"`.
///
/// ## Examples
///
/// ```rust
/// use webstack_client::ErrorKind;
///
/// assert_eq!(ErrorKind::Uri.to_string(), "URIError");
///
/// let parsed: ErrorKind = "GraphClientError".parse().unwrap();
/// assert_eq!(parsed, ErrorKind::Graph);
/// assert!(parsed.carries_response());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum ErrorKind {
    /// Unclassified client failure.
    #[strum(serialize = "ClientError")]
    Generic,
    /// Structured error returned by the server for a command.
    #[strum(serialize = "ServerError")]
    Server,
    /// The request did not complete in time.
    #[strum(serialize = "TimeoutError")]
    Timeout,
    /// The server rejected the credentials.
    #[strum(serialize = "AuthenticationError")]
    Authentication,
    /// A URI could not be built or parsed.
    #[strum(serialize = "URIError")]
    Uri,
    /// The user cancelled the operation.
    #[strum(serialize = "UserInterrupt")]
    UserInterrupt,
    /// The HTTP call itself failed.
    #[strum(serialize = "TransportError")]
    Transport,
    /// The graph query transport failed.
    #[strum(serialize = "GraphClientError")]
    Graph,
}

impl ErrorKind {
    /// Returns the type name shown in display strings.
    pub fn type_name(self) -> &'static str {
        self.into()
    }

    /// Returns `true` if errors of this kind may hold a transport response handle.
    pub fn carries_response(self) -> bool {
        matches!(self, Self::Transport | Self::Graph)
    }

    /// Returns `true` if errors of this kind carry fields beyond the message.
    pub fn is_structured(self) -> bool {
        matches!(self, Self::Server | Self::Transport | Self::Graph)
    }
}
