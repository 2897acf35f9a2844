//! Structured errors returned by the web stack server.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{ErrorKind, Message};
use crate::i18n;

/// An error the server returned in response to a specific command.
///
/// Besides the message, the server may report a numeric error code, a
/// detail type naming the error family, and a detail mapping with
/// family-specific fields. The command that triggered the error is kept
/// for diagnostics.
///
/// ## Examples
///
/// ```rust
/// use webstack_client::ServerError;
///
/// let err = ServerError::new("bad request")
///     .with_error_code(400)
///     .with_input_command("GetJobs");
///
/// assert_eq!(err.to_string(), "API Server Error: bad request");
/// assert_eq!(err.error_code(), Some(400));
/// assert_eq!(err.input_command(), Some("GetJobs"));
/// assert_eq!(err.stacktrace(), "");
/// ```
#[derive(Clone, PartialEq, Error)]
#[error("{}", render(.message))]
pub struct ServerError {
    message: Message,
    error_code: Option<i64>,
    input_command: Option<String>,
    detail_info_type: Option<String>,
    detail_info: Option<Map<String, Value>>,
}

/// Renders the user-visible text through the installed translator.
fn render(message: &Message) -> String {
    match message.as_str() {
        Some(text) => substitute(&i18n::gettext("API Server Error: %s"), text),
        None => i18n::gettext("API Server Error: Unknown"),
    }
}

/// Fills the first `%s` of a gettext template with `value` and unescapes `%%`.
///
/// `value` is inserted verbatim, so `%` sequences inside it are left alone.
fn substitute(template: &str, value: &str) -> String {
    let mut out = String::with_capacity(template.len() + value.len());
    let mut chars = template.chars();
    let mut filled = false;
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.clone().next() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some('s') if !filled => {
                chars.next();
                out.push_str(value);
                filled = true;
            }
            _ => out.push('%'),
        }
    }
    out
}

impl ServerError {
    /// Creates a server error with only a message.
    pub fn new(message: impl Into<Message>) -> Self {
        Self {
            message: message.into(),
            error_code: None,
            input_command: None,
            detail_info_type: None,
            detail_info: None,
        }
    }

    /// Sets the error code reported by the server.
    pub fn with_error_code(mut self, error_code: i64) -> Self {
        self.error_code = Some(error_code);
        self
    }

    /// Sets the command that was sent to the server.
    pub fn with_input_command(mut self, input_command: impl Into<String>) -> Self {
        self.input_command = Some(input_command.into());
        self
    }

    /// Sets the detail type naming the error family.
    pub fn with_detail_info_type(mut self, detail_info_type: impl Into<String>) -> Self {
        self.detail_info_type = Some(detail_info_type.into());
        self
    }

    /// Sets the detail mapping.
    pub fn with_detail_info(mut self, detail_info: Map<String, Value>) -> Self {
        self.detail_info = Some(detail_info);
        self
    }

    /// The error message from the server.
    pub fn message(&self) -> Option<&str> {
        self.message.as_str()
    }

    /// The error code from the server.
    pub fn error_code(&self) -> Option<i64> {
        self.error_code
    }

    /// The server stack trace. The server never sends one, so this is always empty.
    pub fn stacktrace(&self) -> &'static str {
        ""
    }

    /// The command that was sent to the server.
    pub fn input_command(&self) -> Option<&str> {
        self.input_command.as_deref()
    }

    /// The detail type for [`detail_info`](Self::detail_info).
    pub fn detail_info_type(&self) -> Option<&str> {
        self.detail_info_type.as_deref()
    }

    /// The detail mapping.
    pub fn detail_info(&self) -> Option<&Map<String, Value>> {
        self.detail_info.as_ref()
    }

    /// Deserializes the detail mapping into `T`.
    ///
    /// Returns `None` when the server sent no detail mapping.
    ///
    /// ## Errors
    ///
    /// The inner result fails if the mapping does not match `T`.
    pub fn detail_info_as<T: DeserializeOwned>(&self) -> Option<Result<T, serde_json::Error>> {
        self.detail_info
            .as_ref()
            .map(|info| serde_json::from_value(Value::Object(info.clone())))
    }
}

impl fmt::Debug for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}(message={:?}, errorcode={}, inputcommand={}, detailInfoType={}, detailInfo={})>",
            ErrorKind::Server,
            self.message,
            repr(self.error_code.as_ref()),
            repr(self.input_command.as_ref()),
            repr(self.detail_info_type.as_ref()),
            self.detail_info
                .as_ref()
                .map_or_else(|| "None".to_string(), |info| Value::Object(info.clone()).to_string()),
        )
    }
}

fn repr<T: fmt::Debug>(value: Option<&T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("{v:?}"))
}
