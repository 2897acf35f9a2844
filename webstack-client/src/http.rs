//! Classification of HTTP failures into client errors.
//!
//! The transport itself is owned by the caller. These adapters take what the
//! caller's `reqwest` client produced and turn failures into the matching
//! [`ClientError`] kind, with tracing instrumentation on the way.

use tracing::{debug, instrument, Span};

use crate::error::{ClientError, ErrorKind, GraphClientError, TransportError};
use crate::response::{ResponseHandle, ResponseSummary};

/// Passes a successful response through, or converts a failed one into an error.
///
/// A `401 Unauthorized` becomes an authentication error. Any other
/// non-success status becomes a [`TransportError`] carrying the response
/// body as its message and a [`ResponseSummary`] as its response.
///
/// ## Examples
///
/// ```rust,ignore
/// let response = client.get(url).send().await?;
/// let response = webstack_client::http::check_response(response).await?;
/// ```
///
/// ## Errors
///
/// Returns an error for every non-success status.
#[instrument(
    name = "check_response",
    skip(response),
    fields(
        http.url = %response.url(),
        http.status_code = response.status().as_u16(),
        error.kind = tracing::field::Empty,
    )
)]
pub async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let summary = ResponseSummary::from_response(&response);
    let message = read_message(response).await;

    if status == reqwest::StatusCode::UNAUTHORIZED {
        Span::current().record("error.kind", ErrorKind::Authentication.type_name());
        return Err(ClientError::authentication(message));
    }

    Span::current().record("error.kind", ErrorKind::Transport.type_name());
    Err(TransportError::new(message)
        .with_response(ResponseHandle::new(summary))
        .into())
}

/// Passes a successful graph response through, or converts a failed one into an error.
///
/// The error keeps the status code and the raw body bytes.
///
/// ## Errors
///
/// Returns a [`GraphClientError`] for every non-success status.
#[instrument(
    name = "check_graph_response",
    skip(response),
    fields(
        http.url = %response.url(),
        http.status_code = response.status().as_u16(),
    )
)]
pub async fn check_graph_response(
    response: reqwest::Response,
) -> Result<reqwest::Response, GraphClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let summary = ResponseSummary::from_response(&response);
    let message = format!("graph query failed with status {status}");
    let err = GraphClientError::new(message)
        .with_status_code(status.as_u16())
        .with_response(ResponseHandle::new(summary));

    let err = match response.bytes().await {
        Ok(content) => err.with_content(content),
        Err(e) => {
            debug!(error = %e, "failed to read graph error body");
            err
        }
    };
    Err(err)
}

/// Reads the body as the error message, falling back to the status line.
async fn read_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(body) if !body.is_empty() => body,
        Ok(_) => status.to_string(),
        Err(e) => {
            debug!(error = %e, "failed to read error body");
            status.to_string()
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        let converted = if err.is_timeout() {
            Self::timeout(message)
        } else if err.is_builder() {
            Self::uri(message)
        } else {
            TransportError::new(message).into()
        };
        debug!(kind = %converted.kind(), error = %err, "classified HTTP client error");
        converted
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::uri(err.to_string())
    }
}
