//! Error taxonomy for the web stack client.
//!
//! The hierarchy mirrors the failure sites of a client session:
//! - [`ClientError`] - Top-level error; one variant per [`ErrorKind`]
//! - [`ServerError`] - Structured error returned by the server for a command
//! - [`TransportError`] - Failure of the HTTP call itself
//! - [`GraphClientError`] - Failure of the graph query transport
//!
//! Every error carries a [`Message`], which is always text even when the
//! failure site only had raw bytes.

mod client_error;
mod graph_error;
mod kind;
mod message;
mod server_error;
mod transport_error;

pub use client_error::ClientError;
pub use graph_error::GraphClientError;
pub use kind::ErrorKind;
pub use message::Message;
pub use server_error::ServerError;
pub use transport_error::TransportError;
