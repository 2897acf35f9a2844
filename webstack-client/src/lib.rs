//! Error taxonomy for the web stack client.
//!
//! The `webstack-client` crate defines the errors raised while talking to a
//! web stack server over HTTP and to its graph query API, so calling code can
//! match on what went wrong instead of parsing strings.
//!
//! ## Features
//!
//! - **One error type**: [`ClientError`] with a variant per [`ErrorKind`]
//! - **Structured server errors**: [`ServerError`] keeps the error code,
//!   command and detail payload reported by the server
//! - **Text-only messages**: byte messages are decoded on construction and
//!   never fail, see [`Message`]
//! - **Localized display**: server error text goes through [`i18n`]
//! - **Response adapters**: [`http`] turns `reqwest` failures into the taxonomy
//!
//! ## Example
//!
//! ```rust
//! use webstack_client::{ClientError, ErrorKind, ServerError};
//!
//! let err: ClientError = ServerError::new("bad request")
//!     .with_error_code(400)
//!     .into();
//!
//! assert_eq!(err.kind(), ErrorKind::Server);
//! assert_eq!(err.to_string(), "API Server Error: bad request");
//! ```

pub mod error;
pub mod http;
pub mod i18n;
mod response;

// Re-exports for convenience
pub use error::{
    ClientError, ErrorKind, GraphClientError, Message, ServerError, TransportError,
};
pub use i18n::{I18nError, Translator};
pub use response::{ResponseHandle, ResponseSummary};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
