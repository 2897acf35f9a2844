//! Error message normalization.

use std::fmt;

use bytes::Bytes;
use tracing::warn;

/// The message carried by every client error.
///
/// A message is either text or absent. Raw bytes are decoded as UTF-8 on
/// conversion; invalid sequences are dropped rather than rejected, so
/// building an error never fails.
///
/// ## Examples
///
/// ```rust
/// use webstack_client::Message;
///
/// let message = Message::from(&b"caf\xc3\xa9\xff"[..]);
/// assert_eq!(message.as_str(), Some("café"));
///
/// assert_eq!(Message::none().as_str(), None);
/// assert_eq!(Message::default().as_str(), Some(""));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Message(Option<String>);

impl Message {
    /// Creates an absent message.
    pub fn none() -> Self {
        Self(None)
    }

    /// Creates a text message.
    pub fn text(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    /// Decodes raw bytes into a text message, dropping invalid UTF-8.
    pub fn decode(bytes: &[u8]) -> Self {
        Self(Some(decode_dropping_invalid(bytes)))
    }

    /// Returns the message text, or `None` if the message is absent.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Returns `true` if the message is absent.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Consumes the message and returns the text.
    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped = 0;
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        dropped += chunk.invalid().len();
    }
    if dropped > 0 {
        warn!(dropped, "dropped undecodable bytes from error message");
    }
    text
}

impl Default for Message {
    fn default() -> Self {
        Self(Some(String::new()))
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(text) => f.write_str(text),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(text) => write!(f, "{text:?}"),
            None => f.write_str("None"),
        }
    }
}

// --- Conversions ---

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self(Some(text))
    }
}

impl From<&String> for Message {
    fn from(text: &String) -> Self {
        Self::text(text.as_str())
    }
}

impl From<&[u8]> for Message {
    fn from(bytes: &[u8]) -> Self {
        Self::decode(bytes)
    }
}

impl<const N: usize> From<&[u8; N]> for Message {
    fn from(bytes: &[u8; N]) -> Self {
        Self::decode(bytes)
    }
}

impl From<Vec<u8>> for Message {
    fn from(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self(Some(text)),
            Err(e) => Self::decode(e.as_bytes()),
        }
    }
}

impl From<Bytes> for Message {
    fn from(bytes: Bytes) -> Self {
        Self::decode(&bytes)
    }
}

impl<T: Into<Message>> From<Option<T>> for Message {
    fn from(message: Option<T>) -> Self {
        message.map_or_else(Self::none, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tracing_test::traced_test;

    #[test]
    fn test_text_is_kept() {
        assert_eq!(Message::from("connection reset").as_str(), Some("connection reset"));
        assert_eq!(Message::from(String::from("x")).as_str(), Some("x"));
    }

    #[test]
    fn test_valid_bytes_are_decoded() {
        let message = Message::from(Vec::from("naïve".as_bytes()));
        assert_eq!(message.as_str(), Some("naïve"));
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let message = Message::from(&b"caf\xc3\xa9 \xff\xfeok"[..]);
        assert_eq!(message.as_str(), Some("café ok"));

        let truncated = Message::from(Bytes::from_static(b"euro \xe2\x82"));
        assert_eq!(truncated.as_str(), Some("euro "));
    }

    #[test]
    fn test_none_is_preserved() {
        let message = Message::from(None::<&str>);
        assert!(message.is_none());
        assert_eq!(message.to_string(), "None");
        assert_eq!(format!("{message:?}"), "None");
    }

    #[test]
    fn test_default_is_empty_text() {
        let message = Message::default();
        assert!(!message.is_none());
        assert_eq!(message.to_string(), "");
    }

    #[test]
    fn test_debug_quotes_text() {
        assert_eq!(format!("{:?}", Message::from("bad \"quote\"")), r#""bad \"quote\"""#);
    }

    #[test]
    #[traced_test]
    fn test_dropping_bytes_logs_warning() {
        let _ = Message::from(&b"bad\xff\xff"[..]);
        assert!(logs_contain("dropped undecodable bytes"));
    }

    #[test]
    #[traced_test]
    fn test_valid_bytes_log_nothing() {
        let _ = Message::from(&b"fine"[..]);
        assert!(!logs_contain("dropped undecodable bytes"));
    }

    proptest! {
        #[test]
        fn prop_text_round_trips(text in ".*") {
            let message = Message::from(text.as_str());
            prop_assert_eq!(message.as_str(), Some(text.as_str()));
        }

        #[test]
        fn prop_stray_continuation_bytes_are_dropped(
            bytes in prop::collection::vec(prop_oneof![0u8..0x80, 0x80u8..0xC0], 0..64)
        ) {
            let expected: String = bytes.iter().filter(|b| b.is_ascii()).map(|&b| char::from(b)).collect();
            let message = Message::from(bytes);
            prop_assert_eq!(message.as_str(), Some(expected.as_str()));
        }
    }
}
