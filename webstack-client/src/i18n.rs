//! Localization of user-visible error text.
//!
//! Error display strings pass through a process-wide [`Translator`]. When no
//! translator has been installed the text is returned unchanged, so the
//! crate works without any localization backend.
//!
//! ## Examples
//!
//! ```rust
//! use webstack_client::{i18n, ServerError};
//!
//! i18n::install(|message: &str| match message {
//!     "API Server Error: %s" => "Erreur du serveur API : %s".to_string(),
//!     other => other.to_string(),
//! })?;
//!
//! let err = ServerError::new("quota exceeded");
//! assert_eq!(err.to_string(), "Erreur du serveur API : quota exceeded");
//! # Ok::<(), webstack_client::I18nError>(())
//! ```

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::debug;

static TRANSLATOR: OnceCell<Box<dyn Translator>> = OnceCell::new();

/// Maps message templates to localized text.
///
/// Templates use `%s` for the substituted value, matching gettext catalogs.
pub trait Translator: Send + Sync {
    /// Translates a single message.
    fn gettext(&self, message: &str) -> String;

    /// Translates a message with a plural form, chosen by `n`.
    fn ngettext(&self, singular: &str, plural: &str, n: u64) -> String {
        if n == 1 {
            self.gettext(singular)
        } else {
            self.gettext(plural)
        }
    }
}

impl<F> Translator for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn gettext(&self, message: &str) -> String {
        self(message)
    }
}

/// Errors from translator installation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum I18nError {
    /// A translator was already installed for this process.
    #[error("a translator is already installed")]
    AlreadyInstalled,
}

/// Installs the process-wide translator.
///
/// ## Errors
///
/// Returns [`I18nError::AlreadyInstalled`] if a translator was installed
/// earlier; the existing translator stays in place.
pub fn install<T: Translator + 'static>(translator: T) -> Result<(), I18nError> {
    TRANSLATOR
        .set(Box::new(translator))
        .map_err(|_| I18nError::AlreadyInstalled)?;
    debug!("installed message translator");
    Ok(())
}

/// Returns `true` if a translator has been installed.
pub fn is_installed() -> bool {
    TRANSLATOR.get().is_some()
}

/// Translates `message`, or returns it unchanged without a translator.
pub fn gettext(message: &str) -> String {
    match TRANSLATOR.get() {
        Some(translator) => translator.gettext(message),
        None => message.to_string(),
    }
}

/// Translates a plural message, or picks the untranslated form without a translator.
pub fn ngettext(singular: &str, plural: &str, n: u64) -> String {
    match TRANSLATOR.get() {
        Some(translator) => translator.ngettext(singular, plural, n),
        None if n == 1 => singular.to_string(),
        None => plural.to_string(),
    }
}

// Installation is process-wide; tests that install live in tests/translator.rs.
#[cfg(test)]
mod tests {
    use super::*;

    struct Shouting;

    impl Translator for Shouting {
        fn gettext(&self, message: &str) -> String {
            message.to_uppercase()
        }
    }

    #[test]
    fn test_passthrough_without_translator() {
        assert!(!is_installed());
        assert_eq!(gettext("API Server Error: %s"), "API Server Error: %s");
    }

    #[test]
    fn test_ngettext_passthrough() {
        assert_eq!(ngettext("%s job", "%s jobs", 1), "%s job");
        assert_eq!(ngettext("%s job", "%s jobs", 0), "%s jobs");
        assert_eq!(ngettext("%s job", "%s jobs", 2), "%s jobs");
    }

    #[test]
    fn test_default_ngettext_translates_chosen_form() {
        assert_eq!(Shouting.ngettext("one retry", "many retries", 1), "ONE RETRY");
        assert_eq!(Shouting.ngettext("one retry", "many retries", 3), "MANY RETRIES");
    }

    #[test]
    fn test_closure_is_translator() {
        let reverse = |message: &str| message.chars().rev().collect::<String>();
        assert_eq!(reverse.gettext("abc"), "cba");
    }

    #[test]
    fn test_already_installed_display() {
        assert_eq!(
            I18nError::AlreadyInstalled.to_string(),
            "a translator is already installed"
        );
    }
}
