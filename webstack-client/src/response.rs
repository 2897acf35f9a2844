//! Transport responses attached to errors.
//!
//! Errors never interpret the response they carry. [`ResponseHandle`] keeps
//! it behind a reference count so every clone of an error points at the same
//! response, and callers downcast it back to whatever type they attached.
//! The adapters in [`crate::http`] attach a [`ResponseSummary`].

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use url::Url;

/// Opaque, shared handle to the response that caused an error.
#[derive(Clone)]
pub struct ResponseHandle(Arc<dyn Any + Send + Sync>);

impl ResponseHandle {
    /// Wraps a response value.
    pub fn new<T: Any + Send + Sync>(response: T) -> Self {
        Self(Arc::new(response))
    }

    /// Wraps an already shared response without copying it.
    pub fn from_arc<T: Any + Send + Sync>(response: Arc<T>) -> Self {
        Self(response)
    }

    /// Returns the response if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.0).downcast_ref::<T>()
    }

    /// Returns `true` if the response is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        (*self.0).is::<T>()
    }

    /// Returns `true` if both handles point at the same response.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns `true` if this handle points at `response`.
    pub fn is_same<T>(&self, response: &Arc<T>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(response))
    }
}

impl PartialEq for ResponseHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ResponseHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseHandle").finish_non_exhaustive()
    }
}

/// Status, URL and headers of a response whose body was consumed.
#[derive(Debug, Clone)]
pub struct ResponseSummary {
    status: StatusCode,
    url: Url,
    headers: HeaderMap,
}

impl ResponseSummary {
    /// Captures the parts of `response` that survive reading its body.
    pub fn from_response(response: &reqwest::Response) -> Self {
        Self {
            status: response.status(),
            url: response.url().clone(),
            headers: response.headers().clone(),
        }
    }

    /// The response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The final URL, after redirects.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downcast() {
        let handle = ResponseHandle::new(404_u16);
        assert!(handle.is::<u16>());
        assert_eq!(handle.downcast_ref::<u16>(), Some(&404));
        assert_eq!(handle.downcast_ref::<String>(), None);
    }

    #[test]
    fn test_clones_are_identical() {
        let handle = ResponseHandle::new(String::from("body"));
        let clone = handle.clone();
        assert!(handle.ptr_eq(&clone));
        assert_eq!(handle, clone);
    }

    #[test]
    fn test_equal_values_are_distinct_handles() {
        let a = ResponseHandle::new(1_u8);
        let b = ResponseHandle::new(1_u8);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_from_arc_keeps_identity() {
        let shared = Arc::new(vec![1, 2, 3]);
        let handle = ResponseHandle::from_arc(Arc::clone(&shared));
        assert!(handle.is_same(&shared));
        assert!(!handle.is_same(&Arc::new(vec![1, 2, 3])));
    }

    #[test]
    fn test_debug_is_opaque() {
        let handle = ResponseHandle::new("secret");
        assert_eq!(format!("{handle:?}"), "ResponseHandle { .. }");
    }
}
