//! Error types shared by the effect contexts.
//!
//! A panic inside `map`/`chain` is a programmer error and is never swallowed
//! by those operations. Only two boundaries convert a panic into a typed
//! failure: [`from_throwable`](crate::effect::result::from_throwable) and a
//! Task's execution boundary. Both report it as [`Panicked`].

use std::any::Any;

/// A panic captured at an explicit conversion boundary.
///
/// # Examples
///
/// ```rust
/// use contextual::effect::Panicked;
///
/// let error = Panicked::new("index out of bounds");
/// assert_eq!(error.to_string(), "computation panicked: index out of bounds");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("computation panicked: {message}")]
pub struct Panicked {
    /// The panic payload rendered as text.
    pub message: String,
}

impl Panicked {
    /// Creates a `Panicked` error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Builds a `Panicked` from a payload returned by `catch_unwind`.
    ///
    /// `&str` and `String` payloads keep their text; anything else is reported
    /// as an opaque panic.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn from_payload_reads_str_payload() {
        let payload: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(Panicked::from_payload(payload.as_ref()).message, "boom");
    }

    #[rstest]
    fn from_payload_reads_string_payload() {
        let payload: Box<dyn Any + Send> = Box::new(String::from("formatted boom"));
        assert_eq!(
            Panicked::from_payload(payload.as_ref()).message,
            "formatted boom"
        );
    }

    #[rstest]
    fn from_payload_reports_opaque_payload() {
        let payload: Box<dyn Any + Send> = Box::new(17_u32);
        assert_eq!(
            Panicked::from_payload(payload.as_ref()).message,
            "non-string panic payload"
        );
    }
}
