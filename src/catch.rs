//! Turning panics into failures.

use crate::optional::Optional;
use crate::outcome::Outcome;
use crate::trace::Trace;
use std::any::Any;
use std::panic::UnwindSafe;

/// The error of an [`Outcome`] produced by [`Outcome::catch`] when the computation panicked.
#[derive(Clone, Debug, Eq, Hash, PartialEq, thiserror::Error)]
#[error("computation panicked: {message}")]
pub struct Panicked {
    message: String,
}

impl Panicked {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast_ref::<&'static str>() {
                Some(message) => (*message).to_owned(),
                None => "Box<dyn Any>".to_owned(),
            },
        };

        Self { message }
    }

    /// The message the computation panicked with.
    ///
    /// Panics with a payload other than a string report `Box<dyn Any>`, like the standard
    /// library's panic hook does.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<T> Outcome<T, Panicked> {
    /// Runs `f`, turning a panic into a traced failure.
    ///
    /// This is the only place where a panic becomes data, every combinator lets panics raised
    /// by the closures passed to it propagate. The panic hook still runs before the failure is
    /// returned.
    ///
    /// ```
    /// use twofold::Outcome;
    ///
    /// let divided = Outcome::catch(|| 10 / 2);
    /// assert_eq!(divided, Outcome::success(5));
    ///
    /// let failed = Outcome::catch(|| -> i32 { panic!("no") });
    /// assert_eq!(failed.error().map(|e| e.message().to_owned()).get_or_else(String::new()), "no");
    /// ```
    pub fn catch<F>(f: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match std::panic::catch_unwind(f) {
            Ok(value) => Self::success(value),
            Err(payload) => {
                let error = Panicked::from_payload(payload);

                #[cfg(feature = "tracing")]
                tracing::debug!(panic_message = %error.message, "caught panic as failure");

                Outcome::Failure {
                    error,
                    trace: Optional::Present(Trace::capture()),
                }
            }
        }
    }
}
