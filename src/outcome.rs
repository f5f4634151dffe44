//! Contains the [`Outcome<T, E>`] type.

use self::Outcome::{Failure, Success};
use crate::optional::Optional::{self, Absent};
use crate::trace::Trace;
use core::hash::{Hash, Hasher};

/// The result of a computation, either a value of type `T` or an error of type `E`.
///
/// A [`Failure`] may carry a [`Trace`] recording where it was produced. The trace is purely
/// diagnostic: equality and hashing only look at the variant and its payload.
///
/// # Examples
///
/// ```
/// use twofold::Outcome;
///
/// let checked = Outcome::<i32, &str>::success(5)
///     .flat_map(|x| if x > 0 { Outcome::success(x * 2) } else { Outcome::failure("neg") })
///     .fold(|v| v, |_| -1);
/// assert_eq!(checked, 10);
///
/// let message = Outcome::<String, String>::failure("boom".to_string())
///     .map_err(|e| e + "!")
///     .fold(|v| v, |e| e);
/// assert_eq!(message, "boom!");
/// ```
#[derive(Clone, Debug)]
#[must_use = "an `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed.
    Failure {
        /// The reason for the failure.
        error: E,
        /// Where the failure was produced, if it was recorded.
        trace: Optional<Trace>,
    },
}

impl<T, E> Outcome<T, E> {
    /// Creates a [`Success`].
    #[inline]
    pub const fn success(value: T) -> Self {
        Success(value)
    }

    /// Creates a [`Failure`] without a [`Trace`].
    #[inline]
    pub const fn failure(error: E) -> Self {
        Failure {
            error,
            trace: Absent,
        }
    }

    /// Creates a [`Failure`], capturing a [`Trace`] of the current call stack.
    #[cfg(feature = "std")]
    #[inline(never)]
    pub fn failure_traced(error: E) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(error_type = core::any::type_name::<E>(), "recording traced failure");

        Failure {
            error,
            trace: Optional::Present(Trace::capture()),
        }
    }

    /// Eliminates the [`Outcome<T, E>`], also handing any attached [`Trace`] to `failure`.
    ///
    /// This is the only operation that takes an [`Outcome<T, E>`] apart by value, everything
    /// else is built on it.
    #[inline]
    pub fn fold_traced<B, S, F>(self, success: S, failure: F) -> B
    where
        S: FnOnce(T) -> B,
        F: FnOnce(E, Optional<Trace>) -> B,
    {
        match self {
            Success(value) => success(value),
            Failure { error, trace } => failure(error, trace),
        }
    }

    /// Eliminates the [`Outcome<T, E>`], calling `success` with the value or `failure` with the
    /// error.
    ///
    /// Exactly one of the two closures is invoked.
    ///
    /// ```
    /// use twofold::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, i32>::success(2).fold(|v| v * 10, |e| -e), 20);
    /// assert_eq!(Outcome::<i32, i32>::failure(2).fold(|v| v * 10, |e| -e), -2);
    /// ```
    #[inline]
    pub fn fold<B, S, F>(self, success: S, failure: F) -> B
    where
        S: FnOnce(T) -> B,
        F: FnOnce(E) -> B,
    {
        self.fold_traced(success, |error, _| failure(error))
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    ///
    /// The trace, if any, is shared with the original.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure { error, trace } => Failure {
                error,
                trace: trace.clone(),
            },
        }
    }

    /// Converts from `&mut Outcome<T, E>` to `Outcome<&mut T, &mut E>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure { error, trace } => Failure {
                error,
                trace: trace.clone(),
            },
        }
    }

    /// Returns the [`Trace`] attached to a [`Failure`].
    #[inline]
    pub fn trace(&self) -> Optional<&Trace> {
        match self {
            Success(_) => Absent,
            Failure { trace, .. } => trace.as_ref(),
        }
    }

    /// Returns `true` if this is a [`Success`].
    #[inline]
    pub fn is_success(&self) -> bool {
        self.as_ref().fold(|_| true, |_| false)
    }

    /// Returns `true` if this is a [`Failure`].
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the value, or `fallback` if this is a [`Failure`].
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        self.fold(|value| value, |_| fallback)
    }

    /// Applies `f` to the value, passing a [`Failure`] through unchanged.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U, E> {
        self.fold_traced(|value| Success(f(value)), |error, trace| Failure { error, trace })
    }

    /// Applies `f` to the error, passing a [`Success`] through unchanged.
    ///
    /// The trace stays attached to the mapped error.
    #[inline]
    pub fn map_err<G, F: FnOnce(E) -> G>(self, f: F) -> Outcome<T, G> {
        self.fold_traced(Success, |error, trace| Failure {
            error: f(error),
            trace,
        })
    }

    /// Chains a computation that may fail onto a [`Success`].
    ///
    /// `f` is only called on a [`Success`], a [`Failure`] short-circuits the chain.
    #[inline]
    pub fn flat_map<U, F: FnOnce(T) -> Outcome<U, E>>(self, f: F) -> Outcome<U, E> {
        self.fold_traced(f, |error, trace| Failure { error, trace })
    }

    /// Chains a recovery onto a [`Failure`].
    ///
    /// `f` is only called on a [`Failure`], a [`Success`] passes through.
    ///
    /// ```
    /// use twofold::Outcome;
    ///
    /// let recovered = Outcome::<u8, &str>::failure("missing")
    ///     .flat_map_err(|_| Outcome::<u8, ()>::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    pub fn flat_map_err<G, F: FnOnce(E) -> Outcome<T, G>>(self, f: F) -> Outcome<T, G> {
        self.fold_traced(Success, |error, _| f(error))
    }

    /// Calls `f` with a reference to the value, if this is a [`Success`].
    #[inline]
    pub fn if_ok<F: FnOnce(&T)>(&self, f: F) {
        self.as_ref().fold(f, |_| ())
    }

    /// Calls `f` with a reference to the error, if this is a [`Failure`].
    #[inline]
    pub fn if_err<F: FnOnce(&E)>(&self, f: F) {
        self.as_ref().fold(|_| (), f)
    }

    /// Calls `ok` with the value or `err` with the error.
    #[inline]
    pub fn if_ok_else<S, F>(&self, ok: S, err: F)
    where
        S: FnOnce(&T),
        F: FnOnce(&E),
    {
        self.as_ref().fold(ok, err)
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Removes one level of nesting, a [`Failure`] at either level is kept.
    ///
    /// ```
    /// use twofold::Outcome;
    ///
    /// let inner = Outcome::<Outcome<i32, &str>, &str>::success(Outcome::failure("inner"));
    /// assert_eq!(inner.flatten(), Outcome::failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.flat_map(|inner| inner)
    }
}

impl<T: PartialEq, E: PartialEq> PartialEq for Outcome<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_ref().fold(
            |value| other.as_ref().fold(|theirs| value == theirs, |_| false),
            |error| other.as_ref().fold(|_| false, |theirs| error == theirs),
        )
    }
}

impl<T: Eq, E: Eq> Eq for Outcome<T, E> {}

impl<T: Hash, E: Hash> Hash for Outcome<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_ref().ok().hash(state);
        self.as_ref().error().hash(state);
    }
}
