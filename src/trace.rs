//! Contains the diagnostic [`Trace`] that may be attached to a failed
//! [`Outcome`](crate::Outcome).
//!
//! A trace records where a failure was produced. It is carried next to the error rather than
//! inside it, and is never compared or hashed, so two failures with equal errors are equal no
//! matter where they came from.

#[cfg(feature = "std")]
use std::backtrace::Backtrace;
#[cfg(feature = "std")]
use std::sync::Arc;

/// An opaque record of where a failure was produced.
///
/// Cloning a [`Trace`] is cheap, the captured frames are shared.
#[derive(Clone)]
pub struct Trace {
    #[cfg(feature = "std")]
    backtrace: Arc<Backtrace>,
    // Traces cannot be captured without std
    #[cfg(not(feature = "std"))]
    _never: core::convert::Infallible,
}

#[cfg(feature = "std")]
impl Trace {
    /// Captures a trace of the current call stack.
    ///
    /// Whether frames are actually resolved depends on the `RUST_BACKTRACE` and
    /// `RUST_LIB_BACKTRACE` environment variables, see [`Backtrace::capture`].
    #[inline(never)]
    pub fn capture() -> Self {
        Self {
            backtrace: Arc::new(Backtrace::capture()),
        }
    }

    /// Returns the captured backtrace.
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

#[cfg(feature = "std")]
impl core::fmt::Debug for Trace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Trace").field(&self.backtrace.status()).finish()
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Debug for Trace {
    fn fmt(&self, _: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self._never {}
    }
}

#[cfg(feature = "std")]
impl core::fmt::Display for Trace {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&*self.backtrace, f)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::Trace;

    #[test]
    fn clones_share_frames() {
        let trace = Trace::capture();
        let copy = trace.clone();
        assert!(core::ptr::eq(trace.backtrace(), copy.backtrace()));
    }
}
