//! Conversions between [`Optional<T>`](crate::Optional) and [`Outcome<T, E>`](crate::Outcome).

use crate::optional::Optional::{self, Absent, Present};
use crate::outcome::Outcome;

impl<T> Optional<T> {
    /// Converts into a [`Outcome<T, E>`], using `error` if [`Absent`].
    ///
    /// ```
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(1).ok_or("none"), Outcome::success(1));
    /// assert_eq!(Optional::<i32>::Absent.ok_or("none"), Outcome::failure("none"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        self.fold(Outcome::success, || Outcome::failure(error))
    }

    /// Converts into a [`Outcome<T, E>`], computing the error if [`Absent`].
    #[inline]
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, error: F) -> Outcome<T, E> {
        self.fold(Outcome::success, || Outcome::failure(error()))
    }
}

impl<T, E> Optional<Outcome<T, E>> {
    /// Swaps an [`Optional`] of an [`Outcome`] into an [`Outcome`] of an [`Optional`].
    ///
    /// - [`Absent`] becomes a success holding [`Absent`].
    /// - A present success becomes a success holding [`Present`].
    /// - A present failure becomes that failure, keeping its trace.
    ///
    /// ```
    /// use twofold::prelude::*;
    ///
    /// let nested: Optional<Outcome<i32, &str>> = Present(Outcome::failure("e"));
    /// assert_eq!(nested.transpose(), Outcome::failure("e"));
    /// ```
    #[inline]
    pub fn transpose(self) -> Outcome<Optional<T>, E> {
        self.fold(|inner| inner.map(Present), || Outcome::success(Absent))
    }
}

impl<T, E> Outcome<T, E> {
    /// Converts the value into an [`Optional<T>`], discarding any error.
    #[inline]
    pub fn ok(self) -> Optional<T> {
        self.fold(Present, |_| Absent)
    }

    /// Converts the error into an [`Optional<E>`], discarding any value.
    #[inline]
    pub fn error(self) -> Optional<E> {
        self.fold(|_| Absent, Present)
    }

    /// Converts from a [`Result<T, E>`], mapping [`Ok`] to a success and [`Err`] to a failure
    /// without a trace.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::success(value),
            Err(error) => Self::failure(error),
        }
    }

    /// Converts into a [`Result<T, E>`], dropping any trace.
    ///
    /// This allows using `?` on an [`Outcome<T, E>`] in functions returning [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.fold(Ok, Err)
    }
}

impl<T, E> Outcome<Optional<T>, E> {
    /// Swaps an [`Outcome`] of an [`Optional`] into an [`Optional`] of an [`Outcome`].
    ///
    /// - A success holding [`Absent`] becomes [`Absent`].
    /// - A success holding [`Present`] becomes a present success.
    /// - A failure becomes a present failure, keeping its trace.
    #[inline]
    pub fn transpose(self) -> Optional<Outcome<T, E>> {
        self.fold_traced(
            |inner| inner.map(Outcome::success),
            |error, trace| Present(Outcome::Failure { error, trace }),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn ok_or_agrees_with_ok_and_error() {
        assert_eq!(Present(3).ok_or("e").ok(), Present(3));
        assert_eq!(Present(3).ok_or("e").error(), Absent);
        assert_eq!(Optional::<i32>::Absent.ok_or("e").ok(), Absent);
        assert_eq!(Optional::<i32>::Absent.ok_or("e").error(), Present("e"));
        assert_eq!(Optional::<i32>::Absent.ok_or_else(|| 7u8), Outcome::failure(7));
    }

    #[test]
    fn present_failure_transposes_to_failure() {
        let value: Optional<Outcome<i32, &str>> = Present(Outcome::failure("e"));
        assert_eq!(value.transpose(), Outcome::failure("e"));
    }

    #[test]
    fn outcome_transpose_table() {
        assert_eq!(Outcome::<Optional<i32>, ()>::success(Absent).transpose(), Absent);
        assert_eq!(
            Outcome::<_, ()>::success(Present(1)).transpose(),
            Present(Outcome::success(1))
        );
        assert_eq!(
            Outcome::<Optional<i32>, _>::failure("e").transpose(),
            Present(Outcome::failure("e"))
        );
    }

    #[test]
    fn result_interop() {
        fn halve(n: i32) -> Result<i32, &'static str> {
            let even = Present(n).filter(|n| n % 2 == 0).ok_or("odd");
            Ok(even.into_result()? / 2)
        }

        assert_eq!(Outcome::from_result(halve(8)), Outcome::success(4));
        assert_eq!(Outcome::from_result(halve(3)), Outcome::failure("odd"));
    }

    #[cfg(feature = "std")]
    #[test]
    fn transpose_keeps_trace() {
        let failure = Outcome::<Optional<i32>, &str>::failure_traced("e");
        let swapped = failure.transpose();
        assert!(swapped.as_ref().flat_map(|inner| inner.trace()).is_present());
        assert!(swapped.transpose().trace().is_present());
    }
}
