//! Contains the [`Optional<T>`] type.

use self::Optional::{Absent, Present};

/// A value of type `T`, or nothing.
///
/// Every combinator is defined in terms of [`fold`](Optional::fold), the only operation that
/// takes an [`Optional<T>`] apart by value.
///
/// Two values are equal if both are [`Absent`], or if both are [`Present`] with equal payloads.
/// Hashing agrees with equality.
///
/// # Examples
///
/// ```
/// use twofold::prelude::*;
///
/// let doubled = Optional::from_nullable(Some(5)).map(|x| x * 2).get_or_else(0);
/// assert_eq!(doubled, 10);
///
/// let missing = Optional::<i32>::from_nullable(None).map(|x| x * 2).get_or_else(0);
/// assert_eq!(missing, 0);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[must_use = "an `Optional` does nothing unless it is inspected"]
pub enum Optional<T> {
    /// Holds a value.
    Present(T),
    /// Holds nothing.
    Absent,
}

impl<T> Optional<T> {
    /// Eliminates the [`Optional<T>`], calling `present` with the payload or `absent` otherwise.
    ///
    /// Exactly one of the two closures is invoked.
    ///
    /// ```
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Present(3).fold(|x| x + 1, || 0), 4);
    /// assert_eq!(Absent.fold(|x: i32| x + 1, || 0), 0);
    /// ```
    #[inline]
    pub fn fold<B, P, A>(self, present: P, absent: A) -> B
    where
        P: FnOnce(T) -> B,
        A: FnOnce() -> B,
    {
        match self {
            Present(value) => present(value),
            Absent => absent(),
        }
    }

    /// Converts from an [`Option<T>`], mapping [`Some`] to [`Present`] and [`None`] to [`Absent`].
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Present(value),
            None => Absent,
        }
    }

    /// Converts into an [`Option<T>`], mapping [`Present`] to [`Some`] and [`Absent`] to [`None`].
    #[inline]
    pub fn to_nullable(self) -> Option<T> {
        self.fold(Some, || None)
    }

    /// Converts from `&Optional<T>` to `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Converts from `&mut Optional<T>` to `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Present(value) => Present(value),
            Absent => Absent,
        }
    }

    /// Returns `true` if this is a [`Present`] value.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.as_ref().fold(|_| true, || false)
    }

    /// Returns `true` if this is [`Absent`].
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Returns the payload, or `fallback` if [`Absent`].
    ///
    /// The `fallback` is always evaluated; see [`get_or_else_with`](Optional::get_or_else_with)
    /// to compute it lazily.
    #[inline]
    pub fn get_or_else(self, fallback: T) -> T {
        self.fold(|value| value, || fallback)
    }

    /// Returns the payload, or computes a fallback if [`Absent`].
    #[inline]
    pub fn get_or_else_with<F: FnOnce() -> T>(self, fallback: F) -> T {
        self.fold(|value| value, fallback)
    }

    /// Applies `f` to the payload, leaving [`Absent`] untouched.
    #[inline]
    pub fn map<B, F: FnOnce(T) -> B>(self, f: F) -> Optional<B> {
        self.fold(|value| Present(f(value)), || Absent)
    }

    /// Applies `f` to the payload and returns its result, leaving [`Absent`] untouched.
    ///
    /// `f` is never called on [`Absent`].
    ///
    /// ```
    /// use twofold::prelude::*;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Present(x / 2) } else { Absent };
    /// assert_eq!(Present(8).flat_map(half).flat_map(half), Present(2));
    /// assert_eq!(Present(6).flat_map(half).flat_map(half), Absent);
    /// ```
    #[inline]
    pub fn flat_map<B, F: FnOnce(T) -> Optional<B>>(self, f: F) -> Optional<B> {
        self.fold(f, || Absent)
    }

    /// Keeps the payload only if `predicate` returns `true` for it.
    #[inline]
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.flat_map(|value| if predicate(&value) { Present(value) } else { Absent })
    }

    /// Returns `self` if it is [`Present`], otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        self.fold(Present, || other)
    }

    /// Returns `self` if it is [`Present`], otherwise the result of `f`.
    #[inline]
    pub fn or_else<F: FnOnce() -> Self>(self, f: F) -> Self {
        self.fold(Present, f)
    }

    /// Calls `f` with a reference to the payload, if any.
    #[inline]
    pub fn if_some<F: FnOnce(&T)>(&self, f: F) {
        self.as_ref().fold(f, || ())
    }

    /// Calls `f` if this is [`Absent`].
    #[inline]
    pub fn if_none<F: FnOnce()>(&self, f: F) {
        self.as_ref().fold(|_| (), f)
    }

    /// Calls `some` with a reference to the payload, or `none` if [`Absent`].
    #[inline]
    pub fn if_some_else<S, N>(&self, some: S, none: N)
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        self.as_ref().fold(some, none)
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// ```
    /// use twofold::prelude::*;
    ///
    /// assert_eq!(Optional::flatten(Present(Present(1))), Present(1));
    /// assert_eq!(Optional::flatten(Present(Optional::<i32>::Absent)), Absent);
    /// assert_eq!(Optional::<Optional<i32>>::Absent.flatten(), Absent);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        self.flat_map(|inner| inner)
    }
}

impl<T> Default for Optional<T> {
    /// Returns [`Absent`].
    #[inline]
    fn default() -> Self {
        Absent
    }
}
