//! Iterators over the payload of an [`Optional<T>`] or the value of an [`Outcome<T, E>`].
//!
//! Each iterator yields at most one item. Collecting an iterator of [`Optional<T>`] or
//! [`Outcome<T, E>`] values stops at the first [`Absent`](crate::Optional::Absent) or failure:
//!
//! ```
//! use twofold::prelude::*;
//!
//! let all: Optional<Vec<i32>> = [Present(1), Present(2)].into_iter().collect();
//! assert_eq!(all, Present(vec![1, 2]));
//!
//! let parsed: Outcome<Vec<i32>, &str> = ["1", "x", "3"]
//!     .into_iter()
//!     .map(|s| Outcome::from_result(s.parse::<i32>()).map_err(|_| s))
//!     .collect();
//! assert_eq!(parsed, Outcome::failure("x"));
//! ```

use crate::optional::Optional;
use crate::outcome::Outcome;

macro_rules! once_iterator {
    ($name:ident<$($lifetime:lifetime,)? $t:ident>, $item:ty) => {
        impl<$($lifetime,)? $t> Iterator for $name<$($lifetime,)? $t> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                core::mem::take(&mut self.inner).to_nullable()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let remaining = usize::from(self.inner.is_present());
                (remaining, Some(remaining))
            }
        }

        impl<$($lifetime,)? $t> DoubleEndedIterator for $name<$($lifetime,)? $t> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.next()
            }
        }

        impl<$($lifetime,)? $t> ExactSizeIterator for $name<$($lifetime,)? $t> {}

        impl<$($lifetime,)? $t> core::iter::FusedIterator for $name<$($lifetime,)? $t> {}
    };
}

/// An iterator over a reference to the payload, see [`Optional::iter`] and [`Outcome::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: Optional<&'a T>,
}

/// An iterator over a mutable reference to the payload, see [`Optional::iter_mut`] and
/// [`Outcome::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Optional<&'a mut T>,
}

/// An iterator that moves the payload out of an [`Optional<T>`] or [`Outcome<T, E>`].
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: Optional<T>,
}

once_iterator!(Iter<'a, T>, &'a T);
once_iterator!(IterMut<'a, T>, &'a mut T);
once_iterator!(IntoIter<T>, T);

impl<T> Optional<T> {
    /// Returns an iterator over the payload, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref(),
        }
    }

    /// Returns an iterator over a mutable reference to the payload, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut(),
        }
    }
}

impl<T, E> Outcome<T, E> {
    /// Returns an iterator over the value of a success.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().ok(),
        }
    }

    /// Returns an iterator over a mutable reference to the value of a success.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut().ok(),
        }
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Optional<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self.ok() }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<A, V: FromIterator<A>> FromIterator<Optional<A>> for Optional<V> {
    /// Collects every payload, or returns [`Absent`](Optional::Absent) at the first absent item.
    #[inline]
    fn from_iter<I: IntoIterator<Item = Optional<A>>>(items: I) -> Self {
        crate::private::collect::<I, Self, V>(items)
    }
}

impl<A, E, V: FromIterator<A>> FromIterator<Outcome<A, E>> for Outcome<V, E> {
    /// Collects every value, or returns the first failure, trace included.
    #[inline]
    fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>(items: I) -> Self {
        crate::private::collect::<I, Self, V>(items)
    }
}
