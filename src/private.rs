use crate::optional::Optional::{self, Absent, Present};
use crate::outcome::Outcome;
use crate::trace::Trace;

/// Splits a sum type into the value it continues with and the residual it stops at.
pub trait Try {
    type Output;
    type Residual;

    fn into_result(self) -> Result<Self::Output, Self::Residual>;
    fn from_output(output: Self::Output) -> Self;
    fn from_residual(residual: Self::Residual) -> Self;
}

impl<T> Try for Optional<T> {
    type Output = T;
    type Residual = Optional<core::convert::Infallible>;

    #[inline(always)]
    fn into_result(self) -> Result<Self::Output, Self::Residual> {
        self.fold(Ok, || Err(Absent))
    }

    #[inline(always)]
    fn from_output(output: Self::Output) -> Self {
        Present(output)
    }

    #[inline(always)]
    fn from_residual(_: Self::Residual) -> Self {
        Absent
    }
}

impl<T, E> Try for Outcome<T, E> {
    type Output = T;
    type Residual = (E, Optional<Trace>);

    #[inline(always)]
    fn into_result(self) -> Result<Self::Output, Self::Residual> {
        self.fold_traced(Ok, |error, trace| Err((error, trace)))
    }

    #[inline(always)]
    fn from_output(output: Self::Output) -> Self {
        Outcome::success(output)
    }

    #[inline(always)]
    fn from_residual((error, trace): Self::Residual) -> Self {
        Outcome::Failure { error, trace }
    }
}

/// Yields the outputs of an iterator of [`Try`] values until the first residual.
struct Shunt<'r, I, R> {
    items: I,
    residual: &'r mut Option<R>,
}

impl<I, R> Iterator for Shunt<'_, I, R>
where
    I: Iterator,
    I::Item: Try<Residual = R>,
{
    type Item = <I::Item as Try>::Output;

    fn next(&mut self) -> Option<Self::Item> {
        if self.residual.is_some() {
            return None;
        }

        match self.items.next()?.into_result() {
            Ok(output) => Some(output),
            Err(residual) => {
                *self.residual = Some(residual);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.residual.is_some() {
            (0, Some(0))
        } else {
            (0, self.items.size_hint().1)
        }
    }
}

/// Collects the outputs of `items` into `V`, stopping at the first residual.
///
/// No items are pulled from the iterator after the first residual.
pub(crate) fn collect<I, C, V>(items: I) -> C
where
    I: IntoIterator,
    I::Item: Try,
    C: Try<Output = V, Residual = <I::Item as Try>::Residual>,
    V: FromIterator<<I::Item as Try>::Output>,
{
    let mut residual = None;
    let collected = Shunt {
        items: items.into_iter(),
        residual: &mut residual,
    }
    .collect::<V>();

    match residual {
        Some(residual) => C::from_residual(residual),
        None => C::from_output(collected),
    }
}
