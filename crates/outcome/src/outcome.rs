use std::convert::Infallible;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::Deref;

use crate::unwrap_error::{UnwrapError, UnwrapKind};

use self::Outcome::{Failure, Success};

/// A value which is either a success carrying `T`, or a failure carrying `E`.
///
/// An outcome is always exactly one of the two variants, and never changes
/// variant once constructed. Every combinator consumes the outcome and
/// produces a new one.
///
/// Combinators on a [`Failure`] short-circuit: they hand the failure back
/// untouched without calling the provided function. The two exceptions are
/// [`or_else`] which recovers from a failure, and [`map_failure`] which
/// transforms it.
///
/// [`or_else`]: Outcome::or_else
/// [`map_failure`]: Outcome::map_failure
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Outcome` may be a `Failure` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// Contains the success value.
    Success(T),
    /// Contains the failure value.
    Failure(E),
}

/// Construct a successful outcome.
///
/// The failure type is inferred from the use site, so the result is
/// compatible with any failure type. Where nothing constrains it, name it as
/// [`Infallible`].
///
/// ```
/// use outcome::{success, Outcome};
///
/// let outcome: Outcome<u32, String> = success(10);
/// assert!(outcome.is_success());
/// ```
#[inline]
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Success(value)
}

/// Construct a failed outcome.
///
/// ```
/// use outcome::{failure, Outcome};
///
/// let outcome: Outcome<u32, &str> = failure("bad");
/// assert!(outcome.is_failure());
/// ```
#[inline]
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Failure(error)
}

impl<T, E> Outcome<T, E> {
    /// Test if the outcome is a success.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Success(..))
    }

    /// Test if the outcome is a success whose value matches the predicate.
    #[inline]
    pub fn is_success_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Success(value) => f(value),
            Failure(..) => false,
        }
    }

    /// Test if the outcome is a failure.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Failure(..))
    }

    /// Test if the outcome is a failure whose value matches the predicate.
    #[inline]
    pub fn is_failure_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Success(..) => false,
            Failure(error) => f(error),
        }
    }

    /// Convert into an [`Option`] of the success value, discarding any
    /// failure.
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Success(value) => Some(value),
            Failure(..) => None,
        }
    }

    /// Convert into an [`Option`] of the failure value, discarding any
    /// success.
    #[inline]
    pub fn failure(self) -> Option<E> {
        match self {
            Success(..) => None,
            Failure(error) => Some(error),
        }
    }

    /// Convert into a standard [`Result`].
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(error),
        }
    }

    /// Borrow the payload of whichever variant is present.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Mutably borrow the payload of whichever variant is present.
    ///
    /// The variant itself cannot be changed through the borrow.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(error),
        }
    }

    /// Borrow the success value through [`Deref`].
    ///
    /// ```
    /// use outcome::{success, Outcome};
    ///
    /// let outcome: Outcome<String, u32> = success(String::from("hello"));
    /// let borrowed: Outcome<&str, &u32> = outcome.as_deref();
    /// assert_eq!(borrowed, success("hello"));
    /// ```
    #[inline]
    pub fn as_deref(&self) -> Outcome<&T::Target, &E>
    where
        T: Deref,
    {
        match self {
            Success(value) => Success(value.deref()),
            Failure(error) => Failure(error),
        }
    }

    /// Apply `f` to the success value, leaving a failure untouched.
    ///
    /// ```
    /// use outcome::{failure, success, Outcome};
    ///
    /// let ok: Outcome<u32, &str> = success(1);
    /// assert_eq!(ok.map(|v| v + 1), success(2));
    ///
    /// let err: Outcome<u32, &str> = failure("bad");
    /// assert_eq!(err.map(|v| v + 1), failure("bad"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => Success(f(value)),
            Failure(error) => Failure(error),
        }
    }

    /// Apply `f` to the failure value, leaving a success untouched.
    #[inline]
    pub fn map_failure<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => Failure(op(error)),
        }
    }

    /// Apply `f` to the success value, or return `default` on failure.
    ///
    /// The default is evaluated eagerly. Use [`map_or_else`] to compute it
    /// lazily.
    ///
    /// [`map_or_else`]: Outcome::map_or_else
    #[inline]
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => f(value),
            Failure(..) => default,
        }
    }

    /// Apply `f` to the success value, or `on_failure` to the failure value.
    #[inline]
    pub fn map_or_else<U, D, F>(self, on_failure: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Success(value) => f(value),
            Failure(error) => on_failure(error),
        }
    }

    /// Reduce the outcome to a single value by handling both variants.
    ///
    /// Exactly one of the handlers is called.
    ///
    /// ```
    /// use outcome::{failure, success, Outcome};
    ///
    /// let describe = |outcome: Outcome<u32, &str>| {
    ///     outcome.fold(|v| format!("S:{v}"), |e| format!("F:{e}"))
    /// };
    ///
    /// assert_eq!(describe(success(10)), "S:10");
    /// assert_eq!(describe(failure("bad")), "F:bad");
    /// ```
    #[inline]
    pub fn fold<U, S, F>(self, on_success: S, on_failure: F) -> U
    where
        S: FnOnce(T) -> U,
        F: FnOnce(E) -> U,
    {
        match self {
            Success(value) => on_success(value),
            Failure(error) => on_failure(error),
        }
    }

    /// Call `f` with a reference to the success value, then return the
    /// outcome as is.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Success(value) = &self {
            f(value);
        }

        self
    }

    /// Call `f` with a reference to the failure value, then return the
    /// outcome as is.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Failure(error) = &self {
            f(error);
        }

        self
    }

    /// Iterate over the success value, if any.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().success(),
        }
    }

    /// Mutably iterate over the success value, if any.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.as_mut().success(),
        }
    }

    /// Return `other` if this is a success, otherwise hand back the failure.
    ///
    /// ```
    /// use outcome::{failure, success, Outcome};
    ///
    /// let ok: Outcome<u32, &str> = success(5);
    /// assert_eq!(ok.and(success::<_, &str>("x")), success("x"));
    ///
    /// let err: Outcome<u32, &str> = failure("e");
    /// assert_eq!(err.and(success::<_, &str>("x")), failure("e"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Success(..) => other,
            Failure(error) => Failure(error),
        }
    }

    /// Chain a fallible operation on the success value.
    ///
    /// If `op` itself fails the chain becomes a failure from that point on. A
    /// failure is handed back without calling `op`.
    #[inline]
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Success(value) => op(value),
            Failure(error) => Failure(error),
        }
    }

    /// Return the success as is, otherwise return `other`.
    ///
    /// ```
    /// use outcome::{failure, success, Outcome};
    ///
    /// let ok: Outcome<u32, &str> = success(5);
    /// assert_eq!(ok.or(failure::<u32, u32>(1)), success(5));
    ///
    /// let err: Outcome<u32, &str> = failure("e");
    /// assert_eq!(err.or(success::<u32, u32>(1)), success(1));
    /// ```
    #[inline]
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Success(value) => Success(value),
            Failure(..) => other,
        }
    }

    /// Recover from a failure by calling `op` with the failure value.
    ///
    /// A success is handed back without calling `op`.
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> Outcome<T, F>,
    {
        match self {
            Success(value) => Success(value),
            Failure(error) => op(error),
        }
    }

    /// Return the success value, or `default` on failure.
    ///
    /// The default is evaluated eagerly. Use [`unwrap_or_else`] to compute it
    /// lazily.
    ///
    /// [`unwrap_or_else`]: Outcome::unwrap_or_else
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Success(value) => value,
            Failure(..) => default,
        }
    }

    /// Return the success value, or compute one from the failure value.
    #[inline]
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Success(value) => value,
            Failure(error) => op(error),
        }
    }

    /// Return the success value, or the default value of `T` on failure.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Success(value) => value,
            Failure(..) => T::default(),
        }
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] payload if the outcome is a failure. The
    /// message describes the failure value, which is preserved in the error.
    ///
    /// # Bounds
    ///
    /// The failure value ends up in the panic payload, so it must be
    /// `Debug + Send + 'static` even when the outcome is a success. For
    /// borrowed or `!Send` failures use [`into_result`] or [`unwrap_or_else`].
    ///
    /// ```
    /// use outcome::{success, Outcome};
    ///
    /// let outcome: Outcome<u32, &str> = success(2);
    /// assert_eq!(outcome.unwrap_success(), 2);
    /// ```
    ///
    /// ```should_panic
    /// use outcome::{failure, Outcome};
    ///
    /// let outcome: Outcome<u32, &str> = failure("boom");
    /// outcome.unwrap_success(); // panics
    /// ```
    ///
    /// [`into_result`]: Outcome::into_result
    /// [`unwrap_or_else`]: Outcome::unwrap_or_else
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> T
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Success(value) => value,
            Failure(error) => UnwrapError::new(UnwrapKind::Success, error).raise(),
        }
    }

    /// Return the success value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] payload carrying `message` verbatim if
    /// the outcome is a failure. The failure value must be `Send + 'static`
    /// for the same reason as in [`unwrap_success`].
    ///
    /// [`unwrap_success`]: Outcome::unwrap_success
    #[inline]
    #[track_caller]
    pub fn expect_success(self, message: &str) -> T
    where
        E: Send + 'static,
    {
        match self {
            Success(value) => value,
            Failure(error) => {
                UnwrapError::with_message(UnwrapKind::Success, message, error).raise()
            }
        }
    }

    /// Return the failure value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] payload if the outcome is a success. The
    /// message describes the success value, which is preserved in the error.
    ///
    /// # Bounds
    ///
    /// The success value ends up in the panic payload, so it must be
    /// `Debug + Send + 'static` even when the outcome is a failure. For
    /// borrowed or `!Send` values use [`into_result`] or match on the outcome.
    ///
    /// [`into_result`]: Outcome::into_result
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> E
    where
        T: fmt::Debug + Send + 'static,
    {
        match self {
            Success(value) => UnwrapError::new(UnwrapKind::Failure, value).raise(),
            Failure(error) => error,
        }
    }

    /// Return the failure value.
    ///
    /// # Panics
    ///
    /// Panics with an [`UnwrapError`] payload carrying `message` verbatim if
    /// the outcome is a success. The success value must be `Send + 'static`
    /// for the same reason as in [`unwrap_failure`].
    ///
    /// [`unwrap_failure`]: Outcome::unwrap_failure
    #[inline]
    #[track_caller]
    pub fn expect_failure(self, message: &str) -> E
    where
        T: Send + 'static,
    {
        match self {
            Success(value) => {
                UnwrapError::with_message(UnwrapKind::Failure, message, value).raise()
            }
            Failure(error) => error,
        }
    }

    /// Return the success value, or an [`UnwrapError`] preserving the failure
    /// value.
    ///
    /// This is the non-panicking form of [`unwrap_success`] and has the same
    /// bounds.
    ///
    /// [`unwrap_success`]: Outcome::unwrap_success
    #[inline]
    pub fn try_unwrap_success(self) -> Result<T, UnwrapError>
    where
        E: fmt::Debug + Send + 'static,
    {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(UnwrapError::new(UnwrapKind::Success, error)),
        }
    }

    /// Return the success value, or an [`UnwrapError`] with `message`.
    #[inline]
    pub fn try_expect_success(self, message: &str) -> Result<T, UnwrapError>
    where
        E: Send + 'static,
    {
        match self {
            Success(value) => Ok(value),
            Failure(error) => Err(UnwrapError::with_message(
                UnwrapKind::Success,
                message,
                error,
            )),
        }
    }

    /// Return the failure value, or an [`UnwrapError`] preserving the success
    /// value.
    #[inline]
    pub fn try_unwrap_failure(self) -> Result<E, UnwrapError>
    where
        T: fmt::Debug + Send + 'static,
    {
        match self {
            Success(value) => Err(UnwrapError::new(UnwrapKind::Failure, value)),
            Failure(error) => Ok(error),
        }
    }

    /// Return the failure value, or an [`UnwrapError`] with `message`.
    #[inline]
    pub fn try_expect_failure(self, message: &str) -> Result<E, UnwrapError>
    where
        T: Send + 'static,
    {
        match self {
            Success(value) => Err(UnwrapError::with_message(
                UnwrapKind::Failure,
                message,
                value,
            )),
            Failure(error) => Ok(error),
        }
    }
}

impl<T, E> Outcome<&T, E> {
    /// Copy the borrowed success value.
    #[inline]
    pub fn copied(self) -> Outcome<T, E>
    where
        T: Copy,
    {
        self.map(|value| *value)
    }

    /// Clone the borrowed success value.
    #[inline]
    pub fn cloned(self) -> Outcome<T, E>
    where
        T: Clone,
    {
        self.map(|value| value.clone())
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Remove one level of nesting.
    ///
    /// ```
    /// use outcome::{failure, success, Outcome};
    ///
    /// let nested: Outcome<Outcome<u32, &str>, &str> = success(failure("inner"));
    /// assert_eq!(nested.flatten(), failure("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> Outcome<Option<T>, E> {
    /// Transpose an outcome of an option into an option of an outcome.
    ///
    /// `Success(None)` maps to `None`.
    #[inline]
    pub fn transpose(self) -> Option<Outcome<T, E>> {
        match self {
            Success(Some(value)) => Some(Success(value)),
            Success(None) => None,
            Failure(error) => Some(Failure(error)),
        }
    }
}

impl<T> Outcome<T, Infallible> {
    /// Return the success value of an outcome which cannot fail.
    #[inline]
    pub fn into_success(self) -> T {
        match self {
            Success(value) => value,
            Failure(never) => match never {},
        }
    }

    /// Give an outcome which cannot fail any failure type.
    #[inline]
    pub fn widen_failure<E>(self) -> Outcome<T, E> {
        Success(self.into_success())
    }
}

impl<E> Outcome<Infallible, E> {
    /// Return the failure value of an outcome which cannot succeed.
    #[inline]
    pub fn into_failure(self) -> E {
        match self {
            Success(never) => match never {},
            Failure(error) => error,
        }
    }

    /// Give an outcome which cannot succeed any success type.
    #[inline]
    pub fn widen_success<T>(self) -> Outcome<T, E> {
        Failure(self.into_failure())
    }
}

impl<T, E> fmt::Debug for Outcome<T, E>
where
    T: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Success(value) => f.debug_tuple("Success").field(value).finish(),
            Failure(error) => f.debug_tuple("Failure").field(error).finish(),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Success(value),
            Err(error) => Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

/// Collect an iterator of outcomes.
///
/// Iteration stops at the first failure, which is returned. Otherwise the
/// success values are collected into `V`.
///
/// ```
/// use outcome::{failure, success, Outcome};
///
/// let all: Outcome<Vec<u32>, &str> = vec![success(1), success(2)].into_iter().collect();
/// assert_eq!(all, success(vec![1, 2]));
///
/// let some: Outcome<Vec<u32>, &str> = vec![success(1), failure("bad"), failure("worse")]
///     .into_iter()
///     .collect();
/// assert_eq!(some, failure("bad"));
/// ```
impl<A, E, V> FromIterator<Outcome<A, E>> for Outcome<V, E>
where
    V: FromIterator<A>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<A, E>>,
    {
        let mut failed = None;

        let collected = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Success(value) => Some(value),
                Failure(error) => {
                    failed = Some(error);
                    None
                }
            })
            .collect::<V>();

        match failed {
            Some(error) => Failure(error),
            None => Success(collected),
        }
    }
}

impl<T, E> IntoIterator for Outcome<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.success(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, E> IntoIterator for &'a mut Outcome<T, E> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

macro_rules! impl_iter {
    ($(#[$meta:meta])* $name:ident<$($lt:lifetime,)? $ty:ident>, $item:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<$($lt,)? $ty> {
            inner: Option<$item>,
        }

        impl<$($lt,)? $ty> Iterator for $name<$($lt,)? $ty> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.take()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let len = usize::from(self.inner.is_some());
                (len, Some(len))
            }
        }

        impl<$($lt,)? $ty> DoubleEndedIterator for $name<$($lt,)? $ty> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.take()
            }
        }

        impl<$($lt,)? $ty> ExactSizeIterator for $name<$($lt,)? $ty> {}
        impl<$($lt,)? $ty> FusedIterator for $name<$($lt,)? $ty> {}
    };
}

impl_iter! {
    /// An iterator over a reference to the success value of an [`Outcome`].
    Iter<'a, T>, &'a T
}

impl_iter! {
    /// An iterator over a mutable reference to the success value of an
    /// [`Outcome`].
    IterMut<'a, T>, &'a mut T
}

impl_iter! {
    /// An iterator over the success value of an [`Outcome`].
    IntoIter<T>, T
}

/// Trait used to convert result-like types into an [`Outcome`] by
/// [`outcome_try!`].
///
/// [`outcome_try!`]: crate::outcome_try
#[doc(hidden)]
pub trait TryFromOutcome {
    /// The success type produced by the conversion.
    type Success;
    /// The failure type produced by the conversion.
    type Failure;

    /// The conversion method itself.
    fn try_from_outcome(value: Self) -> Outcome<Self::Success, Self::Failure>;
}

/// Helper to coerce one result-like type into an [`Outcome`].
#[doc(hidden)]
#[inline]
pub fn try_outcome<T>(value: T) -> Outcome<T::Success, T::Failure>
where
    T: TryFromOutcome,
{
    T::try_from_outcome(value)
}

impl<T, E> TryFromOutcome for Outcome<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn try_from_outcome(value: Self) -> Outcome<T, E> {
        value
    }
}

impl<T, E> TryFromOutcome for Result<T, E> {
    type Success = T;
    type Failure = E;

    #[inline]
    fn try_from_outcome(value: Self) -> Outcome<T, E> {
        Outcome::from(value)
    }
}
