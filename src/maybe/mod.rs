//! An optional value with explicit presence and absence.
//!
//! [`Maybe<T>`] is either `Just(value)` or `Nothing`. Every combinator treats
//! `Nothing` as a fixed point: handlers registered for the present case are
//! never invoked on an empty value, so a chain of [`map`](Maybe::map) and
//! [`bind`](Maybe::bind) calls short-circuits at the first absence.
//!
//! # Construction
//!
//! ```
//! use fun::maybe::{Maybe, ToMaybe};
//!
//! let present = 5.to_maybe();
//! let from_option: Maybe<i32> = None.into();
//!
//! assert_eq!(present, Maybe::just(5));
//! assert_eq!(from_option, Maybe::Nothing);
//! ```
//!
//! # Pipelines
//!
//! ```
//! use fun::maybe::ToMaybe;
//!
//! let result = 5.to_maybe().map(|x| x + 1).map(|x| x * 2);
//! assert_eq!(result.value(), Ok(12));
//! ```
//!
//! # Asynchronous Variants
//!
//! Every combinator that takes a handler has an `_async` counterpart whose
//! handler returns a future. With the `async` feature, [`MaybeFutureExt`]
//! offers the same combinators on a future of a `Maybe`, awaiting the
//! receiver before running the handler.

#[cfg(feature = "async")]
mod future_ext;

#[cfg(feature = "async")]
pub use future_ext::{MaybeFutureExt, ToMaybeFuture};

use std::future::Future;

use crate::error::EmptyMaybeError;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// Two values are equal when both are `Nothing`, or both are `Just` with
/// equal payloads. A `Maybe<T>` can also be compared with a bare `T`: it is
/// equal only when present with an equal payload.
///
/// # Examples
///
/// ```
/// use fun::maybe::Maybe;
///
/// assert_eq!(Maybe::just(3), 3);
/// assert_ne!(Maybe::<i32>::Nothing, 3);
/// assert_eq!(Maybe::<i32>::Nothing, Maybe::Nothing);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    #[default]
    Nothing,
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);

// =============================================================================
// Construction and access
// =============================================================================

impl<T> Maybe<T> {
    /// Creates a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates a present value. Same as [`Maybe::just`].
    #[inline]
    pub const fn new(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn empty() -> Self {
        Self::Nothing
    }

    /// Returns `true` for `Just`.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for `Nothing`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns the payload.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMaybeError`] when the value is `Nothing`.
    #[inline]
    pub fn value(self) -> Result<T, EmptyMaybeError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(EmptyMaybeError),
        }
    }

    /// Borrows the payload.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyMaybeError`] when the value is `Nothing`.
    #[inline]
    pub const fn value_ref(&self) -> Result<&T, EmptyMaybeError> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(EmptyMaybeError),
        }
    }

    /// Returns the payload, or `default` when absent.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the payload, or the result of `default` when absent.
    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Returns the payload, or `T::default()` when absent.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    /// Borrows the payload while keeping the presence.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

// =============================================================================
// Match
// =============================================================================

impl<T> Maybe<T> {
    /// Invokes `some` with the payload when present and `none` otherwise.
    ///
    /// Both handlers must be supplied; exactly one runs. Returning `()` from
    /// both covers side-effect-only handling.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::maybe::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| maybe.match_with(|n| format!("got {n}"), || "nothing".to_string());
    ///
    /// assert_eq!(describe(Maybe::just(1)), "got 1");
    /// assert_eq!(describe(Maybe::Nothing), "nothing");
    /// ```
    #[inline]
    pub fn match_with<R, OnJust, OnNothing>(self, some: OnJust, none: OnNothing) -> R
    where
        OnJust: FnOnce(T) -> R,
        OnNothing: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => some(value),
            Self::Nothing => none(),
        }
    }

    /// Like [`match_with`](Maybe::match_with) with asynchronous handlers.
    pub async fn match_async<R, OnJust, JustFuture, OnNothing, NothingFuture>(self, some: OnJust, none: OnNothing) -> R
    where
        OnJust: FnOnce(T) -> JustFuture,
        JustFuture: Future<Output = R>,
        OnNothing: FnOnce() -> NothingFuture,
        NothingFuture: Future<Output = R>,
    {
        match self {
            Self::Just(value) => some(value).await,
            Self::Nothing => none().await,
        }
    }

    /// Like [`match_with`](Maybe::match_with) with an asynchronous `some`
    /// handler and a synchronous `none` handler.
    pub async fn match_some_async<R, OnJust, JustFuture, OnNothing>(self, some: OnJust, none: OnNothing) -> R
    where
        OnJust: FnOnce(T) -> JustFuture,
        JustFuture: Future<Output = R>,
        OnNothing: FnOnce() -> R,
    {
        match self {
            Self::Just(value) => some(value).await,
            Self::Nothing => none(),
        }
    }

    /// Like [`match_with`](Maybe::match_with) with a synchronous `some`
    /// handler and an asynchronous `none` handler.
    pub async fn match_none_async<R, OnJust, OnNothing, NothingFuture>(self, some: OnJust, none: OnNothing) -> R
    where
        OnJust: FnOnce(T) -> R,
        OnNothing: FnOnce() -> NothingFuture,
        NothingFuture: Future<Output = R>,
    {
        match self {
            Self::Just(value) => some(value),
            Self::Nothing => none().await,
        }
    }
}

// =============================================================================
// Combinators
// =============================================================================

impl<T> Maybe<T> {
    /// Transforms the payload. `Nothing` stays `Nothing` and `function` is
    /// not invoked.
    #[inline]
    pub fn map<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Transforms the payload with an asynchronous function.
    pub async fn map_async<R, F, Fut>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value).await),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Replaces a present value with the `Maybe` returned by `function`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::maybe::Maybe;
    ///
    /// let parse = |text: &str| Maybe::from(text.parse::<i32>().ok());
    ///
    /// assert_eq!(Maybe::just("7").bind(parse), Maybe::just(7));
    /// assert_eq!(Maybe::just("x").bind(parse), Maybe::Nothing);
    /// assert_eq!(Maybe::<&str>::Nothing.bind(parse), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn bind<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Binds with an asynchronous function.
    pub async fn bind_async<R, F, Fut>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<R>>,
    {
        match self {
            Self::Just(value) => function(value).await,
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Binds a present value with `some`, and replaces `Nothing` with the
    /// result of `none`.
    #[inline]
    pub fn bind_or_else<R, OnJust, OnNothing>(self, some: OnJust, none: OnNothing) -> Maybe<R>
    where
        OnJust: FnOnce(T) -> Maybe<R>,
        OnNothing: FnOnce() -> Maybe<R>,
    {
        self.match_with(some, none)
    }

    /// Like [`bind_or_else`](Maybe::bind_or_else) with asynchronous handlers.
    pub async fn bind_or_else_async<R, OnJust, JustFuture, OnNothing, NothingFuture>(
        self,
        some: OnJust,
        none: OnNothing,
    ) -> Maybe<R>
    where
        OnJust: FnOnce(T) -> JustFuture,
        JustFuture: Future<Output = Maybe<R>>,
        OnNothing: FnOnce() -> NothingFuture,
        NothingFuture: Future<Output = Maybe<R>>,
    {
        self.match_async(some, none).await
    }

    /// Runs `action` on the payload when present and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tee_map<F>(self, action: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            action(value);
        }
        self
    }

    /// Awaits `action` on the payload when present, then yields `self`.
    ///
    /// The future returned by `action` may not borrow the payload; copy what
    /// it needs out of the reference first.
    pub async fn tee_map_async<F, Fut>(self, action: F) -> Self
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Self::Just(value) = &self {
            action(value).await;
        }
        self
    }

    /// Comprehension support: binds `function`, then combines both payloads
    /// with `select`.
    ///
    /// Equivalent to `self.bind(|x| function(&x).map(|y| select(x, y)))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::maybe::Maybe;
    ///
    /// let pair = Maybe::just(2).select_many(|x| Maybe::just(x * 10), |x, y| (x, y));
    /// assert_eq!(pair, Maybe::just((2, 20)));
    /// ```
    pub fn select_many<U, R, F, S>(self, function: F, select: S) -> Maybe<R>
    where
        F: FnOnce(&T) -> Maybe<U>,
        S: FnOnce(T, U) -> R,
    {
        self.bind(|first| function(&first).map(|second| select(first, second)))
    }

    /// Applies a wrapped function to a wrapped argument. The result is
    /// present only if both are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::maybe::Maybe;
    ///
    /// let increment = Maybe::just(|n: i32| n + 1);
    /// assert_eq!(increment.apply(Maybe::just(1)), Maybe::just(2));
    /// assert_eq!(Maybe::just(|n: i32| n + 1).apply(Maybe::Nothing), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn apply<A, B>(self, input: Maybe<A>) -> Maybe<B>
    where
        T: FnOnce(A) -> B,
    {
        match (self, input) {
            (Self::Just(function), Maybe::Just(argument)) => Maybe::Just(function(argument)),
            _ => Maybe::Nothing,
        }
    }

    /// Lifts a plain function over a wrapped argument. Same as
    /// `input.map(function)`.
    #[inline]
    pub fn lift<A, F>(function: F, input: Maybe<A>) -> Self
    where
        F: FnOnce(A) -> T,
    {
        input.map(function)
    }

    /// Awaits the wrapped function, then the wrapped argument, then applies.
    pub async fn apply_async<A, F, FunctionFuture, InputFuture>(function: FunctionFuture, input: InputFuture) -> Self
    where
        F: FnOnce(A) -> T,
        FunctionFuture: Future<Output = Maybe<F>>,
        InputFuture: Future<Output = Maybe<A>>,
    {
        let function = function.await;
        let input = input.await;
        function.apply(input)
    }

    /// Awaits the function, then the wrapped argument, then lifts.
    pub async fn lift_async<A, F, FunctionFuture, InputFuture>(function: FunctionFuture, input: InputFuture) -> Self
    where
        F: FnOnce(A) -> T,
        FunctionFuture: Future<Output = F>,
        InputFuture: Future<Output = Maybe<A>>,
    {
        let function = function.await;
        let input = input.await;
        Self::lift(function, input)
    }
}

// =============================================================================
// Conversions and equality
// =============================================================================

/// Wraps any value in `Just`.
///
/// Every type gets this conversion, `Option` included: `None.to_maybe()` is
/// `Just(None)`, not `Nothing`. Use [`Maybe::from`] to turn an `Option` into
/// the matching `Just` or `Nothing`.
///
/// # Examples
///
/// ```
/// use fun::maybe::{Maybe, ToMaybe};
///
/// assert_eq!("text".to_maybe(), Maybe::just("text"));
///
/// assert_eq!(None::<i32>.to_maybe(), Maybe::just(None));
/// assert_eq!(Maybe::from(None::<i32>), Maybe::Nothing);
/// ```
pub trait ToMaybe: Sized {
    /// Wraps `self` in `Just`.
    #[inline]
    fn to_maybe(self) -> Maybe<Self> {
        Maybe::Just(self)
    }
}

impl<T> ToMaybe for T {}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T: PartialEq> PartialEq<T> for Maybe<T> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        matches!(self, Self::Just(value) if value == other)
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn pure(value: T) -> Self {
        Self::Just(value)
    }

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        self.bind(function)
    }
}
