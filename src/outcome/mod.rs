//! A computation that either succeeded or failed.
//!
//! [`Outcome<S, F>`] carries exactly one payload: a success value `S` or a
//! failure value `F`. Failures short-circuit every chain of
//! [`map`](Outcome::map) and [`bind`](Outcome::bind) calls, so the handler
//! for a later step is never invoked once a step has failed.
//!
//! The `try_*` entry points ([`Outcome::try_with`], [`Outcome::try_catch`]
//! and friends) turn a fallible computation into an `Outcome`, converting
//! the error it reports with a handler.
//!
//! # Examples
//!
//! ```
//! use fun::outcome::Outcome;
//!
//! let parsed = Outcome::try_with(|| "42".parse::<i32>(), |error| error.to_string());
//! let doubled = parsed.map(|n| n * 2);
//!
//! assert_eq!(doubled.success(), Ok(84));
//!
//! let parsed = Outcome::try_with(|| "abc".parse::<i32>(), |error| error.to_string());
//! assert_eq!(parsed.failure().as_deref(), Ok("invalid digit found in string"));
//! ```

mod attempt;
#[cfg(feature = "async")]
mod future_ext;

#[cfg(feature = "async")]
pub use future_ext::OutcomeFutureExt;

use std::future::Future;

use crate::error::{Branch, OutcomeAccessError};
use crate::maybe::Maybe;
use crate::typeclass::{Functor, Monad, TypeConstructor};

/// Either a success value `S` or a failure value `F`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, F> {
    /// The computation succeeded.
    Success(S),
    /// The computation failed.
    Failure(F),
}

static_assertions::assert_impl_all!(Outcome<i32, &'static str>: Send, Sync, Copy);
static_assertions::assert_not_impl_any!(Outcome<std::rc::Rc<i32>, String>: Send, Sync);

// =============================================================================
// Construction and access
// =============================================================================

impl<S, F> Outcome<S, F> {
    /// Creates a successful outcome.
    #[inline]
    pub const fn succeed(value: S) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome.
    #[inline]
    pub const fn fail(failure: F) -> Self {
        Self::Failure(failure)
    }

    /// Returns `true` for `Success`.
    #[inline]
    pub const fn is_successful(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for `Failure`.
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeAccessError`] when the outcome failed.
    #[inline]
    pub fn success(self) -> Result<S, OutcomeAccessError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(OutcomeAccessError::new(Branch::Success)),
        }
    }

    /// Returns the failure value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeAccessError`] when the outcome succeeded.
    #[inline]
    pub fn failure(self) -> Result<F, OutcomeAccessError> {
        match self {
            Self::Success(_) => Err(OutcomeAccessError::new(Branch::Failure)),
            Self::Failure(failure) => Ok(failure),
        }
    }

    /// Borrows the success value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeAccessError`] when the outcome failed.
    #[inline]
    pub const fn success_ref(&self) -> Result<&S, OutcomeAccessError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(OutcomeAccessError::new(Branch::Success)),
        }
    }

    /// Borrows the failure value.
    ///
    /// # Errors
    ///
    /// Returns [`OutcomeAccessError`] when the outcome succeeded.
    #[inline]
    pub const fn failure_ref(&self) -> Result<&F, OutcomeAccessError> {
        match self {
            Self::Success(_) => Err(OutcomeAccessError::new(Branch::Failure)),
            Self::Failure(failure) => Ok(failure),
        }
    }

    /// Borrows both branches.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }

    /// Keeps the success value and drops a failure.
    #[inline]
    pub fn to_maybe(self) -> Maybe<S> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Match
// =============================================================================

impl<S, F> Outcome<S, F> {
    /// Invokes `success` or `failure` with the active payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::outcome::Outcome;
    ///
    /// let report = |outcome: Outcome<u8, &str>| outcome.match_with(|n| n.to_string(), |e| format!("error: {e}"));
    ///
    /// assert_eq!(report(Outcome::succeed(3)), "3");
    /// assert_eq!(report(Outcome::fail("disk full")), "error: disk full");
    /// ```
    #[inline]
    pub fn match_with<R, OnSuccess, OnFailure>(self, success: OnSuccess, failure: OnFailure) -> R
    where
        OnSuccess: FnOnce(S) -> R,
        OnFailure: FnOnce(F) -> R,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(error) => failure(error),
        }
    }

    /// Like [`match_with`](Outcome::match_with) with asynchronous handlers.
    pub async fn match_async<R, OnSuccess, SuccessFuture, OnFailure, FailureFuture>(
        self,
        success: OnSuccess,
        failure: OnFailure,
    ) -> R
    where
        OnSuccess: FnOnce(S) -> SuccessFuture,
        SuccessFuture: Future<Output = R>,
        OnFailure: FnOnce(F) -> FailureFuture,
        FailureFuture: Future<Output = R>,
    {
        match self {
            Self::Success(value) => success(value).await,
            Self::Failure(error) => failure(error).await,
        }
    }

    /// Asynchronous `success` handler, synchronous `failure` handler.
    pub async fn match_success_async<R, OnSuccess, SuccessFuture, OnFailure>(
        self,
        success: OnSuccess,
        failure: OnFailure,
    ) -> R
    where
        OnSuccess: FnOnce(S) -> SuccessFuture,
        SuccessFuture: Future<Output = R>,
        OnFailure: FnOnce(F) -> R,
    {
        match self {
            Self::Success(value) => success(value).await,
            Self::Failure(error) => failure(error),
        }
    }

    /// Synchronous `success` handler, asynchronous `failure` handler.
    pub async fn match_failure_async<R, OnSuccess, OnFailure, FailureFuture>(
        self,
        success: OnSuccess,
        failure: OnFailure,
    ) -> R
    where
        OnSuccess: FnOnce(S) -> R,
        OnFailure: FnOnce(F) -> FailureFuture,
        FailureFuture: Future<Output = R>,
    {
        match self {
            Self::Success(value) => success(value),
            Self::Failure(error) => failure(error).await,
        }
    }
}

// =============================================================================
// Map
// =============================================================================

impl<S, F> Outcome<S, F> {
    /// Transforms the success value. Same as [`map_success`](Outcome::map_success).
    #[inline]
    pub fn map<R, Function>(self, function: Function) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> R,
    {
        self.map_success(function)
    }

    /// Transforms the success value; a failure passes through untouched.
    #[inline]
    pub fn map_success<R, Function>(self, function: Function) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> R,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure value; a success passes through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::outcome::Outcome;
    ///
    /// let failed: Outcome<i32, &str> = Outcome::fail("404");
    /// assert_eq!(failed.map_failure(str::len), Outcome::fail(3));
    /// ```
    #[inline]
    pub fn map_failure<G, Function>(self, function: Function) -> Outcome<S, G>
    where
        Function: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Transforms the success value with an asynchronous function.
    pub async fn map_async<R, Function, Fut>(self, function: Function) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = R>,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value).await),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transforms the failure value with an asynchronous function.
    pub async fn map_failure_async<G, Function, Fut>(self, function: Function) -> Outcome<S, G>
    where
        Function: FnOnce(F) -> Fut,
        Fut: Future<Output = G>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error).await),
        }
    }
}

// =============================================================================
// Bind
// =============================================================================

impl<S, F> Outcome<S, F> {
    /// Replaces a success with the outcome returned by `function`.
    ///
    /// A failure short-circuits: `function` is not invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::outcome::Outcome;
    ///
    /// let positive = |n: i32| if n > 0 { Outcome::succeed(n) } else { Outcome::fail("not positive") };
    ///
    /// assert_eq!(Outcome::succeed(5).bind(positive), Outcome::succeed(5));
    /// assert_eq!(Outcome::succeed(-5).bind(positive), Outcome::fail("not positive"));
    /// ```
    #[inline]
    pub fn bind<R, Function>(self, function: Function) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> Outcome<R, F>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Binds with an asynchronous function.
    pub async fn bind_async<R, Function, Fut>(self, function: Function) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<R, F>>,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Binds a success with `function`, or remaps an existing failure into
    /// the failure type of `function`.
    #[inline]
    pub fn bind_or_map_failure<R, G, Function, MapFailure>(
        self,
        function: Function,
        map_failure: MapFailure,
    ) -> Outcome<R, G>
    where
        Function: FnOnce(S) -> Outcome<R, G>,
        MapFailure: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(map_failure(error)),
        }
    }

    /// Like [`bind_or_map_failure`](Outcome::bind_or_map_failure) with an
    /// asynchronous binder.
    pub async fn bind_or_map_failure_async<R, G, Function, Fut, MapFailure>(
        self,
        function: Function,
        map_failure: MapFailure,
    ) -> Outcome<R, G>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<R, G>>,
        MapFailure: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => function(value).await,
            Self::Failure(error) => Outcome::Failure(map_failure(error)),
        }
    }

    /// Runs a fallible `function` on the success value, converting its error
    /// with `handler`. An existing failure passes through untouched.
    pub fn bind_try<R, E, Function, Handler>(self, function: Function, handler: Handler) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> Result<R, E>,
        Handler: FnOnce(E) -> F,
    {
        self.bind(|value| Outcome::try_with(|| function(value), handler))
    }

    /// Like [`bind_try`](Outcome::bind_try) for a function that may also
    /// return no value; `Ok(None)` becomes `Failure(if_null())`.
    pub fn bind_try_nullable<R, E, Function, Handler, IfNull>(
        self,
        function: Function,
        handler: Handler,
        if_null: IfNull,
    ) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> Result<Option<R>, E>,
        Handler: FnOnce(E) -> F,
        IfNull: FnOnce() -> F,
    {
        self.bind(|value| Outcome::try_nullable(|| function(value), handler, if_null))
    }

    /// Like [`bind_try`](Outcome::bind_try) with an asynchronous function.
    pub async fn bind_try_async<R, E, Function, Fut, Handler>(self, function: Function, handler: Handler) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        Handler: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::try_with_async(|| function(value), handler).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`bind_try_nullable`](Outcome::bind_try_nullable) with an
    /// asynchronous function.
    pub async fn bind_try_nullable_async<R, E, Function, Fut, Handler, IfNull>(
        self,
        function: Function,
        handler: Handler,
        if_null: IfNull,
    ) -> Outcome<R, F>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = Result<Option<R>, E>>,
        Handler: FnOnce(E) -> F,
        IfNull: FnOnce() -> F,
    {
        match self {
            Self::Success(value) => Outcome::try_nullable_async(|| function(value), handler, if_null).await,
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

// =============================================================================
// Side effects and comprehension
// =============================================================================

impl<S, F> Outcome<S, F> {
    /// Validates the success value with `function` without consuming it.
    ///
    /// If the validation succeeds the original success is returned; if it
    /// fails its failure is returned. `function` is never invoked on a
    /// failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::outcome::Outcome;
    ///
    /// let non_empty = |name: &String| {
    ///     if name.is_empty() { Outcome::fail("empty name") } else { Outcome::succeed(()) }
    /// };
    ///
    /// assert_eq!(Outcome::succeed("ada".to_string()).tee_bind(non_empty), Outcome::succeed("ada".to_string()));
    /// assert_eq!(Outcome::succeed(String::new()).tee_bind(non_empty), Outcome::fail("empty name"));
    /// ```
    pub fn tee_bind<U, Function>(self, function: Function) -> Self
    where
        Function: FnOnce(&S) -> Outcome<U, F>,
    {
        match self {
            Self::Success(value) => match function(&value) {
                Outcome::Success(_) => Self::Success(value),
                Outcome::Failure(error) => Self::Failure(error),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Like [`tee_bind`](Outcome::tee_bind) with an asynchronous validation.
    ///
    /// The future returned by `function` may not borrow the success value.
    pub async fn tee_bind_async<U, Function, Fut>(self, function: Function) -> Self
    where
        Function: FnOnce(&S) -> Fut,
        Fut: Future<Output = Outcome<U, F>>,
    {
        match self {
            Self::Success(value) => match function(&value).await {
                Outcome::Success(_) => Self::Success(value),
                Outcome::Failure(error) => Self::Failure(error),
            },
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Runs `action` on the success value and returns `self` unchanged.
    #[inline]
    #[must_use]
    pub fn tee<Action>(self, action: Action) -> Self
    where
        Action: FnOnce(&S),
    {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Comprehension support: binds `function`, then combines both success
    /// values with `select`.
    pub fn select_many<U, R, Function, Select>(self, function: Function, select: Select) -> Outcome<R, F>
    where
        Function: FnOnce(&S) -> Outcome<U, F>,
        Select: FnOnce(S, U) -> R,
    {
        self.bind(|first| function(&first).map(|second| select(first, second)))
    }

    /// Applies a successful function to a successful argument.
    ///
    /// When both operands failed, the function's failure is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::outcome::Outcome;
    ///
    /// let add_one: Outcome<fn(i32) -> i32, &str> = Outcome::succeed(|n| n + 1);
    /// assert_eq!(add_one.apply(Outcome::succeed(1)), Outcome::succeed(2));
    ///
    /// let broken: Outcome<fn(i32) -> i32, &str> = Outcome::fail("no function");
    /// assert_eq!(broken.apply(Outcome::fail("no argument")), Outcome::fail("no function"));
    /// ```
    #[inline]
    pub fn apply<A, B>(self, input: Outcome<A, F>) -> Outcome<B, F>
    where
        S: FnOnce(A) -> B,
    {
        match (self, input) {
            (Self::Success(function), Outcome::Success(argument)) => Outcome::Success(function(argument)),
            (Self::Failure(error), _) | (Self::Success(_), Outcome::Failure(error)) => Outcome::Failure(error),
        }
    }

    /// Lifts a plain function over a wrapped argument.
    #[inline]
    pub fn lift<A, Function>(function: Function, input: Outcome<A, F>) -> Self
    where
        Function: FnOnce(A) -> S,
    {
        input.map(function)
    }
}

impl<T> Maybe<T> {
    /// Converts a present value into `Success` and an absent one into
    /// `Failure(if_empty())`. `if_empty` only runs when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::maybe::Maybe;
    /// use fun::outcome::Outcome;
    ///
    /// assert_eq!(Maybe::just(1).to_outcome(|| "missing"), Outcome::succeed(1));
    /// assert_eq!(Maybe::<i32>::Nothing.to_outcome(|| "missing"), Outcome::fail("missing"));
    /// ```
    #[inline]
    pub fn to_outcome<F, IfEmpty>(self, if_empty: IfEmpty) -> Outcome<T, F>
    where
        IfEmpty: FnOnce() -> F,
    {
        match self {
            Self::Just(value) => Outcome::Success(value),
            Self::Nothing => Outcome::Failure(if_empty()),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<S, F> TypeConstructor for Outcome<S, F> {
    type Inner = S;
    type WithType<B> = Outcome<B, F>;
}

impl<S, F> Functor for Outcome<S, F> {
    #[inline]
    fn fmap<B, Function>(self, function: Function) -> Outcome<B, F>
    where
        Function: FnOnce(S) -> B,
    {
        self.map_success(function)
    }
}

impl<S, F> Monad for Outcome<S, F> {
    #[inline]
    fn pure(value: S) -> Self {
        Self::Success(value)
    }

    #[inline]
    fn flat_map<B, Function>(self, function: Function) -> Outcome<B, F>
    where
        Function: FnOnce(S) -> Outcome<B, F>,
    {
        self.bind(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Outcome::succeed(1), true)]
    #[case(Outcome::fail("e"), false)]
    fn exactly_one_branch_is_accessible(#[case] outcome: Outcome<i32, &str>, #[case] successful: bool) {
        assert_eq!(outcome.is_successful(), successful);
        assert_eq!(outcome.is_failed(), !successful);
        assert_eq!(outcome.success_ref().is_ok(), successful);
        assert_eq!(outcome.failure_ref().is_ok(), !successful);
    }

    #[rstest]
    fn wrong_branch_access_names_the_request() {
        let succeeded: Outcome<i32, &str> = Outcome::succeed(1);
        assert_eq!(succeeded.failure(), Err(OutcomeAccessError::new(Branch::Failure)));

        let failed: Outcome<i32, &str> = Outcome::fail("e");
        assert_eq!(failed.success(), Err(OutcomeAccessError::new(Branch::Success)));
    }

    #[rstest]
    fn bind_never_invokes_binder_on_failure() {
        let failed: Outcome<i32, &str> = Outcome::fail("first");
        let result = failed.bind(|_| -> Outcome<i32, &'static str> { panic!("must not run") });
        assert_eq!(result, Outcome::fail("first"));
    }

    #[rstest]
    fn bind_or_map_failure_remaps_failure() {
        let failed: Outcome<i32, &str> = Outcome::fail("oops");
        let result = failed.bind_or_map_failure(|n| Outcome::<i32, usize>::succeed(n), str::len);
        assert_eq!(result, Outcome::fail(4));
    }

    #[rstest]
    fn bind_try_converts_error() {
        let parsed = Outcome::<&str, String>::succeed("x1").bind_try(str::parse::<u8>, |error| error.to_string());
        assert_eq!(parsed, Outcome::fail("invalid digit found in string".to_string()));
    }

    #[rstest]
    #[case(Ok(Some(3)), Outcome::succeed(3))]
    #[case(Ok(None), Outcome::fail("null"))]
    #[case(Err("bad"), Outcome::fail("error: bad"))]
    fn bind_try_nullable_distinguishes_null(
        #[case] produced: Result<Option<i32>, &'static str>,
        #[case] expected: Outcome<i32, &'static str>,
    ) {
        let result = Outcome::<(), &str>::succeed(()).bind_try_nullable(
            |()| produced,
            |error| if error == "bad" { "error: bad" } else { "other" },
            || "null",
        );
        assert_eq!(result, expected);
    }

    #[rstest]
    fn tee_bind_keeps_original_success() {
        let result = Outcome::<i32, &str>::succeed(10).tee_bind(|_| Outcome::succeed("ignored"));
        assert_eq!(result, Outcome::succeed(10));
    }

    #[rstest]
    fn tee_sees_only_success() {
        let mut seen = Vec::new();
        let _ = Outcome::<i32, &str>::succeed(1).tee(|n| seen.push(*n));
        let _ = Outcome::<i32, &str>::fail("e").tee(|n| seen.push(*n));
        assert_eq!(seen, vec![1]);
    }

    #[rstest]
    fn apply_prefers_function_failure() {
        let function: Outcome<fn(i32) -> i32, &str> = Outcome::fail("f");
        assert_eq!(function.apply(Outcome::fail("a")), Outcome::fail("f"));

        let function: Outcome<fn(i32) -> i32, &str> = Outcome::succeed(|n| n);
        assert_eq!(function.apply(Outcome::fail("a")), Outcome::fail("a"));
    }

    #[rstest]
    fn maybe_to_outcome_only_calls_if_empty_when_absent() {
        let present = Maybe::just(1).to_outcome(|| -> &'static str { panic!("must not run") });
        assert_eq!(present, Outcome::succeed(1));
    }

    #[rstest]
    fn result_round_trip() {
        let outcome: Outcome<i32, String> = Err::<i32, String>("e".into()).into();
        assert_eq!(outcome.clone().to_maybe(), Maybe::Nothing);
        assert_eq!(outcome.into_result(), Err("e".to_string()));
    }

    #[tokio::test]
    async fn async_matches_cover_every_combination() {
        let success = Outcome::<i32, &str>::succeed(1);
        let failure = Outcome::<i32, &str>::fail("e");

        let both = success.match_async(|n| async move { n }, |_| async { 0 }).await;
        let first = failure.match_success_async(|n| async move { n }, |_| -1).await;
        let second = failure.match_failure_async(|n| n, |_| async { -2 }).await;

        assert_eq!((both, first, second), (1, -1, -2));
    }

    #[tokio::test]
    async fn async_combinators_short_circuit() {
        let failed = Outcome::<i32, &str>::fail("stop");
        let result = failed
            .map_async(|n| async move { n + 1 })
            .await
            .bind_async(|n| async move { Outcome::succeed(n * 2) })
            .await
            .map_failure_async(|error| async move { error.len() })
            .await;
        assert_eq!(result, Outcome::fail(4));
    }

    #[tokio::test]
    async fn tee_bind_async_returns_validation_failure() {
        let result = Outcome::<i32, &str>::succeed(0)
            .tee_bind_async(|n| {
                let n = *n;
                async move { if n == 0 { Outcome::<(), &str>::fail("zero") } else { Outcome::succeed(()) } }
            })
            .await;
        assert_eq!(result, Outcome::fail("zero"));
    }
}
