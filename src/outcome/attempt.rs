//! Entry points that run a fallible computation and capture its error as a
//! failure.
//!
//! `try_with` converts every error of the computation, whose type is fixed by
//! its signature. `try_catch::<E>` works on [`anyhow::Error`] and converts
//! only errors that downcast to `E`; everything else propagates unchanged
//! through the outer `Result`, so callers can `?` it. The `bind_try_catch`
//! family applies the same narrowing to a step of an existing chain.
//!
//! A computation that returns a future reports errors the same way whether
//! the future failed while being created or while being awaited: both are
//! the `Err` the future resolves to.

use std::fmt;
use std::future::Future;

use super::Outcome;

impl<S, F> Outcome<S, F> {
    /// Runs `compute`, converting its error into a failure with `handler`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fun::outcome::Outcome;
    ///
    /// let port = Outcome::try_with(|| "8080".parse::<u16>(), |error| error.to_string());
    /// assert_eq!(port, Outcome::succeed(8080));
    /// ```
    pub fn try_with<E>(compute: impl FnOnce() -> Result<S, E>, handler: impl FnOnce(E) -> F) -> Self {
        match compute() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::converted(error, handler),
        }
    }

    /// Like [`try_with`](Outcome::try_with) for a computation that may return
    /// no value. `Ok(None)` becomes `Failure(if_null())`, which is kept apart
    /// from the error path.
    pub fn try_nullable<E>(
        compute: impl FnOnce() -> Result<Option<S>, E>,
        handler: impl FnOnce(E) -> F,
        if_null: impl FnOnce() -> F,
    ) -> Self {
        match compute() {
            Ok(Some(value)) => Self::Success(value),
            Ok(None) => Self::Failure(if_null()),
            Err(error) => Self::converted(error, handler),
        }
    }

    /// Runs `compute` and converts an error that downcasts to `E` into a
    /// failure. Any other error is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the computation's error when it is not an `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::ParseIntError;
    ///
    /// use fun::outcome::Outcome;
    ///
    /// let caught = Outcome::<i32, String>::try_catch::<ParseIntError>(
    ///     || Ok("nine".parse::<i32>()?),
    ///     |error| error.to_string(),
    /// );
    /// assert!(matches!(caught, Ok(Outcome::Failure(_))));
    ///
    /// let escaped = Outcome::<i32, String>::try_catch::<ParseIntError>(
    ///     || Err(anyhow::anyhow!("connection reset")),
    ///     |error| error.to_string(),
    /// );
    /// assert_eq!(escaped.unwrap_err().to_string(), "connection reset");
    /// ```
    pub fn try_catch<E>(
        compute: impl FnOnce() -> anyhow::Result<S>,
        handler: impl FnOnce(E) -> F,
    ) -> anyhow::Result<Self>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Self::caught(compute(), handler)
    }

    /// The [`anyhow`] counterpart of [`try_nullable`](Outcome::try_nullable).
    ///
    /// # Errors
    ///
    /// Returns the computation's error when it is not an `E`.
    pub fn try_catch_nullable<E>(
        compute: impl FnOnce() -> anyhow::Result<Option<S>>,
        handler: impl FnOnce(E) -> F,
        if_null: impl FnOnce() -> F,
    ) -> anyhow::Result<Self>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match compute() {
            Ok(Some(value)) => Ok(Self::Success(value)),
            Ok(None) => Ok(Self::Failure(if_null())),
            Err(error) => Self::caught(Err(error), handler),
        }
    }

    /// Like [`try_with`](Outcome::try_with) for an asynchronous computation.
    pub async fn try_with_async<E, Fut>(compute: impl FnOnce() -> Fut, handler: impl FnOnce(E) -> F) -> Self
    where
        Fut: Future<Output = Result<S, E>>,
    {
        match compute().await {
            Ok(value) => Self::Success(value),
            Err(error) => Self::converted(error, handler),
        }
    }

    /// Like [`try_nullable`](Outcome::try_nullable) for an asynchronous
    /// computation.
    pub async fn try_nullable_async<E, Fut>(
        compute: impl FnOnce() -> Fut,
        handler: impl FnOnce(E) -> F,
        if_null: impl FnOnce() -> F,
    ) -> Self
    where
        Fut: Future<Output = Result<Option<S>, E>>,
    {
        match compute().await {
            Ok(Some(value)) => Self::Success(value),
            Ok(None) => Self::Failure(if_null()),
            Err(error) => Self::converted(error, handler),
        }
    }

    /// Like [`try_catch`](Outcome::try_catch) for an asynchronous computation.
    ///
    /// # Errors
    ///
    /// Returns the computation's error when it is not an `E`.
    pub async fn try_catch_async<E, Fut>(
        compute: impl FnOnce() -> Fut,
        handler: impl FnOnce(E) -> F,
    ) -> anyhow::Result<Self>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<S>>,
    {
        Self::caught(compute().await, handler)
    }

    /// Like [`try_catch_nullable`](Outcome::try_catch_nullable) for an
    /// asynchronous computation.
    ///
    /// # Errors
    ///
    /// Returns the computation's error when it is not an `E`.
    pub async fn try_catch_nullable_async<E, Fut>(
        compute: impl FnOnce() -> Fut,
        handler: impl FnOnce(E) -> F,
        if_null: impl FnOnce() -> F,
    ) -> anyhow::Result<Self>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Option<S>>>,
    {
        match compute().await {
            Ok(Some(value)) => Ok(Self::Success(value)),
            Ok(None) => Ok(Self::Failure(if_null())),
            Err(error) => Self::caught(Err(error), handler),
        }
    }

    fn converted<E>(error: E, handler: impl FnOnce(E) -> F) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(error_type = std::any::type_name::<E>(), "computation error converted into failure");

        Self::Failure(handler(error))
    }

    fn caught<E>(result: anyhow::Result<S>, handler: impl FnOnce(E) -> F) -> anyhow::Result<Self>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match result {
            Ok(value) => Ok(Self::Success(value)),
            Err(error) => match error.downcast::<E>() {
                Ok(matched) => Ok(Self::converted(matched, handler)),
                Err(other) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(expected = std::any::type_name::<E>(), error = %other, "computation error propagated");

                    Err(other)
                }
            },
        }
    }
}

impl<S, F> Outcome<S, F> {
    /// Runs `function` on the success value and converts an error that
    /// downcasts to `E` into a failure. An existing failure passes through
    /// untouched and `function` is not invoked.
    ///
    /// # Errors
    ///
    /// Returns the function's error when it is not an `E`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::ParseIntError;
    ///
    /// use fun::outcome::Outcome;
    ///
    /// let port = Outcome::<&str, String>::succeed("80a")
    ///     .bind_try_catch::<ParseIntError, u16>(|text| Ok(text.parse()?), |error| error.to_string());
    /// assert_eq!(port.ok(), Some(Outcome::fail("invalid digit found in string".to_string())));
    /// ```
    pub fn bind_try_catch<E, R>(
        self,
        function: impl FnOnce(S) -> anyhow::Result<R>,
        handler: impl FnOnce(E) -> F,
    ) -> anyhow::Result<Outcome<R, F>>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Outcome::try_catch(|| function(value), handler),
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }

    /// Like [`bind_try_catch`](Outcome::bind_try_catch) for a function that
    /// may return no value; `Ok(None)` becomes `Failure(if_null())`.
    ///
    /// # Errors
    ///
    /// Returns the function's error when it is not an `E`.
    pub fn bind_try_catch_nullable<E, R>(
        self,
        function: impl FnOnce(S) -> anyhow::Result<Option<R>>,
        handler: impl FnOnce(E) -> F,
        if_null: impl FnOnce() -> F,
    ) -> anyhow::Result<Outcome<R, F>>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Outcome::try_catch_nullable(|| function(value), handler, if_null),
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }

    /// Like [`bind_try_catch`](Outcome::bind_try_catch) with an asynchronous
    /// function.
    ///
    /// # Errors
    ///
    /// Returns the function's error when it is not an `E`.
    pub async fn bind_try_catch_async<E, R, Fut>(
        self,
        function: impl FnOnce(S) -> Fut,
        handler: impl FnOnce(E) -> F,
    ) -> anyhow::Result<Outcome<R, F>>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<R>>,
    {
        match self {
            Self::Success(value) => Outcome::try_catch_async(|| function(value), handler).await,
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }

    /// Like [`bind_try_catch_nullable`](Outcome::bind_try_catch_nullable)
    /// with an asynchronous function.
    ///
    /// # Errors
    ///
    /// Returns the function's error when it is not an `E`.
    pub async fn bind_try_catch_nullable_async<E, R, Fut>(
        self,
        function: impl FnOnce(S) -> Fut,
        handler: impl FnOnce(E) -> F,
        if_null: impl FnOnce() -> F,
    ) -> anyhow::Result<Outcome<R, F>>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<Option<R>>>,
    {
        match self {
            Self::Success(value) => Outcome::try_catch_nullable_async(|| function(value), handler, if_null).await,
            Self::Failure(error) => Ok(Outcome::Failure(error)),
        }
    }
}

impl<F> Outcome<(), F> {
    /// Runs a computation that only reports success or an error.
    pub fn try_unit<E>(compute: impl FnOnce() -> Result<(), E>, handler: impl FnOnce(E) -> F) -> Self {
        Self::try_with(compute, handler)
    }
}
