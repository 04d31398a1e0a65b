//! Method-call pipelines over plain values and futures.

use std::future::Future;

#[cfg(feature = "async")]
use futures::FutureExt;

/// Pipeline methods available on every sized value.
///
/// # Examples
///
/// ```
/// use fun::compose::Pipe;
///
/// let mut seen = Vec::new();
/// let label = 21
///     .pipe(|n| n * 2)
///     .tee(|n| seen.push(*n))
///     .pipe_if(|n| *n > 40, |n| format!("big {n}"), |n| format!("small {n}"));
///
/// assert_eq!(label, "big 42");
/// assert_eq!(seen, vec![42]);
/// ```
pub trait Pipe: Sized {
    /// Applies `function` to `self`.
    #[inline]
    fn pipe<R, F>(self, function: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        function(self)
    }

    /// Applies an asynchronous `function` to `self`.
    #[inline]
    fn pipe_async<R, F, Fut>(self, function: F) -> Fut
    where
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = R>,
    {
        function(self)
    }

    /// Runs `action` on a reference to `self`, then returns `self` unchanged.
    #[inline]
    #[must_use]
    fn tee<F>(self, action: F) -> Self
    where
        F: FnOnce(&Self),
    {
        action(&self);
        self
    }

    /// Runs `function` on a reference to `self` and discards its result.
    #[inline]
    #[must_use]
    fn tee_ignore<R, F>(self, function: F) -> Self
    where
        F: FnOnce(&Self) -> R,
    {
        drop(function(&self));
        self
    }

    /// Awaits `action(&self)` and then yields `self` unchanged.
    fn tee_async<F, Fut>(self, action: F) -> impl Future<Output = Self>
    where
        F: FnOnce(&Self) -> Fut,
        Fut: Future<Output = ()>,
    {
        let pending = action(&self);
        async move {
            pending.await;
            self
        }
    }

    /// Routes `self` to `then` when `predicate` holds and to `otherwise`
    /// when it does not.
    #[inline]
    fn pipe_if<R, P, Then, Otherwise>(self, predicate: P, then: Then, otherwise: Otherwise) -> R
    where
        P: FnOnce(&Self) -> bool,
        Then: FnOnce(Self) -> R,
        Otherwise: FnOnce(Self) -> R,
    {
        if predicate(&self) {
            then(self)
        } else {
            otherwise(self)
        }
    }
}

impl<T> Pipe for T {}

/// Pipeline methods on futures.
///
/// Every method first awaits the receiver and then behaves like the
/// [`Pipe`] method of the same suffix. Steps are strictly sequential: a tee's
/// side effect finishes before the value moves on.
///
/// The `then_` prefix keeps these methods apart from [`Pipe`], which also
/// applies to futures as plain values.
///
/// # Examples
///
/// ```
/// use fun::compose::PipeFutureExt;
///
/// # futures::executor::block_on(async {
/// let length = async { "hello".to_string() }
///     .then_pipe(|text| text.len())
///     .then_pipe_async(|n| async move { n * 2 })
///     .await;
/// assert_eq!(length, 10);
/// # });
/// ```
#[cfg(feature = "async")]
pub trait PipeFutureExt: Future + Sized {
    /// Applies `function` to the resolved value.
    fn then_pipe<R, F>(self, function: F) -> impl Future<Output = R>
    where
        F: FnOnce(Self::Output) -> R,
    {
        FutureExt::map(self, function)
    }

    /// Applies an asynchronous `function` to the resolved value.
    fn then_pipe_async<R, F, Fut>(self, function: F) -> impl Future<Output = R>
    where
        F: FnOnce(Self::Output) -> Fut,
        Fut: Future<Output = R>,
    {
        FutureExt::then(self, function)
    }

    /// Runs `action` on the resolved value and yields the value unchanged.
    fn then_tee<F>(self, action: F) -> impl Future<Output = Self::Output>
    where
        F: FnOnce(&Self::Output),
    {
        FutureExt::map(self, |value| value.tee(action))
    }

    /// Runs `function` on the resolved value, discards its result, and yields
    /// the value unchanged.
    fn then_tee_ignore<R, F>(self, function: F) -> impl Future<Output = Self::Output>
    where
        F: FnOnce(&Self::Output) -> R,
    {
        FutureExt::map(self, |value| value.tee_ignore(function))
    }

    /// Awaits `action` on the resolved value before yielding the value.
    fn then_tee_async<F, Fut>(self, action: F) -> impl Future<Output = Self::Output>
    where
        F: FnOnce(&Self::Output) -> Fut,
        Fut: Future<Output = ()>,
    {
        async move {
            let value = self.await;
            action(&value).await;
            value
        }
    }

    /// Routes the resolved value through `then` or `otherwise`.
    fn then_pipe_if<R, P, Then, Otherwise>(
        self,
        predicate: P,
        then: Then,
        otherwise: Otherwise,
    ) -> impl Future<Output = R>
    where
        P: FnOnce(&Self::Output) -> bool,
        Then: FnOnce(Self::Output) -> R,
        Otherwise: FnOnce(Self::Output) -> R,
    {
        FutureExt::map(self, |value| value.pipe_if(predicate, then, otherwise))
    }

    /// Routes the resolved value through an asynchronous predicate and
    /// asynchronous branches.
    fn then_pipe_if_async<R, P, PredicateFuture, Then, ThenFuture, Otherwise, OtherwiseFuture>(
        self,
        predicate: P,
        then: Then,
        otherwise: Otherwise,
    ) -> impl Future<Output = R>
    where
        P: FnOnce(&Self::Output) -> PredicateFuture,
        PredicateFuture: Future<Output = bool>,
        Then: FnOnce(Self::Output) -> ThenFuture,
        ThenFuture: Future<Output = R>,
        Otherwise: FnOnce(Self::Output) -> OtherwiseFuture,
        OtherwiseFuture: Future<Output = R>,
    {
        async move {
            let value = self.await;
            if predicate(&value).await {
                then(value).await
            } else {
                otherwise(value).await
            }
        }
    }
}

#[cfg(feature = "async")]
impl<F: Future> PipeFutureExt for F {}
