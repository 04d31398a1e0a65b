//! Combinators on futures that resolve to a `Maybe`.
//!
//! Method names mirror the synchronous ones on [`Maybe`]. Because
//! [`futures::FutureExt`] also defines `map` for every future, import only one
//! of the two traits in a scope that calls `map`, or use fully qualified
//! syntax.

use std::future::Future;

use super::Maybe;

/// Combinators on `Future<Output = Maybe<T>>`.
///
/// Each method awaits the receiver first and then behaves exactly like the
/// [`Maybe`] method of the same name.
///
/// # Examples
///
/// ```
/// use fun::maybe::{Maybe, MaybeFutureExt};
///
/// # futures::executor::block_on(async {
/// let lookup = async { Maybe::just(20) };
/// let doubled = lookup
///     .map(|n| n * 2)
///     .bind(|n| if n > 10 { Maybe::just(n) } else { Maybe::Nothing })
///     .await;
/// assert_eq!(doubled, Maybe::just(40));
/// # });
/// ```
pub trait MaybeFutureExt<T>: Future<Output = Maybe<T>> + Sized {
    /// Awaits, then [`Maybe::map`].
    fn map<R, F>(self, function: F) -> impl Future<Output = Maybe<R>>
    where
        F: FnOnce(T) -> R,
    {
        futures::FutureExt::map(self, |maybe| maybe.map(function))
    }

    /// Awaits, then [`Maybe::map_async`].
    fn map_async<R, F, Fut>(self, function: F) -> impl Future<Output = Maybe<R>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        futures::FutureExt::then(self, |maybe| maybe.map_async(function))
    }

    /// Awaits, then [`Maybe::bind`].
    fn bind<R, F>(self, function: F) -> impl Future<Output = Maybe<R>>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        futures::FutureExt::map(self, |maybe| maybe.bind(function))
    }

    /// Awaits, then [`Maybe::bind_async`].
    fn bind_async<R, F, Fut>(self, function: F) -> impl Future<Output = Maybe<R>>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Maybe<R>>,
    {
        futures::FutureExt::then(self, |maybe| maybe.bind_async(function))
    }

    /// Awaits, then [`Maybe::bind_or_else`].
    fn bind_or_else<R, OnJust, OnNothing>(self, some: OnJust, none: OnNothing) -> impl Future<Output = Maybe<R>>
    where
        OnJust: FnOnce(T) -> Maybe<R>,
        OnNothing: FnOnce() -> Maybe<R>,
    {
        futures::FutureExt::map(self, |maybe| maybe.bind_or_else(some, none))
    }

    /// Awaits, then [`Maybe::match_with`].
    fn match_with<R, OnJust, OnNothing>(self, some: OnJust, none: OnNothing) -> impl Future<Output = R>
    where
        OnJust: FnOnce(T) -> R,
        OnNothing: FnOnce() -> R,
    {
        futures::FutureExt::map(self, |maybe| maybe.match_with(some, none))
    }

    /// Awaits, then [`Maybe::match_async`].
    fn match_async<R, OnJust, JustFuture, OnNothing, NothingFuture>(
        self,
        some: OnJust,
        none: OnNothing,
    ) -> impl Future<Output = R>
    where
        OnJust: FnOnce(T) -> JustFuture,
        JustFuture: Future<Output = R>,
        OnNothing: FnOnce() -> NothingFuture,
        NothingFuture: Future<Output = R>,
    {
        futures::FutureExt::then(self, |maybe| maybe.match_async(some, none))
    }

    /// Awaits, then [`Maybe::tee_map`].
    fn tee_map<F>(self, action: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T),
    {
        futures::FutureExt::map(self, |maybe| maybe.tee_map(action))
    }

    /// Awaits, then [`Maybe::tee_map_async`].
    fn tee_map_async<F, Fut>(self, action: F) -> impl Future<Output = Maybe<T>>
    where
        F: FnOnce(&T) -> Fut,
        Fut: Future<Output = ()>,
    {
        futures::FutureExt::then(self, |maybe| maybe.tee_map_async(action))
    }

    /// Awaits, then [`Maybe::to_outcome`].
    #[cfg(feature = "outcome")]
    fn to_outcome<F, E>(self, if_empty: E) -> impl Future<Output = crate::outcome::Outcome<T, F>>
    where
        E: FnOnce() -> F,
    {
        futures::FutureExt::map(self, |maybe| maybe.to_outcome(if_empty))
    }
}

impl<Fut, T> MaybeFutureExt<T> for Fut where Fut: Future<Output = Maybe<T>> {}

/// Wraps the output of any future in `Just`.
///
/// The asynchronous counterpart of [`ToMaybe`](super::ToMaybe).
///
/// # Examples
///
/// ```
/// use fun::maybe::{Maybe, ToMaybeFuture};
///
/// # futures::executor::block_on(async {
/// assert_eq!(async { 3 }.to_maybe_async().await, Maybe::just(3));
/// # });
/// ```
pub trait ToMaybeFuture: Future + Sized {
    /// Resolves to `Just(output)`.
    fn to_maybe_async(self) -> impl Future<Output = Maybe<Self::Output>> {
        futures::FutureExt::map(self, Maybe::Just)
    }
}

impl<Fut: Future> ToMaybeFuture for Fut {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn nothing_short_circuits_async_chain() {
        let calls = Cell::new(0);
        let result = async { Maybe::<i32>::Nothing }
            .map(|n| {
                calls.set(calls.get() + 1);
                n + 1
            })
            .bind_async(|n| {
                calls.set(calls.get() + 1);
                async move { Maybe::just(n) }
            })
            .await;

        assert_eq!(result, Maybe::Nothing);
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn tee_map_async_completes_before_value() {
        let log = std::cell::RefCell::new(Vec::new());
        let value = async { Maybe::just("a") }
            .tee_map_async(|text| {
                let text = (*text).to_string();
                let log = &log;
                async move { log.borrow_mut().push(text) }
            })
            .map(|text| {
                log.borrow_mut().push(format!("{text}!"));
                text
            })
            .await;

        assert_eq!(value, Maybe::just("a"));
        assert_eq!(*log.borrow(), vec!["a".to_string(), "a!".to_string()]);
    }

    #[tokio::test]
    async fn match_async_on_future_receiver() {
        let label = async { Maybe::just(5) }
            .match_async(|n| async move { format!("{n}") }, || async { String::from("-") })
            .await;
        assert_eq!(label, "5");
    }
}
