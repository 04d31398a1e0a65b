//! Combinators on futures that resolve to an `Outcome`.
//!
//! The same caveat as for `MaybeFutureExt` applies: `map` and `then` also
//! exist on [`futures::FutureExt`], so do not import both traits where
//! `map` is called.

use std::future::Future;

use super::Outcome;
use crate::maybe::Maybe;

/// Combinators on `Future<Output = Outcome<S, F>>`.
///
/// Each method awaits the receiver and then behaves like the [`Outcome`]
/// method of the same name. A failed receiver skips every handler.
///
/// # Examples
///
/// ```
/// use fun::outcome::{Outcome, OutcomeFutureExt};
///
/// async fn load(id: u32) -> Outcome<String, String> {
///     if id == 0 { Outcome::fail("unknown id".into()) } else { Outcome::succeed(format!("user-{id}")) }
/// }
///
/// # futures::executor::block_on(async {
/// let name = load(7).map(|name| name.to_uppercase()).await;
/// assert_eq!(name, Outcome::succeed("USER-7".to_string()));
///
/// let missing = load(0).bind(|name| Outcome::succeed(name.len())).await;
/// assert_eq!(missing, Outcome::fail("unknown id".to_string()));
/// # });
/// ```
pub trait OutcomeFutureExt<S, F>: Future<Output = Outcome<S, F>> + Sized {
    /// Awaits, then [`Outcome::map`].
    fn map<R, Function>(self, function: Function) -> impl Future<Output = Outcome<R, F>>
    where
        Function: FnOnce(S) -> R,
    {
        futures::FutureExt::map(self, |outcome| outcome.map(function))
    }

    /// Awaits, then [`Outcome::map_async`].
    fn map_async<R, Function, Fut>(self, function: Function) -> impl Future<Output = Outcome<R, F>>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = R>,
    {
        futures::FutureExt::then(self, |outcome| outcome.map_async(function))
    }

    /// Awaits, then [`Outcome::map_failure`].
    fn map_failure<G, Function>(self, function: Function) -> impl Future<Output = Outcome<S, G>>
    where
        Function: FnOnce(F) -> G,
    {
        futures::FutureExt::map(self, |outcome| outcome.map_failure(function))
    }

    /// Awaits, then [`Outcome::map_failure_async`].
    fn map_failure_async<G, Function, Fut>(self, function: Function) -> impl Future<Output = Outcome<S, G>>
    where
        Function: FnOnce(F) -> Fut,
        Fut: Future<Output = G>,
    {
        futures::FutureExt::then(self, |outcome| outcome.map_failure_async(function))
    }

    /// Awaits, then [`Outcome::bind`].
    fn bind<R, Function>(self, function: Function) -> impl Future<Output = Outcome<R, F>>
    where
        Function: FnOnce(S) -> Outcome<R, F>,
    {
        futures::FutureExt::map(self, |outcome| outcome.bind(function))
    }

    /// Awaits, then [`Outcome::bind_async`].
    fn bind_async<R, Function, Fut>(self, function: Function) -> impl Future<Output = Outcome<R, F>>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = Outcome<R, F>>,
    {
        futures::FutureExt::then(self, |outcome| outcome.bind_async(function))
    }

    /// Awaits, then [`Outcome::bind_or_map_failure`].
    fn bind_or_map_failure<R, G, Function, MapFailure>(
        self,
        function: Function,
        map_failure: MapFailure,
    ) -> impl Future<Output = Outcome<R, G>>
    where
        Function: FnOnce(S) -> Outcome<R, G>,
        MapFailure: FnOnce(F) -> G,
    {
        futures::FutureExt::map(self, |outcome| outcome.bind_or_map_failure(function, map_failure))
    }

    /// Awaits, then [`Outcome::bind_try`].
    fn bind_try<R, E, Function, Handler>(self, function: Function, handler: Handler) -> impl Future<Output = Outcome<R, F>>
    where
        Function: FnOnce(S) -> Result<R, E>,
        Handler: FnOnce(E) -> F,
    {
        futures::FutureExt::map(self, |outcome| outcome.bind_try(function, handler))
    }

    /// Awaits, then [`Outcome::bind_try_nullable`].
    fn bind_try_nullable<R, E, Function, Handler, IfNull>(
        self,
        function: Function,
        handler: Handler,
        if_null: IfNull,
    ) -> impl Future<Output = Outcome<R, F>>
    where
        Function: FnOnce(S) -> Result<Option<R>, E>,
        Handler: FnOnce(E) -> F,
        IfNull: FnOnce() -> F,
    {
        futures::FutureExt::map(self, |outcome| outcome.bind_try_nullable(function, handler, if_null))
    }

    /// Awaits, then [`Outcome::bind_try_async`].
    fn bind_try_async<R, E, Function, Fut, Handler>(
        self,
        function: Function,
        handler: Handler,
    ) -> impl Future<Output = Outcome<R, F>>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = Result<R, E>>,
        Handler: FnOnce(E) -> F,
    {
        futures::FutureExt::then(self, |outcome| outcome.bind_try_async(function, handler))
    }

    /// Awaits, then [`Outcome::bind_try_nullable_async`].
    fn bind_try_nullable_async<R, E, Function, Fut, Handler, IfNull>(
        self,
        function: Function,
        handler: Handler,
        if_null: IfNull,
    ) -> impl Future<Output = Outcome<R, F>>
    where
        Function: FnOnce(S) -> Fut,
        Fut: Future<Output = Result<Option<R>, E>>,
        Handler: FnOnce(E) -> F,
        IfNull: FnOnce() -> F,
    {
        futures::FutureExt::then(self, |outcome| outcome.bind_try_nullable_async(function, handler, if_null))
    }

    /// Awaits, then [`Outcome::match_with`].
    fn match_with<R, OnSuccess, OnFailure>(self, success: OnSuccess, failure: OnFailure) -> impl Future<Output = R>
    where
        OnSuccess: FnOnce(S) -> R,
        OnFailure: FnOnce(F) -> R,
    {
        futures::FutureExt::map(self, |outcome| outcome.match_with(success, failure))
    }

    /// Awaits, then [`Outcome::match_async`].
    fn match_async<R, OnSuccess, SuccessFuture, OnFailure, FailureFuture>(
        self,
        success: OnSuccess,
        failure: OnFailure,
    ) -> impl Future<Output = R>
    where
        OnSuccess: FnOnce(S) -> SuccessFuture,
        SuccessFuture: Future<Output = R>,
        OnFailure: FnOnce(F) -> FailureFuture,
        FailureFuture: Future<Output = R>,
    {
        futures::FutureExt::then(self, |outcome| outcome.match_async(success, failure))
    }

    /// Awaits, then [`Outcome::match_success_async`].
    fn match_success_async<R, OnSuccess, SuccessFuture, OnFailure>(
        self,
        success: OnSuccess,
        failure: OnFailure,
    ) -> impl Future<Output = R>
    where
        OnSuccess: FnOnce(S) -> SuccessFuture,
        SuccessFuture: Future<Output = R>,
        OnFailure: FnOnce(F) -> R,
    {
        futures::FutureExt::then(self, |outcome| outcome.match_success_async(success, failure))
    }

    /// Awaits, then [`Outcome::match_failure_async`].
    fn match_failure_async<R, OnSuccess, OnFailure, FailureFuture>(
        self,
        success: OnSuccess,
        failure: OnFailure,
    ) -> impl Future<Output = R>
    where
        OnSuccess: FnOnce(S) -> R,
        OnFailure: FnOnce(F) -> FailureFuture,
        FailureFuture: Future<Output = R>,
    {
        futures::FutureExt::then(self, |outcome| outcome.match_failure_async(success, failure))
    }

    /// Awaits, then [`Outcome::tee`].
    ///
    /// [`Pipe::tee`](crate::compose::Pipe::tee) applies to every value,
    /// futures included. Where both traits are imported, call this one as
    /// `OutcomeFutureExt::tee(future, action)`.
    fn tee<Action>(self, action: Action) -> impl Future<Output = Outcome<S, F>>
    where
        Action: FnOnce(&S),
    {
        futures::FutureExt::map(self, |outcome| outcome.tee(action))
    }

    /// Awaits, then [`Outcome::tee_bind`].
    fn tee_bind<U, Function>(self, function: Function) -> impl Future<Output = Outcome<S, F>>
    where
        Function: FnOnce(&S) -> Outcome<U, F>,
    {
        futures::FutureExt::map(self, |outcome| outcome.tee_bind(function))
    }

    /// Awaits, then [`Outcome::tee_bind_async`].
    fn tee_bind_async<U, Function, Fut>(self, function: Function) -> impl Future<Output = Outcome<S, F>>
    where
        Function: FnOnce(&S) -> Fut,
        Fut: Future<Output = Outcome<U, F>>,
    {
        futures::FutureExt::then(self, |outcome| outcome.tee_bind_async(function))
    }

    /// Awaits, then [`Outcome::to_maybe`].
    fn to_maybe(self) -> impl Future<Output = Maybe<S>> {
        futures::FutureExt::map(self, Outcome::to_maybe)
    }
}

impl<Fut, S, F> OutcomeFutureExt<S, F> for Fut where Fut: Future<Output = Outcome<S, F>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn failed_receiver_skips_handlers() {
        let calls = Cell::new(0);
        let result = async { Outcome::<i32, &str>::fail("down") }
            .map(|n| {
                calls.set(calls.get() + 1);
                n
            })
            .bind_try(
                |n| {
                    calls.set(calls.get() + 1);
                    u8::try_from(n)
                },
                |_| "out of range",
            )
            .await;

        assert_eq!(result, Outcome::fail("down"));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test]
    async fn tee_bind_async_on_future_receiver() {
        let checked = async { Outcome::<u32, &str>::succeed(3) }
            .tee_bind_async(|n| {
                let odd = n % 2 == 1;
                async move { if odd { Outcome::succeed(()) } else { Outcome::fail("even") } }
            })
            .map_failure(str::len)
            .await;
        assert_eq!(checked, Outcome::succeed(3));
    }

    #[tokio::test]
    async fn map_failure_async_on_future_receiver() {
        let described = async { Outcome::<u8, u16>::fail(404) }
            .map_failure_async(|code| async move { format!("status {code}") })
            .await;
        assert_eq!(described, Outcome::fail("status 404".to_string()));
    }

    #[tokio::test]
    async fn bind_try_nullable_on_future_receiver() {
        let lookup = |key: &str| -> Result<Option<u8>, String> {
            match key {
                "port" => Ok(Some(80)),
                "host" => Ok(None),
                _ => Err(format!("bad key {key}")),
            }
        };

        let found = async { Outcome::<&str, String>::succeed("port") }
            .bind_try_nullable(lookup, |error| error, || "unset".to_string())
            .await;
        let unset = async { Outcome::<&str, String>::succeed("host") }
            .bind_try_nullable(lookup, |error| error, || "unset".to_string())
            .await;
        let rejected = async { Outcome::<&str, String>::succeed("?") }
            .bind_try_nullable(lookup, |error| error, || "unset".to_string())
            .await;

        assert_eq!(found, Outcome::succeed(80));
        assert_eq!(unset, Outcome::fail("unset".to_string()));
        assert_eq!(rejected, Outcome::fail("bad key ?".to_string()));
    }

    #[tokio::test]
    async fn bind_try_async_on_future_receiver() {
        let parsed = async { Outcome::<&str, String>::succeed("12") }
            .bind_try_async(|text| async move { text.parse::<u8>() }, |error| error.to_string())
            .await;
        assert_eq!(parsed, Outcome::succeed(12));

        let overflow = async { Outcome::<&str, String>::succeed("300") }
            .bind_try_async(|text| async move { text.parse::<u8>() }, |error| error.to_string())
            .await;
        assert_eq!(overflow, Outcome::fail("number too large to fit in target type".to_string()));
    }

    #[tokio::test]
    async fn bind_try_nullable_async_on_future_receiver() {
        let missing = async { Outcome::<u8, &str>::succeed(0) }
            .bind_try_nullable_async(|n| async move { Ok::<_, ()>(n.checked_sub(1)) }, |()| "error", || "none")
            .await;
        assert_eq!(missing, Outcome::fail("none"));
    }

    #[tokio::test]
    async fn match_success_async_on_future_receiver() {
        let report = async { Outcome::<u8, &str>::succeed(9) }
            .match_success_async(|n| async move { n * 2 }, |_| 0)
            .await;
        assert_eq!(report, 18);
    }

    #[tokio::test]
    async fn match_failure_async_on_future_receiver() {
        let report = async { Outcome::<u8, &str>::fail("late") }
            .match_failure_async(|_| 0, |error| async move { error.len() })
            .await;
        assert_eq!(report, 4);
    }

    #[tokio::test]
    async fn tee_on_future_receiver_sees_success_only() {
        let seen = Cell::new(0);
        let success = async { Outcome::<u8, &str>::succeed(5) }.tee(|n| seen.set(*n)).await;
        let failure = async { Outcome::<u8, &str>::fail("x") }.tee(|_| seen.set(99)).await;

        assert_eq!(success, Outcome::succeed(5));
        assert_eq!(failure, Outcome::fail("x"));
        assert_eq!(seen.get(), 5);
    }

    #[tokio::test]
    async fn to_maybe_drops_failure() {
        assert_eq!(async { Outcome::<i32, ()>::fail(()) }.to_maybe().await, Maybe::Nothing);
        assert_eq!(async { Outcome::<i32, ()>::succeed(1) }.to_maybe().await, Maybe::just(1));
    }
}
