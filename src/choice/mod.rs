//! Closed tagged unions over two to six candidate types.
//!
//! `Choice2<T1, T2>` through `Choice6<T1, .., T6>` hold exactly one payload,
//! tagged with its 1-based position among the candidates. Every type is
//! generated by the `choice_types!` procedural macro of `fun-derive`, so the
//! whole family shares one surface:
//!
//! - constructors `case_k` and the variants `CaseK` themselves
//! - queries `index`, `is_case_k`, `into_case_k`, `case_k_ref`, `as_ref`
//! - `map_case_k` to transform one case and leave the rest alone
//! - `match_with`, an exhaustive dispatch with one handler per case
//! - `match_<i>_or_else` (and two- or three-case variants) for partial
//!   dispatch with a fallback
//! - `matcher`, a builder for any subset of handlers, finished by `or_else`
//!   or `finish`
//!
//! There is no `From<Tk>` for a choice: when two candidate types coincide the
//! conversion would be ambiguous, so the positional constructors are the way
//! in.
//!
//! # Examples
//!
//! ```
//! use fun::choice::Choice3;
//!
//! type Reply = Choice3<u16, String, ()>;
//!
//! let describe = |reply: Reply| {
//!     reply.match_with(
//!         |code| format!("status {code}"),
//!         |body| format!("body {body}"),
//!         |()| "empty".to_string(),
//!     )
//! };
//!
//! assert_eq!(describe(Reply::case_1(404)), "status 404");
//! assert_eq!(describe(Reply::case_2("ok".into())), "body ok");
//! assert_eq!(describe(Reply::case_3(())), "empty");
//! ```
//!
//! Handling only some cases:
//!
//! ```
//! use fun::choice::Choice4;
//!
//! let value: Choice4<i32, &str, bool, char> = Choice4::case_3(true);
//!
//! let partial = value.match_1_3_or_else(|n| n, |flag| i32::from(flag), || -1);
//! assert_eq!(partial, 1);
//!
//! let built = value.matcher().case_2(|text: &str| text.len()).finish();
//! assert!(built.is_err());
//! ```

use crate::error::FailedMatchError;

fun_derive::choice_types!(2, 3, 4, 5, 6);

/// Progress of a generated `ChoiceNMatcher`: still holding the choice, or
/// holding the result of the handler that matched it.
pub(crate) enum MatchState<C, R> {
    Pending(C),
    Matched(R),
}

pub(crate) fn unmatched(index: usize, arity: usize) -> FailedMatchError {
    #[cfg(feature = "tracing")]
    tracing::debug!(index, arity, "choice matcher finished without a handler for the active case");

    FailedMatchError::new(index, arity)
}

static_assertions::assert_impl_all!(Choice2<i32, &'static str>: Send, Sync, Copy);
static_assertions::assert_impl_all!(Choice6<u8, u16, u32, u64, i8, String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Choice3<i32, std::rc::Rc<i32>, ()>: Send, Sync);
