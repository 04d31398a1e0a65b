//! Projections over sequences of containers.
//!
//! [`MaybeIteratorExt::where_some`] keeps the payloads of present values;
//! [`OutcomeIteratorExt`] splits outcomes by branch. The `collect_*`
//! functions are the eager forms for any `IntoIterator`.
//!
//! # Examples
//!
//! ```
//! use fun::iter::{MaybeIteratorExt, collect_successes};
//! use fun::maybe::Maybe;
//! use fun::outcome::Outcome;
//!
//! let readings = vec![Maybe::just(3), Maybe::Nothing, Maybe::just(9)];
//! let present: Vec<i32> = readings.into_iter().where_some().collect();
//! assert_eq!(present, vec![3, 9]);
//!
//! let parsed = ["1", "x", "3"].map(|text| Outcome::try_with(|| text.parse::<u8>(), |_| text));
//! assert_eq!(collect_successes(parsed), vec![1, 3]);
//! ```

use crate::maybe::Maybe;
#[cfg(feature = "outcome")]
use crate::outcome::Outcome;

/// Iterator adapters for sequences of [`Maybe`].
pub trait MaybeIteratorExt<T>: Iterator<Item = Maybe<T>> + Sized {
    /// Yields the payload of every present value, in order.
    fn where_some(self) -> impl Iterator<Item = T> {
        self.flatten()
    }
}

impl<I, T> MaybeIteratorExt<T> for I where I: Iterator<Item = Maybe<T>> {}

/// Iterator adapters for sequences of [`Outcome`].
#[cfg(feature = "outcome")]
pub trait OutcomeIteratorExt<S, F>: Iterator<Item = Outcome<S, F>> + Sized {
    /// Yields the success value of every successful outcome, in order.
    fn where_successful(self) -> impl Iterator<Item = S> {
        self.filter_map(|outcome| match outcome {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        })
    }

    /// Yields the failure value of every failed outcome, in order.
    fn where_failed(self) -> impl Iterator<Item = F> {
        self.filter_map(|outcome| match outcome {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        })
    }
}

#[cfg(feature = "outcome")]
impl<I, S, F> OutcomeIteratorExt<S, F> for I where I: Iterator<Item = Outcome<S, F>> {}

/// Collects the payloads of the present values.
pub fn collect_some<T>(values: impl IntoIterator<Item = Maybe<T>>) -> Vec<T> {
    values.into_iter().where_some().collect()
}

/// Collects the success values.
#[cfg(feature = "outcome")]
pub fn collect_successes<S, F>(outcomes: impl IntoIterator<Item = Outcome<S, F>>) -> Vec<S> {
    outcomes.into_iter().where_successful().collect()
}

/// Collects the failure values.
#[cfg(feature = "outcome")]
pub fn collect_failures<S, F>(outcomes: impl IntoIterator<Item = Outcome<S, F>>) -> Vec<F> {
    outcomes.into_iter().where_failed().collect()
}
