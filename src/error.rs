//! Error kinds raised when a container is used against its contract.
//!
//! None of these describe domain failures: those travel inside
//! [`Outcome::Failure`](crate::outcome::Outcome::Failure). These errors report
//! a caller asking for a payload that is not there, or a partial match that
//! left the active case without a handler.

use std::fmt;

use thiserror::Error;

/// The payload of an empty `Maybe` was requested.
///
/// # Examples
///
/// ```
/// use fun::error::EmptyMaybeError;
/// use fun::maybe::Maybe;
///
/// let empty: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(empty.value(), Err(EmptyMaybeError));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("attempted to access the value of an empty Maybe; always check for a value before accessing it")]
pub struct EmptyMaybeError;

/// One of the two branches of an `Outcome`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The success branch.
    Success,
    /// The failure branch.
    Failure,
}

impl fmt::Display for Branch {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => formatter.write_str("success"),
            Self::Failure => formatter.write_str("failure"),
        }
    }
}

/// The inactive branch of an `Outcome` was requested.
///
/// # Examples
///
/// ```
/// use fun::error::{Branch, OutcomeAccessError};
/// use fun::outcome::Outcome;
///
/// let failed: Outcome<i32, &str> = Outcome::fail("boom");
/// let error = failed.success().unwrap_err();
///
/// assert_eq!(error.requested, Branch::Success);
/// assert_eq!(error.to_string(), "can't access success on an unsuccessful outcome");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{}", access_message(.requested))]
pub struct OutcomeAccessError {
    /// The branch the caller asked for.
    pub requested: Branch,
}

impl OutcomeAccessError {
    /// Creates the error for a request of `requested` on the other branch.
    #[must_use]
    pub const fn new(requested: Branch) -> Self {
        Self { requested }
    }
}

const fn access_message(requested: &Branch) -> &'static str {
    match requested {
        Branch::Success => "can't access success on an unsuccessful outcome",
        Branch::Failure => "can't access failure on a successful outcome",
    }
}

/// A partial choice dispatch finished without a handler for the active case.
///
/// Produced by the `finish` method of the `ChoiceNMatcher` builders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("none of the supplied handlers matched case {index} of {arity}")]
pub struct FailedMatchError {
    /// The 1-based discriminant that went unhandled.
    pub index: usize,
    /// The number of cases of the choice type.
    pub arity: usize,
}

impl FailedMatchError {
    /// Creates the error for the unhandled case `index` of an `arity`-way choice.
    #[must_use]
    pub const fn new(index: usize, arity: usize) -> Self {
        Self { index, arity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Branch::Success, "can't access success on an unsuccessful outcome")]
    #[case(Branch::Failure, "can't access failure on a successful outcome")]
    fn access_error_names_requested_branch(#[case] requested: Branch, #[case] expected: &str) {
        assert_eq!(OutcomeAccessError::new(requested).to_string(), expected);
    }

    #[rstest]
    fn failed_match_reports_case() {
        let error = FailedMatchError::new(3, 4);
        assert_eq!(error.to_string(), "none of the supplied handlers matched case 3 of 4");
    }

    #[rstest]
    fn errors_are_distinct_kinds() {
        fn boxed(error: impl std::error::Error + 'static) -> Box<dyn std::error::Error> {
            Box::new(error)
        }

        assert!(boxed(EmptyMaybeError).downcast_ref::<EmptyMaybeError>().is_some());
        assert!(boxed(OutcomeAccessError::new(Branch::Success))
            .downcast_ref::<EmptyMaybeError>()
            .is_none());
    }
}
