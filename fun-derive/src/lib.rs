//! Procedural macros for `fun`.
//!
//! - [`curry!`]: turns a closure or function of two or more parameters into a
//!   chain of single-argument closures
//! - [`choice_types!`]: emits the `ChoiceN` tagged unions behind `fun::choice`
//!
//! ```rust,ignore
//! use fun::curry;
//!
//! let greet = curry!(|greeting: &str, name: &str| format!("{greeting}, {name}"));
//! let hello = greet("hello");
//! assert_eq!(hello("ada"), "hello, ada");
//! assert_eq!(hello("grace"), "hello, grace");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod choice;
mod curry;

use proc_macro::TokenStream;

/// Curries a closure, or a function path with an explicit arity.
///
/// ```rust,ignore
/// use fun::curry;
///
/// let volume = curry!(|width: u32, height: u32, depth: u32| width * height * depth);
/// assert_eq!(volume(2)(3)(4), 24);
///
/// fn scale(factor: f64, value: f64) -> f64 { factor * value }
/// let by_ten = curry!(scale, 2)(10.0);
/// assert_eq!(by_ten(1.5), 15.0);
/// assert_eq!(by_ten(0.5), 5.0);
/// ```
///
/// Partial applications may be called any number of times. Every argument
/// except the last must implement `Clone`, because captured arguments are
/// released with `Rc::unwrap_or_clone`.
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    curry::curry_impl(input)
}

/// Generates the `ChoiceN` tagged unions for the listed arities (2 through 6).
///
/// The expansion refers to `crate::maybe`, `crate::error` and `crate::choice`
/// and is invoked once from `fun::choice`:
///
/// ```rust,ignore
/// fun_derive::choice_types!(2, 3, 4, 5, 6);
/// ```
///
/// For every arity `n` it emits `ChoiceN<T1, .., Tn>` with variants
/// `Case1 .. CaseN`, positional constructors, queries, exhaustive and partial
/// dispatch, and a `ChoiceNMatcher` builder.
#[proc_macro]
pub fn choice_types(input: TokenStream) -> TokenStream {
    choice::choice_types_impl(input)
}
