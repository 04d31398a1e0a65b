//! Integration tests for the composition utilities.
//!
//! Tests for compose!, compose_back!, pipe!, partial!, the curry family and
//! the `Pipe` extension trait.

#![cfg(feature = "compose")]

use fun::compose::{Pipe, constant, flip, flip_curried, identity};
use fun::{compose, compose_back, curry, curry2, curry3, partial, pipe, uncurry2, uncurry3};
use rstest::rstest;

fn add_one(value: i32) -> i32 {
    value + 1
}

fn double(value: i32) -> i32 {
    value * 2
}

fn square(value: i32) -> i32 {
    value * value
}

fn clamp(low: i32, high: i32, value: i32) -> i32 {
    value.max(low).min(high)
}

// =============================================================================
// compose! / compose_back! / pipe!
// =============================================================================

#[rstest]
#[case(0)]
#[case(3)]
#[case(-7)]
fn test_compose_is_associative(#[case] input: i32) {
    let left = compose!(add_one, compose!(double, square));
    let right = compose!(compose!(add_one, double), square);
    assert_eq!(left(input), right(input));
}

#[rstest]
#[case(4)]
#[case(-2)]
fn test_identity_is_neutral(#[case] input: i32) {
    assert_eq!(compose!(identity, double)(input), double(input));
    assert_eq!(compose!(double, identity)(input), double(input));
}

#[rstest]
fn test_compose_back_reverses_compose() {
    assert_eq!(compose_back!(add_one, double)(5), compose!(double, add_one)(5));
    assert_eq!(compose_back!(add_one, double, square)(1), 16);
}

#[rstest]
fn test_pipe_applies_left_to_right() {
    assert_eq!(pipe!(5, double, add_one), 11);
    assert_eq!(pipe!(2, square, square, add_one), 17);
    assert_eq!(pipe!("unchanged"), "unchanged");
}

// =============================================================================
// partial! and currying
// =============================================================================

#[rstest]
fn test_partial_fixes_any_position() {
    let at_least_zero = partial!(clamp, 0, __, __);
    let at_most_ten = partial!(clamp, __, 10, __);
    let clamp_five = partial!(clamp, __, __, 5);

    assert_eq!(at_least_zero(100, -3), 0);
    assert_eq!(at_most_ten(0, 42), 10);
    assert_eq!(clamp_five(0, 3), 3);
}

#[rstest]
fn test_curry_round_trip() {
    let curried = curry3!(clamp);
    assert_eq!(curried(0)(10)(15), 10);
    assert_eq!(uncurry3!(curry3!(clamp))(0, 10, -4), 0);

    let subtract = |a: i32, b: i32| a - b;
    assert_eq!(uncurry2!(curry2!(subtract))(9, 4), 5);
}

#[rstest]
fn test_curry_proc_macro_with_closure() {
    let join = curry!(|first: String, second: &str| format!("{first}-{second}"));
    assert_eq!(join("a".to_string())("b"), "a-b");
}

// =============================================================================
// Helper functions
// =============================================================================

#[rstest]
fn test_constant_ignores_argument() {
    let always = constant::<_, &str>("fixed");
    assert_eq!(always("anything"), "fixed");
}

#[rstest]
fn test_flip_swaps_arguments() {
    let subtract = |a: i32, b: i32| a - b;
    assert_eq!(flip(subtract)(1, 10), 9);

    let divide = |numerator: i32| move |denominator: i32| numerator / denominator;
    assert_eq!(flip_curried(divide)(4)(20), divide(20)(4));
}

// =============================================================================
// Pipe trait
// =============================================================================

#[rstest]
#[case(3, "small")]
#[case(30, "large")]
fn test_pipe_if_routes_value(#[case] input: i32, #[case] expected: &str) {
    let label = input.pipe_if(|n| *n > 10, |_| "large", |_| "small");
    assert_eq!(label, expected);
}

#[rstest]
fn test_tee_runs_side_effect_in_order() {
    let mut log = Vec::new();
    let result = 2.pipe(double).tee(|n| log.push(*n)).pipe(add_one).tee(|n| log.push(*n));

    assert_eq!(result, 5);
    assert_eq!(log, vec![4, 5]);
}
