#![cfg(all(feature = "tracing", feature = "outcome", feature = "choice"))]

//! Integration tests for the diagnostic events emitted under the `tracing`
//! feature.

use fun::choice::Choice2;
use fun::outcome::Outcome;
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<R>(action: impl FnOnce() -> R) -> (R, String) {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let result = tracing::subscriber::with_default(subscriber, action);
    (result, output.text())
}

#[rstest]
fn test_converted_error_emits_debug_event() {
    let (outcome, logs) = capture(|| Outcome::try_with(|| "x".parse::<u8>(), |error| error.to_string()));

    assert!(outcome.is_failed());
    assert!(logs.contains("computation error converted into failure"));
    assert!(logs.contains("ParseIntError"));
}

#[rstest]
fn test_successful_computation_is_silent() {
    let (outcome, logs) = capture(|| Outcome::try_with(|| "7".parse::<u8>(), |error| error.to_string()));

    assert_eq!(outcome, Outcome::succeed(7));
    assert!(logs.is_empty());
}

#[rstest]
fn test_unmatched_choice_emits_debug_event() {
    let (result, logs) = capture(|| Choice2::<u8, bool>::case_2(true).matcher::<u8>().case_1(|n| n).finish());

    assert!(result.is_err());
    assert!(logs.contains("choice matcher finished without a handler"));
    assert!(logs.contains("index=2"));
}

#[cfg(feature = "memo")]
#[rstest]
fn test_memo_miss_and_eviction_emit_trace_events() {
    let (_, logs) = capture(|| {
        let cache = fun::memo::memoize(|key: u8| key, 1);
        cache.get(1);
        cache.get(1);
        cache.get(2);
    });

    assert_eq!(logs.matches("memo cache miss").count(), 2);
    assert_eq!(logs.matches("memo cache evicted its oldest entry").count(), 1);
}
