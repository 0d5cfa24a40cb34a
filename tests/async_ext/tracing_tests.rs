//! Tests for the tracing wrapper.

use outcome_rail::async_ext::FutureTraceExt;
use outcome_rail::prelude_async::*;

#[tokio::test]
async fn traced_future_passes_the_outcome_through() {
    let outcome = AsyncOutcome::<i32, &str>::success(1)
        .trace_outcome("lookup")
        .await;
    assert_eq!(outcome, Success(1));

    let outcome = AsyncOutcome::<i32, &str>::failure("down")
        .trace_outcome("lookup")
        .await;
    assert_eq!(outcome, Failure("down"));
}

#[tokio::test]
async fn traced_future_captures_the_attaching_span() {
    let span = tracing::info_span!("request", id = 7);
    // The span is captured when the wrapper is attached, not when polled.
    let traced = {
        let _entered = span.enter();
        async { Ok::<_, &str>(9) }.into_outcome().trace_outcome("handler")
    };

    assert_eq!(traced.await, Success(9));
}
