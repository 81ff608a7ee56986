//! Store call metrics.

use metrics::{counter, histogram};
use std::time::Instant;

/// Record the duration of one store call.
pub fn record_store_call_duration(operation: &str, outcome: &str, duration_secs: f64) {
    histogram!(
        "store_call_duration_seconds",
        "operation" => operation.to_string(),
        "outcome" => outcome.to_string()
    )
    .record(duration_secs);
}

/// Count a log cell that could not be read as-is and fell back to a default.
pub fn record_coercion_fallback(column: &'static str) {
    counter!("log_coercion_fallbacks_total", "column" => column).increment(1);
}

/// Times one store call.
///
/// Usage:
/// ```ignore
/// let timer = StoreTimer::new("get_all_rows");
/// let result = store.get_all_rows().await;
/// timer.record(result.is_ok());
/// ```
pub struct StoreTimer {
    operation: &'static str,
    start: Instant,
}

impl StoreTimer {
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: Instant::now(),
        }
    }

    /// Record the elapsed duration, labelled by whether the call succeeded.
    pub fn record(self, ok: bool) {
        let outcome = if ok { "ok" } else { "error" };
        record_store_call_duration(self.operation, outcome, self.start.elapsed().as_secs_f64());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_timer_creation() {
        let timer = StoreTimer::new("append_row");
        assert_eq!(timer.operation, "append_row");
    }

    #[test]
    fn test_record_without_recorder_is_noop() {
        StoreTimer::new("get_all_rows").record(true);
        record_coercion_fallback("數量");
    }
}
