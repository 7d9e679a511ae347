//! Metrics recording for store operations.

use std::time::Instant;

/// Records operation metrics for a store operation.
///
/// Two metrics are recorded per operation:
/// 1. `record_store_operations_total` - counter by operation and status
/// 2. `record_store_operation_duration_ms` - latency histogram
pub(crate) fn record_operation_metrics(
    operation: &'static str,
    start: Instant,
    status: &'static str,
) {
    metrics::counter!(
        "record_store_operations_total",
        "operation" => operation,
        "status" => status
    )
    .increment(1);
    metrics::histogram!(
        "record_store_operation_duration_ms",
        "operation" => operation,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64() * 1000.0);
}
