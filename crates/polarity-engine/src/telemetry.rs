//! Metric names and descriptions
//!
//! The engine only records; installing a recorder/exporter is up to the host.

/// Messages evaluated, labelled by model
pub const MESSAGES_TOTAL: &str = "polarity_messages_total";

/// Clauses scored per message
pub const CLAUSES_PER_MESSAGE: &str = "polarity_clauses_per_message";

/// Classifier latency in microseconds
pub const CLASSIFY_LATENCY_US: &str = "polarity_classify_latency_us";

/// Register descriptions for every engine metric with the installed recorder
pub fn describe_metrics() {
    metrics::describe_counter!(MESSAGES_TOTAL, "Total number of messages evaluated by model");
    metrics::describe_histogram!(
        CLAUSES_PER_MESSAGE,
        metrics::Unit::Count,
        "Number of clauses scored per message"
    );
    metrics::describe_histogram!(
        CLASSIFY_LATENCY_US,
        metrics::Unit::Microseconds,
        "Sentiment classifier latency in microseconds"
    );
}
