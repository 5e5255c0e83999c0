use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Histogram, register_counter, register_counter_vec, register_histogram,
};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("study_notes_requests_total", "Total number of generate requests")
            .unwrap();
    pub static ref GENERATION_FAILURES: CounterVec = register_counter_vec!(
        "study_notes_generation_failures_total",
        "Failed generate requests by error kind",
        &["kind"]
    )
    .unwrap();
    pub static ref UPSTREAM_LATENCY: Histogram = register_histogram!(
        "study_notes_upstream_latency_seconds",
        "Completion provider call latency in seconds"
    )
    .unwrap();
}
