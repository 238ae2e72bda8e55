//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Catalog gateway calls (counts, durations)
//! - Ratings gateway calls
//! - Result page sizes after post-processing

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounterVec, Opts};

/// Catalog requests total by operation and outcome.
pub static CATALOG_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("marquee_catalog_requests_total", "Total catalog requests"),
        &["operation", "status"], // status: "success", "error"
    )
    .unwrap()
});

/// Catalog request duration in seconds.
pub static CATALOG_REQUEST_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "marquee_catalog_request_duration_seconds",
            "Duration of catalog requests",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["operation"],
    )
    .unwrap()
});

/// Ratings requests total by outcome.
pub static RATINGS_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("marquee_ratings_requests_total", "Total ratings requests"),
        &["status"],
    )
    .unwrap()
});

/// Items surviving post-processing per browse page.
pub static PAGE_RESULTS: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "marquee_page_results",
            "Number of displayable items per result page",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 15.0, 20.0]),
        &["mode"], // "discover", "search"
    )
    .unwrap()
});

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(CATALOG_REQUESTS.clone()),
        Box::new(CATALOG_REQUEST_DURATION.clone()),
        Box::new(RATINGS_REQUESTS.clone()),
        Box::new(PAGE_RESULTS.clone()),
    ]
}
