//! Prometheus metrics (lock-free atomics, zero allocation on hot path).

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

pub static METRICS: Metrics = Metrics::new();

pub struct Metrics {
    // --- Lookups ---
    pub lookups_total: AtomicU64,
    pub lookups_not_found: AtomicU64,
    pub listings_total: AtomicU64,
    pub listing_degraded_entries: AtomicU64,

    // --- Explorer ---
    pub explorer_requests: AtomicU64,
    pub explorer_errors: AtomicU64,

    // --- Latency (μs, updated via CAS) ---
    pub explorer_duration_us_sum: AtomicU64,
    pub explorer_duration_us_max: AtomicU64,
}

impl Metrics {
    const fn new() -> Self {
        Self {
            lookups_total: AtomicU64::new(0),
            lookups_not_found: AtomicU64::new(0),
            listings_total: AtomicU64::new(0),
            listing_degraded_entries: AtomicU64::new(0),
            explorer_requests: AtomicU64::new(0),
            explorer_errors: AtomicU64::new(0),
            explorer_duration_us_sum: AtomicU64::new(0),
            explorer_duration_us_max: AtomicU64::new(0),
        }
    }

    pub fn record_explorer_duration(&self, start: Instant) {
        let us = start.elapsed().as_micros() as u64;
        self.explorer_duration_us_sum.fetch_add(us, Ordering::Relaxed);
        // CAS loop for max tracking
        let mut cur = self.explorer_duration_us_max.load(Ordering::Relaxed);
        while us > cur {
            match self.explorer_duration_us_max.compare_exchange_weak(
                cur,
                us,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => break,
                Err(actual) => cur = actual,
            }
        }
    }

    /// Render in Prometheus text exposition format.
    pub fn render(&self, static_certificates: usize) -> String {
        let lookups = self.lookups_total.load(Ordering::Relaxed);
        let not_found = self.lookups_not_found.load(Ordering::Relaxed);
        let listings = self.listings_total.load(Ordering::Relaxed);
        let degraded = self.listing_degraded_entries.load(Ordering::Relaxed);
        let requests = self.explorer_requests.load(Ordering::Relaxed);
        let errors = self.explorer_errors.load(Ordering::Relaxed);
        let dur_sum = self.explorer_duration_us_sum.load(Ordering::Relaxed);
        let dur_max = self.explorer_duration_us_max.swap(0, Ordering::Relaxed);

        // Convert μs to seconds for Prometheus conventions
        let dur_sum_s = dur_sum as f64 / 1_000_000.0;
        let dur_max_s = dur_max as f64 / 1_000_000.0;

        format!(
            "\
# HELP retirement_lookups_total Explorer certificate lookups.\n\
# TYPE retirement_lookups_total counter\n\
retirement_lookups_total {lookups}\n\
# HELP retirement_lookups_not_found_total Lookups answered with not found.\n\
# TYPE retirement_lookups_not_found_total counter\n\
retirement_lookups_not_found_total {not_found}\n\
# HELP retirement_listings_total Certificate index requests.\n\
# TYPE retirement_listings_total counter\n\
retirement_listings_total {listings}\n\
# HELP retirement_listing_degraded_entries_total Index rows rendered with placeholders.\n\
# TYPE retirement_listing_degraded_entries_total counter\n\
retirement_listing_degraded_entries_total {degraded}\n\
# HELP retirement_explorer_requests_total Explorer API requests.\n\
# TYPE retirement_explorer_requests_total counter\n\
retirement_explorer_requests_total {requests}\n\
# HELP retirement_explorer_errors_total Explorer transport failures.\n\
# TYPE retirement_explorer_errors_total counter\n\
retirement_explorer_errors_total {errors}\n\
# HELP retirement_explorer_duration_seconds_sum Total explorer request time (seconds).\n\
# TYPE retirement_explorer_duration_seconds_sum counter\n\
retirement_explorer_duration_seconds_sum {dur_sum_s:.6}\n\
# HELP retirement_explorer_duration_seconds_max Max explorer request time since last scrape (seconds).\n\
# TYPE retirement_explorer_duration_seconds_max gauge\n\
retirement_explorer_duration_seconds_max {dur_max_s:.6}\n\
# HELP retirement_static_certificates Static certificate files available.\n\
# TYPE retirement_static_certificates gauge\n\
retirement_static_certificates {static_certificates}\n"
        )
    }
}
