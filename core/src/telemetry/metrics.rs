use std::sync::atomic::{AtomicUsize, Ordering};

/// Request and failure counters shared by every clone of an `ApiClient`.
///
/// The counters are independent; a snapshot taken while a request is in
/// flight may see the request without its failure.
#[derive(Debug, Default)]
pub struct FetchStats {
    requests: AtomicUsize,
    failures: AtomicUsize,
}

impl FetchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns `(requests, failures)`.
    pub fn snapshot(&self) -> (usize, usize) {
        (
            self.requests.load(Ordering::Relaxed),
            self.failures.load(Ordering::Relaxed),
        )
    }
}
