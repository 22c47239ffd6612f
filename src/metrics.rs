use std::sync::atomic::{AtomicU64, Ordering};

/// Counts requests made to the `/app` file server.
///
/// One instance is created at startup and shared through `ApiContext`.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicU64,
}

impl HitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) {
        self.hits.fetch_add(1, Ordering::SeqCst);
    }

    pub fn read(&self) -> u64 {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.hits.store(0, Ordering::SeqCst);
    }
}
