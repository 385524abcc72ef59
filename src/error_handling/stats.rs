//! Service statistics tracking.
//!
//! Thread-safe counters for created reports and categorized failures,
//! shared across request tasks and surfaced on the status endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ErrorType;

/// Thread-safe service statistics tracker.
///
/// Tracks successful report creations and failures by category using atomic
/// counters, allowing concurrent access from multiple request tasks. All
/// counters are initialized to zero on creation.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across tasks using `Arc`.
pub struct ServiceStats {
    reports_created: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl ServiceStats {
    /// Creates a new tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        ServiceStats {
            reports_created: AtomicUsize::new(0),
            errors,
        }
    }

    /// Records a successfully persisted report.
    pub fn record_created(&self) {
        self.reports_created.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment a failure counter.
    ///
    /// All error types are initialized in the constructor, so the lookup only
    /// misses if a variant was added without rebuilding the map. That is a
    /// bug worth logging, not panicking over.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment counter for '{}' which is not in the map. \
                 This indicates a bug in ServiceStats initialization.",
                error.as_str()
            );
        }
    }

    /// Number of reports successfully created.
    pub fn created_count(&self) -> usize {
        self.reports_created.load(Ordering::Relaxed)
    }

    /// Count for a single failure category.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Total failures across all categories.
    pub fn total_errors(&self) -> usize {
        self.errors
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    /// Total payload validation rejections.
    pub fn validation_failures(&self) -> usize {
        ErrorType::iter()
            .filter(|e| e.is_validation())
            .map(|e| self.get_error_count(e))
            .sum()
    }
}

impl Default for ServiceStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zeroed() {
        let stats = ServiceStats::new();
        assert_eq!(stats.created_count(), 0);
        assert_eq!(stats.total_errors(), 0);
        for error in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error), 0);
        }
    }

    #[test]
    fn test_increment_and_read_back() {
        let stats = ServiceStats::new();
        stats.increment_error(ErrorType::InvalidTactics);
        stats.increment_error(ErrorType::InvalidTactics);
        stats.increment_error(ErrorType::PersistenceError);
        stats.record_created();

        assert_eq!(stats.get_error_count(ErrorType::InvalidTactics), 2);
        assert_eq!(stats.get_error_count(ErrorType::PersistenceError), 1);
        assert_eq!(stats.total_errors(), 3);
        assert_eq!(stats.created_count(), 1);
    }

    #[test]
    fn test_validation_failures_only_counts_validation_types() {
        let stats = ServiceStats::new();
        stats.increment_error(ErrorType::InvalidCoordinates);
        stats.increment_error(ErrorType::InvalidSourceUrl);
        stats.increment_error(ErrorType::Unauthenticated);
        stats.increment_error(ErrorType::PersistenceError);

        assert_eq!(stats.validation_failures(), 2);
        assert_eq!(stats.total_errors(), 4);
    }

    #[test]
    fn test_concurrent_increments() {
        use std::sync::Arc;

        let stats = Arc::new(ServiceStats::new());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let stats = Arc::clone(&stats);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    stats.increment_error(ErrorType::InvalidTactics);
                    stats.record_created();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stats.get_error_count(ErrorType::InvalidTactics), 800);
        assert_eq!(stats.created_count(), 800);
    }
}
