//! Failure sinks for the public parsing entry points
//!
//! The parser calls its observer exactly once for each parse that fails,
//! then returns an empty collection to the caller.

use crate::Error;
use std::cell::RefCell;
use tracing::error;

/// Receives the reason for every fatal parse failure
pub trait Observer {
    fn on_failure(&self, error: &Error);
}

/// Logs failures as `tracing` error events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_failure(&self, err: &Error) {
        error!("SimpleNem12 parsing failed. Cause : {}", err);
    }
}

/// Keeps failure reasons in memory for later inspection
#[derive(Debug, Default)]
pub struct RecordingObserver {
    reasons: RefCell<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reasons recorded so far, oldest first
    pub fn reasons(&self) -> Vec<String> {
        self.reasons.borrow().clone()
    }

    /// Most recent reason, if any failure was recorded
    pub fn last_reason(&self) -> Option<String> {
        self.reasons.borrow().last().cloned()
    }

    pub fn failure_count(&self) -> usize {
        self.reasons.borrow().len()
    }

    pub fn clear(&self) {
        self.reasons.borrow_mut().clear();
    }
}

impl Observer for RecordingObserver {
    fn on_failure(&self, error: &Error) {
        self.reasons.borrow_mut().push(error.reason());
    }
}

impl<O: Observer + ?Sized> Observer for &O {
    fn on_failure(&self, error: &Error) {
        (**self).on_failure(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_collects_reasons() {
        let observer = RecordingObserver::new();
        assert_eq!(observer.failure_count(), 0);
        assert_eq!(observer.last_reason(), None);

        observer.on_failure(&Error::validation("first"));
        observer.on_failure(&Error::date_parsing("2016111113"));

        assert_eq!(observer.failure_count(), 2);
        assert_eq!(
            observer.reasons(),
            vec![
                "first".to_string(),
                "Input date 2016111113 cannot be parsed".to_string()
            ]
        );

        observer.clear();
        assert_eq!(observer.failure_count(), 0);
    }

    #[test]
    fn test_observer_by_reference() {
        let observer = RecordingObserver::new();
        let by_ref = &observer;
        by_ref.on_failure(&Error::file_not_found("missing.csv"));
        assert_eq!(
            observer.last_reason(),
            Some("The File Does Not Exists".to_string())
        );
    }

    #[test]
    fn test_tracing_observer_does_not_panic() {
        TracingObserver.on_failure(&Error::validation("reason"));
    }
}
