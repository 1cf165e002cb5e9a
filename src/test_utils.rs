#![expect(
    clippy::unwrap_used,
    reason = "Test utilities use .unwrap() for brevity"
)]

//! Shared test utilities for stepper unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;
use tempfile::TempDir;

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Collects every value delivered to a change callback.
///
/// Clones share the same log, so one handle can be moved into the controller
/// while the test keeps another for assertions.
#[derive(Debug, Clone, Default)]
pub struct NotificationRecorder {
    values: Rc<RefCell<Vec<f64>>>,
}

impl NotificationRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Callback that appends to this recorder's log
    pub fn block(&self) -> impl FnMut(f64) + 'static {
        let values = Rc::clone(&self.values);
        move |value| values.borrow_mut().push(value)
    }

    /// Values received so far, oldest first
    pub fn values(&self) -> Vec<f64> {
        self.values.borrow().clone()
    }
}
