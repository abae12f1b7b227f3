//! Warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the tree builder and the fetcher to report recoverable problems.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<BTreeSet<String>> = Mutex::new(BTreeSet::new());

/// Whether warnings are printed with ANSI colors.
static COLORED: AtomicBool = AtomicBool::new(true);

/// Warn about a recoverable problem (prints once per unique message)
///
/// # Example
/// ```
/// use thicket_common::warning::warn_once;
///
/// warn_once("Net", "request failed: connection refused");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if !first_occurrence(component, message) {
        return;
    }

    let line = format!("[Thicket {component}] warning: {message}");
    if COLORED.load(Ordering::Relaxed) {
        eprintln!("{}", line.yellow());
    } else {
        eprintln!("{line}");
    }
}

/// Record a warning key, returning `true` the first time it is seen.
fn first_occurrence(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(format!("[{component}] {message}"))
}

/// Clear all recorded warnings (call before processing a new document).
pub fn clear_warnings() {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clear();
}

/// Enable or disable colored warning output.
pub fn set_colored(enabled: bool) {
    COLORED.store(enabled, Ordering::Relaxed);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_warning_is_suppressed() {
        assert!(first_occurrence("Test", "duplicate-check message"));
        assert!(!first_occurrence("Test", "duplicate-check message"));
        // Same message from another component is a different warning.
        assert!(first_occurrence("Other", "duplicate-check message"));
    }
}
