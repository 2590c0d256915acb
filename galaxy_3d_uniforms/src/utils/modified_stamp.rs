use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL_STAMP: AtomicU64 = AtomicU64::new(0);

/// Monotonic modification stamp.
///
/// Every `modified()` call draws from one process-wide counter, so stamps
/// taken on different objects can be compared: a consumer that recorded
/// stamp `s` knows the object changed since then iff `object.get() > s`.
/// A fresh stamp reads 0, which is older than any modification.
///
/// # Example
///
/// ```ignore
/// let mut a = ModifiedStamp::new();
/// let mut b = ModifiedStamp::new();
/// a.modified();
/// b.modified();
/// assert!(b.get() > a.get());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModifiedStamp {
    value: u64,
}

impl ModifiedStamp {
    /// Create a stamp that has never been modified
    pub fn new() -> Self {
        Self { value: 0 }
    }

    /// Record a modification; the new value is greater than every stamp taken so far
    pub fn modified(&mut self) {
        self.value = GLOBAL_STAMP.fetch_add(1, Ordering::Relaxed) + 1;
    }

    /// Current stamp value
    pub fn get(&self) -> u64 {
        self.value
    }
}

#[cfg(test)]
#[path = "modified_stamp_tests.rs"]
mod tests;
