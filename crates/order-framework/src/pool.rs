//! # Intern Pool
//!
//! Flyweight storage for string-like values referenced by many owners. Interning the same
//! text twice hands back the same shared allocation, so equality can be decided by pointer.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::trace;

/// A deduplicating registry of shared strings.
///
/// The pool only grows; there is no removal.
#[derive(Debug, Default)]
pub struct InternPool {
    entries: HashSet<Arc<str>>,
}

impl InternPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical shared value for `value`, creating it on first use.
    pub fn intern(&mut self, value: &str) -> Arc<str> {
        if let Some(existing) = self.entries.get(value) {
            return Arc::clone(existing);
        }
        let fresh: Arc<str> = Arc::from(value);
        self.entries.insert(Arc::clone(&fresh));
        trace!(value, size = self.entries.len(), "Interned");
        fresh
    }

    /// Number of distinct values held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_shares_allocation() {
        let mut pool = InternPool::new();
        let a = pool.intern("Mushrooms");
        let b = pool.intern("Mushrooms");

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_distinct_text_grows_pool() {
        let mut pool = InternPool::new();
        let a = pool.intern("BBQ Sauce");
        let b = pool.intern("Mayonnaise");

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 2);
        assert!(pool.contains("BBQ Sauce"));
        assert!(!pool.contains("Onions"));
    }
}
