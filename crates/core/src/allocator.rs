//! Per-resource index counters.
//!
//! Every primary compile that extracts styles takes the next index for its
//! resource, so repeated compiles of one file (watch rebuilds, several
//! instances) never collide on a synthetic path. Counters only grow.

use dashmap::DashMap;

/// Normalize path separators to `/`.
pub fn posixify(path: &str) -> String {
    path.replace('\\', "/")
}

#[derive(Debug, Default)]
pub struct IndexAllocator {
    counters: DashMap<String, u64>,
}

impl IndexAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next index for `resource`, starting at 1.
    pub fn next(&self, resource: &str) -> u64 {
        let mut counter = self.counters.entry(posixify(resource)).or_insert(0);
        *counter += 1;
        *counter
    }

    /// The most recently issued index for `resource`, if any.
    pub fn current(&self, resource: &str) -> Option<u64> {
        self.counters.get(&posixify(resource)).map(|c| *c)
    }
}
