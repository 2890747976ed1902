//! Node-count instrumentation for measuring search performance.

/// Counts node visits during a search. Purely a side channel: search results
/// never depend on it.
///
/// Top-level searches reset the counter destructively before running; a
/// caller wanting cumulative counts must snapshot [`NodeCounter::count`]
/// between searches. Not safe for concurrent ticking; parallel benchmarks
/// need one counter per search.
#[derive(Debug, Default, Clone)]
pub struct NodeCounter {
    nodes: u64,
}

impl NodeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn tick(&mut self) {
        self.nodes += 1;
    }

    pub fn reset(&mut self) {
        self.nodes = 0;
    }

    pub fn count(&self) -> u64 {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_and_reset() {
        let mut counter = NodeCounter::new();
        assert_eq!(counter.count(), 0);
        counter.tick();
        counter.tick();
        assert_eq!(counter.count(), 2);
        counter.reset();
        assert_eq!(counter.count(), 0);
    }
}
