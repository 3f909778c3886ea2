//! Priority frontier for the label-setting search.
//!
//! A min-ordered binary heap of candidate ports keyed by estimated total.
//! Ports may be pushed several times; stale entries are skipped by the
//! caller when popped (lazy deletion).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::network::PortId;

/// A candidate port waiting to be settled.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub port: PortId,
    /// Best metric known when this entry was pushed.
    pub metric: i64,
    /// Metric plus heuristic; the ordering key.
    pub estimate: f64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap
        other.estimate.total_cmp(&self.estimate)
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, port: PortId, metric: i64, estimate: f64) {
        self.heap.push(FrontierEntry {
            port,
            metric,
            estimate,
        });
    }

    /// Removes the entry with the smallest estimate.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_smallest_estimate_first() {
        let mut f = Frontier::new();
        f.push(PortId(0), 30, 30.0);
        f.push(PortId(1), 10, 10.0);
        f.push(PortId(2), 5, 20.5);

        let order: Vec<_> = std::iter::from_fn(|| f.pop()).map(|e| e.port).collect();
        assert_eq!(order, vec![PortId(1), PortId(2), PortId(0)]);
        assert_eq!(f.len(), 0);
    }

    #[test]
    fn ranks_by_estimate_not_metric() {
        let mut f = Frontier::new();
        f.push(PortId(0), 1, 100.0);
        f.push(PortId(1), 50, 50.0);
        assert_eq!(f.pop().map(|e| e.port), Some(PortId(1)));
    }

    #[test]
    fn keeps_duplicate_ports() {
        let mut f = Frontier::new();
        f.push(PortId(3), 20, 20.0);
        f.push(PortId(3), 15, 15.0);
        assert_eq!(f.len(), 2);

        let first = f.pop().unwrap();
        assert_eq!((first.port, first.metric), (PortId(3), 15));
        let second = f.pop().unwrap();
        assert_eq!((second.port, second.metric), (PortId(3), 20));
    }

    #[test]
    fn empty_frontier_pops_none() {
        let mut f = Frontier::new();
        assert!(f.pop().is_none());
        assert_eq!(f.len(), 0);
    }
}
