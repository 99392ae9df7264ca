//! Puts solver results back into command-line order
//!
//! Inputs finish in any order when solved in parallel. Results are held in a
//! min-heap until every earlier (input, part) has been printed, while a
//! second min-heap tracks the keys still outstanding.

use crate::executor::{SolverResult, WorkItem};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Where a result belongs in the output
///
/// `input` is the position of the input on the command line, so two inputs
/// with the same label still sort apart. Ordered by input, then part.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub input: usize,
    pub part: u8,
}

impl ResultKey {
    /// Keys of every part requested for one input
    pub fn of_work_item(work: &WorkItem) -> impl Iterator<Item = ResultKey> + '_ {
        work.parts.clone().map(|part| ResultKey {
            input: work.input,
            part,
        })
    }
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            input: r.input,
            part: r.part,
        }
    }
}

/// Wrapper for min-heap ordering of SolverResult
struct OrderedResult(SolverResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // reversed for a min-heap
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Aggregator that buffers results and emits them in sorted order
pub struct ResultAggregator {
    /// Min-heap of expected keys (next to output is at top)
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Min-heap of received results waiting to be output
    pending: BinaryHeap<OrderedResult>,
    /// Input labels by command-line position
    labels: Vec<String>,
}

impl ResultAggregator {
    /// Expect one result per requested part of every work item
    pub fn new(work_items: &[WorkItem]) -> Self {
        let mut labels = Vec::with_capacity(work_items.len());
        let mut expected = BinaryHeap::new();
        for work in work_items {
            if labels.len() <= work.input {
                labels.resize(work.input + 1, String::new());
            }
            labels[work.input] = work.source.label();
            expected.extend(ResultKey::of_work_item(work).map(Reverse));
        }
        Self {
            expected,
            pending: BinaryHeap::new(),
            labels,
        }
    }

    /// Add a result and return any results ready for output (in order)
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) != *next_expected {
                break;
            }
            self.expected.pop();
            if let Some(OrderedResult(result)) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Drain remaining results in order (for final output)
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        self.expected.retain(|Reverse(key)| {
            results
                .binary_search_by_key(key, |r| ResultKey::from(r))
                .is_err()
        });
        results
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }

    /// `<label> part <n>` for each expected result not yet emitted, in order
    pub fn missing(&self) -> Vec<String> {
        let mut keys: Vec<ResultKey> = self.expected.iter().map(|Reverse(k)| *k).collect();
        keys.sort();
        keys.into_iter()
            .map(|key| {
                let label = self.labels.get(key.input).map_or("?", String::as_str);
                format!("{} part {}", label, key.part)
            })
            .collect()
    }
}
